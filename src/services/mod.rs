/// The sorted list of representative timezones
pub mod timezone;

pub use timezone::*;
