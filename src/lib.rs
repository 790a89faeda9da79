//! # World Timezones
//!
//! A short, sorted list of representative IANA timezones covering the major
//! world regions, for things like a timezone picker or a scheduling default.
//!
//! ## Features
//! - Seven hand-picked `Area/Location` identifiers
//! - Sorted once on first access, immutable afterwards
//! - Safe to read from any number of threads
//! - Optional syntactic checks for `Area/Location` identifiers
//!
//! This is not a timezone database: nothing here converts times or resolves
//! identifiers.
//!
//! ```
//! let zones = world_timezones::get_timezones();
//! assert_eq!(zones.len(), 7);
//! assert_eq!(zones[0], "America/Los_Angeles");
//! ```

/// The timezone list provider
pub mod services;
/// Logging and validation helpers
pub mod utils;

pub use services::timezone::{get_timezones, timezone_names, TimezoneId};
