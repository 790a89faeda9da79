/// Consistent-format `tracing` helpers
pub mod logging;
/// Syntactic checks for timezone identifiers
pub mod validation;
