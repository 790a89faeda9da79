use tracing::{debug, warn};

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("SYSTEM: {} - {}", event, d),
        None => debug!("SYSTEM: {}", event),
    }
}

/// Logs validation errors with consistent format
pub fn log_validation_error(field: &str, value: &str, error: &str) {
    warn!("VALIDATION_ERROR: {} '{}' invalid: {}", field, value, error);
}
