use anyhow::{anyhow, Result};

use crate::utils::logging::log_validation_error;

const MAX_IDENTIFIER_LEN: usize = 64;

/// Checks that `identifier` has the shape of an IANA `Area/Location` name.
///
/// This is a syntax check only; the identifier is not looked up anywhere.
pub fn validate_timezone_identifier(identifier: &str) -> Result<()> {
    if identifier.trim().is_empty() {
        return Err(anyhow!("Timezone identifier cannot be empty"));
    }

    if identifier.trim() != identifier {
        return Err(anyhow!("Timezone identifier cannot have surrounding whitespace"));
    }

    if identifier.len() > MAX_IDENTIFIER_LEN {
        return Err(anyhow!(
            "Timezone identifier cannot be longer than {} characters",
            MAX_IDENTIFIER_LEN
        ));
    }

    if !identifier.contains('/') {
        return Err(anyhow!("Timezone identifier must have the form Area/Location"));
    }

    for segment in identifier.split('/') {
        validate_segment(segment)?;
    }

    // Areas are capitalized region names (America, Europe, ...)
    if !identifier.starts_with(|c: char| c.is_ascii_uppercase()) {
        return Err(anyhow!("Timezone area must start with an uppercase letter"));
    }

    Ok(())
}

fn validate_segment(segment: &str) -> Result<()> {
    if segment.is_empty() {
        return Err(anyhow!("Timezone identifier cannot contain empty segments"));
    }

    if !segment.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(anyhow!("Timezone segment '{}' must start with a letter", segment));
    }

    if !segment
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+'))
    {
        return Err(anyhow!(
            "Timezone segment '{}' can only contain letters, digits, '_', '-' and '+'",
            segment
        ));
    }

    Ok(())
}

/// Like [`validate_timezone_identifier`], logging the reason on rejection
pub fn is_valid_timezone_identifier(identifier: &str) -> bool {
    match validate_timezone_identifier(identifier) {
        Ok(()) => true,
        Err(e) => {
            log_validation_error("timezone", identifier, &e.to_string());
            false
        }
    }
}
