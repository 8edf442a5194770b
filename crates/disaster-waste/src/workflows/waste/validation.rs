//! Input rules shared by the domain constructors and both services.

use tracing::warn;

use super::domain::ValidationError;

pub(crate) fn non_blank(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        warn!(field, "validation failed: blank value");
        return Err(ValidationError::Blank { field });
    }
    Ok(())
}

/// Returns the trimmed value, rejecting blank input.
pub(crate) fn trimmed(field: &'static str, value: &str) -> Result<String, ValidationError> {
    non_blank(field, value)?;
    Ok(value.trim().to_string())
}

/// Volume must be finite and strictly positive. Zero is rejected too.
pub(crate) fn volume(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        warn!(value, "validation failed: volume must be greater than zero");
        return Err(ValidationError::NonPositiveVolume { value });
    }
    Ok(())
}

/// Severity levels start at 1 and must fit a `u32`.
pub(crate) fn level(field: &'static str, value: i64) -> Result<u32, ValidationError> {
    match u32::try_from(value) {
        Ok(level) if level >= 1 => Ok(level),
        _ => {
            warn!(field, value, "validation failed: level out of range");
            Err(ValidationError::LevelOutOfRange { field, value })
        }
    }
}
