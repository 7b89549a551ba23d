use validator::ValidationError;

use crate::models::region::Region;

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

// ! unset is allowed, anything else must be a known region code
pub fn validate_region(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || Region::parse(value).is_some() {
        return Ok(());
    }
    Err(ValidationError::new("unknown_region"))
}
