use validator::ValidationError;

pub fn validate_display_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::new("name_empty"));
    }

    if trimmed.chars().count() > 100 {
        return Err(ValidationError::new("name_too_long"));
    }

    Ok(())
}
