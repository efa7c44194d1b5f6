use crate::errors::AppError;

/// Trims `value` and checks it can be stored as one field of a line:
/// non-empty, free of the separator and of line breaks.
pub fn validate_field(label: &str, value: &str, separator: char) -> Result<String, AppError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(AppError::Validation(format!("{label} must not be empty")));
    }
    if value.contains(separator) {
        return Err(AppError::Validation(format!(
            "{label} must not contain '{separator}'"
        )));
    }
    if value.contains(['\n', '\r']) {
        return Err(AppError::Validation(format!(
            "{label} must fit on a single line"
        )));
    }

    Ok(value.to_string())
}

pub fn validate_name(name: &str, separator: char) -> Result<String, AppError> {
    validate_field("Name", name, separator)
}

pub fn validate_phone(phone: &str, separator: char) -> Result<String, AppError> {
    validate_field("Phone", phone, separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() -> Result<(), AppError> {
        assert_eq!(validate_name("  Ana Maria \n", '!')?, "Ana Maria");
        assert_eq!(validate_phone("\t555 ", '!')?, "555");
        Ok(())
    }

    #[test]
    fn rejects_empty_input() {
        let err = validate_name("   ", '!').unwrap_err();

        assert_eq!(err.to_string(), "Validation failed: Name must not be empty");
    }

    #[test]
    fn rejects_separator() {
        let err = validate_phone("555!1", '!').unwrap_err();

        assert_eq!(err.to_string(), "Validation failed: Phone must not contain '!'");
        assert!(validate_phone("555!1", '|').is_ok());
    }

    #[test]
    fn rejects_inner_line_breaks() {
        assert!(validate_name("Ana\nMaria", '!').is_err());
        assert!(validate_name("Ana\rMaria", '!').is_err());
    }
}
