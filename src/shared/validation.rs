use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Regex for validating phone numbers on quote requests
    /// Optional leading '+', then digits with single spaces, hyphens, dots or parentheses
    /// - Valid: "+44 20 7946 0958", "(555) 123-4567", "0812.3456.7890"
    /// - Invalid: "phone", "12", "+44--20", "555 1234 ext. 9"
    pub static ref PHONE_REGEX: Regex =
        Regex::new(r"^\+?(?:\(\d{1,4}\)|\d)(?:[ .\-]?(?:\(\d{1,4}\)|\d)){5,18}$").unwrap();
}

/// Rejects empty and whitespace-only text
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_regex_valid() {
        assert!(PHONE_REGEX.is_match("+44 20 7946 0958"));
        assert!(PHONE_REGEX.is_match("(555) 123-4567"));
        assert!(PHONE_REGEX.is_match("0812.3456.7890"));
        assert!(PHONE_REGEX.is_match("5551234567"));
    }

    #[test]
    fn test_phone_regex_invalid() {
        assert!(!PHONE_REGEX.is_match("phone"));
        assert!(!PHONE_REGEX.is_match("12")); // too short
        assert!(!PHONE_REGEX.is_match("+44--20 7946")); // double separator
        assert!(!PHONE_REGEX.is_match("555 1234 ext. 9"));
        assert!(!PHONE_REGEX.is_match(""));
    }

    #[test]
    fn test_not_blank() {
        assert!(validate_not_blank("Spices").is_ok());
        assert!(validate_not_blank("  Spices ").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("\t\n").is_err());
    }
}
