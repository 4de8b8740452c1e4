//! Phone number utilities
//!
//! Phone numbers are accepted as opaque strings and never validated. These
//! helpers only exist so numbers can be written to logs without exposing them.

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Mask a phone number for logging, keeping only the last 4 digits (e.g., ****4567)
pub fn mask_phone_number(phone: &str) -> String {
    let digits: Vec<char> = normalize_phone_number(phone)
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();

    if digits.len() > 4 {
        let tail: String = digits[digits.len() - 4..].iter().collect();
        format!("****{}", tail)
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("+1 (555) 123-4567"), "+15551234567");
        assert_eq!(normalize_phone_number("555.123.4567"), "5551234567");
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("+15551234567"), "****4567");
        assert_eq!(mask_phone_number("+55 11 98765-4321"), "****4321");
    }

    #[test]
    fn test_mask_short_or_empty_number() {
        assert_eq!(mask_phone_number("1234"), "****");
        assert_eq!(mask_phone_number(""), "****");
        assert_eq!(mask_phone_number("not-a-number"), "****");
    }
}
