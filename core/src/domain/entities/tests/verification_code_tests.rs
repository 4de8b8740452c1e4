use std::collections::HashSet;

use crate::domain::entities::verification_code::*;

#[test]
fn test_generated_code_is_six_digits_in_range() {
    for _ in 0..1_000 {
        let code = VerificationCode::generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
        assert!(code.chars().all(|c| c.is_ascii_digit()));

        let value: u32 = code.parse().unwrap();
        assert!((CODE_MIN..=CODE_MAX).contains(&value));
    }
}

#[test]
fn test_generated_codes_vary() {
    let codes: HashSet<String> = (0..100).map(|_| VerificationCode::generate_code()).collect();
    assert!(codes.len() > 90);
}

#[test]
fn test_new_code_keeps_ttl() {
    let code = VerificationCode::new(DEFAULT_CODE_TTL_SECONDS);
    assert_eq!(code.ttl_seconds, 300);
    assert_eq!(code.code.len(), CODE_LENGTH);
    assert!(code.code.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_codes_match_is_exact() {
    assert!(codes_match("123456", "123456"));
    assert!(!codes_match("123456", "654321"));
    assert!(!codes_match("123456", "12345"));
    assert!(!codes_match("123456", " 123456"));
    assert!(!codes_match("123456", ""));
}
