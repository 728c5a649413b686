//! Validation tables for the identity constructors.

use rstest::rstest;

use super::*;

#[rstest]
#[case("alice01")]
#[case("a_b_")]
#[case("ABCD")]
#[case("user_name_2024")]
fn username_accepts_word_characters(#[case] input: &str) {
    assert!(Username::new(input).is_ok());
}

#[rstest]
#[case("", IdentityValidationError::UsernameTooShort { min: USERNAME_MIN })]
#[case("abc", IdentityValidationError::UsernameTooShort { min: USERNAME_MIN })]
#[case("ab cd", IdentityValidationError::UsernameInvalidCharacters)]
#[case("alice!", IdentityValidationError::UsernameInvalidCharacters)]
#[case("user-name", IdentityValidationError::UsernameInvalidCharacters)]
fn username_rejects_short_or_invalid(
    #[case] input: &str,
    #[case] expected: IdentityValidationError,
) {
    assert_eq!(Username::new(input), Err(expected));
}

#[rstest]
#[case("abc123")]
#[case("s3cret_pw")]
fn password_accepts_mixed_content(#[case] input: &str) {
    assert!(Password::new(input).is_ok());
}

#[rstest]
#[case("a1", IdentityValidationError::PasswordTooShort { min: PASSWORD_MIN })]
#[case("123456", IdentityValidationError::PasswordMissingLetter)]
#[case("abcdef", IdentityValidationError::PasswordMissingDigit)]
fn password_rejects_short_or_one_sided(
    #[case] input: &str,
    #[case] expected: IdentityValidationError,
) {
    assert_eq!(Password::new(input), Err(expected));
}

#[rstest]
#[case("a@b.com")]
#[case("alice.smith@example.co.uk")]
#[case("a_b-c@mail-host.org")]
fn email_accepts_well_formed_addresses(#[case] input: &str) {
    assert!(EmailAddress::new(input).is_ok());
}

#[rstest]
#[case("not-an-email")]
#[case("a@b")]
#[case("@example.com")]
#[case("a b@example.com")]
fn email_rejects_malformed_addresses(#[case] input: &str) {
    assert_eq!(
        EmailAddress::new(input),
        Err(IdentityValidationError::InvalidEmail)
    );
}

#[test]
fn username_deserializes_through_validation() {
    let ok: Result<Username, _> = serde_json::from_str("\"alice01\"");
    assert!(ok.is_ok());
    let err: Result<Username, _> = serde_json::from_str("\"a!\"");
    assert!(err.is_err());
}

#[test]
fn validation_errors_read_like_sentences() {
    assert_eq!(
        IdentityValidationError::PasswordMissingDigit.to_string(),
        "password must contain at least one digit"
    );
    assert_eq!(
        IdentityValidationError::InvalidEmail.to_string(),
        "email address is not well formed"
    );
}
