//! Candidate identity primitives and their validation rules.
//!
//! The newtypes in this module exist only within a single request's
//! validation scope; nothing here is stored centrally until completion.
//! Constructors are pure and side-effect-free.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Validation errors returned by the identity constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityValidationError {
    UsernameTooShort { min: usize },
    UsernameInvalidCharacters,
    PasswordTooShort { min: usize },
    PasswordMissingDigit,
    PasswordMissingLetter,
    InvalidEmail,
}

impl fmt::Display for IdentityValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UsernameTooShort { min } => {
                write!(f, "user id must be at least {min} characters")
            }
            Self::UsernameInvalidCharacters => {
                write!(f, "user id may only contain letters, numbers, or underscores")
            }
            Self::PasswordTooShort { min } => {
                write!(f, "password must be at least {min} characters")
            }
            Self::PasswordMissingDigit => {
                write!(f, "password must contain at least one digit")
            }
            Self::PasswordMissingLetter => {
                write!(f, "password must contain at least one letter")
            }
            Self::InvalidEmail => write!(f, "email address is not well formed"),
        }
    }
}

impl std::error::Error for IdentityValidationError {}

/// Minimum allowed length for a user id.
pub const USERNAME_MIN: usize = 4;
/// Minimum allowed length for a password.
pub const PASSWORD_MIN: usize = 6;

static USERNAME_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn username_regex() -> &'static Regex {
    USERNAME_RE.get_or_init(|| {
        // Length is enforced separately; this regex constrains allowed characters.
        let pattern = "^[A-Za-z0-9_]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("username regex failed to compile: {error}"))
    })
}

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Syntactic check only, not a deliverability check: local part, domain
        // labels, and a final word-character TLD.
        let pattern = r"^[\w.-]+@[\w.-]+\.\w+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Login identifier chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    ///
    /// Fails when shorter than [`USERNAME_MIN`] characters or when any
    /// character falls outside `[A-Za-z0-9_]`.
    pub fn new(username: impl Into<String>) -> Result<Self, IdentityValidationError> {
        let username = username.into();
        if username.chars().count() < USERNAME_MIN {
            return Err(IdentityValidationError::UsernameTooShort { min: USERNAME_MIN });
        }
        if !username_regex().is_match(&username) {
            return Err(IdentityValidationError::UsernameInvalidCharacters);
        }
        Ok(Self(username))
    }

    /// Borrow the underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = IdentityValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Account password.
///
/// Held in plaintext for the duration of the workflow; the completion stage
/// forwards it unchanged to the user store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Password(String);

impl Password {
    /// Validate and construct a [`Password`].
    ///
    /// Fails when shorter than [`PASSWORD_MIN`] characters, when no digit is
    /// present, or when no alphabetic character is present.
    pub fn new(password: impl Into<String>) -> Result<Self, IdentityValidationError> {
        let password = password.into();
        if password.chars().count() < PASSWORD_MIN {
            return Err(IdentityValidationError::PasswordTooShort { min: PASSWORD_MIN });
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(IdentityValidationError::PasswordMissingDigit);
        }
        if !password.chars().any(char::is_alphabetic) {
            return Err(IdentityValidationError::PasswordMissingLetter);
        }
        Ok(Self(password))
    }

    /// Borrow the underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Password> for String {
    fn from(value: Password) -> Self {
        value.0
    }
}

impl TryFrom<String> for Password {
    type Error = IdentityValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Human readable display name for the user.
///
/// The workflow imposes no constraint on display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    /// Construct a [`DisplayName`].
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Self {
        Self(display_name.into())
    }

    /// Borrow the underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Email address, checked for syntactic well-formedness only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(address: impl Into<String>) -> Result<Self, IdentityValidationError> {
        let address = address.into();
        if !email_regex().is_match(&address) {
            return Err(IdentityValidationError::InvalidEmail);
        }
        Ok(Self(address))
    }

    /// Borrow the underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = IdentityValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests;
