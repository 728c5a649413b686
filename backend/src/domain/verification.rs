//! Email verification codes and their in-process store.
//!
//! The store is the only shared mutable state in the registration workflow.
//! It is an explicit component instance constructed once at process start and
//! injected into the registration service, which keeps tests isolated by
//! giving each test a fresh instance.
//!
//! Known limitations, preserved deliberately: entries never expire, a code
//! remains valid for repeated checks until overwritten by a new issuance, and
//! a multi-instance deployment does not share verification state.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::EmailAddress;

/// Exact length of a verification code.
pub const CODE_LENGTH: usize = 6;

/// Validation error returned by [`VerificationCode::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeMalformed;

impl fmt::Display for CodeMalformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "verification code must be exactly {CODE_LENGTH} digits")
    }
}

impl std::error::Error for CodeMalformed {}

/// Raised by [`VerificationCodeStore::check`] when no code was ever issued
/// for the address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeNotIssued;

impl fmt::Display for CodeNotIssued {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no verification code has been issued for this address")
    }
}

impl std::error::Error for CodeNotIssued {}

/// Six ASCII digits, leading zeros allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VerificationCode(String);

impl VerificationCode {
    /// Validate and construct a [`VerificationCode`] from existing digits.
    pub fn new(code: impl Into<String>) -> Result<Self, CodeMalformed> {
        let code = code.into();
        if code.len() != CODE_LENGTH || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodeMalformed);
        }
        Ok(Self(code))
    }

    /// Draw a fresh code, each digit independently uniform over 0–9.
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let digits = (0..CODE_LENGTH)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();
        Self(digits)
    }

    /// Borrow the underlying digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<VerificationCode> for String {
    fn from(value: VerificationCode) -> Self {
        value.0
    }
}

impl TryFrom<String> for VerificationCode {
    type Error = CodeMalformed;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Process-wide mapping from email address to the currently valid code.
///
/// At most one entry exists per address; issuing again silently replaces the
/// previous entry. `issue` and `check` for the same address are linearizable:
/// the mutex makes every call observe a fully applied prior state.
#[derive(Debug, Default)]
pub struct VerificationCodeStore {
    entries: Mutex<HashMap<String, VerificationCode>>,
}

impl VerificationCodeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, VerificationCode>> {
        // A poisoned map is still structurally sound; recover the guard.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Generate a fresh code for the address, replacing any prior entry.
    pub fn issue(&self, email: &EmailAddress) -> VerificationCode {
        let code = VerificationCode::generate();
        self.entries()
            .insert(email.as_str().to_owned(), code.clone());
        code
    }

    /// Return the currently stored code for the address, if any.
    pub fn peek(&self, email: &EmailAddress) -> Option<VerificationCode> {
        self.entries().get(email.as_str()).cloned()
    }

    /// Compare a candidate against the stored code.
    ///
    /// Exact string equality, no normalization. The entry is not removed on
    /// either outcome; the code stays valid until the next [`issue`] for the
    /// same address.
    ///
    /// [`issue`]: VerificationCodeStore::issue
    pub fn check(&self, email: &EmailAddress, candidate: &str) -> Result<bool, CodeNotIssued> {
        self.entries()
            .get(email.as_str())
            .map(|stored| stored.as_str() == candidate)
            .ok_or(CodeNotIssued)
    }
}
