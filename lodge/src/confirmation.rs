//! Confirmation code generation for bookings.
//!
//! Codes are short opaque identifiers handed to the guest to reference a
//! booking. They are drawn from a cryptographically strong random source so
//! codes cannot be guessed in bulk, but the generator does not guarantee
//! global uniqueness by construction: the store's uniqueness constraint is
//! the authority, and a collision there is a retryable condition.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

/// Alphabet for confirmation codes (uppercase alphanumeric).
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A booking confirmation code.
///
/// Codes are fixed-length strings over `[A-Z0-9]`, assigned at creation and
/// immutable thereafter.
///
/// # Examples
///
/// ```
/// use lodge::ConfirmationCode;
///
/// let code = ConfirmationCode::generate(6);
/// assert_eq!(code.as_str().len(), 6);
/// assert!(code.as_str().chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfirmationCode(String);

impl ConfirmationCode {
    /// The default code length (36^6 ≈ 2.2 billion combinations).
    pub const DEFAULT_LENGTH: usize = 6;

    /// Generates a fresh random code of the given length.
    ///
    /// A zero length falls back to [`Self::DEFAULT_LENGTH`], so a
    /// misconfigured zero never produces an empty code.
    #[must_use]
    pub fn generate(length: usize) -> Self {
        let length = if length == 0 {
            Self::DEFAULT_LENGTH
        } else {
            length
        };
        let mut rng = rand::rng();
        let code = (0..length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    /// Wraps a code loaded from the store.
    #[must_use]
    pub fn from_stored(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfirmationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
