//! Seed normalization and validation
//!
//! Canonicalizes caller-supplied seed material (text, numeric or raw bytes)
//! into a trimmed string and enforces the length and printable-character
//! constraints. Every derivation entry point requires a [`ValidatedSeed`],
//! so unvalidated input can never reach the HKDF primitive.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{KdfError, Result};

/// Minimum canonical seed length in characters
pub const MIN_SEED_LEN: usize = 8;

/// Maximum canonical seed length in characters
pub const MAX_SEED_LEN: usize = 256;

// Letters, numbers, punctuation, symbols and separators. Controls and
// unassigned code points reject.
static PRINTABLE_SEED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A[\p{L}\p{N}\p{P}\p{S}\p{Z}]+\z").expect("printable seed character class")
});

/// Caller-supplied seed material before normalization
///
/// A closed set of input shapes dispatched through one normalization
/// function; anything else must be converted to one of these at the edge.
#[derive(Debug, Clone, PartialEq)]
pub enum Seed {
    /// Text seed; leading and trailing whitespace is ignored
    Text(String),
    /// Integer seed, canonicalized to its decimal string
    Integer(i64),
    /// Floating-point seed, canonicalized to its decimal string
    Float(f64),
    /// Raw byte seed, decoded as UTF-8 (invalid sequences are replaced)
    Bytes(Vec<u8>),
}

impl Seed {
    /// Canonical trimmed string form of the seed
    #[must_use]
    pub fn normalize(&self) -> String {
        match self {
            Seed::Text(text) => text.trim().to_owned(),
            Seed::Integer(value) => value.to_string(),
            Seed::Float(value) => value.to_string(),
            Seed::Bytes(bytes) => String::from_utf8_lossy(bytes).trim().to_owned(),
        }
    }

    /// Normalize and validate the seed, first failure wins
    ///
    /// # Errors
    ///
    /// Returns [`KdfError::SeedInvalid`] when the normalized seed is empty,
    /// shorter than [`MIN_SEED_LEN`] characters, longer than
    /// [`MAX_SEED_LEN`] characters, or contains characters outside the
    /// printable Unicode categories (letters, numbers, punctuation, symbols,
    /// separators).
    pub fn validate(&self) -> Result<ValidatedSeed> {
        let normalized = self.normalize();
        if normalized.is_empty() {
            return Err(KdfError::seed_invalid("must not be empty after trimming."));
        }
        let char_count = normalized.chars().count();
        if char_count < MIN_SEED_LEN {
            return Err(KdfError::seed_invalid(
                "must be at least 8 characters long.",
            ));
        }
        if char_count > MAX_SEED_LEN {
            return Err(KdfError::seed_invalid("must not exceed 256 characters."));
        }
        if !PRINTABLE_SEED.is_match(&normalized) {
            return Err(KdfError::seed_invalid("contains non-printable characters."));
        }
        Ok(ValidatedSeed { normalized })
    }
}

impl From<&str> for Seed {
    fn from(text: &str) -> Self {
        Seed::Text(text.to_owned())
    }
}

impl From<String> for Seed {
    fn from(text: String) -> Self {
        Seed::Text(text)
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Seed::Integer(value)
    }
}

impl From<f64> for Seed {
    fn from(value: f64) -> Self {
        Seed::Float(value)
    }
}

impl From<Vec<u8>> for Seed {
    fn from(bytes: Vec<u8>) -> Self {
        Seed::Bytes(bytes)
    }
}

impl From<&[u8]> for Seed {
    fn from(bytes: &[u8]) -> Self {
        Seed::Bytes(bytes.to_vec())
    }
}

/// A seed that passed validation; the only form derivation accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSeed {
    normalized: String,
}

impl ValidatedSeed {
    /// The normalized seed string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// The input key material fed into HKDF extract
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.normalized.as_bytes()
    }

    /// Length of the normalized seed in characters
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.normalized.chars().count()
    }
}

impl fmt::Display for ValidatedSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl AsRef<[u8]> for ValidatedSeed {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
