//! Error handling for the derivation engine

use thiserror::Error;

/// Errors surfaced by seed validation, encoding selection and key derivation
#[derive(Debug, Error)]
pub enum KdfError {
    /// Seed failed the normalization/validation checks
    #[error("invalid seed: {reason}")]
    SeedInvalid {
        /// Human-readable reason, suitable for direct display
        reason: String,
    },

    /// Requested output encoding is not supported
    #[error("unsupported encoding \"{requested}\" (expected one of: hex, base64, raw)")]
    EncodingUnsupported {
        /// The encoding tag as supplied by the caller
        requested: String,
    },

    /// Requested output length is outside the supported range
    #[error("output length {requested} is out of range (1..=1024 bytes)")]
    LengthOutOfRange {
        /// Requested length in bytes
        requested: usize,
    },

    /// The HMAC-SHA256 provider failed; fatal and non-retryable
    #[error("crypto provider unavailable: {0}")]
    CryptoProviderUnavailable(String),
}

impl KdfError {
    /// Create a `SeedInvalid` error
    pub fn seed_invalid(reason: impl Into<String>) -> Self {
        Self::SeedInvalid {
            reason: reason.into(),
        }
    }

    /// Create a `CryptoProviderUnavailable` error
    pub fn provider_unavailable(msg: impl Into<String>) -> Self {
        Self::CryptoProviderUnavailable(msg.into())
    }
}

/// Result type for derivation operations
pub type Result<T> = std::result::Result<T, KdfError>;
