//! # Picyboo CTX key derivation
//!
//! Deterministic, indexable key material from a tenant/customer seed using
//! HKDF (RFC 5869) over SHA-256. One seed yields a family of related keys
//! (`CTX:0`, `CTX:1`, ...) that are recomputed on demand and never stored:
//! every derivation is a pure function of seed, salt, info string and
//! length.
//!
//! ## Quick Start
//!
//! ```rust
//! use pbctx_kdf::{CtxDeriver, DeriveConfig, Seed};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let seed = Seed::from("demo@example.com").validate()?;
//! let deriver = CtxDeriver::new(DeriveConfig::default());
//!
//! let key = deriver.derive_key(&seed, 0).await?;
//! assert_eq!(key.as_str().map(str::len), Some(64)); // 32 bytes as hex
//!
//! let family = deriver.derive_batch(&seed, 3).await?;
//! assert_eq!(family.len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! Seeds must validate before any derivation: [`Seed::validate`] enforces
//! the trimmed length (8 to 256 characters) and printable-character rules
//! and is the only way to obtain the [`ValidatedSeed`] the deriver accepts.

#![forbid(unsafe_code)]

pub mod benchmark;
pub mod derive;
pub mod encoding;
pub mod error;
pub mod hkdf;
pub mod seed;

pub use benchmark::{BenchmarkStats, MAX_BENCH_ITERATIONS};
pub use derive::{
    constant_time_compare, CtxDeriver, DeriveConfig, DerivedKeyRecord, DEFAULT_LENGTH,
    DEFAULT_NAMESPACE, DEFAULT_SALT, MAX_BATCH_COUNT,
};
pub use encoding::{EncodedKey, KeyEncoding, SUPPORTED_ENCODINGS};
pub use error::{KdfError, Result};
pub use hkdf::{hkdf_sha256, HmacSha256Provider, RustCryptoHmac, HASH_LEN, MAX_OUTPUT_LEN};
pub use seed::{Seed, ValidatedSeed, MAX_SEED_LEN, MIN_SEED_LEN};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BenchmarkStats, CtxDeriver, DeriveConfig, DerivedKeyRecord, EncodedKey, KdfError,
        KeyEncoding, Result, Seed, ValidatedSeed,
    };
}
