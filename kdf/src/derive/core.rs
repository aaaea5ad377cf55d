//! Core deriver implementation
//!
//! Orchestrates one HKDF call per requested index and hands the raw output
//! to the encoder. Loops are strictly sequential: each derivation completes
//! before the next index starts.

use serde::Serialize;
use tracing::{debug, trace};

use super::config::DeriveConfig;
use crate::encoding::{EncodedKey, KeyEncoding};
use crate::error::Result;
use crate::hkdf::{hkdf_sha256, HmacSha256Provider, RustCryptoHmac};
use crate::seed::ValidatedSeed;

/// Largest batch a single call will derive
pub const MAX_BATCH_COUNT: usize = 1000;

/// One batch entry together with its derivation metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedKeyRecord {
    /// Zero-based key index within the batch
    pub index: u32,
    /// Info string the key was derived under
    pub info: String,
    /// Encoding of `key`
    pub encoding: KeyEncoding,
    /// The encoded key
    pub key: EncodedKey,
}

/// Deterministic deriver for indexed key families
///
/// Holds the HMAC provider and the request configuration. Methods take
/// `&self` and share no mutable state, so independent derivations are safe
/// to run concurrently; each individual call stays strictly sequential.
#[derive(Debug, Clone)]
pub struct CtxDeriver<P = RustCryptoHmac> {
    provider: P,
    config: DeriveConfig,
}

impl CtxDeriver {
    /// Deriver over the default in-process HMAC provider
    #[must_use]
    pub fn new(config: DeriveConfig) -> Self {
        Self {
            provider: RustCryptoHmac,
            config,
        }
    }

    /// Deriver with the default provider and default configuration
    #[must_use]
    pub fn new_default() -> Self {
        Self::new(DeriveConfig::default())
    }
}

impl<P: HmacSha256Provider> CtxDeriver<P> {
    /// Deriver over a caller-supplied HMAC provider
    pub fn with_provider(provider: P, config: DeriveConfig) -> Self {
        Self { provider, config }
    }

    /// The request configuration
    #[must_use]
    pub fn config(&self) -> &DeriveConfig {
        &self.config
    }

    pub(crate) fn provider(&self) -> &P {
        &self.provider
    }

    /// Derive the key at one explicit index
    ///
    /// # Errors
    ///
    /// [`crate::KdfError::LengthOutOfRange`] if the configured length is
    /// invalid, or [`crate::KdfError::CryptoProviderUnavailable`] if the
    /// provider fails.
    pub async fn derive_key(&self, seed: &ValidatedSeed, index: u32) -> Result<EncodedKey> {
        self.config.check_length()?;
        let info = self.config.info_for(index);
        trace!(index, info = %info, "deriving key");
        let okm = hkdf_sha256(
            &self.provider,
            seed.as_bytes(),
            &self.config.salt,
            info.as_bytes(),
            self.config.length,
        )
        .await?;
        Ok(self.config.encoding.encode(okm))
    }

    /// Derive the keys for indices `0..count`, in ascending index order
    ///
    /// `count` is clamped to `1..=MAX_BATCH_COUNT`. The batch fails as a
    /// whole; no partial list is ever returned.
    ///
    /// # Errors
    ///
    /// As [`CtxDeriver::derive_key`].
    pub async fn derive_batch(&self, seed: &ValidatedSeed, count: usize) -> Result<Vec<EncodedKey>> {
        self.config.check_length()?;
        let count = count.clamp(1, MAX_BATCH_COUNT);
        debug!(
            count,
            namespace = %self.config.namespace,
            length = self.config.length,
            "deriving batch"
        );
        let mut keys = Vec::with_capacity(count);
        for index in 0..count {
            keys.push(self.derive_key(seed, index as u32).await?);
        }
        Ok(keys)
    }

    /// As [`CtxDeriver::derive_batch`], attaching metadata to every entry
    ///
    /// Entry `i` always carries info string `"{namespace}:{i}"`.
    ///
    /// # Errors
    ///
    /// As [`CtxDeriver::derive_key`].
    pub async fn derive_batch_with_metadata(
        &self,
        seed: &ValidatedSeed,
        count: usize,
    ) -> Result<Vec<DerivedKeyRecord>> {
        self.config.check_length()?;
        let count = count.clamp(1, MAX_BATCH_COUNT);
        debug!(
            count,
            namespace = %self.config.namespace,
            length = self.config.length,
            "deriving batch with metadata"
        );
        let mut entries = Vec::with_capacity(count);
        for index in 0..count {
            let index = index as u32;
            let key = self.derive_key(seed, index).await?;
            entries.push(DerivedKeyRecord {
                index,
                info: self.config.info_for(index),
                encoding: self.config.encoding,
                key,
            });
        }
        Ok(entries)
    }
}
