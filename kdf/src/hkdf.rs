//! RFC 5869 HKDF over HMAC-SHA256
//!
//! Extract-and-expand with the block construction spelled out, generic over
//! an HMAC capability trait so an audited platform provider can be
//! substituted without touching the derivation logic.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use zeroize::{Zeroize, Zeroizing};

use crate::error::{KdfError, Result};

/// SHA-256 output length in bytes
pub const HASH_LEN: usize = 32;

/// Largest supported output length in bytes
///
/// Keeps the expand loop within 32 blocks, so the single-byte block counter
/// never overflows.
pub const MAX_OUTPUT_LEN: usize = 1024;

/// HMAC-SHA256 capability the primitive is written against
///
/// Mirrors the two operations a platform crypto service exposes: importing
/// raw key material into a signing handle and signing a message with it.
pub trait HmacSha256Provider {
    /// Imported key handle
    type Key;

    /// Import raw key material into a signing key
    ///
    /// # Errors
    ///
    /// [`KdfError::CryptoProviderUnavailable`] if the provider rejects the
    /// key material.
    fn import_key(&self, material: &[u8]) -> Result<Self::Key>;

    /// Sign `data` with an imported key, yielding the 32-byte tag
    ///
    /// # Errors
    ///
    /// [`KdfError::CryptoProviderUnavailable`] if the signing operation
    /// fails.
    fn sign(&self, key: &Self::Key, data: &[u8]) -> Result<[u8; HASH_LEN]>;
}

/// Default in-process provider backed by the `hmac` and `sha2` crates
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoHmac;

impl HmacSha256Provider for RustCryptoHmac {
    type Key = Hmac<Sha256>;

    fn import_key(&self, material: &[u8]) -> Result<Self::Key> {
        Hmac::<Sha256>::new_from_slice(material)
            .map_err(|e| KdfError::provider_unavailable(format!("HMAC key import failed: {e}")))
    }

    fn sign(&self, key: &Self::Key, data: &[u8]) -> Result<[u8; HASH_LEN]> {
        let mut mac = key.clone();
        mac.update(data);
        Ok(mac.finalize().into_bytes().into())
    }
}

/// Reject output lengths outside `1..=MAX_OUTPUT_LEN`
pub(crate) fn check_length(length: usize) -> Result<()> {
    if length == 0 || length > MAX_OUTPUT_LEN {
        return Err(KdfError::LengthOutOfRange { requested: length });
    }
    Ok(())
}

/// Derive `length` bytes from `ikm` via RFC 5869 extract-then-expand
///
/// Deterministic in all inputs: the same (ikm, salt, info, length) yields
/// the same output across calls and processes. The salt keys the extract
/// HMAC; distinct info strings yield independent outputs from the same
/// extracted key.
///
/// # Errors
///
/// [`KdfError::LengthOutOfRange`] if `length` is zero or exceeds
/// [`MAX_OUTPUT_LEN`] (checked before any cryptographic work), or
/// [`KdfError::CryptoProviderUnavailable`] if the provider fails.
pub async fn hkdf_sha256<P: HmacSha256Provider>(
    provider: &P,
    ikm: &[u8],
    salt: &[u8],
    info: &[u8],
    length: usize,
) -> Result<Vec<u8>> {
    check_length(length)?;

    // Extract: PRK = HMAC-SHA256(salt, IKM)
    let salt_key = provider.import_key(salt)?;
    let prk = Zeroizing::new(provider.sign(&salt_key, ikm)?);
    let prk_key = provider.import_key(prk.as_slice())?;

    // Expand: T(i) = HMAC-SHA256(PRK, T(i-1) || info || i), i a single byte
    let blocks = length.div_ceil(HASH_LEN);
    let mut okm = Vec::with_capacity(blocks * HASH_LEN);
    let mut t_prev: Vec<u8> = Vec::with_capacity(HASH_LEN);
    for counter in 1..=blocks {
        let mut data = Vec::with_capacity(t_prev.len() + info.len() + 1);
        data.extend_from_slice(&t_prev);
        data.extend_from_slice(info);
        data.push(counter as u8);
        let block = provider.sign(&prk_key, &data)?;
        data.zeroize();
        okm.extend_from_slice(&block);
        t_prev.zeroize();
        t_prev.extend_from_slice(&block);
    }
    t_prev.zeroize();

    okm.truncate(length);
    Ok(okm)
}
