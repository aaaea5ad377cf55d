//! Derivation request configuration
//!
//! An explicit configuration structure with named fields and documented
//! defaults; a request is immutable once handed to the deriver.

use serde::{Deserialize, Serialize};

use crate::encoding::KeyEncoding;
use crate::error::Result;
use crate::hkdf;

/// Default HKDF salt
///
/// A public domain-separation constant, not a secret; override it per
/// deployment with [`DeriveConfig::with_salt`].
pub const DEFAULT_SALT: &str = "picyboo.ctx";

/// Default info-string namespace, also a public domain-separation constant
pub const DEFAULT_NAMESPACE: &str = "CTX";

/// Default derived key length in bytes
pub const DEFAULT_LENGTH: usize = 32;

/// Parameters shared by every derivation in a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeriveConfig {
    /// HKDF extract salt (text or bytes)
    #[serde(default = "default_salt")]
    pub salt: Vec<u8>,
    /// Namespace prefix of the per-index info string
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Derived key length in bytes, `1..=1024`
    #[serde(default = "default_length")]
    pub length: usize,
    /// Output encoding for derived keys
    #[serde(default)]
    pub encoding: KeyEncoding,
}

fn default_salt() -> Vec<u8> {
    DEFAULT_SALT.as_bytes().to_vec()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_owned()
}

fn default_length() -> usize {
    DEFAULT_LENGTH
}

impl Default for DeriveConfig {
    fn default() -> Self {
        Self {
            salt: default_salt(),
            namespace: default_namespace(),
            length: DEFAULT_LENGTH,
            encoding: KeyEncoding::Hex,
        }
    }
}

impl DeriveConfig {
    /// Replace the extract salt
    #[must_use]
    pub fn with_salt(mut self, salt: impl AsRef<[u8]>) -> Self {
        self.salt = salt.as_ref().to_vec();
        self
    }

    /// Replace the info-string namespace
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Replace the derived key length in bytes
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Replace the output encoding
    #[must_use]
    pub fn with_encoding(mut self, encoding: KeyEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Info string for one index: `"{namespace}:{index}"`
    #[must_use]
    pub fn info_for(&self, index: u32) -> String {
        format!("{}:{}", self.namespace, index)
    }

    /// Check the configured length before any cryptographic work
    pub(crate) fn check_length(&self) -> Result<()> {
        hkdf::check_length(self.length)
    }
}
