//! Output encodings for derived key material

use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::KdfError;

/// Encodings a derivation request may ask for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyEncoding {
    /// Two lowercase hexadecimal digits per byte
    #[default]
    Hex,
    /// RFC 4648 standard base64 with padding
    Base64,
    /// Unencoded bytes, for programmatic consumers
    Raw,
}

/// All supported encodings, in documentation order
pub const SUPPORTED_ENCODINGS: [KeyEncoding; 3] =
    [KeyEncoding::Hex, KeyEncoding::Base64, KeyEncoding::Raw];

impl KeyEncoding {
    /// Stable textual tag for this encoding
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            KeyEncoding::Hex => "hex",
            KeyEncoding::Base64 => "base64",
            KeyEncoding::Raw => "raw",
        }
    }

    /// Render raw derived bytes in this encoding
    #[must_use]
    pub fn encode(self, bytes: Vec<u8>) -> EncodedKey {
        match self {
            KeyEncoding::Hex => EncodedKey::Text(hex::encode(&bytes)),
            KeyEncoding::Base64 => EncodedKey::Text(general_purpose::STANDARD.encode(&bytes)),
            KeyEncoding::Raw => EncodedKey::Bytes(bytes),
        }
    }
}

impl fmt::Display for KeyEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for KeyEncoding {
    type Err = KdfError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "hex" => Ok(KeyEncoding::Hex),
            "base64" => Ok(KeyEncoding::Base64),
            "raw" => Ok(KeyEncoding::Raw),
            other => Err(KdfError::EncodingUnsupported {
                requested: other.to_owned(),
            }),
        }
    }
}

/// Derived key material rendered per the requested encoding
///
/// Hex and base64 requests yield text; raw requests pass the bytes through
/// unencoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EncodedKey {
    /// Hex or base64 text
    Text(String),
    /// Raw bytes
    Bytes(Vec<u8>),
}

impl EncodedKey {
    /// Textual form, when hex or base64 was requested
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            EncodedKey::Text(text) => Some(text),
            EncodedKey::Bytes(_) => None,
        }
    }

    /// Raw byte form, when raw was requested
    #[must_use]
    pub fn as_raw(&self) -> Option<&[u8]> {
        match self {
            EncodedKey::Text(_) => None,
            EncodedKey::Bytes(bytes) => Some(bytes),
        }
    }
}

impl fmt::Display for EncodedKey {
    /// Raw keys display as hex so they stay printable in logs
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodedKey::Text(text) => f.write_str(text),
            EncodedKey::Bytes(bytes) => f.write_str(&hex::encode(bytes)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for encoding in SUPPORTED_ENCODINGS {
            assert_eq!(encoding.label().parse::<KeyEncoding>().unwrap(), encoding);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = "binary".parse::<KeyEncoding>().unwrap_err();
        assert!(matches!(
            err,
            KdfError::EncodingUnsupported { requested } if requested == "binary"
        ));
    }

    #[test]
    fn hex_is_lowercase_and_two_chars_per_byte() {
        let key = KeyEncoding::Hex.encode(vec![0x00, 0xab, 0xff]);
        assert_eq!(key.as_str(), Some("00abff"));
    }

    #[test]
    fn base64_is_standard_with_padding() {
        let key = KeyEncoding::Base64.encode(vec![0x00]);
        assert_eq!(key.as_str(), Some("AA=="));
    }

    #[test]
    fn raw_passes_bytes_through() {
        let key = KeyEncoding::Raw.encode(vec![1, 2, 3]);
        assert_eq!(key.as_raw(), Some([1u8, 2, 3].as_slice()));
        assert_eq!(key.as_str(), None);
    }

    #[test]
    fn serde_tags_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&KeyEncoding::Base64).unwrap(),
            "\"base64\""
        );
    }
}
