use std::fmt;

use serde::{Deserialize, Serialize};

use crate::encode::{canonical_json, CanonicalError};

/// Domain-separation prefix, versioned with the trace schema.
const TRACE_DOMAIN: &[u8] = b"attest-trace-v1:";

/// Canonicalize and hash a value into its commitment digest.
///
/// The digest is BLAKE3 over the domain prefix followed by the canonical
/// encoding bytes, so digests from this subsystem cannot collide with hashes
/// of the same bytes taken elsewhere.
pub fn digest<T: Serialize>(value: &T) -> Result<TraceDigest, CanonicalError> {
    let encoded = canonical_json(value)?;
    let mut hasher = blake3::Hasher::new();
    hasher.update(TRACE_DOMAIN);
    hasher.update(encoded.as_bytes());
    Ok(TraceDigest(*hasher.finalize().as_bytes()))
}

/// Content digest of a canonicalized trace (BLAKE3, 32 bytes).
///
/// Serializes as a 64-character lowercase hex string; `Display` shows a
/// 12-character prefix for log lines.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceDigest(pub [u8; 32]);

impl TraceDigest {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Full hex encoding, 64 lowercase characters.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Parse from a 64-character hex string.
    pub fn from_hex(hex: &str) -> Result<Self, DigestError> {
        if hex.len() != 64 {
            return Err(DigestError::InvalidLength(hex.len()));
        }
        if !hex.is_ascii() {
            return Err(DigestError::InvalidHex);
        }
        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|_| DigestError::InvalidHex)?;
        }
        Ok(Self(bytes))
    }
}

impl fmt::Debug for TraceDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TraceDigest({})", &self.to_hex()[..12])
    }
}

impl fmt::Display for TraceDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..12])
    }
}

impl Serialize for TraceDigest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for TraceDigest {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        TraceDigest::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("invalid hex length: {0} (expected 64)")]
    InvalidLength(usize),
    #[error("invalid hex character")]
    InvalidHex,
}
