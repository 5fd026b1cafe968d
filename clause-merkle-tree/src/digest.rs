//! Fixed-size digest type shared by leaves, internal nodes and roots.

use std::{fmt, str::FromStr};

use bincode::{Decode, Encode};

use crate::ClauseTreeError;

/// Output size of every supported hash primitive, in bytes.
pub const DIGEST_LEN: usize = 32;

/// A 256-bit digest.
///
/// Rendered externally as 64 lowercase hex characters; both `Display` and
/// `Debug` use that form so roots can be logged and compared by eye.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Encode, Decode)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Wrap raw digest bytes.
    pub const fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Digest(bytes)
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Consume into the raw digest bytes.
    pub fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// Lowercase hex rendering, always `2 * DIGEST_LEN` characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a hex rendering. Upper- and lowercase are both accepted.
    pub fn from_hex(s: &str) -> Result<Self, ClauseTreeError> {
        let bytes = hex::decode(s).map_err(|e| {
            ClauseTreeError::InvalidDigest(format!("not a hex string ({}): {:?}", e, s))
        })?;
        let bytes: [u8; DIGEST_LEN] = bytes.try_into().map_err(|v: Vec<u8>| {
            ClauseTreeError::InvalidDigest(format!(
                "expected {} bytes, got {}",
                DIGEST_LEN,
                v.len()
            ))
        })?;
        Ok(Digest(bytes))
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Digest(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = ClauseTreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Digest::from_hex(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Digest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Digest {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Digest::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
