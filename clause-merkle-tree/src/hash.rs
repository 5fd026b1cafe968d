//! Domain-separated leaf and node hashing.
//!
//! - Leaf nodes:     `H(0x00 || clause_bytes)`
//! - Internal nodes: `H(0x01 || left || right)`
//!
//! The distinct tags keep a leaf digest from ever being accepted as an
//! internal node digest (and vice versa), which blocks second-preimage
//! attacks that reinterpret a subtree as a single clause.

use sha2::Sha256;

use crate::{DIGEST_LEN, Digest};

/// Domain tag prepended to leaf hash inputs.
pub const LEAF_DOMAIN_TAG: u8 = 0x00;
/// Domain tag prepended to internal node hash inputs.
pub const INTERNAL_DOMAIN_TAG: u8 = 0x01;

/// A fixed-output, collision-resistant hash primitive used to commit to
/// clauses.
///
/// Implementors supply [`digest`](Self::digest); leaf and node hashing are
/// derived from it so every implementation applies the same domain
/// separation. Inputs are hashed exactly as given, with no normalization.
pub trait MerkleHasher: Send + Sync {
    /// Hash `domain_tag || parts[0] || parts[1] || ...`.
    fn digest(&self, domain_tag: u8, parts: &[&[u8]]) -> Digest;

    /// Leaf digest of one clause's exact bytes.
    fn leaf_hash(&self, clause: &[u8]) -> Digest {
        self.digest(LEAF_DOMAIN_TAG, &[clause])
    }

    /// Parent digest of two children. Order matters.
    fn node_hash(&self, left: &Digest, right: &Digest) -> Digest {
        self.digest(INTERNAL_DOMAIN_TAG, &[left.as_bytes(), right.as_bytes()])
    }
}

/// Blake3 primitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blake3Hasher;

impl MerkleHasher for Blake3Hasher {
    fn digest(&self, domain_tag: u8, parts: &[&[u8]]) -> Digest {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&[domain_tag]);
        for part in parts {
            hasher.update(part);
        }
        Digest::new(*hasher.finalize().as_bytes())
    }
}

/// SHA-256 primitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256Hasher;

impl MerkleHasher for Sha256Hasher {
    fn digest(&self, domain_tag: u8, parts: &[&[u8]]) -> Digest {
        use sha2::Digest as _;

        let mut hasher = Sha256::new();
        hasher.update([domain_tag]);
        for part in parts {
            hasher.update(part);
        }
        let out: [u8; DIGEST_LEN] = hasher.finalize().into();
        Digest::new(out)
    }
}

impl<H: MerkleHasher + ?Sized> MerkleHasher for &H {
    fn digest(&self, domain_tag: u8, parts: &[&[u8]]) -> Digest {
        (**self).digest(domain_tag, parts)
    }
}

/// Leaf digests for an ordered clause sequence, position preserved.
pub fn leaf_hashes<H, C>(hasher: &H, clauses: &[C]) -> Vec<Digest>
where
    H: MerkleHasher + ?Sized,
    C: AsRef<[u8]>,
{
    clauses
        .iter()
        .map(|clause| hasher.leaf_hash(clause.as_ref()))
        .collect()
}
