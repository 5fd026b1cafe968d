//! Shared fixtures for unit tests.

use crate::{Blake3Hasher, Digest, MerkleHasher, MerkleTree};

pub(crate) const CONTRACT_V1: [&str; 3] = [
    "Clause 1: The buyer agrees to pay in full within 30 days.",
    "Clause 2: The seller provides a 1-year warranty.",
    "Clause 3: All disputes will be settled in California.",
];

/// Warranty term changed and a space inserted before the final period.
pub(crate) const CONTRACT_V2: [&str; 3] = [
    "Clause 1: The buyer agrees to pay in full within 30 days.",
    "Clause 2: The seller provides a 2-year warranty.",
    "Clause 3: All disputes will be settled in California .",
];

pub(crate) const CONTRACT_V3: [&str; 3] = CONTRACT_V1;

pub(crate) const CONTRACT_V4: [&str; 4] = [
    "Clause 1: The buyer agrees to pay in full within 30 days.",
    "Clause 2: The seller provides a 1-year warranty.",
    "Clause 3: All disputes will be settled in California.",
    "Clause 4: An additional clause.",
];

pub(crate) const SALE_TERMS: [&str; 4] = [
    "A buyer pays $100.",
    "Seller ships in 5 days.",
    "Warranty: 1 year.",
    "Governing law: NY.",
];

/// `n` distinct clauses, `"clause 0"`, `"clause 1"`, ...
pub(crate) fn numbered_clauses(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("clause {}", i)).collect()
}

/// Build a Blake3 tree over `clauses`, panicking on empty input.
pub(crate) fn blake3_tree<C: AsRef<[u8]> + Sync>(clauses: &[C]) -> MerkleTree {
    MerkleTree::from_clauses(&Blake3Hasher, clauses).expect("non-empty clauses should build")
}

/// Leaf digest of `clause` under Blake3.
pub(crate) fn blake3_leaf(clause: &str) -> Digest {
    Blake3Hasher.leaf_hash(clause.as_bytes())
}

/// Flip one bit of a digest.
pub(crate) fn flip_bit(digest: &Digest, bit: usize) -> Digest {
    let mut bytes = digest.into_bytes();
    bytes[(bit / 8) % bytes.len()] ^= 1 << (bit % 8);
    Digest::new(bytes)
}
