//! Merkle commitments over ordered contract clauses.
//!
//! A document is committed to as the root of a binary hash tree whose leaves
//! are its clauses, in order. From the tree any single clause can be proven
//! against the published root without revealing the others, and two
//! versions of a document can be compared root-first, falling back to a
//! positional clause diff when the roots differ.
//!
//! Hash domain separation:
//! - Leaf nodes:     `H(0x00 || clause_bytes)`
//! - Internal nodes: `H(0x01 || left || right)`
//!
//! A level with an odd number of nodes pairs its last node with a copy of
//! itself. A single-clause document's root is that clause's leaf digest.
//!
//! Splitting raw text into clauses is left to the caller; clause bytes are
//! hashed exactly as given.

#![warn(missing_docs)]

mod compare;
mod diff;
mod digest;
mod error;
mod hash;
mod options;
pub(crate) mod proof;
pub(crate) mod tree;
mod verify;

#[cfg(test)]
pub(crate) mod test_utils;

pub use clause_merkle_costs::{CostContext, CostResult, CostsExt, OperationCost};
pub use compare::{DocumentComparison, compare_documents};
pub use diff::{ClauseChange, ClauseStatus, DiffResult, diff_clauses, diff_leaf_hashes};
pub use digest::{DIGEST_LEN, Digest};
pub use error::ClauseTreeError;
pub use hash::{
    Blake3Hasher, INTERNAL_DOMAIN_TAG, LEAF_DOMAIN_TAG, MerkleHasher, Sha256Hasher, leaf_hashes,
};
pub use options::{BuildOptions, DEFAULT_PARALLEL_THRESHOLD};
pub use proof::{MAX_PROOF_DEPTH, MerkleProof, ProofRecord, ProofStep, Side};
pub use tree::MerkleTree;
pub use verify::verify_records;
