use thiserror::Error;

/// Errors from clause Merkle tree operations.
///
/// A proof that simply fails to reproduce the claimed root is not an error;
/// verification reports that as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClauseTreeError {
    /// A tree was requested over zero leaves; an empty document has no root.
    #[error("cannot build a tree from zero leaves")]
    EmptyInput,
    /// A proof was requested for a leaf position the tree does not have.
    #[error("leaf index {index} is out of range (leaf count {leaf_count})")]
    IndexOutOfRange {
        /// The requested leaf position.
        index: usize,
        /// Number of leaves in the tree.
        leaf_count: usize,
    },
    /// An externally supplied proof is missing a field or is structurally
    /// impossible.
    #[error("malformed proof: {0}")]
    MalformedProof(String),
    /// A digest could not be parsed from its hex rendering.
    #[error("invalid digest: {0}")]
    InvalidDigest(String),
}
