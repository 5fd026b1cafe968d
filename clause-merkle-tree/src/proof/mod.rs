//! Membership proof generation for the clause Merkle tree.
//!
//! A `MerkleProof` is the sibling path from one leaf up to (but excluding)
//! the root. Each step carries the sibling's digest and which side of the
//! path node it sits on, so the verifier needs nothing but the leaf digest
//! and the published root. No other clause is revealed.

use std::{fmt, str::FromStr};

use bincode::{Decode, Encode};
use tracing::debug;

use crate::{ClauseTreeError, Digest, MerkleTree};


/// Upper bound on proof length accepted from outside, the same on every
/// target so a proof valid on one platform decodes on all of them.
pub const MAX_PROOF_DEPTH: usize = 64;

/// Which side of the path node a sibling occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode)]
pub enum Side {
    /// The sibling is the left child; the path node is on the right.
    Left,
    /// The sibling is the right child; the path node is on the left.
    Right,
}

impl Side {
    /// Exchange-format tag: `"LEFT"` or `"RIGHT"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "LEFT",
            Side::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = ClauseTreeError;

    /// Tags are matched ASCII case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("LEFT") {
            Ok(Side::Left)
        } else if s.eq_ignore_ascii_case("RIGHT") {
            Ok(Side::Right)
        } else {
            Err(ClauseTreeError::MalformedProof(format!(
                "unknown side tag {:?}",
                s
            )))
        }
    }
}

/// One level of a sibling path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub struct ProofStep {
    /// Digest of the sibling node at this level.
    pub sibling: Digest,
    /// Side the sibling occupies.
    pub side: Side,
}

/// Membership proof for a single clause.
#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct MerkleProof {
    steps: Vec<ProofStep>,
}

/// A proof step as exchanged with other parties:
/// `{"siblingDigestHex": "...", "side": "LEFT" | "RIGHT"}`.
///
/// Both fields are optional here so that incomplete records from the outside
/// can be represented and rejected with
/// [`ClauseTreeError::MalformedProof`] rather than at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProofRecord {
    /// Hex rendering of the sibling digest.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub sibling_digest_hex: Option<String>,
    /// `"LEFT"` or `"RIGHT"`.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub side: Option<String>,
}

impl From<&ProofStep> for ProofRecord {
    fn from(step: &ProofStep) -> Self {
        ProofRecord {
            sibling_digest_hex: Some(step.sibling.to_hex()),
            side: Some(step.side.as_str().to_string()),
        }
    }
}

impl MerkleTree {
    /// Sibling path for the leaf at `leaf_index`.
    pub fn proof(&self, leaf_index: usize) -> Result<MerkleProof, ClauseTreeError> {
        MerkleProof::generate(self, leaf_index)
    }
}

impl MerkleProof {
    /// Construct a proof from already-known steps, leaf level first.
    pub fn new(steps: Vec<ProofStep>) -> Self {
        MerkleProof { steps }
    }

    /// Extract the sibling path for `leaf_index` from `tree`.
    ///
    /// Runs in time proportional to the tree height. A lone trailing node on
    /// an odd level gets itself as its right sibling, mirroring how the tree
    /// was built. A single-leaf tree yields an empty proof.
    pub fn generate(tree: &MerkleTree, leaf_index: usize) -> Result<Self, ClauseTreeError> {
        let leaf_count = tree.leaf_count();
        if leaf_index >= leaf_count {
            return Err(ClauseTreeError::IndexOutOfRange {
                index: leaf_index,
                leaf_count,
            });
        }

        let mut steps = Vec::with_capacity(tree.height());
        let mut index = leaf_index;
        for level in tree.levels().take(tree.height()) {
            let (sibling_index, side) = if index % 2 == 1 {
                (index - 1, Side::Left)
            } else if index + 1 < level.len() {
                (index + 1, Side::Right)
            } else {
                (index, Side::Right)
            };
            steps.push(ProofStep {
                sibling: level[sibling_index],
                side,
            });
            index /= 2;
        }

        debug!(leaf_index, depth = steps.len(), "generated clause proof");
        Ok(MerkleProof { steps })
    }

    /// The sibling path, leaf level first.
    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    /// Consume into the sibling path.
    pub fn into_steps(self) -> Vec<ProofStep> {
        self.steps
    }

    /// Number of levels in the path.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` for the proof of a single-leaf tree.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Render as exchange records.
    pub fn to_records(&self) -> Vec<ProofRecord> {
        self.steps.iter().map(ProofRecord::from).collect()
    }

    /// Parse exchange records.
    ///
    /// Fails with `MalformedProof` when any record lacks its digest or side,
    /// carries an unparsable digest or unknown side, or when there are more
    /// records than [`MAX_PROOF_DEPTH`].
    pub fn from_records(records: &[ProofRecord]) -> Result<Self, ClauseTreeError> {
        check_depth(records.len())?;
        let steps = records
            .iter()
            .enumerate()
            .map(|(position, record)| step_from_record(position, record))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MerkleProof { steps })
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, ClauseTreeError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| ClauseTreeError::MalformedProof(format!("encode error: {}", e)))
    }

    /// Decode from bytes using bincode.
    ///
    /// Rejects trailing bytes and paths deeper than [`MAX_PROOF_DEPTH`].
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self, ClauseTreeError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<{ 64 * 1024 }>();
        let (proof, read): (Self, usize) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| ClauseTreeError::MalformedProof(format!("decode error: {}", e)))?;
        if read != bytes.len() {
            return Err(ClauseTreeError::MalformedProof(format!(
                "{} trailing bytes after proof",
                bytes.len() - read
            )));
        }
        check_depth(proof.steps.len())?;
        Ok(proof)
    }
}

fn check_depth(depth: usize) -> Result<(), ClauseTreeError> {
    if depth > MAX_PROOF_DEPTH {
        return Err(ClauseTreeError::MalformedProof(format!(
            "proof has {} steps, more than the maximum of {}",
            depth, MAX_PROOF_DEPTH
        )));
    }
    Ok(())
}

fn step_from_record(position: usize, record: &ProofRecord) -> Result<ProofStep, ClauseTreeError> {
    let hex = record.sibling_digest_hex.as_deref().ok_or_else(|| {
        ClauseTreeError::MalformedProof(format!("step {} is missing its sibling digest", position))
    })?;
    let side = record.side.as_deref().ok_or_else(|| {
        ClauseTreeError::MalformedProof(format!("step {} is missing its side tag", position))
    })?;
    let sibling = Digest::from_hex(hex).map_err(|e| {
        ClauseTreeError::MalformedProof(format!("step {} has a bad sibling digest: {}", position, e))
    })?;
    let side = side.parse::<Side>().map_err(|e| {
        ClauseTreeError::MalformedProof(format!("step {}: {}", position, e))
    })?;
    Ok(ProofStep { sibling, side })
}
