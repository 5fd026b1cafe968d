//! Proof verification for the clause Merkle tree.
//!
//! Pure functions, no tree required. The root is recomputed by folding the
//! sibling path over a single running digest and then compared to the
//! claimed root. A mismatch is an ordinary `false`.

use tracing::debug;

use crate::{
    ClauseTreeError, Digest, MerkleHasher,
    proof::{MerkleProof, ProofRecord, Side},
};

impl MerkleProof {
    /// Recompute the root implied by `leaf` and this sibling path.
    pub fn compute_root<H>(&self, hasher: &H, leaf: &Digest) -> Digest
    where
        H: MerkleHasher + ?Sized,
    {
        self.steps()
            .iter()
            .fold(*leaf, |current, step| match step.side {
                Side::Right => hasher.node_hash(&current, &step.sibling),
                Side::Left => hasher.node_hash(&step.sibling, &current),
            })
    }

    /// Check that `leaf` is committed under `claimed_root` by this path.
    pub fn verify<H>(&self, hasher: &H, leaf: &Digest, claimed_root: &Digest) -> bool
    where
        H: MerkleHasher + ?Sized,
    {
        let computed = self.compute_root(hasher, leaf);
        let matches = computed == *claimed_root;
        if !matches {
            debug!(
                %computed,
                claimed = %claimed_root,
                depth = self.len(),
                "proof does not reproduce claimed root"
            );
        }
        matches
    }

    /// Hash `clause` as a leaf and verify it under `claimed_root`.
    pub fn verify_clause<H>(&self, hasher: &H, clause: &[u8], claimed_root: &Digest) -> bool
    where
        H: MerkleHasher + ?Sized,
    {
        self.verify(hasher, &hasher.leaf_hash(clause), claimed_root)
    }
}

/// Verify a proof received in exchange form.
///
/// Returns `Err(MalformedProof)` only when the records cannot form a proof;
/// a well-formed proof that does not match yields `Ok(false)`.
pub fn verify_records<H>(
    hasher: &H,
    records: &[ProofRecord],
    leaf: &Digest,
    claimed_root: &Digest,
) -> Result<bool, ClauseTreeError>
where
    H: MerkleHasher + ?Sized,
{
    let proof = MerkleProof::from_records(records)?;
    Ok(proof.verify(hasher, leaf, claimed_root))
}
