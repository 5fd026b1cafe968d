use clause_merkle_costs::{
    CostResult, CostsExt, OperationCost, cost_return_on_error, cost_return_on_error_no_add,
};
use tracing::debug;

use crate::{BuildOptions, ClauseTreeError, Digest, MerkleHasher};

/// A binary Merkle tree over an ordered clause sequence.
///
/// All node digests live in one arena, level by level: the leaf level first,
/// then each parent level, ending with the single root. `level_starts[i]` is
/// the arena offset of level `i`. A level with an odd number of nodes pairs
/// its last node with a copy of itself.
///
/// Because of that pairing the root alone does not pin down the leaf count:
/// `[a, b, c]` and `[a, b, c, c]` share a root, as does any document with its
/// trailing odd-level subtree repeated. Compare [`leaf_count`](Self::leaf_count)
/// alongside the root when that matters.
///
/// A tree is never mutated after construction; a changed document means a
/// new tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    nodes: Vec<Digest>,
    level_starts: Vec<usize>,
}

impl MerkleTree {
    /// Build a tree from ordered leaf digests with default options.
    ///
    /// A single leaf is its own root; no internal hashing is applied.
    pub fn build<H>(hasher: &H, leaves: Vec<Digest>) -> Result<Self, ClauseTreeError>
    where
        H: MerkleHasher + ?Sized,
    {
        Self::build_with_options(hasher, leaves, &BuildOptions::default()).unwrap()
    }

    /// Build a tree from ordered leaf digests, reporting the number of node
    /// hashes performed.
    pub fn build_with_options<H>(
        hasher: &H,
        leaves: Vec<Digest>,
        options: &BuildOptions,
    ) -> CostResult<Self, ClauseTreeError>
    where
        H: MerkleHasher + ?Sized,
    {
        let mut cost = OperationCost::default();
        cost_return_on_error_no_add!(cost, non_empty(leaves.len()));

        let leaf_count = leaves.len();
        let mut nodes = leaves;
        nodes.reserve(leaf_count);
        let mut level_starts = vec![0usize];
        let mut parallel_levels = 0usize;

        loop {
            let start = level_starts[level_starts.len() - 1];
            let width = nodes.len() - start;
            if width == 1 {
                break;
            }
            let parallel = options.parallelize(width);
            parallel_levels += usize::from(parallel);
            let parents = hash_level(hasher, &nodes[start..], parallel);
            cost += OperationCost::with_hash_node_calls(call_count(parents.len()));
            level_starts.push(nodes.len());
            nodes.extend(parents);
        }

        let tree = MerkleTree {
            nodes,
            level_starts,
        };
        debug!(
            leaf_count,
            height = tree.height(),
            node_hashes = cost.hash_node_calls,
            parallel_threshold = options.parallel_threshold,
            parallel_levels,
            "built clause merkle tree"
        );
        Ok(tree).wrap_with_cost(cost)
    }

    /// Hash each clause's exact bytes and build the tree over them.
    pub fn from_clauses<H, C>(hasher: &H, clauses: &[C]) -> Result<Self, ClauseTreeError>
    where
        H: MerkleHasher + ?Sized,
        C: AsRef<[u8]> + Sync,
    {
        Self::from_clauses_with_options(hasher, clauses, &BuildOptions::default()).unwrap()
    }

    /// Hash each clause and build the tree, reporting leaf and node hash
    /// counts.
    pub fn from_clauses_with_options<H, C>(
        hasher: &H,
        clauses: &[C],
        options: &BuildOptions,
    ) -> CostResult<Self, ClauseTreeError>
    where
        H: MerkleHasher + ?Sized,
        C: AsRef<[u8]> + Sync,
    {
        let mut cost = OperationCost::default();
        cost_return_on_error_no_add!(cost, non_empty(clauses.len()));

        let leaves = hash_leaves(hasher, clauses, options.parallelize(clauses.len()));
        cost += OperationCost::with_hash_leaf_calls(call_count(clauses.len()));
        let tree = cost_return_on_error!(
            &mut cost,
            Self::build_with_options(hasher, leaves, options)
        );
        Ok(tree).wrap_with_cost(cost)
    }

    /// The root digest committing to every clause and its position.
    pub fn root(&self) -> Digest {
        self.nodes[self.nodes.len() - 1]
    }

    /// Number of leaves (clauses) in the tree.
    pub fn leaf_count(&self) -> usize {
        self.level_width(0)
    }

    /// Number of hashing levels above the leaves; `0` for a single leaf.
    pub fn height(&self) -> usize {
        self.level_starts.len() - 1
    }

    /// The leaf digests in their original order.
    pub fn leaves(&self) -> &[Digest] {
        &self.nodes[..self.level_width(0)]
    }

    /// Digest of the leaf at `index`, if present.
    pub fn leaf(&self, index: usize) -> Option<&Digest> {
        self.leaves().get(index)
    }

    /// Position of the first leaf whose digest equals `leaf`.
    pub fn position_of(&self, leaf: &Digest) -> Option<usize> {
        self.leaves().iter().position(|candidate| candidate == leaf)
    }

    /// Digests of one level, `0` being the leaves and `height()` the root.
    pub fn level(&self, level: usize) -> Option<&[Digest]> {
        let start = *self.level_starts.get(level)?;
        let end = self
            .level_starts
            .get(level + 1)
            .copied()
            .unwrap_or(self.nodes.len());
        Some(&self.nodes[start..end])
    }

    /// Iterate over levels from the leaves up to the root.
    pub fn levels(&self) -> impl Iterator<Item = &[Digest]> + '_ {
        (0..self.level_starts.len()).filter_map(move |level| self.level(level))
    }

    /// Total number of digests stored, leaves included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn level_width(&self, level: usize) -> usize {
        self.level(level).map_or(0, <[Digest]>::len)
    }
}

fn non_empty(len: usize) -> Result<(), ClauseTreeError> {
    if len == 0 {
        return Err(ClauseTreeError::EmptyInput);
    }
    Ok(())
}

/// Hash counts saturate rather than wrap on inputs beyond `u32::MAX`.
fn call_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Merge adjacent pairs of one level, duplicating a trailing odd node.
fn hash_level<H>(hasher: &H, level: &[Digest], parallel: bool) -> Vec<Digest>
where
    H: MerkleHasher + ?Sized,
{
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            return level
                .par_chunks(2)
                .map(|pair| hash_pair(hasher, pair))
                .collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    level.chunks(2).map(|pair| hash_pair(hasher, pair)).collect()
}

fn hash_pair<H>(hasher: &H, pair: &[Digest]) -> Digest
where
    H: MerkleHasher + ?Sized,
{
    let left = &pair[0];
    let right = pair.get(1).unwrap_or(left);
    hasher.node_hash(left, right)
}

fn hash_leaves<H, C>(hasher: &H, clauses: &[C], parallel: bool) -> Vec<Digest>
where
    H: MerkleHasher + ?Sized,
    C: AsRef<[u8]> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            return clauses
                .par_iter()
                .map(|clause| hasher.leaf_hash(clause.as_ref()))
                .collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    crate::leaf_hashes(hasher, clauses)
}
