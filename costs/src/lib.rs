#![deny(missing_docs)]
//! Interface crate to unify how the costs of tree operations are passed and
//! retrieved.
//!
//! Every hashing operation in the clause Merkle engine is pure, so the only
//! resource worth counting is the number of hash invocations, split by
//! domain (leaf vs internal node).

use std::ops::{Add, AddAssign};

pub mod context;

pub use context::{CostContext, CostResult, CostsExt};

/// Piece of data representing the hashing work done by an operation.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct OperationCost {
    /// How many times a leaf (clause bytes) was hashed.
    pub hash_leaf_calls: u32,
    /// How many times two child digests were merged into a parent.
    pub hash_node_calls: u32,
}

impl OperationCost {
    /// Helper function to build default `OperationCost` with different
    /// `hash_leaf_calls`.
    pub fn with_hash_leaf_calls(hash_leaf_calls: u32) -> Self {
        OperationCost {
            hash_leaf_calls,
            ..Default::default()
        }
    }

    /// Helper function to build default `OperationCost` with different
    /// `hash_node_calls`.
    pub fn with_hash_node_calls(hash_node_calls: u32) -> Self {
        OperationCost {
            hash_node_calls,
            ..Default::default()
        }
    }

    /// Total number of hash primitive invocations, saturating at
    /// `u32::MAX`.
    pub fn total_hash_calls(&self) -> u32 {
        self.hash_leaf_calls.saturating_add(self.hash_node_calls)
    }

    /// `true` if no hashing was performed.
    pub fn is_nothing(&self) -> bool {
        self == &Self::default()
    }
}

impl Add for OperationCost {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        OperationCost {
            hash_leaf_calls: self.hash_leaf_calls.saturating_add(rhs.hash_leaf_calls),
            hash_node_calls: self.hash_node_calls.saturating_add(rhs.hash_node_calls),
        }
    }
}

impl AddAssign for OperationCost {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
