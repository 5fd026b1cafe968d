//! Whole-document comparison: roots first, clause diff only on mismatch.

use tracing::{debug, info};

use crate::{
    ClauseTreeError, Digest, MerkleHasher, MerkleTree,
    diff::{ClauseStatus, DiffResult, diff_clauses},
};

/// Result of comparing two versions of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DocumentComparison {
    /// Merkle root of the first version.
    pub root_before: Digest,
    /// Merkle root of the second version.
    pub root_after: Digest,
    /// Clause count of the first version.
    pub leaf_count_before: usize,
    /// Clause count of the second version.
    pub leaf_count_after: usize,
    /// Positional diff, present unless the versions are identical.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub diff: Option<DiffResult>,
}

impl DocumentComparison {
    /// `true` when both versions commit to the same root over the same
    /// number of clauses.
    ///
    /// Equal roots alone are not enough: a trailing clause repeated so that
    /// it fills its own odd-level duplicate yields the same root.
    pub fn is_identical(&self) -> bool {
        self.root_before == self.root_after && self.leaf_count_before == self.leaf_count_after
    }
}

/// Commit to both clause sequences and compare them.
///
/// The clause diff is computed whenever the roots or the clause counts
/// differ. Fails with `EmptyInput` if either document has no clauses, since
/// an empty document has no root to compare.
pub fn compare_documents<H, A, B>(
    hasher: &H,
    before: &[A],
    after: &[B],
) -> Result<DocumentComparison, ClauseTreeError>
where
    H: MerkleHasher + ?Sized,
    A: AsRef<str>,
    B: AsRef<str>,
{
    let tree_before = MerkleTree::from_clauses(hasher, &as_bytes(before))?;
    let tree_after = MerkleTree::from_clauses(hasher, &as_bytes(after))?;

    let mut comparison = DocumentComparison {
        root_before: tree_before.root(),
        root_after: tree_after.root(),
        leaf_count_before: tree_before.leaf_count(),
        leaf_count_after: tree_after.leaf_count(),
        diff: None,
    };
    if !comparison.is_identical() {
        comparison.diff = Some(diff_clauses(before, after));
    }
    log_comparison(&comparison);
    Ok(comparison)
}

fn as_bytes<S: AsRef<str>>(clauses: &[S]) -> Vec<&[u8]> {
    clauses
        .iter()
        .map(|clause| clause.as_ref().as_bytes())
        .collect()
}

fn log_comparison(comparison: &DocumentComparison) {
    let status = if comparison.is_identical() {
        "identical"
    } else {
        "different"
    };
    info!(
        root_before = %comparison.root_before,
        root_after = %comparison.root_after,
        leaf_count_before = comparison.leaf_count_before,
        leaf_count_after = comparison.leaf_count_after,
        status,
        "document verification"
    );
    let Some(diff) = &comparison.diff else {
        return;
    };
    for entry in diff
        .iter()
        .filter(|entry| entry.status != ClauseStatus::Unchanged)
    {
        debug!(
            index = entry.index,
            status = ?entry.status,
            before = entry.before.as_deref().unwrap_or(""),
            after = entry.after.as_deref().unwrap_or(""),
            "clause differs"
        );
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::{
        Blake3Hasher, Sha256Hasher,
        test_utils::{CONTRACT_V1, CONTRACT_V2, CONTRACT_V3, CONTRACT_V4},
    };

    #[test]
    fn test_identical_versions_skip_diff() {
        let comparison = compare_documents(&Blake3Hasher, &CONTRACT_V1, &CONTRACT_V3)
            .expect("compare should succeed");
        assert!(comparison.is_identical());
        assert!(comparison.diff.is_none());
    }

    #[test]
    fn test_edited_version_reports_changed_clauses() {
        let comparison = compare_documents(&Sha256Hasher, &CONTRACT_V1, &CONTRACT_V2)
            .expect("compare should succeed");
        assert!(!comparison.is_identical());
        let diff = comparison.diff.expect("roots differ so a diff is present");
        // Clause 2 changed its warranty term, clause 3 gained a space.
        assert_eq!(diff.changed_indices(), vec![1, 2]);
        assert_eq!(diff.count(ClauseStatus::Unchanged), 1);
    }

    #[test]
    fn test_appended_clause_reports_added() {
        let comparison = compare_documents(&Blake3Hasher, &CONTRACT_V1, &CONTRACT_V4)
            .expect("compare should succeed");
        let diff = comparison.diff.expect("diff present");
        assert_eq!(diff.changed_indices(), vec![3]);
        assert_eq!(diff.entries()[3].status, ClauseStatus::Added);
        assert_eq!(
            diff.entries()[3].after.as_deref(),
            Some("Clause 4: An additional clause.")
        );
    }

    #[test]
    fn test_repeated_trailing_clause_is_not_identical() {
        let comparison = compare_documents(&Blake3Hasher, &["a", "b", "c"], &["a", "b", "c", "c"])
            .expect("compare should succeed");
        // Duplicate-last pairing gives both versions the same root.
        assert_eq!(comparison.root_before, comparison.root_after);
        assert!(!comparison.is_identical());
        let diff = comparison.diff.expect("clause counts differ so a diff is present");
        assert_eq!(diff.changed_indices(), vec![3]);
        assert_eq!(diff.entries()[3].status, ClauseStatus::Added);
        assert_eq!(diff.entries()[3].after.as_deref(), Some("c"));
    }

    #[test]
    fn test_repeated_trailing_pair_is_not_identical() {
        let before = ["a", "b", "c", "d", "e", "f"];
        let after = ["a", "b", "c", "d", "e", "f", "e", "f"];
        let comparison =
            compare_documents(&Sha256Hasher, &before, &after).expect("compare should succeed");
        assert_eq!(comparison.root_before, comparison.root_after);
        assert_eq!(
            (comparison.leaf_count_before, comparison.leaf_count_after),
            (6, 8)
        );
        assert!(!comparison.is_identical());
        let diff = comparison.diff.expect("diff present");
        assert_eq!(diff.count(ClauseStatus::Added), 2);
        assert_eq!(diff.count(ClauseStatus::Unchanged), 6);
    }

    #[test]
    fn test_empty_document_is_rejected() {
        let empty: [&str; 0] = [];
        assert_matches!(
            compare_documents(&Blake3Hasher, &CONTRACT_V1, &empty),
            Err(ClauseTreeError::EmptyInput)
        );
        assert_matches!(
            compare_documents(&Blake3Hasher, &empty, &CONTRACT_V1),
            Err(ClauseTreeError::EmptyInput)
        );
    }

    #[test]
    fn test_roots_match_direct_tree_build() {
        let comparison = compare_documents(&Blake3Hasher, &CONTRACT_V1, &CONTRACT_V2)
            .expect("compare should succeed");
        let tree = MerkleTree::from_clauses(&Blake3Hasher, &CONTRACT_V1).expect("build");
        assert_eq!(comparison.root_before, tree.root());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_comparison_json_omits_diff_when_identical() {
        let comparison = compare_documents(&Blake3Hasher, &CONTRACT_V1, &CONTRACT_V1)
            .expect("compare should succeed");
        let json = serde_json::to_value(&comparison).expect("serialize");
        assert!(json.get("diff").is_none());
        assert_eq!(json["leafCountAfter"].as_u64(), Some(3));
        assert_eq!(
            json["rootBefore"].as_str(),
            Some(comparison.root_before.to_hex().as_str())
        );
    }
}
