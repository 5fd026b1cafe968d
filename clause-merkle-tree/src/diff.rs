//! Positional clause diff, used to localize a root mismatch.
//!
//! Clauses are compared index by index. This is not an alignment (LCS)
//! diff: inserting one clause shifts every later index, so everything after
//! the insertion point shows as `Changed` and the last clause shows as
//! `Added`. That is enough to explain why two roots differ, which is all
//! this module is for.

use crate::Digest;

/// Outcome for one clause position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum ClauseStatus {
    /// Same content at this position in both documents.
    Unchanged,
    /// Both documents have a clause here, with different content.
    Changed,
    /// Only the second document has a clause here.
    Added,
    /// Only the first document has a clause here.
    Removed,
}

/// One position of a [`DiffResult`].
///
/// `before` is set for `Changed` and `Removed`, `after` for `Changed` and
/// `Added`, when clause text is available.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClauseChange {
    /// Zero-based clause position.
    pub index: usize,
    /// Comparison outcome.
    pub status: ClauseStatus,
    /// Clause text in the first document.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub before: Option<String>,
    /// Clause text in the second document.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub after: Option<String>,
}

/// Ordered per-position comparison of two clause sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DiffResult {
    entries: Vec<ClauseChange>,
}

impl DiffResult {
    /// All positions, in index order.
    pub fn entries(&self) -> &[ClauseChange] {
        &self.entries
    }

    /// Iterate over positions in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, ClauseChange> {
        self.entries.iter()
    }

    /// Number of positions compared, i.e. the longer document's length.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when both documents were empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `true` when every position is `Unchanged`.
    pub fn is_unchanged(&self) -> bool {
        self.entries
            .iter()
            .all(|entry| entry.status == ClauseStatus::Unchanged)
    }

    /// Positions whose status is anything but `Unchanged`.
    pub fn changed_indices(&self) -> Vec<usize> {
        self.entries
            .iter()
            .filter(|entry| entry.status != ClauseStatus::Unchanged)
            .map(|entry| entry.index)
            .collect()
    }

    /// Number of positions with the given status.
    pub fn count(&self, status: ClauseStatus) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.status == status)
            .count()
    }
}

impl<'a> IntoIterator for &'a DiffResult {
    type Item = &'a ClauseChange;
    type IntoIter = std::slice::Iter<'a, ClauseChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for DiffResult {
    type Item = ClauseChange;
    type IntoIter = std::vec::IntoIter<ClauseChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Compare two clause sequences by exact text, position by position.
pub fn diff_clauses<A, B>(before: &[A], after: &[B]) -> DiffResult
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    positional_diff(
        before.len(),
        after.len(),
        |i| before[i].as_ref() == after[i].as_ref(),
        |i| Some(before[i].as_ref().to_string()),
        |i| Some(after[i].as_ref().to_string()),
    )
}

/// Compare two leaf digest sequences position by position.
///
/// Without clause text, entries carry statuses only.
pub fn diff_leaf_hashes(before: &[Digest], after: &[Digest]) -> DiffResult {
    positional_diff(
        before.len(),
        after.len(),
        |i| before[i] == after[i],
        |_| None,
        |_| None,
    )
}

fn positional_diff(
    before_len: usize,
    after_len: usize,
    same_at: impl Fn(usize) -> bool,
    before_text: impl Fn(usize) -> Option<String>,
    after_text: impl Fn(usize) -> Option<String>,
) -> DiffResult {
    let common = before_len.min(after_len);
    let mut entries = Vec::with_capacity(before_len.max(after_len));

    for index in 0..common {
        let entry = if same_at(index) {
            ClauseChange {
                index,
                status: ClauseStatus::Unchanged,
                before: None,
                after: None,
            }
        } else {
            ClauseChange {
                index,
                status: ClauseStatus::Changed,
                before: before_text(index),
                after: after_text(index),
            }
        };
        entries.push(entry);
    }
    for index in common..before_len {
        entries.push(ClauseChange {
            index,
            status: ClauseStatus::Removed,
            before: before_text(index),
            after: None,
        });
    }
    for index in common..after_len {
        entries.push(ClauseChange {
            index,
            status: ClauseStatus::Added,
            before: None,
            after: after_text(index),
        });
    }

    DiffResult { entries }
}
