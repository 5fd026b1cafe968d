//! Helpers shared by the walkthrough binaries.

use tracing_subscriber::EnvFilter;

/// Split a document into clauses, one per non-blank line.
///
/// The document's outer whitespace is trimmed, but each kept line is
/// returned exactly as written: interior and trailing spaces are part of
/// the clause and change its hash.
pub fn extract_clauses(text: &str) -> Vec<&str> {
    text.trim()
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Install a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Four versions of one contract: an amended copy, an identical copy, and
/// one with an extra clause.
pub mod contracts {
    /// The original.
    pub const V1: &str = "
Clause 1: The buyer agrees to pay in full within 30 days.
Clause 2: The seller provides a 1-year warranty.
Clause 3: All disputes will be settled in California.
";

    /// Warranty extended, stray space before the last period.
    pub const V2: &str = "
Clause 1: The buyer agrees to pay in full within 30 days.
Clause 2: The seller provides a 2-year warranty.
Clause 3: All disputes will be settled in California .
";

    /// Same text as `V1`.
    pub const V3: &str = "
Clause 1: The buyer agrees to pay in full within 30 days.
Clause 2: The seller provides a 1-year warranty.
Clause 3: All disputes will be settled in California.
";

    /// `V1` plus one clause.
    pub const V4: &str = "
Clause 1: The buyer agrees to pay in full within 30 days.
Clause 2: The seller provides a 1-year warranty.
Clause 3: All disputes will be settled in California.
Clause 4: An additional clause.
";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_clauses_keeps_lines_verbatim() {
        let text = "\n  first clause \n\n   \nsecond clause.\n";
        assert_eq!(extract_clauses(text), vec!["first clause ", "second clause."]);
    }

    #[test]
    fn test_sample_contracts() {
        assert_eq!(extract_clauses(contracts::V1).len(), 3);
        assert_eq!(extract_clauses(contracts::V1), extract_clauses(contracts::V3));
        assert_eq!(extract_clauses(contracts::V4).len(), 4);
        assert!(extract_clauses(contracts::V2)[2].ends_with("California ."));
    }
}
