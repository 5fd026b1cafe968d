use clause_merkle_tree::{
    ClauseStatus, DocumentComparison, MerkleHasher, MerkleTree, Sha256Hasher, compare_documents,
};
use tutorials::{contracts, extract_clauses, init_tracing};

fn main() {
    init_tracing();
    let hasher = Sha256Hasher;

    // Split each version into clauses, one per line.
    let v1 = extract_clauses(contracts::V1);
    let v2 = extract_clauses(contracts::V2);
    let v3 = extract_clauses(contracts::V3);
    let v4 = extract_clauses(contracts::V4);

    // Commit to every version.
    let tree_v1 = MerkleTree::from_clauses(&hasher, &v1).expect("v1 has clauses");
    let tree_v2 = MerkleTree::from_clauses(&hasher, &v2).expect("v2 has clauses");
    println!("--- Overall contract comparison ---");
    println!("V1 root: {}", tree_v1.root());
    println!("V2 root: {}", tree_v2.root());

    // Compare roots first; a clause diff is only produced when they differ.
    for (name, other) in [("V2", &v2), ("V3", &v3), ("V4", &v4)] {
        let comparison = compare_documents(&hasher, &v1, other).expect("both versions have clauses");
        println!("\nV1 vs {}: {}", name, verdict(&comparison));
        print_clause_diff(&comparison);
    }

    println!("\n--- Merkle proof demonstration ---");
    // Prove clause 2 of V1 without revealing the other clauses.
    let index = 1;
    let proof = tree_v1.proof(index).expect("v1 has a second clause");
    println!("Proof for {:?} (clause {}):", v1[index], index + 1);
    for step in proof.steps() {
        println!("  {} {}", step.side, step.sibling);
    }

    let leaf = hasher.leaf_hash(v1[index].as_bytes());
    println!(
        "Against V1 root: {}",
        passed(proof.verify(&hasher, &leaf, &tree_v1.root()))
    );
    // The same proof cannot vouch for the amended version.
    println!(
        "Against V2 root: {}",
        passed(proof.verify(&hasher, &leaf, &tree_v2.root()))
    );

    let proof_v2 = tree_v2.proof(index).expect("v2 has a second clause");
    println!("Proofs for clause 2 identical across versions? {}", proof == proof_v2);
}

fn verdict(comparison: &DocumentComparison) -> &'static str {
    if comparison.is_identical() {
        "identical"
    } else {
        "different"
    }
}

fn passed(ok: bool) -> &'static str {
    if ok { "PASSED" } else { "FAILED" }
}

fn print_clause_diff(comparison: &DocumentComparison) {
    let Some(diff) = &comparison.diff else {
        return;
    };
    for entry in diff {
        let clause = entry.index + 1;
        match entry.status {
            ClauseStatus::Unchanged => println!("  Clause {}: match", clause),
            ClauseStatus::Changed => {
                println!("  Clause {}: difference", clause);
                println!("    V1: {}", entry.before.as_deref().unwrap_or_default());
                println!("    V2: {}", entry.after.as_deref().unwrap_or_default());
            }
            ClauseStatus::Added => println!(
                "  Clause {}: only in the second version: {}",
                clause,
                entry.after.as_deref().unwrap_or_default()
            ),
            ClauseStatus::Removed => println!(
                "  Clause {}: only in the first version: {}",
                clause,
                entry.before.as_deref().unwrap_or_default()
            ),
        }
    }
}
