use clause_merkle_tree::{
    Blake3Hasher, Digest, MerkleHasher, MerkleProof, MerkleTree, ProofRecord, verify_records,
};
use tutorials::{contracts, extract_clauses, init_tracing};

fn main() {
    init_tracing();
    let hasher = Blake3Hasher;
    let clauses = extract_clauses(contracts::V4);
    let tree = MerkleTree::from_clauses(&hasher, &clauses).expect("contract has clauses");

    // The holder publishes the root and hands out a proof for one clause.
    let index = 3;
    let root = tree.root();
    let records = tree.proof(index).expect("clause 4 exists").to_records();
    let wire = serde_json::to_string_pretty(&records).expect("records serialize");
    println!("Published root: {}", root);
    println!("Proof for clause {}:\n{}", index + 1, wire);

    // A verifier needs only the clause text, the JSON proof and the root.
    let received: Vec<ProofRecord> = serde_json::from_str(&wire).expect("records parse");
    let published: Digest = root.to_hex().parse().expect("root parses");
    let leaf = hasher.leaf_hash(clauses[index].as_bytes());
    println!(
        "Clause verifies: {:?}",
        verify_records(&hasher, &received, &leaf, &published)
    );

    // A forged clause yields a clean `false`.
    let forged = hasher.leaf_hash(b"Clause 4: The seller owes nothing.");
    println!(
        "Forged clause verifies: {:?}",
        verify_records(&hasher, &received, &forged, &published)
    );

    // A damaged record is reported as malformed, not as a mismatch.
    let mut damaged = received.clone();
    damaged[0].side = Some("UP".to_string());
    println!(
        "Damaged proof: {:?}",
        verify_records(&hasher, &damaged, &leaf, &published)
    );

    // The compact binary form carries the same steps.
    let proof = MerkleProof::from_records(&received).expect("records are well formed");
    let bytes = proof.encode_to_vec().expect("proof encodes");
    let decoded = MerkleProof::decode_from_slice(&bytes).expect("proof decodes");
    println!(
        "Binary proof: {} bytes, round trip {}",
        bytes.len(),
        if decoded == proof { "ok" } else { "mismatch" }
    );
}
