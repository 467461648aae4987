//! Test vector generator for the Halyard protocol.
//!
//! Generates `test_vectors.json` covering leaf encoding, pair folding,
//! a fixed reward-table root with every proof, and rate fixtures. This
//! binary is the interoperability ground truth between the on-ledger
//! verifier and the off-chain distribution pipeline.
//!
//! Usage:
//!   halyard-testvec              # Generate test_vectors.json
//!   halyard-testvec --verify     # Verify test vectors match expected values

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use halyard_crypto::merkle::{encode_leaf, fold_sorted_pair, leaf_hash, MerkleTree};
use halyard_oracle::RateAccumulator;
use halyard_types::Address;

#[derive(Serialize, Deserialize)]
struct TestVectors {
    version: String,
    generated_by: String,
    vectors: BTreeMap<String, TestVector>,
}

#[derive(Serialize, Deserialize)]
struct TestVector {
    description: String,
    inputs: BTreeMap<String, String>,
    outputs: BTreeMap<String, String>,
}

/// The fixed 8-entry reward table every implementation must reproduce.
fn reference_table() -> Vec<(Address, u64)> {
    (0..8u64)
        .map(|i| {
            let mut address = [0u8; 20];
            address[0] = 0x10 + i as u8;
            address[19] = i as u8;
            (address, (i + 1) * 1_000)
        })
        .collect()
}

fn generate_leaf_vectors() -> BTreeMap<String, TestVector> {
    let mut vectors = BTreeMap::new();

    let beneficiary: Address = [0xAB; 20];
    let amount = 283u64;
    let preimage = encode_leaf(&beneficiary, amount);
    let leaf = leaf_hash(&beneficiary, amount);
    vectors.insert(
        "leaf_encoding_basic".to_string(),
        TestVector {
            description: "keccak256(address || amount as 32-byte BE word)".to_string(),
            inputs: BTreeMap::from([
                ("beneficiary".to_string(), hex::encode(beneficiary)),
                ("cumulative_amount".to_string(), amount.to_string()),
            ]),
            outputs: BTreeMap::from([
                ("preimage".to_string(), hex::encode(preimage)),
                ("leaf".to_string(), hex::encode(leaf)),
            ]),
        },
    );

    let zero_leaf = leaf_hash(&[0u8; 20], 0);
    vectors.insert(
        "leaf_encoding_zero".to_string(),
        TestVector {
            description: "Leaf of the all-zero pair".to_string(),
            inputs: BTreeMap::from([
                ("beneficiary".to_string(), hex::encode([0u8; 20])),
                ("cumulative_amount".to_string(), "0".to_string()),
            ]),
            outputs: BTreeMap::from([("leaf".to_string(), hex::encode(zero_leaf))]),
        },
    );

    vectors
}

fn generate_fold_vectors() -> BTreeMap<String, TestVector> {
    let mut vectors = BTreeMap::new();

    let a = leaf_hash(&[0x01; 20], 100);
    let b = leaf_hash(&[0x02; 20], 200);
    let folded = fold_sorted_pair(a, b);
    let folded_swapped = fold_sorted_pair(b, a);
    vectors.insert(
        "fold_sorted_pair".to_string(),
        TestVector {
            description: "keccak256(min(a,b) || max(a,b)); argument order irrelevant"
                .to_string(),
            inputs: BTreeMap::from([
                ("a".to_string(), hex::encode(a)),
                ("b".to_string(), hex::encode(b)),
            ]),
            outputs: BTreeMap::from([
                ("parent".to_string(), hex::encode(folded)),
                ("parent_swapped".to_string(), hex::encode(folded_swapped)),
            ]),
        },
    );

    vectors
}

fn generate_tree_vectors() -> BTreeMap<String, TestVector> {
    let mut vectors = BTreeMap::new();

    let table = reference_table();
    let tree = MerkleTree::from_entries(&table).expect("build reference tree");

    let mut inputs = BTreeMap::new();
    for (i, (beneficiary, amount)) in table.iter().enumerate() {
        inputs.insert(
            format!("entry_{i}"),
            format!("{}:{amount}", hex::encode(beneficiary)),
        );
    }

    let mut outputs = BTreeMap::from([("root".to_string(), hex::encode(tree.root()))]);
    for (i, _) in table.iter().enumerate() {
        let proof = tree.proof_for(i).expect("proof");
        let joined = proof
            .iter()
            .map(hex::encode)
            .collect::<Vec<_>>()
            .join(",");
        outputs.insert(format!("proof_{i}"), joined);
    }

    vectors.insert(
        "reference_table_8".to_string(),
        TestVector {
            description: "Root and all proofs for the fixed 8-entry reward table".to_string(),
            inputs,
            outputs,
        },
    );

    vectors
}

fn generate_rate_vectors() -> BTreeMap<String, TestVector> {
    let mut vectors = BTreeMap::new();

    let t0 = 1_700_000_000u64;
    let mut accumulator = RateAccumulator::new(1_000_000, t0);
    accumulator
        .harvest(25_000, 5_000, t0 + 3_600)
        .expect("harvest");

    let supply = 1_000_000u64;
    let rate = accumulator.current_rate(supply, t0 + 3_600);
    let zero_supply_rate = accumulator.current_rate(0, t0 + 3_600);

    vectors.insert(
        "rate_after_harvest".to_string(),
        TestVector {
            description:
                "Rate after one harvest: (1_000_000 + 25_000 + 5_000) * WAD / 1_000_000"
                    .to_string(),
            inputs: BTreeMap::from([
                ("initial_underlying".to_string(), "1000000".to_string()),
                ("reward".to_string(), "25000".to_string()),
                ("unlocked_bonus".to_string(), "5000".to_string()),
                ("derivative_supply".to_string(), supply.to_string()),
            ]),
            outputs: BTreeMap::from([
                ("rate".to_string(), rate.to_string()),
                ("zero_supply_rate".to_string(), zero_supply_rate.to_string()),
            ]),
        },
    );

    vectors
}

fn generate_all_vectors() -> TestVectors {
    let mut all_vectors = BTreeMap::new();

    all_vectors.extend(generate_leaf_vectors());
    all_vectors.extend(generate_fold_vectors());
    all_vectors.extend(generate_tree_vectors());
    all_vectors.extend(generate_rate_vectors());

    TestVectors {
        version: "1.0".to_string(),
        generated_by: "halyard-testvec".to_string(),
        vectors: all_vectors,
    }
}

fn verify_vectors(vectors: &TestVectors) -> bool {
    let regenerated = generate_all_vectors();
    let mut all_pass = true;

    for (name, expected) in &vectors.vectors {
        if let Some(actual) = regenerated.vectors.get(name) {
            if actual.outputs != expected.outputs {
                eprintln!("FAIL: {name}");
                eprintln!("  expected: {:?}", expected.outputs);
                eprintln!("  actual:   {:?}", actual.outputs);
                all_pass = false;
            } else {
                eprintln!("PASS: {name}");
            }
        } else {
            eprintln!("MISSING: {name}");
            all_pass = false;
        }
    }

    all_pass
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let path = "test_vectors.json";

    if args.iter().any(|a| a == "--verify") {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let vectors: TestVectors = serde_json::from_str(&content).expect("valid JSON");
                if verify_vectors(&vectors) {
                    eprintln!("All test vectors verified successfully.");
                } else {
                    eprintln!("Test vector verification FAILED.");
                    std::process::exit(1);
                }
            }
            Err(e) => {
                eprintln!("Cannot read {path}: {e}");
                std::process::exit(1);
            }
        }
    } else {
        let vectors = generate_all_vectors();
        let json = serde_json::to_string_pretty(&vectors).expect("serialize");
        std::fs::write(path, &json).expect("write file");
        eprintln!("Generated {} vectors to {path}", vectors.vectors.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_vectors_self_verify() {
        let vectors = generate_all_vectors();
        assert!(verify_vectors(&vectors));
    }

    #[test]
    fn test_reference_table_proofs_verify() {
        let table = reference_table();
        let tree = MerkleTree::from_entries(&table).expect("build");
        for (i, (beneficiary, amount)) in table.iter().enumerate() {
            let proof = tree.proof_for(i).expect("proof");
            assert!(halyard_crypto::merkle::verify_proof(
                tree.root(),
                leaf_hash(beneficiary, *amount),
                &proof
            ));
        }
    }
}
