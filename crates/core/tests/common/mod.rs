#![allow(dead_code)]

use std::collections::BTreeMap;

use discovery_core::model::{Analysis, AnalyzedContract, SourceFiles};

pub fn files(entries: &[(&str, &str)]) -> SourceFiles {
    entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect::<BTreeMap<_, _>>()
}

pub fn abi(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|e| e.to_string()).collect()
}

/// The two-contracts-one-EOA scenario used across tests.
pub fn sample_results() -> Vec<Analysis> {
    vec![
        AnalyzedContract::new("0xAAA", "contract1")
            .with_source_group(files(&[("A.sol", "contract A")]))
            .with_abi("k1", abi(&["function a()"]))
            .into(),
        AnalyzedContract::new("0xBBB", "contract2")
            .with_source_group(files(&[("P.sol", "contract P")]))
            .with_source_group(files(&[("I.sol", "contract I")]))
            .with_abi("k2", abi(&["function b()"]))
            .into(),
        Analysis::eoa("0xCCC"),
    ]
}
