//! Canonical project snapshot (`discovered.json`).
//!
//! The snapshot is built purely in memory from the analysis results and the
//! config. Given identical inputs it serializes to identical bytes:
//! - contracts keep the input order;
//! - EOAs are sorted by address string;
//! - the merged ABI table is sorted by identifier.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{resolve_name, DiscoveryConfig};
use crate::error::DiscoveryResult;
use crate::layout::{contract_folder, source_slot_name};
use crate::model::{AbiTable, Analysis, AnalyzedContract, EthereumAddress, Hash256};

mod abi;

pub use abi::{find_abi_conflicts, merge_abis, AbiConflict};

/// Persisted form of one discovery run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSnapshot {
    pub name: String,
    pub block_number: u64,
    pub config_hash: Hash256,
    pub contracts: Vec<ContractRecord>,
    pub eoas: Vec<EthereumAddress>,
    pub abis: AbiTable,
}

/// A contract as it appears in the descriptor.
///
/// Source text is not part of the record; it lives in the `.code` tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    pub name: String,
    /// Name found by the analysis pass, present only when an override renamed
    /// the contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derived_name: Option<String>,
    pub address: EthereumAddress,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub unverified: bool,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub upgradeability: serde_json::Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub implementations: Vec<EthereumAddress>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub values: BTreeMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceGroupRecord>,
    /// Identifiers of the ABIs this contract contributed, sorted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub abis: Vec<String>,
}

/// Where one source group of a contract was written and which files it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceGroupRecord {
    /// Folder relative to `.code`, e.g. `Bridge/proxy`.
    pub path: String,
    pub files: Vec<String>,
}

impl ContractRecord {
    /// Project an analyzed contract into its descriptor record.
    fn project(contract: &AnalyzedContract, config: &DiscoveryConfig) -> Self {
        let resolved = resolve_name(&contract.name, &contract.address, config);
        let count = contract.sources.files.len();
        let sources = contract
            .sources
            .files
            .iter()
            .enumerate()
            .map(|(i, files)| SourceGroupRecord {
                path: contract_folder(&resolved.name, &source_slot_name(i, count)),
                files: files.keys().cloned().collect(),
            })
            .collect();

        Self {
            name: resolved.name,
            derived_name: resolved.derived_name,
            address: contract.address.clone(),
            unverified: contract.unverified,
            upgradeability: contract.upgradeability.clone(),
            implementations: contract.implementations.clone(),
            values: contract.values.clone(),
            errors: contract.errors.clone(),
            sources,
            abis: contract.sources.abis.keys().cloned().collect(),
        }
    }
}

/// Assemble the canonical snapshot for one run. Performs no IO.
pub fn build_snapshot(
    results: &[Analysis],
    config: &DiscoveryConfig,
    block_number: u64,
    config_hash: Hash256,
) -> ProjectSnapshot {
    let contracts = results
        .iter()
        .filter_map(Analysis::as_contract)
        .map(|contract| ContractRecord::project(contract, config))
        .collect();

    let mut eoas: Vec<EthereumAddress> = results
        .iter()
        .filter_map(|result| match result {
            Analysis::Eoa { address } => Some(address.clone()),
            Analysis::Contract(_) => None,
        })
        .collect();
    eoas.sort();

    ProjectSnapshot {
        name: config.name.clone(),
        block_number,
        config_hash,
        contracts,
        eoas,
        abis: merge_abis(results),
    }
}

/// Pretty-print a snapshot the way it is stored on disk (two-space indent,
/// trailing newline).
pub fn to_pretty_json(snapshot: &ProjectSnapshot) -> DiscoveryResult<String> {
    let mut json = serde_json::to_string_pretty(snapshot)?;
    json.push('\n');
    Ok(json)
}

/// Build a snapshot and pass it through JSON, returning exactly what a reader
/// of `discovered.json` would see.
pub fn parse_discovery_output(
    results: &[Analysis],
    config: &DiscoveryConfig,
    block_number: u64,
    config_hash: Hash256,
) -> DiscoveryResult<ProjectSnapshot> {
    let snapshot = build_snapshot(results, config, block_number, config_hash);
    let json = serde_json::to_string(&snapshot)?;
    Ok(serde_json::from_str(&json)?)
}
