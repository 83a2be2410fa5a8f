use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{AbiTable, Analysis, EthereumAddress};

/// Merge the ABI tables of all contracts, in input order.
///
/// When two contracts share an identifier the later one wins. The result is a
/// `BTreeMap`, so iteration (and serialization) is sorted by identifier.
pub fn merge_abis(results: &[Analysis]) -> AbiTable {
    results.iter().filter_map(Analysis::as_contract).fold(AbiTable::new(), |mut merged, contract| {
        merged.extend(contract.sources.abis.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    })
}

/// An ABI identifier whose entries were replaced by a later contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiConflict {
    pub identifier: String,
    /// Contract whose entries were dropped.
    pub overwritten: EthereumAddress,
    /// Contract whose entries ended up in the snapshot (so far).
    pub winner: EthereumAddress,
}

/// Report every identifier where a later contract replaced a *different*
/// entry list of an earlier contract.
///
/// Identical duplicates (the same library ABI shared by several contracts) are
/// not conflicts.
pub fn find_abi_conflicts(results: &[Analysis]) -> Vec<AbiConflict> {
    let mut seen: BTreeMap<&str, (&EthereumAddress, &Vec<String>)> = BTreeMap::new();
    let mut conflicts = Vec::new();

    for contract in results.iter().filter_map(Analysis::as_contract) {
        for (identifier, entries) in &contract.sources.abis {
            if let Some((previous, previous_entries)) =
                seen.insert(identifier.as_str(), (&contract.address, entries))
            {
                if previous_entries != entries {
                    conflicts.push(AbiConflict {
                        identifier: identifier.clone(),
                        overwritten: previous.clone(),
                        winner: contract.address.clone(),
                    });
                }
            }
        }
    }

    conflicts
}
