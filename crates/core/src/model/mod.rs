//! Input model: what the discovery analysis pass hands over to this crate.
//!
//! The analysis pass itself (address classification, ABI decoding, source
//! fetching) lives elsewhere; these types only describe its output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

mod primitives;

pub use primitives::{EthereumAddress, Hash256, ParseHashError};

/// One source bundle of a contract: file name (may contain `/`) to source text.
pub type SourceFiles = BTreeMap<String, String>;

/// ABI identifier to its list of human-readable entries.
pub type AbiTable = BTreeMap<String, Vec<String>>;

/// Result of analyzing a single address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Analysis {
    /// Externally-owned account: an address without code.
    #[serde(rename = "EOA")]
    Eoa { address: EthereumAddress },
    #[serde(rename = "Contract")]
    Contract(AnalyzedContract),
}

impl Analysis {
    pub fn eoa(address: impl Into<EthereumAddress>) -> Self {
        Analysis::Eoa { address: address.into() }
    }

    pub fn address(&self) -> &EthereumAddress {
        match self {
            Analysis::Eoa { address } => address,
            Analysis::Contract(contract) => &contract.address,
        }
    }

    pub fn as_contract(&self) -> Option<&AnalyzedContract> {
        match self {
            Analysis::Eoa { .. } => None,
            Analysis::Contract(contract) => Some(contract),
        }
    }
}

/// A contract with its decoded ABI and verified sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedContract {
    pub address: EthereumAddress,
    /// Name derived by the analysis pass (before any user override).
    pub name: String,
    #[serde(default)]
    pub unverified: bool,
    /// Proxy/upgradeability description; opaque to this crate.
    #[serde(default)]
    pub upgradeability: serde_json::Value,
    #[serde(default)]
    pub implementations: Vec<EthereumAddress>,
    #[serde(default)]
    pub values: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub errors: BTreeMap<String, String>,
    #[serde(default)]
    pub sources: ContractSources,
}

impl AnalyzedContract {
    pub fn new(address: impl Into<EthereumAddress>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
            unverified: false,
            upgradeability: serde_json::Value::Null,
            implementations: Vec::new(),
            values: BTreeMap::new(),
            errors: BTreeMap::new(),
            sources: ContractSources::default(),
        }
    }

    /// Builder-style helper appending one source group.
    pub fn with_source_group(mut self, files: SourceFiles) -> Self {
        self.sources.files.push(files);
        self
    }

    /// Builder-style helper adding one ABI table entry.
    pub fn with_abi(mut self, identifier: impl Into<String>, entries: Vec<String>) -> Self {
        self.sources.abis.insert(identifier.into(), entries);
        self
    }
}

impl From<AnalyzedContract> for Analysis {
    fn from(contract: AnalyzedContract) -> Self {
        Analysis::Contract(contract)
    }
}

/// Source bundles plus the ABIs decoded from them.
///
/// Group order decides the folder names, see [`crate::layout::source_slot_name`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSources {
    #[serde(default)]
    pub files: Vec<SourceFiles>,
    #[serde(default)]
    pub abis: AbiTable,
}
