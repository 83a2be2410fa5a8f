//! Discovery configuration as seen by the snapshot writer.
//!
//! Only the project name and the per-address name overrides matter here. The
//! config is owned by the caller and never mutated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DiscoveryResult;
use crate::model::{EthereumAddress, Hash256};

mod loader;

pub use loader::{hash_config_bytes, load_discovery_config, LoadedConfig};

/// Project-level discovery configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Project name; also the folder name under `discovery/`.
    pub name: String,
    #[serde(default)]
    pub overrides: BTreeMap<EthereumAddress, ContractOverride>,
}

/// User-supplied settings for one address.
///
/// Keys this crate does not use (ignore lists, field handlers, ...) are
/// accepted and dropped when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DiscoveryConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), overrides: BTreeMap::new() }
    }

    /// Builder-style helper registering a name override for `address`.
    pub fn with_name_override(
        mut self,
        address: impl Into<EthereumAddress>,
        name: impl Into<String>,
    ) -> Self {
        self.overrides.insert(address.into(), ContractOverride { name: Some(name.into()) });
        self
    }

    /// Override for `address`. An exact key wins; otherwise a key differing
    /// only in hex letter case is used.
    pub fn override_for(&self, address: &EthereumAddress) -> Option<&ContractOverride> {
        self.overrides.get(address).or_else(|| {
            self.overrides.iter().find(|(key, _)| key.matches(address)).map(|(_, o)| o)
        })
    }

    /// SHA-256 of the canonical JSON encoding of this config.
    ///
    /// Configs read from disk are hashed over their raw bytes instead, see
    /// [`hash_config_bytes`].
    pub fn content_hash(&self) -> DiscoveryResult<Hash256> {
        let canonical = serde_json::to_vec(self)?;
        Ok(hash_config_bytes(&canonical))
    }
}

/// Display name for a contract, plus the derived name when an override won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideResult {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derived_name: Option<String>,
}

/// Resolve the display name of the contract at `address`.
///
/// Without an override (or with an empty override name) the derived name is
/// used as-is and `derived_name` stays `None`.
pub fn resolve_name(
    derived_name: &str,
    address: &EthereumAddress,
    config: &DiscoveryConfig,
) -> OverrideResult {
    match config
        .override_for(address)
        .and_then(|o| o.name.as_deref())
        .filter(|name| !name.is_empty())
    {
        Some(name) => OverrideResult {
            name: name.to_string(),
            derived_name: Some(derived_name.to_string()),
        },
        None => OverrideResult { name: derived_name.to_string(), derived_name: None },
    }
}
