use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::config::DiscoveryConfig;
use crate::error::{DiscoveryError, DiscoveryResult};
use crate::model::Hash256;

/// A config read from disk together with the hash of its raw bytes.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: DiscoveryConfig,
    pub hash: Hash256,
}

/// SHA-256 of a config file's raw contents.
pub fn hash_config_bytes(bytes: &[u8]) -> Hash256 {
    let digest = Sha256::digest(bytes);
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    Hash256::from_bytes(out)
}

/// Load a discovery config from `.json`, `.yaml` or `.yml`.
pub fn load_discovery_config(path: &Path) -> DiscoveryResult<LoadedConfig> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_ascii_lowercase();
    if !matches!(ext.as_str(), "json" | "yaml" | "yml") {
        return Err(DiscoveryError::UnsupportedConfigFormat(path.to_path_buf()));
    }

    let body = fs::read(path).map_err(|e| DiscoveryError::io(path, e))?;
    let config: DiscoveryConfig = if ext == "json" {
        serde_json::from_slice(&body)?
    } else {
        serde_yaml::from_slice(&body)?
    };

    log::debug!(
        "Loaded discovery config {} ({} overrides) from {}",
        config.name,
        config.overrides.len(),
        path.display()
    );
    Ok(LoadedConfig { config, hash: hash_config_bytes(&body) })
}
