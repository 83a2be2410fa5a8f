use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::DiscoveryConfig;
use crate::error::{DiscoveryError, DiscoveryResult};
use crate::layout::DiscoveryLayout;
use crate::model::{Analysis, Hash256};
use crate::services::source_tree::{write_source_tree, SourceTreeSummary};
use crate::snapshot::{build_snapshot, find_abi_conflicts, to_pretty_json};

/// What a successful save wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveOutcome {
    pub descriptor_path: PathBuf,
    pub code_dir: PathBuf,
    pub contracts: usize,
    pub eoas: usize,
    pub abis: usize,
    pub abi_conflicts: usize,
    pub tree: SourceTreeSummary,
}

/// Persist one discovery run under `workspace_root/discovery/<config.name>`.
///
/// A project name that is not a single folder name is rejected before
/// anything is written. Steps, in order:
/// 1. build and serialize the snapshot (nothing on disk is touched if this fails);
/// 2. write `discovered.json`;
/// 3. delete and rebuild `.code`.
///
/// Steps 2 and 3 are independent; a failure in 3 does not roll back 2. The
/// caller must not run two saves against the same project concurrently.
pub fn save_discovery_result(
    workspace_root: &Path,
    results: &[Analysis],
    config: &DiscoveryConfig,
    block_number: u64,
    config_hash: Hash256,
) -> DiscoveryResult<SaveOutcome> {
    let layout = DiscoveryLayout::checked(workspace_root, &config.name)?;

    let conflicts = find_abi_conflicts(results);
    for conflict in &conflicts {
        log::warn!(
            "ABI {} of {} overwritten by {}",
            conflict.identifier,
            conflict.overwritten,
            conflict.winner
        );
    }

    let snapshot = build_snapshot(results, config, block_number, config_hash);
    let json = to_pretty_json(&snapshot)?;

    fs::create_dir_all(&layout.project_root)
        .map_err(|e| DiscoveryError::io(&layout.project_root, e))?;
    fs::write(&layout.descriptor_path, json)
        .map_err(|e| DiscoveryError::io(&layout.descriptor_path, e))?;

    let tree = write_source_tree(&layout, results, config)?;

    log::info!(
        "Saved {} at block {}: {} contracts, {} EOAs, {} ABIs, {} source files",
        snapshot.name,
        block_number,
        snapshot.contracts.len(),
        snapshot.eoas.len(),
        snapshot.abis.len(),
        tree.files
    );

    Ok(SaveOutcome {
        descriptor_path: layout.descriptor_path,
        code_dir: layout.code_dir,
        contracts: snapshot.contracts.len(),
        eoas: snapshot.eoas.len(),
        abis: snapshot.abis.len(),
        abi_conflicts: conflicts.len(),
        tree,
    })
}
