use std::path::Path;

use anyhow::{Context, Result};
use discovery_core::services::save_discovery_result;

use crate::commands::load_inputs;
use crate::resolve_workspace_root;

/// Write `discovery/<project>/discovered.json` and rebuild its `.code` tree.
pub fn save_command(
    root: &str,
    results_path: &Path,
    config_path: &Path,
    block_number: u64,
    json: bool,
) -> Result<()> {
    let workspace_root = resolve_workspace_root(root)?;
    let (results, loaded) = load_inputs(results_path, config_path)?;

    let outcome = save_discovery_result(
        &workspace_root,
        &results,
        &loaded.config,
        block_number,
        loaded.hash,
    )
    .with_context(|| format!("Failed to save discovery result for {}", loaded.config.name))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("Saved discovery for {}:", loaded.config.name);
    println!("  Block number: {}", block_number);
    println!("  Config hash: {}", loaded.hash);
    println!("  Descriptor: {}", outcome.descriptor_path.display());
    println!("  Code dir: {}", outcome.code_dir.display());
    println!("  Contracts: {}", outcome.contracts);
    println!("  EOAs: {}", outcome.eoas);
    println!("  ABIs: {}", outcome.abis);
    println!("  Source files: {} ({} slots)", outcome.tree.files, outcome.tree.slots);
    if outcome.abi_conflicts > 0 {
        println!("  ABI conflicts (last write won): {}", outcome.abi_conflicts);
    }

    Ok(())
}
