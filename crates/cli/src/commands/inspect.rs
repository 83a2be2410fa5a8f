use std::path::Path;

use anyhow::{anyhow, Result};
use discovery_core::layout::source_slot_name;
use discovery_core::snapshot::{parse_discovery_output, to_pretty_json};

use crate::commands::load_inputs;

/// Print the snapshot that `save` would write, without touching disk.
pub fn show_command(results_path: &Path, config_path: &Path, block_number: u64) -> Result<()> {
    let (results, loaded) = load_inputs(results_path, config_path)?;
    let snapshot = parse_discovery_output(&results, &loaded.config, block_number, loaded.hash)?;
    print!("{}", to_pretty_json(&snapshot)?);
    Ok(())
}

/// Folder suffix for source group `index` of `count`, as used under `.code`.
pub fn slot_name(index: usize, count: usize) -> Result<String> {
    if count > 0 && index >= count {
        return Err(anyhow!("Index {} out of range for {} source groups", index, count));
    }
    Ok(source_slot_name(index, count))
}

pub fn slot_name_command(index: usize, count: usize) -> Result<()> {
    println!("{}", slot_name(index, count)?);
    Ok(())
}
