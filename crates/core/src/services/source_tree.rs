use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{resolve_name, DiscoveryConfig};
use crate::error::{DiscoveryError, DiscoveryResult};
use crate::layout::{is_contained_path, source_slot_name, DiscoveryLayout};
use crate::model::Analysis;

/// Counts of what a source tree rebuild wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTreeSummary {
    pub contracts: usize,
    pub slots: usize,
    pub files: usize,
}

/// One file to write, with its final location already checked.
struct PlannedFile<'a> {
    path: PathBuf,
    content: &'a str,
}

/// Delete `layout.code_dir` and write every contract's sources back into it.
///
/// Layout: `.code/<resolved-name><slot>/<file>`, where `<slot>` comes from
/// [`source_slot_name`]. EOAs contribute nothing.
///
/// Every target path is checked before `.code` is deleted, so an unsafe
/// project name, contract name or file name leaves the previous tree as it
/// was. After deletion the writes are not transactional: the first IO error
/// aborts and leaves whatever was already written in place.
pub fn write_source_tree(
    layout: &DiscoveryLayout,
    results: &[Analysis],
    config: &DiscoveryConfig,
) -> DiscoveryResult<SourceTreeSummary> {
    layout.validate()?;
    let (plan, summary) = plan_source_tree(layout, results, config)?;

    remove_dir_if_exists(&layout.code_dir)?;

    for file in &plan {
        if let Some(parent) = file.path.parent() {
            fs::create_dir_all(parent).map_err(|e| DiscoveryError::io(parent, e))?;
        }
        fs::write(&file.path, file.content).map_err(|e| DiscoveryError::io(&file.path, e))?;
        log::debug!("Wrote {}", file.path.display());
    }

    Ok(summary)
}

fn plan_source_tree<'a>(
    layout: &DiscoveryLayout,
    results: &'a [Analysis],
    config: &DiscoveryConfig,
) -> DiscoveryResult<(Vec<PlannedFile<'a>>, SourceTreeSummary)> {
    let mut plan = Vec::new();
    let mut summary = SourceTreeSummary::default();

    for result in results {
        let contract = match result {
            Analysis::Eoa { .. } => continue,
            Analysis::Contract(contract) => contract,
        };

        let name = resolve_name(&contract.name, &contract.address, config).name;
        if !is_contained_path(&name) {
            return Err(DiscoveryError::UnsafeContractName {
                address: contract.address.to_string(),
                name,
            });
        }

        let count = contract.sources.files.len();
        for (i, files) in contract.sources.files.iter().enumerate() {
            let slot_dir = layout.contract_code_dir(&name, &source_slot_name(i, count));
            for (file, content) in files {
                if !is_contained_path(file) {
                    return Err(DiscoveryError::UnsafeSourcePath {
                        contract: name.clone(),
                        file: file.clone(),
                    });
                }
                plan.push(PlannedFile { path: slot_dir.join(file), content });
                summary.files += 1;
            }
            summary.slots += 1;
        }
        summary.contracts += 1;
    }

    Ok((plan, summary))
}

/// Recursive delete that treats a missing directory as success.
fn remove_dir_if_exists(dir: &Path) -> DiscoveryResult<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => {
            log::debug!("Removed {}", dir.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(DiscoveryError::io(dir, e)),
    }
}
