use std::path::{Component, Path, PathBuf};

use crate::error::{DiscoveryError, DiscoveryResult};

/// Folder holding every discovered project, relative to the workspace root.
pub const DISCOVERY_DIR: &str = "discovery";
/// Descriptor file name inside a project folder.
pub const DESCRIPTOR_FILE: &str = "discovered.json";
/// Source tree folder name inside a project folder.
pub const CODE_DIR: &str = ".code";

/// Logical layout of one discovered project on disk.
///
/// This is derived from a workspace root and a project name. It does *not*
/// perform any IO itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryLayout {
    /// Directory containing the `discovery/` folder.
    pub workspace_root: PathBuf,
    /// `discovery/<project>`.
    pub project_root: PathBuf,
    /// `discovery/<project>/discovered.json`.
    pub descriptor_path: PathBuf,
    /// `discovery/<project>/.code`; rebuilt from scratch on every run.
    pub code_dir: PathBuf,
}

impl DiscoveryLayout {
    /// Compute the layout for `project_name` under `workspace_root`.
    pub fn new(workspace_root: impl AsRef<Path>, project_name: &str) -> Self {
        let workspace_root = workspace_root.as_ref().to_path_buf();
        let project_root = workspace_root.join(DISCOVERY_DIR).join(project_name);
        let descriptor_path = project_root.join(DESCRIPTOR_FILE);
        let code_dir = project_root.join(CODE_DIR);

        Self { workspace_root, project_root, descriptor_path, code_dir }
    }

    /// Like [`DiscoveryLayout::new`], but rejects project names that are not a
    /// single plain folder name (`..`, `a/b`, absolute paths, empty).
    pub fn checked(workspace_root: impl AsRef<Path>, project_name: &str) -> DiscoveryResult<Self> {
        let layout = Self::new(workspace_root, project_name);
        layout.validate()?;
        Ok(layout)
    }

    /// Ensure `code_dir` is exactly `discovery/<one folder>/.code` below the
    /// workspace root, so deleting it cannot reach anything else.
    pub fn validate(&self) -> DiscoveryResult<()> {
        let project_name = self
            .project_root
            .strip_prefix(self.workspace_root.join(DISCOVERY_DIR))
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|_| self.project_root.display().to_string());

        let rel = match self.code_dir.strip_prefix(self.workspace_root.join(DISCOVERY_DIR)) {
            Ok(rel) => rel,
            Err(_) => return Err(DiscoveryError::UnsafeProjectName(project_name)),
        };
        let components: Vec<Component<'_>> = rel.components().collect();
        match components.as_slice() {
            [Component::Normal(_), Component::Normal(code)] if code.to_str() == Some(CODE_DIR) => {
                Ok(())
            }
            _ => Err(DiscoveryError::UnsafeProjectName(project_name)),
        }
    }

    /// Folder for one source slot of a contract: `.code/<name><slot>`.
    ///
    /// `slot` is the output of [`source_slot_name`] and may be empty.
    pub fn contract_code_dir(&self, contract_name: &str, slot: &str) -> PathBuf {
        self.code_dir.join(contract_folder(contract_name, slot))
    }
}

/// True when `path` is a non-empty relative path that stays below the folder it
/// is joined onto (only plain and `.` components).
pub fn is_contained_path(path: &str) -> bool {
    !path.is_empty()
        && Path::new(path).components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Folder of a contract's source slot, relative to the code directory.
pub fn contract_folder(contract_name: &str, slot: &str) -> String {
    format!("{contract_name}{slot}")
}

/// Name of the folder under which to save the `index`-th of `count` source
/// groups of one contract.
///
/// - one source (or none): `""`, files go straight into the contract folder;
/// - two sources: `"/proxy"` and `"/implementation"`;
/// - more: `"/proxy"`, `"/implementation-1"`, `"/implementation-2"`, ...
///
/// The suffix uses the group index, so the first implementation of three
/// groups is `implementation-1`.
pub fn source_slot_name(index: usize, count: usize) -> String {
    let mut name = String::new();
    if count > 1 {
        name.push_str(if index == 0 { "proxy" } else { "implementation" });
    }
    if count > 2 && index > 0 {
        name.push_str(&format!("-{index}"));
    }
    if name.is_empty() {
        name
    } else {
        format!("/{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::is_contained_path;

    #[test]
    fn contained_paths_accept_nested_relative_names() {
        assert!(is_contained_path("A.sol"));
        assert!(is_contained_path("contracts/lib/Math.sol"));
        assert!(is_contained_path("./B.sol"));
    }

    #[test]
    fn contained_paths_reject_escapes() {
        assert!(!is_contained_path(""));
        assert!(!is_contained_path("/etc/passwd"));
        assert!(!is_contained_path("../outside.sol"));
        assert!(!is_contained_path("lib/../../outside.sol"));
    }
}
