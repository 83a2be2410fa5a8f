use std::fs;

use discovery_snapshot::resolve_workspace_root;
use tempfile::tempdir;

#[test]
fn resolve_workspace_root_returns_cwd_for_dot() {
    let cwd = std::env::current_dir().expect("cwd");
    assert_eq!(resolve_workspace_root(".").expect("resolve"), cwd);
}

#[test]
fn resolve_workspace_root_canonicalizes_existing_dirs() {
    let tmp = tempdir().expect("tempdir");
    let nested = tmp.path().join("nested");
    fs::create_dir_all(&nested).expect("create nested");

    let resolved = resolve_workspace_root(nested.to_str().unwrap()).expect("resolve");
    assert_eq!(resolved, nested.canonicalize().unwrap());
}

#[test]
fn resolve_workspace_root_keeps_missing_absolute_paths() {
    let tmp = tempdir().expect("tempdir");
    let missing = tmp.path().join("not-yet");
    let resolved = resolve_workspace_root(missing.to_str().unwrap()).expect("resolve");
    assert_eq!(resolved, missing);
}
