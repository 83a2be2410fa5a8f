use std::fs;

use discovery_core::config::{hash_config_bytes, load_discovery_config, DiscoveryConfig};
use discovery_core::model::EthereumAddress;
use discovery_core::DiscoveryError;
use tempfile::tempdir;

#[test]
fn loads_json_config_and_hashes_raw_bytes() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("config.json");
    let body = r#"{
  "name": "arbitrum",
  "initialAddresses": ["0x1"],
  "overrides": {
    "0xAAA": { "name": "Rollup", "ignoreMethods": ["foo"] },
    "0xBBB": { "ignoreDiscovery": true }
  }
}"#;
    fs::write(&path, body).unwrap();

    let loaded = load_discovery_config(&path).expect("load config");
    assert_eq!(loaded.config.name, "arbitrum");
    assert_eq!(loaded.hash, hash_config_bytes(body.as_bytes()));

    let rollup = loaded.config.override_for(&EthereumAddress::new("0xAAA")).unwrap();
    assert_eq!(rollup.name.as_deref(), Some("Rollup"));
    let ignored = loaded.config.override_for(&EthereumAddress::new("0xBBB")).unwrap();
    assert!(ignored.name.is_none());
}

#[test]
fn loads_yaml_config() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("config.yaml");
    fs::write(&path, "name: optimism\noverrides:\n  \"0xAAA\":\n    name: Portal\n").unwrap();

    let loaded = load_discovery_config(&path).expect("load yaml");
    assert_eq!(loaded.config, DiscoveryConfig::new("optimism").with_name_override("0xAAA", "Portal"));
}

#[test]
fn unknown_extension_is_rejected() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "name = 'x'").unwrap();

    match load_discovery_config(&path) {
        Err(DiscoveryError::UnsupportedConfigFormat(p)) => assert_eq!(p, path),
        other => panic!("expected UnsupportedConfigFormat, got {other:?}"),
    }
}

#[test]
fn missing_file_reports_io_error() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("absent.json");
    assert!(matches!(load_discovery_config(&path), Err(DiscoveryError::Io { .. })));
}

#[test]
fn content_hash_is_stable_and_sensitive_to_overrides() {
    let plain = DiscoveryConfig::new("p");
    let renamed = DiscoveryConfig::new("p").with_name_override("0x1", "X");
    assert_eq!(plain.content_hash().unwrap(), plain.content_hash().unwrap());
    assert_ne!(plain.content_hash().unwrap(), renamed.content_hash().unwrap());
}
