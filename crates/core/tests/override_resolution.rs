use discovery_core::config::{resolve_name, ContractOverride, DiscoveryConfig, OverrideResult};
use discovery_core::model::EthereumAddress;

#[test]
fn derived_name_is_used_without_override() {
    let config = DiscoveryConfig::new("project");
    let result = resolve_name("Foo", &EthereumAddress::new("0xA"), &config);
    assert_eq!(result, OverrideResult { name: "Foo".into(), derived_name: None });

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "Foo" }));
}

#[test]
fn override_name_wins_and_keeps_derived_name() {
    let config = DiscoveryConfig::new("project").with_name_override("0xA", "Bar");
    let result = resolve_name("Foo", &EthereumAddress::new("0xA"), &config);
    assert_eq!(result, OverrideResult { name: "Bar".into(), derived_name: Some("Foo".into()) });

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "Bar", "derivedName": "Foo" }));
}

#[test]
fn override_without_name_is_ignored() {
    let mut config = DiscoveryConfig::new("project");
    config.overrides.insert(EthereumAddress::new("0xA"), ContractOverride { name: None });
    config
        .overrides
        .insert(EthereumAddress::new("0xB"), ContractOverride { name: Some(String::new()) });

    let a = resolve_name("Foo", &EthereumAddress::new("0xA"), &config);
    assert_eq!(a.name, "Foo");
    assert!(a.derived_name.is_none());

    let b = resolve_name("Baz", &EthereumAddress::new("0xB"), &config);
    assert_eq!(b.name, "Baz");
    assert!(b.derived_name.is_none());
}

#[test]
fn override_for_other_address_does_not_apply() {
    let config = DiscoveryConfig::new("project").with_name_override("0xB", "Bar");
    let result = resolve_name("Foo", &EthereumAddress::new("0xA"), &config);
    assert_eq!(result.name, "Foo");
}

#[test]
fn override_key_matches_regardless_of_letter_case() {
    let config = DiscoveryConfig::new("project").with_name_override("0xabcdef", "Bridge");
    let result = resolve_name("Derived", &EthereumAddress::new("0xABCDEF"), &config);
    assert_eq!(result.name, "Bridge");
    assert_eq!(result.derived_name.as_deref(), Some("Derived"));
}

#[test]
fn exact_override_key_wins_over_case_insensitive_match() {
    let config = DiscoveryConfig::new("project")
        .with_name_override("0xabcdef", "Lower")
        .with_name_override("0xABCDEF", "Upper");
    let result = resolve_name("Derived", &EthereumAddress::new("0xABCDEF"), &config);
    assert_eq!(result.name, "Upper");
}

#[test]
fn deserialized_override_keys_are_trimmed_and_case_matched() {
    let config: DiscoveryConfig = serde_json::from_str(
        r#"{ "name": "project", "overrides": { " 0xabcdef ": { "name": "Bridge" } } }"#,
    )
    .unwrap();
    let result = resolve_name("Derived", &EthereumAddress::new("0xAbCdEf"), &config);
    assert_eq!(result.name, "Bridge");
}
