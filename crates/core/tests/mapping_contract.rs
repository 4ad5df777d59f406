// Mapping configuration contract tests
// Deserialization of both mapping forms and the format/unformat round trip
// through a config-driven rule table.

use namecast_core::model::mapping::{MappingEntry, MappingSpec};
use namecast_core::resolver::formatter::format_class;
use namecast_core::resolver::rules::{ConfigError, RuleTable};
use namecast_core::resolver::unformatter::unformat_class;
use namecast_core::ResolverConfig;

fn table_from_yaml(raw: &str) -> RuleTable {
    let config = ResolverConfig::from_yaml_str(raw).expect("config must parse");
    let mut table = RuleTable::new();
    table.set_mapping(config.mapping).expect("mapping must compile");
    table
}

#[test]
fn test_json_config_drives_formatting() {
    let raw = r#"{
        "capability": "controller",
        "mapping": [
            {"module": "*", "mask": "App\\*Module\\*Controller"}
        ]
    }"#;
    let config = ResolverConfig::from_json_str(raw).unwrap();
    assert_eq!(config.capability, "controller");

    let mut table = RuleTable::new();
    table.set_mapping(config.mapping).unwrap();
    assert_eq!(
        format_class("Admin:Users", &table),
        "App\\AdminModule\\UsersController"
    );
}

#[test]
fn test_yaml_config_with_module_rule() {
    let table = table_from_yaml(
        r#"
mapping:
  - module: Shop
    mask: ["ShopModule", "Presenters*", "*Controller"]
"#,
    );
    assert_eq!(
        format_class("Shop:Cart", &table),
        "ShopModule\\CartController"
    );
    // Names outside the Shop module still use the seeded wildcard rule.
    assert_eq!(format_class("Homepage", &table), "HomepageController");
}

#[test]
fn test_config_driven_round_trip() {
    let table = table_from_yaml(
        r#"
mapping:
  - module: "*"
    mask: "App\\*Module\\*Controller"
  - module: Shop
    mask: ["ShopModule", "Presenters*", "*Controller"]
"#,
    );
    for name in ["Homepage", "Admin:Users", "Shop:Checkout:Payment"] {
        let class = format_class(name, &table);
        assert_eq!(unformat_class(&class, &table), Some(name.to_string()));
    }
}

#[test]
fn test_malformed_mask_from_config_halts_compilation() {
    let config = ResolverConfig::from_yaml_str(
        r#"
mapping:
  - module: "*"
    mask: "no placeholders here"
"#,
    )
    .unwrap();

    let mut table = RuleTable::new();
    let error = table.set_mapping(config.mapping).unwrap_err();
    assert!(matches!(error, ConfigError::InvalidMask { .. }));
}

#[test]
fn test_wrong_arity_from_config_halts_compilation() {
    let mut table = RuleTable::new();
    let error = table
        .set_mapping(vec![MappingEntry::new(
            "Shop",
            MappingSpec::parts(["one", "two", "three", "four"]),
        )])
        .unwrap_err();
    assert!(matches!(
        error,
        ConfigError::InvalidPartCount { found: 4, .. }
    ));
}
