//! Tests for the configuration system.

use std::path::PathBuf;
use std::sync::Mutex;

use attack_path_core::config::attack_path_config::PROJECT_CONFIG_FILE;
use attack_path_core::config::{AttackPathConfig, CliOverrides};
use attack_path_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all ATTACK_PATH_ env vars and point HOME at an empty directory
/// so a developer's own user config cannot leak into the test.
fn isolate_env(home: &std::path::Path) {
    for key in [
        "ATTACK_PATH_SEARCH_DEFAULT_SOURCE",
        "ATTACK_PATH_SEARCH_MAX_HOPS",
        "ATTACK_PATH_SCENARIO_STRICT_NODES",
        "ATTACK_PATH_RENDER_HIGHLIGHT_COLOR",
        "ATTACK_PATH_OUTPUT_PATH",
        "ATTACK_PATH_OUTPUT_FORMAT",
    ] {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
    std::env::remove_var("USERPROFILE");
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let user_dir = home.path().join(".attack-path");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        r#"
[render]
highlight_color = "orange"
node_color = "white"
"#,
    )
    .unwrap();

    let project = tempdir();
    std::fs::write(
        project.path().join(PROJECT_CONFIG_FILE),
        r#"
[search]
default_source = "Internet"
max_hops = 6

[render]
highlight_color = "crimson"
"#,
    )
    .unwrap();

    std::env::set_var("ATTACK_PATH_SEARCH_MAX_HOPS", "4");

    let cli = CliOverrides {
        source: Some("VPN_Gateway".into()),
        ..Default::default()
    };
    let config = AttackPathConfig::load(project.path(), Some(&cli)).unwrap();

    // CLI beats project for the source
    assert_eq!(config.search.default_source.as_deref(), Some("VPN_Gateway"));
    // Env beats project for max_hops
    assert_eq!(config.search.max_hops, Some(4));
    // Project beats user for the highlight color
    assert_eq!(config.render.effective_highlight_color(), "crimson");
    // User value survives where nothing overrides it
    assert_eq!(config.render.effective_node_color(), "white");

    std::env::remove_var("ATTACK_PATH_SEARCH_MAX_HOPS");
}

#[test]
fn test_missing_files_fall_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let project = tempdir();
    let config = AttackPathConfig::load(project.path(), None).unwrap();

    assert!(config.search.default_source.is_none());
    assert!(config.search.max_hops.is_none());
    assert!(!config.scenario.effective_strict_nodes());
    assert_eq!(config.render.effective_highlight_color(), "red");
    assert_eq!(config.render.effective_node_color(), "lightblue");
    assert_eq!(config.render.effective_edge_color(), "gray");
    assert_eq!(config.render.effective_label_color(), "blue");
    assert_eq!(config.output.effective_path(), PathBuf::from("attack_path.dot"));
    assert_eq!(config.output.effective_format(), "dot");
}

#[test]
fn test_invalid_project_toml_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let project = tempdir();
    std::fs::write(project.path().join(PROJECT_CONFIG_FILE), "[search\nmax_hops = ").unwrap();

    let err = AttackPathConfig::load(project.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_cli_format_override_is_validated() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let project = tempdir();
    let cli = CliOverrides {
        output_format: Some("png".into()),
        ..Default::default()
    };
    let err = AttackPathConfig::load(project.path(), Some(&cli)).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "output.format"),
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn test_zero_max_hops_rejected() {
    let err = AttackPathConfig::from_toml("[search]\nmax_hops = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "search.max_hops"));
}

#[test]
fn test_empty_color_rejected() {
    let err = AttackPathConfig::from_toml("[render]\nedge_color = \"  \"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "render.edge_color"));
}

#[test]
fn test_unknown_keys_ignored() {
    let config = AttackPathConfig::from_toml(
        r#"
[search]
default_source = "Internet"
future_option = true

[telemetry]
enabled = false
"#,
    )
    .unwrap();
    assert_eq!(config.search.default_source.as_deref(), Some("Internet"));
}

#[test]
fn test_toml_roundtrip_preserves_values() {
    let config = AttackPathConfig::from_toml(
        r#"
[search]
max_hops = 3

[scenario]
strict_nodes = true

[output]
format = "json"
path = "report.json"
"#,
    )
    .unwrap();

    let serialized = config.to_toml().unwrap();
    let reparsed = AttackPathConfig::from_toml(&serialized).unwrap();
    assert_eq!(reparsed.search.max_hops, Some(3));
    assert!(reparsed.scenario.effective_strict_nodes());
    assert_eq!(reparsed.output.effective_format(), "json");
    assert_eq!(reparsed.output.effective_path(), PathBuf::from("report.json"));
}
