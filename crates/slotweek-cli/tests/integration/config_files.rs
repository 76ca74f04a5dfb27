//! Config files on disk.

use crate::common::Workspace;
use slotweek_cli::config_handlers::{cmd_config_init, lookup};
use slotweek_cli::SlotweekConfig;
use slotweek_editor::ExtendPolicy;

#[test]
fn test_missing_explicit_file_yields_defaults() {
    let ws = Workspace::new();
    let path = ws.path("nope.toml");

    let config = SlotweekConfig::load(path.to_str()).unwrap();
    assert_eq!(config, SlotweekConfig::default());
}

#[test]
fn test_file_values_apply() {
    let ws = Workspace::new();
    let path = ws.file(
        "config.toml",
        r#"
[editor]
extend_policy = "restore"

[logging]
filter = "warn"

[output]
pretty = true
"#,
    );

    let config = SlotweekConfig::load(path.to_str()).unwrap();
    assert_eq!(config.editor.extend_policy, ExtendPolicy::Restore);
    assert_eq!(config.logging.filter, "warn");
    assert!(config.output.pretty);
    assert_eq!(lookup(&config, "logging.filter").unwrap(), "warn");
}

#[test]
fn test_init_then_load() {
    let ws = Workspace::new();
    let path = ws.path("slotweek/config.toml");

    cmd_config_init(path.to_str(), false).unwrap();
    let config = SlotweekConfig::load(path.to_str()).unwrap();
    assert_eq!(config, SlotweekConfig::default());
}

#[test]
fn test_unknown_policy_in_file_is_rejected() {
    let ws = Workspace::new();
    let path = ws.file("config.toml", "[editor]\nextend_policy = \"wobbly\"\n");

    assert!(SlotweekConfig::load(path.to_str()).is_err());
}
