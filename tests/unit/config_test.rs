//! Unit tests for config module

use std::fs;
use std::time::Duration;

use deskcon::Config;
use tempfile::TempDir;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert!(config.shell.program.is_none());
    assert!(config.shell.args.is_empty());
    assert_eq!(config.sandbox.directory, "Desktop");
    assert_eq!(config.sandbox.max_parent_depth, 2);
    assert_eq!(config.scrollback.capacity, 1000);
    assert_eq!(config.scrollback.evict_chunk, 100);
    assert_eq!(config.history.capacity, 100);
    assert_eq!(config.input.repeat_delay_ms, 500);
    assert_eq!(config.input.repeat_interval_ms, 50);
    assert_eq!(config.input.double_click_ms, 400);
    assert_eq!(config.clipboard.toast_ms, 1500);
    assert_eq!(config.clipboard.toast_fade_start_ms, 1000);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn config_serialization_roundtrip() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let toml_str = r#"
[scrollback]
capacity = 200

[shell]
program = "bash"
args = ["--norc"]
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.scrollback.capacity, 200);
    assert_eq!(config.scrollback.evict_chunk, 100);
    assert_eq!(config.history.capacity, 100);
    assert_eq!(config.shell.program.as_deref(), Some("bash"));
    assert_eq!(config.shell_command().args, vec!["--norc"]);
}

#[test]
fn empty_toml_is_the_default_config() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn validate_rejects_unusable_values() {
    let mut config = Config::default();
    config.scrollback.capacity = 0;
    assert!(config.validate().unwrap_err().contains("scrollback.capacity"));

    let mut config = Config::default();
    config.scrollback.evict_chunk = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.scrollback.evict_chunk = 2000;
    assert!(config.validate().unwrap_err().contains("exceeds"));

    let mut config = Config::default();
    config.history.capacity = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.input.repeat_interval_ms = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.clipboard.toast_fade_start_ms = 2000;
    assert!(config.validate().unwrap_err().contains("toast"));
}

#[test]
fn load_from_missing_file_returns_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn save_then_load_preserves_changes() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.sandbox.directory = "/srv/console".to_string();
    config.history.capacity = 7;
    config.save_to(&path).unwrap();

    assert!(path.exists());
    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn load_from_rejects_invalid_values() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[history]\ncapacity = 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("history.capacity"));
}

#[test]
fn load_from_reports_parse_errors_with_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[scrollback\ncapacity = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn sandbox_root_expands_home() {
    let mut config = Config::default();
    config.sandbox.directory = "~/scratch".to_string();
    if let Some(home) = dirs::home_dir() {
        assert_eq!(config.sandbox_root(), home.join("scratch"));
    }

    config.sandbox.directory = "Desktop".to_string();
    assert_eq!(config.sandbox_root(), std::path::PathBuf::from("Desktop"));
}

#[test]
fn shell_command_falls_back_to_platform_default() {
    let config = Config::default();
    let shell = config.shell_command();
    if cfg!(windows) {
        assert_eq!(shell.program, "powershell");
    } else {
        assert_eq!(shell.program, "sh");
    }
}

#[test]
fn session_settings_carry_the_configured_values() {
    let mut config = Config::default();
    config.scrollback.capacity = 300;
    config.scrollback.evict_chunk = 30;
    config.input.repeat_delay_ms = 250;
    config.clipboard.toast_ms = 900;
    config.clipboard.toast_fade_start_ms = 600;

    let settings = config.session_settings();
    assert_eq!(settings.scrollback_capacity, 300);
    assert_eq!(settings.evict_chunk, 30);
    assert_eq!(settings.repeat_delay, Duration::from_millis(250));
    assert_eq!(settings.toast_duration, Duration::from_millis(900));
    assert_eq!(settings.toast_fade_start, Duration::from_millis(600));
    assert_eq!(settings.root, config.sandbox_root());
}

#[test]
fn log_file_defaults_into_the_config_dir() {
    let mut config = Config::default();
    if let Ok(dir) = Config::config_dir() {
        assert_eq!(config.log_file().unwrap(), dir.join("deskcon.log"));
    }

    config.logging.file = Some("/tmp/console.log".into());
    assert_eq!(
        config.log_file().unwrap(),
        std::path::PathBuf::from("/tmp/console.log")
    );
}
