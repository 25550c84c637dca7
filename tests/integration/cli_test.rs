//! CLI tests
//!
//! Runs the actual binary with HOME pointed at a temp directory so the real
//! configuration is never touched.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn deskcon(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("deskcon").expect("binary should build");
    cmd.env("HOME", home.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_describes_the_console() {
    let home = TempDir::new().unwrap();
    deskcon(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("deskcon"))
        .stdout(predicate::str::contains("--root"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_prints_the_package_version() {
    let home = TempDir::new().unwrap();
    deskcon(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_fails() {
    let home = TempDir::new().unwrap();
    deskcon(&home).arg("record").assert().failure();
}

#[cfg(unix)]
#[test]
fn config_path_points_into_home() {
    let home = TempDir::new().unwrap();
    deskcon(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".config/deskcon/config.toml"));
}

#[cfg(unix)]
#[test]
fn config_show_prints_defaults_without_a_file() {
    let home = TempDir::new().unwrap();
    deskcon(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[scrollback]"))
        .stdout(predicate::str::contains("capacity = 1000"))
        .stdout(predicate::str::contains("directory = \"Desktop\""));
}

#[cfg(unix)]
#[test]
fn config_init_writes_once() {
    let home = TempDir::new().unwrap();
    let path = home.path().join(".config/deskcon/config.toml");

    deskcon(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    assert!(path.exists());

    deskcon(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config already exists"));
}

#[cfg(unix)]
#[test]
fn config_show_reflects_the_file() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".config/deskcon");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[history]\ncapacity = 42\n").unwrap();

    deskcon(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("capacity = 42"));
}

#[cfg(unix)]
#[test]
fn invalid_config_is_an_error() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".config/deskcon");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[scrollback]\ncapacity = 0\n").unwrap();

    deskcon(&home)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("scrollback.capacity"));
}
