//! Shared helpers for integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A `panestyle` command that never reads the user's real config.
pub fn panestyle() -> Command {
    let mut cmd = Command::cargo_bin("panestyle").expect("binary should build");
    cmd.env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", "/nonexistent/panestyle-test")
        .env_remove("RUST_LOG");
    cmd
}

/// Write `content` to a fresh `config.toml` and return its path.
pub fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("write config");
    (dir, path)
}
