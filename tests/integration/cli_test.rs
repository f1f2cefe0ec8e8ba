//! Integration tests for the panestyle CLI

use predicates::prelude::*;

use crate::helpers::{panestyle, write_config};

fn stdout_of(args: &[&str]) -> String {
    let output = panestyle().args(args).output().expect("run panestyle");
    assert!(output.status.success(), "panestyle {args:?} failed");
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

// ============================================================================
// Help
// ============================================================================

#[test]
fn help_lists_subcommands() {
    panestyle()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("palette"))
        .stdout(predicate::str::contains("grid"));
}

#[test]
fn show_help_lists_state_flags() {
    panestyle()
        .args(["show", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--status"))
        .stdout(predicate::str::contains("--viewport-height"))
        .stdout(predicate::str::contains("--format"));
}

// ============================================================================
// show
// ============================================================================

#[test]
fn show_alternate_finished_row_as_css() {
    let css = stdout_of(&[
        "show", "row", "--status", "success", "--buffer", "alternate", "--format", "css",
    ]);
    insta::assert_snapshot!(css, @"height: 70px; min-height: 18px; padding: 0 10px");
}

#[test]
fn show_defaults_to_json() {
    let json = stdout_of(&["show", "tab-close", "--hover", "close"]);
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["color"], "#bf616a");
    assert_eq!(value["position"], "absolute");
}

#[test]
fn show_json_writes_whole_pixels_as_integers() {
    let json = stdout_of(&["show", "row", "--status", "success", "--buffer", "alternate"]);
    assert!(json.contains("\"height\": 70,"), "{json}");
    assert!(json.contains("\"minHeight\": 18"), "{json}");
}

#[test]
fn show_tab_close_without_hover_is_transparent() {
    let json = stdout_of(&["show", "tab-close"]);
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["color"], "transparent");
}

#[test]
fn show_autocomplete_box_flips_above_near_bottom() {
    let below = stdout_of(&[
        "show", "autocomplete-box", "--offset-top", "548", "--viewport-height", "800",
    ]);
    let above = stdout_of(&[
        "show", "autocomplete-box", "--offset-top", "549", "--viewport-height", "800",
    ]);
    let below: serde_json::Value = serde_json::from_str(&below).expect("valid json");
    let above: serde_json::Value = serde_json::from_str(&above).expect("valid json");

    assert_eq!(below["top"], 27.0);
    assert_eq!(below["bottom"], "auto");
    assert_eq!(above["top"], "auto");
    assert_eq!(above["bottom"], 28.0);
}

#[test]
fn show_cursor_cell_wins_over_inverse() {
    let json = stdout_of(&["show", "char-group", "--inverse", "--cursor"]);
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["color"], "#2b303b");
    assert_eq!(value["backgroundColor"], "#c0c5ce");
}

#[test]
fn state_names_are_case_insensitive() {
    let lower = stdout_of(&["show", "arrow", "--status", "failure"]);
    let upper = stdout_of(&["show", "arrow", "--status", "FAILURE"]);
    assert_eq!(lower, upper);
}

#[test]
fn unknown_status_is_a_usage_error() {
    panestyle()
        .args(["show", "row", "--status", "bogus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown status 'bogus'"));
}

#[test]
fn unknown_element_is_a_usage_error() {
    panestyle()
        .args(["show", "sidebar"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value 'sidebar'"));
}

// ============================================================================
// palette and grid
// ============================================================================

#[test]
fn palette_lists_colors_and_surfaces() {
    panestyle()
        .arg("palette")
        .assert()
        .success()
        .stdout(predicate::str::contains("#2b303b"))
        .stdout(predicate::str::contains("prompt_background"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn grid_prints_compiled_templates() {
    panestyle()
        .arg("grid")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "grid-template-areas: 'decoration prompt actions'",
        ))
        .stdout(predicate::str::contains("grid-template-columns: 30px 1fr 150px"));
}

// ============================================================================
// --config
// ============================================================================

#[test]
fn config_override_changes_output() {
    let (_dir, path) = write_config("[theme.colors]\nred = \"#ff0000\"\n");
    let path = path.to_str().expect("utf-8 path");
    let json = stdout_of(&["show", "tab-close", "--hover", "close", "--config", path]);
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["color"], "#ff0000");
}

#[test]
fn missing_config_file_exits_1() {
    panestyle()
        .args(["grid", "--config", "/nonexistent/panestyle.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn invalid_config_exits_1() {
    let (_dir, path) = write_config("[theme.colors]\nred = \"crimson\"\n");
    panestyle()
        .arg("palette")
        .arg("--config")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("must start with '#'"));
}
