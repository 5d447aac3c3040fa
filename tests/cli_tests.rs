//! End-to-end tests of the swatch-solver binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn cmd() -> Command {
    Command::cargo_bin("swatch-solver").expect("binary builds")
}

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_identify_exact() {
    cmd()
        .args(["identify", "#2196F3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exact match for #2196f3"))
        .stdout(predicate::str::contains("blue 500 (#2196f3)"));
}

#[test]
fn test_identify_nearest_tsv() {
    let output = cmd()
        .args(["identify", "rgb(244, 67, 55)", "--format", "tsv"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 4, "header plus three suggestions");
    assert!(lines[0].starts_with("rank\tkind"));
    assert!(lines[1].starts_with("1\tnearest\tred\t\t500\t#f44336\t1.0000"));
}

#[test]
fn test_identify_json_custom_count() {
    let output = cmd()
        .args(["identify", "#123456", "-n", "5", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["kind"], "nearest");
    assert_eq!(json["query"], "#123456");
    assert_eq!(json["matches"].as_array().unwrap().len(), 5);
}

#[test]
fn test_identify_invalid_color() {
    cmd()
        .args(["identify", "not-a-color"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized color"));
}

#[test]
fn test_format_default_template() {
    cmd()
        .args(["format", "#03a9f4"])
        .assert()
        .success()
        .stdout("Light Blue 500\n");
}

#[test]
fn test_format_grouped_color_all_templates() {
    cmd()
        .args(["format", "rgba(255, 138, 128, 0.5)", "--all"])
        .assert()
        .success()
        .stdout("Red Accent-A100\nred-accent-a100\nRED_ACCENT-A100\nRed Accent-A100 50%\n");
}

#[test]
fn test_format_ad_hoc_pattern() {
    cmd()
        .args([
            "format",
            "#e1f5fe",
            "--pattern",
            "$HUE-$VALUE",
            "--transform",
            "dX",
        ])
        .assert()
        .success()
        .stdout("LIGHTBLUE-50\n");
}

#[test]
fn test_format_raw() {
    cmd()
        .args(["format", "#ABCDEF", "--raw", "--pattern", "$HUE:$ALPHA"])
        .assert()
        .success()
        .stdout("abcdef:100\n");
}

#[test]
fn test_format_template_file() {
    let templates = write_temp(r#"[{"pattern": "$VALUE of $HUE", "transform": "X"}, {"pattern": "$HUE"}]"#);

    cmd()
        .args(["format", "#4caf50", "--template", "1", "--templates"])
        .arg(templates.path())
        .assert()
        .success()
        .stdout("green\n");

    cmd()
        .args(["format", "#4caf50", "--templates"])
        .arg(templates.path())
        .assert()
        .success()
        .stdout("500 of GREEN\n");
}

#[test]
fn test_format_template_out_of_range() {
    cmd()
        .args(["format", "#4caf50", "--template", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_catalog_list() {
    cmd()
        .args(["catalog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Color Catalog (20 hues)"))
        .stdout(predicate::str::contains("deep-purple"));
}

#[test]
fn test_catalog_show() {
    cmd()
        .args(["catalog", "show", "red", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("red\t\t500\t#f44336"))
        .stdout(predicate::str::contains("red\taccent\ta700\t#d50000"));

    cmd()
        .args(["catalog", "show", "chartreuse"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Hue not found"));
}

#[test]
fn test_custom_catalog() {
    let catalog = write_temp(
        r##"{
            "version": "1.0.0",
            "hues": [
                {"name": "ink", "values": [{"key": "deep", "hex": "#101010"}]},
                {"name": "paper", "values": [{"key": "plain", "hex": "#FAFAFA"}]}
            ]
        }"##,
    );

    cmd()
        .args(["identify", "#111111", "-n", "1", "--catalog"])
        .arg(catalog.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ink deep (#101010)"));

    cmd()
        .args(["catalog", "export", "--catalog"])
        .arg(catalog.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"paper\""))
        .stdout(predicate::str::contains("#fafafa"));
}

#[test]
fn test_invalid_catalog_file() {
    let catalog = write_temp(
        r#"{"version": "1.0.0", "hues": [{"name": "a"}, {"name": "a"}]}"#,
    );

    cmd()
        .args(["catalog", "list", "--catalog"])
        .arg(catalog.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate hue name"));
}
