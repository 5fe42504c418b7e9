use std::fs;
use std::process::Command;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_rising")
}

fn site_with_data(data: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("data.json"), data).expect("write data.json");
    dir
}

#[test]
fn render_command_prints_the_fragment() {
    let dir = site_with_data(
        r#"{"characters": [{
            "id": "flame_sovereign",
            "name_zh": "焰皇",
            "stats": [{"label": "HP", "value": "1000"}]
        }]}"#,
    );

    let output = Command::new(bin())
        .args(["render", "/pages/characters/flame_sovereign.html"])
        .arg(dir.path())
        .output()
        .expect("render should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<tr><th>HP</th><td>1000</td></tr>"));
    assert!(stdout.contains("焰皇"));
}

#[test]
fn render_command_reports_a_missing_record() {
    let dir = site_with_data(r#"{"characters": [{"id": "flame_sovereign"}]}"#);

    let output = Command::new(bin())
        .args(["render", "/pages/characters/ghost.html"])
        .arg(dir.path())
        .output()
        .expect("render should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no record matches"));
}

#[test]
fn render_command_without_a_path_returns_usage() {
    let output = Command::new(bin())
        .arg("render")
        .output()
        .expect("render should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: rising render"));
}

#[test]
fn validate_command_accepts_a_clean_catalog() {
    let dir = site_with_data(
        r#"{"characters": [{"id": "a", "name_zh": "甲"}, {"id": "b", "name_zh": "乙"}]}"#,
    );

    let output = Command::new(bin())
        .arg("validate")
        .arg(dir.path().join("data.json"))
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("catalog ok"));
}

#[test]
fn validate_command_flags_duplicate_character_ids() {
    let dir = site_with_data(r#"{"characters": [{"id": "a"}, {"id": "a"}]}"#);

    let output = Command::new(bin())
        .arg("validate")
        .arg(dir.path().join("data.json"))
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("duplicate id"));
}

#[test]
fn validate_command_fails_on_an_unreadable_catalog() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = Command::new(bin())
        .arg("validate")
        .arg(dir.path().join("data.json"))
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn unknown_commands_return_usage() {
    let output = Command::new(bin())
        .arg("conquer")
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: rising <serve|render|validate>"));
}
