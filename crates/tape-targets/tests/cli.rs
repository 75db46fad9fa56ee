#![cfg(feature = "cli")]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn testdata(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../testdata")
        .join(name)
}

fn tape_targets() -> Command {
    Command::cargo_bin("tape-targets").unwrap()
}

#[test]
fn replays_frames_and_dumps_the_table() {
    let output = tape_targets()
        .arg("--frames")
        .arg(testdata("frames.json"))
        .arg("--config")
        .arg(testdata("config.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 5);

    assert_eq!(lines[0]["outcome"], "processed");
    assert_eq!(lines[0]["report"]["measurement"]["x_from_center"], 0);
    assert_eq!(lines[1]["report"]["target"]["kind"], "paired");
    assert_eq!(lines[2]["report"]["published"]["found"], false);
    assert_eq!(lines[3]["report"]["rejected"][0]["reason"]["kind"], "vertex_count");

    let dump = &lines[4];
    assert_eq!(dump["table"], "SmartDashboard");
    assert_eq!(dump["entries"]["Found"], true);
    assert_eq!(dump["entries"]["Proportional"], 2);
}

#[test]
fn camera_table_flag_routes_output() {
    tape_targets()
        .arg("--frames")
        .arg(testdata("frames.json"))
        .arg("--camera-table")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""table":"camera""#));
}

#[test]
fn missing_frames_file_fails() {
    tape_targets()
        .arg("--frames")
        .arg(testdata("does-not-exist.json"))
        .assert()
        .failure()
        .stderr(predicate::str::is_empty().not());
}

#[test]
fn frames_argument_is_required() {
    tape_targets()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--frames"));
}
