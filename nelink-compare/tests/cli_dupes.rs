use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const HEADER: &str = "Source NE,Destination NE,Source Port,Destination Port\n";

fn write_csv(dir: &Path, name: &str, rows: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("{HEADER}{rows}")).expect("fixture write");
    path
}

#[test]
fn dupes_lists_repeated_keys() {
    let dir = tempdir().expect("tempdir");
    let file = write_csv(dir.path(), "links.csv", "A,B,1,2\nC,D,3,4\nA,B,5,6\n");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nelink-compare"));
    cmd.arg("dupes")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B count=2 rows=[0, 2]"));
}

#[test]
fn dupes_reports_clean_table() {
    let dir = tempdir().expect("tempdir");
    let file = write_csv(dir.path(), "links.csv", "A,B,1,2\nC,D,3,4\n");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nelink-compare"));
    cmd.arg("dupes")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("no duplicate keys"));
}

#[test]
fn dupes_ignore_direction_collapses_reversed_links() {
    let dir = tempdir().expect("tempdir");
    let file = write_csv(dir.path(), "links.csv", "A,B,1,2\nB,A,2,1\n");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nelink-compare"));
    cmd.arg("dupes")
        .arg(&file)
        .arg("--ignore-direction")
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B count=2"));
}

#[test]
fn dupes_json_outputs_groups() {
    let dir = tempdir().expect("tempdir");
    let file = write_csv(dir.path(), "links.csv", "A,B,1,2\nA,B,5,6\n");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nelink-compare"));
    cmd.arg("dupes")
        .arg(&file)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 2"));
}
