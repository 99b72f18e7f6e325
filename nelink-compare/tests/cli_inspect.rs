use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn inspect_shows_structure_and_absent_ports() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("links.csv");
    fs::write(
        &path,
        "Source NE,Destination NE,Source Port,Destination Port,Region\n\
         A,B,1,N/A,west\nC,D,n/a,4,east\n",
    )
    .expect("fixture write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nelink-compare"));
    cmd.arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("records=2"))
        .stdout(predicate::str::contains("passthrough_columns=Region"))
        .stdout(predicate::str::contains(
            "absent_source_ports=1 absent_destination_ports=1",
        ))
        .stdout(predicate::str::contains("duplicate_keys=none"));
}

#[test]
fn inspect_missing_file_fails_with_context() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nelink-compare"));
    cmd.arg("inspect")
        .arg("does-not-exist.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
