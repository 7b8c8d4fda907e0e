//! Runs the converter binary the way a user would.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const TRIANGLE: &str = "\
g head
v 0.0 0.0 0.0 1.0 0.0 0.0
v 1.0 0.0 0.0 0.0 1.0 0.0
v 0.0 1.0 0.0 0.0 0.0 1.0
f 1 2 3
";

fn cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_face-obj-converter"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_input(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn converts_next_to_input() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "face.obj", TRIANGLE);
    let output = dir.path().join("face.obj.dae");

    cli()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("face.obj.dae"));

    let xml = fs::read_to_string(&output).unwrap();
    assert!(xml.contains("<p>0 0 1 1 2 2</p>"));
}

#[test]
fn unexpected_line_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "texcoords.obj", "vt 0 0\n");

    cli()
        .arg(&input)
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with(
            "error: line 1: unexpected line vt 0 0",
        ));

    assert!(!dir.path().join("texcoords.obj.dae").exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn output_flag_overrides_path() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "face.obj", TRIANGLE);
    let output = dir.path().join("scene.dae");

    cli()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("scene.dae"));

    assert!(output.exists());
    assert!(!dir.path().join("face.obj.dae").exists());
}

#[test]
fn verbosity_flags() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "face.obj", TRIANGLE);

    cli()
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    cli()
        .arg(&input)
        .arg("-v")
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote 3 vertices and 1 triangles"))
        .stderr(predicate::str::contains("ignoring group declaration").not());

    cli()
        .arg(&input)
        .arg("-vv")
        .assert()
        .success()
        .stderr(predicate::str::contains("ignoring group declaration on line 1"));
}

#[test]
fn rust_log_raises_level() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "face.obj", TRIANGLE);

    cli()
        .env("RUST_LOG", "debug")
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("ignoring group declaration on line 1"));
}

#[test]
fn missing_input_argument() {
    cli().assert().failure().stderr(predicate::str::contains("OBJ_FILE"));
}
