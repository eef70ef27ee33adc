//! Drives the `dbsession` binary in a scratch working directory.

use assert_cmd::Command;
use tempfile::TempDir;

fn run_in(dir: &TempDir) -> std::process::Output {
    Command::cargo_bin("dbsession")
        .unwrap()
        .current_dir(dir.path())
        .output()
        .unwrap()
}

#[test]
fn test_first_run_creates_database_and_commits() {
    let dir = TempDir::new().unwrap();

    let output = run_in(&dir);
    assert!(output.status.success());
    assert!(dir.path().join("newdb.sqlite").exists());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "Connected!\nTable `TEST_TABLE` created.\n[TEST_TABLE]\ntransaction committed!\n"
    );
}

#[test]
fn test_second_run_logs_schema_error_then_fails() {
    let dir = TempDir::new().unwrap();
    assert!(run_in(&dir).status.success());

    let output = run_in(&dir);
    assert!(!output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "Connected!\n[TEST_TABLE]\n");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("already exists"), "stderr: {}", stderr);
    assert!(stderr.contains("transaction failed"), "stderr: {}", stderr);
}
