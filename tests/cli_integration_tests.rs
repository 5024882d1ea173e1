// CLI integration tests for the post-workflow binary

use assert_cmd::Command;
use predicates::prelude::*;

fn post_workflow() -> Command {
    let mut cmd = Command::cargo_bin("post-workflow").unwrap();
    cmd.env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_unpublished_post_prints_nothing() {
    post_workflow()
        .args(["add:hi", "review"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_published_post_prints_content() {
    post_workflow()
        .args(["add:hi", "review", "approve"])
        .assert()
        .success()
        .stdout("hi\n");
}

#[test]
fn test_json_snapshot_output() {
    post_workflow()
        .args(["--json", "add:hello", "review", "approve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"published\""))
        .stdout(predicate::str::contains("\"visible_content\": \"hello\""));
}

#[test]
fn test_unknown_step_fails() {
    post_workflow()
        .args(["add:hi", "publish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown step 'publish'"));
}

#[test]
fn test_config_file_requires_two_approvals() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strict.toml");
    std::fs::write(&path, "[workflow]\nrequired_approvals = 2\n").unwrap();

    post_workflow()
        .arg("--config")
        .arg(&path)
        .args(["add:hi", "review", "approve"])
        .assert()
        .success()
        .stdout("\n");

    post_workflow()
        .arg("--config")
        .arg(&path)
        .args(["add:hi", "review", "approve", "approve"])
        .assert()
        .success()
        .stdout("hi\n");
}

#[test]
fn test_env_overrides_approvals() {
    post_workflow()
        .env("POST_WORKFLOW__WORKFLOW__REQUIRED_APPROVALS", "2")
        .args(["add:hi", "review", "approve"])
        .assert()
        .success()
        .stdout("\n");
}
