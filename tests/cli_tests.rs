//! CLI surface tests
//!
//! Cover the argument surface and the fail-fast paths that need no
//! network or credentials.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    Command::cargo_bin("revu")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("review"))
        .stdout(predicate::str::contains("auth"));
}

#[test]
fn test_malformed_reference_fails_before_credentials() {
    // Parsing happens before credential resolution, so this fails with a
    // parse error even with no tokens in the environment
    Command::cargo_bin("revu")
        .unwrap()
        .args(["review", "not-a-valid-url"])
        .env_remove("GITHUB_TOKEN")
        .env_remove("GH_TOKEN")
        .env_remove("OPENAI_API_KEY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid change reference"));
}

#[test]
fn test_auth_setup_prints_instructions() {
    Command::cargo_bin("revu")
        .unwrap()
        .args(["auth", "setup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GITHUB_TOKEN"))
        .stdout(predicate::str::contains("OPENAI_API_KEY"));
}
