//! Binary smoke tests that need no Azure credentials.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("frederick")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("pair"))
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("tools"));
}

#[test]
fn tools_runs_without_credentials() {
    Command::cargo_bin("frederick")
        .unwrap()
        .arg("tools")
        .env_remove("AZURE_OPENAI_ENDPOINT")
        .env_remove("AZURE_OPENAI_DEPLOYMENT")
        .env_remove("AZURE_OPENAI_API_KEY")
        .assert()
        .success()
        .stdout(predicate::str::contains("travel_weather"));
}

#[test]
fn chat_without_configuration_fails_with_message() {
    Command::cargo_bin("frederick")
        .unwrap()
        .args(["chat", "hello"])
        .env_remove("AZURE_OPENAI_ENDPOINT")
        .env_remove("AZURE_OPENAI_DEPLOYMENT")
        .env_remove("AZURE_OPENAI_API_KEY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("AZURE_OPENAI_ENDPOINT"));
}
