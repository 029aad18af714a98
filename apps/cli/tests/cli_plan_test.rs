//! Integration tests for the `promptx plan` command.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn promptx(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("promptx").unwrap();
    cmd.current_dir(temp_dir.path()).env("HOME", temp_dir.path()).env_remove("PROMPTX_CONFIG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_plan_summarize_then_clarity() {
    let temp_dir = TempDir::new().unwrap();

    let output = promptx(&temp_dir)
        .args(["plan", "--json", "Summarize and improve clarity"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let plan: Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(plan["goal"], "Summarize and improve clarity");
    let agents: Vec<&str> = plan["steps"].as_array().unwrap().iter().map(|s| s["agent"].as_str().unwrap()).collect();
    assert_eq!(agents, vec!["SummarizerAgent", "ClarityAgent"]);
}

#[test]
fn test_plan_human_output() {
    let temp_dir = TempDir::new().unwrap();

    promptx(&temp_dir)
        .args(["plan", "review my code and suggest next steps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. CodeReviewerAgent"))
        .stdout(predicate::str::contains("2. FollowUpAgent"));
}

#[test]
fn test_plan_no_match_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();

    promptx(&temp_dir)
        .args(["plan", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("No agent matched the goal"));

    promptx(&temp_dir)
        .args(["plan", "bake a chocolate cake"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No agent matched the goal"));
}

#[test]
fn test_plan_uses_configured_tags() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("promptx.toml"),
        "[[agents]]\nid = \"PersonaAgent\"\ntags = [\"pirate\"]\n",
    )
    .unwrap();

    promptx(&temp_dir)
        .args(["plan", "talk like a pirate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PersonaAgent"));
}
