//! Integration tests driving the synassist binary end to end.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn synassist() -> Command {
    Command::cargo_bin("synassist").unwrap()
}

fn synapse_workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{
            "dependencies": { "@synapse/core": "^1.2.3", "@synapse/neuron": "^1.0.0" },
            "devDependencies": { "@synapse/testing": "^1.0.0" }
        }"#,
    )
    .unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("tsconfig.json"), "{}").unwrap();
    fs::create_dir(dir.path().join("neurons")).unwrap();
    dir
}

#[test]
fn check_passes_on_a_conventional_workspace() {
    let dir = synapse_workspace();

    synassist()
        .arg("check")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: valid"));
}

#[test]
fn check_fails_on_a_non_project_workspace() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{ "dependencies": { "express": "^4.0.0" } }"#,
    )
    .unwrap();

    synassist()
        .arg("check")
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("npm install @synapse/core"));
}

#[test]
fn check_reports_missing_layout_with_remediation() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{ "dependencies": { "@synapse/core": "^1.0.0" } }"#,
    )
    .unwrap();

    synassist()
        .arg("check")
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(
            predicate::str::contains("mkdir src")
                .and(predicate::str::contains("npx tsc --init"))
                .and(predicate::str::contains("best practices")),
        );
}

#[test]
fn check_rejects_a_missing_path() {
    synassist()
        .arg("check")
        .arg("/definitely/not/a/real/workspace")
        .assert()
        .failure();
}

#[test]
fn check_emits_machine_readable_json() {
    let dir = synapse_workspace();

    let output = synassist()
        .arg("check")
        .arg(dir.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["is_valid"], true);
    assert!(parsed["errors"].as_array().unwrap().is_empty());
}

#[test]
fn info_reports_project_facts() {
    let dir = synapse_workspace();

    let output = synassist()
        .arg("info")
        .arg(dir.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["is_synapse_project"], true);
    assert_eq!(parsed["synapse_version"], "^1.2.3");
    assert_eq!(parsed["dependencies"].as_object().unwrap().len(), 3);
}

#[test]
fn info_on_a_plain_directory() {
    let dir = TempDir::new().unwrap();

    synassist()
        .arg("info")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Synapse project: no"));
}

#[test]
fn hover_renders_symbol_documentation() {
    synassist()
        .args(["hover", "Neuron"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("### Neuron").and(predicate::str::contains("class Neuron")),
        );
}

#[test]
fn hover_fails_for_unknown_symbols() {
    synassist().args(["hover", "Dendrite"]).assert().failure();
}

#[test]
fn complete_in_import_context_mentions_the_core_package() {
    synassist()
        .args(["complete", "--line-prefix", "import { "])
        .assert()
        .success()
        .stdout(predicate::str::contains("@synapse/core"));
}

#[test]
fn complete_uses_document_context() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("MyNeuron.ts");
    fs::write(&file, "export class MyNeuron extends Neuron {\n}\n").unwrap();

    let output = synassist()
        .arg("complete")
        .args(["--file", file.to_str().unwrap()])
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let labels: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["label"].as_str().unwrap())
        .collect();
    assert!(labels.contains(&"process"));
    assert!(!labels.contains(&"addNeuron"));
}

#[test]
fn snippets_lists_the_catalog() {
    synassist()
        .arg("snippets")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("neuron-lifecycle")
                .and(predicate::str::contains("synapse-test")),
        );
}

#[test]
fn snippets_filters_by_category() {
    synassist()
        .args(["snippets", "--category", "messaging"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("handler")
                .and(predicate::str::contains("listener"))
                .and(predicate::str::contains("neuron-lifecycle").not()),
        );
}

#[test]
fn snippets_rejects_an_unknown_category() {
    synassist()
        .args(["snippets", "--category", "axons"])
        .assert()
        .failure();
}
