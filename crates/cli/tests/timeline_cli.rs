use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli() -> Command {
    Command::cargo_bin("causal-timeline").expect("binary")
}

fn write_fixture(dir: &TempDir, name: &str, lines: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, lines.join("\n")).expect("write fixture");
    path
}

#[test]
fn generate_emits_date_sorted_json() {
    let temp = TempDir::new().unwrap();
    let input = write_fixture(
        &temp,
        "causal_events_topic.jsonl",
        &[
            r#"{"milestone_summary":"Strikes begin","event_date":"2025-05-01","causal_agent":"none"}"#,
            r#"{"milestone_summary":"Ceasefire talks","event_date":"2025-05-03"}"#,
            r#"{"milestone_summary":"Sanctions lifted","event_date":"2025-05-02"}"#,
        ],
    );

    let output = cli()
        .args(["generate", "--input"])
        .arg(&input)
        .args(["--top-k", "3", "--json", "--quiet"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["date"], "2025-05-03");
    assert_eq!(entries[1]["date"], "2025-05-02");
    assert_eq!(entries[2]["date"], "2025-05-01");
}

#[test]
fn generate_caps_output_at_top_k() {
    let temp = TempDir::new().unwrap();
    let lines: Vec<String> = (0..6)
        .map(|i| format!(r#"{{"milestone_summary":"event {i}","event_date":"2025-01-0{}"}}"#, i + 1))
        .collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let input = write_fixture(&temp, "causal_events_many.jsonl", &refs);

    let output = cli()
        .args(["generate", "--input"])
        .arg(&input)
        .args(["--top-k", "2", "--json", "--quiet"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 2);
}

#[test]
fn generate_reports_nothing_found_without_failing() {
    let temp = TempDir::new().unwrap();
    let input = write_fixture(&temp, "causal_events_empty.jsonl", &[]);

    cli()
        .args(["generate", "--input"])
        .arg(&input)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("No structured events found."));
}

#[test]
fn generate_fails_when_no_processed_files_exist() {
    let temp = TempDir::new().unwrap();

    cli()
        .args(["generate", "--data-dir"])
        .arg(temp.path())
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("causal_events_"));
}

#[test]
fn extract_then_generate_round_trips() {
    let temp = TempDir::new().unwrap();
    let docs = write_fixture(
        &temp,
        "raw_docs.jsonl",
        &[
            r#"{"text":"Ceasefire announced. Talks continue.","date":"2025-05-10","source_url":"https://example.com/a"}"#,
            r#"{"text":"Markets fell due to the sanctions. Recovery is slow.","date":"2025-05-09"}"#,
            r#"{"text":"   "}"#,
        ],
    );
    let processed = temp.path().join("causal_events_raw_docs.jsonl");

    cli()
        .args(["extract", "--topic", "Sanctions", "--input"])
        .arg(&docs)
        .arg("--output")
        .arg(&processed)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 2 causal events"));

    let output = cli()
        .args(["generate", "--input"])
        .arg(&processed)
        .args(["--json", "--quiet"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["date"], "2025-05-10");
    assert_eq!(entries[0]["summary"], "Ceasefire announced.");
    assert_eq!(entries[0]["url"], "https://example.com/a");
}
