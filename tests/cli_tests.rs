//! CLI integration tests running the built binary.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use tempfile::TempDir;

fn metricbridge(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("metricbridge");
    cmd.current_dir(dir.path())
        .env_remove("DATADOG_API_KEY")
        .env_remove("MAILCHIMP_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    metricbridge(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("metricbridge"))
        .stdout(predicate::str::contains("gather"))
        .stdout(predicate::str::contains("push"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    metricbridge(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("metricbridge"));
}

#[test]
fn test_config_sample_prints_both_sections() {
    let dir = TempDir::new().unwrap();
    metricbridge(&dir)
        .args(["config", "sample"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[datadog]"))
        .stdout(predicate::str::contains("[mailchimp]"));
}

#[test]
fn test_config_init_then_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    metricbridge(&dir)
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .success();
    assert!(fs::read_to_string(&path).unwrap().contains("[datadog]"));

    metricbridge(&dir)
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_validate_accepts_valid_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[datadog]\napi_key = \"123456\"\n").unwrap();

    metricbridge(&dir)
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration Valid"));
}

#[test]
fn test_config_validate_returns_nonzero_on_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[mailchimp]\napi_key = \"0123456789\"\n").unwrap();

    metricbridge(&dir)
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("mailchimp.api_key"));
}

#[test]
fn test_json_error_output() {
    let dir = TempDir::new().unwrap();

    metricbridge(&dir)
        .args(["--json", "config", "validate", "-c", "absent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\"type\":\"error\""));
}

#[test]
fn test_gather_requires_mailchimp_section() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[datadog]\napi_key = \"123456\"\n").unwrap();

    metricbridge(&dir)
        .args(["gather", "-c"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required field: mailchimp"));
}

#[test]
fn test_push_sends_points() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/v1/series")
        .match_query(Matcher::UrlEncoded("api_key".into(), "123456".into()))
        .match_body(Matcher::PartialJson(serde_json::json!({
            "series": [
                { "metric": "cpu", "points": [[1_257_894_000.0, 0.5]], "tags": ["host:a"] },
                { "metric": "jobs", "points": [[1_257_894_000.0, 3.0]] }
            ]
        })))
        .with_status(202)
        .create();

    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(
        &config,
        format!(
            "[datadog]\napi_key = \"123456\"\nurl = \"{}/api/v1/series\"\n",
            server.url()
        ),
    )
    .unwrap();
    let input = dir.path().join("points.jsonl");
    fs::write(
        &input,
        concat!(
            "{\"name\":\"cpu\",\"value\":0.5,\"tags\":{\"host\":\"a\"},\"timestamp\":\"2009-11-10T23:00:00Z\"}\n",
            "{\"name\":\"jobs\",\"value\":3,\"timestamp\":\"2009-11-10T23:00:00Z\"}\n",
        ),
    )
    .unwrap();

    metricbridge(&dir)
        .args(["push", "-c"])
        .arg(&config)
        .arg("-i")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sent 2 points"));

    mock.assert();
}

#[test]
fn test_push_fails_on_bad_status() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/api/v1/series")
        .match_query(Matcher::Any)
        .with_status(500)
        .create();

    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(
        &config,
        format!(
            "[datadog]\napi_key = \"123456\"\nurl = \"{}/api/v1/series\"\n",
            server.url()
        ),
    )
    .unwrap();
    let input = dir.path().join("points.jsonl");
    fs::write(&input, "{\"name\":\"cpu\",\"value\":1}\n").unwrap();

    metricbridge(&dir)
        .args(["push", "-c"])
        .arg(&config)
        .arg("-i")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("received bad status code, 500"));
}

#[test]
fn test_config_validate_accepts_template_without_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    metricbridge(&dir)
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .success();

    metricbridge(&dir)
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Datadog api_key not set"))
        .stdout(predicate::str::contains("Mailchimp api_key not set"));
}
