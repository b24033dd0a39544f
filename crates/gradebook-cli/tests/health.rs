use assert_cmd::assert::{Assert, OutputAssertExt};
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

/// Runs `gradebook health --api-base <base>` off the async runtime.
async fn run_health(base: String) -> Assert {
    let output = tokio::task::spawn_blocking(move || {
        let home = TempDir::new().unwrap();
        cargo_bin_cmd!("gradebook")
            .env("GRADEBOOK_HOME", home.path())
            .env_remove("GRADEBOOK_API_BASE")
            .args(["health", "--api-base", &base])
            .output()
            .unwrap()
    })
    .await
    .unwrap();
    output.assert()
}

#[tokio::test]
async fn test_health_reports_status_and_version() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "UP", "version": "1.0.0"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    run_health(format!("{}/api", server.uri()))
        .await
        .success()
        .stdout(predicate::str::contains("Status:  UP"))
        .stdout(predicate::str::contains("Version: 1.0.0"));
}

#[tokio::test]
async fn test_health_fails_on_error_status() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    run_health(format!("{}/api", server.uri()))
        .await
        .failure()
        .stderr(predicate::str::contains("HTTP error! status: 503"));
}

#[tokio::test]
async fn test_health_fails_when_backend_is_down() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "DOWN"})))
        .mount(&server)
        .await;

    run_health(format!("{}/api", server.uri()))
        .await
        .failure()
        .stdout(predicate::str::contains("Status:  DOWN"))
        .stderr(predicate::str::contains("Backend reported status DOWN"));
}

#[test]
fn test_health_rejects_invalid_base() {
    let home = TempDir::new().unwrap();
    cargo_bin_cmd!("gradebook")
        .env("GRADEBOOK_HOME", home.path())
        .args(["health", "--api-base", "localhost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid API base URL"));
}
