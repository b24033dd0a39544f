use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("gradebook")
        .env("GRADEBOOK_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    assert!(!config_path.exists());

    cargo_bin_cmd!("gradebook")
        .env("GRADEBOOK_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("api_base = \"http://localhost:8080/api\""));
    assert!(contents.contains("notice_timeout_ms = 3000"));
}

#[test]
fn test_config_init_fails_if_exists() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "# existing config").unwrap();

    cargo_bin_cmd!("gradebook")
        .env("GRADEBOOK_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_set_api_base_keeps_other_values() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "notice_timeout_ms = 500\n").unwrap();

    cargo_bin_cmd!("gradebook")
        .env("GRADEBOOK_HOME", dir.path())
        .args(["config", "set-api-base", "http://grades.example:9000/api"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://grades.example:9000/api"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("api_base = \"http://grades.example:9000/api\""));
    assert!(contents.contains("notice_timeout_ms = 500"));
}

#[test]
fn test_set_api_base_rejects_invalid_url() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("gradebook")
        .env("GRADEBOOK_HOME", dir.path())
        .args(["config", "set-api-base", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid API base URL"));

    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_config_path_works_with_broken_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "api_base = [").unwrap();

    cargo_bin_cmd!("gradebook")
        .env("GRADEBOOK_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success();
}

#[test]
fn test_broken_config_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "api_base = [").unwrap();

    cargo_bin_cmd!("gradebook")
        .env("GRADEBOOK_HOME", dir.path())
        .env_remove("GRADEBOOK_API_BASE")
        .arg("health")
        .assert()
        .failure()
        .stderr(predicate::str::contains("load config"))
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn test_tui_requires_terminal() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("gradebook")
        .env("GRADEBOOK_HOME", dir.path())
        .env_remove("GRADEBOOK_API_BASE")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));

    assert!(dir.path().join("logs").is_dir());
}
