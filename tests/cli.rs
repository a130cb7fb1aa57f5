use assert_cmd::prelude::*;
use mockito::Matcher;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

const ORG_ID: &str = "0a1b2c3d4e5f6a7b";

fn write_config(dir: &Path, url: &str, org_id: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    let contents = format!(
        "url: {url}\ntoken: test-token\norg_id: {org_id}\npreferences:\n  page_size: 20\n"
    );
    fs::write(&path, contents).expect("failed to write config");
    path
}

/// `orgctl` with a clean environment so the host's settings don't leak in.
fn orgctl() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("orgctl"));
    for var in [
        "ORGCTL_FORMAT",
        "ORGCTL_ORG_ID",
        "ORGCTL_CONFIG",
        "ORGCTL_URL",
        "ORGCTL_TOKEN",
        "ORGCTL_DEBUG",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn version_prints_package_version() {
    orgctl()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn status_uses_custom_config_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "http://influx.local:8086", ORG_ID);

    let assert = orgctl()
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains(&format!("Default organization: {ORG_ID}")));
    assert!(stdout.contains("http://influx.local:8086"));
    assert!(stdout.contains(&config_path.to_string_lossy().to_string()));

    Ok(())
}

#[test]
fn status_reports_unparsable_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = temp.path().join("config.yaml");
    fs::write(&config_path, "url: [unclosed\n")?;

    orgctl()
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("could not be loaded"))
        .stdout(predicate::str::contains("Configuration not found").not())
        .stderr(predicate::str::contains("Failed to parse configuration"));

    Ok(())
}

#[test]
fn missing_token_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = temp.path().join("absent.yaml");

    orgctl()
        .args(["org", "list", "--config"])
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("orgctl init"));

    Ok(())
}

#[test]
fn org_update_without_changes_fails_before_any_request() {
    orgctl()
        .args(["org", "update", ORG_ID, "--token", "t", "--url", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to update"));
}

#[test]
fn completion_generates_script() {
    orgctl()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("orgctl"));
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn org_list_sends_filters_and_token() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("GET", "/api/v2/orgs")
        .match_header("authorization", "Token test-token")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "5".into()),
            Matcher::UrlEncoded("descending".into(), "true".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"orgs": [{"id": "0a1b2c3d4e5f6a7b", "name": "acme", "status": "active"}]}"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url(), ORG_ID);

    let assert = orgctl()
        .args(["org", "list", "--limit", "5", "--descending", "--format", "json"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    mock.assert();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("\"data\""));
    assert!(stdout.contains("acme"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn org_create_posts_body() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("POST", "/api/v2/orgs")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(
            serde_json::json!({"name": "acme", "description": "Acme Corp"}),
        ))
        .with_status(201)
        .with_body(r#"{"id": "0a1b2c3d4e5f6a7b", "name": "acme", "description": "Acme Corp"}"#)
        .create();

    orgctl()
        .args(["org", "create", "acme", "-d", "Acme Corp"])
        .args(["--token", "test-token", "--url"])
        .arg(server.url())
        .arg("--config")
        .arg(tempdir()?.path().join("none.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Created organization"));

    mock.assert();
    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn secret_list_uses_configured_org() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("GET", "/api/v2/orgs/0a1b2c3d4e5f6a7b/secrets")
        .with_status(200)
        .with_body(r#"{"secrets": ["slack_webhook", "aws_key"]}"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url(), ORG_ID);

    let assert = orgctl()
        .args(["secret", "list", "--format", "table", "--config"])
        .arg(&config_path)
        .assert()
        .success();

    mock.assert();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let aws = stdout.find("aws_key").expect("aws_key listed");
    let slack = stdout.find("slack_webhook").expect("slack_webhook listed");
    assert!(aws < slack);

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn member_remove_deletes_by_user_id() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("DELETE", "/api/v2/orgs/0a1b2c3d4e5f6a7b/members/1111222233334444")
        .with_status(204)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url(), ORG_ID);

    orgctl()
        .args(["member", "remove", "1111222233334444", "--yes", "--config"])
        .arg(&config_path)
        .assert()
        .success();

    mock.assert();
    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn not_found_surfaces_server_message() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let _mock = server
        .mock("GET", "/api/v2/orgs/ffffffffffffffff")
        .with_status(404)
        .with_body(r#"{"code": "not found", "message": "organization not found"}"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url(), ORG_ID);

    orgctl()
        .args(["org", "get", "ffffffffffffffff", "--config"])
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("organization not found"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn member_add_prints_json_record() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("POST", "/api/v2/orgs/0a1b2c3d4e5f6a7b/members")
        .match_body(Matcher::Json(serde_json::json!({"id": "1111222233334444"})))
        .with_status(201)
        .with_body(r#"{"id": "1111222233334444", "name": "ada", "role": "member"}"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url(), ORG_ID);

    let assert = orgctl()
        .args(["--format", "json", "member", "add", "1111222233334444", "--config"])
        .arg(&config_path)
        .assert()
        .success();

    mock.assert();
    let output: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(output["data"]["name"], "ada");
    assert_eq!(output["data"]["role"], "member");

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn owner_remove_prints_json_record() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("DELETE", "/api/v2/orgs/0a1b2c3d4e5f6a7b/owners/1111222233334444")
        .with_status(204)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url(), ORG_ID);

    let assert = orgctl()
        .args(["--format", "json", "owner", "remove", "1111222233334444", "--yes"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    mock.assert();
    let output: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(output["data"]["action"], "remove");
    assert_eq!(output["data"]["role"], "owner");
    assert_eq!(output["data"]["user_id"], "1111222233334444");

    Ok(())
}
