//! End-to-end tests for the zmfc binary
//!
//! Exercise the process exit convention: 2 for usage errors (clap), 3 for a
//! domain-level rejection by the API, 1 for everything else.

use std::io::Write;

use assert_cmd::cargo;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use tempfile::NamedTempFile;

fn zmfc() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("zmfc"));
    cmd.env_remove("ZMF_REST_URL")
        .env_remove("ZMF_REST_USER")
        .env_remove("ZMF_REST_PWD");
    cmd
}

fn connected(server: &MockServer) -> assert_cmd::Command {
    let mut cmd = zmfc();
    cmd.args(["--url", &server.base_url(), "--user", "U000000", "--password", "pw"]);
    cmd
}

#[test]
fn test_version() {
    zmfc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("zmfc"));
}

#[test]
fn test_help() {
    zmfc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ChangeMan ZMF"));
}

#[test]
fn test_missing_connection_args_is_a_usage_error() {
    zmfc()
        .args(["audit", "APP 000001"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--url"));
}

#[test]
fn test_audit_success() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT).path("/package/audit");
        then.status(200).json_body(json!({"returnCode": "00"}));
    });

    connected(&server)
        .args(["audit", "APP 000001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("audit submitted"));

    mock.assert();
}

#[test]
fn test_domain_rejection_exits_with_reserved_code() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(PUT).path("/package/audit");
        then.status(200).json_body(json!({
            "returnCode": "08",
            "message": "CMN6504I - Component not found in package.",
            "reasonCode": "6504",
        }));
    });

    connected(&server)
        .args(["audit", "APP 000001"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("CMN6504I"));
}

#[test]
fn test_transport_failure_exits_with_generic_code() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(PUT).path("/package/audit");
        then.status(500);
    });

    connected(&server)
        .args(["audit", "APP 000001"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("500"));
}

#[test]
fn test_search_prints_the_package_id() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/package/search");
        then.status(200).json_body(json!({
            "returnCode": "00",
            "result": [
                {"package": "APP 000007", "packageId": 7, "packageTitle": "fancy title"},
            ],
        }));
    });

    connected(&server)
        .args(["search", "APP", "fancy title"])
        .assert()
        .success()
        .stdout(predicate::str::contains("APP 000007"));
}

#[test]
fn test_create_from_config_file() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/package");
        then.status(200).json_body(json!({
            "returnCode": "00",
            "result": [{"package": "APP 000009"}],
        }));
    });

    let mut file = NamedTempFile::with_suffix(".yml").unwrap();
    writeln!(file, "applName: APP").unwrap();
    writeln!(file, "packageTitle: fancy title").unwrap();

    connected(&server)
        .args(["create", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("APP 000009"));
}

#[test]
fn test_get_package_reads_config_from_stdin() {
    let server = MockServer::start();

    // literal package id in the config: no endpoint gets called
    connected(&server)
        .args(["get-package", "-"])
        .write_stdin("package: APP 000001\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("APP 000001"));
}

#[test]
fn test_unreadable_config_is_not_a_rejection() {
    let server = MockServer::start();

    connected(&server)
        .args(["create", "does/not/exist.yml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read config"));
}
