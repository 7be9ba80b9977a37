/// End-to-end tests for the config file: storing the API key, reading server
/// settings, and key precedence between the file and `--api_key`.
mod test_utilities;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use test_utilities::fixture_server::{FixtureResponse, FixtureServer};

fn read_json(path: &std::path::Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

mod setapikey_tests {
    use super::*;

    #[test]
    fn test_setapikey_creates_config() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("wsusscn2cli.json");

        cargo_bin_cmd!("wsusscn2cli")
            .args(["setapikey", "--api_key", "NEWKEY"])
            .args(["-c", config.to_str().unwrap()])
            .assert()
            .code(0)
            .stdout(predicate::str::is_empty());

        assert_eq!(read_json(&config), serde_json::json!({"api_key": "NEWKEY"}));
    }

    #[test]
    fn test_setapikey_overwrites_whole_file() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("wsusscn2cli.json");
        fs::write(
            &config,
            r#"{"api_server": "mirror.example.com", "api_port": "8443", "api_key": "OLD"}"#,
        )
        .unwrap();

        cargo_bin_cmd!("wsusscn2cli")
            .args(["setapikey", "-a", "NEWKEY", "-c", config.to_str().unwrap()])
            .assert()
            .code(0);

        assert_eq!(read_json(&config), serde_json::json!({"api_key": "NEWKEY"}));
    }

    #[test]
    fn test_setapikey_without_key_fails() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("wsusscn2cli.json");

        cargo_bin_cmd!("wsusscn2cli")
            .args(["setapikey", "-c", config.to_str().unwrap()])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("--api_key argument is blank"));

        assert!(!config.exists());
    }

    #[test]
    fn test_setapikey_unwritable_location_fails() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("no-such-dir").join("wsusscn2cli.json");

        cargo_bin_cmd!("wsusscn2cli")
            .args(["setapikey", "-a", "KEY", "-c", config.to_str().unwrap()])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Unable to write config file"));
    }
}

mod config_loading_tests {
    use super::*;

    #[test]
    fn test_malformed_config_fails() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("wsusscn2cli.json");
        fs::write(&config, "api_key = 'toml?'").unwrap();

        cargo_bin_cmd!("wsusscn2cli")
            .args(["listproduct", "-c", config.to_str().unwrap()])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Unable to read config file"));
    }

    #[test]
    fn test_flag_key_beats_config_key() {
        let server = FixtureServer::start(vec![FixtureResponse::ok("[]")]);
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("wsusscn2cli.json");
        fs::write(
            &config,
            format!(
                r#"{{"api_server": "http://127.0.0.1", "api_port": {}, "api_key": "stale"}}"#,
                server.port()
            ),
        )
        .unwrap();

        cargo_bin_cmd!("wsusscn2cli")
            .env("NO_PROXY", "127.0.0.1,localhost")
            .env("no_proxy", "127.0.0.1,localhost")
            .args(["listproductfamily", "--no_progress", "-a", "secret"])
            .args(["-c", config.to_str().unwrap()])
            .assert()
            .code(0)
            .stdout("\"ProductFamilyUid\",\"ProductFamilyRevision\",\"ProductFamilyTitle\"\n");

        let requests = server.finish();
        assert_eq!(requests[0].target, "/productfamily?limit=1000&offset=0");
        // "u:secret"
        assert_eq!(
            requests[0].authorization.as_deref(),
            Some("Basic dTpzZWNyZXQ=")
        );
    }

    #[test]
    fn test_unknown_config_field_is_only_a_warning() {
        let server = FixtureServer::start(vec![FixtureResponse::ok("[]")]);
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("wsusscn2cli.json");
        fs::write(
            &config,
            format!(
                r#"{{"api_server": "http://127.0.0.1", "api_port": "{}", "api_key": "secret", "proxy": "x"}}"#,
                server.port()
            ),
        )
        .unwrap();

        cargo_bin_cmd!("wsusscn2cli")
            .env_remove("RUST_LOG")
            .env("NO_PROXY", "127.0.0.1,localhost")
            .env("no_proxy", "127.0.0.1,localhost")
            .args(["listclassification", "--count_only", "--no_progress"])
            .args(["-c", config.to_str().unwrap()])
            .assert()
            .code(0)
            .stdout("Number of records: 0\n")
            .stderr(predicate::str::contains("Unknown config field 'proxy'"));

        server.finish();
    }
}
