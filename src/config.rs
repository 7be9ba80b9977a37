//! Configuration file support for wsusscn2cli.
//!
//! Persists the API key (and optionally the API server/port) in a JSON file,
//! `wsusscn2cli.json`, next to the executable unless `--config` points
//! elsewhere.

use anyhow::Context;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::network::CatalogClient;
use crate::shared::error::CatalogError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "wsusscn2cli.json";

const DEFAULT_API_SERVER: &str = "wsusscn2.cab";
const DEFAULT_API_PORT: &str = "443";

/// Config file schema.
///
/// Empty strings are treated the same as missing keys; older files store
/// every key, blank or not.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub api_server: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub api_port: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl ConfigFile {
    pub fn api_key(&self) -> Option<&str> {
        non_blank(self.api_key.as_deref())
    }

    /// Base URL of the API: `https://<api_server>:<api_port>`
    ///
    /// `api_server` may carry its own `http://` or `https://` scheme. Without
    /// a server the public service is used.
    pub fn api_url(&self) -> String {
        let server = non_blank(self.api_server.as_deref());
        let port = non_blank(self.api_port.as_deref());

        match (server, port) {
            (None, None) => CatalogClient::DEFAULT_BASE_URL.to_string(),
            (server, port) => {
                let server = server.unwrap_or(DEFAULT_API_SERVER).trim_end_matches('/');
                if server.starts_with("http://") || server.starts_with("https://") {
                    match port {
                        Some(port) => format!("{}:{}", server, port),
                        None => server.to_string(),
                    }
                } else {
                    format!("https://{}:{}", server, port.unwrap_or(DEFAULT_API_PORT))
                }
            }
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Text(String),
        Number(u64),
    }

    Ok(Option::<Port>::deserialize(deserializer)?.map(|port| match port {
        Port::Text(text) => text,
        Port::Number(number) => number.to_string(),
    }))
}

/// `wsusscn2cli.json` in the directory holding the running executable.
pub fn default_config_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Unable to locate the running executable")?;
    let dir = exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    Ok(dir.join(CONFIG_FILENAME))
}

/// Load config from `path`. A missing file yields the default (empty) config.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        log::debug!("No config file at {}", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path).map_err(|e| CatalogError::ConfigRead {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let config: ConfigFile =
        serde_json::from_str(&content).map_err(|e| CatalogError::ConfigRead {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    warn_unknown_fields(&config);
    Ok(config)
}

/// Overwrite the config at `path` with just the given API key.
///
/// Server and port settings in an existing file are not carried over.
pub fn save_api_key(path: &Path, api_key: &str) -> Result<ConfigFile> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        return Err(CatalogError::BlankApiKey.into());
    }

    let config = ConfigFile {
        api_key: Some(api_key.to_string()),
        ..Default::default()
    };

    let json = serde_json::to_string_pretty(&serde_json::json!({ "api_key": api_key }))?;
    fs::write(path, json).map_err(|e| CatalogError::ConfigWrite {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    log::info!("API key saved to {}", path.display());
    Ok(config)
}

/// The `--api_key` flag wins over the configured key; neither is fatal.
pub fn resolve_api_key(flag: Option<&str>, config: &ConfigFile) -> Result<String> {
    non_blank(flag)
        .or_else(|| config.api_key())
        .map(str::to_string)
        .ok_or_else(|| CatalogError::MissingApiKey.into())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        log::warn!("Unknown config field '{}' will be ignored.", key);
    }
}
