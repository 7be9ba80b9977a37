use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// The tool only distinguishes success from failure. Argument parsing
/// errors are reported by clap with its own status (2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Any fatal condition (missing key, bad date, API error, I/O error, etc.)
    ApplicationError = 1,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
        }
    }
}

/// Errors raised while querying the catalog service.
///
/// Every variant is fatal for the running command. Components return these
/// wrapped in `anyhow::Error`; only `main` turns them into an exit status.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unable to read config file: {path}\nDetails: {details}\n\n💡 Hint: Fix or delete the file, then run `wsusscn2cli setapikey --api_key <KEY>`")]
    ConfigRead { path: PathBuf, details: String },

    #[error("Unable to write config file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have write permissions next to the executable")]
    ConfigWrite { path: PathBuf, details: String },

    #[error("Unable to find api key.\n\n💡 Hint: use --api_key or set one using `wsusscn2cli setapikey --api_key <KEY>`")]
    MissingApiKey,

    #[error("--api_key argument is blank.\n\n💡 Hint: Pass a valid --api_key argument")]
    BlankApiKey,

    #[error("Unable to parse provided date for --{filter}. Expected: YYYY-MM-DD. Found: {value}")]
    InvalidDate { filter: String, value: String },

    #[error("Unauthorized request to service ({url})\n\n💡 Hint: Check that your API key is valid")]
    Unauthorized { url: String },

    #[error("Forbidden request to service ({url})\n\n💡 Hint: Your API key does not grant access to this resource")]
    Forbidden { url: String },

    #[error("Resource not found ({url})")]
    NotFound { url: String },

    #[error("Service returned unexpected status {status} ({url})")]
    UnknownStatus { status: u16, url: String },

    #[error("Failed to decode response from {url}\nDetails: {details}")]
    Decode { url: String, details: String },

    #[error("Request to {url} failed\nDetails: {details}")]
    Transport { url: String, details: String },

    #[error("Failed to write output\nDetails: {details}")]
    Output { details: String },
}
