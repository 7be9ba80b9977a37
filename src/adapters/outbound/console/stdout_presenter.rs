use crate::ports::outbound::OutputPresenter;
use crate::shared::error::CatalogError;
use crate::shared::Result;
use std::io::{self, Write};

/// StdoutPresenter adapter for writing rendered rows to stdout
///
/// Each chunk is flushed right away so earlier pages are visible even if a
/// later request fails.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| CatalogError::Output {
                details: format!("Failed to write to stdout: {}", e),
            })?;
        Ok(())
    }
}
