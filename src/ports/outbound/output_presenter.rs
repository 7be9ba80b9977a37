use crate::shared::Result;

/// OutputPresenter port for presenting rendered rows
///
/// Called once per page, so rows reach the destination as soon as their page
/// is rendered and stay there even if a later page fails.
pub trait OutputPresenter {
    /// Writes `content` verbatim (lines are already newline-terminated)
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
