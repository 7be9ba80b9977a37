/// Result alias used across the crate.
///
/// Typed failures are `CatalogError` values carried inside `anyhow::Error`,
/// so callers can still `downcast_ref` when they need to branch on them.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
