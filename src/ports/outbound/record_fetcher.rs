use crate::shared::Result;
use serde::de::DeserializeOwned;

/// RecordFetcher port for reading one page of records from the catalog service
///
/// Implementations issue a single authenticated request and decode the JSON
/// array body into `R`. Failures are `CatalogError` values wrapped in
/// `anyhow::Error` and are never retried.
pub trait RecordFetcher {
    /// Fetches one page from `endpoint`
    ///
    /// # Arguments
    /// * `endpoint` - Resource path such as `/update`
    /// * `params` - Query string pairs, repeated names allowed
    ///
    /// # Errors
    /// Returns an error if:
    /// - The request cannot be sent (`Transport`)
    /// - The service answers with a non-200 status (`Unauthorized`, `Forbidden`,
    ///   `NotFound`, `UnknownStatus`)
    /// - The body is not a JSON array of `R` (`Decode`)
    fn fetch<R: DeserializeOwned>(&self, endpoint: &str, params: &[(String, String)])
        -> Result<Vec<R>>;
}
