/// Network adapters for the catalog service API
mod catalog_client;

pub use catalog_client::{CatalogClient, CatalogClientOptions};
