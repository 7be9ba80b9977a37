//! wsusscn2-cli - command-line client for the wsusscn2.cab update catalog
//!
//! This library lists software updates, CVEs, supersedence relations,
//! classifications, products and product families from the catalog's REST
//! API, paging through results and printing them as quoted comma-separated
//! rows. It follows a hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`catalog`): Record schemas, column catalogs, query
//!   criteria, the pagination engine and the column projector
//! - **Application Layer** (`application`): The list use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): HTTP client and console output
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use wsusscn2_cli::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let client = CatalogClient::new(CatalogClientOptions {
//!     base_url: CatalogClient::DEFAULT_BASE_URL.to_string(),
//!     api_key: "YOUR_KEY".to_string(),
//!     insecure: false,
//!     debug: false,
//! })?;
//!
//! let use_case = ListRecordsUseCase::new(
//!     client,
//!     StdoutPresenter::new(),
//!     StderrProgressReporter::hidden(),
//! );
//!
//! let request = ListRequest::builder(Resource::Classification).build()?;
//! let response = use_case.execute(&request)?;
//! eprintln!("{} records", response.record_count);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
    pub use crate::adapters::outbound::network::{CatalogClient, CatalogClientOptions};
    pub use crate::application::dto::{ListRequest, ListResponse};
    pub use crate::application::use_cases::ListRecordsUseCase;
    pub use crate::catalog::domain::{
        Classification, Cve, Filters, Product, ProductFamily, QueryCriteria, Record, Resource,
        Supersede, Update,
    };
    pub use crate::catalog::services::{ColumnProjector, Page, Paginator};
    pub use crate::ports::outbound::{OutputPresenter, ProgressReporter, RecordFetcher};
    pub use crate::shared::error::CatalogError;
    pub use crate::shared::Result;
}
