pub mod column_catalog;
pub mod date_filter;
pub mod query_criteria;
pub mod record;
pub mod resource;

pub use column_catalog::{Column, ColumnCatalog};
pub use date_filter::{validate_date, DateBound};
pub use query_criteria::{
    Filters, QueryCriteria, QueryCriteriaBuilder, DEFAULT_LIMIT, DEFAULT_OFFSET,
    DEFAULT_RECORD_LIMIT,
};
pub use record::{Classification, Cve, Product, ProductFamily, Record, Supersede, Update};
pub use resource::{FilterKind, FilterSpec, Resource, ResourceDescriptor};
