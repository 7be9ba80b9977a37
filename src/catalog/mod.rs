/// Catalog domain: query criteria, record schemas and the
/// pagination/projection services that walk and render them.
pub mod domain;
pub mod services;
