/// Data Transfer Objects for application layer
///
/// DTOs carry validated command input into the list use case and its
/// summary back out, keeping the CLI types out of the catalog domain.
mod list_request;
mod list_response;

pub use list_request::{ListRequest, ListRequestBuilder};
pub use list_response::ListResponse;
