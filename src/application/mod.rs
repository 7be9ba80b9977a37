/// Application layer - Use cases and DTOs
///
/// This layer turns a validated list request into paged requests against the
/// catalog service and rendered output, coordinating with infrastructure
/// only through ports.
pub mod dto;
pub mod use_cases;
