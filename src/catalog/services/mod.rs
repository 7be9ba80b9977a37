mod column_projector;
mod paginator;

pub use column_projector::{quote, ColumnProjector};
pub use paginator::{Page, PaginationCursor, Paginator};
