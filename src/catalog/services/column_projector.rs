use crate::catalog::domain::Record;
use std::marker::PhantomData;

/// Wraps a value in double quotes
///
/// Embedded quotes are not escaped; values containing `"` produce rows that
/// strict CSV readers will reject.
pub fn quote(value: &str) -> String {
    format!("\"{}\"", value)
}

/// Projects records of one schema onto an ordered column selection
///
/// The header lists the display titles of the selected identifiers known to
/// the schema's catalog and skips unknown ones. Data rows keep a slot for
/// every selected identifier, so an unknown identifier renders as a bare
/// empty cell (`"a",,"b"`) and data rows can be wider than the header.
pub struct ColumnProjector<R> {
    columns: Vec<String>,
    _record: PhantomData<fn(&R)>,
}

impl<R: Record> ColumnProjector<R> {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            _record: PhantomData,
        }
    }

    /// Projector over every catalog column in default order
    pub fn all_columns() -> Self {
        Self::new(R::catalog().default_selection())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Selected identifiers the schema does not define
    pub fn unknown_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|c| !R::catalog().contains(c))
            .collect()
    }

    pub fn header(&self) -> String {
        let catalog = R::catalog();
        self.columns
            .iter()
            .filter_map(|c| catalog.title(c))
            .map(quote)
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn row(&self, record: &R) -> String {
        self.columns
            .iter()
            .map(|c| record.field(c).map(quote).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Renders a batch as newline-terminated lines, optionally led by the header
    pub fn render(&self, records: &[R], with_header: bool) -> String {
        let mut out = String::new();
        if with_header {
            out.push_str(&self.header());
            out.push('\n');
        }
        for record in records {
            out.push_str(&self.row(record));
            out.push('\n');
        }
        out
    }
}
