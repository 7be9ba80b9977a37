use super::column_catalog::ColumnCatalog;

/// Records requested per page when the user gives none (or a non-positive value)
pub const DEFAULT_LIMIT: usize = 1000;
/// Starting position when the user gives none (or a non-positive value)
pub const DEFAULT_OFFSET: usize = 0;
/// Ceiling on records fetched across all pages
pub const DEFAULT_RECORD_LIMIT: usize = 20000;

/// Ordered query-parameter filters
///
/// Names keep their first-insertion order and values keep the order the user
/// supplied them. Multi-valued filters are sent as repeated parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    entries: Vec<(String, Vec<String>)>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends values under `name`; empty values are ignored
    pub fn push<I, S>(&mut self, name: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values
            .into_iter()
            .map(Into::into)
            .filter(|v| !v.is_empty())
            .collect();
        if values.is_empty() {
            return;
        }

        match self.entries.iter().position(|(n, _)| n == name) {
            Some(index) => self.entries[index].1.extend(values),
            None => self.entries.push((name.to_string(), values)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flattens to `(name, value)` pairs, one per value
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .flat_map(|(name, values)| values.iter().map(move |v| (name.clone(), v.clone())))
            .collect()
    }
}

/// Normalized filter and pagination parameters for one invocation
///
/// Built once through [`QueryCriteria::builder`] and never mutated afterwards.
/// The live page offset belongs to the pagination cursor, not to this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCriteria {
    limit: usize,
    offset: usize,
    record_limit: usize,
    filters: Filters,
    columns: Vec<String>,
}

impl QueryCriteria {
    pub fn builder() -> QueryCriteriaBuilder {
        QueryCriteriaBuilder::default()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn record_limit(&self) -> usize {
        self.record_limit
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Columns as the user asked for them (empty when none were given)
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Requested columns, or the catalog's default order when none were given
    pub fn columns_or_default(&self, catalog: &ColumnCatalog) -> Vec<String> {
        if self.columns.is_empty() {
            catalog.default_selection()
        } else {
            self.columns.clone()
        }
    }

    /// Query string pairs for the page starting at `offset`
    ///
    /// `limit` and `offset` always come first, followed by every filter value.
    pub fn query_params(&self, offset: usize) -> Vec<(String, String)> {
        let mut params = vec![
            ("limit".to_string(), self.limit.to_string()),
            ("offset".to_string(), offset.to_string()),
        ];
        params.extend(self.filters.query_pairs());
        params
    }
}

impl Default for QueryCriteria {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`QueryCriteria`]
///
/// Accepts raw (possibly non-positive) user input; `build` applies the
/// defaults and the `limit <= record_limit` cap.
#[derive(Debug, Default)]
pub struct QueryCriteriaBuilder {
    limit: Option<i64>,
    offset: Option<i64>,
    record_limit: Option<i64>,
    filters: Filters,
    columns: Vec<String>,
}

impl QueryCriteriaBuilder {
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn record_limit(mut self, record_limit: i64) -> Self {
        self.record_limit = Some(record_limit);
        self
    }

    pub fn filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    /// Parses a comma-separated column list (`"kb, Update_Title"`)
    pub fn columns(mut self, columns: &str) -> Self {
        self.columns = parse_columns(columns);
        self
    }

    pub fn build(self) -> QueryCriteria {
        let limit = positive_or(self.limit, DEFAULT_LIMIT);
        let offset = positive_or(self.offset, DEFAULT_OFFSET);
        let record_limit = positive_or(self.record_limit, DEFAULT_RECORD_LIMIT);

        QueryCriteria {
            limit: limit.min(record_limit),
            offset,
            record_limit,
            filters: self.filters,
            columns: self.columns,
        }
    }
}

fn positive_or(value: Option<i64>, default: usize) -> usize {
    match value {
        Some(v) if v > 0 => usize::try_from(v).unwrap_or(default),
        _ => default,
    }
}

/// Splits on commas, trims and lower-cases each identifier, drops blanks
pub fn parse_columns(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty())
        .collect()
}
