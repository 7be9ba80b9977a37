use crate::catalog::domain::{Filters, QueryCriteria, Resource};
use crate::shared::Result;

/// ListRequest - Validated input for one list command
///
/// Filters inside `criteria` are already keyed by query parameter name and
/// every date filter has passed validation, so executing the request can
/// only fail on the network side.
#[derive(Debug, Clone)]
pub struct ListRequest {
    pub resource: Resource,
    pub criteria: QueryCriteria,
    /// Print only the final record count
    pub count_only: bool,
}

impl ListRequest {
    pub fn builder(resource: Resource) -> ListRequestBuilder {
        ListRequestBuilder {
            resource,
            filter_input: Filters::new(),
            limit: None,
            offset: None,
            record_limit: None,
            columns: None,
            count_only: false,
        }
    }
}

/// Builder for [`ListRequest`]
///
/// Takes raw user input keyed by CLI flag name; `build` maps flags to
/// parameters, validates dates and normalizes the page settings.
#[derive(Debug)]
pub struct ListRequestBuilder {
    resource: Resource,
    filter_input: Filters,
    limit: Option<i64>,
    offset: Option<i64>,
    record_limit: Option<i64>,
    columns: Option<String>,
    count_only: bool,
}

impl ListRequestBuilder {
    pub fn filter_input(mut self, filter_input: Filters) -> Self {
        self.filter_input = filter_input;
        self
    }

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

    pub fn columns(mut self, columns: Option<&str>) -> Self {
        self.columns = columns.map(str::to_string);
        self
    }

    pub fn count_only(mut self, count_only: bool) -> Self {
        self.count_only = count_only;
        self
    }

    pub fn build(self) -> Result<ListRequest> {
        let descriptor = self.resource.descriptor();
        let filters = descriptor.build_filters(&self.filter_input)?;

        let mut criteria = QueryCriteria::builder().filters(filters);
        if let Some(limit) = self.limit {
            criteria = criteria.limit(limit);
        }
        if let Some(offset) = self.offset {
            criteria = criteria.offset(offset);
        }
        if let Some(record_limit) = self.record_limit {
            criteria = criteria.record_limit(record_limit);
        }
        match self.columns.as_deref() {
            Some(columns) if descriptor.selectable_columns => {
                criteria = criteria.columns(columns);
            }
            Some(_) => {
                log::warn!("--columns is not supported by {}, ignoring", self.resource);
            }
            None => {}
        }

        Ok(ListRequest {
            resource: self.resource,
            criteria: criteria.build(),
            count_only: self.count_only,
        })
    }
}
