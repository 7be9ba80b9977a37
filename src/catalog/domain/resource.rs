use super::date_filter::{validate_date, DateBound};
use super::query_criteria::Filters;
use crate::shared::error::CatalogError;
use std::fmt;

/// How a filter flag's values are checked and sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Repeatable flag, each value sent as its own parameter
    Multi,
    /// Single string value passed through as-is (booleans, scores)
    Single,
    /// Calendar date validated before any request
    Date(DateBound),
}

/// Maps a CLI filter flag to the query parameter the service expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    pub flag: &'static str,
    pub param: &'static str,
    pub kind: FilterKind,
}

const fn multi(flag: &'static str, param: &'static str) -> FilterSpec {
    FilterSpec {
        flag,
        param,
        kind: FilterKind::Multi,
    }
}

const fn single(flag: &'static str) -> FilterSpec {
    FilterSpec {
        flag,
        param: flag,
        kind: FilterKind::Single,
    }
}

const fn date(flag: &'static str, bound: DateBound) -> FilterSpec {
    FilterSpec {
        flag,
        param: flag,
        kind: FilterKind::Date(bound),
    }
}

const CREATION_DATE_FILTERS: [FilterSpec; 3] = [
    date("update_creation_date_after", DateBound::After),
    date("update_creation_date_before", DateBound::Before),
    date("update_creation_date_on", DateBound::On),
];

const UPDATE_FILTERS: &[FilterSpec] = &[
    multi("product_title", "product_title"),
    multi("update_uid", "uid"),
    multi("update_title", "title"),
    multi("kb", "kb"),
    multi("update_type", "type"),
    multi("product_family_title", "product_family_title"),
    multi("classification_title", "classification_title"),
    multi("msrc_severity", "msrc_severity"),
    multi("arch", "arch"),
    multi("cve", "cve"),
    single("is_superseded"),
    single("is_bundled"),
    single("is_public"),
    single("is_beta"),
    single("is_in_file"),
    CREATION_DATE_FILTERS[0],
    CREATION_DATE_FILTERS[1],
    CREATION_DATE_FILTERS[2],
];

const CVE_FILTERS: &[FilterSpec] = &[
    multi("cve", "cve"),
    multi("kb", "kb"),
    multi("product_title", "product_title"),
    multi("product_family_title", "product_family_title"),
    multi("msrc_severity", "msrc_severity"),
    multi("arch", "arch"),
    single("cvssv3_base_score"),
    single("cvssv3_temporal_score"),
    single("is_in_file"),
    CREATION_DATE_FILTERS[0],
    CREATION_DATE_FILTERS[1],
    CREATION_DATE_FILTERS[2],
];

const SUPERSEDE_FILTERS: &[FilterSpec] = &[
    multi("update_uid", "uid"),
    multi("kb", "kb"),
    multi("product_title", "product_title"),
    single("is_superseded"),
    single("is_in_file"),
    CREATION_DATE_FILTERS[0],
    CREATION_DATE_FILTERS[1],
    CREATION_DATE_FILTERS[2],
];

const CLASSIFICATION_FILTERS: &[FilterSpec] =
    &[multi("classification_title", "classification_title")];

const PRODUCT_FILTERS: &[FilterSpec] = &[multi("product_title", "product_title")];

const PRODUCT_FAMILY_FILTERS: &[FilterSpec] =
    &[multi("product_family_title", "product_family_title")];

/// The six listable catalog resources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Update,
    Cve,
    Supersede,
    Classification,
    Product,
    ProductFamily,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::Update,
        Resource::Cve,
        Resource::Supersede,
        Resource::Classification,
        Resource::Product,
        Resource::ProductFamily,
    ];

    pub fn descriptor(self) -> ResourceDescriptor {
        let (endpoint, filters, selectable_columns) = match self {
            Resource::Update => ("/update", UPDATE_FILTERS, true),
            Resource::Cve => ("/cve", CVE_FILTERS, false),
            Resource::Supersede => ("/supersede", SUPERSEDE_FILTERS, false),
            Resource::Classification => ("/classification", CLASSIFICATION_FILTERS, false),
            Resource::Product => ("/product", PRODUCT_FILTERS, false),
            Resource::ProductFamily => ("/productfamily", PRODUCT_FAMILY_FILTERS, false),
        };

        ResourceDescriptor {
            resource: self,
            endpoint,
            filters,
            selectable_columns,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Update => "update",
            Resource::Cve => "cve",
            Resource::Supersede => "supersede",
            Resource::Classification => "classification",
            Resource::Product => "product",
            Resource::ProductFamily => "productfamily",
        };
        write!(f, "{}", name)
    }
}

/// Everything that differs between the list commands
#[derive(Debug, Clone, Copy)]
pub struct ResourceDescriptor {
    pub resource: Resource,
    pub endpoint: &'static str,
    pub filters: &'static [FilterSpec],
    /// Whether `--columns` applies; otherwise the full catalog is printed
    pub selectable_columns: bool,
}

impl ResourceDescriptor {
    pub fn filter_spec(&self, flag: &str) -> Option<&'static FilterSpec> {
        self.filters.iter().find(|spec| spec.flag == flag)
    }

    /// Translates flag-keyed user input into parameter-keyed filters
    ///
    /// Output follows the descriptor's filter order. Date values are checked
    /// here so a malformed date fails before the first request. Flags this
    /// resource does not know are dropped with a warning.
    pub fn build_filters(&self, input: &Filters) -> Result<Filters, CatalogError> {
        for (flag, _) in input.iter() {
            if self.filter_spec(flag).is_none() {
                log::warn!("Ignoring filter --{} not supported by {}", flag, self.resource);
            }
        }

        let mut filters = Filters::new();
        for spec in self.filters {
            let Some(values) = input.get(spec.flag) else {
                continue;
            };

            if let FilterKind::Date(bound) = spec.kind {
                for value in values {
                    validate_date(spec.flag, value, bound)?;
                }
            }

            filters.push(spec.param, values.iter().cloned());
        }

        Ok(filters)
    }
}
