use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::domain::{
    Filters, Resource, DEFAULT_LIMIT, DEFAULT_OFFSET, DEFAULT_RECORD_LIMIT,
};
use crate::logging::Logging;

/// Query the wsusscn2.cab security update catalog
#[derive(Parser, Debug)]
#[command(name = "wsusscn2cli")]
#[command(version)]
#[command(about = "Query the wsusscn2.cab security update catalog", long_about = None)]
pub struct Args {
    /// API key (required if not stored with `setapikey`)
    #[arg(short = 'a', long = "api_key", global = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Dump full requests and responses (API key redacted)
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,

    /// Skip TLS certificate validation (DANGER!)
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Config file (defaults to wsusscn2cli.json next to the executable)
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable the progress spinner
    #[arg(long = "no_progress", global = true)]
    pub no_progress: bool,

    #[command(flatten)]
    pub logging: Logging,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all classifications
    #[command(name = "listclassification")]
    ListClassification(ClassificationArgs),

    /// List all products
    #[command(name = "listproduct")]
    ListProduct(ProductArgs),

    /// List all product families
    #[command(name = "listproductfamily")]
    ListProductFamily(ProductFamilyArgs),

    /// List updates
    #[command(name = "listupdate")]
    ListUpdate(UpdateArgs),

    /// List CVEs and the updates that fix them
    #[command(name = "listcve")]
    ListCve(CveArgs),

    /// List supersedence relations between updates
    #[command(name = "listsupersede")]
    ListSupersede(SupersedeArgs),

    /// Store the --api_key value in the config file
    #[command(name = "setapikey")]
    SetApiKey,
}

impl Command {
    /// The list command's arguments, `None` for `setapikey`
    pub fn list_args(&self) -> Option<&dyn ListArgs> {
        match self {
            Command::ListClassification(args) => Some(args),
            Command::ListProduct(args) => Some(args),
            Command::ListProductFamily(args) => Some(args),
            Command::ListUpdate(args) => Some(args),
            Command::ListCve(args) => Some(args),
            Command::ListSupersede(args) => Some(args),
            Command::SetApiKey => None,
        }
    }
}

/// What every list command hands to the pipeline
pub trait ListArgs {
    fn resource(&self) -> Resource;
    /// User filter values keyed by flag name
    fn filter_input(&self) -> Filters;
    fn page(&self) -> &PageArgs;
    fn columns(&self) -> Option<&str> {
        None
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct PageArgs {
    /// Records per request (non-positive values use the default)
    #[arg(long, default_value_t = DEFAULT_LIMIT as i64, allow_negative_numbers = true)]
    pub limit: i64,

    /// Position of the first record
    #[arg(long, default_value_t = DEFAULT_OFFSET as i64, allow_negative_numbers = true)]
    pub offset: i64,

    /// Maximum number of records fetched across all requests
    #[arg(
        long = "record_limit",
        default_value_t = DEFAULT_RECORD_LIMIT as i64,
        allow_negative_numbers = true
    )]
    pub record_limit: i64,

    /// Only print the number of records
    #[arg(long = "count_only")]
    pub count_only: bool,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct CreationDateArgs {
    /// Updates created after this date (YYYY-MM-DD)
    #[arg(long = "update_creation_date_after", value_name = "DATE")]
    pub after: Option<String>,

    /// Updates created before this date (YYYY-MM-DD)
    #[arg(long = "update_creation_date_before", value_name = "DATE")]
    pub before: Option<String>,

    /// Updates created on this date (YYYY-MM-DD or 'today')
    #[arg(long = "update_creation_date_on", value_name = "DATE")]
    pub on: Option<String>,
}

impl CreationDateArgs {
    fn push_into(&self, filters: &mut Filters) {
        filters.push("update_creation_date_after", self.after.clone());
        filters.push("update_creation_date_before", self.before.clone());
        filters.push("update_creation_date_on", self.on.clone());
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct ClassificationArgs {
    /// Classification title (repeatable)
    #[arg(long = "classification_title")]
    pub classification_title: Vec<String>,

    #[command(flatten)]
    pub page: PageArgs,
}

impl ListArgs for ClassificationArgs {
    fn resource(&self) -> Resource {
        Resource::Classification
    }

    fn filter_input(&self) -> Filters {
        let mut filters = Filters::new();
        filters.push("classification_title", self.classification_title.clone());
        filters
    }

    fn page(&self) -> &PageArgs {
        &self.page
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct ProductArgs {
    /// Product title (repeatable)
    #[arg(long = "product_title")]
    pub product_title: Vec<String>,

    #[command(flatten)]
    pub page: PageArgs,
}

impl ListArgs for ProductArgs {
    fn resource(&self) -> Resource {
        Resource::Product
    }

    fn filter_input(&self) -> Filters {
        let mut filters = Filters::new();
        filters.push("product_title", self.product_title.clone());
        filters
    }

    fn page(&self) -> &PageArgs {
        &self.page
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct ProductFamilyArgs {
    /// Product family title (repeatable)
    #[arg(long = "product_family_title")]
    pub product_family_title: Vec<String>,

    #[command(flatten)]
    pub page: PageArgs,
}

impl ListArgs for ProductFamilyArgs {
    fn resource(&self) -> Resource {
        Resource::ProductFamily
    }

    fn filter_input(&self) -> Filters {
        let mut filters = Filters::new();
        filters.push("product_family_title", self.product_family_title.clone());
        filters
    }

    fn page(&self) -> &PageArgs {
        &self.page
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct UpdateArgs {
    /// Product title (repeatable)
    #[arg(long = "product_title")]
    pub product_title: Vec<String>,

    /// Update uid (repeatable)
    #[arg(long = "update_uid")]
    pub update_uid: Vec<String>,

    /// Update title (repeatable)
    #[arg(long = "update_title")]
    pub update_title: Vec<String>,

    /// KB number (repeatable)
    #[arg(long)]
    pub kb: Vec<String>,

    /// Update type (repeatable)
    #[arg(long = "update_type")]
    pub update_type: Vec<String>,

    /// Product family title (repeatable)
    #[arg(long = "product_family_title")]
    pub product_family_title: Vec<String>,

    /// Classification title (repeatable)
    #[arg(long = "classification_title")]
    pub classification_title: Vec<String>,

    /// MSRC severity (repeatable)
    #[arg(long = "msrc_severity")]
    pub msrc_severity: Vec<String>,

    /// Architecture (repeatable)
    #[arg(long)]
    pub arch: Vec<String>,

    /// CVE identifier (repeatable)
    #[arg(long)]
    pub cve: Vec<String>,

    #[arg(long = "is_superseded")]
    pub is_superseded: Option<String>,

    #[arg(long = "is_bundled")]
    pub is_bundled: Option<String>,

    #[arg(long = "is_public")]
    pub is_public: Option<String>,

    #[arg(long = "is_beta")]
    pub is_beta: Option<String>,

    #[arg(long = "is_in_file")]
    pub is_in_file: Option<String>,

    #[command(flatten)]
    pub creation_date: CreationDateArgs,

    /// Comma-separated columns to print, e.g. "kb,update_title"
    #[arg(long)]
    pub columns: Option<String>,

    #[command(flatten)]
    pub page: PageArgs,
}

impl ListArgs for UpdateArgs {
    fn resource(&self) -> Resource {
        Resource::Update
    }

    fn filter_input(&self) -> Filters {
        let mut filters = Filters::new();
        filters.push("product_title", self.product_title.clone());
        filters.push("update_uid", self.update_uid.clone());
        filters.push("update_title", self.update_title.clone());
        filters.push("kb", self.kb.clone());
        filters.push("update_type", self.update_type.clone());
        filters.push("product_family_title", self.product_family_title.clone());
        filters.push("classification_title", self.classification_title.clone());
        filters.push("msrc_severity", self.msrc_severity.clone());
        filters.push("arch", self.arch.clone());
        filters.push("cve", self.cve.clone());
        filters.push("is_superseded", self.is_superseded.clone());
        filters.push("is_bundled", self.is_bundled.clone());
        filters.push("is_public", self.is_public.clone());
        filters.push("is_beta", self.is_beta.clone());
        filters.push("is_in_file", self.is_in_file.clone());
        self.creation_date.push_into(&mut filters);
        filters
    }

    fn page(&self) -> &PageArgs {
        &self.page
    }

    fn columns(&self) -> Option<&str> {
        self.columns.as_deref()
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct CveArgs {
    /// CVE identifier (repeatable)
    #[arg(long)]
    pub cve: Vec<String>,

    /// KB number (repeatable)
    #[arg(long)]
    pub kb: Vec<String>,

    /// Product title (repeatable)
    #[arg(long = "product_title")]
    pub product_title: Vec<String>,

    /// Product family title (repeatable)
    #[arg(long = "product_family_title")]
    pub product_family_title: Vec<String>,

    /// MSRC severity (repeatable)
    #[arg(long = "msrc_severity")]
    pub msrc_severity: Vec<String>,

    /// Architecture (repeatable)
    #[arg(long)]
    pub arch: Vec<String>,

    #[arg(long = "cvssv3_base_score")]
    pub cvssv3_base_score: Option<String>,

    #[arg(long = "cvssv3_temporal_score")]
    pub cvssv3_temporal_score: Option<String>,

    #[arg(long = "is_in_file")]
    pub is_in_file: Option<String>,

    #[command(flatten)]
    pub creation_date: CreationDateArgs,

    #[command(flatten)]
    pub page: PageArgs,
}

impl ListArgs for CveArgs {
    fn resource(&self) -> Resource {
        Resource::Cve
    }

    fn filter_input(&self) -> Filters {
        let mut filters = Filters::new();
        filters.push("cve", self.cve.clone());
        filters.push("kb", self.kb.clone());
        filters.push("product_title", self.product_title.clone());
        filters.push("product_family_title", self.product_family_title.clone());
        filters.push("msrc_severity", self.msrc_severity.clone());
        filters.push("arch", self.arch.clone());
        filters.push("cvssv3_base_score", self.cvssv3_base_score.clone());
        filters.push("cvssv3_temporal_score", self.cvssv3_temporal_score.clone());
        filters.push("is_in_file", self.is_in_file.clone());
        self.creation_date.push_into(&mut filters);
        filters
    }

    fn page(&self) -> &PageArgs {
        &self.page
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct SupersedeArgs {
    /// Update uid (repeatable)
    #[arg(long = "update_uid")]
    pub update_uid: Vec<String>,

    /// KB number (repeatable)
    #[arg(long)]
    pub kb: Vec<String>,

    /// Product title (repeatable)
    #[arg(long = "product_title")]
    pub product_title: Vec<String>,

    #[arg(long = "is_superseded")]
    pub is_superseded: Option<String>,

    #[arg(long = "is_in_file")]
    pub is_in_file: Option<String>,

    #[command(flatten)]
    pub creation_date: CreationDateArgs,

    #[command(flatten)]
    pub page: PageArgs,
}

impl ListArgs for SupersedeArgs {
    fn resource(&self) -> Resource {
        Resource::Supersede
    }

    fn filter_input(&self) -> Filters {
        let mut filters = Filters::new();
        filters.push("update_uid", self.update_uid.clone());
        filters.push("kb", self.kb.clone());
        filters.push("product_title", self.product_title.clone());
        filters.push("is_superseded", self.is_superseded.clone());
        filters.push("is_in_file", self.is_in_file.clone());
        self.creation_date.push_into(&mut filters);
        filters
    }

    fn page(&self) -> &PageArgs {
        &self.page
    }
}
