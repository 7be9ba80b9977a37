use crate::application::dto::{ListRequest, ListResponse};
use crate::catalog::domain::{
    Classification, Cve, Product, ProductFamily, Record, Resource, Supersede, Update,
};
use crate::catalog::services::{ColumnProjector, Paginator};
use crate::ports::outbound::{OutputPresenter, ProgressReporter, RecordFetcher};
use crate::shared::Result;

/// ListRecordsUseCase - The one pipeline behind every list command
///
/// Walks the resource's endpoint page by page and hands each rendered page
/// to the presenter as soon as it arrives. Rows already written stay written
/// when a later page fails.
///
/// # Type Parameters
/// * `F` - RecordFetcher implementation
/// * `O` - OutputPresenter implementation
/// * `P` - ProgressReporter implementation
pub struct ListRecordsUseCase<F, O, P> {
    fetcher: F,
    presenter: O,
    progress_reporter: P,
}

impl<F, O, P> ListRecordsUseCase<F, O, P>
where
    F: RecordFetcher,
    O: OutputPresenter,
    P: ProgressReporter,
{
    pub fn new(fetcher: F, presenter: O, progress_reporter: P) -> Self {
        Self {
            fetcher,
            presenter,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: &ListRequest) -> Result<ListResponse> {
        log::info!("List {} called", request.resource);

        match request.resource {
            Resource::Update => self.list::<Update>(request),
            Resource::Cve => self.list::<Cve>(request),
            Resource::Supersede => self.list::<Supersede>(request),
            Resource::Classification => self.list::<Classification>(request),
            Resource::Product => self.list::<Product>(request),
            Resource::ProductFamily => self.list::<ProductFamily>(request),
        }
    }

    fn list<R: Record>(&self, request: &ListRequest) -> Result<ListResponse> {
        let criteria = &request.criteria;
        let endpoint = request.resource.descriptor().endpoint;
        let projector = ColumnProjector::<R>::new(criteria.columns_or_default(R::catalog()));

        if !request.count_only {
            for column in projector.unknown_columns() {
                log::warn!("Unknown column '{}' will print as an empty field", column);
            }
        }

        let mut pages = Paginator::new(criteria, |params: &[(String, String)]| {
            self.fetcher.fetch::<R>(endpoint, params)
        });
        let mut page_count = 0;
        let mut fetched = 0;

        for page in pages.by_ref() {
            let page = match page {
                Ok(page) => page,
                Err(e) => {
                    self.progress_reporter.report_error(&e.to_string());
                    return Err(e);
                }
            };
            page_count += 1;
            fetched += page.len();
            log::debug!("Received {} records at offset {}", page.len(), page.offset);
            self.progress_reporter
                .report_progress(fetched, criteria.record_limit(), None);

            if !request.count_only {
                self.presenter
                    .present(&projector.render(&page.records, page_count == 1))?;
            }
        }

        let record_count = pages.cursor().record_count;
        self.progress_reporter
            .report_completion(&format!("Fetched {} {} records", record_count, request.resource));

        if request.count_only {
            self.presenter
                .present(&format!("Number of records: {}\n", record_count))?;
        }

        Ok(ListResponse {
            record_count,
            pages: page_count,
        })
    }
}
