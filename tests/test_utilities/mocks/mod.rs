/// Mock implementations for testing
mod mock_output_presenter;
mod mock_progress_reporter;
mod mock_record_fetcher;

#[allow(unused_imports)]
pub use mock_output_presenter::MockOutputPresenter;
#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
#[allow(unused_imports)]
pub use mock_record_fetcher::MockRecordFetcher;
