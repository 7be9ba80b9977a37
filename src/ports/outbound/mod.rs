/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the catalog service, the output stream and the console.
pub mod output_presenter;
pub mod progress_reporter;
pub mod record_fetcher;

pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use record_fetcher::RecordFetcher;
