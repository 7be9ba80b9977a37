/// Use cases module containing application business logic orchestration
mod list_records;

pub use list_records::ListRecordsUseCase;
