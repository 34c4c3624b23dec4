pub mod cleaner;
pub mod context;
pub mod detectors;
pub mod error;
pub mod exporter;
pub mod importer;
pub mod service;
pub mod validation_messages;
pub mod validator;

#[cfg(test)]
mod tests;

pub use context::TransferContext;
pub use error::{Result as TransferResult, TransferError};
pub use service::ExportImportService;
