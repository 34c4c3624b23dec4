pub mod export_query;
pub mod import_payload;
pub mod transfer_data;
pub mod validation_report;
