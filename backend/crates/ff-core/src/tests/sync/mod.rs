mod export_query;
mod transfer_data;
