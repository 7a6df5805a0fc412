pub mod ai_providers;
pub mod document_extractor;
pub mod report_parser;
pub mod upload_client;
