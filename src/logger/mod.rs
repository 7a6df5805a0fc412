pub mod progress_logger;
pub mod report_logger;
