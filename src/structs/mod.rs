pub mod ai;
pub mod analysis_report;
pub mod cli;
pub mod config;
pub mod lagging_indicator;
pub mod leading_indicator;
pub mod recommendation;
