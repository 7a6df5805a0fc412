use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "roitracker")]
#[clap(about = "AI-powered project ROI analysis", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
