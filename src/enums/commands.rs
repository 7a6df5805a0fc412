use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Start the analysis server and open the upload UI
    Serve {
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(long)]
        no_browser: bool,
    },
    /// Upload a project document to a running server and print the report
    Analyze {
        file: PathBuf,
        #[clap(short, long)]
        server: Option<String>,
    },
    Init,
    Validate,
}
