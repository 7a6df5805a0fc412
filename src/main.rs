use clap::Parser;
use roitracker::structs::cli::Cli;
use roitracker::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new();
    runner.run_command(cli.command).await?;
    Ok(())
}
