//! dash-cli - inspect the dashboard's date-range presets and query stats.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "dash-cli",
    version,
    about = "Business dashboard date-range and stats toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: dash_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    dash_cmd::run(cli.command).await
}
