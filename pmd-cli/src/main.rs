//! pmd - command line view of the property management dashboard.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "pmd",
    version,
    about = "Occupation, revenue and property statistics for rental owners"
)]
struct Cli {
    #[command(subcommand)]
    command: pmd_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Running {:?}", cli.command);
    pmd_cmd::run(cli.command)
}
