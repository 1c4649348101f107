use anyhow::Context;
use clap::CommandFactory;
use crate::commands;

/// Checks and inspects GraphQL documents the way `libgraphql-tag` parses,
/// caches and deduplicates them.
#[derive(clap::Parser, Debug)]
#[command(name = "graphql-tag", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// With no subcommand there's nothing to check, so just print usage.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command()
            .print_help()
            .context("Failed to print help")?;
        Ok(())
    }
}
