mod check;
mod print;

use crate::Cli;
use crate::CommandResult;
pub(crate) use check::CheckCmd;
pub(crate) use print::PrintCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-tag")]
pub(crate) enum CommandEnum {
    /// Parse every GraphQL file under the given paths and report syntax
    /// errors and fragment name conflicts.
    Check(Box<CheckCmd>),

    /// Print a GraphQL file's cached (location-free, deduplicated) AST as
    /// JSON.
    Print(Box<PrintCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Print(cmd) => cmd.run(cli).await,
        }
    }
}
