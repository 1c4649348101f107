use crate::Cli;
use crate::CommandResult;

/// A `graphql-tag` subcommand (`check`, `print`). Each one reports back
/// through a [`CommandResult`] rather than printing, so `main` owns stdout,
/// stderr and the exit code, and tests can inspect all three.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
