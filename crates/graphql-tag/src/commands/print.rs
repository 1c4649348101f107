use crate::file_reader;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_tag::GraphQLTag;
use libgraphql_tag::TagOptions;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[arg(
        help="Accept variable definitions on fragments \
             (`fragment F($a: Int) on T { ... }`).",
        long,
    )]
    experimental_fragment_variables: bool,

    #[arg(
        help="Path to the GraphQL file to print.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for PrintCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let content = match file_reader::read_content(&self.file_path).await {
            Ok(content) => content,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err}",
                output_utils::RED_X,
            )),
        };

        let tag = GraphQLTag::new().with_options(TagOptions {
            experimental_fragment_variables: self.experimental_fragment_variables,
            ..TagOptions::default()
        });
        let doc = match tag.parse(&content, &[]) {
            Ok(doc) => doc,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {}: {err}",
                output_utils::RED_X,
                self.file_path.display(),
            )),
        };

        match serde_json::to_string_pretty(doc.document()) {
            Ok(json) => CommandResult::stdout(format_args!("{json}")),
            Err(err) => CommandResult::stderr(format_args!(
                "{} Failed to serialize document: {err}",
                output_utils::RED_X,
            )),
        }
    }
}
