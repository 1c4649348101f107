use crate::file_reader;
use crate::file_reader::ReadContentError;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_tag::GraphQLTag;
use libgraphql_tag::GraphQLTagError;
use libgraphql_tag::TagOptions;
use std::collections::BTreeMap;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinSet;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        help="Fail (rather than just warn) when two different fragment \
             definitions share a name.",
        long,
    )]
    deny_fragment_conflicts: bool,

    #[arg(
        help="Accept variable definitions on fragments \
             (`fragment F($a: Int) on T { ... }`).",
        long,
    )]
    experimental_fragment_variables: bool,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Don't log a warning for each fragment name conflict as it is \
             found. Conflicts are still listed in the summary.",
        long,
    )]
    no_fragment_warnings: bool,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum CheckFileError {
    #[error(transparent)]
    Parse(#[from] GraphQLTagError),

    #[error(transparent)]
    Read(#[from] ReadContentError),
}

#[derive(Debug, Default)]
struct FoundFiles {
    errors: Vec<String>,
    file_paths: Vec<PathBuf>,
    num_non_graphql_files: usize,
}

impl CheckCmd {
    fn find_graphql_files(&self) -> FoundFiles {
        let mut found = FoundFiles::default();

        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        found.errors.push(e.to_string());
                        continue
                    },
                };

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue
                }

                let is_graphql_file = entry_path.extension()
                    .map(|ext| ext.to_string_lossy())
                    .is_some_and(|ext| graphql_file_exts.contains(&*ext));
                if is_graphql_file {
                    log::trace!("Found GraphQL file at {entry_path:#?}.");
                    found.file_paths.push(entry_path.to_path_buf());
                } else {
                    found.num_non_graphql_files += 1;
                }
            }
        }

        // If the user specifies a single file path as an argument, presume the
        // user explicitly wants that file checked as a GraphQL file -- even if
        // its file extension doesn't match one of `graphql_file_exts`.
        if found.file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to check {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                self.graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            found.num_non_graphql_files =
                found.num_non_graphql_files.saturating_sub(1);
            found.file_paths.push(first_arg_path.to_owned());
        }

        found.file_paths.sort();
        found
    }
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let FoundFiles {
            mut errors,
            file_paths,
            num_non_graphql_files,
        } = self.find_graphql_files();
        log::debug!(
            "Found {} GraphQL files to be checked.",
            file_paths.len(),
        );

        let tag = Arc::new(GraphQLTag::new().with_options(TagOptions {
            experimental_fragment_variables: self.experimental_fragment_variables,
            warn_on_fragment_conflict: !self.no_fragment_warnings,
        }));

        let mut parse_tasks = JoinSet::new();
        for file_path in file_paths.iter().cloned() {
            let tag = Arc::clone(&tag);
            parse_tasks.spawn(async move {
                let result = match file_reader::read_content(&file_path).await {
                    Ok(content) =>
                        tag.parse(&content, &[]).map_err(CheckFileError::from),
                    Err(err) => Err(CheckFileError::from(err)),
                };
                (file_path, result)
            });
        }

        let mut num_operations = 0;
        // Fragment name -> normalized fragment source -> defining files.
        let mut fragment_files: BTreeMap<String, BTreeMap<String, Vec<PathBuf>>> =
            BTreeMap::new();
        let mut file_errors = vec![];
        while let Some(joined) = parse_tasks.join_next().await {
            let (file_path, result) = match joined {
                Ok(output) => output,
                Err(err) => {
                    errors.push(format!("Parse task failed: {err}"));
                    continue
                },
            };
            match result {
                Ok(doc) => {
                    num_operations += doc.document().operations().count();
                    for (name, source_key) in doc.fragment_source_keys() {
                        fragment_files
                            .entry(name.to_string())
                            .or_default()
                            .entry(source_key.to_string())
                            .or_default()
                            .push(file_path.clone());
                    }
                },
                Err(err) => file_errors.push((file_path, err)),
            }
        }

        file_errors.sort_by(|(a, _), (b, _)| a.cmp(b));
        errors.extend(
            file_errors.into_iter()
                .map(|(file_path, err)| format!("{}: {err}", file_path.display())),
        );

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} GraphQL check errors:\n{}",
                output_utils::RED_X,
                errors.iter()
                    .map(|err| format!("  * {err}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ));
        }

        let conflicts = tag.fragment_conflicts();
        let conflict_report = conflicts.iter()
            .map(|(name, variants)| {
                let variant_files = fragment_files.get(name);
                let variant_lines = variants.iter()
                    .map(|variant| {
                        let mut files = variant_files
                            .and_then(|by_variant| by_variant.get(variant))
                            .map(|paths| {
                                paths.iter()
                                    .map(|path| path.display().to_string())
                                    .collect::<Vec<_>>()
                            })
                            .unwrap_or_default();
                        files.sort();
                        files.dedup();
                        format!("    - `{variant}` in: {}", files.join(", "))
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                format!(
                    "  * `{name}` has {} different definitions:\n{variant_lines}",
                    variants.len(),
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        if !conflicts.is_empty() && self.deny_fragment_conflicts {
            return CommandResult::stderr(format_args!(
                "{} Found {} conflicting fragment names:\n{conflict_report}",
                output_utils::RED_X,
                conflicts.len(),
            ));
        }

        let mut result = CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL checked successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Parsed {} distinct documents.\n",
                "  * Found {} operations.\n",
                "  * Found {} fragment names.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_non_graphql_files,
            tag.cached_document_count(),
            num_operations,
            fragment_files.len(),
        ));
        if !conflicts.is_empty() {
            result.stderr = Some(format!(
                "{} Found {} conflicting fragment names:\n{conflict_report}",
                output_utils::WARNING_SIGN,
                conflicts.len(),
            ));
        }
        result
    }
}
