use crate::Cli;
use crate::CommandResult;
use clap::Parser;
use std::path::Path;
use std::path::PathBuf;

/// A scratch directory under the system temp dir, removed on drop.
pub(super) struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub(super) fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "graphql-tag-{name}-{}",
            std::process::id(),
        ));
        let _ = std::fs::remove_dir_all(&path);
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub(super) fn path(&self) -> &Path {
        &self.path
    }

    pub(super) fn write(&self, relative_path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(relative_path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&file_path, content).unwrap();
        file_path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

pub(super) async fn run_cli(args: &[&str]) -> CommandResult {
    let mut cli = Cli::try_parse_from(
        std::iter::once("graphql-tag").chain(args.iter().copied()),
    ).unwrap();
    let command = cli.cmd.take().unwrap();
    command.run(cli).await
}
