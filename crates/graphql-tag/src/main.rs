mod cli;
mod command;
mod command_result;
mod commands;
mod file_reader;
mod output_utils;

#[cfg(test)]
mod tests;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else {
        match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                std::process::ExitCode::FAILURE
            },
        }
    }
}

fn parse_log_level(
    env_val: Result<&str, &std::env::VarError>,
) -> Result<tracing::Level, String> {
    match env_val.map(str::trim) {
        Ok("DEBUG" | "debug") => Ok(tracing::Level::DEBUG),
        Ok("INFO" | "info") => Ok(tracing::Level::INFO),
        Ok("TRACE" | "trace") => Ok(tracing::Level::TRACE),
        Ok("VERBOSE" | "verbose") => Ok(tracing::Level::DEBUG),
        Ok(other) => Err(format!(
            "Invalid `LOG_LEVEL` environment variable value: `{other}`"
        )),
        Err(_) => Ok(DEFAULT_LOG_LEVEL),
    }
}

fn setup_logger(cli: &Cli) {
    let mut log_level_warnings: Vec<String> = vec![];
    let log_level =
        if cli.verbose {
            tracing::Level::DEBUG
        } else {
            let env_val = std::env::var("LOG_LEVEL");
            parse_log_level(env_val.as_deref()).unwrap_or_else(|warning| {
                log_level_warnings.push(warning);
                DEFAULT_LOG_LEVEL
            })
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    for warning in log_level_warnings.drain(..) {
        log::warn!("{warning}");
    }
}
