mod logging;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use drizzlegen_core::{Error as CoreError, GeneratorOptions, GENERATOR_NAME};
use drizzlegen_generate::{Config, GenerateError, Generator, Logger, OutputTarget};
use logging::{init_logging, LogFormat};
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::util::TryInitError;

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Options(#[from] CoreError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error("logging error: {0}")]
    Logging(#[from] TryInitError),
}

#[derive(Parser, Debug)]
#[command(name = "drizzlegen", version, about = "Drizzle schema generator tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate generator options and print the resolved settings.
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
struct InspectArgs {
    /// JSON document with the host's generator options.
    #[arg(long, value_name = "FILE")]
    options: PathBuf,
    /// Format of the log lines written to stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InspectReport<'a> {
    generator: &'a str,
    output: &'a OutputTarget,
    config: &'a Config,
    models: usize,
    enums: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Inspect(args) => run_inspect(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run_inspect(args: InspectArgs) -> Result<(), CliError> {
    let InspectArgs {
        options,
        log_format,
    } = args;

    init_logging(log_format)?;
    tracing::info!(event = "run_started", options = %options.display());

    let contents = fs::read_to_string(&options).map_err(|source| CliError::Read {
        path: options.clone(),
        source,
    })?;
    let host_options = GeneratorOptions::from_json(serde_json::from_str(&contents)?)?;

    let mut generator = Generator::new();
    let context = generator.initialize(&host_options)?;
    let logger = Logger::new(context);
    let task = logger.create_task();

    tracing::info!(
        event = "context_initialized",
        output = %context.output().path,
        single_file = context.output().is_single_file,
        relational_query = context.is_relational_query_enabled()
    );

    let datamodel = &context.dmmf().datamodel;
    let report = InspectReport {
        generator: GENERATOR_NAME,
        output: context.output(),
        config: context.config(),
        models: datamodel.models.len(),
        enums: datamodel.enums.len(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    task.end("inspected generator options");
    tracing::info!(event = "run_finished", status = "success");

    Ok(())
}
