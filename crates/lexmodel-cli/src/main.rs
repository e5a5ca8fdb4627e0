//! lexmodel CLI entry point.
//!
//! Binary name: `lexm`
//!
//! Parses CLI arguments, loads `config.toml` from the data directory, sets up
//! tracing, then dispatches to the command handler.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use lexmodel_core::ValidationOptions;
use lexmodel_infra::{CliConfig, load_cli_config, resolve_data_dir};
use lexmodel_observe::attrs;
use lexmodel_observe::tracing_setup::{
    init_scoped_tracing, init_tracing, shutdown_tracing, verbosity_filter,
};
use tracing::Instrument;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Shell completions need neither config nor tracing
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "lexm", &mut std::io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let filter = verbosity_filter(cli.verbose, cli.quiet);

    // The config decides whether OTel is on, so read it under a scoped subscriber
    let data_dir = resolve_data_dir();
    let config = {
        let _scoped = init_scoped_tracing(filter);
        load_cli_config(&data_dir).await
    };

    init_tracing(filter, config.logging.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;
    tracing::debug!(data_dir = %data_dir.display(), "loaded configuration");

    let result = run(cli, &config).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli, config: &CliConfig) -> anyhow::Result<ExitCode> {
    let command = match &cli.command {
        Commands::Validate { .. } => attrs::COMMAND_VALIDATE,
        Commands::Show { .. } => attrs::COMMAND_SHOW,
        Commands::Convert { .. } => attrs::COMMAND_CONVERT,
        Commands::Schema { .. } => attrs::COMMAND_SCHEMA,
        Commands::Enums { .. } => attrs::COMMAND_ENUMS,
        Commands::Completions { .. } => unreachable!("handled above"),
    };
    let span = tracing::info_span!("command", lexm.command = tracing::field::Empty);
    span.record(attrs::COMMAND, command);

    dispatch(cli, config).instrument(span).await
}

async fn dispatch(cli: Cli, config: &CliConfig) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Validate { files, lenient } => {
            let mut options = ValidationOptions::from(&config.validation);
            if lenient {
                options.enforce_required = false;
            }
            let all_valid =
                cli::document::validate_files(&files, options, cli.json, cli.quiet).await?;
            if !all_valid {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Show { file } => {
            cli::document::show_document(&file, cli.json).await?;
        }

        Commands::Convert { file, to, out } => {
            cli::document::convert_document(&file, to.as_deref(), out.as_deref(), config, cli.quiet)
                .await?;
        }

        Commands::Schema { shape } => {
            cli::catalog::print_schema(shape.as_deref(), cli.json)?;
        }

        Commands::Enums { name } => {
            cli::catalog::print_enums(name.as_deref(), cli.json)?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(ExitCode::SUCCESS)
}
