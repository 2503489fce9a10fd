use std::process;

use clap::Parser;
use inventory_cli::cli::Cli;
use inventory_cli::commands;
use inventory_cli::context::CliContext;
use inventory_cli::exit_codes::EXIT_ERROR;
use inventory_cli::logging::configure_logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    configure_logging(cli.verbose, cli.quiet);

    let result = match CliContext::new(&cli).await {
        Ok(context) => commands::run(cli.command, &context).await,
        Err(e) => Err(e),
    };

    let code = match result {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!("command failed: {e:?}");
            eprintln!("Error: {e:#}");
            EXIT_ERROR
        }
    };
    process::exit(code);
}
