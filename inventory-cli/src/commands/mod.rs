pub mod columns;
pub mod render;
pub mod validate;

use anyhow::Result;

use crate::cli::Commands;
use crate::context::CliContext;
use crate::exit_codes::EXIT_SUCCESS;

/// Run one parsed command and return its exit code.
pub async fn run(command: Commands, context: &CliContext) -> Result<i32> {
    match command {
        Commands::Columns { subcommand } => {
            columns::execute(subcommand, context).await?;
            Ok(EXIT_SUCCESS)
        }
        Commands::Render { surface, screen } => {
            render::execute(surface, screen.screen().as_ref(), context).await?;
            Ok(EXIT_SUCCESS)
        }
        Commands::Validate { screen, data } => {
            validate::execute(screen.screen().as_ref(), &data, context).await
        }
    }
}
