//! CLI Context
//!
//! Shared state built once from the parsed arguments and the loaded
//! configuration, handed to every command.

use std::sync::Arc;

use anyhow::{Context, Result};
use inventory_columns::{ColumnStore, ColumnsConfig, Projector};

use crate::cli::{Cli, OutputFormat};

pub struct CliContext {
    /// Loaded configuration, with CLI overrides applied
    pub config: ColumnsConfig,

    /// Authoring access to the custom column store
    pub store: Arc<ColumnStore>,

    /// Projector reading from the same store
    pub projector: Projector,

    /// Global output format setting
    pub format: OutputFormat,

    /// Suppress informational output; violations and errors still print
    pub quiet: bool,
}

impl CliContext {
    pub async fn new(cli: &Cli) -> Result<Self> {
        let mut config = load_configuration(cli);
        if let Some(store_dir) = &cli.store {
            config.store_dir = store_dir.clone();
        }

        let store = Arc::new(
            ColumnStore::from_config(&config)
                .await
                .with_context(|| {
                    format!("failed to open column store at {}", config.store_dir.display())
                })?,
        );
        let projector = Projector::new(store.clone());

        Ok(Self {
            config,
            store,
            projector,
            format: cli.format.unwrap_or_default(),
            quiet: cli.quiet,
        })
    }
}

/// Load configuration, falling back to defaults so the CLI stays usable with a broken file.
fn load_configuration(cli: &Cli) -> ColumnsConfig {
    let loaded = match &cli.config {
        Some(path) => ColumnsConfig::load_from(path),
        None => ColumnsConfig::load(),
    };
    match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load configuration: {}", e);
            eprintln!("Warning: Configuration loading failed: {}", e);
            eprintln!("Continuing with default configuration...");
            ColumnsConfig::default()
        }
    }
}
