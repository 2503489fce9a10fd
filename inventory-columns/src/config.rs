//! Configuration for the custom column store, loaded with figment.
//!
//! Sources merge in precedence order (later wins):
//! 1. Built-in defaults
//! 2. `inventory.toml` / `inventory.yaml` in the working directory, or one explicit file
//! 3. Environment variables prefixed `INVENTORY_` (e.g. `INVENTORY_STORE_DIR`)
//!
//! ```toml
//! store_dir = ".inventory/columns"
//!
//! [column_sorts]
//! part_records = [{ field = "warranty_months", order = 2 }]
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::sort::{ColumnSort, ColumnSorts};

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "INVENTORY_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnsConfig {
    /// Directory holding one YAML file of custom columns per table.
    pub store_dir: PathBuf,
    /// Column ordering preferences per table.
    #[serde(default)]
    pub column_sorts: HashMap<String, Vec<ColumnSort>>,
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from(".inventory/columns"),
            column_sorts: HashMap::new(),
        }
    }
}

impl ColumnsConfig {
    /// Load from defaults, the working directory's config files, and the environment.
    pub fn load() -> Result<Self> {
        Self::extract(Self::figment(None))
    }

    /// Load from defaults, one explicit config file, and the environment.
    pub fn load_from(path: &Path) -> Result<Self> {
        Self::extract(Self::figment(Some(path)))
    }

    /// The figment used by `load`/`load_from`, exposed so callers can layer more providers.
    pub fn figment(file: Option<&Path>) -> Figment {
        let figment = Figment::from(Serialized::defaults(ColumnsConfig::default()));
        let figment = match file {
            Some(path) => match path.extension().and_then(|e| e.to_str()) {
                Some("yaml") | Some("yml") => figment.merge(Yaml::file(path)),
                Some("json") => figment.merge(Json::file(path)),
                _ => figment.merge(Toml::file(path)),
            },
            None => figment
                .merge(Toml::file("inventory.toml"))
                .merge(Yaml::file("inventory.yaml")),
        };
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Ordering preferences for one table.
    pub fn sorts_for(&self, table_name: &str) -> ColumnSorts {
        self.column_sorts
            .get(table_name)
            .map(|records| records.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        debug!(
            store_dir = %config.store_dir.display(),
            sorted_tables = config.column_sorts.len(),
            "loaded columns configuration"
        );
        Ok(config)
    }
}
