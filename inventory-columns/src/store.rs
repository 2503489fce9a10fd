//! YAML-backed custom column registry.
//!
//! Keeps one YAML file per table under a root directory. Each file holds the
//! table's definitions as an ordered sequence; that sequence order is the
//! registry order (insertion order: new definitions are appended, updates keep
//! their slot). Nothing is cached: every lookup reads the file again.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, trace};
use ulid::Ulid;

use crate::config::ColumnsConfig;
use crate::error::{ColumnsError, Result};
use crate::registry::ColumnRegistry;
use crate::types::{is_identifier, CustomColumn};

/// Custom column definitions stored on disk.
///
/// ```text
/// columns/
///   part_records.yaml       ← ordered definitions for part_records
///   software_records.yaml
/// ```
#[derive(Debug, Clone)]
pub struct ColumnStore {
    root: PathBuf,
}

impl ColumnStore {
    /// Open or create a store directory.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        debug!(root = %root.display(), "column store opened");
        Ok(Self { root })
    }

    /// Open the store configured in `config`.
    pub async fn from_config(config: &ColumnsConfig) -> Result<Self> {
        Self::open(&config.store_dir).await
    }

    /// The root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All definitions for a table in stored order. Missing file means no definitions.
    pub async fn read_table(&self, table_name: &str) -> Result<Vec<CustomColumn>> {
        let Some(path) = self.table_path(table_name) else {
            return Ok(Vec::new());
        };
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let columns: Vec<CustomColumn> = serde_yaml_ng::from_str(&content)?;
        if let Some(stray) = columns.iter().find(|c| c.table_name != table_name) {
            return Err(ColumnsError::malformed(
                &stray.name,
                format!(
                    "stored in {table_name}.yaml but belongs to table '{}'",
                    stray.table_name
                ),
            ));
        }
        trace!(table = table_name, count = columns.len(), "read custom columns");
        Ok(columns)
    }

    /// Create or update a definition. Updates are matched by id and keep their position.
    ///
    /// A definition cannot move between tables: updating an id that already
    /// lives on another table is rejected.
    pub async fn write_column(&self, def: &CustomColumn) -> Result<()> {
        def.validate()?;

        for table in self.tables().await? {
            if table == def.table_name {
                continue;
            }
            if self.read_table(&table).await?.iter().any(|c| c.id == def.id) {
                return Err(ColumnsError::malformed(
                    &def.name,
                    format!("already defined on table '{table}'"),
                ));
            }
        }

        let mut columns = self.read_table(&def.table_name).await?;
        if columns.iter().any(|c| c.name == def.name && c.id != def.id) {
            return Err(ColumnsError::DuplicateColumnName {
                table: def.table_name.clone(),
                name: def.name.clone(),
            });
        }

        match columns.iter_mut().find(|c| c.id == def.id) {
            Some(existing) => *existing = def.clone(),
            None => columns.push(def.clone()),
        }

        self.write_table(&def.table_name, &columns).await?;
        debug!(table = %def.table_name, name = %def.name, id = %def.id, "wrote custom column");
        Ok(())
    }

    /// Delete a definition by id.
    pub async fn delete_column(&self, table_name: &str, id: &Ulid) -> Result<CustomColumn> {
        let mut columns = self.read_table(table_name).await?;
        let idx = columns.iter().position(|c| &c.id == id).ok_or_else(|| {
            ColumnsError::ColumnNotFound {
                table: table_name.to_string(),
                id: id.to_string(),
            }
        })?;

        let removed = columns.remove(idx);
        self.write_table(table_name, &columns).await?;
        debug!(table = table_name, name = %removed.name, %id, "deleted custom column");
        Ok(removed)
    }

    /// Names of tables that have a definition file, sorted.
    pub async fn tables(&self) -> Result<Vec<String>> {
        let mut tables = Vec::new();
        let mut entries = fs::read_dir(&self.root).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if is_identifier(stem) {
                    tables.push(stem.to_string());
                }
            }
        }
        tables.sort();
        Ok(tables)
    }

    // --- Internal ---

    /// File for a table, or `None` when the name cannot be a file stem.
    fn table_path(&self, table_name: &str) -> Option<PathBuf> {
        is_identifier(table_name).then(|| self.root.join(format!("{table_name}.yaml")))
    }

    /// Persist a table's list. An empty list removes the file.
    async fn write_table(&self, table_name: &str, columns: &[CustomColumn]) -> Result<()> {
        let path = self
            .table_path(table_name)
            .ok_or_else(|| ColumnsError::malformed(table_name, "invalid table name"))?;
        if columns.is_empty() {
            return match fs::remove_file(&path).await {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
                _ => Ok(()),
            };
        }
        let yaml = serde_yaml_ng::to_string(columns)?;
        atomic_write(&path, yaml.as_bytes()).await
    }
}

#[async_trait]
impl ColumnRegistry for ColumnStore {
    async fn custom_columns(&self, table_name: &str) -> Result<Vec<CustomColumn>> {
        self.read_table(table_name)
            .await
            .map_err(|e| ColumnsError::lookup(table_name, e))
    }
}

/// Write to a temp file then rename for atomic persistence.
async fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidInput, "no parent dir"))?;
    let tmp = dir.join(format!(".tmp_{}", Ulid::new()));
    let written = match fs::write(&tmp, data).await {
        Ok(()) => fs::rename(&tmp, path).await,
        Err(e) => Err(e),
    };
    if let Err(e) = written {
        if let Err(cleanup) = fs::remove_file(&tmp).await {
            trace!(path = %tmp.display(), error = %cleanup, "temp file not removed");
        }
        return Err(e.into());
    }
    Ok(())
}
