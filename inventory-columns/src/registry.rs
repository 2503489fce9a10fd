//! The custom column registry seam.
//!
//! Surface builds read definitions through [`ColumnRegistry`] so the store can
//! be swapped for a fixed list in tests or embedded hosts.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::CustomColumn;

/// Read-only lookup of the custom columns registered for a table.
///
/// Implementations return definitions in a documented, stable order and an
/// empty vector for unknown tables. Store failures surface as
/// [`ColumnsError::MetadataLookup`](crate::ColumnsError::MetadataLookup).
#[async_trait]
pub trait ColumnRegistry: Send + Sync {
    async fn custom_columns(&self, table_name: &str) -> Result<Vec<CustomColumn>>;
}

/// A fixed list of definitions, returned in list order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    columns: Vec<CustomColumn>,
}

impl InMemoryRegistry {
    pub fn new(columns: Vec<CustomColumn>) -> Self {
        Self { columns }
    }

    pub fn with_column(mut self, column: CustomColumn) -> Self {
        self.columns.push(column);
        self
    }
}

#[async_trait]
impl ColumnRegistry for InMemoryRegistry {
    async fn custom_columns(&self, table_name: &str) -> Result<Vec<CustomColumn>> {
        Ok(self
            .columns
            .iter()
            .filter(|c| c.table_name == table_name)
            .cloned()
            .collect())
    }
}
