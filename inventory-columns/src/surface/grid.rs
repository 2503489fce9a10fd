//! List grid surface.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::{display_value, lookup};
use crate::mapping::{display_for, DisplayKind};
use crate::sort::{sort_key, ColumnSorts};
use crate::types::CustomColumn;

/// One column of a list grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GridColumn {
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_position: Option<i64>,
    pub display: DisplayKind,
}

impl GridColumn {
    /// Cell text for a record: the stored value's string form.
    pub fn cell(&self, record: &Value) -> String {
        display_value(lookup(record, &self.name))
    }
}

/// A list grid for one table: fixed columns declared by the screen, then
/// custom columns appended from the projection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    table_name: String,
    sorts: ColumnSorts,
    columns: Vec<GridColumn>,
}

impl Grid {
    pub fn new(table_name: impl Into<String>, sorts: ColumnSorts) -> Self {
        Self {
            table_name: table_name.into(),
            sorts,
            columns: Vec::new(),
        }
    }

    /// Declare a fixed text column, honoring the grid's sort overrides.
    pub fn column(&mut self, name: impl Into<String>, label: impl Into<String>) -> &mut Self {
        let name = name.into();
        self.columns.push(GridColumn {
            sort_position: self.sorts.position(&name),
            label: label.into(),
            display: DisplayKind::Text,
            name,
        });
        self
    }

    /// Append projected columns.
    pub fn extend(&mut self, columns: impl IntoIterator<Item = GridColumn>) {
        self.columns.extend(columns);
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn sorts(&self) -> &ColumnSorts {
        &self.sorts
    }

    /// Columns in declaration order.
    pub fn columns(&self) -> &[GridColumn] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Columns in display order: manual position if set, else declaration
    /// index; ties keep declaration order.
    pub fn ordered_columns(&self) -> Vec<&GridColumn> {
        let mut ordered: Vec<_> = self.columns.iter().enumerate().collect();
        ordered.sort_by_key(|(i, c)| sort_key(c.sort_position, *i));
        ordered.into_iter().map(|(_, c)| c).collect()
    }

    /// One row of cell text in display order.
    pub fn row(&self, record: &Value) -> Vec<String> {
        self.ordered_columns()
            .into_iter()
            .map(|c| c.cell(record))
            .collect()
    }
}

/// Grid columns for custom column definitions, in registry order.
///
/// Names already declared on the grid are reported but still emitted.
pub fn grid_columns(
    defs: &[CustomColumn],
    declared: &Grid,
    sorts: &ColumnSorts,
) -> Vec<GridColumn> {
    defs.iter()
        .map(|def| {
            if declared.column_names().any(|n| n == def.name) {
                warn!(table = %def.table_name, name = %def.name, "custom column shadows a grid column");
            }
            GridColumn {
                name: def.name.clone(),
                label: def.nick_name.clone(),
                sort_position: sorts.position(&def.name),
                display: display_for(&def.type_),
            }
        })
        .collect()
}
