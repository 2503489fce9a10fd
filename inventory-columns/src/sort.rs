//! Manual column ordering preferences.
//!
//! Administrators can pin grid and detail columns to positions. The
//! preferences are stored elsewhere as `{field, order}` records; this module
//! only carries them into a surface build.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One ordering preference record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnSort {
    pub field: String,
    pub order: i64,
}

impl ColumnSort {
    pub fn new(field: impl Into<String>, order: i64) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }
}

/// Field name → manual position. When a field appears in several records the
/// last one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSorts {
    positions: HashMap<String, i64>,
}

impl ColumnSorts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, order: i64) -> Self {
        self.positions.insert(field.into(), order);
        self
    }

    /// Manual position for a field, if one was set.
    pub fn position(&self, field: &str) -> Option<i64> {
        self.positions.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }
}

impl FromIterator<ColumnSort> for ColumnSorts {
    fn from_iter<I: IntoIterator<Item = ColumnSort>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().map(|s| (s.field, s.order)).collect(),
        }
    }
}

/// Sort key for the item declared at `index`: its manual position if set,
/// otherwise the declaration index itself.
pub(crate) fn sort_key(position: Option<i64>, index: usize) -> i64 {
    position.unwrap_or(index as i64)
}
