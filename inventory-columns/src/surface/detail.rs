//! Detail (show) surface: read-only display fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::{display_value, lookup};
use crate::sort::{sort_key, ColumnSorts};
use crate::types::CustomColumn;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetailField {
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_position: Option<i64>,
}

impl DetailField {
    /// The stored value as a string; empty when missing or null.
    pub fn display(&self, record: &Value) -> String {
        display_value(lookup(record, &self.name))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Detail {
    table_name: String,
    sorts: ColumnSorts,
    fields: Vec<DetailField>,
}

impl Detail {
    pub fn new(table_name: impl Into<String>, sorts: ColumnSorts) -> Self {
        Self {
            table_name: table_name.into(),
            sorts,
            fields: Vec::new(),
        }
    }

    pub fn field(&mut self, name: impl Into<String>, label: impl Into<String>) -> &mut Self {
        let name = name.into();
        self.fields.push(DetailField {
            sort_position: self.sorts.position(&name),
            label: label.into(),
            name,
        });
        self
    }

    pub fn extend(&mut self, fields: impl IntoIterator<Item = DetailField>) {
        self.fields.extend(fields);
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn sorts(&self) -> &ColumnSorts {
        &self.sorts
    }

    pub fn fields(&self) -> &[DetailField] {
        &self.fields
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Fields in display order, same policy as the grid.
    pub fn ordered_fields(&self) -> Vec<&DetailField> {
        let mut ordered: Vec<_> = self.fields.iter().enumerate().collect();
        ordered.sort_by_key(|(i, f)| sort_key(f.sort_position, *i));
        ordered.into_iter().map(|(_, f)| f).collect()
    }

    /// `(label, value)` pairs for a record in display order.
    pub fn render(&self, record: &Value) -> Vec<(String, String)> {
        self.ordered_fields()
            .into_iter()
            .map(|f| (f.label.clone(), f.display(record)))
            .collect()
    }
}

/// Detail fields for custom column definitions, in registry order.
pub fn detail_fields(
    defs: &[CustomColumn],
    declared: &Detail,
    sorts: &ColumnSorts,
) -> Vec<DetailField> {
    defs.iter()
        .map(|def| {
            if declared.field_names().any(|n| n == def.name) {
                warn!(table = %def.table_name, name = %def.name, "custom column shadows a detail field");
            }
            DetailField {
                name: def.name.clone(),
                label: def.nick_name.clone(),
                sort_position: sorts.position(&def.name),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fields_follow_definitions() {
        let mut detail = Detail::new("software_records", ColumnSorts::new());
        detail.field("id", "ID").field("name", "Name");

        let defs = vec![
            CustomColumn::new("software_records", "seats", "Seats", "integer"),
            CustomColumn::new("software_records", "renewal", "Renewal", "date"),
        ];
        let fields = detail_fields(&defs, &detail, detail.sorts());

        let pairs: Vec<_> = fields
            .iter()
            .map(|f| (f.name.as_str(), f.label.as_str()))
            .collect();
        assert_eq!(pairs, [("seats", "Seats"), ("renewal", "Renewal")]);
    }

    #[test]
    fn render_uses_stored_strings_in_display_order() {
        let sorts = ColumnSorts::new().with("renewal", -1);
        let mut detail = Detail::new("software_records", sorts.clone());
        detail.field("name", "Name");
        let defs = vec![CustomColumn::new(
            "software_records",
            "renewal",
            "Renewal",
            "date",
        )];
        let fields = detail_fields(&defs, &detail, &sorts);
        detail.extend(fields);

        let record = json!({"name": "Office", "renewal": "2026-03-01"});
        assert_eq!(
            detail.render(&record),
            vec![
                ("Renewal".to_string(), "2026-03-01".to_string()),
                ("Name".to_string(), "Office".to_string()),
            ]
        );
    }

    #[test]
    fn missing_value_renders_empty() {
        let field = DetailField {
            name: "seats".into(),
            label: "Seats".into(),
            sort_position: None,
        };
        assert_eq!(field.display(&json!({})), "");
    }
}
