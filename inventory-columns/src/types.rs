//! Core custom column types.
//!
//! A [`CustomColumn`] is one row of administrator-entered metadata describing an
//! extra attribute on an inventory table. All types serialize to/from YAML via
//! serde, using the persisted key names (`table_name`, `nick_name`, `type`,
//! `is_nullable`, `select_options`).

use std::fmt;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::{ColumnsError, Result};

/// A single option of a select column. The stored value and the label are both `item`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectOption {
    pub item: String,
}

impl SelectOption {
    pub fn new(item: impl Into<String>) -> Self {
        Self { item: item.into() }
    }
}

/// A value/label pair offered by a select widget or select filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl From<&SelectOption> for Choice {
    fn from(option: &SelectOption) -> Self {
        Self {
            value: option.item.clone(),
            label: option.item.clone(),
        }
    }
}

/// The type tag of a custom column.
///
/// Unknown tags are kept verbatim in `Other` so they round-trip through the
/// store; every mapping treats them like `Text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnType {
    Date,
    DateTime,
    Integer,
    Double,
    Float,
    LongText,
    Select,
    #[default]
    Text,
    Other(String),
}

impl ColumnType {
    /// The persisted tag for this type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Date => "date",
            Self::DateTime => "dateTime",
            Self::Integer => "integer",
            Self::Double => "double",
            Self::Float => "float",
            Self::LongText => "longText",
            Self::Select => "select",
            Self::Text => "text",
            Self::Other(tag) => tag,
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self, Self::Select)
    }
}

impl From<&str> for ColumnType {
    fn from(tag: &str) -> Self {
        match tag {
            "date" => Self::Date,
            "dateTime" => Self::DateTime,
            "integer" => Self::Integer,
            "double" => Self::Double,
            "float" => Self::Float,
            "longText" => Self::LongText,
            "select" => Self::Select,
            "text" | "" => Self::Text,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ColumnType {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<ColumnType> for String {
    fn from(ty: ColumnType) -> Self {
        match ty {
            ColumnType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_nullable() -> bool {
    true
}

/// A custom column definition: the metadata for one extra attribute of a table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomColumn {
    pub id: Ulid,
    pub table_name: String,
    pub name: String,
    pub nick_name: String,
    #[serde(rename = "type", default)]
    pub type_: ColumnType,
    #[serde(default = "default_nullable")]
    pub is_nullable: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub select_options: Vec<SelectOption>,
}

impl CustomColumn {
    /// Create an optional column with a fresh id and no select options.
    pub fn new(
        table_name: impl Into<String>,
        name: impl Into<String>,
        nick_name: impl Into<String>,
        type_: impl Into<ColumnType>,
    ) -> Self {
        Self {
            id: Ulid::new(),
            table_name: table_name.into(),
            name: name.into(),
            nick_name: nick_name.into(),
            type_: type_.into(),
            is_nullable: true,
            select_options: Vec::new(),
        }
    }

    /// Mark the column mandatory on the form surface.
    pub fn required(mut self) -> Self {
        self.is_nullable = false;
        self
    }

    /// Replace the select options, keeping the given order.
    pub fn with_options<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select_options = items.into_iter().map(SelectOption::new).collect();
        self
    }

    /// Choices offered for this column, in stored option order.
    pub fn choices(&self) -> Vec<Choice> {
        self.select_options.iter().map(Choice::from).collect()
    }

    /// A select column with no options renders, but offers nothing to pick.
    pub fn is_degenerate(&self) -> bool {
        self.type_.is_select() && self.select_options.is_empty()
    }

    /// Authoring-time checks. Projectors never call this.
    pub fn validate(&self) -> Result<()> {
        if !is_identifier(&self.table_name) {
            return Err(ColumnsError::malformed(
                &self.name,
                format!("invalid table name '{}'", self.table_name),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(ColumnsError::malformed(&self.name, "name cannot be empty"));
        }
        if !is_identifier(&self.name) {
            return Err(ColumnsError::malformed(
                &self.name,
                "name may only contain letters, digits and underscores",
            ));
        }
        if self.nick_name.trim().is_empty() {
            return Err(ColumnsError::malformed(&self.name, "label cannot be empty"));
        }

        if self.type_.is_select() {
            if self.select_options.is_empty() {
                return Err(ColumnsError::malformed(
                    &self.name,
                    "select column needs at least one option",
                ));
            }
            for (i, option) in self.select_options.iter().enumerate() {
                if option.item.trim().is_empty() {
                    return Err(ColumnsError::malformed(
                        &self.name,
                        format!("option {} is empty", i + 1),
                    ));
                }
                if self.select_options[..i].contains(option) {
                    return Err(ColumnsError::malformed(
                        &self.name,
                        format!("option '{}' is listed twice", option.item),
                    ));
                }
            }
        } else if !self.select_options.is_empty() {
            return Err(ColumnsError::malformed(
                &self.name,
                format!("options are only allowed on select columns, not {}", self.type_),
            ));
        }

        Ok(())
    }
}

/// Table and column names double as file stems and attribute keys.
pub(crate) fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_type_known_tags_round_trip() {
        for tag in [
            "date", "dateTime", "integer", "double", "float", "longText", "select", "text",
        ] {
            let ty = ColumnType::from(tag);
            assert!(!matches!(ty, ColumnType::Other(_)), "{tag} parsed as Other");
            assert_eq!(String::from(ty), tag);
        }
    }

    #[test]
    fn column_type_unknown_tag_is_preserved() {
        let ty = ColumnType::from("color");
        assert_eq!(ty, ColumnType::Other("color".into()));
        assert_eq!(ty.as_str(), "color");
    }

    #[test]
    fn column_type_empty_tag_is_text() {
        assert_eq!(ColumnType::from(""), ColumnType::Text);
    }

    #[test]
    fn custom_column_yaml_uses_persisted_keys() {
        let column = CustomColumn::new("part_records", "license_tier", "License tier", "select")
            .with_options(["Gold", "Silver"]);
        let yaml = serde_yaml_ng::to_string(&column).unwrap();
        assert!(yaml.contains("table_name: part_records"));
        assert!(yaml.contains("nick_name: License tier"));
        assert!(yaml.contains("type: select"));
        assert!(yaml.contains("is_nullable: true"));
        assert!(yaml.contains("- item: Gold"));
        assert!(!yaml.contains("type_"));
    }

    #[test]
    fn custom_column_from_yaml_with_defaults() {
        let yaml_input = r#"
id: 01HZY3M5K2Q8W6T0V4R7N9B1CD
table_name: part_records
name: serial
nick_name: Serial
"#;
        let column: CustomColumn = serde_yaml_ng::from_str(yaml_input).unwrap();
        assert_eq!(column.type_, ColumnType::Text);
        assert!(column.is_nullable);
        assert!(column.select_options.is_empty());
    }

    #[test]
    fn custom_column_from_yaml_with_unknown_type() {
        let yaml_input = r#"
id: 01HZY3M5K2Q8W6T0V4R7N9B1CD
table_name: part_records
name: shade
nick_name: Shade
type: color
is_nullable: false
"#;
        let column: CustomColumn = serde_yaml_ng::from_str(yaml_input).unwrap();
        assert_eq!(column.type_, ColumnType::Other("color".into()));
        assert!(!column.is_nullable);

        let yaml_out = serde_yaml_ng::to_string(&column).unwrap();
        assert!(yaml_out.contains("type: color"));
    }

    #[test]
    fn choices_mirror_items_in_order() {
        let column = CustomColumn::new("software_records", "tier", "Tier", ColumnType::Select)
            .with_options(["Gold", "Silver", "Bronze"]);
        let choices = column.choices();
        let values: Vec<_> = choices.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, ["Gold", "Silver", "Bronze"]);
        assert!(choices.iter().all(|c| c.value == c.label));
    }

    #[test]
    fn validate_accepts_well_formed_columns() {
        CustomColumn::new("part_records", "warranty_months", "Warranty (months)", "integer")
            .required()
            .validate()
            .unwrap();
        CustomColumn::new("part_records", "tier", "Tier", "select")
            .with_options(["Gold"])
            .validate()
            .unwrap();
    }

    #[test]
    fn validate_rejects_select_without_options() {
        let column = CustomColumn::new("part_records", "tier", "Tier", "select");
        assert!(column.is_degenerate());
        let err = column.validate().unwrap_err();
        assert!(matches!(err, ColumnsError::MalformedDefinition { .. }));
    }

    #[test]
    fn validate_rejects_options_on_non_select() {
        let column =
            CustomColumn::new("part_records", "note", "Note", "text").with_options(["stray"]);
        assert!(column.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_options() {
        let column = CustomColumn::new("part_records", "tier", "Tier", "select")
            .with_options(["Gold", "Gold"]);
        let err = column.validate().unwrap_err();
        assert!(err.to_string().contains("listed twice"));
    }

    #[test]
    fn validate_rejects_bad_identifiers() {
        assert!(CustomColumn::new("part_records", "bad name", "Bad", "text")
            .validate()
            .is_err());
        assert!(CustomColumn::new("../etc", "name", "Name", "text")
            .validate()
            .is_err());
        assert!(CustomColumn::new("part_records", "name", "  ", "text")
            .validate()
            .is_err());
    }
}
