//! Type-to-renderer mapping table.
//!
//! Every surface decision driven by a column's `type` lives here, as a total
//! `match` with a text fallback arm. Unknown tags never error.

use serde::{Deserialize, Serialize};

use crate::types::ColumnType;

/// Input widget used on the form surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    DatePicker,
    DateTimePicker,
    Number,
    Currency,
    Textarea,
    Select,
    Text,
}

impl WidgetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DatePicker => "date-picker",
            Self::DateTimePicker => "date-time-picker",
            Self::Number => "number",
            Self::Currency => "currency",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Text => "text",
        }
    }
}

/// Filter control kind. Custom columns only support exact matching.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    Equal,
    EqualSelect,
}

impl FilterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::EqualSelect => "equal-select",
        }
    }
}

/// How a grid cell or detail field is displayed. Advisory only: values are
/// always shown as their stored string form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayKind {
    Date,
    Number,
    Text,
}

impl DisplayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Number => "number",
            Self::Text => "text",
        }
    }
}

/// Form widget for a column type.
pub fn widget_for(ty: &ColumnType) -> WidgetKind {
    match ty {
        ColumnType::Date => WidgetKind::DatePicker,
        ColumnType::DateTime => WidgetKind::DateTimePicker,
        ColumnType::Integer => WidgetKind::Number,
        ColumnType::Double | ColumnType::Float => WidgetKind::Currency,
        ColumnType::LongText => WidgetKind::Textarea,
        ColumnType::Select => WidgetKind::Select,
        ColumnType::Text | ColumnType::Other(_) => WidgetKind::Text,
    }
}

/// Filter control for a column type.
pub fn filter_for(ty: &ColumnType) -> FilterKind {
    match ty {
        ColumnType::Select => FilterKind::EqualSelect,
        _ => FilterKind::Equal,
    }
}

/// Display hint for a column type.
pub fn display_for(ty: &ColumnType) -> DisplayKind {
    match ty {
        ColumnType::Date | ColumnType::DateTime => DisplayKind::Date,
        ColumnType::Integer | ColumnType::Double | ColumnType::Float => DisplayKind::Number,
        _ => DisplayKind::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("date", WidgetKind::DatePicker)]
    #[case("dateTime", WidgetKind::DateTimePicker)]
    #[case("integer", WidgetKind::Number)]
    #[case("double", WidgetKind::Currency)]
    #[case("float", WidgetKind::Currency)]
    #[case("longText", WidgetKind::Textarea)]
    #[case("select", WidgetKind::Select)]
    #[case("text", WidgetKind::Text)]
    #[case("", WidgetKind::Text)]
    #[case("color", WidgetKind::Text)]
    #[case("DATE", WidgetKind::Text)]
    fn widget_mapping_is_total(#[case] tag: &str, #[case] expected: WidgetKind) {
        assert_eq!(widget_for(&ColumnType::from(tag)), expected);
    }

    #[rstest]
    #[case("select", FilterKind::EqualSelect)]
    #[case("integer", FilterKind::Equal)]
    #[case("date", FilterKind::Equal)]
    #[case("longText", FilterKind::Equal)]
    #[case("anything", FilterKind::Equal)]
    fn filter_mapping(#[case] tag: &str, #[case] expected: FilterKind) {
        assert_eq!(filter_for(&ColumnType::from(tag)), expected);
    }

    #[rstest]
    #[case("dateTime", DisplayKind::Date)]
    #[case("float", DisplayKind::Number)]
    #[case("select", DisplayKind::Text)]
    fn display_mapping(#[case] tag: &str, #[case] expected: DisplayKind) {
        assert_eq!(display_for(&ColumnType::from(tag)), expected);
    }

    #[test]
    fn widget_serializes_kebab_case() {
        let json = serde_json::to_string(&WidgetKind::DateTimePicker).unwrap();
        assert_eq!(json, "\"date-time-picker\"");
        assert_eq!(WidgetKind::DateTimePicker.as_str(), "date-time-picker");
    }
}
