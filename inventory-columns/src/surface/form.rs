//! Edit form surface: input widgets and submission validation.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{ColumnsError, Result};
use crate::mapping::{widget_for, WidgetKind};
use crate::types::{Choice, CustomColumn};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub widget: WidgetKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
    pub required: bool,
}

impl FormField {
    pub fn new(name: impl Into<String>, label: impl Into<String>, widget: WidgetKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            widget,
            choices: Vec::new(),
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = choices;
        self
    }

    /// Check one submitted value against this field.
    pub fn check(&self, value: Option<&Value>) -> Option<FieldViolation> {
        let Some(value) = value.filter(|v| !is_blank(v)) else {
            return self.required.then(|| FieldViolation::Required {
                field: self.name.clone(),
            });
        };

        let text = match value {
            Value::String(s) => s.trim().to_string(),
            Value::Number(_) | Value::Bool(_) => value.to_string(),
            _ => return Some(self.invalid(value, "a scalar value")),
        };

        let ok = match self.widget {
            WidgetKind::Number => text.parse::<i64>().is_ok(),
            WidgetKind::Currency => text.parse::<f64>().map(f64::is_finite).unwrap_or(false),
            WidgetKind::DatePicker => NaiveDate::parse_from_str(&text, DATE_FORMAT).is_ok(),
            WidgetKind::DateTimePicker => {
                NaiveDateTime::parse_from_str(&text, DATE_TIME_FORMAT).is_ok()
            }
            WidgetKind::Select => self.choices.iter().any(|c| c.value == text),
            WidgetKind::Text | WidgetKind::Textarea => true,
        };

        (!ok).then(|| self.invalid(value, self.expectation()))
    }

    fn expectation(&self) -> &'static str {
        match self.widget {
            WidgetKind::Number => "an integer",
            WidgetKind::Currency => "a decimal number",
            WidgetKind::DatePicker => "a date (YYYY-MM-DD)",
            WidgetKind::DateTimePicker => "a date and time (YYYY-MM-DD HH:MM:SS)",
            WidgetKind::Select => "one of the listed options",
            WidgetKind::Text | WidgetKind::Textarea => "text",
        }
    }

    fn invalid(&self, value: &Value, expected: &str) -> FieldViolation {
        FieldViolation::Invalid {
            field: self.name.clone(),
            expected: expected.to_string(),
            value: value.clone(),
        }
    }
}

/// Why a submitted value was rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FieldViolation {
    Required {
        field: String,
    },
    Invalid {
        field: String,
        expected: String,
        value: Value,
    },
}

impl FieldViolation {
    pub fn field(&self) -> &str {
        match self {
            Self::Required { field } | Self::Invalid { field, .. } => field,
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{field} is required"),
            Self::Invalid {
                field,
                expected,
                value,
            } => write!(f, "{field} must be {expected}, got {value}"),
        }
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Form {
    table_name: String,
    fields: Vec<FormField>,
}

impl Form {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(&mut self, field: FormField) -> &mut Self {
        self.fields.push(field);
        self
    }

    pub fn extend(&mut self, fields: impl IntoIterator<Item = FormField>) {
        self.fields.extend(fields);
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validate a submission before it is persisted. Collects every violation.
    pub fn validate(&self, submission: &Map<String, Value>) -> Result<()> {
        let violations: Vec<_> = self
            .fields
            .iter()
            .filter_map(|f| f.check(submission.get(&f.name)))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            debug!(table = %self.table_name, count = violations.len(), "form submission rejected");
            Err(ColumnsError::Validation { violations })
        }
    }
}

/// Form fields for custom column definitions, in registry order.
///
/// Names already declared on the form are reported but still emitted.
pub fn form_fields(defs: &[CustomColumn], declared: &Form) -> Vec<FormField> {
    defs.iter()
        .map(|def| {
            if declared.get(&def.name).is_some() {
                warn!(table = %def.table_name, name = %def.name, "custom column shadows a form field");
            }
            let widget = widget_for(&def.type_);
            let mut field = FormField::new(&def.name, &def.nick_name, widget);
            if widget == WidgetKind::Select {
                if def.is_degenerate() {
                    warn!(table = %def.table_name, name = %def.name, "select column has no options");
                }
                field = field.with_choices(def.choices());
            }
            if !def.is_nullable {
                field = field.required();
            }
            field
        })
        .collect()
}
