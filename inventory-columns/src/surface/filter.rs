//! Search filter surface. Custom columns filter by exact match only.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::{display_value, lookup};
use crate::mapping::{filter_for, FilterKind};
use crate::types::{Choice, CustomColumn};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterControl {
    pub name: String,
    pub label: String,
    pub kind: FilterKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
}

impl FilterControl {
    /// Predicate for a request parameter, if it selects anything.
    fn predicate(&self, raw: &str) -> Option<EqualityPredicate> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }
        if self.kind == FilterKind::EqualSelect && !self.choices.iter().any(|c| c.value == value) {
            debug!(name = %self.name, value, "ignoring filter value outside choices");
            return None;
        }
        Some(EqualityPredicate {
            column: self.name.clone(),
            value: value.to_string(),
        })
    }
}

/// `column == value`, compared on the stored string form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EqualityPredicate {
    pub column: String,
    pub value: String,
}

impl EqualityPredicate {
    pub fn matches(&self, record: &Value) -> bool {
        match lookup(record, &self.column) {
            None | Some(Value::Null) => false,
            found => display_value(found) == self.value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    table_name: String,
    controls: Vec<FilterControl>,
}

impl Filter {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            controls: Vec::new(),
        }
    }

    /// Declare a plain equality filter.
    pub fn equal(&mut self, name: impl Into<String>, label: impl Into<String>) -> &mut Self {
        self.controls.push(FilterControl {
            name: name.into(),
            label: label.into(),
            kind: FilterKind::Equal,
            choices: Vec::new(),
        });
        self
    }

    /// Declare an equality filter restricted to a choice list.
    pub fn equal_select(
        &mut self,
        name: impl Into<String>,
        label: impl Into<String>,
        choices: Vec<Choice>,
    ) -> &mut Self {
        self.controls.push(FilterControl {
            name: name.into(),
            label: label.into(),
            kind: FilterKind::EqualSelect,
            choices,
        });
        self
    }

    pub fn extend(&mut self, controls: impl IntoIterator<Item = FilterControl>) {
        self.controls.extend(controls);
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn controls(&self) -> &[FilterControl] {
        &self.controls
    }

    /// Predicates selected by request parameters, in control order.
    pub fn predicates(&self, params: &HashMap<String, String>) -> Vec<EqualityPredicate> {
        self.controls
            .iter()
            .filter_map(|c| params.get(&c.name).and_then(|raw| c.predicate(raw)))
            .collect()
    }

    /// Records matching every selected predicate.
    pub fn apply<'a>(
        &self,
        params: &HashMap<String, String>,
        records: &'a [Value],
    ) -> Vec<&'a Value> {
        let predicates = self.predicates(params);
        records
            .iter()
            .filter(|r| predicates.iter().all(|p| p.matches(r)))
            .collect()
    }
}

/// Filter controls for custom column definitions, in registry order.
///
/// Names already declared on the filter are reported but still emitted.
pub fn filter_controls(defs: &[CustomColumn], declared: &Filter) -> Vec<FilterControl> {
    defs.iter()
        .map(|def| {
            if declared.controls.iter().any(|c| c.name == def.name) {
                warn!(table = %def.table_name, name = %def.name, "custom column shadows a filter control");
            }
            let kind = filter_for(&def.type_);
            let choices = match kind {
                FilterKind::EqualSelect => {
                    if def.is_degenerate() {
                        warn!(table = %def.table_name, name = %def.name, "select column has no options");
                    }
                    def.choices()
                }
                FilterKind::Equal => Vec::new(),
            };
            FilterControl {
                name: def.name.clone(),
                label: def.nick_name.clone(),
                kind,
                choices,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColumnType;
    use serde_json::json;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn license_defs() -> Vec<CustomColumn> {
        vec![
            CustomColumn::new("software_records", "license_tier", "License tier", ColumnType::Select)
                .with_options(["Gold", "Silver"]),
            CustomColumn::new("software_records", "seats", "Seats", "integer"),
        ]
    }

    #[test]
    fn select_becomes_choice_filter() {
        let controls = filter_controls(&license_defs(), &Filter::new("software_records"));

        assert_eq!(controls[0].name, "license_tier");
        assert_eq!(controls[0].label, "License tier");
        assert_eq!(controls[0].kind, FilterKind::EqualSelect);
        let values: Vec<_> = controls[0].choices.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, ["Gold", "Silver"]);

        assert_eq!(controls[1].kind, FilterKind::Equal);
        assert!(controls[1].choices.is_empty());
    }

    #[test]
    fn shadowing_name_still_emitted() {
        let mut filter = Filter::new("software_records");
        filter.equal("license_tier", "Tier");
        let controls = filter_controls(&license_defs(), &filter);
        assert_eq!(controls.len(), 2);
        assert_eq!(controls[0].label, "License tier");
        assert_eq!(controls[0].kind, FilterKind::EqualSelect);
    }

    #[test]
    fn predicates_skip_blank_and_foreign_values() {
        let mut filter = Filter::new("software_records");
        let controls = filter_controls(&license_defs(), &filter);
        filter.extend(controls);

        assert!(filter.predicates(&params(&[("seats", " ")])).is_empty());
        assert!(filter
            .predicates(&params(&[("license_tier", "Platinum")]))
            .is_empty());
        assert!(filter.predicates(&params(&[("unrelated", "x")])).is_empty());

        let predicates = filter.predicates(&params(&[("license_tier", "Gold"), ("seats", "10")]));
        assert_eq!(
            predicates,
            vec![
                EqualityPredicate {
                    column: "license_tier".into(),
                    value: "Gold".into()
                },
                EqualityPredicate {
                    column: "seats".into(),
                    value: "10".into()
                },
            ]
        );
    }

    #[test]
    fn exact_match_only() {
        let predicate = EqualityPredicate {
            column: "seats".into(),
            value: "10".into(),
        };
        assert!(predicate.matches(&json!({"seats": 10})));
        assert!(predicate.matches(&json!({"seats": "10"})));
        assert!(!predicate.matches(&json!({"seats": 100})));
        assert!(!predicate.matches(&json!({"seats": "1"})));
        assert!(!predicate.matches(&json!({"seats": null})));
        assert!(!predicate.matches(&json!({})));
    }

    #[test]
    fn apply_filters_records() {
        let mut filter = Filter::new("software_records");
        filter.equal("vendor.name", "Vendor");
        let controls = filter_controls(&license_defs(), &filter);
        filter.extend(controls);

        let records = vec![
            json!({"id": 1, "vendor": {"name": "Acme"}, "license_tier": "Gold"}),
            json!({"id": 2, "vendor": {"name": "Acme"}, "license_tier": "Silver"}),
            json!({"id": 3, "vendor": {"name": "Globex"}, "license_tier": "Gold"}),
        ];

        let hits = filter.apply(
            &params(&[("vendor.name", "Acme"), ("license_tier", "Gold")]),
            &records,
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["id"], 1);

        assert_eq!(filter.apply(&HashMap::new(), &records).len(), 3);
    }
}
