//! Admin surfaces and their custom column projections.
//!
//! Each submodule pairs a host-side surface builder with the pure function
//! that turns custom column definitions into additions for that surface.

pub mod detail;
pub mod filter;
pub mod form;
pub mod grid;
pub mod search;

use serde_json::Value;

/// Look up a possibly dotted path (`vendor.name`) in a JSON record.
pub(crate) fn lookup<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(record, |value, segment| value.get(segment))
}

/// Stored string form of a scalar value. Null and missing render as empty.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookup_follows_dotted_paths() {
        let record = json!({"vendor": {"name": "Acme"}, "price": 12.5});
        assert_eq!(lookup(&record, "vendor.name"), Some(&json!("Acme")));
        assert_eq!(lookup(&record, "price"), Some(&json!(12.5)));
        assert_eq!(lookup(&record, "vendor.missing"), None);
        assert_eq!(lookup(&record, "price.nested"), None);
    }

    #[test]
    fn display_value_uses_stored_form() {
        assert_eq!(display_value(Some(&json!("Gold"))), "Gold");
        assert_eq!(display_value(Some(&json!(36))), "36");
        assert_eq!(display_value(Some(&json!(true))), "true");
        assert_eq!(display_value(Some(&Value::Null)), "");
        assert_eq!(display_value(None), "");
    }
}
