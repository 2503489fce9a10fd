//! Quick search: free-text search keys contributed by custom columns.

use crate::types::CustomColumn;

/// Every custom column name, in registry order.
pub fn quick_search_keys(defs: &[CustomColumn]) -> Vec<String> {
    defs.iter().map(|def| def.name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_names_in_order() {
        let defs = vec![
            CustomColumn::new("part_records", "serial", "Serial", "text"),
            CustomColumn::new("part_records", "warranty_months", "Warranty", "integer"),
        ];
        assert_eq!(quick_search_keys(&defs), ["serial", "warranty_months"]);
        assert!(quick_search_keys(&[]).is_empty());
    }
}
