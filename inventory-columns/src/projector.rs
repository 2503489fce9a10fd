//! Projector: one registry read per surface build.
//!
//! Each `apply_to_*` call reads the table's definitions once and returns the
//! additions for that surface. The surface itself is never mutated here, so
//! calling twice with the same registry state yields the same additions.

use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::registry::ColumnRegistry;
use crate::sort::ColumnSorts;
use crate::surface::detail::{detail_fields, Detail, DetailField};
use crate::surface::filter::{filter_controls, Filter, FilterControl};
use crate::surface::form::{form_fields, Form, FormField};
use crate::surface::grid::{grid_columns, Grid, GridColumn};
use crate::surface::search::quick_search_keys;
use crate::types::CustomColumn;

#[derive(Clone)]
pub struct Projector {
    registry: Arc<dyn ColumnRegistry>,
}

impl Projector {
    pub fn new(registry: Arc<dyn ColumnRegistry>) -> Self {
        Self { registry }
    }

    async fn load(&self, table_name: &str, surface: &'static str) -> Result<Vec<CustomColumn>> {
        let defs = self.registry.custom_columns(table_name).await?;
        debug!(table = table_name, surface, count = defs.len(), "projecting custom columns");
        Ok(defs)
    }

    pub async fn apply_to_grid(
        &self,
        table_name: &str,
        grid: &Grid,
        sorts: &ColumnSorts,
    ) -> Result<Vec<GridColumn>> {
        let defs = self.load(table_name, "grid").await?;
        Ok(grid_columns(&defs, grid, sorts))
    }

    pub async fn apply_to_detail(
        &self,
        table_name: &str,
        detail: &Detail,
        sorts: &ColumnSorts,
    ) -> Result<Vec<DetailField>> {
        let defs = self.load(table_name, "detail").await?;
        Ok(detail_fields(&defs, detail, sorts))
    }

    // Form has no sort override; fields follow registry order.
    pub async fn apply_to_form(&self, table_name: &str, form: &Form) -> Result<Vec<FormField>> {
        let defs = self.load(table_name, "form").await?;
        Ok(form_fields(&defs, form))
    }

    pub async fn apply_to_filter(
        &self,
        table_name: &str,
        filter: &Filter,
    ) -> Result<Vec<FilterControl>> {
        let defs = self.load(table_name, "filter").await?;
        Ok(filter_controls(&defs, filter))
    }

    /// Quick search keys: `fixed` first, then custom column names.
    pub async fn quick_search(&self, table_name: &str, fixed: &[&str]) -> Result<Vec<String>> {
        let defs = self.load(table_name, "search").await?;
        Ok(fixed
            .iter()
            .map(|k| k.to_string())
            .chain(quick_search_keys(&defs))
            .collect())
    }
}

impl std::fmt::Debug for Projector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Projector").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColumnsError;
    use crate::mapping::{FilterKind, WidgetKind};
    use crate::registry::InMemoryRegistry;
    use crate::types::ColumnType;
    use async_trait::async_trait;

    struct BrokenRegistry;

    #[async_trait]
    impl ColumnRegistry for BrokenRegistry {
        async fn custom_columns(&self, table_name: &str) -> Result<Vec<CustomColumn>> {
            Err(ColumnsError::lookup(table_name, "connection refused"))
        }
    }

    fn projector() -> Projector {
        Projector::new(Arc::new(InMemoryRegistry::new(vec![
            CustomColumn::new("part_records", "warranty_months", "Warranty (months)", "integer")
                .required(),
            CustomColumn::new("part_records", "tier", "Tier", ColumnType::Select)
                .with_options(["Gold", "Silver"]),
        ])))
    }

    #[tokio::test]
    async fn grid_additions_are_idempotent() {
        let projector = projector();
        let sorts = ColumnSorts::new();
        let grid = Grid::new("part_records", sorts.clone());

        let first = projector.apply_to_grid("part_records", &grid, &sorts).await.unwrap();
        let second = projector.apply_to_grid("part_records", &grid, &sorts).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert!(grid.columns().is_empty());
    }

    #[tokio::test]
    async fn detail_form_and_filter_additions_are_idempotent() {
        let projector = projector();
        let sorts = ColumnSorts::new();
        let detail = Detail::new("part_records", sorts.clone());
        let form = Form::new("part_records");
        let filter = Filter::new("part_records");

        let first = projector.apply_to_detail("part_records", &detail, &sorts).await.unwrap();
        let second = projector.apply_to_detail("part_records", &detail, &sorts).await.unwrap();
        assert_eq!(first, second);

        let first = projector.apply_to_form("part_records", &form).await.unwrap();
        let second = projector.apply_to_form("part_records", &form).await.unwrap();
        assert_eq!(first, second);
        assert!(form.fields().is_empty());

        let first = projector.apply_to_filter("part_records", &filter).await.unwrap();
        let second = projector.apply_to_filter("part_records", &filter).await.unwrap();
        assert_eq!(first, second);
        assert!(filter.controls().is_empty());
    }

    #[tokio::test]
    async fn every_surface_sees_the_same_columns() {
        let projector = projector();
        let sorts = ColumnSorts::new();

        let grid = projector
            .apply_to_grid("part_records", &Grid::new("part_records", sorts.clone()), &sorts)
            .await
            .unwrap();
        let detail = projector
            .apply_to_detail("part_records", &Detail::new("part_records", sorts.clone()), &sorts)
            .await
            .unwrap();
        let form = projector
            .apply_to_form("part_records", &Form::new("part_records"))
            .await
            .unwrap();
        let filter = projector
            .apply_to_filter("part_records", &Filter::new("part_records"))
            .await
            .unwrap();

        let expected = [
            ("warranty_months", "Warranty (months)"),
            ("tier", "Tier"),
        ];
        let grid: Vec<_> = grid.iter().map(|c| (c.name.as_str(), c.label.as_str())).collect();
        let detail: Vec<_> = detail.iter().map(|c| (c.name.as_str(), c.label.as_str())).collect();
        let filter_pairs: Vec<_> = filter.iter().map(|c| (c.name.as_str(), c.label.as_str())).collect();
        let form_pairs: Vec<_> = form.iter().map(|c| (c.name.as_str(), c.label.as_str())).collect();
        assert_eq!(grid, expected);
        assert_eq!(detail, expected);
        assert_eq!(form_pairs, expected);
        assert_eq!(filter_pairs, expected);

        assert_eq!(form[0].widget, WidgetKind::Number);
        assert!(form[0].required);
        assert_eq!(filter[1].kind, FilterKind::EqualSelect);
    }

    #[tokio::test]
    async fn empty_table_adds_nothing() {
        let projector = projector();
        let sorts = ColumnSorts::new();
        let grid = Grid::new("software_records", sorts.clone());

        assert!(projector
            .apply_to_grid("software_records", &grid, &sorts)
            .await
            .unwrap()
            .is_empty());
        assert!(projector
            .apply_to_form("software_records", &Form::new("software_records"))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn quick_search_appends_custom_names() {
        let keys = projector()
            .quick_search("part_records", &["id", "name"])
            .await
            .unwrap();
        assert_eq!(keys, ["id", "name", "warranty_months", "tier"]);
    }

    #[tokio::test]
    async fn registry_failure_propagates() {
        let projector = Projector::new(Arc::new(BrokenRegistry));
        let sorts = ColumnSorts::new();
        let err = projector
            .apply_to_grid("part_records", &Grid::new("part_records", sorts.clone()), &sorts)
            .await
            .unwrap_err();
        assert!(matches!(err, ColumnsError::MetadataLookup { ref table, .. } if table == "part_records"));

        let err = projector
            .apply_to_form("part_records", &Form::new("part_records"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }
}
