//! Admin screens.
//!
//! A screen declares the fixed fields of each surface for its table. The
//! `build_*` helpers assemble a complete surface: fixed fields first, then the
//! custom column additions returned by the [`Projector`].

mod part_record;
mod software_record;

pub use part_record::PartRecordScreen;
pub use software_record::SoftwareRecordScreen;

use inventory_columns::{ColumnSorts, Detail, Filter, Form, Grid, Projector, Result};

pub trait AdminScreen: Send + Sync {
    fn table_name(&self) -> &'static str;

    fn grid(&self, sorts: ColumnSorts) -> Grid;

    fn detail(&self, sorts: ColumnSorts) -> Detail;

    fn form(&self) -> Form;

    fn filter(&self) -> Filter;

    /// Fixed quick search keys, custom column names are appended after these.
    fn quick_search(&self) -> &'static [&'static str];
}

pub async fn build_grid(
    screen: &dyn AdminScreen,
    projector: &Projector,
    sorts: &ColumnSorts,
) -> Result<Grid> {
    let mut grid = screen.grid(sorts.clone());
    let custom = projector
        .apply_to_grid(screen.table_name(), &grid, sorts)
        .await?;
    grid.extend(custom);
    Ok(grid)
}

pub async fn build_detail(
    screen: &dyn AdminScreen,
    projector: &Projector,
    sorts: &ColumnSorts,
) -> Result<Detail> {
    let mut detail = screen.detail(sorts.clone());
    let custom = projector
        .apply_to_detail(screen.table_name(), &detail, sorts)
        .await?;
    detail.extend(custom);
    Ok(detail)
}

pub async fn build_form(screen: &dyn AdminScreen, projector: &Projector) -> Result<Form> {
    let mut form = screen.form();
    let custom = projector.apply_to_form(screen.table_name(), &form).await?;
    form.extend(custom);
    Ok(form)
}

pub async fn build_filter(screen: &dyn AdminScreen, projector: &Projector) -> Result<Filter> {
    let mut filter = screen.filter();
    let custom = projector
        .apply_to_filter(screen.table_name(), &filter)
        .await?;
    filter.extend(custom);
    Ok(filter)
}

pub async fn build_quick_search(
    screen: &dyn AdminScreen,
    projector: &Projector,
) -> Result<Vec<String>> {
    projector
        .quick_search(screen.table_name(), screen.quick_search())
        .await
}
