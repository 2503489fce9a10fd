use inventory_columns::{ColumnSorts, Detail, Filter, Form, FormField, Grid, WidgetKind};

use super::AdminScreen;

/// Spare parts: components tracked separately from the devices they sit in.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartRecordScreen;

impl AdminScreen for PartRecordScreen {
    fn table_name(&self) -> &'static str {
        "part_records"
    }

    fn grid(&self, sorts: ColumnSorts) -> Grid {
        let mut grid = Grid::new(self.table_name(), sorts);
        grid.column("id", "ID")
            .column("price", "Price")
            .column("purchased", "Purchased")
            .column("asset_number", "Asset number")
            .column("name", "Name")
            .column("description", "Description")
            .column("category.name", "Category")
            .column("vendor.name", "Vendor")
            .column("specification", "Specification")
            .column("device.name", "Device")
            .column("depreciation.name", "Depreciation rule")
            .column("created_at", "Created at")
            .column("updated_at", "Updated at");
        grid
    }

    fn detail(&self, sorts: ColumnSorts) -> Detail {
        let mut detail = Detail::new(self.table_name(), sorts);
        detail
            .field("id", "ID")
            .field("name", "Name")
            .field("asset_number", "Asset number")
            .field("description", "Description")
            .field("category.name", "Category")
            .field("vendor.name", "Vendor")
            .field("channel.name", "Purchased channel")
            .field("device.name", "Device")
            .field("specification", "Specification")
            .field("price", "Price")
            .field("purchased", "Purchased")
            .field("expired", "Expired")
            .field("depreciation.name", "Depreciation rule")
            .field("depreciation.termination", "Depreciation termination")
            .field("created_at", "Created at")
            .field("updated_at", "Updated at");
        detail
    }

    fn form(&self) -> Form {
        let mut form = Form::new(self.table_name());
        form.field(FormField::new("name", "Name", WidgetKind::Text).required())
            .field(FormField::new("category_id", "Category", WidgetKind::Number).required())
            .field(FormField::new("specification", "Specification", WidgetKind::Text).required())
            .field(FormField::new("vendor_id", "Vendor", WidgetKind::Number).required())
            .field(FormField::new("asset_number", "Asset number", WidgetKind::Text))
            .field(FormField::new("description", "Description", WidgetKind::Text))
            .field(FormField::new(
                "purchased_channel_id",
                "Purchased channel",
                WidgetKind::Number,
            ))
            .field(FormField::new("price", "Price", WidgetKind::Currency))
            .field(FormField::new("purchased", "Purchased", WidgetKind::DatePicker))
            .field(FormField::new("expired", "Expired", WidgetKind::DatePicker))
            .field(FormField::new(
                "depreciation_rule_id",
                "Depreciation rule",
                WidgetKind::Number,
            ));
        form
    }

    fn filter(&self) -> Filter {
        let mut filter = Filter::new(self.table_name());
        filter
            .equal("category_id", "Category")
            .equal("vendor_id", "Vendor")
            .equal("device.name", "Device")
            .equal("depreciation_id", "Depreciation rule");
        filter
    }

    fn quick_search(&self) -> &'static [&'static str] {
        &[
            "id",
            "name",
            "asset_number",
            "description",
            "category.name",
            "vendor.name",
            "specification",
            "device.name",
        ]
    }
}
