use inventory_columns::{
    Choice, ColumnSorts, Detail, Filter, Form, FormField, Grid, WidgetKind,
};

use super::AdminScreen;

/// Software licenses and their seat counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftwareRecordScreen;

fn distribution_choices() -> Vec<Choice> {
    [
        ("u", "Unknown"),
        ("o", "Open source"),
        ("f", "Freeware"),
        ("b", "Commercial"),
    ]
    .into_iter()
    .map(|(value, label)| Choice {
        value: value.to_string(),
        label: label.to_string(),
    })
    .collect()
}

impl AdminScreen for SoftwareRecordScreen {
    fn table_name(&self) -> &'static str {
        "software_records"
    }

    fn grid(&self, sorts: ColumnSorts) -> Grid {
        let mut grid = Grid::new(self.table_name(), sorts);
        grid.column("id", "ID")
            .column("asset_number", "Asset number")
            .column("name", "Name")
            .column("description", "Description")
            .column("category.name", "Category")
            .column("version", "Version")
            .column("vendor.name", "Vendor")
            .column("price", "Price")
            .column("purchased", "Purchased")
            .column("expired", "Expired")
            .column("distribution", "Distribution")
            .column("counts", "Seats")
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
            .field("version", "Version")
            .field("vendor.name", "Vendor")
            .field("channel.name", "Purchased channel")
            .field("price", "Price")
            .field("purchased", "Purchased")
            .field("expired", "Expired")
            .field("distribution", "Distribution")
            .field("counts", "Seats")
            .field("created_at", "Created at")
            .field("updated_at", "Updated at");
        detail
    }

    fn form(&self) -> Form {
        let mut form = Form::new(self.table_name());
        form.field(FormField::new("asset_number", "Asset number", WidgetKind::Text).required())
            .field(FormField::new("name", "Name", WidgetKind::Text).required())
            .field(FormField::new("version", "Version", WidgetKind::Text).required())
            .field(
                FormField::new("distribution", "Distribution", WidgetKind::Select)
                    .with_choices(distribution_choices())
                    .required(),
            )
            // -1 means unlimited seats
            .field(FormField::new("counts", "Seats", WidgetKind::Number).required())
            .field(FormField::new("category_id", "Category", WidgetKind::Number).required())
            .field(FormField::new("vendor_id", "Vendor", WidgetKind::Number).required())
            .field(FormField::new(
                "purchased_channel_id",
                "Purchased channel",
                WidgetKind::Number,
            ))
            .field(FormField::new("description", "Description", WidgetKind::Text))
            .field(FormField::new("price", "Price", WidgetKind::Currency))
            .field(FormField::new("purchased", "Purchased", WidgetKind::DatePicker))
            .field(FormField::new("expired", "Expired", WidgetKind::DatePicker));
        form
    }

    fn filter(&self) -> Filter {
        let mut filter = Filter::new(self.table_name());
        filter
            .equal("category_id", "Category")
            .equal("vendor_id", "Vendor");
        filter
    }

    fn quick_search(&self) -> &'static [&'static str] {
        &[
            "id",
            "name",
            "asset_number",
            "category.name",
            "version",
            "price",
        ]
    }
}
