//! Rendering command results as a table, JSON, or YAML.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Create a table with given headers and rows.
pub fn create_table<I, R>(headers: &[&str], rows: I) -> Table
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = String>,
{
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(headers.to_vec());
    for row in rows {
        table.add_row(row.into_iter().collect::<Vec<_>>());
    }
    table
}

/// Format `value` for `format`. The table is only built for table output.
pub fn render<T, F>(value: &T, format: OutputFormat, table: F) -> Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> Table,
{
    Ok(match format {
        OutputFormat::Table => table().to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml_ng::to_string(value)?.trim_end().to_string(),
    })
}

/// Print `value` in `format` to stdout.
pub fn emit<T, F>(value: &T, format: OutputFormat, table: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> Table,
{
    println!("{}", render(value, format, table)?);
    Ok(())
}

pub fn yes_no(flag: bool) -> String {
    let text = if flag { "yes" } else { "no" };
    text.to_string()
}
