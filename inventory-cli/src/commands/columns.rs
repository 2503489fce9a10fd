//! `inventory columns` - authoring custom column definitions.

use anyhow::{Context, Result};
use comfy_table::Table;
use inventory_columns::CustomColumn;
use serde::Serialize;
use tracing::info;
use ulid::Ulid;

use crate::cli::{ColumnsCommand, OutputFormat};
use crate::context::CliContext;
use crate::output::{create_table, emit, yes_no};

pub async fn execute(command: ColumnsCommand, context: &CliContext) -> Result<()> {
    match command {
        ColumnsCommand::List { table: Some(table) } => list(&table, context).await,
        ColumnsCommand::List { table: None } => list_tables(context).await,
        ColumnsCommand::Add {
            table,
            name,
            label,
            type_,
            required,
            options,
        } => {
            let mut def = CustomColumn::new(table, name, label, type_).with_options(options);
            if required {
                def = def.required();
            }
            add(def, context).await
        }
        ColumnsCommand::Remove { table, id } => remove(&table, &id, context).await,
    }
}

async fn list(table: &str, context: &CliContext) -> Result<()> {
    let defs = context
        .store
        .read_table(table)
        .await
        .with_context(|| format!("failed to read custom columns for '{table}'"))?;

    if defs.is_empty() && context.format == OutputFormat::Table {
        if !context.quiet {
            println!("No custom columns on {table}");
        }
        return Ok(());
    }

    emit(&defs, context.format, || {
        create_table(
            &["ID", "Name", "Label", "Type", "Required", "Options"],
            defs.iter().map(|d| {
                vec![
                    d.id.to_string(),
                    d.name.clone(),
                    d.nick_name.clone(),
                    d.type_.to_string(),
                    yes_no(!d.is_nullable),
                    d.select_options
                        .iter()
                        .map(|o| o.item.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                ]
            }),
        )
    })
}

#[derive(Debug, Serialize)]
struct TableSummary {
    table: String,
    columns: usize,
}

async fn list_tables(context: &CliContext) -> Result<()> {
    let mut summaries = Vec::new();
    for table in context.store.tables().await.context("failed to scan column store")? {
        let columns = context.store.read_table(&table).await?.len();
        summaries.push(TableSummary { table, columns });
    }

    if summaries.is_empty() && context.format == OutputFormat::Table {
        if !context.quiet {
            println!("No custom columns in {}", context.store.root().display());
        }
        return Ok(());
    }

    emit(&summaries, context.format, || {
        create_table(
            &["Table", "Columns"],
            summaries
                .iter()
                .map(|s| vec![s.table.clone(), s.columns.to_string()]),
        )
    })
}

async fn add(def: CustomColumn, context: &CliContext) -> Result<()> {
    context
        .store
        .write_column(&def)
        .await
        .with_context(|| format!("failed to add custom column '{}'", def.name))?;
    info!(table = %def.table_name, name = %def.name, id = %def.id, "custom column added");

    match context.format {
        OutputFormat::Table if context.quiet => {}
        OutputFormat::Table => {
            println!("Added {} to {} ({})", def.name, def.table_name, def.id)
        }
        format => emit(&def, format, Table::new)?,
    }
    Ok(())
}

async fn remove(table: &str, id: &str, context: &CliContext) -> Result<()> {
    let id: Ulid = id
        .parse()
        .with_context(|| format!("invalid custom column id '{id}'"))?;
    let removed = context
        .store
        .delete_column(table, &id)
        .await
        .with_context(|| format!("failed to remove custom column {id}"))?;
    info!(table, name = %removed.name, %id, "custom column removed");

    match context.format {
        OutputFormat::Table if context.quiet => {}
        OutputFormat::Table => println!("Removed {} from {}", removed.name, table),
        format => emit(&removed, format, Table::new)?,
    }
    Ok(())
}
