//! `inventory render` - show an assembled admin surface.

use anyhow::{Context, Result};
use inventory_columns::Choice;

use crate::cli::SurfaceArg;
use crate::context::CliContext;
use crate::output::{create_table, emit, yes_no};
use crate::screens::{
    build_detail, build_filter, build_form, build_grid, build_quick_search, AdminScreen,
};

pub async fn execute(
    surface: SurfaceArg,
    screen: &dyn AdminScreen,
    context: &CliContext,
) -> Result<()> {
    let table = screen.table_name();
    tracing::debug!(table, ?surface, "rendering surface");
    let sorts = context.config.sorts_for(table);
    let projector = &context.projector;
    let failed = || format!("failed to build {surface:?} surface for {table}");

    match surface {
        SurfaceArg::Grid => {
            let grid = build_grid(screen, projector, &sorts)
                .await
                .with_context(failed)?;
            let columns = grid.ordered_columns();
            emit(&columns, context.format, || {
                create_table(
                    &["Name", "Label", "Display", "Sort"],
                    columns.iter().map(|c| {
                        vec![
                            c.name.clone(),
                            c.label.clone(),
                            c.display.as_str().to_string(),
                            position(c.sort_position),
                        ]
                    }),
                )
            })
        }
        SurfaceArg::Detail => {
            let detail = build_detail(screen, projector, &sorts)
                .await
                .with_context(failed)?;
            let fields = detail.ordered_fields();
            emit(&fields, context.format, || {
                create_table(
                    &["Name", "Label", "Sort"],
                    fields.iter().map(|f| {
                        vec![f.name.clone(), f.label.clone(), position(f.sort_position)]
                    }),
                )
            })
        }
        SurfaceArg::Form => {
            let form = build_form(screen, projector)
                .await
                .with_context(failed)?;
            emit(form.fields(), context.format, || {
                create_table(
                    &["Name", "Label", "Widget", "Required", "Choices"],
                    form.fields().iter().map(|f| {
                        vec![
                            f.name.clone(),
                            f.label.clone(),
                            f.widget.as_str().to_string(),
                            yes_no(f.required),
                            choice_list(&f.choices),
                        ]
                    }),
                )
            })
        }
        SurfaceArg::Filter => {
            let filter = build_filter(screen, projector)
                .await
                .with_context(failed)?;
            emit(filter.controls(), context.format, || {
                create_table(
                    &["Name", "Label", "Kind", "Choices"],
                    filter.controls().iter().map(|c| {
                        vec![
                            c.name.clone(),
                            c.label.clone(),
                            c.kind.as_str().to_string(),
                            choice_list(&c.choices),
                        ]
                    }),
                )
            })
        }
        SurfaceArg::Search => {
            let keys = build_quick_search(screen, projector)
                .await
                .with_context(failed)?;
            emit(&keys, context.format, || {
                create_table(&["Search key"], keys.iter().map(|k| vec![k.clone()]))
            })
        }
    }
}

fn position(sort_position: Option<i64>) -> String {
    sort_position.map(|p| p.to_string()).unwrap_or_default()
}

fn choice_list(choices: &[Choice]) -> String {
    choices
        .iter()
        .map(|c| {
            if c.value == c.label {
                c.value.clone()
            } else {
                format!("{} ({})", c.label, c.value)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
