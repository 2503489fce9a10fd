//! `inventory validate` - check a submission against a screen's edit form.

use anyhow::{bail, Context, Result};
use inventory_columns::{ColumnsError, FieldViolation};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::context::CliContext;
use crate::exit_codes::{EXIT_SUCCESS, EXIT_WARNING};
use crate::output::{create_table, emit};
use crate::screens::{build_form, AdminScreen};

#[derive(Debug, Serialize)]
struct ValidationReport<'a> {
    table: &'a str,
    valid: bool,
    violations: &'a [FieldViolation],
}

pub async fn execute(screen: &dyn AdminScreen, data: &str, context: &CliContext) -> Result<i32> {
    let submission = parse_submission(data)?;
    let form = build_form(screen, &context.projector)
        .await
        .with_context(|| format!("failed to build form for {}", screen.table_name()))?;

    let violations = match form.validate(&submission) {
        Ok(()) => Vec::new(),
        Err(ColumnsError::Validation { violations }) => violations,
        Err(e) => return Err(e.into()),
    };

    let report = ValidationReport {
        table: screen.table_name(),
        valid: violations.is_empty(),
        violations: &violations,
    };
    if report.valid && context.format == OutputFormat::Table {
        if !context.quiet {
            println!("Submission is valid for {}", report.table);
        }
    } else {
        emit(&report, context.format, || {
            create_table(
                &["Field", "Problem"],
                violations
                    .iter()
                    .map(|v| vec![v.field().to_string(), v.to_string()]),
            )
        })?;
    }

    Ok(if report.valid { EXIT_SUCCESS } else { EXIT_WARNING })
}

fn parse_submission(data: &str) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(data).context("submission is not valid JSON")?;
    match value {
        Value::Object(map) => Ok(map),
        other => bail!("submission must be a JSON object, got {other}"),
    }
}
