use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::screens::{AdminScreen, PartRecordScreen, SoftwareRecordScreen};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

/// Admin screens the CLI can render.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenArg {
    /// Spare part records (`part_records`)
    Part,
    /// Software license records (`software_records`)
    Software,
}

impl ScreenArg {
    pub fn screen(self) -> Box<dyn AdminScreen> {
        match self {
            Self::Part => Box::new(PartRecordScreen),
            Self::Software => Box::new(SoftwareRecordScreen),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceArg {
    Grid,
    Detail,
    Form,
    Filter,
    Search,
}

#[derive(Parser, Debug)]
#[command(name = "inventory")]
#[command(version)]
#[command(about = "Manage custom columns and preview the inventory admin screens")]
#[command(long_about = "
inventory manages administrator-defined custom columns for inventory tables
and shows how they appear on the list grid, detail page, edit form, filter
panel, and quick search of each admin screen.

Example usage:
  inventory columns add --table part_records --name warranty_months \\
      --label 'Warranty (months)' --type integer --required
  inventory render form --screen part
  inventory --format json render grid --screen software
  inventory validate --screen part --data '{\"name\": \"Fan\"}'
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress informational output; only results, violations, and errors print
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Global output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Custom column store directory (overrides configuration)
    #[arg(long, value_name = "DIR", global = true)]
    pub store: Option<PathBuf>,

    /// Explicit configuration file (toml, yaml, or json)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Author custom column definitions
    Columns {
        #[command(subcommand)]
        subcommand: ColumnsCommand,
    },
    /// Show a screen's surface with its custom columns applied
    Render {
        /// Surface to render
        #[arg(value_enum)]
        surface: SurfaceArg,

        /// Admin screen
        #[arg(long, value_enum)]
        screen: ScreenArg,
    },
    /// Check a form submission against a screen's edit form
    Validate {
        /// Admin screen
        #[arg(long, value_enum)]
        screen: ScreenArg,

        /// Submission as a JSON object
        #[arg(long)]
        data: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ColumnsCommand {
    /// List the custom columns of a table in registry order, or every table when omitted
    List {
        #[arg(long)]
        table: Option<String>,
    },
    /// Add a custom column to a table
    Add {
        #[arg(long)]
        table: String,

        /// Column identifier
        #[arg(long)]
        name: String,

        /// Display label
        #[arg(long)]
        label: String,

        /// Type tag: date, dateTime, integer, double, float, longText, select, text
        #[arg(long = "type", default_value = "text")]
        type_: String,

        /// Reject empty values on the edit form
        #[arg(long)]
        required: bool,

        /// Select option, repeat for each one
        #[arg(long = "option", value_name = "ITEM")]
        options: Vec<String>,
    },
    /// Remove a custom column by id
    Remove {
        #[arg(long)]
        table: String,

        #[arg(long)]
        id: String,
    },
}
