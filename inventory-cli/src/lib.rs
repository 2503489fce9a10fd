//! Command-line host for the inventory admin screens.
//!
//! The `inventory` binary authors custom columns in a [`ColumnStore`](inventory_columns::ColumnStore)
//! and renders the part-record and software-record screens with those columns
//! projected onto each surface.

pub mod cli;
pub mod commands;
pub mod context;
pub mod exit_codes;
pub mod logging;
pub mod output;
pub mod screens;
