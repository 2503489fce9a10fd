//! Custom column registry and surface projectors
//!
//! `inventory-columns` lets administrators attach extra attributes ("custom
//! columns") to inventory tables such as `part_records` or `software_records`,
//! and projects those definitions onto the four admin surfaces consistently.
//!
//! # Architecture
//!
//! - **Registry**: [`ColumnRegistry`] returns the ordered definitions for a table.
//!   [`ColumnStore`] keeps them as one YAML file per table; [`InMemoryRegistry`]
//!   holds a fixed list.
//! - **Mapping**: a total `type → widget / filter / display` table in [`mapping`].
//! - **Projectors**: pure functions per surface ([`grid_columns`], [`detail_fields`],
//!   [`form_fields`], [`filter_controls`], [`quick_search_keys`]) that return the
//!   additions for a surface. [`Projector`] wraps them with one registry read.
//! - **Surfaces**: host-side builders ([`Grid`], [`Detail`], [`Form`], [`Filter`])
//!   that own fixed fields and accept projected additions.
//!
//! ```rust,ignore
//! let projector = Projector::new(Arc::new(ColumnStore::open(dir).await?));
//! let mut grid = Grid::new("part_records", sorts.clone());
//! grid.column("id", "ID").column("name", "Name");
//! let custom = projector.apply_to_grid("part_records", &grid, &sorts).await?;
//! grid.extend(custom);
//! ```

pub mod config;
pub mod error;
pub mod mapping;
pub mod projector;
pub mod registry;
pub mod sort;
pub mod store;
pub mod surface;
pub mod types;

pub use config::ColumnsConfig;
pub use error::{ColumnsError, Result};
pub use mapping::{DisplayKind, FilterKind, WidgetKind};
pub use projector::Projector;
pub use registry::{ColumnRegistry, InMemoryRegistry};
pub use sort::{ColumnSort, ColumnSorts};
pub use store::ColumnStore;
pub use surface::detail::{detail_fields, Detail, DetailField};
pub use surface::filter::{filter_controls, EqualityPredicate, Filter, FilterControl};
pub use surface::form::{form_fields, FieldViolation, Form, FormField};
pub use surface::grid::{grid_columns, Grid, GridColumn};
pub use surface::search::quick_search_keys;
pub use types::{Choice, ColumnType, CustomColumn, SelectOption};
