//! Selectable Grid - an ordered, bounded selection over a fixed catalog.
//!
//! A two-section grid: a tray of selected items above a catalog of every
//! item. Tapping a catalog cell selects or deselects its item, up to a fixed
//! bound; the tray can be reordered by drag and drop; the selection can be
//! cleared. This crate is the state behind such a screen, with no rendering.
//!
//! This is the umbrella crate; it re-exports the core crate as well.
//!
//! # Example
//!
//! ```
//! use selectable_grid::config::GridConfig;
//! use selectable_grid::model::{GridIndex, SelectionModel};
//!
//! fn main() -> Result<(), selectable_grid::GridError> {
//!     let mut model = SelectionModel::from_config(&GridConfig::default())?;
//!
//!     model.toggle(0);
//!     model.toggle(2);
//!     assert_eq!(model.title(&GridIndex::tray(1)), "C");
//!     assert_eq!(model.cell(&GridIndex::catalog(2)).badge_text().as_deref(), Some("2"));
//!     Ok(())
//! }
//! ```

pub use selectable_grid_core::*;

pub mod config;
mod error;
pub mod model;
pub mod prelude;
pub mod presenter;

pub use error::{GridError, Result};
