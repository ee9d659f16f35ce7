//! Model for the two-section selectable grid.
//!
//! The grid shows a **tray** of selected items above a **catalog** of every
//! item. Tapping a catalog cell selects or deselects its item, the tray can
//! be reordered by drag and drop, and the selection can be cleared. This
//! module holds all of that state, independent of how it is drawn.
//!
//! # Core Types
//!
//! - `SelectionModel`: Owns the universe and the ordered selection
//! - `GridIndex` / `Section`: Address a cell
//! - `Catalog`: The fixed universe
//! - `OrderedSelection`: Bounded ordered storage with a position index
//! - `CellContent`: Title and badge for one cell
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  SelectionModel  │────>│   Signals   │────>│    View     │
//! │ Catalog+Ordered  │     │             │     │             │
//! └──────────────────┘     └─────────────┘     └─────────────┘
//!          ^                                          │
//!          │            ┌─────────────┐               │
//!          └────────────│  GridIndex  │<──────────────┘
//!                       │ CellContent │
//!                       └─────────────┘
//! ```
//!
//! Views query the model with a `GridIndex` to get `CellContent`, call back
//! into it on gestures, and redraw when `selection_changed` fires.

mod catalog;
mod cell;
mod index;
mod ordered;
pub mod selection;

pub use catalog::Catalog;
pub use cell::CellContent;
pub use index::{GridIndex, Section};
pub use ordered::{FillState, OrderedSelection};
pub use selection::{SelectionChange, SelectionModel, Toggled};
