//! Core systems for the selectable grid.
//!
//! This crate provides the infrastructure shared by the selection model and
//! whatever presentation layer draws it:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Logging**: `tracing` targets and a timing guard
//!
//! # Signal/Slot Example
//!
//! ```
//! use selectable_grid_core::Signal;
//!
//! let rows_reloaded = Signal::<Vec<usize>>::new();
//!
//! let conn_id = rows_reloaded.connect(|rows| {
//!     println!("redraw tray rows {:?}", rows);
//! });
//!
//! rows_reloaded.emit(vec![0, 1]);
//! rows_reloaded.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
