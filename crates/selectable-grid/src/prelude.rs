//! Prelude module for the selectable grid.
//!
//! ```ignore
//! use selectable_grid::prelude::*;
//! ```

// ============================================================================
// Signal/Slot System
// ============================================================================

pub use crate::signal::{ConnectionId, Signal};

// ============================================================================
// Model
// ============================================================================

pub use crate::model::{
    CellContent, FillState, GridIndex, Section, SelectionChange, SelectionModel, Toggled,
};

// ============================================================================
// Configuration, Errors and Presentation
// ============================================================================

pub use crate::config::GridConfig;
pub use crate::presenter::{DropProposal, GridPresenter, ReloadScope, ScrollTarget, TapOutcome};
pub use crate::{GridError, Result};
