//! Headless presentation controller for the selectable grid.
//!
//! [`GridPresenter`] is what a screen would do with its gestures, minus the
//! drawing. It owns the [`SelectionModel`], turns taps, drags and header
//! actions into model calls, and tells the view what to do next through
//! signals:
//!
//! - `reload`: redraw part of the grid
//! - `notice`: show a message to the user (the selection is full)
//! - `scroll`: move the viewport to the tray or the catalog header
//!
//! # Drag and Drop
//!
//! Only filled tray cells can be dragged, and only within the tray. A drag
//! is a two-step exchange:
//!
//! ```
//! use selectable_grid::config::GridConfig;
//! use selectable_grid::model::GridIndex;
//! use selectable_grid::presenter::GridPresenter;
//!
//! let mut presenter = GridPresenter::new(GridConfig::default()).unwrap();
//! for row in [1, 2, 3] {
//!     presenter.tap(GridIndex::catalog(row));
//! }
//!
//! presenter.begin_drag(GridIndex::tray(0)).unwrap();
//! assert!(presenter.drop_at(Some(GridIndex::tray(2))));
//! assert_eq!(presenter.model().selected_items(), &["C", "D", "B"]);
//! ```

use selectable_grid_core::logging::targets;
use selectable_grid_core::Signal;

use crate::config::GridConfig;
use crate::error::Result;
use crate::model::{CellContent, GridIndex, Section, SelectionModel, Toggled};

/// Which part of the grid needs redrawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReloadScope {
    /// Both sections.
    All,
    /// Only the catalog (its order badges changed).
    Catalog,
}

/// Where the viewport should scroll to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollTarget {
    /// The first tray cell, showing the tray.
    TrayTop,
    /// The catalog header, scrolling the tray out of view.
    CatalogHeader,
}

/// What a tap did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapOutcome {
    /// The tapped catalog item was selected or deselected.
    Toggled(Toggled),
    /// The selection is full; the message was sent as a notice.
    Refused(String),
    /// The tap landed somewhere that does nothing (the tray, or past the end).
    Ignored,
}

/// Whether a drop over the current location would be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropProposal {
    /// Dropping would move the dragged item.
    Move,
    /// Dropping would do nothing.
    Cancel,
}

/// A drag in progress, started from a filled tray cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    /// Tray row the drag started from.
    pub source_row: usize,
    /// The item being dragged.
    pub item: String,
}

/// Connects gestures on a two-section grid to a [`SelectionModel`].
pub struct GridPresenter {
    model: SelectionModel<String>,

    /// The drag in progress, if any.
    drag: Option<DragSession>,

    /// Emitted when part of the grid must be redrawn.
    pub reload: Signal<ReloadScope>,

    /// Emitted with a user-facing message when a tap is refused.
    pub notice: Signal<String>,

    /// Emitted when the viewport should scroll.
    pub scroll: Signal<ScrollTarget>,
}

impl std::fmt::Debug for GridPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridPresenter")
            .field("model", &self.model)
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}

impl GridPresenter {
    /// Creates a presenter with a fresh model built from `config`.
    pub fn new(config: GridConfig) -> Result<Self> {
        Ok(Self::with_model(SelectionModel::from_config(&config)?))
    }

    /// Creates a presenter around an existing model.
    pub fn with_model(model: SelectionModel<String>) -> Self {
        Self {
            model,
            drag: None,
            reload: Signal::new(),
            notice: Signal::new(),
            scroll: Signal::new(),
        }
    }

    /// The model being presented.
    pub fn model(&self) -> &SelectionModel<String> {
        &self.model
    }

    /// Number of sections to draw.
    pub fn section_count(&self) -> usize {
        self.model.section_count()
    }

    /// Number of cells to draw in `section`.
    pub fn item_count(&self, section: Section) -> usize {
        self.model.item_count(section)
    }

    /// What to draw at `index`.
    pub fn cell(&self, index: GridIndex) -> CellContent {
        self.model.cell(&index)
    }

    // =========================================================================
    // Taps
    // =========================================================================

    /// Handles a tap on a cell.
    ///
    /// Catalog taps toggle their item, or raise a notice when the selection
    /// is full. Tray taps do nothing.
    #[tracing::instrument(skip(self), target = "selectable_grid::presenter", level = "trace")]
    pub fn tap(&mut self, index: GridIndex) -> TapOutcome {
        if !index.is_catalog() {
            return TapOutcome::Ignored;
        }

        if let Err(err) = self.model.check_selectable(index.row()) {
            if !err.is_selection_full() {
                tracing::debug!(target: targets::PRESENTER, %index, %err, "tap ignored");
                return TapOutcome::Ignored;
            }
            let message = err.to_string();
            tracing::debug!(target: targets::PRESENTER, %index, "tap refused: selection full");
            self.notice.emit(message.clone());
            return TapOutcome::Refused(message);
        }

        let toggled = self.model.toggle(index.row());
        if toggled.changed() {
            self.reload.emit(ReloadScope::All);
        }
        TapOutcome::Toggled(toggled)
    }

    // =========================================================================
    // Drag and Drop
    // =========================================================================

    /// Starts dragging the item at `index`.
    ///
    /// Returns `None` (and starts nothing) unless `index` is a filled tray
    /// cell. Starting a new drag replaces any drag in progress.
    pub fn begin_drag(&mut self, index: GridIndex) -> Option<&DragSession> {
        if !index.is_tray() {
            return None;
        }
        let item = self.model.item_at(&index)?.clone();
        tracing::debug!(target: targets::PRESENTER, row = index.row(), %item, "drag started");
        self.drag = Some(DragSession {
            source_row: index.row(),
            item,
        });
        self.drag.as_ref()
    }

    /// The drag in progress.
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Whether dropping over `destination` would be accepted.
    ///
    /// `None` stands for empty space past the last cell.
    pub fn drop_proposal(&self, destination: Option<GridIndex>) -> DropProposal {
        match (&self.drag, destination) {
            (None, _) => DropProposal::Cancel,
            (Some(_), Some(index)) if !index.is_tray() => DropProposal::Cancel,
            (Some(_), _) => DropProposal::Move,
        }
    }

    /// Completes the drag in progress by dropping over `destination`.
    ///
    /// `None` drops at the end of the tray. Drops outside the tray, drops
    /// with no drag in progress, and drags whose item has since moved are
    /// discarded. Returns `true` if the selection order changed.
    pub fn drop_at(&mut self, destination: Option<GridIndex>) -> bool {
        let proposal = self.drop_proposal(destination);
        let Some(session) = self.drag.take() else {
            return false;
        };
        if proposal == DropProposal::Cancel {
            tracing::debug!(target: targets::PRESENTER, "drop cancelled: outside the tray");
            return false;
        }

        if self.model.position_of(&session.item) != Some(session.source_row) {
            tracing::debug!(
                target: targets::PRESENTER,
                item = %session.item,
                "drop discarded: dragged item moved"
            );
            return false;
        }

        let to = destination.map_or(self.model.selected_count(), |index| index.row());
        let moved = self.model.reorder(session.source_row, to);
        if moved {
            self.reload.emit(ReloadScope::Catalog);
        }
        moved
    }

    /// Abandons the drag in progress.
    pub fn cancel_drag(&mut self) {
        if self.drag.take().is_some() {
            tracing::debug!(target: targets::PRESENTER, "drag cancelled");
        }
    }

    // =========================================================================
    // Header Actions
    // =========================================================================

    /// Scrolls the tray out of view.
    pub fn hide_tray(&self) {
        self.scroll.emit(ScrollTarget::CatalogHeader);
    }

    /// Scrolls back to the tray.
    pub fn show_tray(&self) {
        self.scroll.emit(ScrollTarget::TrayTop);
    }

    /// Clears the selection, redraws, and scrolls back to the tray.
    pub fn clear(&mut self) -> usize {
        self.drag = None;
        let removed = self.model.clear();
        self.reload.emit(ReloadScope::All);
        self.show_tray();
        removed
    }
}
