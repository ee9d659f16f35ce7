//! Selection model for the two-section grid.
//!
//! This module provides [`SelectionModel`], which owns the fixed universe of
//! items and the bounded, ordered subset the user has picked. It answers
//! every query a grid needs to draw itself and performs every mutation a
//! gesture can request.
//!
//! No operation fails or panics. Requests that cannot be honoured (adding to
//! a full selection, rows past the end, out-of-range moves) leave the state
//! untouched and say so through their return value.
//!
//! # Example
//!
//! ```
//! use selectable_grid::model::{GridIndex, SelectionModel, Toggled};
//!
//! let mut model = SelectionModel::new(["A", "B", "C", "D"], 2);
//!
//! assert_eq!(model.toggle(2), Toggled::Selected(0));
//! assert_eq!(model.toggle(0), Toggled::Selected(1));
//! assert!(!model.is_selectable(1));
//!
//! assert_eq!(model.item_at(&GridIndex::tray(0)), Some(&"C"));
//! assert_eq!(model.order_of(&GridIndex::catalog(0)), Some(1));
//!
//! model.selection_changed.connect(|change| {
//!     println!("selection changed: {:?}", change);
//! });
//! model.reorder(1, 0);
//! assert_eq!(model.selected_items(), &["A", "C"]);
//! ```

use std::fmt::Display;
use std::hash::Hash;

use selectable_grid_core::logging::targets;
use selectable_grid_core::Signal;

use super::catalog::Catalog;
use super::cell::CellContent;
use super::index::{GridIndex, Section};
use super::ordered::{FillState, OrderedSelection};
use crate::config::GridConfig;
use crate::error::{GridError, Result};

/// What a call to [`SelectionModel::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggled {
    /// The item was appended at this position.
    Selected(usize),
    /// The item was removed from this position.
    Deselected(usize),
    /// The selection is full and the item was not in it; nothing changed.
    Rejected,
    /// The catalog row does not exist; nothing changed.
    Ignored,
}

impl Toggled {
    /// Returns `true` if the selection changed.
    pub fn changed(self) -> bool {
        matches!(self, Toggled::Selected(_) | Toggled::Deselected(_))
    }
}

/// A change to the selection, carried by [`SelectionModel::selection_changed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange<T> {
    /// `item` now sits at `position`.
    Selected { item: T, position: usize },
    /// `item` was removed from `position`.
    Deselected { item: T, position: usize },
    /// `item` moved from one position to another.
    Moved { item: T, from: usize, to: usize },
    /// Every item was removed; `removed` holds them in their former order.
    Cleared { removed: Vec<T> },
}

/// Owns the universe and the ordered selection.
///
/// # Signals
///
/// - `selection_changed`: Emitted after every mutation that changed the
///   selection. Never emitted for no-ops.
pub struct SelectionModel<T> {
    /// The universe, in catalog order.
    catalog: Catalog<T>,

    /// The selected items, in tray order.
    selection: OrderedSelection<T>,

    /// Emitted when the selection changes.
    pub selection_changed: Signal<SelectionChange<T>>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for SelectionModel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionModel")
            .field("catalog", &self.catalog)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl SelectionModel<String> {
    /// Builds a model from a validated configuration.
    pub fn from_config(config: &GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.items.iter().cloned(), config.max_size))
    }
}

impl<T: Clone + Eq + Hash> SelectionModel<T> {
    /// Creates a model over `items` with an empty selection bounded by `max_size`.
    ///
    /// Repeated items are dropped, keeping the first occurrence.
    pub fn new(items: impl IntoIterator<Item = T>, max_size: usize) -> Self {
        let catalog = Catalog::new(items);
        tracing::debug!(
            target: targets::MODEL,
            items = catalog.len(),
            max_size,
            "created selection model"
        );
        Self {
            catalog,
            selection: OrderedSelection::new(max_size),
            selection_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Structure
    // =========================================================================

    /// Number of sections (tray and catalog).
    pub fn section_count(&self) -> usize {
        Section::COUNT
    }

    /// Number of cells in `section`.
    ///
    /// The tray always has `max_size` slots, however many are filled.
    pub fn item_count(&self, section: Section) -> usize {
        match section {
            Section::Tray => self.selection.max_size(),
            Section::Catalog => self.catalog.len(),
        }
    }

    /// The selection bound.
    pub fn max_size(&self) -> usize {
        self.selection.max_size()
    }

    /// The universe.
    pub fn catalog(&self) -> &Catalog<T> {
        &self.catalog
    }

    // =========================================================================
    // Selection Queries
    // =========================================================================

    /// The selected items in order.
    pub fn selected_items(&self) -> &[T] {
        self.selection.as_slice()
    }

    /// Number of selected items.
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// Returns `true` if no more items can be added.
    pub fn is_full(&self) -> bool {
        self.selection.is_full()
    }

    /// Empty, partial or full.
    pub fn fill_state(&self) -> FillState {
        self.selection.fill_state()
    }

    /// Returns `true` if `item` is selected.
    pub fn is_selected(&self, item: &T) -> bool {
        self.selection.contains(item)
    }

    /// Zero-based selection position of `item`.
    pub fn position_of(&self, item: &T) -> Option<usize> {
        self.selection.position_of(item)
    }

    // =========================================================================
    // Cell Queries
    // =========================================================================

    /// The item shown at `index`.
    ///
    /// Tray slots past the selection are blank and return `None`, as do rows
    /// past the end of either section.
    pub fn item_at(&self, index: &GridIndex) -> Option<&T> {
        match index.section() {
            Section::Tray => self.selection.get(index.row()),
            Section::Catalog => self.catalog.get(index.row()),
        }
    }

    /// The order badge for `index`.
    ///
    /// Catalog cells of selected items report the item's zero-based position
    /// in the selection. Tray cells never have a badge.
    pub fn order_of(&self, index: &GridIndex) -> Option<usize> {
        match index.section() {
            Section::Tray => None,
            Section::Catalog => self
                .catalog
                .get(index.row())
                .and_then(|item| self.selection.position_of(item)),
        }
    }

    /// Returns `true` if tapping catalog row `row` would change the selection.
    ///
    /// A selected item can always be deselected; an unselected one can be
    /// added while there is room. Rows past the end are never selectable.
    pub fn is_selectable(&self, row: usize) -> bool {
        self.check_selectable(row).is_ok()
    }

    /// Like [`is_selectable`](Self::is_selectable), but explains a refusal.
    ///
    /// [`GridError::SelectionFull`] carries the user-facing notice.
    pub fn check_selectable(&self, row: usize) -> Result<()> {
        let item = self.catalog_item(row)?;
        if self.selection.contains(item) || !self.selection.is_full() {
            Ok(())
        } else {
            Err(GridError::SelectionFull {
                max_size: self.selection.max_size(),
            })
        }
    }

    // =========================================================================
    // Selection Operations
    // =========================================================================

    /// Selects or deselects the item at catalog row `row`.
    ///
    /// A selected item is removed, keeping the order of the rest. An
    /// unselected item is appended if there is room; otherwise nothing
    /// happens and [`Toggled::Rejected`] is returned.
    pub fn toggle(&mut self, row: usize) -> Toggled {
        let Some(item) = self.catalog.get(row).cloned() else {
            tracing::debug!(target: targets::MODEL, row, "toggle ignored: row out of range");
            return Toggled::Ignored;
        };

        if let Some(position) = self.selection.remove(&item) {
            tracing::debug!(target: targets::MODEL, row, position, "deselected item");
            self.selection_changed
                .emit(SelectionChange::Deselected { item, position });
            return Toggled::Deselected(position);
        }

        match self.selection.push(item.clone()) {
            Some(position) => {
                tracing::debug!(target: targets::MODEL, row, position, "selected item");
                self.selection_changed
                    .emit(SelectionChange::Selected { item, position });
                Toggled::Selected(position)
            }
            None => {
                tracing::trace!(
                    target: targets::MODEL,
                    row,
                    max_size = self.selection.max_size(),
                    "toggle rejected: selection full"
                );
                Toggled::Rejected
            }
        }
    }

    /// Moves the selected item at `from` so that it ends up at `to`.
    ///
    /// `to` may equal the selection length (move to the end); anything past
    /// that is treated the same way. Returns `false` and changes nothing when
    /// `from` is out of bounds or `from == to`.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if !self.selection.move_item(from, to) {
            tracing::trace!(target: targets::MODEL, from, to, "reorder ignored");
            return false;
        }

        let to = to.min(self.selection.len() - 1);
        tracing::debug!(target: targets::MODEL, from, to, "reordered selection");
        if let Some(item) = self.selection.get(to).cloned() {
            self.selection_changed
                .emit(SelectionChange::Moved { item, from, to });
        }
        true
    }

    /// Removes and returns the selected item at `position`.
    pub fn remove_at(&mut self, position: usize) -> Option<T> {
        let item = self.selection.remove_at(position)?;
        tracing::debug!(target: targets::MODEL, position, "removed selected item");
        self.selection_changed.emit(SelectionChange::Deselected {
            item: item.clone(),
            position,
        });
        Some(item)
    }

    /// Inserts `item` into the selection at `position` (clamped to the end).
    ///
    /// Refuses items outside the universe, items already selected, and any
    /// insert into a full selection. Returns `true` if the item was inserted.
    pub fn insert_at(&mut self, item: T, position: usize) -> bool {
        if !self.catalog.contains(&item) {
            tracing::debug!(target: targets::MODEL, position, "insert ignored: item not in catalog");
            return false;
        }
        match self.selection.insert(item.clone(), position) {
            Some(position) => {
                tracing::debug!(target: targets::MODEL, position, "inserted selected item");
                self.selection_changed
                    .emit(SelectionChange::Selected { item, position });
                true
            }
            None => {
                tracing::trace!(target: targets::MODEL, position, "insert refused");
                false
            }
        }
    }

    /// Empties the selection. The universe is untouched.
    ///
    /// Returns how many items were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.selection.clear();
        let count = removed.len();
        if count > 0 {
            tracing::debug!(target: targets::MODEL, count, "cleared selection");
            self.selection_changed
                .emit(SelectionChange::Cleared { removed });
        }
        count
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn catalog_item(&self, row: usize) -> Result<&T> {
        self.catalog.get(row).ok_or(GridError::RowOutOfRange {
            row,
            len: self.catalog.len(),
        })
    }
}

impl<T: Clone + Eq + Hash + Display> SelectionModel<T> {
    /// The text shown at `index`; empty for blank tray slots.
    pub fn title(&self, index: &GridIndex) -> String {
        self.item_at(index)
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// Title and badge for `index` in one call.
    pub fn cell(&self, index: &GridIndex) -> CellContent {
        CellContent::new(self.title(index)).with_order(self.order_of(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn letters(model: &SelectionModel<String>) -> String {
        model.selected_items().concat()
    }

    fn row(letter: char) -> usize {
        (letter as u8 - b'A') as usize
    }

    fn alphabet_model() -> SelectionModel<String> {
        SelectionModel::from_config(&GridConfig::default()).unwrap()
    }

    #[test]
    fn test_model_creation() {
        let model = alphabet_model();
        assert_eq!(model.section_count(), 2);
        assert_eq!(model.item_count(Section::Tray), 6);
        assert_eq!(model.item_count(Section::Catalog), 26);
        assert_eq!(model.fill_state(), FillState::Empty);
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let config = GridConfig::new().with_max_size(0);
        assert!(SelectionModel::from_config(&config).is_err());
    }

    #[test]
    fn test_toggle_select_and_deselect() {
        let mut model = alphabet_model();
        assert_eq!(model.toggle(row('C')), Toggled::Selected(0));
        assert_eq!(model.toggle(row('A')), Toggled::Selected(1));
        assert_eq!(model.toggle(row('Q')), Toggled::Selected(2));
        assert_eq!(letters(&model), "CAQ");

        assert_eq!(model.toggle(row('A')), Toggled::Deselected(1));
        assert_eq!(letters(&model), "CQ");
    }

    #[test]
    fn test_toggle_rejected_when_full() {
        let mut model = alphabet_model();
        for letter in "ABCDEF".chars() {
            assert!(model.toggle(row(letter)).changed());
        }
        assert!(model.is_full());
        assert!(!model.is_selectable(row('G')));
        assert!(model.is_selectable(row('C')));
        assert_eq!(model.toggle(row('G')), Toggled::Rejected);
        assert_eq!(letters(&model), "ABCDEF");

        let err = model.check_selectable(row('G')).unwrap_err();
        assert_eq!(err.to_string(), "at most 6 items can be selected");
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut model = alphabet_model();
        assert_eq!(model.toggle(26), Toggled::Ignored);
        assert!(!model.is_selectable(26));
        assert!(matches!(
            model.check_selectable(26),
            Err(GridError::RowOutOfRange { row: 26, len: 26 })
        ));
    }

    #[test]
    fn test_item_at_and_title() {
        let mut model = alphabet_model();
        model.toggle(row('K'));

        assert_eq!(model.item_at(&GridIndex::tray(0)).map(String::as_str), Some("K"));
        assert_eq!(model.item_at(&GridIndex::tray(1)), None);
        assert_eq!(model.title(&GridIndex::tray(5)), "");
        assert_eq!(model.title(&GridIndex::catalog(25)), "Z");
        assert_eq!(model.title(&GridIndex::catalog(26)), "");
    }

    #[test]
    fn test_order_badges() {
        let mut model = alphabet_model();
        model.toggle(row('D'));
        model.toggle(row('B'));

        assert_eq!(model.order_of(&GridIndex::catalog(row('D'))), Some(0));
        assert_eq!(model.order_of(&GridIndex::catalog(row('B'))), Some(1));
        assert_eq!(model.order_of(&GridIndex::catalog(row('A'))), None);
        assert_eq!(model.order_of(&GridIndex::tray(0)), None);

        let cell = model.cell(&GridIndex::catalog(row('B')));
        assert_eq!(cell.title, "B");
        assert_eq!(cell.badge_text().as_deref(), Some("2"));
        assert_eq!(model.cell(&GridIndex::tray(0)), CellContent::new("D"));
    }

    #[test]
    fn test_reorder() {
        let mut model = alphabet_model();
        for letter in "BCDEF".chars() {
            model.toggle(row(letter));
        }

        assert!(model.reorder(0, 2));
        assert_eq!(letters(&model), "CDBEF");

        assert!(model.reorder(1, 5));
        assert_eq!(letters(&model), "CBEFD");

        assert!(!model.reorder(3, 3));
        assert!(!model.reorder(5, 0));
        assert_eq!(letters(&model), "CBEFD");
    }

    #[test]
    fn test_remove_and_insert_primitives() {
        let mut model = alphabet_model();
        for letter in "ABC".chars() {
            model.toggle(row(letter));
        }

        assert_eq!(model.remove_at(0).as_deref(), Some("A"));
        assert_eq!(model.remove_at(5), None);
        assert!(model.insert_at("A".to_string(), 1));
        assert_eq!(letters(&model), "BAC");

        assert!(!model.insert_at("A".to_string(), 0));
        assert!(!model.insert_at("not-a-letter".to_string(), 0));
        assert_eq!(letters(&model), "BAC");
    }

    #[test]
    fn test_clear() {
        let mut model = alphabet_model();
        for letter in "ABCDEF".chars() {
            model.toggle(row(letter));
        }

        assert_eq!(model.clear(), 6);
        assert!(model.is_empty());
        assert!((0..26).all(|r| model.is_selectable(r)));
        assert_eq!(model.clear(), 0);
        assert_eq!(model.item_count(Section::Catalog), 26);
    }

    #[test]
    fn test_selection_signal() {
        let mut model = alphabet_model();
        let changes = Arc::new(Mutex::new(Vec::new()));

        let changes_clone = changes.clone();
        model.selection_changed.connect(move |change| {
            changes_clone.lock().push(change.clone());
        });

        model.toggle(row('A'));
        model.toggle(row('B'));
        model.reorder(1, 0);
        model.reorder(1, 1);
        model.toggle(row('A'));
        model.clear();
        model.clear();

        let changes = changes.lock();
        assert_eq!(
            *changes,
            vec![
                SelectionChange::Selected { item: "A".to_string(), position: 0 },
                SelectionChange::Selected { item: "B".to_string(), position: 1 },
                SelectionChange::Moved { item: "B".to_string(), from: 1, to: 0 },
                SelectionChange::Deselected { item: "A".to_string(), position: 1 },
                SelectionChange::Cleared { removed: vec!["B".to_string()] },
            ]
        );
    }

    #[test]
    fn test_no_signal_on_rejected_toggle() {
        let mut model = SelectionModel::new([1, 2], 1);
        model.toggle(0);

        let emitted = Arc::new(Mutex::new(0usize));
        let emitted_clone = emitted.clone();
        model.selection_changed.connect(move |_| *emitted_clone.lock() += 1);

        assert_eq!(model.toggle(1), Toggled::Rejected);
        assert_eq!(*emitted.lock(), 0);
    }

    #[test]
    fn test_integer_items() {
        let mut model = SelectionModel::new(0..10u32, 3);
        model.toggle(7);
        model.toggle(2);
        assert_eq!(model.selected_items(), &[7, 2]);
        assert_eq!(model.title(&GridIndex::tray(0)), "7");
        assert_eq!(model.order_of(&GridIndex::catalog(2)), Some(1));
    }
}
