//! Bounded, ordered, duplicate-free item sequence.
//!
//! [`OrderedSelection`] is the storage behind the tray. Alongside the ordered
//! items it keeps a position index (item to position) that is patched on
//! every mutation, so membership and order lookups never scan the sequence.
//!
//! Invariants held after every call:
//!
//! - `len() <= max_size()`
//! - no item appears twice
//! - `position_of(item) == Some(k)` exactly when `as_slice()[k] == item`

use std::collections::HashMap;
use std::hash::Hash;

/// How full the selection is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillState {
    /// Nothing selected.
    Empty,
    /// Some items selected, room for more.
    Partial,
    /// `max_size` items selected.
    Full,
}

/// An ordered set of at most `max_size` items.
#[derive(Debug, Clone)]
pub struct OrderedSelection<T> {
    items: Vec<T>,
    positions: HashMap<T, usize>,
    max_size: usize,
}

impl<T: Clone + Eq + Hash> OrderedSelection<T> {
    /// Creates an empty selection holding at most `max_size` items.
    pub fn new(max_size: usize) -> Self {
        Self {
            items: Vec::with_capacity(max_size),
            positions: HashMap::with_capacity(max_size),
            max_size,
        }
    }

    /// The capacity bound.
    #[inline]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Number of items held.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` once `max_size` items are held.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_size
    }

    /// Empty, partial or full.
    pub fn fill_state(&self) -> FillState {
        if self.is_empty() {
            FillState::Empty
        } else if self.is_full() {
            FillState::Full
        } else {
            FillState::Partial
        }
    }

    /// Items in order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// The item at `position`.
    #[inline]
    pub fn get(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    /// Zero-based position of `item`, or `None` when absent.
    #[inline]
    pub fn position_of(&self, item: &T) -> Option<usize> {
        self.positions.get(item).copied()
    }

    /// Returns `true` if `item` is held.
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    /// Appends `item` and returns its position.
    ///
    /// Returns `None` (and changes nothing) when the item is already held or
    /// the selection is full.
    pub fn push(&mut self, item: T) -> Option<usize> {
        let end = self.items.len();
        self.insert(item, end)
    }

    /// Inserts `item` at `position`, clamped to the current length.
    ///
    /// Returns the position the item ended up at, or `None` (and changes
    /// nothing) when the item is already held or the selection is full.
    pub fn insert(&mut self, item: T, position: usize) -> Option<usize> {
        if self.is_full() || self.contains(&item) {
            return None;
        }
        let position = position.min(self.items.len());
        self.items.insert(position, item);
        self.reindex(position, self.items.len() - 1);
        Some(position)
    }

    /// Removes `item`, keeping the relative order of the rest.
    ///
    /// Returns the position it was removed from.
    pub fn remove(&mut self, item: &T) -> Option<usize> {
        let position = self.position_of(item)?;
        self.remove_at(position);
        Some(position)
    }

    /// Removes and returns the item at `position`.
    pub fn remove_at(&mut self, position: usize) -> Option<T> {
        if position >= self.items.len() {
            return None;
        }
        let item = self.items.remove(position);
        self.positions.remove(&item);
        if position < self.items.len() {
            self.reindex(position, self.items.len() - 1);
        }
        Some(item)
    }

    /// Moves the item at `from` so that it ends up at `to`.
    ///
    /// `to` is clamped to the last position. Returns `false` when `from` is
    /// out of bounds or the order did not change.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        let len = self.items.len();
        if from >= len {
            return false;
        }
        let to = to.min(len - 1);
        if from == to {
            return false;
        }

        if from < to {
            self.items[from..=to].rotate_left(1);
        } else {
            self.items[to..=from].rotate_right(1);
        }
        self.reindex(from.min(to), from.max(to));
        true
    }

    /// Removes everything, returning the removed items in order.
    pub fn clear(&mut self) -> Vec<T> {
        self.positions.clear();
        std::mem::take(&mut self.items)
    }

    /// Rewrites the position index for `first..=last`.
    fn reindex(&mut self, first: usize, last: usize) {
        for (offset, item) in self.items[first..=last].iter().enumerate() {
            self.positions.insert(item.clone(), first + offset);
        }
    }

    #[cfg(test)]
    fn assert_consistent(&self) {
        assert!(self.items.len() <= self.max_size);
        assert_eq!(self.items.len(), self.positions.len());
        for (position, item) in self.items.iter().enumerate() {
            assert_eq!(self.positions.get(item), Some(&position));
        }
    }
}
