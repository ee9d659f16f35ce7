//! The fixed universe of selectable items.
//!
//! `Catalog<T>` is the ordered list shown in the catalog section. It is
//! built once and never changes afterwards, so a catalog row always names
//! the same item for the lifetime of the model.

use std::collections::HashMap;
use std::hash::Hash;

use selectable_grid_core::logging::targets;
use selectable_grid_core::PerfSpan;

/// An immutable, duplicate-free, ordered list of items.
///
/// # Example
///
/// ```
/// use selectable_grid::model::Catalog;
///
/// let catalog = Catalog::new(vec!["A", "B", "C"]);
/// assert_eq!(catalog.len(), 3);
/// assert_eq!(catalog.get(1), Some(&"B"));
/// assert_eq!(catalog.row_of(&"C"), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    items: Vec<T>,
    rows: HashMap<T, usize>,
}

impl<T: Clone + Eq + Hash> Catalog<T> {
    /// Builds a catalog from `items`, keeping their order.
    ///
    /// Repeated items are dropped, keeping the first occurrence, so that
    /// every row maps to a distinct item.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        let _span = PerfSpan::new("build_catalog");
        let mut kept = Vec::new();
        let mut rows = HashMap::new();
        let mut dropped = 0usize;

        for item in items {
            if rows.contains_key(&item) {
                dropped += 1;
                continue;
            }
            rows.insert(item.clone(), kept.len());
            kept.push(item);
        }

        if dropped > 0 {
            tracing::warn!(
                target: targets::MODEL,
                dropped,
                kept = kept.len(),
                "catalog contained duplicate items; keeping first occurrences"
            );
        }

        Self { items: kept, rows }
    }

    /// Number of items (catalog rows).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the catalog has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `row`, or `None` past the end.
    #[inline]
    pub fn get(&self, row: usize) -> Option<&T> {
        self.items.get(row)
    }

    /// The row holding `item`, if it belongs to the catalog.
    #[inline]
    pub fn row_of(&self, item: &T) -> Option<usize> {
        self.rows.get(item).copied()
    }

    /// Returns `true` if `item` belongs to the catalog.
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.rows.contains_key(item)
    }

    /// All items in row order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates over items in row order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Clone + Eq + Hash> FromIterator<T> for Catalog<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
