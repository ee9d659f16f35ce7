//! Cell addressing for the two-section grid.
//!
//! A [`GridIndex`] names one cell: the [`Section`] it lives in and its row
//! within that section. Indices are plain values; they carry no reference to
//! the model and are checked against it on every query.

use std::fmt;

/// The two sections of the grid.
///
/// Section numbers are fixed: the tray is section 0 and the catalog is
/// section 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    /// The selected items, in selection order, with a fixed number of slots.
    Tray,
    /// Every item of the universe, in universe order.
    Catalog,
}

impl Section {
    /// Number of sections in the grid.
    pub const COUNT: usize = 2;

    /// Both sections in display order.
    pub const ALL: [Section; Self::COUNT] = [Section::Tray, Section::Catalog];

    /// Returns the section number used by the presentation layer.
    #[inline]
    pub const fn number(self) -> usize {
        match self {
            Section::Tray => 0,
            Section::Catalog => 1,
        }
    }
}

impl TryFrom<usize> for Section {
    type Error = usize;

    /// Maps a section number back to a section, handing back the number when
    /// it names neither.
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Section::Tray),
            1 => Ok(Section::Catalog),
            other => Err(other),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Tray => write!(f, "tray"),
            Section::Catalog => write!(f, "catalog"),
        }
    }
}

/// Identifies one cell of the grid.
///
/// Ordering follows display order: every tray cell sorts before every
/// catalog cell, then by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridIndex {
    section: Section,
    row: usize,
}

impl GridIndex {
    /// Creates an index for `row` in `section`.
    #[inline]
    pub const fn new(section: Section, row: usize) -> Self {
        Self { section, row }
    }

    /// Shorthand for a tray cell.
    #[inline]
    pub const fn tray(row: usize) -> Self {
        Self::new(Section::Tray, row)
    }

    /// Shorthand for a catalog cell.
    #[inline]
    pub const fn catalog(row: usize) -> Self {
        Self::new(Section::Catalog, row)
    }

    /// Builds an index from raw section and row numbers.
    ///
    /// Returns `None` when `section` is not a valid section number.
    pub fn from_raw(section: usize, row: usize) -> Option<Self> {
        Section::try_from(section).ok().map(|s| Self::new(s, row))
    }

    /// The section this cell belongs to.
    #[inline]
    pub const fn section(&self) -> Section {
        self.section
    }

    /// The row within the section.
    #[inline]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Returns `true` for tray cells.
    #[inline]
    pub const fn is_tray(&self) -> bool {
        matches!(self.section, Section::Tray)
    }

    /// Returns `true` for catalog cells.
    #[inline]
    pub const fn is_catalog(&self) -> bool {
        matches!(self.section, Section::Catalog)
    }

    /// The cell at `row` in the same section.
    #[inline]
    pub const fn sibling_at_row(&self, row: usize) -> Self {
        Self::new(self.section, row)
    }
}

impl fmt::Display for GridIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.section, self.row)
    }
}
