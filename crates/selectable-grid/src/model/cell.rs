//! What a single grid cell displays.

/// Display content for one cell: a title and an optional order badge.
///
/// Tray cells never carry a badge. Catalog cells carry the zero-based
/// position of their item within the selection, if it is selected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellContent {
    /// The item text, or empty for a blank tray slot.
    pub title: String,
    /// Zero-based selection order, if the badge is shown.
    pub order: Option<usize>,
}

impl CellContent {
    /// A cell with a title and no badge.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            order: None,
        }
    }

    /// A blank tray slot.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Sets the badge order.
    pub fn with_order(mut self, order: Option<usize>) -> Self {
        self.order = order;
        self
    }

    /// Returns `true` for a cell with no title.
    pub fn is_blank(&self) -> bool {
        self.title.is_empty()
    }

    /// The badge label, counted from one, or `None` if the badge is hidden.
    pub fn badge_text(&self) -> Option<String> {
        self.order.map(|order| (order + 1).to_string())
    }
}
