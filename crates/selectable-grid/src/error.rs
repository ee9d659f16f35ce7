//! Error types for the selectable grid.

use std::path::PathBuf;

/// Result type alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors reported by the grid.
///
/// None of the selection operations fail; these errors are how the strict
/// query variants and configuration loading explain a refusal.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Adding another item would exceed the selection bound.
    #[error("at most {max_size} items can be selected")]
    SelectionFull { max_size: usize },

    /// A row number past the end of its section.
    #[error("row {row} is out of range ({len} rows)")]
    RowOutOfRange { row: usize, len: usize },

    /// The configuration parsed but describes an unusable grid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration is not valid TOML for this schema.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration file could not be read.
    #[error("failed to read configuration '{path}': {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GridError {
    /// Create an invalid-configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Create an I/O error for a configuration file.
    pub fn config_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for the error the user should see as a notice.
    pub fn is_selection_full(&self) -> bool {
        matches!(self, Self::SelectionFull { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_full_message() {
        let err = GridError::SelectionFull { max_size: 6 };
        assert_eq!(err.to_string(), "at most 6 items can be selected");
        assert!(err.is_selection_full());
    }

    #[test]
    fn test_row_out_of_range_message() {
        let err = GridError::RowOutOfRange { row: 30, len: 26 };
        assert_eq!(err.to_string(), "row 30 is out of range (26 rows)");
        assert!(!err.is_selection_full());
    }
}
