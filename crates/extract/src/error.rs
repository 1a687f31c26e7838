use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a workbook or querying its tables
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Cannot read workbook {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Table '{name}' not found in Excel sheet")]
    TableNotFound { name: String },

    #[error("Row '{row}' not found in table '{table}'")]
    RowNotFound { table: String, row: String },
}

impl ExtractError {
    /// Create a source error for `path` from the reader failure behind it.
    pub fn source_unavailable(path: impl Into<PathBuf>, source: impl Into<calamine::Error>) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Whether this is a query-time lookup miss rather than a load failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TableNotFound { .. } | Self::RowNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_identifiers() {
        let err = ExtractError::TableNotFound {
            name: "Cash Flow".to_string(),
        };
        assert_eq!(err.to_string(), "Table 'Cash Flow' not found in Excel sheet");

        let err = ExtractError::RowNotFound {
            table: "Cash Flow".to_string(),
            row: "Capex".to_string(),
        };
        assert_eq!(err.to_string(), "Row 'Capex' not found in table 'Cash Flow'");

        let err = ExtractError::source_unavailable(
            "data/missing.xls",
            calamine::Error::Msg("Cannot detect file format"),
        );
        assert_eq!(
            err.to_string(),
            "Cannot read workbook data/missing.xls: Cannot detect file format"
        );
    }

    #[test]
    fn test_source_chain_kept() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file");
        let err = ExtractError::source_unavailable("data/missing.xls", io);
        let source = err.source().unwrap();
        assert!(source.to_string().contains("No such file"));
    }

    #[test]
    fn test_is_not_found() {
        assert!(ExtractError::TableNotFound { name: "x".into() }.is_not_found());
        assert!(ExtractError::RowNotFound {
            table: "x".into(),
            row: "y".into()
        }
        .is_not_found());
        assert!(!ExtractError::source_unavailable("a.xls", calamine::Error::Msg("corrupt"))
            .is_not_found());
    }
}
