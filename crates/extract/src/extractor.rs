use crate::error::{ExtractError, Result};
use crate::grid::Grid;
use crate::table::{segment, Table};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Read-only view of the tables found in one worksheet.
///
/// Built once from a grid and never mutated afterwards, so a single
/// instance can be shared between threads without locking.
#[derive(Debug, Clone, Default)]
pub struct TableExtractor {
    source: Option<PathBuf>,
    tables: IndexMap<String, Table>,
}

impl TableExtractor {
    /// Segment an already loaded grid
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        TableExtractor {
            source: None,
            tables: segment(grid),
        }
    }

    /// Load the first worksheet of a workbook and segment it
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::SourceUnavailable`] if the workbook cannot be read.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let grid = Grid::load(path)?;
        Ok(TableExtractor {
            source: Some(path.to_path_buf()),
            ..Self::from_grid(&grid)
        })
    }

    /// Path of the workbook this extractor was loaded from
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of tables
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check if no tables were detected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Get a table by name
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Iterate over tables in detection order
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    /// Names of all tables in the order they were first seen
    #[must_use]
    pub fn table_names(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    /// Row labels of a table
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::TableNotFound`] if no table has that name.
    pub fn row_names(&self, table_name: &str) -> Result<Vec<String>> {
        let table = self.get_table(table_name)?;
        Ok(table.row_names().map(str::to_string).collect())
    }

    /// Sum of the numeric values in a row
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::TableNotFound`] if no table has that name, or
    /// [`ExtractError::RowNotFound`] if the table has no row with that label.
    pub fn row_sum(&self, table_name: &str, row_name: &str) -> Result<f64> {
        let table = self.get_table(table_name)?;
        table
            .row_sum(row_name)
            .ok_or_else(|| ExtractError::RowNotFound {
                table: table_name.to_string(),
                row: row_name.to_string(),
            })
    }

    fn get_table(&self, name: &str) -> Result<&Table> {
        self.tables
            .get(name)
            .ok_or_else(|| ExtractError::TableNotFound {
                name: name.to_string(),
            })
    }
}
