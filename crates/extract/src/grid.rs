use crate::cell::CellValue;
use crate::error::{ExtractError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

/// Convert calamine Data to CellValue
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        // Excel stores dates as days since 1899-12-30
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}

/// The cells of one worksheet, addressed from A1.
///
/// Rows may have different lengths; a missing trailing cell reads as
/// [`CellValue::Empty`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<CellValue>>,
}

impl Grid {
    /// Build a grid from row-major data
    #[must_use]
    pub fn from_rows<T: Into<CellValue>>(rows: Vec<Vec<T>>) -> Self {
        Grid {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Load the first worksheet of a workbook.
    ///
    /// The container format (xls, xlsx, xlsb, ods) is detected from the file
    /// extension.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::SourceUnavailable`] if the file cannot be
    /// opened, is not a supported workbook, or has no worksheet.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut workbook =
            open_workbook_auto(path).map_err(|e| ExtractError::source_unavailable(path, e))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| {
                ExtractError::source_unavailable(
                    path,
                    calamine::Error::Msg("workbook has no worksheets"),
                )
            })?
            .map_err(|e| ExtractError::source_unavailable(path, e))?;

        Ok(Self::from_range(&range))
    }

    /// Convert a calamine range, re-anchoring it at A1.
    ///
    /// calamine trims leading empty rows and columns from a range; they are
    /// restored here so row indices and the first column match the sheet.
    fn from_range(range: &Range<Data>) -> Self {
        let Some((start_row, start_col)) = range.start() else {
            return Grid::default();
        };

        let mut rows: Vec<Vec<CellValue>> = vec![Vec::new(); start_row as usize];
        for row in range.rows() {
            let mut cells = vec![CellValue::Empty; start_col as usize];
            cells.extend(row.iter().map(data_to_cell_value));
            rows.push(cells);
        }

        Grid { rows }
    }

    /// Number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the grid has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by index
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[CellValue]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Get a cell, padding ragged rows with empty cells
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        const EMPTY: &CellValue = &CellValue::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(EMPTY)
    }

    /// Iterate over all rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(vec![vec!["a", "b"], vec!["c"]]);
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.cell(0, 1), &CellValue::from("b"));
        assert_eq!(grid.cell(1, 1), &CellValue::Empty);
        assert_eq!(grid.cell(9, 9), &CellValue::Empty);
        assert_eq!(grid.row(1).map(<[CellValue]>::len), Some(1));
        assert!(grid.row(2).is_none());
    }

    #[test]
    fn test_from_range_reanchors() {
        let mut range = Range::new((2, 1), (3, 2));
        range.set_value((2, 1), Data::String("Header".to_string()));
        range.set_value((2, 2), Data::Float(1.5));
        range.set_value((3, 2), Data::Int(7));

        let grid = Grid::from_range(&range);
        assert_eq!(grid.row_count(), 4);
        assert!(grid.row(0).is_some_and(<[CellValue]>::is_empty));
        assert_eq!(grid.cell(2, 0), &CellValue::Empty);
        assert_eq!(grid.cell(2, 1), &CellValue::from("Header"));
        assert_eq!(grid.cell(2, 2), &CellValue::Number(1.5));
        assert_eq!(grid.cell(3, 2), &CellValue::Number(7.0));
    }

    #[test]
    fn test_empty_range() {
        let range: Range<Data> = Range::empty();
        assert!(Grid::from_range(&range).is_empty());
    }

    #[test]
    fn test_cell_conversion() {
        assert_eq!(data_to_cell_value(&Data::Empty), CellValue::Empty);
        assert_eq!(data_to_cell_value(&Data::Bool(true)), CellValue::Bool(true));
        assert_eq!(
            data_to_cell_value(&Data::DateTimeIso("2024-01-01".to_string())),
            CellValue::from("2024-01-01")
        );
        assert_eq!(
            data_to_cell_value(&Data::Error(calamine::CellErrorType::Div0)),
            CellValue::Error("#DIV/0!".to_string())
        );
    }
}
