use crate::cell::CellValue;
use crate::grid::Grid;
use crate::scrub::cell_amount;
use indexmap::IndexMap;
use serde::Serialize;

/// Row labels starting with one of these are section banners, not data rows.
const SECTION_MARKERS: [&str; 2] = ["Equity Analysis", "INPUT SHEET"];

/// A named block of rows detected within a grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    name: String,
    start_row: usize,
    end_row: usize,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Trimmed text of the header cell
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grid index of the header row
    #[must_use]
    pub fn start_row(&self) -> usize {
        self.start_row
    }

    /// Grid index of the last row in the table's range (inclusive)
    #[must_use]
    pub fn end_row(&self) -> usize {
        self.end_row
    }

    /// Non-blank rows of the range, header row first
    #[must_use]
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Find the first row whose trimmed first-cell text equals `label` trimmed.
    ///
    /// Unlike [`Table::row_names`], a whitespace-only first cell still counts
    /// as text here and matches an empty or blank `label`.
    #[must_use]
    pub fn row(&self, label: &str) -> Option<&[CellValue]> {
        let label = label.trim();
        self.rows
            .iter()
            .find(|row| {
                row.first()
                    .and_then(CellValue::as_text)
                    .filter(|text| !text.is_empty())
                    .map(str::trim)
                    == Some(label)
            })
            .map(Vec::as_slice)
    }

    /// Labels of every data row in order, duplicates kept.
    ///
    /// Section banners and rows without a text label are skipped.
    pub fn row_names(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .filter_map(|row| row.first().and_then(CellValue::label))
            .filter(|label| !SECTION_MARKERS.iter().any(|m| label.starts_with(m)))
    }

    /// Sum of the cells after the label of the row named `label`.
    #[must_use]
    pub fn row_sum(&self, label: &str) -> Option<f64> {
        self.row(label)
            .map(|row| row.iter().skip(1).map(cell_amount).sum())
    }
}

/// Check if a row starts a new table: text in the first cell and
/// something else further along.
fn header_text(row: &[CellValue]) -> Option<&str> {
    let (first, rest) = row.split_first()?;
    let label = first.label()?;
    rest.iter().any(|c| !c.is_empty()).then_some(label)
}

fn is_blank(row: &[CellValue]) -> bool {
    row.iter().all(CellValue::is_empty)
}

/// Partition a grid into named tables.
///
/// Every header row opens a table that runs until the next header row or
/// the end of the grid. Blank rows inside a range are dropped. When two
/// headers share a name the later table replaces the earlier one, keeping
/// the position the name was first seen at.
#[must_use]
pub fn segment(grid: &Grid) -> IndexMap<String, Table> {
    let headers: Vec<(usize, &str)> = grid
        .rows()
        .enumerate()
        .filter_map(|(idx, row)| header_text(row).map(|text| (idx, text)))
        .collect();

    let mut tables = IndexMap::new();
    for (i, &(start_row, name)) in headers.iter().enumerate() {
        let end = headers
            .get(i + 1)
            .map_or(grid.row_count(), |&(next, _)| next);

        let rows: Vec<Vec<CellValue>> = (start_row..end)
            .filter_map(|idx| grid.row(idx))
            .filter(|row| !is_blank(row))
            .map(<[CellValue]>::to_vec)
            .collect();

        if rows.is_empty() {
            continue;
        }

        tables.insert(
            name.to_string(),
            Table {
                name: name.to_string(),
                start_row,
                end_row: end - 1,
                rows,
            },
        );
    }

    tables
}
