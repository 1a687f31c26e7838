//! Table extraction for loosely structured worksheets
//!
//! Financial models and similar hand-built workbooks often stack several
//! tables on one sheet with nothing but a label in column A to tell them
//! apart. This crate loads the first worksheet of such a workbook, splits it
//! into named tables, and answers three read-only questions about them:
//! which tables exist, which rows a table has, and what a row adds up to.
//!
//! # Examples
//!
//! ```
//! use tablesift_extract::{CellValue, Grid, TableExtractor};
//!
//! let grid = Grid::from_rows(vec![
//!     vec![CellValue::from("Cash Flow"), CellValue::from("2020"), CellValue::from("2021")],
//!     vec![CellValue::from("Notes"), CellValue::Empty, CellValue::Empty],
//!     vec![CellValue::from("Revenue"), CellValue::from(100), CellValue::from("$200")],
//! ]);
//!
//! let extractor = TableExtractor::from_grid(&grid);
//! assert_eq!(extractor.table_names(), vec!["Cash Flow", "Revenue"]);
//! assert_eq!(extractor.row_names("Cash Flow").unwrap(), vec!["Cash Flow", "Notes"]);
//! assert_eq!(extractor.row_sum("Revenue", "Revenue").unwrap(), 300.0);
//! ```
//!
//! ## Loading a workbook
//!
//! ```no_run
//! use tablesift_extract::TableExtractor;
//!
//! let extractor = TableExtractor::open("data/capbudg.xls").unwrap();
//! for name in extractor.table_names() {
//!     println!("{name}");
//! }
//! ```
//!
//! # Segmentation
//!
//! A row opens a table when its first cell holds text and at least one other
//! cell is filled. The table runs until the next such row. Blank rows are
//! skipped without ending the table.

mod cell;
mod error;
mod extractor;
mod grid;
mod scrub;
mod table;

pub use cell::CellValue;
pub use error::{ExtractError, Result};
pub use extractor::TableExtractor;
pub use grid::Grid;
pub use scrub::scrub_number;
pub use table::{segment, Table};
