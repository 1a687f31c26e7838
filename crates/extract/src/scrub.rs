use crate::cell::CellValue;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Everything that cannot be part of a plain decimal literal
    static ref NON_NUMERIC: Regex = Regex::new(r"[^0-9.\-]").unwrap();
}

/// Pull a number out of display text such as `"10%"` or `"$1,234.56"`.
///
/// Every character other than an ASCII digit, `.` or `-` is dropped and the
/// remainder is parsed as a float. Returns `None` when nothing is left or
/// the remainder is not a valid number (`"N/A"`, `"1-2"`, `"..."`).
#[must_use]
pub fn scrub_number(text: &str) -> Option<f64> {
    let digits = NON_NUMERIC.replace_all(text, "");
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok()
}

/// Contribution of a single cell to a row sum.
pub(crate) fn cell_amount(cell: &CellValue) -> f64 {
    match cell {
        CellValue::Number(n) => *n,
        CellValue::Text(s) => scrub_number(s).unwrap_or(0.0),
        CellValue::Empty | CellValue::Bool(_) | CellValue::Error(_) => 0.0,
    }
}
