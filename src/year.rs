//! Code for working with ROC calendar years.
//!
//! The workbook names its year-specific columns and demand grid by ROC
//! (Minguo) year, e.g. 116 for 2027. The target year is conventionally
//! embedded in the workbook filename.
use crate::layout::{DEMAND_BASE_COLUMN, DEMAND_BASE_YEAR};
use anyhow::{Result, ensure};
use std::path::Path;

/// Year assumed when the filename carries no 3-digit year.
pub const DEFAULT_YEAR: u32 = 116;

/// Extract the target ROC year from a workbook filename.
///
/// The first run of three consecutive ASCII digits in the file name is taken
/// as the year (e.g. `備用容量估計116達成年V3.xlsm` gives 116). Falls back to
/// [`DEFAULT_YEAR`] if no such run exists.
pub fn year_from_filename(path: &Path) -> u32 {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return DEFAULT_YEAR;
    };

    let bytes = name.as_bytes();
    for window in bytes.windows(3) {
        if window.iter().all(u8::is_ascii_digit) {
            // windows() yields overlapping slices so this is the leftmost run
            let digits = std::str::from_utf8(window).expect("ASCII digits are valid UTF-8");
            return digits.parse().expect("3 digits fit in u32");
        }
    }

    DEFAULT_YEAR
}

/// The demand-grid column holding demand values for `year`.
pub fn demand_column(year: u32) -> Result<usize> {
    ensure!(
        year >= DEMAND_BASE_YEAR,
        "Year {year} predates the demand grid's base year {DEMAND_BASE_YEAR}"
    );
    Ok(DEMAND_BASE_COLUMN + (year - DEMAND_BASE_YEAR) as usize)
}
