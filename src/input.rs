//! Common routines for reading the source workbook.
//!
//! The three tables the pipeline needs live in fixed ranges of three named
//! sheets (see [`crate::layout`]). Each loader reads its range verbatim and
//! maps cells to explicit `Option` values; no caching, no recovery.
use anyhow::{Context, Result};
use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

mod demand;
mod platform;
mod unit;

pub use demand::read_demand_table;
pub use platform::read_platform_table;
pub use unit::read_unit_table;

use crate::demand::DemandTable;
use crate::platform::PlatformTable;
use crate::unit::UnitTable;

/// An open source workbook (xlsx/xlsm/xls/ods).
pub type Workbook = Sheets<BufReader<File>>;

/// Indicates that the source workbook does not match the expected layout.
#[derive(Debug, Clone)]
pub struct SchemaError {
    message: String,
}

impl SchemaError {
    /// Create a new [`SchemaError`] for the named sheet.
    pub fn new(sheet: &str, message: &str) -> SchemaError {
        SchemaError {
            message: format!("Sheet \"{sheet}\": {message}"),
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for SchemaError {}

/// Open the workbook at `path`, guessing the format from the extension.
pub fn open_source(path: &Path) -> Result<Workbook> {
    open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))
}

/// Load all three tables the pipeline needs from the workbook at `path`.
pub fn load_tables(
    path: &Path,
    year: u32,
) -> Result<(UnitTable, PlatformTable, DemandTable)> {
    let mut workbook = open_source(path)?;
    let units = read_unit_table(&mut workbook, year)?;
    let platform = read_platform_table(&mut workbook)?;
    let demand = read_demand_table(&mut workbook)?;

    Ok((units, platform, demand))
}

/// Fetch a sheet's used cell range, failing with [`SchemaError`] if absent.
fn sheet_range(workbook: &mut Workbook, sheet: &str) -> Result<Range<Data>> {
    workbook
        .worksheet_range(sheet)
        .map_err(|err| SchemaError::new(sheet, &err.to_string()).into())
}

/// Read a numeric cell at an absolute position. Empty, textual and error
/// cells are missing values, not zeros.
fn cell_f64(range: &Range<Data>, row: usize, column: usize) -> Option<f64> {
    match range.get_value((row as u32, column as u32))? {
        Data::Float(v) => Some(*v),
        Data::Int(v) => Some(*v as f64),
        _ => None,
    }
}

/// Read a textual cell at an absolute position. Numeric cells are rendered
/// as text (integral floats without the trailing `.0`) since identity
/// columns such as the unit id are sometimes stored as numbers.
fn cell_string(range: &Range<Data>, row: usize, column: usize) -> Option<String> {
    match range.get_value((row as u32, column as u32))? {
        Data::String(s) => Some(s.clone()),
        Data::Int(v) => Some(v.to_string()),
        Data::Float(v) if v.fract() == 0.0 => Some(format!("{}", *v as i64)),
        Data::Float(v) => Some(v.to_string()),
        _ => None,
    }
}
