//! Reading the per-unit cost/capacity table.
use super::{SchemaError, Workbook, cell_f64, cell_string, sheet_range};
use crate::layout::{
    COST_COLUMN, COST_DATA_START_ROW, COST_HEADER_ROW, COST_HEADER_SUFFIX, COST_SHEET,
    IDENTITY_COLUMN_COUNT, PLANT_COLUMN, SUPPLY_COLUMN, SUPPLY_HEADER_SUFFIX, UNIT_COLUMN,
    UNIT_ROW_COUNT,
};
use crate::unit::{UnitRecord, UnitTable};
use crate::units::{Megawatts, Money};
use anyhow::Result;
use calamine::{Data, Range};

/// Read the 601-row unit table for `year` from the cost sheet.
pub fn read_unit_table(workbook: &mut Workbook, year: u32) -> Result<UnitTable> {
    let range = sheet_range(workbook, COST_SHEET)?;
    unit_table_from_range(&range, year)
}

/// Build a [`UnitTable`] from the cost sheet's cell range.
///
/// The header row must carry the year-prefixed column names for `year` in
/// the expected positions; a mismatch means the workbook is laid out for a
/// different year (or a different schema) and is a [`SchemaError`]. The data
/// range is read positionally for exactly [`UNIT_ROW_COUNT`] rows, with
/// cells beyond the used range treated as missing.
pub fn unit_table_from_range(range: &Range<Data>, year: u32) -> Result<UnitTable> {
    check_year_header(range, SUPPLY_COLUMN, &format!("{year}{SUPPLY_HEADER_SUFFIX}"))?;
    check_year_header(range, COST_COLUMN, &format!("{year}{COST_HEADER_SUFFIX}"))?;

    let rows = (0..UNIT_ROW_COUNT)
        .map(|i| {
            let row = COST_DATA_START_ROW + i;
            UnitRecord {
                plant: cell_string(range, row, PLANT_COLUMN),
                unit: cell_string(range, row, UNIT_COLUMN),
                descriptors: (UNIT_COLUMN + 1..IDENTITY_COLUMN_COUNT)
                    .map(|column| cell_string(range, row, column))
                    .collect(),
                supply_mw: cell_f64(range, row, SUPPLY_COLUMN).map(Megawatts::from),
                cost: cell_f64(range, row, COST_COLUMN).map(Money::from),
            }
        })
        .collect();

    Ok(UnitTable { year, rows })
}

/// Check that the header cell in `column` matches the expected year-prefixed
/// name.
fn check_year_header(range: &Range<Data>, column: usize, expected: &str) -> Result<()> {
    let header = cell_string(range, COST_HEADER_ROW, column);
    if header.as_deref() != Some(expected) {
        let found = header.as_deref().unwrap_or("<empty>");
        return Err(SchemaError::new(
            COST_SHEET,
            &format!("expected column header \"{expected}\", found \"{found}\""),
        )
        .into());
    }

    Ok(())
}
