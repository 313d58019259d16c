//! Reading the demand lookup grid.
use super::{SchemaError, Workbook, cell_f64, sheet_range};
use crate::demand::DemandTable;
use crate::layout::DEMAND_SHEET;
use anyhow::Result;
use calamine::{Data, Range};

/// Read the unlabelled demand grid from the demand sheet.
pub fn read_demand_table(workbook: &mut Workbook) -> Result<DemandTable> {
    let range = sheet_range(workbook, DEMAND_SHEET)?;
    demand_table_from_range(&range)
}

/// Build a [`DemandTable`] from the demand sheet's cell range.
///
/// The grid is copied verbatim from cell A1 to the end of the used range;
/// indexing semantics live with [`DemandTable`].
pub fn demand_table_from_range(range: &Range<Data>) -> Result<DemandTable> {
    let Some((end_row, end_column)) = range.end() else {
        return Err(SchemaError::new(DEMAND_SHEET, "sheet is empty").into());
    };

    let grid = (0..=end_row as usize)
        .map(|row| {
            (0..=end_column as usize)
                .map(|column| cell_f64(range, row, column))
                .collect()
        })
        .collect();

    Ok(DemandTable { grid })
}
