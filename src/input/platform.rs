//! Reading the platform supplier table.
use super::{SchemaError, Workbook, cell_f64, cell_string, sheet_range};
use crate::layout::{
    COST_DENOMINATION, PLATFORM_COST_COLUMN, PLATFORM_DATA_START_ROW, PLATFORM_PLANT_COLUMN,
    PLATFORM_ROW_COUNT, PLATFORM_SUPPLY_COLUMN, SUPPLY_SHEET,
};
use crate::platform::{PlatformRecord, PlatformTable};
use crate::units::{Megawatts, Money};
use anyhow::Result;
use calamine::{Data, Range};

/// Read the 14-row platform supplier table from the supply/demand sheet.
pub fn read_platform_table(workbook: &mut Workbook) -> Result<PlatformTable> {
    let range = sheet_range(workbook, SUPPLY_SHEET)?;
    platform_table_from_range(&range)
}

/// Build a [`PlatformTable`] from the supply/demand sheet's cell range.
///
/// The workbook stores capacity cost in ten-thousand-unit denomination; it
/// is rescaled to base currency units here, on load.
pub fn platform_table_from_range(range: &Range<Data>) -> Result<PlatformTable> {
    let wide_enough = range
        .end()
        .is_some_and(|(_, column)| column as usize >= PLATFORM_SUPPLY_COLUMN);
    if !wide_enough {
        return Err(SchemaError::new(
            SUPPLY_SHEET,
            &format!(
                "used range does not reach the platform supply column (column {})",
                PLATFORM_SUPPLY_COLUMN + 1
            ),
        )
        .into());
    }

    let rows = (0..PLATFORM_ROW_COUNT)
        .map(|i| {
            let row = PLATFORM_DATA_START_ROW + i;
            PlatformRecord {
                plant: cell_string(range, row, PLATFORM_PLANT_COLUMN),
                capacity_cost: cell_f64(range, row, PLATFORM_COST_COLUMN)
                    .map(|v| Money::from(v * COST_DENOMINATION)),
                supply_capacity_mw: cell_f64(range, row, PLATFORM_SUPPLY_COLUMN)
                    .map(Megawatts::from),
            }
        })
        .collect();

    Ok(PlatformTable { rows })
}
