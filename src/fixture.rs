//! Fixtures for tests

use crate::curve::SortedCurve;
use crate::demand::DemandTable;
use crate::layout::{PLATFORM_ROW_COUNT, PLATFORM_ROWS_START, UNIT_ROW_COUNT};
use crate::platform::{PlatformRecord, PlatformTable};
use crate::unit::{UnitRecord, UnitTable};
use crate::units::{Megawatts, Money};
use rstest::fixture;

/// Assert that an error with the given message occurs
macro_rules! assert_error {
    ($result:expr, $msg:expr) => {
        assert_eq!(
            $result.unwrap_err().chain().next().unwrap().to_string(),
            $msg
        );
    };
}
pub(crate) use assert_error;

/// A complete unit row with deterministic identity and year values.
pub fn unit_row(i: usize) -> UnitRecord {
    UnitRecord {
        plant: Some(format!("電廠{i}")),
        unit: Some(format!("機組{i}")),
        descriptors: vec![None; 4],
        // Costs deliberately not in row order so sorting is exercised
        supply_mw: Some(Megawatts::from(50.0 + (i % 10) as f64 * 10.0)),
        cost: Some(Money::from(((i * 37) % UNIT_ROW_COUNT) as f64 * 10_000.0)),
    }
}

/// A full 601-row unit table. All platform-sourced rows (500 onward) are
/// complete; a scattering of utility rows is missing one of the two year
/// values to exercise null-filtering.
#[fixture]
pub fn unit_table() -> UnitTable {
    let rows = (0..UNIT_ROW_COUNT)
        .map(|i| {
            let mut row = unit_row(i);
            if i < PLATFORM_ROWS_START {
                if i % 7 == 0 {
                    row.cost = None;
                }
                if i % 11 == 3 {
                    row.supply_mw = None;
                }
            }
            row
        })
        .collect();

    UnitTable { year: 116, rows }
}

/// A full 14-row platform table with all values present.
#[fixture]
pub fn platform_table() -> PlatformTable {
    let rows = (0..PLATFORM_ROW_COUNT)
        .map(|i| PlatformRecord {
            plant: Some(format!("平台{i}")),
            capacity_cost: Some(Money::from((100 + i) as f64 * 10_000.0)),
            supply_capacity_mw: Some(Megawatts::from(50.0 + i as f64)),
        })
        .collect();

    PlatformTable { rows }
}

/// A demand grid covering years 114 and 116 for both modes.
#[fixture]
pub fn demand_table() -> DemandTable {
    let mut grid = vec![vec![None; 6]; 4];
    grid[2][1] = Some(40_000.0); // nationwide, year 114
    grid[2][3] = Some(42_000.0); // nationwide, year 116
    grid[3][1] = Some(34_000.0); // utility, year 114
    grid[3][3] = Some(36_000.0); // utility, year 116

    DemandTable { grid }
}

/// The three-step curve from the worked example: costs 10/20/30 萬元,
/// supply 100 MW each, cumulative capacity [100, 200, 300].
#[fixture]
pub fn simple_curve() -> SortedCurve {
    let rows = (0..3)
        .map(|i| {
            let mut row = unit_row(i);
            row.supply_mw = Some(Megawatts::from(100.0));
            row.cost = Some(Money::from((i + 1) as f64 * 100_000.0));
            row
        })
        .collect();

    crate::curve::build_curve(&UnitTable { year: 116, rows })
        .expect("fixture rows are complete")
}
