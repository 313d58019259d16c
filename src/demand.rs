//! Demand lookup: which demand value the curve is intersected with.
use crate::layout::{DEMAND_NATIONWIDE_ROW, DEMAND_UTILITY_ROW};
use crate::units::Megawatts;
use crate::year::demand_column;
use anyhow::{Context, Result};
use clap::ValueEnum;
use strum::{Display, EnumString};

/// Which demand figure to intersect the supply curve with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum DemandMode {
    /// Demand on the incumbent utility only.
    Utility,
    /// Nationwide demand.
    Nationwide,
}

impl DemandMode {
    /// The demand-grid row holding this mode's values.
    fn grid_row(self) -> usize {
        match self {
            Self::Utility => DEMAND_UTILITY_ROW,
            Self::Nationwide => DEMAND_NATIONWIDE_ROW,
        }
    }
}

/// The unlabelled demand grid, read verbatim from the demand sheet.
///
/// Read-only reference data; indexed by demand mode (row) and target year
/// (column offset from the base year).
#[derive(Debug, Clone, PartialEq)]
pub struct DemandTable {
    /// Grid cells in sheet order; empty cells are `None`.
    pub grid: Vec<Vec<Option<f64>>>,
}

impl DemandTable {
    /// Look up the demand value for the given mode and ROC year.
    pub fn value(&self, mode: DemandMode, year: u32) -> Result<Megawatts> {
        let row = mode.grid_row();
        let column = demand_column(year)?;
        let value = self
            .grid
            .get(row)
            .and_then(|cells| cells.get(column).copied().flatten())
            .with_context(|| {
                format!("No {mode} demand value for year {year} in the demand grid")
            })?;

        Ok(Megawatts::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{assert_error, demand_table};
    use float_cmp::assert_approx_eq;
    use rstest::rstest;

    #[rstest]
    #[case(DemandMode::Nationwide, 116, 42_000.0)]
    #[case(DemandMode::Utility, 116, 36_000.0)]
    #[case(DemandMode::Utility, 114, 34_000.0)]
    fn test_value(
        demand_table: DemandTable,
        #[case] mode: DemandMode,
        #[case] year: u32,
        #[case] expected: f64,
    ) {
        assert_approx_eq!(f64, demand_table.value(mode, year).unwrap().value(), expected);
    }

    #[rstest]
    fn test_value_missing_year(demand_table: DemandTable) {
        assert_error!(
            demand_table.value(DemandMode::Utility, 130),
            "No utility demand value for year 130 in the demand grid"
        );
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("utility".parse::<DemandMode>().unwrap(), DemandMode::Utility);
        assert!("total".parse::<DemandMode>().is_err());
    }
}
