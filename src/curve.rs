//! Building the merit-order supply curve.
use crate::unit::UnitTable;
use crate::units::{Megawatts, Money};
use anyhow::Result;
use std::error::Error;
use std::fmt;

/// One step of the sorted curve: a unit with complete year values, annotated
/// with the running capacity total up to and including itself.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePoint {
    /// Plant name, carried from the unit row.
    pub plant: Option<String>,
    /// Unit id, carried from the unit row.
    pub unit: Option<String>,
    /// This unit's offered capacity.
    pub supply_mw: Megawatts,
    /// This unit's capacity cost, in base currency units.
    pub cost: Money,
    /// Running capacity total in sort order, including this unit.
    pub cumulative_mw: Megawatts,
}

impl CurvePoint {
    /// The identifying label for this step (plant name + unit id, missing
    /// parts coalesced to the empty string).
    pub fn label(&self) -> String {
        format!(
            "{}{}",
            self.plant.as_deref().unwrap_or(""),
            self.unit.as_deref().unwrap_or("")
        )
    }
}

/// The merit-order curve: units sorted ascending by cost with cumulative
/// capacity as the x-axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedCurve {
    /// The ROC year the curve was built for.
    pub year: u32,
    /// The curve steps, cheapest first. Cumulative capacity is
    /// monotonically non-decreasing.
    pub points: Vec<CurvePoint>,
}

impl SortedCurve {
    /// Total capacity of the curve (the last cumulative value), or zero for
    /// a curve that lost all its points to trimming.
    pub fn total_capacity(&self) -> Megawatts {
        self.points
            .last()
            .map_or(Megawatts::from(0.0), |p| p.cumulative_mw)
    }
}

/// Indicates that no rows survived null-filtering, so there is no curve to
/// build or plot.
#[derive(Debug, Clone)]
pub struct EmptyCurveError;

impl fmt::Display for EmptyCurveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "No rows with both cost and supply values; nothing to plot")
    }
}

impl Error for EmptyCurveError {}

/// Build the merit-order curve for the table's year.
///
/// Rows missing either year value are dropped (missing means absent, not
/// zero: rows with a value of exactly 0 are retained). The rest are sorted
/// ascending by cost — stably, so ties keep workbook order — and cumulative
/// capacity is the running sum of supply in sort order, seeded at 0.
pub fn build_curve(units: &UnitTable) -> Result<SortedCurve> {
    let mut complete: Vec<_> = units
        .rows
        .iter()
        .filter_map(|row| Some((row, row.cost?, row.supply_mw?)))
        .collect();
    if complete.is_empty() {
        return Err(EmptyCurveError.into());
    }

    complete.sort_by(|(_, a, _), (_, b, _)| a.total_cmp(b));

    let mut cumulative = Megawatts::from(0.0);
    let points = complete
        .into_iter()
        .map(|(row, cost, supply_mw)| {
            cumulative = cumulative + supply_mw;
            CurvePoint {
                plant: row.plant.clone(),
                unit: row.unit.clone(),
                supply_mw,
                cost,
                cumulative_mw: cumulative,
            }
        })
        .collect();

    Ok(SortedCurve {
        year: units.year,
        points,
    })
}
