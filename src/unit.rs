//! The per-unit cost/capacity table read from the cost sheet.
use crate::units::{Megawatts, Money};
use std::ops::RangeInclusive;

/// One row of the cost sheet: a generating unit or supply category.
///
/// Missing workbook cells are `None`; a value of exactly zero is a real
/// value, not a missing one, and the two are never conflated.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitRecord {
    /// Plant name (column A), if present.
    pub plant: Option<String>,
    /// Unit id (column B), if present.
    pub unit: Option<String>,
    /// The remaining identity columns (C:F), carried through unchanged.
    pub descriptors: Vec<Option<String>>,
    /// Capacity offered for the target year, in MW.
    pub supply_mw: Option<Megawatts>,
    /// Capacity cost for the target year, in base currency units.
    pub cost: Option<Money>,
}

impl UnitRecord {
    /// The identifying label shown at the intersection point: plant name and
    /// unit id concatenated, with missing parts coalesced to the empty string.
    pub fn label(&self) -> String {
        format!(
            "{}{}",
            self.plant.as_deref().unwrap_or(""),
            self.unit.as_deref().unwrap_or("")
        )
    }
}

/// The full 601-row unit table for one target year.
///
/// Row index carries domain meaning (see [`crate::layout`]): rows before
/// [`crate::layout::PLATFORM_ROWS_START`] are utility-owned units, the rest
/// are trading-platform participants and private-commitment obligors.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitTable {
    /// The ROC year the supply/cost columns refer to.
    pub year: u32,
    /// The rows, in workbook order.
    pub rows: Vec<UnitRecord>,
}

impl UnitTable {
    /// A copy of this table with year values cleared over the given inclusive
    /// row ranges. Supply and cost are cleared independently; identity
    /// columns are never touched. Ranges beyond the table are ignored.
    pub fn with_values_cleared(
        &self,
        supply_rows: Option<RangeInclusive<usize>>,
        cost_rows: Option<RangeInclusive<usize>>,
    ) -> UnitTable {
        let mut cleared = self.clone();
        if let Some(range) = supply_rows {
            for row in cleared.rows.iter_mut().take(*range.end() + 1).skip(*range.start()) {
                row.supply_mw = None;
            }
        }
        if let Some(range) = cost_rows {
            for row in cleared.rows.iter_mut().take(*range.end() + 1).skip(*range.start()) {
                row.cost = None;
            }
        }

        cleared
    }
}
