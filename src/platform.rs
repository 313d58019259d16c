//! The platform supplier table read from the supply/demand sheet.
use crate::units::{Megawatts, Money};
use std::ops::RangeInclusive;

/// One platform-listed supplier.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformRecord {
    /// Supplier name.
    pub plant: Option<String>,
    /// Capacity cost in base currency units (already rescaled from the
    /// workbook's ten-thousand-unit denomination).
    pub capacity_cost: Option<Money>,
    /// Offered supply capacity in MW.
    pub supply_capacity_mw: Option<Megawatts>,
}

/// The 14-row platform supplier table.
///
/// Rows 0–10 are storage suppliers, row 11 cogeneration and row 12
/// demand-response; the sub-ranges are part of the layout contract in
/// [`crate::layout`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformTable {
    /// The rows, in workbook order.
    pub rows: Vec<PlatformRecord>,
}

impl PlatformTable {
    /// A copy of this table with cost and capacity cleared over the given
    /// inclusive row range. Supplier names are kept. Rows beyond the table
    /// are ignored.
    pub fn with_values_cleared(&self, rows: RangeInclusive<usize>) -> PlatformTable {
        let mut cleared = self.clone();
        for row in cleared.rows.iter_mut().take(*rows.end() + 1).skip(*rows.start()) {
            row.capacity_cost = None;
            row.supply_capacity_mw = None;
        }

        cleared
    }
}
