//! Supply-source selection: total supply vs. utility-owned supply only.
use crate::layout::PLATFORM_ROWS_START;
use crate::platform::PlatformTable;
use crate::unit::UnitTable;
use clap::ValueEnum;
use strum::{Display, EnumString};

/// Which supply sources contribute to the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum SupplyMode {
    /// All supply sources, including platform-traded capacity.
    Total,
    /// Utility-owned capacity only.
    UtilityOnly,
}

impl SupplyMode {
    /// Apply this mode, returning new copies of both tables.
    ///
    /// `Total` is an identity copy. `UtilityOnly` clears the year values of
    /// every platform-sourced unit row (index [`PLATFORM_ROWS_START`]
    /// onward) and of every platform supplier.
    pub fn apply(
        self,
        units: &UnitTable,
        platform: &PlatformTable,
    ) -> (UnitTable, PlatformTable) {
        match self {
            Self::Total => (units.clone(), platform.clone()),
            Self::UtilityOnly => {
                let last_unit_row = units.rows.len().saturating_sub(1);
                let last_platform_row = platform.rows.len().saturating_sub(1);
                (
                    units.with_values_cleared(
                        Some(PLATFORM_ROWS_START..=last_unit_row),
                        Some(PLATFORM_ROWS_START..=last_unit_row),
                    ),
                    platform.with_values_cleared(0..=last_platform_row),
                )
            }
        }
    }
}
