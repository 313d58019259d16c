//! Exclusion presets: scenario transforms that remove one category of
//! supplier from the supply stack.
//!
//! Exactly one preset (or none) is active per pipeline run; presets are not
//! composable. Each preset clears fixed row ranges in the unit table (supply
//! and cost columns independently) and, for platform categories, the
//! matching rows of the platform table. The ranges are literal constants in
//! [`crate::layout`] — they encode the source workbook's positional schema
//! and must never be derived.
use crate::layout::{
    EXCLUDE_PLATFORM_ALL, EXCLUDE_PLATFORM_COGEN, EXCLUDE_PLATFORM_COGEN_DEMAND,
    EXCLUDE_PLATFORM_DEMAND_RESPONSE, EXCLUDE_PLATFORM_STORAGE, EXCLUDE_PRIVATE_COMMITMENTS,
    ExclusionRanges,
};
use crate::platform::PlatformTable;
use crate::unit::UnitTable;
use clap::ValueEnum;
use strum::{Display, EnumString};

/// A named exclusion preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Exclusion {
    /// Remove every platform-listed supplier.
    PlatformAll,
    /// Remove platform storage suppliers.
    PlatformStorage,
    /// Remove the platform cogeneration supplier.
    PlatformCogen,
    /// Remove the platform demand-response supplier.
    PlatformDemandResponse,
    /// Remove cogeneration and demand-response together.
    PlatformCogenDemand,
    /// Remove private-commitment obligors.
    PrivateCommitments,
}

impl Exclusion {
    /// The row ranges this preset clears.
    pub fn ranges(self) -> ExclusionRanges {
        match self {
            Self::PlatformAll => EXCLUDE_PLATFORM_ALL,
            Self::PlatformStorage => EXCLUDE_PLATFORM_STORAGE,
            Self::PlatformCogen => EXCLUDE_PLATFORM_COGEN,
            Self::PlatformDemandResponse => EXCLUDE_PLATFORM_DEMAND_RESPONSE,
            Self::PlatformCogenDemand => EXCLUDE_PLATFORM_COGEN_DEMAND,
            Self::PrivateCommitments => EXCLUDE_PRIVATE_COMMITMENTS,
        }
    }

    /// Apply this preset, returning new copies of both tables.
    pub fn apply(
        self,
        units: &UnitTable,
        platform: &PlatformTable,
    ) -> (UnitTable, PlatformTable) {
        let ranges = self.ranges();
        exclude_range(
            units,
            platform,
            Some(ranges.unit_supply),
            Some(ranges.unit_cost),
            ranges.platform,
        )
    }
}

/// The single exclusion primitive: clear the named inclusive row ranges.
///
/// Unit-table supply and cost are cleared independently; a platform range,
/// when given, clears both cost and capacity for those platform rows.
pub fn exclude_range(
    units: &UnitTable,
    platform: &PlatformTable,
    unit_supply_rows: Option<(usize, usize)>,
    unit_cost_rows: Option<(usize, usize)>,
    platform_rows: Option<(usize, usize)>,
) -> (UnitTable, PlatformTable) {
    let units = units.with_values_cleared(
        unit_supply_rows.map(|(start, end)| start..=end),
        unit_cost_rows.map(|(start, end)| start..=end),
    );
    let platform = match platform_rows {
        Some((start, end)) => platform.with_values_cleared(start..=end),
        None => platform.clone(),
    };

    (units, platform)
}
