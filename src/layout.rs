//! The positional contract with the source workbook.
//!
//! The reserve-capacity workbook carries no machine-readable schema: which
//! rows belong to which supplier category is fixed by the sheet layout and
//! nothing else. Every row/column offset with domain meaning lives in this
//! module as a literal constant so a layout change in the workbook touches
//! exactly one file. None of these values may be derived from cell content.

/// Sheet holding the per-unit cost/capacity table.
pub const COST_SHEET: &str = "達成年成本資料(112成本參考)";

/// Sheet holding the platform supplier table.
pub const SUPPLY_SHEET: &str = "達成年供需圖";

/// Sheet holding the demand lookup grid.
pub const DEMAND_SHEET: &str = "備用需求量(舊法114_117)";

/// Zero-based row of the cost sheet's header (Excel row 3).
pub const COST_HEADER_ROW: usize = 2;

/// First data row of the cost sheet (Excel row 4).
pub const COST_DATA_START_ROW: usize = 3;

/// Number of data rows in the cost sheet (fixed-size table).
pub const UNIT_ROW_COUNT: usize = 601;

/// Number of identity columns carried through unchanged (columns A:F).
pub const IDENTITY_COLUMN_COUNT: usize = 6;

/// Identity column holding the plant name (column A, 電廠).
pub const PLANT_COLUMN: usize = 0;

/// Identity column holding the unit id (column B, 機組).
pub const UNIT_COLUMN: usize = 1;

/// Year-specific supply column (column AN, `{year}供電整理`).
pub const SUPPLY_COLUMN: usize = 39;

/// Year-specific cost column (column AO, `{year}容量成本`).
pub const COST_COLUMN: usize = 40;

/// Header suffix of the supply column, prefixed by the ROC year.
pub const SUPPLY_HEADER_SUFFIX: &str = "供電整理";

/// Header suffix of the cost column, prefixed by the ROC year.
pub const COST_HEADER_SUFFIX: &str = "容量成本";

/// First data row of the platform supplier range (Excel row 13).
pub const PLATFORM_DATA_START_ROW: usize = 12;

/// Number of platform supplier rows.
pub const PLATFORM_ROW_COUNT: usize = 14;

/// Platform plant-name column (column O).
pub const PLATFORM_PLANT_COLUMN: usize = 14;

/// Platform capacity-cost column (column P), in ten-thousand-unit denomination.
pub const PLATFORM_COST_COLUMN: usize = 15;

/// Platform supply-capacity column (column R).
pub const PLATFORM_SUPPLY_COLUMN: usize = 17;

/// The workbook stores platform capacity cost in units of 10,000 NTD.
pub const COST_DENOMINATION: f64 = 10_000.0;

/// First unit-table row sourced from the trading platform; rows before this
/// are utility-owned units.
pub const PLATFORM_ROWS_START: usize = 500;

/// Demand grid row holding nationwide demand (Excel row 3).
pub const DEMAND_NATIONWIDE_ROW: usize = 2;

/// Demand grid row holding utility-only demand (Excel row 4).
pub const DEMAND_UTILITY_ROW: usize = 3;

/// Base ROC year of the demand grid; demand for year `y` sits at column
/// [`DEMAND_BASE_COLUMN`]` + (y - DEMAND_BASE_YEAR)`.
pub const DEMAND_BASE_YEAR: u32 = 114;

/// Demand grid column for the base year (column B).
pub const DEMAND_BASE_COLUMN: usize = 1;

/// Inclusive row-index ranges cleared by one exclusion preset.
///
/// Unit-table supply and cost columns are cleared independently; the
/// platform table, when named, has both its cost and capacity cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusionRanges {
    /// Unit-table rows whose supply value is cleared (inclusive).
    pub unit_supply: (usize, usize),
    /// Unit-table rows whose cost value is cleared (inclusive).
    pub unit_cost: (usize, usize),
    /// Platform-table rows cleared entirely (inclusive), if any.
    pub platform: Option<(usize, usize)>,
}

/// Remove every platform-sourced supplier (cost sheet AG502:AH514).
pub const EXCLUDE_PLATFORM_ALL: ExclusionRanges = ExclusionRanges {
    unit_supply: (500, 512),
    unit_cost: (500, 512),
    platform: Some((0, 12)),
};

/// Remove platform storage suppliers (cost sheet AG502:AH512).
pub const EXCLUDE_PLATFORM_STORAGE: ExclusionRanges = ExclusionRanges {
    unit_supply: (500, 510),
    unit_cost: (500, 510),
    platform: Some((0, 10)),
};

/// Remove the platform cogeneration supplier (cost sheet row 513).
pub const EXCLUDE_PLATFORM_COGEN: ExclusionRanges = ExclusionRanges {
    unit_supply: (511, 511),
    unit_cost: (511, 511),
    platform: Some((11, 11)),
};

/// Remove the platform demand-response supplier (cost sheet row 514).
pub const EXCLUDE_PLATFORM_DEMAND_RESPONSE: ExclusionRanges = ExclusionRanges {
    unit_supply: (512, 512),
    unit_cost: (512, 512),
    platform: Some((12, 12)),
};

/// Remove cogeneration and demand-response together (cost sheet AG513:AH514).
pub const EXCLUDE_PLATFORM_COGEN_DEMAND: ExclusionRanges = ExclusionRanges {
    unit_supply: (511, 512),
    unit_cost: (511, 512),
    platform: Some((11, 12)),
};

/// Remove private-commitment obligors (cost sheet AG515:AH601); these have
/// no rows in the platform table.
pub const EXCLUDE_PRIVATE_COMMITMENTS: ExclusionRanges = ExclusionRanges {
    unit_supply: (513, 599),
    unit_cost: (513, 599),
    platform: None,
};
