//! The end-to-end analysis pipeline: load, transform, sort, intersect.
//!
//! Every stage returns a new value; nothing is mutated in place, so repeated
//! runs against the same loaded data are independent by construction.
use crate::curve::{SortedCurve, build_curve};
use crate::demand::{DemandMode, DemandTable};
use crate::exclusion::Exclusion;
use crate::input::load_tables;
use crate::intersection::{Intersection, ZoomWindow, find_intersection, trim_outliers, zoom_window};
use crate::platform::PlatformTable;
use crate::supply::SupplyMode;
use crate::unit::UnitTable;
use crate::units::Megawatts;
use crate::year::year_from_filename;
use anyhow::Result;
use log::info;
use std::path::Path;

/// The user's selections for one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOptions {
    /// Which supply sources contribute to the curve.
    pub supply_mode: SupplyMode,
    /// The active exclusion preset, if any.
    pub exclusion: Option<Exclusion>,
    /// Which demand figure to intersect with.
    pub demand_mode: DemandMode,
    /// Demand value in MW overriding the workbook's demand grid.
    pub demand_override: Option<f64>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            supply_mode: SupplyMode::Total,
            exclusion: None,
            demand_mode: DemandMode::Utility,
            demand_override: None,
        }
    }
}

/// Everything one run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineResult {
    /// The ROC year the run was computed for.
    pub year: u32,
    /// The full sorted curve (authoritative dataset).
    pub curve: SortedCurve,
    /// The outlier-trimmed view used for intersection search and rendering.
    pub trimmed: SortedCurve,
    /// The demand value intersected with.
    pub demand: Megawatts,
    /// The located clearing point.
    pub intersection: Intersection,
    /// Axis ranges for the zoomed sub-plot.
    pub window: ZoomWindow,
}

/// Run the full pipeline against the workbook at `path`.
///
/// The target year is taken from the filename (see
/// [`crate::year::year_from_filename`]).
pub fn run(path: &Path, options: &PipelineOptions) -> Result<PipelineResult> {
    let year = year_from_filename(path);
    info!("Loading workbook {} for year {year}", path.display());
    let (units, platform, demand_table) = load_tables(path, year)?;

    run_from_tables(&units, &platform, &demand_table, options)
}

/// Run the pipeline stages over already-loaded tables.
pub fn run_from_tables(
    units: &UnitTable,
    platform: &PlatformTable,
    demand_table: &DemandTable,
    options: &PipelineOptions,
) -> Result<PipelineResult> {
    let year = units.year;

    let (units, platform) = options.supply_mode.apply(units, platform);
    let units = match options.exclusion {
        Some(exclusion) => {
            info!("Applying exclusion preset: {exclusion}");
            exclusion.apply(&units, &platform).0
        }
        None => units,
    };

    let curve = build_curve(&units)?;
    info!(
        "Curve built: {} steps, {} MW total capacity",
        curve.points.len(),
        curve.total_capacity()
    );

    let demand = match options.demand_override {
        Some(value) => Megawatts::from(value),
        None => demand_table.value(options.demand_mode, year)?,
    };

    let trimmed = trim_outliers(&curve);
    let intersection = find_intersection(&trimmed, demand)?;
    let window = zoom_window(demand, intersection.clearing_cost);
    info!(
        "Demand {demand} MW clears at {:.2} 萬元 (unit: {})",
        intersection.clearing_cost.display_value(),
        if intersection.unit_label.is_empty() {
            "beyond total supply"
        } else {
            &intersection.unit_label
        }
    );

    Ok(PipelineResult {
        year,
        curve,
        trimmed,
        demand,
        intersection,
        window,
    })
}
