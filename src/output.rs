//! The module responsible for writing output data to disk.
use crate::curve::SortedCurve;
use crate::pipeline::PipelineResult;
use anyhow::{Context, Result};
use csv;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// The root folder in which workbook-specific output folders will be created
const OUTPUT_DIRECTORY_ROOT: &str = "meritcurve_results";

/// The output file name for the full sorted curve
const CURVE_FILE_NAME: &str = "curve.csv";

/// The output file name for the intersection summary
const INTERSECTION_FILE_NAME: &str = "intersection.csv";

/// Get the output directory for the specified workbook
pub fn get_output_dir(workbook_path: &Path) -> Result<PathBuf> {
    let stem = workbook_path
        .file_stem()
        .context("Workbook path has no file name")?
        .to_str()
        .context("Invalid chars in workbook file name")?;

    Ok([OUTPUT_DIRECTORY_ROOT, stem].iter().collect())
}

/// Create a new output directory, with parents
pub fn create_output_directory(output_dir: &Path) -> Result<()> {
    if output_dir.is_dir() {
        // already exists
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    Ok(())
}

/// Represents one step of the sorted curve in the curve CSV file.
#[derive(Serialize, Debug, PartialEq)]
struct CurveRow {
    position: usize,
    plant: String,
    unit: String,
    supply_mw: f64,
    cost: f64,
    cumulative_mw: f64,
}

impl CurveRow {
    /// Create a new [`CurveRow`] for the curve step at `position`
    fn new(curve: &SortedCurve, position: usize) -> Self {
        let point = &curve.points[position];
        Self {
            position,
            plant: point.plant.clone().unwrap_or_default(),
            unit: point.unit.clone().unwrap_or_default(),
            supply_mw: point.supply_mw.value(),
            cost: point.cost.value(),
            cumulative_mw: point.cumulative_mw.value(),
        }
    }
}

/// Represents the intersection summary row in the intersection CSV file.
#[derive(Serialize, Debug, PartialEq)]
struct IntersectionRow {
    year: u32,
    demand_mw: f64,
    clearing_cost: f64,
    /// Clearing cost in ten-thousand-unit display denomination (萬元)
    clearing_cost_display: f64,
    unit_label: String,
    zoom_x_min: f64,
    zoom_x_max: f64,
    zoom_y_min: f64,
    zoom_y_max: f64,
}

/// Write the full sorted curve and the intersection summary to CSV files in
/// `output_dir`.
pub fn write_results(output_dir: &Path, result: &PipelineResult) -> Result<()> {
    write_curve(&output_dir.join(CURVE_FILE_NAME), &result.curve)?;
    write_intersection(&output_dir.join(INTERSECTION_FILE_NAME), result)?;

    Ok(())
}

/// Write the sorted curve to a CSV file
fn write_curve(file_path: &Path, curve: &SortedCurve) -> Result<()> {
    let mut writer = csv::Writer::from_path(file_path)
        .with_context(|| format!("Failed to create {}", file_path.display()))?;
    for position in 0..curve.points.len() {
        writer.serialize(CurveRow::new(curve, position))?;
    }
    writer.flush()?;

    Ok(())
}

/// Write the intersection summary to a CSV file
fn write_intersection(file_path: &Path, result: &PipelineResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(file_path)
        .with_context(|| format!("Failed to create {}", file_path.display()))?;
    writer.serialize(IntersectionRow {
        year: result.year,
        demand_mw: result.demand.value(),
        clearing_cost: result.intersection.clearing_cost.value(),
        clearing_cost_display: result.intersection.clearing_cost.display_value(),
        unit_label: result.intersection.unit_label.clone(),
        zoom_x_min: result.window.x_range.0,
        zoom_x_max: result.window.x_range.1,
        zoom_y_min: result.window.y_range.0,
        zoom_y_max: result.window.y_range.1,
    })?;
    writer.flush()?;

    Ok(())
}

/// Render the first `rows` curve steps as a preview table (the clearing
/// summary equivalent of the UI's first-300-rows data preview).
pub fn preview(curve: &SortedCurve, rows: usize) -> String {
    let mut out = String::from("position,plant,unit,supply_mw,cost,cumulative_mw\n");
    for (position, point) in curve.points.iter().take(rows).enumerate() {
        out.push_str(&format!(
            "{position},{},{},{},{},{}\n",
            point.plant.as_deref().unwrap_or(""),
            point.unit.as_deref().unwrap_or(""),
            point.supply_mw,
            point.cost,
            point.cumulative_mw
        ));
    }

    out
}
