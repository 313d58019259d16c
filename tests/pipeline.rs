//! Integration tests running the full pipeline against a synthesised workbook.
use float_cmp::assert_approx_eq;
use meritcurve::cli::{RunOpts, handle_run_command};
use meritcurve::demand::DemandMode;
use meritcurve::exclusion::Exclusion;
use meritcurve::pipeline::{PipelineOptions, run};
use meritcurve::supply::SupplyMode;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Build a miniature but layout-faithful workbook: five utility units of
/// 1000 MW at 10–50 萬元, one platform storage participant embedded at unit
/// row 500, a matching platform supplier row and a demand grid for year 116.
fn write_workbook(dir: &Path, file_name: &str) -> PathBuf {
    let mut workbook = Workbook::new();

    let cost_sheet = workbook.add_worksheet();
    cost_sheet.set_name("達成年成本資料(112成本參考)").unwrap();
    cost_sheet.write_string(2, 39, "116供電整理").unwrap();
    cost_sheet.write_string(2, 40, "116容量成本").unwrap();
    for i in 0..5u32 {
        let row = 3 + i;
        cost_sheet
            .write_string(row, 0, format!("電廠{i}"))
            .unwrap();
        cost_sheet.write_number(row, 1, (i + 1) as f64).unwrap();
        cost_sheet.write_number(row, 39, 1000.0).unwrap();
        cost_sheet
            .write_number(row, 40, (i + 1) as f64 * 100_000.0)
            .unwrap();
    }
    // Platform storage participant at unit row index 500 (sheet row 503)
    cost_sheet.write_string(503, 0, "平台儲能").unwrap();
    cost_sheet.write_number(503, 39, 500.0).unwrap();
    cost_sheet.write_number(503, 40, 600_000.0).unwrap();

    let supply_sheet = workbook.add_worksheet();
    supply_sheet.set_name("達成年供需圖").unwrap();
    supply_sheet.write_string(12, 14, "平台儲能").unwrap();
    supply_sheet.write_number(12, 15, 60.0).unwrap(); // 萬元 denomination
    supply_sheet.write_number(12, 17, 500.0).unwrap();

    let demand_sheet = workbook.add_worksheet();
    demand_sheet.set_name("備用需求量(舊法114_117)").unwrap();
    demand_sheet.write_number(2, 3, 6000.0).unwrap(); // nationwide, year 116
    demand_sheet.write_number(3, 3, 1500.0).unwrap(); // utility, year 116

    let path = dir.join(file_name);
    workbook.save(&path).unwrap();

    path
}

#[test]
fn test_run_locates_clearing_point() {
    let dir = TempDir::new().unwrap();
    let path = write_workbook(dir.path(), "capacity-116.xlsx");

    let result = run(&path, &PipelineOptions::default()).unwrap();

    assert_eq!(result.year, 116);
    assert_eq!(result.curve.points.len(), 6);
    assert_approx_eq!(f64, result.curve.total_capacity().value(), 5500.0);
    assert_approx_eq!(f64, result.demand.value(), 1500.0);

    // 1500 MW falls in the second-cheapest unit's step
    assert_approx_eq!(f64, result.intersection.clearing_cost.value(), 200_000.0);
    assert_eq!(result.intersection.unit_label, "電廠12");
    assert_eq!(result.intersection.interval, Some(1));

    // The most expensive step is above the 99.5th cost percentile
    assert_eq!(result.trimmed.points.len(), 5);

    assert_approx_eq!(f64, result.window.x_range.0, -500.0);
    assert_approx_eq!(f64, result.window.y_range.1, 170.0);
}

#[test]
fn test_run_demand_beyond_total_supply() {
    let dir = TempDir::new().unwrap();
    let path = write_workbook(dir.path(), "capacity-116.xlsx");

    let options = PipelineOptions {
        demand_mode: DemandMode::Nationwide, // 6000 MW, beyond the trimmed curve
        ..PipelineOptions::default()
    };
    let result = run(&path, &options).unwrap();

    assert_approx_eq!(f64, result.intersection.clearing_cost.value(), 500_000.0);
    assert_eq!(result.intersection.unit_label, "");
    assert_eq!(result.intersection.interval, None);
}

#[test]
fn test_run_excluding_platform_suppliers() {
    let dir = TempDir::new().unwrap();
    let path = write_workbook(dir.path(), "capacity-116.xlsx");

    let options = PipelineOptions {
        exclusion: Some(Exclusion::PlatformAll),
        ..PipelineOptions::default()
    };
    let result = run(&path, &options).unwrap();

    // The embedded platform participant is gone from the stack
    assert_eq!(result.curve.points.len(), 5);
    assert_approx_eq!(f64, result.curve.total_capacity().value(), 5000.0);
}

#[test]
fn test_run_utility_only_matches_platform_exclusion() {
    let dir = TempDir::new().unwrap();
    let path = write_workbook(dir.path(), "capacity-116.xlsx");

    let options = PipelineOptions {
        supply_mode: SupplyMode::UtilityOnly,
        ..PipelineOptions::default()
    };
    let result = run(&path, &options).unwrap();
    assert_approx_eq!(f64, result.curve.total_capacity().value(), 5000.0);
}

#[test]
fn test_run_wrong_year_is_schema_error() {
    let dir = TempDir::new().unwrap();
    // Filename says 115, headers say 116
    let path = write_workbook(dir.path(), "capacity-115.xlsx");

    let error = run(&path, &PipelineOptions::default()).unwrap_err();
    assert!(
        error
            .downcast_ref::<meritcurve::input::SchemaError>()
            .is_some()
    );
}

/// An integration test for the `run` command, checking the CSV outputs.
#[test]
fn test_handle_run_command() {
    unsafe { std::env::set_var("MERITCURVE_LOG_LEVEL", "off") };

    let dir = TempDir::new().unwrap();
    let path = write_workbook(dir.path(), "capacity-116.xlsx");
    let output_dir = dir.path().join("results");

    let opts = RunOpts {
        supply_mode: SupplyMode::Total,
        exclude: None,
        demand_mode: DemandMode::Utility,
        demand: None,
        output_dir: Some(output_dir.clone()),
    };
    handle_run_command(&path, &opts, None).unwrap();

    let curve_csv = std::fs::read_to_string(output_dir.join("curve.csv")).unwrap();
    assert_eq!(curve_csv.lines().count(), 7); // header + 6 steps
    assert!(curve_csv.starts_with("position,plant,unit,supply_mw,cost,cumulative_mw"));

    let intersection_csv =
        std::fs::read_to_string(output_dir.join("intersection.csv")).unwrap();
    let data_line = intersection_csv.lines().nth(1).unwrap();
    assert!(data_line.contains("電廠12"));
}
