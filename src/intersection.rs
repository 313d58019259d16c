//! Locating the demand/supply intersection on the merit-order curve.
use crate::curve::{EmptyCurveError, SortedCurve};
use crate::units::{Megawatts, Money};
use anyhow::Result;

/// Cost percentile above which curve points are treated as outliers and
/// trimmed before intersection search and rendering.
pub const OUTLIER_PERCENTILE: f64 = 0.995;

/// Zoom window half-width on the capacity axis, in MW.
pub const ZOOM_X_HALF_WIDTH_MW: f64 = 2000.0;

/// Zoom window half-height on the cost axis, in the ten-thousand-unit
/// display denomination (萬元).
pub const ZOOM_Y_HALF_WIDTH: f64 = 150.0;

/// The demand/supply intersection: the clearing point of the curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    /// Cost of the marginal unit, in base currency units.
    pub clearing_cost: Money,
    /// The cumulative-capacity position of the intersection (the demand
    /// value itself).
    pub demand_mw: Megawatts,
    /// Identifying label of the marginal unit; empty when demand exceeds
    /// total supply.
    pub unit_label: String,
    /// Index of the curve step containing demand, or `None` for the
    /// demand-exceeds-supply fallback.
    pub interval: Option<usize>,
}

/// Axis ranges for the zoomed intersection sub-plot. A rendering hint, not a
/// data transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomWindow {
    /// Capacity axis range, in MW.
    pub x_range: (f64, f64),
    /// Cost axis range, in display denomination (萬元).
    pub y_range: (f64, f64),
}

/// Drop curve points whose cost exceeds the 99.5th percentile of curve
/// costs, preserving order and the already-computed cumulative capacities.
///
/// This view exists for intersection search and rendering only; callers keep
/// the full curve as the authoritative dataset.
pub fn trim_outliers(curve: &SortedCurve) -> SortedCurve {
    let Some(threshold) = cost_percentile(curve, OUTLIER_PERCENTILE) else {
        return curve.clone();
    };

    SortedCurve {
        year: curve.year,
        points: curve
            .points
            .iter()
            .filter(|p| p.cost.value() <= threshold)
            .cloned()
            .collect(),
    }
}

/// The interpolated cost percentile of the curve (pandas-style linear
/// interpolation), or `None` for an empty curve.
fn cost_percentile(curve: &SortedCurve, q: f64) -> Option<f64> {
    // Curve points are already sorted ascending by cost
    let costs: Vec<f64> = curve.points.iter().map(|p| p.cost.value()).collect();
    let last = costs.len().checked_sub(1)?;

    let position = q * last as f64;
    let below = position.floor() as usize;
    let above = position.ceil() as usize;
    let fraction = position - below as f64;

    Some(costs[below] + fraction * (costs[above] - costs[below]))
}

/// Find the curve step whose capacity interval contains `demand`.
///
/// Step `i` covers the half-open interval from the cumulative capacity
/// before it (0 for the first step) up to but excluding its own cumulative
/// capacity; a demand exactly on a boundary resolves to the step starting
/// there. If demand lies beyond the last cumulative value the supply stack
/// is exhausted: the last step's cost is returned with no unit label rather
/// than an error.
pub fn find_intersection(curve: &SortedCurve, demand: Megawatts) -> Result<Intersection> {
    let last = curve.points.last().ok_or(EmptyCurveError)?;

    let mut lower = 0.0;
    for (i, point) in curve.points.iter().enumerate() {
        let upper = point.cumulative_mw.value();
        if lower <= demand.value() && demand.value() < upper {
            return Ok(Intersection {
                clearing_cost: point.cost,
                demand_mw: demand,
                unit_label: point.label(),
                interval: Some(i),
            });
        }
        lower = upper;
    }

    // Demand exceeds total supply
    Ok(Intersection {
        clearing_cost: last.cost,
        demand_mw: demand,
        unit_label: String::new(),
        interval: None,
    })
}

/// The fixed-size axis window for the zoomed sub-plot: ±2000 MW around
/// demand, ±150 萬元 around the clearing price.
pub fn zoom_window(demand: Megawatts, clearing_cost: Money) -> ZoomWindow {
    let y_centre = clearing_cost.display_value();
    ZoomWindow {
        x_range: (
            demand.value() - ZOOM_X_HALF_WIDTH_MW,
            demand.value() + ZOOM_X_HALF_WIDTH_MW,
        ),
        y_range: (y_centre - ZOOM_Y_HALF_WIDTH, y_centre + ZOOM_Y_HALF_WIDTH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::build_curve;
    use crate::fixture::simple_curve;
    use crate::unit::UnitTable;
    use float_cmp::assert_approx_eq;
    use rstest::rstest;

    #[rstest]
    fn test_intersection_mid_interval(simple_curve: SortedCurve) {
        // Costs [10, 20, 30] * 10000, supply [100, 100, 100]
        let result = find_intersection(&simple_curve, Megawatts::from(150.0)).unwrap();
        assert_approx_eq!(f64, result.clearing_cost.display_value(), 20.0);
        assert_eq!(result.interval, Some(1));
        assert_eq!(result.unit_label, "電廠1機組1");
    }

    #[rstest]
    fn test_intersection_on_boundary(simple_curve: SortedCurve) {
        // Lower bound is inclusive: a demand exactly at a cumulative
        // boundary resolves to the step starting there
        let result = find_intersection(&simple_curve, Megawatts::from(100.0)).unwrap();
        assert_approx_eq!(f64, result.clearing_cost.display_value(), 20.0);
        assert_eq!(result.interval, Some(1));
    }

    #[rstest]
    fn test_intersection_below_first_step(simple_curve: SortedCurve) {
        let result = find_intersection(&simple_curve, Megawatts::from(50.0)).unwrap();
        assert_approx_eq!(f64, result.clearing_cost.display_value(), 10.0);
        assert_eq!(result.interval, Some(0));
    }

    #[rstest]
    fn test_intersection_beyond_total_supply(simple_curve: SortedCurve) {
        let result = find_intersection(&simple_curve, Megawatts::from(350.0)).unwrap();
        assert_approx_eq!(f64, result.clearing_cost.display_value(), 30.0);
        assert_eq!(result.unit_label, "");
        assert_eq!(result.interval, None);
    }

    #[rstest]
    fn test_intersection_is_idempotent(simple_curve: SortedCurve) {
        let demand = Megawatts::from(150.0);
        let first = find_intersection(&simple_curve, demand).unwrap();
        let second = find_intersection(&simple_curve, demand).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_trim_removes_only_the_outlier() {
        // 300 steps at a flat cost plus one far outlier: the interpolated
        // threshold lands on the flat cost, so exactly the outlier goes and
        // relative order is untouched
        let rows = (0..301)
            .map(|i| {
                let mut row = crate::fixture::unit_row(i);
                row.supply_mw = Some(Megawatts::from(10.0));
                row.cost = Some(Money::from(if i == 300 { 5e8 } else { 500_000.0 }));
                row
            })
            .collect();
        let curve = build_curve(&UnitTable { year: 116, rows }).unwrap();

        let trimmed = trim_outliers(&curve);
        assert_eq!(trimmed.points.len(), 300);
        assert_eq!(trimmed.points[..], curve.points[..300]);
    }

    #[rstest]
    fn test_trim_uses_interpolated_percentile(simple_curve: SortedCurve) {
        // Costs [10, 20, 30] 萬元: the interpolated 99.5th percentile is
        // 29.9 萬元, so the top step is above it and gets trimmed
        let trimmed = trim_outliers(&simple_curve);
        assert_eq!(trimmed.points.len(), 2);
        assert_eq!(trimmed.points[..], simple_curve.points[..2]);
    }

    #[test]
    fn test_zoom_window() {
        let window = zoom_window(Megawatts::from(36_000.0), Money::from(1_200_000.0));
        assert_approx_eq!(f64, window.x_range.0, 34_000.0);
        assert_approx_eq!(f64, window.x_range.1, 38_000.0);
        assert_approx_eq!(f64, window.y_range.0, -30.0);
        assert_approx_eq!(f64, window.y_range.1, 270.0);
    }
}
