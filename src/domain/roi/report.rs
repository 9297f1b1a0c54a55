//! ROI report - calculation plus display-ready KPI strings.

use serde::{Deserialize, Serialize};

use super::formatting::{format_currency, format_hours};
use super::{RoiCalculation, RoiCalculator, RoiInputs, YearProjection};
use crate::domain::cart::AccumulatedSavings;

/// Formatted KPI tiles for the executive summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiKpis {
    pub time_saved: String,
    pub annual_roi: String,
    pub payback: String,
    pub implementation_time: String,
    pub scaling_without_overhead: String,
}

/// Formatted projection row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub year: u8,
    pub net_roi: String,
    pub cumulative: String,
}

/// Everything the summary, share and export surfaces need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiReport {
    pub inputs: RoiInputs,
    pub accumulated: AccumulatedSavings,
    pub calculation: RoiCalculation,
    pub projection: Vec<YearProjection>,
    pub kpis: RoiKpis,
    pub projection_rows: Vec<ProjectionRow>,
}

impl RoiReport {
    /// Runs the calculator and formats the result.
    pub fn build(inputs: RoiInputs, accumulated: AccumulatedSavings) -> Self {
        let calculation = RoiCalculator::calculate_full_roi(&inputs, &accumulated);
        let projection = calculation.yearly_projection();

        let kpis = RoiKpis {
            time_saved: format_hours(calculation.estimated_time_saved_per_year as f64),
            annual_roi: format_currency(calculation.estimated_annual_roi as f64),
            payback: calculation.estimated_payback_period.to_string(),
            implementation_time: format!("{} hrs", calculation.estimated_implementation_time),
            scaling_without_overhead: format_currency(calculation.scaling_without_overhead as f64),
        };

        let projection_rows = projection
            .iter()
            .map(|row| ProjectionRow {
                year: row.year.number(),
                net_roi: format_currency(row.net_roi as f64),
                cumulative: format_currency(row.cumulative as f64),
            })
            .collect();

        Self {
            inputs,
            accumulated,
            calculation,
            projection,
            kpis,
            projection_rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accumulated() -> AccumulatedSavings {
        AccumulatedSavings {
            total_hours_per_week: 20.0,
            total_dollars_per_year: 52000.0,
            total_impl_hours: 40,
            total_cost_usd: 15000,
        }
    }

    #[test]
    fn build_formats_kpis() {
        let report = RoiReport::build(RoiInputs::new(65.0, 20.0, 70.0), accumulated());

        assert_eq!(report.kpis.time_saved, "700 hrs");
        assert_eq!(report.kpis.annual_roi, "$45,500");
        assert_eq!(report.kpis.payback, "4.0 mo");
        assert_eq!(report.kpis.implementation_time, "40 hrs");
        assert_eq!(report.kpis.scaling_without_overhead, "$42,500");
    }

    #[test]
    fn build_formats_projection_rows() {
        let report = RoiReport::build(RoiInputs::new(65.0, 20.0, 70.0), accumulated());

        assert_eq!(report.projection_rows.len(), 3);
        assert_eq!(report.projection_rows[0].year, 1);
        assert_eq!(report.projection_rows[0].net_roi, "$28,250");
    }

    #[test]
    fn zero_savings_reports_na_payback_and_loss() {
        let report = RoiReport::build(RoiInputs::new(65.0, 20.0, 0.0), accumulated());
        assert_eq!(report.kpis.payback, "N/A");
        assert_eq!(report.projection_rows[0].net_roi, "-$17,250");
    }
}
