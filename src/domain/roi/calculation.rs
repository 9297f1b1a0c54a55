//! ROI calculation result and its three-year projection.

use serde::{Deserialize, Serialize};

use super::{PaybackPeriod, ProjectionYear};

/// Output of [`RoiCalculator::calculate_full_roi`](super::RoiCalculator::calculate_full_roi).
///
/// Whole units everywhere except the payback period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiCalculation {
    /// Hours per year.
    pub estimated_time_saved_per_year: i64,
    /// Dollars per year.
    pub estimated_annual_roi: i64,
    pub estimated_payback_period: PaybackPeriod,
    /// Hours, taken from the cart.
    pub estimated_implementation_time: u64,
    pub net_annual_roi_year1: i64,
    pub net_annual_roi_year2: i64,
    pub net_annual_roi_year3: i64,
    /// Avoided-hiring value. Not part of the annual ROI.
    pub scaling_without_overhead: i64,
}

/// One row of the projection table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearProjection {
    pub year: ProjectionYear,
    pub net_roi: i64,
    pub cumulative: i64,
}

impl RoiCalculation {
    pub fn net_roi_for(&self, year: ProjectionYear) -> i64 {
        match year {
            ProjectionYear::One => self.net_annual_roi_year1,
            ProjectionYear::Two => self.net_annual_roi_year2,
            ProjectionYear::Three => self.net_annual_roi_year3,
        }
    }

    /// Sum of net ROI from year one through `year`.
    pub fn cumulative_net_roi(&self, year: ProjectionYear) -> i64 {
        ProjectionYear::ALL
            .iter()
            .filter(|y| **y <= year)
            .map(|y| self.net_roi_for(*y))
            .fold(0i64, i64::saturating_add)
    }

    /// Rows for years one to three.
    pub fn yearly_projection(&self) -> Vec<YearProjection> {
        ProjectionYear::ALL
            .iter()
            .map(|&year| YearProjection {
                year,
                net_roi: self.net_roi_for(year),
                cumulative: self.cumulative_net_roi(year),
            })
            .collect()
    }
}
