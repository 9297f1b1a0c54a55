//! ROI Calculator - annual savings, payback and the three-year projection.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{PaybackPeriod, RoiCalculation, RoiInputs};
use crate::domain::cart::AccumulatedSavings;
use crate::domain::foundation::ValidationError;

/// Working weeks per year, net of holidays and PTO.
pub const WORK_WEEKS_PER_YEAR: f64 = 50.0;

/// Annual maintenance as a fraction of the one-time implementation cost.
pub const MAINTENANCE_RATE: f64 = 0.15;

/// Adoption multiplier applied to savings in year 2.
pub const YEAR_2_ADOPTION_MULTIPLIER: f64 = 1.15;

/// Adoption multiplier applied to savings in year 3.
pub const YEAR_3_ADOPTION_MULTIPLIER: f64 = 1.25;

/// Yearly cost of one additional full-time hire.
pub const FULLY_LOADED_HIRE_COST: f64 = 85_000.0;

/// Hours in one full-time-equivalent year (40 h/week for 50 weeks).
pub const FTE_HOURS_PER_YEAR: f64 = 40.0 * 50.0;

/// Year within the three-year projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ProjectionYear {
    One,
    Two,
    Three,
}

impl ProjectionYear {
    pub const ALL: [ProjectionYear; 3] = [ProjectionYear::One, ProjectionYear::Two, ProjectionYear::Three];

    /// Multiplier applied to the savings side for this year.
    pub fn adoption_multiplier(&self) -> f64 {
        match self {
            ProjectionYear::One => 1.0,
            ProjectionYear::Two => YEAR_2_ADOPTION_MULTIPLIER,
            ProjectionYear::Three => YEAR_3_ADOPTION_MULTIPLIER,
        }
    }

    /// Only the first year carries the one-time implementation cost.
    pub fn includes_implementation_cost(&self) -> bool {
        matches!(self, ProjectionYear::One)
    }

    pub fn number(&self) -> u8 {
        match self {
            ProjectionYear::One => 1,
            ProjectionYear::Two => 2,
            ProjectionYear::Three => 3,
        }
    }
}

impl TryFrom<u8> for ProjectionYear {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ProjectionYear::One),
            2 => Ok(ProjectionYear::Two),
            3 => Ok(ProjectionYear::Three),
            other => Err(ValidationError::out_of_range("year", 1.0, 3.0, other as f64)),
        }
    }
}

impl From<ProjectionYear> for u8 {
    fn from(year: ProjectionYear) -> Self {
        year.number()
    }
}

impl fmt::Display for ProjectionYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Year {}", self.number())
    }
}

/// Rounds to the nearest integer with halves going towards positive infinity.
///
/// `-2.5` becomes `-2`, unlike `f64::round`.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Converts a rounded amount to whole units. Non-finite values saturate
/// (NaN becomes 0).
fn whole_units(value: f64) -> i64 {
    round_half_up(value) as i64
}

/// Pure ROI math. Total over finite inputs; never fails.
pub struct RoiCalculator;

impl RoiCalculator {
    /// Hours saved per year at the given adoption percentage.
    ///
    /// No clamping: adoption outside 0-100 scales linearly.
    pub fn annual_hours_saved(hours_per_week: f64, adoption_rate_percent: f64) -> f64 {
        let effective_rate = adoption_rate_percent / 100.0;
        hours_per_week * WORK_WEEKS_PER_YEAR * effective_rate
    }

    /// Dollar value of the hours saved.
    pub fn annual_dollar_savings(annual_hours: f64, hourly_rate: f64) -> f64 {
        annual_hours * hourly_rate
    }

    /// Months until the implementation cost is recovered, to one decimal.
    ///
    /// # Edge Cases
    /// - Savings of zero or less: [`PaybackPeriod::NEVER`]
    /// - Zero cost with positive savings: 0 months
    pub fn payback_period_months(implementation_cost: f64, annual_savings: f64) -> PaybackPeriod {
        if annual_savings.is_nan() || annual_savings <= 0.0 {
            return PaybackPeriod::NEVER;
        }
        let months = (implementation_cost / annual_savings) * 12.0;
        PaybackPeriod::from_months(round_half_up(months * 10.0) / 10.0)
    }

    /// Net return for one projection year.
    ///
    /// Maintenance is charged every year; the implementation cost only in
    /// year one. The adoption multiplier applies to savings only.
    pub fn net_roi_for_year(annual_savings: f64, implementation_cost: f64, year: ProjectionYear) -> f64 {
        let maintenance_cost = implementation_cost * MAINTENANCE_RATE;
        let effective_savings = annual_savings * year.adoption_multiplier();

        if year.includes_implementation_cost() {
            effective_savings - implementation_cost - maintenance_cost
        } else {
            effective_savings - maintenance_cost
        }
    }

    /// Value of the hiring avoided by saving `hours_per_week`, in whole dollars.
    ///
    /// Reported separately; never part of the annual ROI.
    pub fn scaling_without_overhead(hours_per_week: f64) -> i64 {
        let fte_equivalent = (hours_per_week * WORK_WEEKS_PER_YEAR) / FTE_HOURS_PER_YEAR;
        whole_units(fte_equivalent * FULLY_LOADED_HIRE_COST)
    }

    /// Full projection.
    ///
    /// Hours and dollar savings come from the slider inputs. Cost, payback
    /// and implementation time come from the cart totals.
    pub fn calculate_full_roi(inputs: &RoiInputs, savings: &AccumulatedSavings) -> RoiCalculation {
        let annual_hours = Self::annual_hours_saved(inputs.hours_saved_per_week, inputs.automation_uptake_rate);
        let annual_dollars = Self::annual_dollar_savings(annual_hours, inputs.avg_hourly_cost);
        let implementation_cost = savings.total_cost_usd as f64;

        let payback = Self::payback_period_months(implementation_cost, annual_dollars);
        let net = |year| whole_units(Self::net_roi_for_year(annual_dollars, implementation_cost, year));

        RoiCalculation {
            estimated_time_saved_per_year: whole_units(annual_hours),
            estimated_annual_roi: whole_units(annual_dollars),
            estimated_payback_period: payback,
            estimated_implementation_time: savings.total_impl_hours,
            net_annual_roi_year1: net(ProjectionYear::One),
            net_annual_roi_year2: net(ProjectionYear::Two),
            net_annual_roi_year3: net(ProjectionYear::Three),
            scaling_without_overhead: Self::scaling_without_overhead(inputs.hours_saved_per_week),
        }
    }
}
