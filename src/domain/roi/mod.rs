//! ROI module - pure calculation engine and its display helpers.
//!
//! Nothing here performs I/O. Persistence, CRM and export consume the
//! [`RoiCalculation`] and [`RoiReport`] values after the fact.

mod calculation;
mod calculator;
mod formatting;
mod inputs;
mod payback;
mod report;

pub use calculation::{RoiCalculation, YearProjection};
pub use calculator::{
    round_half_up, ProjectionYear, RoiCalculator, FTE_HOURS_PER_YEAR, FULLY_LOADED_HIRE_COST,
    MAINTENANCE_RATE, WORK_WEEKS_PER_YEAR, YEAR_2_ADOPTION_MULTIPLIER, YEAR_3_ADOPTION_MULTIPLIER,
};
pub use formatting::{format_currency, format_hours, format_number};
pub use inputs::{RoiInputField, RoiInputs, RoiInputsPatch};
pub use payback::PaybackPeriod;
pub use report::{ProjectionRow, RoiKpis, RoiReport};
