//! ROI query handlers.

mod calculate_roi;

pub use calculate_roi::{CalculateRoiHandler, CalculateRoiQuery};
