//! Payback period value object.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Months until the implementation cost is recovered.
///
/// Positive infinity means break-even never happens (no positive savings).
/// JSON has no infinity, so that case serializes as `null`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PaybackPeriod(f64);

impl PaybackPeriod {
    /// Break-even never occurs.
    pub const NEVER: Self = Self(f64::INFINITY);

    pub fn from_months(months: f64) -> Self {
        Self(months)
    }

    /// Raw month count; `f64::INFINITY` for [`PaybackPeriod::NEVER`].
    pub fn months(&self) -> f64 {
        self.0
    }

    pub fn is_never(&self) -> bool {
        self.0.is_infinite() && self.0.is_sign_positive()
    }
}

impl fmt::Display for PaybackPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_never() {
            write!(f, "N/A")
        } else {
            write!(f, "{:.1} mo", self.0)
        }
    }
}

impl Serialize for PaybackPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            serializer.serialize_some(&self.0)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de> Deserialize<'de> for PaybackPeriod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let months = Option::<f64>::deserialize(deserializer)?;
        Ok(months.map(Self).unwrap_or(Self::NEVER))
    }
}
