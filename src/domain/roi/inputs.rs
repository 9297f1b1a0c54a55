//! ROI inputs - the three user-adjustable slider values.

use serde::{Deserialize, Serialize};

/// Identifies one of the ROI inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoiInputField {
    AvgHourlyCost,
    HoursSavedPerWeek,
    AutomationUptakeRate,
}

impl RoiInputField {
    pub const ALL: [RoiInputField; 3] = [
        RoiInputField::AvgHourlyCost,
        RoiInputField::HoursSavedPerWeek,
        RoiInputField::AutomationUptakeRate,
    ];

    /// Key used in catalogs and error messages.
    pub fn key(&self) -> &'static str {
        match self {
            RoiInputField::AvgHourlyCost => "avgHourlyCost",
            RoiInputField::HoursSavedPerWeek => "hoursSavedPerWeek",
            RoiInputField::AutomationUptakeRate => "automationUptakeRate",
        }
    }

    /// Value used when the catalog configures no slider for this input.
    pub fn fallback_default(&self) -> f64 {
        match self {
            RoiInputField::AvgHourlyCost => 65.0,
            RoiInputField::HoursSavedPerWeek => 20.0,
            RoiInputField::AutomationUptakeRate => 70.0,
        }
    }
}

/// Slider values feeding the ROI calculation.
///
/// The engine accepts any finite values; range checks belong to whoever
/// collects the input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiInputs {
    pub avg_hourly_cost: f64,
    pub hours_saved_per_week: f64,
    /// Percentage, nominally 0-100.
    pub automation_uptake_rate: f64,
}

impl RoiInputs {
    pub fn new(avg_hourly_cost: f64, hours_saved_per_week: f64, automation_uptake_rate: f64) -> Self {
        Self {
            avg_hourly_cost,
            hours_saved_per_week,
            automation_uptake_rate,
        }
    }

    pub fn get(&self, field: RoiInputField) -> f64 {
        match field {
            RoiInputField::AvgHourlyCost => self.avg_hourly_cost,
            RoiInputField::HoursSavedPerWeek => self.hours_saved_per_week,
            RoiInputField::AutomationUptakeRate => self.automation_uptake_rate,
        }
    }

    pub fn set(&mut self, field: RoiInputField, value: f64) {
        match field {
            RoiInputField::AvgHourlyCost => self.avg_hourly_cost = value,
            RoiInputField::HoursSavedPerWeek => self.hours_saved_per_week = value,
            RoiInputField::AutomationUptakeRate => self.automation_uptake_rate = value,
        }
    }

    /// Returns a copy with every value present in the patch replaced.
    pub fn merged(&self, patch: &RoiInputsPatch) -> Self {
        let mut next = *self;
        for (field, value) in patch.values() {
            next.set(field, value);
        }
        next
    }
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self::new(
            RoiInputField::AvgHourlyCost.fallback_default(),
            RoiInputField::HoursSavedPerWeek.fallback_default(),
            RoiInputField::AutomationUptakeRate.fallback_default(),
        )
    }
}

/// Partial update of the ROI inputs; absent fields stay unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiInputsPatch {
    pub avg_hourly_cost: Option<f64>,
    pub hours_saved_per_week: Option<f64>,
    pub automation_uptake_rate: Option<f64>,
}

impl RoiInputsPatch {
    /// Patch that sets a single field.
    pub fn single(field: RoiInputField, value: f64) -> Self {
        Self::default().with(field, value)
    }

    /// Returns this patch with `field` set to `value`.
    pub fn with(mut self, field: RoiInputField, value: f64) -> Self {
        match field {
            RoiInputField::AvgHourlyCost => self.avg_hourly_cost = Some(value),
            RoiInputField::HoursSavedPerWeek => self.hours_saved_per_week = Some(value),
            RoiInputField::AutomationUptakeRate => self.automation_uptake_rate = Some(value),
        }
        self
    }

    /// The fields this patch sets, with their new values.
    pub fn values(&self) -> impl Iterator<Item = (RoiInputField, f64)> {
        [
            (RoiInputField::AvgHourlyCost, self.avg_hourly_cost),
            (RoiInputField::HoursSavedPerWeek, self.hours_saved_per_week),
            (RoiInputField::AutomationUptakeRate, self.automation_uptake_rate),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.values().next().is_none()
    }
}
