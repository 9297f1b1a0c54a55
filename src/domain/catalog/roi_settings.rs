//! ROI slider configuration and the presentation-side range checks.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Suggestion;
use crate::domain::foundation::ValidationError;
use crate::domain::roi::{RoiInputField, RoiInputs};

/// A user-adjustable ROI input with its allowed range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiSlider {
    pub id: RoiInputField,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl RoiSlider {
    /// Returns true if the value lies inside the slider range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let field = self.id.key();
        if self.step.is_nan() || self.step <= 0.0 {
            return Err(ValidationError::invalid_format(field, "step must be positive"));
        }
        if self.min > self.max {
            return Err(ValidationError::invalid_format(field, "min exceeds max"));
        }
        if !self.contains(self.default) {
            return Err(ValidationError::out_of_range(
                field,
                self.min,
                self.max,
                self.default,
            ));
        }
        Ok(())
    }
}

/// ROI section of the catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoiSettings {
    /// Methodology notes shown next to the calculator.
    #[serde(default)]
    pub assumptions: BTreeMap<String, String>,
    #[serde(default)]
    pub sliders: Vec<RoiSlider>,
    /// Value/cost optimization suggestions for the summary page.
    #[serde(default)]
    pub value_suggestions: Vec<Suggestion>,
}

impl RoiSettings {
    /// Finds the slider configured for an input.
    pub fn slider(&self, field: RoiInputField) -> Option<&RoiSlider> {
        self.sliders.iter().find(|s| s.id == field)
    }

    /// Initial inputs for a new journey: slider defaults, or the built-in
    /// fallbacks for sliders the catalog leaves out.
    pub fn default_inputs(&self) -> RoiInputs {
        let mut inputs = RoiInputs::default();
        for field in RoiInputField::ALL {
            if let Some(slider) = self.slider(field) {
                inputs.set(field, slider.default);
            }
        }
        inputs
    }

    /// Checks a single input value the way the sliders would constrain it.
    ///
    /// Inputs without a configured slider only need to be finite and
    /// non-negative; the uptake rate is additionally capped at 100%.
    pub fn validate_value(&self, field: RoiInputField, value: f64) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(field.key(), "must be a finite number"));
        }
        match self.slider(field) {
            Some(slider) if !slider.contains(value) => Err(ValidationError::out_of_range(
                field.key(),
                slider.min,
                slider.max,
                value,
            )),
            Some(_) => Ok(()),
            None => {
                let max = match field {
                    RoiInputField::AutomationUptakeRate => 100.0,
                    _ => f64::MAX,
                };
                if value < 0.0 || value > max {
                    Err(ValidationError::out_of_range(field.key(), 0.0, max, value))
                } else {
                    Ok(())
                }
            }
        }
    }

    pub(super) fn validate(&self) -> Result<(), ValidationError> {
        for (i, slider) in self.sliders.iter().enumerate() {
            slider.validate()?;
            if self.sliders[..i].iter().any(|s| s.id == slider.id) {
                return Err(ValidationError::invalid_format(
                    "roi.sliders",
                    format!("duplicate slider '{}'", slider.id.key()),
                ));
            }
        }
        Ok(())
    }
}
