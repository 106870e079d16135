use ndarray::Array1;

use crate::io::configuration::{MAX_TEMPERATURE, MIN_TEMPERATURE, TEMPERATURE_STEPS};
use crate::io::error::{Result, invalid_parameter};

/// Non-increasing sequence of annealing temperatures, hottest first
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureSchedule {
    temperatures: Vec<f64>,
}

impl TemperatureSchedule {
    /// `steps` temperatures evenly spaced between `min` and `max`, from `max` down to `min`
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `steps` is zero, a bound is negative
    /// or not finite, or `min` exceeds `max`.
    pub fn linear(min: f64, max: f64, steps: usize) -> Result<Self> {
        if steps == 0 {
            return Err(invalid_parameter(
                "temperature_steps",
                &steps,
                &"at least one temperature is required",
            ));
        }
        if !min.is_finite() || !max.is_finite() || min < 0.0 {
            return Err(invalid_parameter(
                "temperature",
                &format!("{min}..{max}"),
                &"bounds must be finite and non-negative",
            ));
        }
        if min > max {
            return Err(invalid_parameter(
                "temperature",
                &format!("{min}..{max}"),
                &"minimum exceeds maximum",
            ));
        }

        let ascending = Array1::linspace(min, max, steps);
        Ok(Self {
            temperatures: ascending.iter().rev().copied().collect(),
        })
    }

    /// The fixed ten-step schedule from 2.5 down to 0.2
    ///
    /// # Errors
    ///
    /// Fails only if the configured bounds are inconsistent
    pub fn standard() -> Result<Self> {
        Self::linear(MIN_TEMPERATURE, MAX_TEMPERATURE, TEMPERATURE_STEPS)
    }

    /// Use an explicit list of temperatures
    ///
    /// Zero is allowed and makes that pass purely greedy.
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the list is empty, holds a negative
    /// or non-finite value, or ever increases.
    pub fn from_temperatures(temperatures: Vec<f64>) -> Result<Self> {
        if temperatures.is_empty() {
            return Err(invalid_parameter(
                "temperatures",
                &"[]",
                &"at least one temperature is required",
            ));
        }
        if let Some(bad) = temperatures.iter().find(|t| !t.is_finite() || **t < 0.0) {
            return Err(invalid_parameter(
                "temperatures",
                bad,
                &"temperatures must be finite and non-negative",
            ));
        }
        if temperatures.windows(2).any(|pair| matches!(pair, [a, b] if b > a)) {
            return Err(invalid_parameter(
                "temperatures",
                &format!("{temperatures:?}"),
                &"temperatures must not increase",
            ));
        }

        Ok(Self { temperatures })
    }

    /// Temperatures in visiting order
    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    /// Temperature at position `index`
    pub fn get(&self, index: usize) -> Option<f64> {
        self.temperatures.get(index).copied()
    }

    /// Number of temperatures
    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    /// Whether the schedule is empty, which validated schedules never are
    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }
}
