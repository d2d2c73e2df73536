use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::error::InvalidConfiguration;

/// The five values that fully determine a slider's behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    pub name: String,
    #[serde(alias = "minValue")]
    pub min: f32,
    #[serde(alias = "maxValue")]
    pub max: f32,
    pub step: f32,
    #[serde(alias = "initialValue")]
    pub initial: f32,
}

impl SliderSpec {
    pub fn new(name: impl Into<String>, min: f32, max: f32, step: f32, initial: f32) -> Self {
        Self {
            name: name.into(),
            min,
            max,
            step,
            initial,
        }
    }

    fn validate(&self) -> Result<(), InvalidConfiguration> {
        let name = || self.name.clone();

        if ![self.min, self.max, self.step, self.initial]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(InvalidConfiguration::NonFiniteBound { name: name() });
        }
        if self.min > self.max {
            return Err(InvalidConfiguration::InvertedRange {
                name: name(),
                min: self.min,
                max: self.max,
            });
        }
        if self.step <= 0.0 {
            return Err(InvalidConfiguration::NonPositiveStep {
                name: name(),
                step: self.step,
            });
        }
        if !(self.min..=self.max).contains(&self.initial) {
            return Err(InvalidConfiguration::InitialOutOfRange {
                name: name(),
                value: self.initial,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// One tunable scalar. `min_value <= value() <= max_value` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSlider {
    name: String,
    min_value: f32,
    max_value: f32,
    step: f32,
    current_value: f32,
}

impl ParameterSlider {
    pub fn new(spec: SliderSpec) -> Result<Self, InvalidConfiguration> {
        spec.validate()?;

        Ok(Self {
            name: spec.name,
            min_value: spec.min,
            max_value: spec.max,
            step: spec.step,
            current_value: spec.initial,
        })
    }

    /// Clamp `value` into range and store it.
    ///
    /// Returns `true` only when the stored value actually changed; that
    /// return is the change signal the owning stack turns into a
    /// notification. NaN is ignored.
    pub fn set_value(&mut self, value: f32) -> bool {
        if value.is_nan() {
            return false;
        }

        let clamped = value.clamp(self.min_value, self.max_value);
        if clamped == self.current_value {
            return false;
        }

        self.current_value = clamped;
        true
    }

    pub fn value(&self) -> f32 {
        self.current_value
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_value(&self) -> f32 {
        self.min_value
    }

    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn range(&self) -> RangeInclusive<f32> {
        self.min_value..=self.max_value
    }

    /// A slider whose range collapsed to a single value
    pub fn is_fixed(&self) -> bool {
        self.min_value == self.max_value
    }
}
