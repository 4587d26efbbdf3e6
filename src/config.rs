use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, CoreError};
use crate::model::{DistributionParams, MAX_SAMPLE_SIZE};

pub const DEFAULT_HISTOGRAM_BINS: usize = 50;
pub const MAX_HISTOGRAM_BINS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub low: u32,
    pub high: u32,
}

impl IntRange {
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, v: u32) -> bool {
        self.low <= v && v <= self.high
    }

    fn check(&self, name: &str, min_low: u32) -> Result<(), CoreError> {
        if self.low > self.high {
            return Err(CoreError::InvalidConfig(format!(
                "{name}: low {} exceeds high {}",
                self.low, self.high
            )));
        }
        if self.low < min_low {
            return Err(CoreError::InvalidConfig(format!(
                "{name}: low must be at least {min_low}, got {}",
                self.low
            )));
        }
        Ok(())
    }
}

/// Inclusive integer ranges the reset action draws fresh parameters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResetRanges {
    pub negatives_mean: IntRange,
    pub positives_mean: IntRange,
    pub std_dev: IntRange,
    pub size: IntRange,
}

impl Default for ResetRanges {
    fn default() -> Self {
        Self {
            negatives_mean: IntRange::new(10, 60),
            positives_mean: IntRange::new(40, 80),
            std_dev: IntRange::new(1, 20),
            size: IntRange::new(300, 1500),
        }
    }
}

impl ResetRanges {
    pub fn validate(&self) -> Result<(), CoreError> {
        self.negatives_mean.check("reset.negatives_mean", 0)?;
        self.positives_mean.check("reset.positives_mean", 0)?;
        self.std_dev.check("reset.std_dev", 1)?;
        self.size.check("reset.size", 1)?;
        if self.size.high as usize > MAX_SAMPLE_SIZE {
            return Err(CoreError::InvalidConfig(format!(
                "reset.size: high must be at most {MAX_SAMPLE_SIZE}, got {}",
                self.size.high
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub initial: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            initial: 5.0,
        }
    }
}

impl SliderConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(CoreError::InvalidConfig(format!(
                "slider: invalid bounds [{}, {}]",
                self.min, self.max
            )));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(CoreError::InvalidConfig(format!(
                "slider: step must be > 0, got {}",
                self.step
            )));
        }
        Ok(())
    }

    /// Clamps `value` into the slider bounds and rounds it to the nearest step.
    pub fn snap(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    pub fn initial_value(&self) -> f64 {
        self.snap(self.initial)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub negatives: DistributionParams,
    pub positives: DistributionParams,
    pub reset: ResetRanges,
    pub slider: SliderConfig,
    pub histogram_bins: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            negatives: DistributionParams::not_at_risk_v1(),
            positives: DistributionParams::at_risk_v1(),
            reset: ResetRanges::default(),
            slider: SliderConfig::default(),
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        self.negatives
            .validate()
            .map_err(|e| CoreError::InvalidConfig(format!("negatives: {e}")))?;
        self.positives
            .validate()
            .map_err(|e| CoreError::InvalidConfig(format!("positives: {e}")))?;
        self.reset.validate()?;
        self.slider.validate()?;
        if self.histogram_bins == 0 {
            return Err(CoreError::InvalidConfig(
                "histogram_bins must be at least 1".to_string(),
            ));
        }
        if self.histogram_bins > MAX_HISTOGRAM_BINS {
            return Err(CoreError::InvalidConfig(format!(
                "histogram_bins must be at most {MAX_HISTOGRAM_BINS}, got {}",
                self.histogram_bins
            )));
        }
        Ok(())
    }

    pub fn from_json(text: &str) -> Result<Self, AppError> {
        let config: SessionConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
