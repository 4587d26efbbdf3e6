use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const DEFAULT_SAMPLE_SIZE: usize = 1000;
pub const MAX_SAMPLE_SIZE: usize = 10_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionParams {
    pub mean: f64,
    pub std_dev: f64,
    #[serde(default = "default_size")]
    pub size: usize,
}

fn default_size() -> usize {
    DEFAULT_SAMPLE_SIZE
}

impl DistributionParams {
    pub fn new(mean: f64, std_dev: f64, size: usize) -> Self {
        Self {
            mean,
            std_dev,
            size,
        }
    }

    pub fn with_default_size(mean: f64, std_dev: f64) -> Self {
        Self::new(mean, std_dev, DEFAULT_SAMPLE_SIZE)
    }

    pub fn not_at_risk_v1() -> Self {
        Self::new(35.0, 12.0, 1000)
    }

    pub fn at_risk_v1() -> Self {
        Self::new(65.0, 12.0, 300)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.mean.is_finite() {
            return Err(CoreError::InvalidParameter(format!(
                "mean must be finite, got {}",
                self.mean
            )));
        }
        if !self.std_dev.is_finite() || self.std_dev <= 0.0 {
            return Err(CoreError::InvalidParameter(format!(
                "standard deviation must be a finite value > 0, got {}",
                self.std_dev
            )));
        }
        if self.size < 1 {
            return Err(CoreError::InvalidParameter(
                "size must be at least 1".to_string(),
            ));
        }
        if self.size > MAX_SAMPLE_SIZE {
            return Err(CoreError::InvalidParameter(format!(
                "size must be at most {MAX_SAMPLE_SIZE}, got {}",
                self.size
            )));
        }
        Ok(())
    }
}
