use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

use crate::error::CoreError;
use crate::model::{DistributionParams, MAX_SAMPLE_SIZE, ScoreSample};

/// Source of randomness the core draws from.
///
/// Any `rand::Rng` qualifies, so callers choose between OS-seeded and
/// explicitly seeded generators.
pub trait RandomSource {
    fn normal_values(
        &mut self,
        mean: f64,
        std_dev: f64,
        size: usize,
    ) -> Result<Vec<f64>, CoreError>;

    /// Uniform integer from the inclusive range `[low, high]`. Requires `low <= high`.
    fn uniform_int(&mut self, low: u32, high: u32) -> u32;
}

impl<R: Rng> RandomSource for R {
    fn normal_values(
        &mut self,
        mean: f64,
        std_dev: f64,
        size: usize,
    ) -> Result<Vec<f64>, CoreError> {
        let normal =
            Normal::new(mean, std_dev).map_err(|e| CoreError::InvalidParameter(e.to_string()))?;
        let mut out = Vec::with_capacity(size.min(MAX_SAMPLE_SIZE));
        for _ in 0..size {
            out.push(normal.sample(&mut *self));
        }
        Ok(out)
    }

    fn uniform_int(&mut self, low: u32, high: u32) -> u32 {
        self.random_range(low..=high)
    }
}

/// Draws `size` independent scores from N(mean, std_dev).
///
/// Preconditions: `std_dev > 0` and `size >= 1`; violations are reported as
/// [`CoreError::InvalidParameter`] before any entropy is consumed.
pub fn generate<S: RandomSource>(
    source: &mut S,
    mean: f64,
    std_dev: f64,
    size: usize,
) -> Result<ScoreSample, CoreError> {
    generate_from(source, &DistributionParams::new(mean, std_dev, size))
}

pub fn generate_from<S: RandomSource>(
    source: &mut S,
    params: &DistributionParams,
) -> Result<ScoreSample, CoreError> {
    params.validate()?;
    let values = source.normal_values(params.mean, params.std_dev, params.size)?;
    debug!(
        mean = params.mean,
        std_dev = params.std_dev,
        size = params.size,
        "generated score sample"
    );
    Ok(ScoreSample::new(values))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_generate.rs"]
mod tests;
