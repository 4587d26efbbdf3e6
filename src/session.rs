use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::error::CoreError;
use crate::model::{ConfusionCounts, DistributionParams, MetricsResult, ScoreSample};
use crate::pipeline::stage1_generate::{RandomSource, generate_from};
use crate::pipeline::stage2_metrics::{compute_metrics, tally};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Uninitialized,
    Initialized,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SamplePair {
    pub negatives: ScoreSample,
    pub positives: ScoreSample,
}

/// Parameters drawn by a reset, reported back to the caller for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResetDraw {
    pub negatives: DistributionParams,
    pub positives: DistributionParams,
}

/// Per-user interactive state: the two held samples and the random source
/// that produced them.
///
/// Samples are generated lazily on first access, kept unchanged across
/// threshold changes and replaced wholesale by [`Session::reset_samples`].
/// Nothing here is shared between sessions.
#[derive(Debug)]
pub struct Session<S> {
    source: S,
    config: SessionConfig,
    samples: Option<SamplePair>,
    distribution_reset: bool,
}

impl<S: RandomSource> Session<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            config: SessionConfig::default(),
            samples: None,
            distribution_reset: false,
        }
    }

    pub fn with_config(source: S, config: SessionConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self {
            source,
            config,
            samples: None,
            distribution_reset: false,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> SessionPhase {
        if self.samples.is_some() {
            SessionPhase::Initialized
        } else {
            SessionPhase::Uninitialized
        }
    }

    pub fn samples(&mut self) -> Result<&SamplePair, CoreError> {
        let pair = match self.samples.take() {
            Some(pair) => pair,
            None => self.initial_pair()?,
        };
        Ok(&*self.samples.insert(pair))
    }

    pub fn current_samples(&mut self) -> Result<(&ScoreSample, &ScoreSample), CoreError> {
        let pair = self.samples()?;
        Ok((&pair.negatives, &pair.positives))
    }

    pub fn compute_metrics(&mut self, threshold: f64) -> Result<MetricsResult, CoreError> {
        let pair = self.samples()?;
        compute_metrics(&pair.negatives, &pair.positives, threshold)
    }

    pub fn confusion_counts(&mut self, threshold: f64) -> Result<ConfusionCounts, CoreError> {
        let pair = self.samples()?;
        Ok(tally(&pair.negatives, &pair.positives, threshold))
    }

    /// Draws fresh parameters from the configured reset ranges and replaces
    /// both samples. Valid from either phase; leaves the session initialized.
    pub fn reset_samples(&mut self) -> Result<ResetDraw, CoreError> {
        let ranges = self.config.reset;
        let negatives_mean = self
            .source
            .uniform_int(ranges.negatives_mean.low, ranges.negatives_mean.high);
        let positives_mean = self
            .source
            .uniform_int(ranges.positives_mean.low, ranges.positives_mean.high);
        let negatives_std = self.source.uniform_int(ranges.std_dev.low, ranges.std_dev.high);
        let positives_std = self.source.uniform_int(ranges.std_dev.low, ranges.std_dev.high);
        let negatives_size = self.source.uniform_int(ranges.size.low, ranges.size.high);
        let positives_size = self.source.uniform_int(ranges.size.low, ranges.size.high);

        let draw = ResetDraw {
            negatives: DistributionParams::new(
                negatives_mean as f64,
                negatives_std as f64,
                negatives_size as usize,
            ),
            positives: DistributionParams::new(
                positives_mean as f64,
                positives_std as f64,
                positives_size as usize,
            ),
        };

        let negatives = generate_from(&mut self.source, &draw.negatives)?;
        let positives = generate_from(&mut self.source, &draw.positives)?;
        self.samples = Some(SamplePair {
            negatives,
            positives,
        });
        self.distribution_reset = true;

        info!(
            negatives_mean = draw.negatives.mean,
            negatives_std = draw.negatives.std_dev,
            negatives_size = draw.negatives.size,
            positives_mean = draw.positives.mean,
            positives_std = draw.positives.std_dev,
            positives_size = draw.positives.size,
            "distributions reset"
        );
        Ok(draw)
    }

    pub fn distribution_reset(&self) -> bool {
        self.distribution_reset
    }

    /// Returns whether a reset happened since the last call, clearing the flag.
    pub fn take_distribution_reset(&mut self) -> bool {
        std::mem::take(&mut self.distribution_reset)
    }

    fn initial_pair(&mut self) -> Result<SamplePair, CoreError> {
        let negatives = generate_from(&mut self.source, &self.config.negatives)?;
        let positives = generate_from(&mut self.source, &self.config.positives)?;
        debug!(
            negatives = negatives.len(),
            positives = positives.len(),
            "initialized session samples"
        );
        Ok(SamplePair {
            negatives,
            positives,
        })
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/session.rs"]
mod tests;
