use serde::Serialize;

use crate::error::CoreError;
use crate::model::{ConfusionCounts, MetricsResult, SampleClass};
use crate::pipeline::stage1_generate::RandomSource;
use crate::pipeline::stage2_metrics::{rates, tally};
use crate::report::SampleSummary;
use crate::report::histogram::Histogram;
use crate::session::Session;

pub const MAX_SWEEP_POINTS: usize = 10_000;

/// Everything the presentation layer needs for one interaction pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    pub threshold: f64,
    pub distribution_reset: bool,
    pub counts: ConfusionCounts,
    pub metrics: MetricsResult,
    pub negatives: SampleSummary,
    pub positives: SampleSummary,
    pub histogram: Histogram,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepRow {
    pub threshold: f64,
    pub counts: ConfusionCounts,
    pub metrics: MetricsResult,
}

pub fn build_view<S: RandomSource>(
    session: &mut Session<S>,
    threshold: f64,
) -> Result<ReportView, CoreError> {
    let distribution_reset = session.take_distribution_reset();
    let bins = session.config().histogram_bins;
    let pair = session.samples()?;

    let counts = tally(&pair.negatives, &pair.positives, threshold);
    let metrics = rates(&counts)?;

    Ok(ReportView {
        threshold,
        distribution_reset,
        counts,
        metrics,
        negatives: SampleSummary::from_sample(SampleClass::NotAtRisk, &pair.negatives),
        positives: SampleSummary::from_sample(SampleClass::AtRisk, &pair.positives),
        histogram: Histogram::build(&pair.negatives, &pair.positives, bins),
    })
}

/// Thresholds `from, from + step, ...` up to and including `to`.
pub fn sweep_thresholds(from: f64, to: f64, step: f64) -> Result<Vec<f64>, CoreError> {
    if !from.is_finite() || !to.is_finite() || from > to {
        return Err(CoreError::InvalidParameter(format!(
            "invalid sweep range [{from}, {to}]"
        )));
    }
    if !step.is_finite() || step <= 0.0 {
        return Err(CoreError::InvalidParameter(format!(
            "sweep step must be > 0, got {step}"
        )));
    }
    let n = ((to - from) / step + 1e-9).floor();
    if n >= MAX_SWEEP_POINTS as f64 {
        return Err(CoreError::InvalidParameter(format!(
            "sweep would produce more than {MAX_SWEEP_POINTS} thresholds"
        )));
    }
    let n = n as usize;
    Ok((0..=n).map(|i| (from + i as f64 * step).min(to)).collect())
}

pub fn build_sweep<S: RandomSource>(
    session: &mut Session<S>,
    thresholds: &[f64],
) -> Result<Vec<SweepRow>, CoreError> {
    let pair = session.samples()?;
    let mut rows = Vec::with_capacity(thresholds.len());
    for &threshold in thresholds {
        let counts = tally(&pair.negatives, &pair.positives, threshold);
        let metrics = rates(&counts)?;
        rows.push(SweepRow {
            threshold,
            counts,
            metrics,
        });
    }
    Ok(rows)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
