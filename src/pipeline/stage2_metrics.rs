use tracing::debug;

use crate::error::CoreError;
use crate::model::{ConfusionCounts, MetricsResult, SampleClass, ScoreSample};

/// Partitions both samples at `threshold`.
///
/// A score is at-risk iff `score >= threshold`, so a score equal to the
/// threshold always lands on the positive side. Anything that is not
/// strictly below the threshold counts as positive, which keeps
/// `negatives + positives` equal to the sample length for every input.
pub fn tally(negatives: &ScoreSample, positives: &ScoreSample, threshold: f64) -> ConfusionCounts {
    let true_negatives = negatives.count_below(threshold);
    let false_negatives = positives.count_below(threshold);
    ConfusionCounts {
        true_negatives,
        false_positives: negatives.len() - true_negatives,
        false_negatives,
        true_positives: positives.len() - false_negatives,
    }
}

pub fn rates(counts: &ConfusionCounts) -> Result<MetricsResult, CoreError> {
    let total_negatives = counts.total_negatives();
    let total_positives = counts.total_positives();
    if total_negatives == 0 {
        return Err(CoreError::EmptySample(SampleClass::NotAtRisk));
    }
    if total_positives == 0 {
        return Err(CoreError::EmptySample(SampleClass::AtRisk));
    }

    let neg = total_negatives as f64;
    let pos = total_positives as f64;
    Ok(MetricsResult {
        false_positive_rate: counts.false_positives as f64 / neg * 100.0,
        false_negative_rate: counts.false_negatives as f64 / pos * 100.0,
        accuracy: (counts.true_positives + counts.true_negatives) as f64 / (pos + neg) * 100.0,
        sensitivity: counts.true_positives as f64 / pos * 100.0,
        specificity: counts.true_negatives as f64 / neg * 100.0,
    })
}

pub fn compute_metrics(
    negatives: &ScoreSample,
    positives: &ScoreSample,
    threshold: f64,
) -> Result<MetricsResult, CoreError> {
    let counts = tally(negatives, positives, threshold);
    let metrics = rates(&counts)?;
    debug!(
        threshold,
        true_negatives = counts.true_negatives,
        false_positives = counts.false_positives,
        false_negatives = counts.false_negatives,
        true_positives = counts.true_positives,
        "computed metrics"
    );
    Ok(metrics)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_metrics.rs"]
mod tests;
