use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ConfusionCounts {
    pub true_negatives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub true_positives: usize,
}

impl ConfusionCounts {
    pub fn total_negatives(&self) -> usize {
        self.true_negatives + self.false_positives
    }

    pub fn total_positives(&self) -> usize {
        self.false_negatives + self.true_positives
    }

    pub fn total(&self) -> usize {
        self.total_negatives() + self.total_positives()
    }
}

/// Confusion-matrix rates, all expressed as percentages in `[0, 100]`.
/// Values are unrounded; formatting belongs to the report layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricsResult {
    pub false_positive_rate: f64,
    pub false_negative_rate: f64,
    pub accuracy: f64,
    pub sensitivity: f64,
    pub specificity: f64,
}
