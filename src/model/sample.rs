use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SampleClass {
    NotAtRisk,
    AtRisk,
}

impl SampleClass {
    pub fn label(self) -> &'static str {
        match self {
            SampleClass::NotAtRisk => "not-at-risk",
            SampleClass::AtRisk => "at-risk",
        }
    }

    pub fn series_name(self) -> &'static str {
        match self {
            SampleClass::NotAtRisk => "Not At-Risk Messages",
            SampleClass::AtRisk => "At-Risk Messages",
        }
    }
}

impl fmt::Display for SampleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scores drawn for one class population. Order carries no meaning.
///
/// Construction does not reject empty input; the metrics stage does, since
/// rates over an empty population are undefined.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreSample {
    values: Vec<f64>,
}

impl ScoreSample {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        let sum: f64 = self.values.iter().sum();
        Some(sum / self.values.len() as f64)
    }

    /// Population standard deviation.
    pub fn std_dev(&self) -> Option<f64> {
        let mean = self.mean()?;
        let mut acc = 0f64;
        for &v in &self.values {
            let d = v - mean;
            acc += d * d;
        }
        Some((acc / self.values.len() as f64).sqrt())
    }

    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    /// Values strictly below `threshold`; everything else is on the
    /// positive side of the boundary.
    pub fn count_below(&self, threshold: f64) -> usize {
        self.values.iter().filter(|&&v| v < threshold).count()
    }
}

impl From<Vec<f64>> for ScoreSample {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/sample.rs"]
mod tests;
