pub mod histogram;
pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::{SampleClass, ScoreSample};

pub const TITLE: &str = "Medical Risk Score Analysis";
pub const CHART_TITLE: &str = "Risk Score Distribution";
pub const X_AXIS_TITLE: &str = "Risk Score";
pub const Y_AXIS_TITLE: &str = "Count";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleSummary {
    pub class: SampleClass,
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl SampleSummary {
    pub fn from_sample(class: SampleClass, sample: &ScoreSample) -> Self {
        Self {
            class,
            count: sample.len(),
            mean: sample.mean().unwrap_or(0.0),
            std_dev: sample.std_dev().unwrap_or(0.0),
            min: sample.min().unwrap_or(0.0),
            max: sample.max().unwrap_or(0.0),
        }
    }
}

/// Display form of a percentage: one decimal place.
pub fn format_percent(v: f64) -> String {
    format!("{:.1}%", v)
}

/// Whole-number thresholds print without decimals, as the slider shows them.
pub fn format_score(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{:.0}", v)
    } else {
        format!("{:.2}", v)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
