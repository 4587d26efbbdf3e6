use serde::Serialize;

use crate::config::MAX_HISTOGRAM_BINS;
use crate::model::ScoreSample;

/// Two overlaid histograms sharing one set of equal-width bins spanning the
/// combined range of both samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub lower: f64,
    pub upper: f64,
    pub bin_width: f64,
    pub negatives: Vec<usize>,
    pub positives: Vec<usize>,
}

impl Histogram {
    pub fn build(negatives: &ScoreSample, positives: &ScoreSample, bins: usize) -> Self {
        let bins = bins.clamp(1, MAX_HISTOGRAM_BINS);
        let (mut lower, mut upper) = finite_range(negatives, positives).unwrap_or((0.0, 0.0));
        if upper <= lower {
            lower -= 0.5;
            upper += 0.5;
        }
        let bin_width = (upper - lower) / bins as f64;

        let mut hist = Self {
            lower,
            upper,
            bin_width,
            negatives: vec![0; bins],
            positives: vec![0; bins],
        };
        for &v in negatives.values() {
            if let Some(idx) = hist.bin_of(v) {
                hist.negatives[idx] += 1;
            }
        }
        for &v in positives.values() {
            if let Some(idx) = hist.bin_of(v) {
                hist.positives[idx] += 1;
            }
        }
        hist
    }

    pub fn bins(&self) -> usize {
        self.negatives.len()
    }

    /// Bin index for `value`; the upper edge belongs to the last bin.
    pub fn bin_of(&self, value: f64) -> Option<usize> {
        if !value.is_finite() || value < self.lower || value > self.upper {
            return None;
        }
        let idx = ((value - self.lower) / self.bin_width).floor() as usize;
        Some(idx.min(self.bins() - 1))
    }

    pub fn bin_bounds(&self, idx: usize) -> (f64, f64) {
        let lo = self.lower + idx as f64 * self.bin_width;
        (lo, lo + self.bin_width)
    }

    pub fn max_count(&self) -> usize {
        self.negatives
            .iter()
            .chain(self.positives.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// Number of bins lying entirely below `threshold`; the threshold marker
    /// is drawn in front of that row.
    pub fn marker_position(&self, threshold: f64) -> usize {
        (0..self.bins())
            .filter(|&idx| self.bin_bounds(idx).1 <= threshold)
            .count()
    }
}

fn finite_range(a: &ScoreSample, b: &ScoreSample) -> Option<(f64, f64)> {
    let mut range: Option<(f64, f64)> = None;
    for &v in a.values().iter().chain(b.values()) {
        if !v.is_finite() {
            continue;
        }
        range = Some(match range {
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
            None => (v, v),
        });
    }
    range
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/histogram.rs"]
mod tests;
