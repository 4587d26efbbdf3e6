use serde::Serialize;

use crate::model::{ConfusionCounts, MetricsResult};
use crate::pipeline::stage3_report::{ReportView, SweepRow};
use crate::report::histogram::Histogram;
use crate::report::{SampleSummary, TITLE};

#[derive(Serialize)]
struct ReportDocument<'a> {
    tool: &'static str,
    version: &'static str,
    title: &'static str,
    threshold: f64,
    distribution_reset: bool,
    metrics: &'a MetricsResult,
    counts: &'a ConfusionCounts,
    samples: [&'a SampleSummary; 2],
    histogram: &'a Histogram,
}

#[derive(Serialize)]
struct SweepDocument<'a> {
    tool: &'static str,
    version: &'static str,
    rows: &'a [SweepRow],
}

pub fn render_report_json(view: &ReportView) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ReportDocument {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        title: TITLE,
        threshold: view.threshold,
        distribution_reset: view.distribution_reset,
        metrics: &view.metrics,
        counts: &view.counts,
        samples: [&view.negatives, &view.positives],
        histogram: &view.histogram,
    })
}

pub fn render_sweep_json(rows: &[SweepRow]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&SweepDocument {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        rows,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
