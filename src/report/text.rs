use std::fmt::Write;

use crate::model::SampleClass;
use crate::pipeline::stage3_report::{ReportView, SweepRow};
use crate::report::histogram::Histogram;
use crate::report::{
    CHART_TITLE, SampleSummary, TITLE, X_AXIS_TITLE, Y_AXIS_TITLE, format_percent, format_score,
};

const BAR_WIDTH: usize = 40;

pub fn render_report_text(view: &ReportView) -> String {
    let mut out = String::new();

    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(TITLE.len()));
    out.push_str("\n\n");

    if view.distribution_reset {
        out.push_str("Distributions reset.\n\n");
    }

    out.push_str(&render_histogram(&view.histogram, view.threshold));
    out.push('\n');

    let _ = writeln!(
        out,
        "{:<26}{:>8}",
        "False Alerts (Type I)",
        format_percent(view.metrics.false_positive_rate)
    );
    let _ = writeln!(
        out,
        "{:<26}{:>8}",
        "Missed Alerts (Type II)",
        format_percent(view.metrics.false_negative_rate)
    );
    let _ = writeln!(
        out,
        "{:<26}{:>8}",
        "Overall Accuracy",
        format_percent(view.metrics.accuracy)
    );
    out.push('\n');

    out.push_str("Detailed Metrics\n");
    let _ = writeln!(
        out,
        "Sensitivity (True Positive Rate): {}",
        format_percent(view.metrics.sensitivity)
    );
    let _ = writeln!(
        out,
        "Specificity (True Negative Rate): {}",
        format_percent(view.metrics.specificity)
    );
    let _ = writeln!(
        out,
        "Counts: TN={} FP={} FN={} TP={}",
        view.counts.true_negatives,
        view.counts.false_positives,
        view.counts.false_negatives,
        view.counts.true_positives
    );

    out
}

pub fn render_histogram(hist: &Histogram, threshold: f64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{CHART_TITLE}");
    let _ = writeln!(
        out,
        "{X_AXIS_TITLE} bins vs {Y_AXIS_TITLE}   # {}   + {}   @ overlap",
        SampleClass::NotAtRisk.series_name(),
        SampleClass::AtRisk.series_name()
    );

    let max = hist.max_count();
    let marker = hist.marker_position(threshold);
    for idx in 0..hist.bins() {
        if idx == marker {
            push_marker(&mut out, threshold);
        }
        let (lo, hi) = hist.bin_bounds(idx);
        let neg = hist.negatives[idx];
        let pos = hist.positives[idx];
        let _ = writeln!(
            out,
            "{:>8.2} {:>8.2} |{:<width$}| {:>5} {:>5}",
            lo,
            hi,
            overlay_bar(scale(neg, max), scale(pos, max)),
            neg,
            pos,
            width = BAR_WIDTH
        );
    }
    if marker >= hist.bins() {
        push_marker(&mut out, threshold);
    }
    out
}

pub fn render_samples_text(negatives: &SampleSummary, positives: &SampleSummary) -> String {
    let mut out = String::new();
    for s in [negatives, positives] {
        let _ = writeln!(
            out,
            "{}: n={} mean={:.2} std={:.2} min={:.2} max={:.2}",
            s.class.series_name(),
            s.count,
            s.mean,
            s.std_dev,
            s.min,
            s.max
        );
    }
    out
}

pub fn render_sweep_text(rows: &[SweepRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>10} {:>8} {:>8} {:>9} {:>12} {:>12}",
        "threshold", "FPR", "FNR", "accuracy", "sensitivity", "specificity"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:>10} {:>8} {:>8} {:>9} {:>12} {:>12}",
            format_score(row.threshold),
            format_percent(row.metrics.false_positive_rate),
            format_percent(row.metrics.false_negative_rate),
            format_percent(row.metrics.accuracy),
            format_percent(row.metrics.sensitivity),
            format_percent(row.metrics.specificity)
        );
    }
    out
}

fn push_marker(out: &mut String, threshold: f64) {
    let _ = writeln!(
        out,
        "{:-^width$}",
        format!(" Threshold ({}) ", format_score(threshold)),
        width = 32 + BAR_WIDTH
    );
}

fn scale(count: usize, max: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    (count * BAR_WIDTH).div_ceil(max)
}

fn overlay_bar(neg: usize, pos: usize) -> String {
    let len = neg.max(pos);
    let mut bar = String::with_capacity(len);
    for i in 0..len {
        bar.push(match (i < neg, i < pos) {
            (true, true) => '@',
            (true, false) => '#',
            _ => '+',
        });
    }
    bar
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
