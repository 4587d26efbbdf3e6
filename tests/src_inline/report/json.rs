use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::pipeline::stage3_report::{build_sweep, build_view};
use crate::session::Session;

#[test]
fn test_report_json_shape() {
    let mut session = Session::new(StdRng::seed_from_u64(1));
    let view = build_view(&mut session, 50.0).unwrap();
    let json = render_report_json(&view).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["tool"], "riskthreshold");
    assert_eq!(value["title"], "Medical Risk Score Analysis");
    assert_eq!(value["threshold"], 50.0);
    assert_eq!(value["distribution_reset"], false);
    assert_eq!(
        value["metrics"]["false_positive_rate"].as_f64().unwrap(),
        view.metrics.false_positive_rate
    );
    assert_eq!(
        value["counts"]["true_positives"].as_u64().unwrap() as usize,
        view.counts.true_positives
    );
    assert_eq!(value["samples"][0]["class"], "not-at-risk");
    assert_eq!(value["samples"][1]["class"], "at-risk");
    assert_eq!(value["samples"][0]["count"], 1000);
    assert_eq!(value["histogram"]["negatives"].as_array().unwrap().len(), 50);
}

#[test]
fn test_sweep_json_rows() {
    let mut session = Session::new(StdRng::seed_from_u64(2));
    let rows = build_sweep(&mut session, &[0.0, 50.0, 100.0]).unwrap();
    let json = render_sweep_json(&rows).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let arr = value["rows"].as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[1]["threshold"], 50.0);
    assert!(arr[0]["metrics"]["sensitivity"].as_f64().unwrap() >= 99.0);
}
