use super::*;

#[test]
fn test_format_percent_one_decimal() {
    assert_eq!(format_percent(0.0), "0.0%");
    assert_eq!(format_percent(12.34), "12.3%");
    assert_eq!(format_percent(99.96), "100.0%");
}

#[test]
fn test_format_score() {
    assert_eq!(format_score(5.0), "5");
    assert_eq!(format_score(-12.0), "-12");
    assert_eq!(format_score(5.5), "5.50");
}

#[test]
fn test_sample_summary() {
    let s = SampleSummary::from_sample(
        SampleClass::AtRisk,
        &ScoreSample::new(vec![1.0, 2.0, 3.0, 4.0]),
    );
    assert_eq!(s.count, 4);
    assert_eq!(s.mean, 2.5);
    assert_eq!(s.min, 1.0);
    assert_eq!(s.max, 4.0);
    assert!((s.std_dev - 1.25f64.sqrt()).abs() < 1e-12);
}
