use super::*;

#[test]
fn test_moments() {
    let s = ScoreSample::new(vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(s.len(), 4);
    assert_eq!(s.mean(), Some(2.5));
    let std = s.std_dev().unwrap();
    assert!((std - 1.25f64.sqrt()).abs() < 1e-12);
    assert_eq!(s.min(), Some(1.0));
    assert_eq!(s.max(), Some(4.0));
}

#[test]
fn test_empty_sample_has_no_moments() {
    let s = ScoreSample::default();
    assert!(s.is_empty());
    assert_eq!(s.mean(), None);
    assert_eq!(s.std_dev(), None);
    assert_eq!(s.min(), None);
    assert_eq!(s.max(), None);
}

#[test]
fn test_count_below_excludes_equal_values() {
    let s = ScoreSample::from(vec![10.0, 50.0, 50.0, 70.0]);
    assert_eq!(s.count_below(50.0), 1);
    assert_eq!(s.count_below(50.000001), 3);
    assert_eq!(s.count_below(f64::NEG_INFINITY), 0);
    assert_eq!(s.count_below(f64::INFINITY), 4);
}

#[test]
fn test_class_labels() {
    assert_eq!(SampleClass::NotAtRisk.to_string(), "not-at-risk");
    assert_eq!(SampleClass::AtRisk.label(), "at-risk");
    assert_eq!(SampleClass::AtRisk.series_name(), "At-Risk Messages");
}
