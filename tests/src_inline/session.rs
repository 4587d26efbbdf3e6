use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::config::{IntRange, ResetRanges};

fn seeded(seed: u64) -> Session<StdRng> {
    Session::new(StdRng::seed_from_u64(seed))
}

#[test]
fn test_lazy_initialization_with_defaults() {
    let mut session = seeded(1);
    assert_eq!(session.phase(), SessionPhase::Uninitialized);

    let (neg, pos) = session.current_samples().unwrap();
    assert_eq!(neg.len(), 1000);
    assert_eq!(pos.len(), 300);
    let neg_mean = neg.mean().unwrap();
    let pos_mean = pos.mean().unwrap();
    assert!((neg_mean - 35.0).abs() < 2.0, "negatives mean {neg_mean}");
    assert!((pos_mean - 65.0).abs() < 3.0, "positives mean {pos_mean}");

    assert_eq!(session.phase(), SessionPhase::Initialized);
    assert!(!session.distribution_reset());
}

#[test]
fn test_compute_metrics_initializes_session() {
    let mut session = seeded(2);
    let m = session.compute_metrics(50.0).unwrap();
    assert_eq!(session.phase(), SessionPhase::Initialized);
    assert!((m.false_positive_rate + m.specificity - 100.0).abs() < 1e-9);
}

#[test]
fn test_threshold_changes_keep_samples() {
    let mut session = seeded(3);
    let before = session.samples().unwrap().clone();
    for t in [0.0, 5.0, 50.0, 100.0, -3.0] {
        session.compute_metrics(t).unwrap();
        session.confusion_counts(t).unwrap();
    }
    assert_eq!(session.samples().unwrap(), &before);
    assert!(!session.distribution_reset());
}

#[test]
fn test_reset_draws_within_ranges() {
    let mut session = seeded(4);
    let ranges = ResetRanges::default();
    for _ in 0..20 {
        let draw = session.reset_samples().unwrap();
        assert!(ranges.negatives_mean.contains(draw.negatives.mean as u32));
        assert!(ranges.positives_mean.contains(draw.positives.mean as u32));
        for p in [draw.negatives, draw.positives] {
            assert_eq!(p.std_dev.fract(), 0.0);
            assert!(ranges.std_dev.contains(p.std_dev as u32));
            assert!(ranges.size.contains(p.size as u32));
        }
        let (neg, pos) = session.current_samples().unwrap();
        assert_eq!(neg.len(), draw.negatives.size);
        assert_eq!(pos.len(), draw.positives.size);
        assert!((300..=1500).contains(&neg.len()));
        assert!((300..=1500).contains(&pos.len()));
    }
}

#[test]
fn test_successive_resets_replace_samples() {
    let mut session = seeded(5);
    let initial = session.samples().unwrap().clone();
    session.reset_samples().unwrap();
    let first = session.samples().unwrap().clone();
    session.reset_samples().unwrap();
    let second = session.samples().unwrap().clone();

    assert_ne!(initial, first);
    assert_ne!(first, second);
    let n = first.negatives.len().min(second.negatives.len());
    let same = first.negatives.values()[..n]
        .iter()
        .zip(&second.negatives.values()[..n])
        .filter(|(a, b)| a == b)
        .count();
    assert_eq!(same, 0);
}

#[test]
fn test_reset_from_uninitialized() {
    let mut session = seeded(6);
    let draw = session.reset_samples().unwrap();
    assert_eq!(session.phase(), SessionPhase::Initialized);
    let (neg, _) = session.current_samples().unwrap();
    assert_eq!(neg.len(), draw.negatives.size);
}

#[test]
fn test_reset_flag_is_taken_once() {
    let mut session = seeded(7);
    session.reset_samples().unwrap();
    assert!(session.distribution_reset());
    assert!(session.take_distribution_reset());
    assert!(!session.take_distribution_reset());
    assert!(!session.distribution_reset());
}

#[test]
fn test_sessions_are_isolated() {
    let mut a = seeded(8);
    let mut b = seeded(8);
    assert_eq!(a.samples().unwrap(), b.samples().unwrap());

    a.reset_samples().unwrap();
    let b_before = b.samples().unwrap().clone();
    assert_ne!(a.samples().unwrap(), &b_before);
    b.compute_metrics(10.0).unwrap();
    assert_eq!(b.samples().unwrap(), &b_before);
    assert!(!b.distribution_reset());
}

#[test]
fn test_custom_config() {
    let config = SessionConfig {
        negatives: DistributionParams::new(10.0, 1.0, 20),
        positives: DistributionParams::new(90.0, 1.0, 10),
        reset: ResetRanges {
            size: IntRange::new(5, 5),
            ..ResetRanges::default()
        },
        ..SessionConfig::default()
    };
    let mut session = Session::with_config(StdRng::seed_from_u64(9), config).unwrap();
    let counts = session.confusion_counts(50.0).unwrap();
    assert_eq!(counts.true_negatives, 20);
    assert_eq!(counts.true_positives, 10);

    session.reset_samples().unwrap();
    let (neg, pos) = session.current_samples().unwrap();
    assert_eq!(neg.len(), 5);
    assert_eq!(pos.len(), 5);
}

#[test]
fn test_invalid_config_rejected() {
    let config = SessionConfig {
        negatives: DistributionParams::new(10.0, 0.0, 20),
        ..SessionConfig::default()
    };
    let err = Session::with_config(StdRng::seed_from_u64(1), config).unwrap_err();
    assert!(matches!(err, CoreError::InvalidConfig(_)));
}
