use approx::assert_abs_diff_eq;
use groupstats_core::{CoreError, IntervalEstimator, SignificanceLevel};
use groupstats_inference::MeanDifferenceInterval;
use proptest::prelude::*;
use rstest::rstest;

fn alpha(a: f64) -> SignificanceLevel {
    SignificanceLevel::new(a).unwrap()
}

#[test]
fn test_separated_samples_interval() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [6.0, 7.0, 8.0, 9.0, 10.0];

    let interval = MeanDifferenceInterval.estimate(&x, &y, alpha(0.05)).unwrap();

    // -5 ± t(0.975; 8) * 1
    assert_abs_diff_eq!(interval.lower, -7.306, epsilon = 1e-3);
    assert_abs_diff_eq!(interval.upper, -2.694, epsilon = 1e-3);
    assert_abs_diff_eq!(interval.midpoint(), -5.0, epsilon = 1e-9);
    assert!(!interval.contains(0.0));
}

#[test]
fn test_identical_samples_interval_contains_zero() {
    let x = [10.0, 12.0, 13.0, 11.0, 14.0, 15.0, 13.0, 12.0, 11.0, 14.0];

    let interval = MeanDifferenceInterval.estimate(&x, &x, alpha(0.05)).unwrap();

    assert_eq!(interval.midpoint(), 0.0);
    assert!(interval.contains(0.0));
    assert_abs_diff_eq!(interval.lower, -interval.upper, epsilon = 1e-12);
}

#[test]
fn test_width_increases_with_confidence() {
    let x = [10.0, 12.0, 13.0, 11.0, 14.0, 15.0, 13.0, 12.0];
    let y = [9.0, 11.5, 10.0, 12.0, 13.5, 10.5, 11.0];

    let w90 = MeanDifferenceInterval.estimate(&x, &y, alpha(0.10)).unwrap().width();
    let w95 = MeanDifferenceInterval.estimate(&x, &y, alpha(0.05)).unwrap().width();
    let w99 = MeanDifferenceInterval.estimate(&x, &y, alpha(0.01)).unwrap().width();

    assert!(w95 >= w90);
    assert!(w99 >= w95);
}

#[test]
fn test_constant_samples_give_point_interval() {
    let x = [4.0, 4.0, 4.0];
    let y = [1.0, 1.0];

    let interval = MeanDifferenceInterval.estimate(&x, &y, alpha(0.05)).unwrap();

    assert_eq!(interval.lower, 3.0);
    assert_eq!(interval.upper, 3.0);
    assert_eq!(interval.width(), 0.0);
}

#[rstest]
#[case(vec![1.0], vec![1.0, 2.0])]
#[case(vec![1.0, 2.0], vec![f64::NEG_INFINITY, 2.0])]
fn test_invalid_samples(#[case] x: Vec<f64>, #[case] y: Vec<f64>) {
    let err = MeanDifferenceInterval.estimate(&x, &y, alpha(0.05)).unwrap_err();
    assert!(matches!(err, CoreError::InvalidArgument(_)));
}

proptest! {
    #[test]
    fn test_interval_width_monotone_in_alpha(
        x in prop::collection::vec(-100.0f64..100.0, 2..20),
        y in prop::collection::vec(-100.0f64..100.0, 2..20),
    ) {
        let narrow = MeanDifferenceInterval.estimate(&x, &y, alpha(0.05)).unwrap();
        let wide = MeanDifferenceInterval.estimate(&x, &y, alpha(0.01)).unwrap();

        prop_assert!(narrow.lower <= narrow.upper);
        prop_assert!(wide.width() >= narrow.width());
    }
}
