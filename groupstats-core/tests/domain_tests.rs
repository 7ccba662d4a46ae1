use groupstats_core::domain::*;
use groupstats_core::CoreError;
use proptest::prelude::*;
use rstest::rstest;
use test_case::test_case;

// ===== SignificanceLevel Tests =====

#[rstest]
#[case(0.01)]
#[case(0.05)]
#[case(0.10)]
#[case(0.5)]
#[case(0.999)]
fn test_significance_level_accepts_open_unit_interval(#[case] alpha: f64) {
    let level = SignificanceLevel::new(alpha).unwrap();
    assert_eq!(level.value(), alpha);
    assert_eq!(level.half(), alpha / 2.0);
}

#[rstest]
#[case(0.0)]
#[case(1.0)]
#[case(-0.05)]
#[case(1.5)]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
fn test_significance_level_rejects_out_of_range(#[case] alpha: f64) {
    let err = SignificanceLevel::new(alpha).unwrap_err();
    assert!(matches!(err, CoreError::InvalidArgument(_)));
}

#[test]
fn test_significance_level_default_and_confidence() {
    let level = SignificanceLevel::default();
    assert_eq!(level.value(), 0.05);
    assert!((level.confidence() - 0.95).abs() < 1e-12);
}

// ===== TailMode Tests =====

#[test_case("two-sided" => TailMode::TwoSided ; "canonical two sided")]
#[test_case("bilateral" => TailMode::TwoSided ; "legacy bilateral alias")]
#[test_case("left-tailed" => TailMode::LeftTailed ; "left")]
#[test_case("Right-Tailed" => TailMode::RightTailed ; "case insensitive right")]
#[test_case("  left-tailed " => TailMode::LeftTailed ; "surrounding whitespace")]
fn test_tail_mode_parse(input: &str) -> TailMode {
    input.parse().unwrap()
}

#[test_case("both")]
#[test_case("")]
#[test_case("left")]
fn test_tail_mode_parse_rejects_unknown(input: &str) {
    let err = input.parse::<TailMode>().unwrap_err();
    assert!(matches!(err, CoreError::InvalidArgument(_)));
}

#[test]
fn test_tail_mode_display_roundtrip() {
    for mode in TailMode::ALL {
        let parsed: TailMode = mode.to_string().parse().unwrap();
        assert_eq!(parsed, mode);
    }
}

// ===== CriticalRegion Tests =====

#[test]
fn test_acceptance_region_rejects_outside_only() {
    let region = CriticalRegion::Acceptance { lower: -2.0, upper: 2.0 };
    assert!(region.rejects(-2.5));
    assert!(region.rejects(2.5));
    assert!(!region.rejects(0.0));
    assert!(!region.rejects(2.0));
    assert!(!region.rejects(-2.0));
}

#[test]
fn test_one_sided_regions() {
    let below = CriticalRegion::Below { bound: 1.5 };
    assert!(below.rejects(1.0));
    assert!(!below.rejects(1.5));
    assert!(!below.rejects(3.0));

    let above = CriticalRegion::Above { bound: -1.5 };
    assert!(above.rejects(0.0));
    assert!(!above.rejects(-1.5));
    assert!(!above.rejects(-3.0));
}

#[test]
fn test_critical_region_values() {
    assert_eq!(
        CriticalRegion::Acceptance { lower: 0.1, upper: 9.6 }.values(),
        vec![0.1, 9.6]
    );
    assert_eq!(CriticalRegion::Above { bound: 1.86 }.values(), vec![1.86]);
}

// ===== Verdict Rendering Tests =====

#[test]
fn test_t_verdict_two_sided_rendering() {
    let verdict = TestVerdict {
        kind: TestKind::TTest,
        decision: Decision::FailToReject,
        statistic: 0.0,
        critical: CriticalRegion::Acceptance { lower: -2.306004, upper: 2.306004 },
        df1: 8.0,
        df2: None,
        p_value: 1.0,
    };

    assert_eq!(
        verdict.to_string(),
        "Fail to reject H0: T_obs = 0.000, tc1 = -2.306, tc2 = 2.306"
    );
}

#[test]
fn test_t_verdict_one_sided_rendering() {
    let verdict = TestVerdict {
        kind: TestKind::TTest,
        decision: Decision::Reject,
        statistic: -3.2,
        critical: CriticalRegion::Below { bound: 1.8596 },
        df1: 8.0,
        df2: None,
        p_value: 0.006,
    };

    assert_eq!(verdict.to_string(), "Reject H0: T_obs = -3.200, tc = 1.860");
}

#[test]
fn test_f_verdict_rendering() {
    let verdict = TestVerdict {
        kind: TestKind::FTest,
        decision: Decision::Reject,
        statistic: 20.0,
        critical: CriticalRegion::Acceptance { lower: 0.104, upper: 9.6046 },
        df1: 4.0,
        df2: Some(4.0),
        p_value: 0.01,
    };

    let rendered = verdict.to_string();
    assert!(rendered.starts_with("Reject H0: The variances are not equal"));
    assert!(rendered.contains("F_obs = 20.000"));
    assert!(rendered.contains("f2 = 9.605"));
}

#[test]
fn test_decision_from_rejection() {
    assert_eq!(Decision::from_rejection(true), Decision::Reject);
    assert_eq!(Decision::from_rejection(false), Decision::FailToReject);
    assert!(Decision::Reject.is_reject());
    assert!(!Decision::FailToReject.is_reject());
}

// ===== Interval Tests =====

#[test]
fn test_interval_helpers() {
    let interval = Interval::around(1.0, 0.5);
    assert_eq!(interval.lower, 0.5);
    assert_eq!(interval.upper, 1.5);
    assert_eq!(interval.width(), 1.0);
    assert_eq!(interval.midpoint(), 1.0);
    assert!(interval.contains(1.2));
    assert!(!interval.contains(1.6));
    assert_eq!(interval.to_string(), "(0.500, 1.500)");
}

#[test]
fn test_bootstrap_result_effective_iterations() {
    let result = BootstrapResult {
        interval: Interval::new(0.8, 0.95),
        std_dev: 0.04,
        iterations: 1000,
        degenerate_draws: 3,
    };
    assert_eq!(result.effective_iterations(), 997);
    assert_eq!(result.to_string(), "(0.800, 0.950) std = 0.040");
}

// ===== Property-based Tests =====

proptest! {
    #[test]
    fn test_symmetric_interval_never_inverted(center in -1e6f64..1e6f64, margin in 0.0f64..1e6f64) {
        let interval = Interval::around(center, margin);
        prop_assert!(interval.lower <= interval.upper);
        prop_assert!(interval.contains(center));
    }

    #[test]
    fn test_significance_level_valid_range(alpha in 1e-9f64..0.999_999f64) {
        let level = SignificanceLevel::new(alpha).unwrap();
        prop_assert!(level.half() < level.value());
    }
}
