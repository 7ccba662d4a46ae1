use groupstats_core::domain::*;
use pretty_assertions::assert_eq;
use serde_json::json;

// ===== Verdict Serialization Tests =====

#[test]
fn test_verdict_serialization_roundtrip() {
    let original = TestVerdict {
        kind: TestKind::TTest,
        decision: Decision::Reject,
        statistic: -4.5,
        critical: CriticalRegion::Acceptance { lower: -2.25, upper: 2.25 },
        df1: 8.0,
        df2: None,
        p_value: 0.125,
    };

    let json = serde_json::to_string(&original).unwrap();
    let deserialized: TestVerdict = serde_json::from_str(&json).unwrap();

    assert_eq!(original, deserialized);
}

#[test]
fn test_verdict_json_shape() {
    let verdict = TestVerdict {
        kind: TestKind::FTest,
        decision: Decision::FailToReject,
        statistic: 4.0,
        critical: CriticalRegion::Acceptance { lower: 0.1, upper: 15.1 },
        df1: 4.0,
        df2: Some(3.0),
        p_value: 0.28,
    };

    let value = serde_json::to_value(&verdict).unwrap();
    assert_eq!(value["kind"], json!("f_test"));
    assert_eq!(value["decision"], json!("fail_to_reject"));
    assert_eq!(value["critical"]["type"], json!("acceptance"));
    assert_eq!(value["df2"], json!(3.0));
}

#[test]
fn test_tail_mode_serialization() {
    let cases = vec![
        (TailMode::TwoSided, "two-sided"),
        (TailMode::LeftTailed, "left-tailed"),
        (TailMode::RightTailed, "right-tailed"),
    ];

    for (mode, expected) in cases {
        let json = serde_json::to_string(&mode).unwrap();
        assert_eq!(json, format!("\"{}\"", expected));
    }

    let legacy: TailMode = serde_json::from_str("\"bilateral\"").unwrap();
    assert_eq!(legacy, TailMode::TwoSided);
}

#[test]
fn test_significance_level_serializes_as_number() {
    let level = SignificanceLevel::new(0.01).unwrap();
    assert_eq!(serde_json::to_value(level).unwrap(), json!(0.01));

    let parsed: SignificanceLevel = serde_json::from_value(json!(0.1)).unwrap();
    assert_eq!(parsed.value(), 0.1);

    assert!(serde_json::from_value::<SignificanceLevel>(json!(1.5)).is_err());
}

#[test]
fn test_analysis_config_partial_deserialization() {
    let config: AnalysisConfig = serde_json::from_value(json!({
        "alpha": 0.1,
        "denominator_df": "conventional"
    }))
    .unwrap();

    assert_eq!(config.alpha, 0.1);
    assert_eq!(config.bootstrap_iterations, 1000);
    assert_eq!(config.denominator_df, DenominatorDf::Conventional);
}

#[test]
fn test_bootstrap_result_roundtrip() {
    let original = BootstrapResult {
        interval: Interval::new(0.75, 0.984375),
        std_dev: 0.0625,
        iterations: 500,
        degenerate_draws: 0,
    };

    let json = serde_json::to_string(&original).unwrap();
    let deserialized: BootstrapResult = serde_json::from_str(&json).unwrap();
    assert_eq!(original, deserialized);
}
