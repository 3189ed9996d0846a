//! 차트 샘플링 점 개수/반올림 회귀 테스트.
use fin_heat_toolbox::fin::{
    sample_positions, validate_resolution, FinBoundaryCase, FinConfiguration, FinError,
    MIN_CHART_RESOLUTION_M,
};

#[test]
fn default_fin_interval_yields_seventeen_points() {
    let xs: Vec<f64> = sample_positions(0.0, 0.4, 0.025, |x| x).map(|p| p.x).collect();
    assert_eq!(xs.len(), 17);
    for (i, x) in xs.iter().enumerate() {
        let expected = (i as f64 * 25.0).round() / 1000.0;
        assert_eq!(*x, expected, "point {i}");
    }
    assert_eq!(xs.last().copied(), Some(0.4));
}

#[test]
fn temperature_is_evaluated_at_rounded_position() {
    let pts: Vec<_> = sample_positions(0.0001, 0.01, 0.003, |x| x * 1000.0).collect();
    for p in &pts {
        assert_eq!(p.t, p.x * 1000.0);
        assert_eq!(p.x, (p.x * 1000.0).round() / 1000.0);
    }
}

#[test]
fn point_count_does_not_drift_for_fine_steps() {
    // 0.1을 반복 덧셈하면 0.30000000000000004가 되지만 점 개수는 그대로여야 한다.
    assert_eq!(sample_positions(0.0, 0.3, 0.1, |x| x).count(), 4);
    assert_eq!(sample_positions(0.0, 1.0, 0.001, |x| x).count(), 1001);
}

#[test]
fn sequence_is_lazy_and_restartable() {
    let calls = std::cell::Cell::new(0);
    let seq = sample_positions(0.0, 0.1, 0.025, |x| {
        calls.set(calls.get() + 1);
        x
    });
    assert_eq!(calls.get(), 0);
    let first: Vec<_> = seq.clone().collect();
    let second: Vec<_> = seq.collect();
    assert_eq!(first, second);
    assert_eq!(calls.get(), 10);
}

#[test]
fn profile_runs_from_base_to_tip() {
    let cfg = FinConfiguration {
        case: FinBoundaryCase::AdiabaticTip,
        ..FinConfiguration::default()
    };
    let pts = cfg.profile(0.025);
    assert_eq!(pts.len(), 17);
    assert!((pts[0].t - cfg.base_temp_c).abs() < 1e-9);
    assert!(pts.windows(2).all(|w| w[1].t <= w[0].t));
}

#[test]
fn invalid_configuration_profile_terminates() {
    let cfg = FinConfiguration {
        length_m: f64::INFINITY,
        ..FinConfiguration::default()
    };
    assert!(cfg.profile(0.025).is_empty());
    let zero = FinConfiguration {
        h: 0.0,
        case: FinBoundaryCase::PrescribedTemperature,
        ..FinConfiguration::default()
    };
    assert!(zero.profile(0.1).iter().skip(1).all(|p| !p.t.is_finite()));
}

#[test]
fn chart_resolution_must_be_at_least_rounding_step() {
    let cfg = FinConfiguration::default();
    assert_eq!(cfg.validate(), Ok(()));
    for bad in [0.0, -0.025, 1e-6, 1e-9, f64::NAN, f64::INFINITY] {
        assert!(
            matches!(validate_resolution(bad), Err(FinError::InvalidResolution(_))),
            "resolution {bad} accepted"
        );
    }
    assert_eq!(validate_resolution(0.025), Ok(()));
    assert_eq!(validate_resolution(MIN_CHART_RESOLUTION_M), Ok(()));

    // 허용되는 가장 촘촘한 간격에서도 x가 중복되지 않는다.
    let pts = cfg.profile(MIN_CHART_RESOLUTION_M);
    assert_eq!(pts.len(), 401);
    assert!(pts.windows(2).all(|w| w[1].x > w[0].x));
}
