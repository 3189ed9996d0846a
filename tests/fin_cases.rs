//! 네 가지 끝단 경계조건의 기저부/끝단 성질과 핀 파라미터 단조성 회귀 테스트.
use approx::{assert_abs_diff_eq, assert_relative_eq};
use fin_heat_toolbox::fin::{
    absolute_temperature, fin_heat_rate, fin_parameter, heat_flow_scale, temperature_ratio,
    CaseInputs, CrossSectionShape, FinBoundaryCase, FinConfiguration, FinReport,
};
use fin_heat_toolbox::material_db::Material;

fn copper_rod(case: FinBoundaryCase) -> FinConfiguration {
    FinConfiguration {
        h: 100.0,
        ambient_temp_c: 25.0,
        base_temp_c: 100.0,
        length_m: 0.4,
        material: Material::Copper,
        shape: CrossSectionShape::Circular { diameter: 0.005 },
        case,
        tip_temp_c: Some(40.0),
    }
}

#[test]
fn every_case_starts_at_base_temperature() {
    for case in FinBoundaryCase::ALL {
        let cfg = copper_rod(case);
        let r = temperature_ratio(case, &cfg.case_inputs(), 0.0);
        assert_abs_diff_eq!(r, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(cfg.temperature_at(0.0), 100.0, epsilon = 1e-9);
    }
}

#[test]
fn prescribed_tip_hits_tip_temperature() {
    let cfg = copper_rod(FinBoundaryCase::PrescribedTemperature);
    let inputs = cfg.case_inputs();
    let r = temperature_ratio(cfg.case, &inputs, cfg.length_m);
    // θ_L/θ_b = (40-25)/(100-25)
    assert_relative_eq!(r, 0.2, max_relative = 1e-12);
    assert_relative_eq!(cfg.temperature_at(cfg.length_m), 40.0, max_relative = 1e-12);
}

#[test]
fn infinite_fin_heat_rate_is_m_scale() {
    for (m, length) in [(0.5, 0.1), (9.0, 0.4), (40.0, 2.0)] {
        let inputs = CaseInputs {
            m,
            length,
            h: 25.0,
            k: 180.0,
            theta_l: None,
            theta_b: Some(60.0),
        };
        assert_eq!(fin_heat_rate(FinBoundaryCase::Infinite, &inputs, 12.34), 12.34);
    }
}

#[test]
fn copper_rod_textbook_values() {
    // d=5mm 구리봉, h=100, T∞=25, T_b=100: m ≈ 14.18 1/m, 무한 핀 q ≈ 8.3 W
    let cfg = copper_rod(FinBoundaryCase::Infinite);
    let report = FinReport::compute(&cfg, 0.05);
    assert_relative_eq!(report.m, 14.178, max_relative = 1e-3);
    assert_relative_eq!(report.heat_rate_w, 8.31, max_relative = 2e-3);
    assert_relative_eq!(report.ratio, (-report.m * 0.05).exp(), max_relative = 1e-12);
}

#[test]
fn long_fin_cases_converge_to_infinite_fin() {
    // mL이 크면 A, B 조건 모두 무한 핀 해에 수렴한다.
    let infinite = FinReport::compute(&copper_rod(FinBoundaryCase::Infinite), 0.05);
    for case in [FinBoundaryCase::ConvectiveTip, FinBoundaryCase::AdiabaticTip] {
        let cfg = FinConfiguration {
            length_m: 1.0,
            ..copper_rod(case)
        };
        let report = FinReport::compute(&cfg, 0.05);
        assert_relative_eq!(report.heat_rate_w, infinite.heat_rate_w, max_relative = 1e-4);
        assert_relative_eq!(report.temperature_c, infinite.temperature_c, max_relative = 1e-4);
    }
}

#[test]
fn convective_tip_dissipates_more_than_adiabatic() {
    let a = FinReport::compute(&copper_rod(FinBoundaryCase::ConvectiveTip), 0.0);
    let b = FinReport::compute(&copper_rod(FinBoundaryCase::AdiabaticTip), 0.0);
    assert!(a.heat_rate_w > b.heat_rate_w);
}

#[test]
fn fin_parameter_is_monotonic() {
    let base = fin_parameter(100.0, 0.04, 398.0, 1e-4);
    assert!(fin_parameter(120.0, 0.04, 398.0, 1e-4) > base);
    assert!(fin_parameter(100.0, 0.05, 398.0, 1e-4) > base);
    assert!(fin_parameter(100.0, 0.04, 400.0, 1e-4) < base);
    assert!(fin_parameter(100.0, 0.04, 398.0, 2e-4) < base);
}

#[test]
fn negative_product_under_root_is_nan() {
    assert!(fin_parameter(-100.0, 0.04, 398.0, 1e-4).is_nan());
    assert!(heat_flow_scale(-100.0, 0.04, 398.0, 1e-4, 75.0).is_nan());
}

#[test]
fn absolute_temperature_maps_ratio_endpoints() {
    assert_eq!(absolute_temperature(25.0, 100.0, 1.0), 100.0);
    assert_eq!(absolute_temperature(25.0, 100.0, 0.0), 25.0);
    assert_eq!(absolute_temperature(25.0, 100.0, 0.5), 62.5);
}
