use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::boundary::{CaseInputs, FinBoundaryCase};
use super::chart::{sample_positions, ChartPoint};
use super::geometry::CrossSectionShape;
use crate::material_db::Material;

/// 핀 설정 검증 오류.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FinError {
    /// 양수여야 하는 입력이 0 이하이거나 유한하지 않음
    #[error("{0} 값은 0보다 커야 합니다")]
    NonPositive(&'static str),
    /// 끝단 온도 지정 조건인데 T_L이 없음
    #[error("끝단 온도 지정 조건에는 T_L이 필요합니다")]
    MissingTipTemperature,
    /// 기저부 온도와 주변 온도가 같아 θ_b = 0
    #[error("기저부 온도와 주변 온도가 같습니다")]
    ZeroBaseExcess,
    /// 차트 간격이 유한하지 않거나 반올림 단위(0.001 m)보다 작음
    #[error("차트 간격 {0} m는 {min} m 이상이어야 합니다", min = MIN_CHART_RESOLUTION_M)]
    InvalidResolution(f64),
}

/// 차트 간격의 하한 [m]. 위치를 소수 셋째 자리로 반올림하므로 이보다 촘촘하면 같은 x가 반복된다.
pub const MIN_CHART_RESOLUTION_M: f64 = 0.001;

/// 차트 샘플 간격을 검사한다.
pub fn validate_resolution(resolution_m: f64) -> Result<(), FinError> {
    if resolution_m.is_finite() && resolution_m >= MIN_CHART_RESOLUTION_M {
        Ok(())
    } else {
        Err(FinError::InvalidResolution(resolution_m))
    }
}

/// 핀 파라미터 m = √(hP/(kA_tr)) [1/m].
///
/// 근호 안이 음수면 NaN을 반환하며, 호출 측에서 잘못된 설정으로 취급한다.
pub fn fin_parameter(h: f64, perimeter: f64, k: f64, area: f64) -> f64 {
    ((h * perimeter) / (k * area)).sqrt()
}

/// 열전달률 스케일 M = √(hPkA_tr)·θ_b [W].
pub fn heat_flow_scale(h: f64, perimeter: f64, k: f64, area: f64, theta_b: f64) -> f64 {
    (h * perimeter * k * area).sqrt() * theta_b
}

/// 무차원 온도비를 절대 온도로 되돌린다. T = T∞ + (T_b − T∞)·ratio.
pub fn absolute_temperature(t_inf: f64, t_b: f64, ratio: f64) -> f64 {
    t_inf + (t_b - t_inf) * ratio
}

/// 핀 해석 입력 전체. 입력이 바뀌면 새로 만들어 다시 계산한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinConfiguration {
    /// 대류 열전달계수 h [W/(m²·K)]
    pub h: f64,
    /// 주변 유체 온도 T∞ [°C]
    pub ambient_temp_c: f64,
    /// 기저부 온도 T_b [°C]
    pub base_temp_c: f64,
    /// 핀 길이 L [m]
    pub length_m: f64,
    pub material: Material,
    pub shape: CrossSectionShape,
    pub case: FinBoundaryCase,
    /// 끝단 온도 T_L [°C]. C 조건에서만 사용한다.
    pub tip_temp_c: Option<f64>,
}

impl Default for FinConfiguration {
    fn default() -> Self {
        Self {
            h: 100.0,
            ambient_temp_c: 25.0,
            base_temp_c: 100.0,
            length_m: 0.4,
            material: Material::Copper,
            shape: CrossSectionShape::Rectangular {
                width: 0.01,
                thickness: 0.01,
            },
            case: FinBoundaryCase::Infinite,
            tip_temp_c: Some(0.0),
        }
    }
}

impl FinConfiguration {
    pub fn theta_b(&self) -> f64 {
        self.base_temp_c - self.ambient_temp_c
    }

    pub fn theta_l(&self) -> Option<f64> {
        self.tip_temp_c.map(|t| t - self.ambient_temp_c)
    }

    pub fn m(&self) -> f64 {
        fin_parameter(
            self.h,
            self.shape.perimeter(),
            self.material.conductivity(),
            self.shape.area(),
        )
    }

    pub fn big_m(&self) -> f64 {
        heat_flow_scale(
            self.h,
            self.shape.perimeter(),
            self.material.conductivity(),
            self.shape.area(),
            self.theta_b(),
        )
    }

    pub fn case_inputs(&self) -> CaseInputs {
        CaseInputs {
            m: self.m(),
            length: self.length_m,
            h: self.h,
            k: self.material.conductivity(),
            theta_l: self.theta_l(),
            theta_b: Some(self.theta_b()),
        }
    }

    /// 공식이 수치적으로 정의되는 범위인지 확인한다. 엔진 함수 자체는 이 검사 없이도 동작한다.
    pub fn validate(&self) -> Result<(), FinError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.h) {
            return Err(FinError::NonPositive("h"));
        }
        if !positive(self.material.conductivity()) {
            return Err(FinError::NonPositive("k"));
        }
        if !self.shape.has_positive_dimensions() {
            return Err(FinError::NonPositive("단면 치수"));
        }
        if !positive(self.length_m) {
            return Err(FinError::NonPositive("L"));
        }
        if self.case.needs_tip_temperature() {
            if self.tip_temp_c.is_none() {
                return Err(FinError::MissingTipTemperature);
            }
            if self.theta_b() == 0.0 {
                return Err(FinError::ZeroBaseExcess);
            }
        }
        Ok(())
    }

    /// 위치 x [m]에서의 절대 온도 [°C].
    pub fn temperature_at(&self, x: f64) -> f64 {
        let ratio = self.case.temperature_ratio(&self.case_inputs(), x);
        absolute_temperature(self.ambient_temp_c, self.base_temp_c, ratio)
    }

    /// 0~L 구간의 온도 분포 차트 점을 만든다.
    pub fn profile(&self, resolution_m: f64) -> Vec<ChartPoint> {
        let inputs = self.case_inputs();
        let case = self.case;
        let (t_inf, t_b) = (self.ambient_temp_c, self.base_temp_c);
        sample_positions(0.0, self.length_m, resolution_m, move |x| {
            absolute_temperature(t_inf, t_b, case.temperature_ratio(&inputs, x))
        })
        .collect()
    }
}

/// 한 번의 입력에 대한 핀 해석 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct FinReport {
    pub area_m2: f64,
    pub perimeter_m: f64,
    pub m: f64,
    pub big_m: f64,
    pub theta_b: f64,
    /// 조회 위치 x [m]
    pub position_m: f64,
    /// θ(x)/θ_b
    pub ratio: f64,
    /// T(x) [°C]
    pub temperature_c: f64,
    /// q_f [W]
    pub heat_rate_w: f64,
}

impl FinReport {
    /// 설정과 조회 위치로부터 모든 결과를 한 번에 다시 계산한다.
    pub fn compute(cfg: &FinConfiguration, position_m: f64) -> Self {
        let inputs = cfg.case_inputs();
        let big_m = cfg.big_m();
        let ratio = cfg.case.temperature_ratio(&inputs, position_m);
        let report = Self {
            area_m2: cfg.shape.area(),
            perimeter_m: cfg.shape.perimeter(),
            m: inputs.m,
            big_m,
            theta_b: cfg.theta_b(),
            position_m,
            ratio,
            temperature_c: absolute_temperature(cfg.ambient_temp_c, cfg.base_temp_c, ratio),
            heat_rate_w: cfg.case.heat_rate(&inputs, big_m),
        };
        debug!(
            "fin case {} m={:.4} M={:.4} x={} ratio={:.6} q={:.4}",
            cfg.case.letter(),
            report.m,
            report.big_m,
            position_m,
            report.ratio,
            report.heat_rate_w
        );
        if !report.is_finite() {
            warn!(
                "fin case {} produced non-finite results (m={}, ratio={}, q={})",
                cfg.case.letter(),
                report.m,
                report.ratio,
                report.heat_rate_w
            );
        }
        report
    }

    pub fn is_finite(&self) -> bool {
        self.m.is_finite()
            && self.ratio.is_finite()
            && self.temperature_c.is_finite()
            && self.heat_rate_w.is_finite()
    }
}
