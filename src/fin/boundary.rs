use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseEnumError;

/// 핀 끝단 경계조건. 교재 표기(A~D)를 따른다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinBoundaryCase {
    /// A: 끝단 대류
    ConvectiveTip,
    /// B: 끝단 단열
    AdiabaticTip,
    /// C: 끝단 온도 지정
    PrescribedTemperature,
    /// D: 무한히 긴 핀
    Infinite,
}

/// 경계조건 공식에 들어가는 값 묶음.
///
/// `theta_l`/`theta_b`는 끝단 온도 지정(C) 조건에서만 쓰이며, 없으면 결과가 NaN이 된다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseInputs {
    /// 핀 파라미터 m [1/m]
    pub m: f64,
    /// 핀 길이 L [m]
    pub length: f64,
    /// 대류 열전달계수 h [W/(m²·K)]
    pub h: f64,
    /// 열전도율 k [W/(m·K)]
    pub k: f64,
    /// 끝단 과잉온도 θ_L = T_L − T∞
    pub theta_l: Option<f64>,
    /// 기저부 과잉온도 θ_b = T_b − T∞
    pub theta_b: Option<f64>,
}

impl CaseInputs {
    fn tip_ratio(&self) -> f64 {
        match (self.theta_l, self.theta_b) {
            (Some(l), Some(b)) => l / b,
            _ => f64::NAN,
        }
    }

    /// h/(mk)
    fn convection_ratio(&self) -> f64 {
        self.h / (self.m * self.k)
    }
}

impl FinBoundaryCase {
    pub const ALL: [FinBoundaryCase; 4] = [
        FinBoundaryCase::ConvectiveTip,
        FinBoundaryCase::AdiabaticTip,
        FinBoundaryCase::PrescribedTemperature,
        FinBoundaryCase::Infinite,
    ];

    pub fn letter(self) -> char {
        match self {
            FinBoundaryCase::ConvectiveTip => 'A',
            FinBoundaryCase::AdiabaticTip => 'B',
            FinBoundaryCase::PrescribedTemperature => 'C',
            FinBoundaryCase::Infinite => 'D',
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FinBoundaryCase::ConvectiveTip => "Convection heat transfer",
            FinBoundaryCase::AdiabaticTip => "Adiabatic",
            FinBoundaryCase::PrescribedTemperature => "Prescribed temperature",
            FinBoundaryCase::Infinite => "Infinite fin",
        }
    }

    /// 끝단 온도 T_L 입력이 필요한 조건인지 여부.
    pub fn needs_tip_temperature(self) -> bool {
        matches!(self, FinBoundaryCase::PrescribedTemperature)
    }

    /// 무차원 온도분포 θ(x)/θ_b.
    pub fn temperature_ratio(self, p: &CaseInputs, x: f64) -> f64 {
        let (m, l) = (p.m, p.length);
        match self {
            FinBoundaryCase::ConvectiveTip => {
                let r = p.convection_ratio();
                ((m * (l - x)).cosh() + r * (m * (l - x)).sinh())
                    / ((m * l).cosh() + r * (m * l).sinh())
            }
            FinBoundaryCase::AdiabaticTip => (m * (l - x)).cosh() / (m * l).cosh(),
            FinBoundaryCase::PrescribedTemperature => {
                (p.tip_ratio() * (m * x).sinh() + (m * (l - x)).sinh()) / (m * l).sinh()
            }
            FinBoundaryCase::Infinite => {
                if x < 0.0 {
                    f64::NAN
                } else {
                    (-m * x).exp()
                }
            }
        }
    }

    /// 핀 전체 열전달률 q_f [W]. `big_m`은 [`super::heat_flow_scale`]의 결과이다.
    pub fn heat_rate(self, p: &CaseInputs, big_m: f64) -> f64 {
        let ml = p.m * p.length;
        match self {
            FinBoundaryCase::ConvectiveTip => {
                let r = p.convection_ratio();
                big_m * (ml.sinh() + r * ml.cosh()) / (ml.cosh() + r * ml.sinh())
            }
            FinBoundaryCase::AdiabaticTip => big_m * ml.tanh(),
            FinBoundaryCase::PrescribedTemperature => {
                big_m * (ml.cosh() - p.tip_ratio()) / ml.sinh()
            }
            FinBoundaryCase::Infinite => big_m,
        }
    }
}

/// [`FinBoundaryCase::temperature_ratio`]의 함수형 진입점.
pub fn temperature_ratio(case: FinBoundaryCase, inputs: &CaseInputs, x: f64) -> f64 {
    case.temperature_ratio(inputs, x)
}

/// [`FinBoundaryCase::heat_rate`]의 함수형 진입점.
pub fn fin_heat_rate(case: FinBoundaryCase, inputs: &CaseInputs, big_m: f64) -> f64 {
    case.heat_rate(inputs, big_m)
}

impl fmt::Display for FinBoundaryCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.letter(), self.description())
    }
}

impl FromStr for FinBoundaryCase {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" | "convective" | "convection" => Ok(FinBoundaryCase::ConvectiveTip),
            "b" | "adiabatic" => Ok(FinBoundaryCase::AdiabaticTip),
            "c" | "prescribed" => Ok(FinBoundaryCase::PrescribedTemperature),
            "d" | "infinite" => Ok(FinBoundaryCase::Infinite),
            _ => Err(ParseEnumError::new("boundary case", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn inputs() -> CaseInputs {
        CaseInputs {
            m: 9.0,
            length: 0.4,
            h: 100.0,
            k: 398.0,
            theta_l: Some(-25.0),
            theta_b: Some(75.0),
        }
    }

    #[test]
    fn adiabatic_heat_rate_is_tanh_scaled() {
        let p = inputs();
        let q = FinBoundaryCase::AdiabaticTip.heat_rate(&p, 10.0);
        assert_relative_eq!(q, 10.0 * (3.6f64).tanh(), max_relative = 1e-12);
    }

    #[test]
    fn adiabatic_tip_has_zero_gradient_shape() {
        // cosh(0)/cosh(mL)
        let p = inputs();
        let r = FinBoundaryCase::AdiabaticTip.temperature_ratio(&p, p.length);
        assert_relative_eq!(r, 1.0 / (3.6f64).cosh(), max_relative = 1e-12);
    }

    #[test]
    fn prescribed_without_thetas_is_nan() {
        let p = CaseInputs {
            theta_l: None,
            ..inputs()
        };
        let case = FinBoundaryCase::PrescribedTemperature;
        assert!(case.temperature_ratio(&p, 0.1).is_nan());
        assert!(case.heat_rate(&p, 10.0).is_nan());
    }

    #[test]
    fn infinite_fin_rejects_negative_position() {
        let p = inputs();
        assert!(FinBoundaryCase::Infinite.temperature_ratio(&p, -0.01).is_nan());
        assert_relative_eq!(
            FinBoundaryCase::Infinite.temperature_ratio(&p, 0.1),
            (-0.9f64).exp()
        );
    }

    #[test]
    fn zero_m_yields_non_finite_without_panicking() {
        let p = CaseInputs { m: 0.0, ..inputs() };
        assert!(!FinBoundaryCase::ConvectiveTip.heat_rate(&p, 1.0).is_finite());
        assert!(!FinBoundaryCase::PrescribedTemperature
            .temperature_ratio(&p, 0.2)
            .is_finite());
    }

    #[test]
    fn parse_letters_and_names() {
        assert_eq!("a".parse(), Ok(FinBoundaryCase::ConvectiveTip));
        assert_eq!(" D ".parse(), Ok(FinBoundaryCase::Infinite));
        assert_eq!("adiabatic".parse(), Ok(FinBoundaryCase::AdiabaticTip));
        assert!("e".parse::<FinBoundaryCase>().is_err());
    }
}
