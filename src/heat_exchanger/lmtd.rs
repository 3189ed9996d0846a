use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseEnumError;

/// 한 유체의 입구/출구 온도(°C).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatExchangerFluid {
    pub inlet_c: f64,
    pub outlet_c: f64,
}

impl HeatExchangerFluid {
    pub fn new(inlet_c: f64, outlet_c: f64) -> Self {
        Self { inlet_c, outlet_c }
    }
}

/// 두 유체의 흐름 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowArrangement {
    Parallel,
    CounterCurrent,
}

/// LMTD를 정의할 수 없는 입력.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HeatExchangerError {
    /// ΔT1 또는 ΔT2가 0 이하 (온도 교차)
    #[error("온도차가 0 이하입니다: ΔT1={delta_t1}, ΔT2={delta_t2}")]
    NonPositiveTemperatureDifference { delta_t1: f64, delta_t2: f64 },
    /// ΔT1 == ΔT2 이면 (ΔT1−ΔT2)/ln(ΔT1/ΔT2)가 0/0
    #[error("ΔT1과 ΔT2가 같아 LMTD가 정의되지 않습니다: {0}")]
    EqualTemperatureDifferences(f64),
}

/// LMTD 계산 과정과 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LmtdBreakdown {
    pub hot: HeatExchangerFluid,
    pub cold: HeatExchangerFluid,
    pub delta_t1: f64,
    pub delta_t2: f64,
    pub lmtd: f64,
}

/// 입구 온도가 높은 쪽을 고온 유체로 본다. 같으면 두 번째 유체를 고온측으로 둔다.
pub fn split_hot_cold(
    a: HeatExchangerFluid,
    b: HeatExchangerFluid,
) -> (HeatExchangerFluid, HeatExchangerFluid) {
    if a.inlet_c > b.inlet_c {
        (a, b)
    } else {
        (b, a)
    }
}

/// 흐름 방향에 따라 양 끝단 온도차 (ΔT1, ΔT2)를 구한다.
pub fn terminal_differences(
    hot: HeatExchangerFluid,
    cold: HeatExchangerFluid,
    arrangement: FlowArrangement,
) -> (f64, f64) {
    match arrangement {
        FlowArrangement::Parallel => (hot.inlet_c - cold.inlet_c, hot.outlet_c - cold.outlet_c),
        FlowArrangement::CounterCurrent => {
            (hot.inlet_c - cold.outlet_c, hot.outlet_c - cold.inlet_c)
        }
    }
}

/// ΔT1, ΔT2가 모두 양수이고 서로 다를 때만 값을 돌려준다.
fn log_mean(delta1: f64, delta2: f64) -> Result<f64, HeatExchangerError> {
    if !(delta1 > 0.0 && delta2 > 0.0) {
        return Err(HeatExchangerError::NonPositiveTemperatureDifference {
            delta_t1: delta1,
            delta_t2: delta2,
        });
    }
    if delta1 == delta2 {
        return Err(HeatExchangerError::EqualTemperatureDifferences(delta1));
    }
    Ok((delta1 - delta2) / (delta1 / delta2).ln())
}

/// LMTD를 계산하고 고온/저온 판정과 ΔT1, ΔT2를 함께 돌려준다.
pub fn lmtd_breakdown(
    a: HeatExchangerFluid,
    b: HeatExchangerFluid,
    arrangement: FlowArrangement,
) -> Result<LmtdBreakdown, HeatExchangerError> {
    let (hot, cold) = split_hot_cold(a, b);
    let (delta_t1, delta_t2) = terminal_differences(hot, cold, arrangement);
    let lmtd = log_mean(delta_t1, delta_t2)?;
    Ok(LmtdBreakdown {
        hot,
        cold,
        delta_t1,
        delta_t2,
        lmtd,
    })
}

/// 로그 평균 온도차 [K]. 정의되지 않는 입력에서는 NaN을 반환한다.
pub fn log_mean_temperature_difference(
    a: HeatExchangerFluid,
    b: HeatExchangerFluid,
    arrangement: FlowArrangement,
) -> f64 {
    lmtd_breakdown(a, b, arrangement)
        .map(|r| r.lmtd)
        .unwrap_or(f64::NAN)
}

impl FlowArrangement {
    pub fn as_str(self) -> &'static str {
        match self {
            FlowArrangement::Parallel => "parallel",
            FlowArrangement::CounterCurrent => "counter-current",
        }
    }
}

impl fmt::Display for FlowArrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowArrangement {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "parallel" | "paralelo" | "p" => Ok(FlowArrangement::Parallel),
            "counter" | "counter-current" | "countercurrent" | "contra-corrente" | "c" => {
                Ok(FlowArrangement::CounterCurrent)
            }
            _ => Err(ParseEnumError::new("flow arrangement", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn hot_stream_is_higher_inlet_regardless_of_order() {
        let a = HeatExchangerFluid::new(22.0, 25.0);
        let b = HeatExchangerFluid::new(49.0, 43.0);
        let (hot, cold) = split_hot_cold(a, b);
        assert_eq!(hot, b);
        assert_eq!(cold, a);
    }

    #[test]
    fn tie_treats_second_fluid_as_hot() {
        let a = HeatExchangerFluid::new(40.0, 30.0);
        let b = HeatExchangerFluid::new(40.0, 35.0);
        assert_eq!(split_hot_cold(a, b).0, b);
    }

    #[test]
    fn both_negative_differences_are_rejected() {
        // 두 ΔT가 모두 음수면 비는 양수라 ln은 정의되지만 물리적으로 무의미하다.
        let r = log_mean(-2.0, -4.0);
        assert!(matches!(
            r,
            Err(HeatExchangerError::NonPositiveTemperatureDifference { .. })
        ));
    }

    #[test]
    fn log_mean_lies_between_terminal_differences() {
        let lm = log_mean(30.0, 10.0).unwrap();
        assert!(lm > 10.0 && lm < 30.0);
        assert_relative_eq!(lm, 20.0 / 3.0f64.ln());
    }

    #[test]
    fn parse_arrangement_names() {
        assert_eq!("Paralelo".parse(), Ok(FlowArrangement::Parallel));
        assert_eq!("contra-corrente".parse(), Ok(FlowArrangement::CounterCurrent));
        assert!("cross".parse::<FlowArrangement>().is_err());
    }
}
