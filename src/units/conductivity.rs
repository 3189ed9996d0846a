use serde::{Deserialize, Serialize};

/// 열전도율(k) 단위. 재질 테이블은 W/(m·K) 기준이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConductivityUnit {
    WPerMeterK,
    BtuPerHourFootF,
}

impl ConductivityUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            ConductivityUnit::WPerMeterK => "W/(m·K)",
            ConductivityUnit::BtuPerHourFootF => "Btu/(h·ft·°F)",
        }
    }
}

/// 열전도율을 변환한다.
pub fn convert_conductivity(value: f64, from: ConductivityUnit, to: ConductivityUnit) -> f64 {
    // 1 Btu/(h·ft·°F) = 1.730735 W/(m·K)
    const FACTOR: f64 = 1.730735;
    match (from, to) {
        (ConductivityUnit::WPerMeterK, ConductivityUnit::BtuPerHourFootF) => value / FACTOR,
        (ConductivityUnit::BtuPerHourFootF, ConductivityUnit::WPerMeterK) => value * FACTOR,
        _ => value,
    }
}
