use serde::{Deserialize, Serialize};

/// 대류 열전달계수(h) 단위. 내부 기준은 W/(m²·K)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatTransferUnit {
    WPerSquareMeterK,
    BtuPerHourSquareFootF,
}

impl HeatTransferUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            HeatTransferUnit::WPerSquareMeterK => "W/(m²·K)",
            HeatTransferUnit::BtuPerHourSquareFootF => "Btu/(h·ft²·°F)",
        }
    }

    fn to_base_factor(self) -> f64 {
        match self {
            HeatTransferUnit::WPerSquareMeterK => 1.0,
            HeatTransferUnit::BtuPerHourSquareFootF => 5.678263,
        }
    }
}

/// 열전달계수를 변환한다.
pub fn convert_heat_transfer(value: f64, from: HeatTransferUnit, to: HeatTransferUnit) -> f64 {
    value * from.to_base_factor() / to.to_base_factor()
}
