use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseEnumError;

/// 길이 단위. 내부 기준은 미터이다. 핀 치수 입력에 쓰이는 범위만 둔다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Centimeter,
    Millimeter,
    Inch,
    Foot,
}

impl LengthUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
        }
    }

    fn meters_per_unit(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
        }
    }
}

impl FromStr for LengthUnit {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "meter" | "metros" => Ok(LengthUnit::Meter),
            "cm" => Ok(LengthUnit::Centimeter),
            "mm" => Ok(LengthUnit::Millimeter),
            "in" | "inch" | "\"" => Ok(LengthUnit::Inch),
            "ft" | "foot" | "'" => Ok(LengthUnit::Foot),
            _ => Err(ParseEnumError::new("length unit", s)),
        }
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    value * from.meters_per_unit() / to.meters_per_unit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn millimeter_and_inch() {
        assert_relative_eq!(
            convert_length(10.0, LengthUnit::Millimeter, LengthUnit::Meter),
            0.01,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            convert_length(1.0, LengthUnit::Foot, LengthUnit::Inch),
            12.0,
            max_relative = 1e-12
        );
    }
}
