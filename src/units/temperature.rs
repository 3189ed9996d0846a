use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseEnumError;

/// 온도 단위. 엔진 기준은 섭씨이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Kelvin,
    Fahrenheit,
}

/// 온도차 단위. 절대 기준점 없이 배율만 다룬다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureDiffUnit {
    Kelvin,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    /// 같은 계열의 온도차 단위.
    pub fn difference_unit(self) -> TemperatureDiffUnit {
        match self {
            TemperatureUnit::Celsius | TemperatureUnit::Kelvin => TemperatureDiffUnit::Kelvin,
            TemperatureUnit::Fahrenheit => TemperatureDiffUnit::Fahrenheit,
        }
    }
}

impl TemperatureDiffUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureDiffUnit::Kelvin => "K",
            TemperatureDiffUnit::Fahrenheit => "°F",
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('°').to_lowercase().as_str() {
            "c" | "celsius" => Ok(TemperatureUnit::Celsius),
            "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
            "f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(ParseEnumError::new("temperature unit", s)),
        }
    }
}

fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Kelvin => value - 273.15,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
    }
}

fn from_celsius(value_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value_c,
        TemperatureUnit::Kelvin => value_c + 273.15,
        TemperatureUnit::Fahrenheit => value_c * 9.0 / 5.0 + 32.0,
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    from_celsius(to_celsius(value, from), to)
}

/// 온도차를 변환한다. 켈빈/섭씨는 1:1, 화씨는 1.8:1 배율이다.
pub fn convert_temperature_diff(
    value: f64,
    from: TemperatureDiffUnit,
    to: TemperatureDiffUnit,
) -> f64 {
    let base_k = match from {
        TemperatureDiffUnit::Kelvin => value,
        TemperatureDiffUnit::Fahrenheit => value * 5.0 / 9.0,
    };
    match to {
        TemperatureDiffUnit::Kelvin => base_k,
        TemperatureDiffUnit::Fahrenheit => base_k * 9.0 / 5.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn fahrenheit_reference_points() {
        use TemperatureUnit::*;
        assert_abs_diff_eq!(convert_temperature(212.0, Fahrenheit, Celsius), 100.0, epsilon = 1e-12);
        assert_abs_diff_eq!(convert_temperature(25.0, Celsius, Kelvin), 298.15, epsilon = 1e-12);
        let diff_f = convert_temperature_diff(
            10.0,
            TemperatureDiffUnit::Kelvin,
            TemperatureDiffUnit::Fahrenheit,
        );
        assert_abs_diff_eq!(diff_f, 18.0, epsilon = 1e-12);
    }

    #[test]
    fn parse_symbols() {
        assert_eq!("°C".parse(), Ok(TemperatureUnit::Celsius));
        assert_eq!("F".parse(), Ok(TemperatureUnit::Fahrenheit));
        assert!("R".parse::<TemperatureUnit>().is_err());
    }
}
