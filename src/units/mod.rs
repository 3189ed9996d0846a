//! 입력/출력 단위 정의 모음.
//! 엔진 내부 기준은 °C, m, W/(m²·K), W/(m·K)이며 CLI에서만 다른 단위를 환산한다.

pub mod conductivity;
pub mod heat_transfer;
pub mod length;
pub mod temperature;

pub use conductivity::{convert_conductivity, ConductivityUnit};
pub use heat_transfer::{convert_heat_transfer, HeatTransferUnit};
pub use length::{convert_length, LengthUnit};
pub use temperature::{
    convert_temperature, convert_temperature_diff, TemperatureDiffUnit, TemperatureUnit,
};
