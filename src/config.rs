use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::fin::{CrossSectionShape, FinBoundaryCase, FinConfiguration};
use crate::heat_exchanger::{FlowArrangement, HeatExchangerFluid};
use crate::material_db::Material;
use crate::units::*;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// SI 기준. 내부 계산 기본값.
    SI,
    /// 영국식/야드파운드법
    Imperial,
}

impl UnitSystem {
    /// 프리셋에 해당하는 기본 입력 단위.
    pub fn default_units(self) -> DefaultUnits {
        match self {
            UnitSystem::SI => DefaultUnits::default(),
            UnitSystem::Imperial => DefaultUnits {
                temperature: TemperatureUnit::Fahrenheit,
                length: LengthUnit::Inch,
                heat_transfer: HeatTransferUnit::BtuPerHourSquareFootF,
                conductivity: ConductivityUnit::BtuPerHourFootF,
            },
        }
    }
}

/// 물리량별 입력/표시 단위 설정을 담는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub temperature: TemperatureUnit,
    pub length: LengthUnit,
    pub heat_transfer: HeatTransferUnit,
    pub conductivity: ConductivityUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            temperature: TemperatureUnit::Celsius,
            length: LengthUnit::Meter,
            heat_transfer: HeatTransferUnit::WPerSquareMeterK,
            conductivity: ConductivityUnit::WPerMeterK,
        }
    }
}

/// 핀 해석 화면의 초기값. 모든 값은 내부 기준 단위(°C, m, W/(m²·K))이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinDefaults {
    pub h_w_m2k: f64,
    pub ambient_temp_c: f64,
    pub base_temp_c: f64,
    pub tip_temp_c: f64,
    pub length_m: f64,
    /// 조회 위치 x
    pub position_m: f64,
    /// 차트 샘플 간격
    pub chart_resolution_m: f64,
    pub material: Material,
    pub case: FinBoundaryCase,
    pub shape: CrossSectionShape,
}

impl Default for FinDefaults {
    fn default() -> Self {
        let fin = FinConfiguration::default();
        Self {
            h_w_m2k: fin.h,
            ambient_temp_c: fin.ambient_temp_c,
            base_temp_c: fin.base_temp_c,
            tip_temp_c: fin.tip_temp_c.unwrap_or(0.0),
            length_m: fin.length_m,
            position_m: 0.05,
            chart_resolution_m: 0.025,
            material: fin.material,
            case: fin.case,
            shape: fin.shape,
        }
    }
}

impl FinDefaults {
    pub fn to_configuration(&self) -> FinConfiguration {
        FinConfiguration {
            h: self.h_w_m2k,
            ambient_temp_c: self.ambient_temp_c,
            base_temp_c: self.base_temp_c,
            length_m: self.length_m,
            material: self.material,
            shape: self.shape,
            case: self.case,
            tip_temp_c: Some(self.tip_temp_c),
        }
    }
}

/// 이중관 열교환기 화면의 초기값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangerDefaults {
    pub arrangement: FlowArrangement,
    /// 유체 1 (외관)
    pub fluid1: HeatExchangerFluid,
    /// 유체 2 (내관)
    pub fluid2: HeatExchangerFluid,
}

impl Default for ExchangerDefaults {
    fn default() -> Self {
        Self {
            arrangement: FlowArrangement::Parallel,
            fluid1: HeatExchangerFluid::new(49.0, 43.0),
            fluid2: HeatExchangerFluid::new(22.0, 25.0),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto, ko, en-us, pt-br ...)
    pub language: String,
    pub unit_system: UnitSystem,
    pub default_units: DefaultUnits,
    pub fin: FinDefaults,
    pub exchanger: ExchangerDefaults,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            unit_system: UnitSystem::SI,
            default_units: DefaultUnits::default(),
            fin: FinDefaults::default(),
            exchanger: ExchangerDefaults::default(),
            path: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 지정한 경로의 설정을 로드하거나 없으면 기본 설정을 만들어 저장한다.
pub fn load_or_default_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let mut cfg = if path.exists() {
        let content = fs::read_to_string(path)?;
        info!("설정 파일 로드: {}", path.display());
        toml::from_str::<Config>(&content)?
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        info!("기본 설정 파일 생성: {}", path.display());
        cfg
    };
    cfg.path = Some(path.to_path_buf());
    Ok(cfg)
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 로드했던 파일(없으면 config.toml)에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = self
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        save_config(self, &path)
    }

    /// 단위 프리셋을 바꾸고 기본 단위를 프리셋 값으로 덮어쓴다.
    pub fn set_unit_system(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.default_units = system.default_units();
    }
}
