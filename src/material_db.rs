//! 핀 재질과 열전도율(k) 테이블을 제공한다.
//! 값은 상온 부근의 대표값이며 온도 의존성은 고려하지 않는다.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseEnumError;

/// 선택 가능한 핀 재질.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Material {
    Copper,
    Aluminum2024,
    StainlessSteel316,
}

#[derive(Debug)]
pub struct MaterialData {
    pub material: Material,
    pub code: &'static str,
    pub name: &'static str,
    pub notes: &'static str,
    /// 열전도율 [W/(m·K)]
    pub conductivity_w_mk: f64,
}

impl Material {
    pub const ALL: [Material; 3] = [
        Material::Copper,
        Material::Aluminum2024,
        Material::StainlessSteel316,
    ];

    pub fn data(self) -> &'static MaterialData {
        match self {
            Material::Copper => &MATERIALS[0],
            Material::Aluminum2024 => &MATERIALS[1],
            Material::StainlessSteel316 => &MATERIALS[2],
        }
    }

    /// 열전도율 k [W/(m·K)].
    pub fn conductivity(self) -> f64 {
        self.data().conductivity_w_mk
    }

    pub fn code(self) -> &'static str {
        self.data().code
    }

    pub fn name(self) -> &'static str {
        self.data().name
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Material {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_material(s.trim())
            .map(|m| m.material)
            .ok_or_else(|| ParseEnumError::new("material", s))
    }
}

pub fn materials() -> &'static [MaterialData] {
    MATERIALS
}

/// 코드 또는 표시 이름으로 재질을 찾는다. 대소문자는 무시한다.
pub fn find_material(code: &str) -> Option<&'static MaterialData> {
    MATERIALS
        .iter()
        .find(|m| m.code.eq_ignore_ascii_case(code) || m.name.eq_ignore_ascii_case(code))
}

// k=180은 Al 2024 계열, k=14는 AISI 316 계열 값이다. 라벨은 k 값 기준으로 붙인다.
const MATERIALS: &[MaterialData] = &[
    MaterialData {
        material: Material::Copper,
        code: "copper",
        name: "Cobre",
        notes: "순동; 상온 대표값",
        conductivity_w_mk: 398.0,
    },
    MaterialData {
        material: Material::Aluminum2024,
        code: "aluminum-2024",
        name: "Alumínio 2024",
        notes: "Al-Cu 합금; 상온 대표값",
        conductivity_w_mk: 180.0,
    },
    MaterialData {
        material: Material::StainlessSteel316,
        code: "stainless-316",
        name: "Aço Inox AISI 316",
        notes: "오스테나이트계 스테인리스; 상온 대표값",
        conductivity_w_mk: 14.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_enum() {
        for m in Material::ALL {
            assert_eq!(m.data().material, m);
            assert!(m.conductivity() > 0.0);
        }
    }

    #[test]
    fn lookup_by_code_or_label() {
        assert_eq!(
            find_material("COPPER").map(|m| m.material),
            Some(Material::Copper)
        );
        assert_eq!(
            "Aço Inox AISI 316".parse::<Material>().ok(),
            Some(Material::StainlessSteel316)
        );
        assert_eq!(Material::Aluminum2024.conductivity(), 180.0);
        assert!("brass".parse::<Material>().is_err());
    }
}
