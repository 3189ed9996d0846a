use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseEnumError;

/// 핀 단면 형상과 치수 [m].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CrossSectionShape {
    Rectangular { width: f64, thickness: f64 },
    Circular { diameter: f64 },
}

/// 치수 없이 형상 종류만 나타낸다. 입력 화면에서 형상을 고를 때 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangular,
    Circular,
}

impl CrossSectionShape {
    /// 단면적 A_tr [m²].
    pub fn area(&self) -> f64 {
        match *self {
            CrossSectionShape::Rectangular { width, thickness } => width * thickness,
            CrossSectionShape::Circular { diameter } => PI * (diameter / 2.0).powi(2),
        }
    }

    /// 둘레 P [m]. 대류가 일어나는 젖은 둘레이다.
    pub fn perimeter(&self) -> f64 {
        match *self {
            CrossSectionShape::Rectangular { width, thickness } => 2.0 * (width + thickness),
            CrossSectionShape::Circular { diameter } => PI * diameter,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            CrossSectionShape::Rectangular { .. } => ShapeKind::Rectangular,
            CrossSectionShape::Circular { .. } => ShapeKind::Circular,
        }
    }

    /// 모든 치수가 유한한 양수인지 확인한다.
    pub fn has_positive_dimensions(&self) -> bool {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        match *self {
            CrossSectionShape::Rectangular { width, thickness } => {
                positive(width) && positive(thickness)
            }
            CrossSectionShape::Circular { diameter } => positive(diameter),
        }
    }
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Rectangular => "rectangular",
            ShapeKind::Circular => "circular",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rectangular" | "rect" | "r" => Ok(ShapeKind::Rectangular),
            "circular" | "circle" | "c" => Ok(ShapeKind::Circular),
            _ => Err(ParseEnumError::new("shape", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rectangular_area_and_perimeter() {
        let s = CrossSectionShape::Rectangular {
            width: 0.01,
            thickness: 0.02,
        };
        assert_relative_eq!(s.area(), 2.0e-4, max_relative = 1e-12);
        assert_relative_eq!(s.perimeter(), 0.06, max_relative = 1e-12);
    }

    #[test]
    fn circular_area_and_perimeter() {
        let s = CrossSectionShape::Circular { diameter: 0.005 };
        assert_relative_eq!(s.area(), 1.963_495_408_493_620_7e-5, max_relative = 1e-12);
        assert_relative_eq!(s.perimeter(), 0.015_707_963_267_948_967, max_relative = 1e-12);
    }

    #[test]
    fn zero_dimension_is_not_positive() {
        let s = CrossSectionShape::Rectangular {
            width: 0.01,
            thickness: 0.0,
        };
        assert!(!s.has_positive_dimensions());
        assert!(CrossSectionShape::Circular { diameter: 0.01 }.has_positive_dimensions());
    }
}
