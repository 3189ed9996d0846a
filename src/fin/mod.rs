//! 핀(확장 표면) 해석 모듈 모음.
//! 단면 형상, 끝단 경계조건, 온도분포/열전달률 공식, 차트 샘플링으로 구성한다.

pub mod analysis;
pub mod boundary;
pub mod chart;
pub mod geometry;

pub use analysis::*;
pub use boundary::*;
pub use chart::*;
pub use geometry::*;
