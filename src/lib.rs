//! 핀(확장 표면) 해석과 이중관 열교환기 LMTD 계산을 라이브러리로 분리하여
//! CLI 외의 다른 프런트엔드에서도 그대로 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod fin;
pub mod heat_exchanger;
pub mod i18n;
pub mod logging;
pub mod material_db;
pub mod ui_cli;
pub mod units;

/// 문자열을 열거형 값으로 해석하지 못했을 때의 오류.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("알 수 없는 {kind} 값: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
