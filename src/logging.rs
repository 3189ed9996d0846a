use std::io::Write;

use env_logger::{Builder, Target};
use log::LevelFilter;

/// `-v` 횟수를 로그 레벨로 바꾼다. 0이면 `None`을 돌려 RUST_LOG 또는 기본값을 따른다.
pub fn level_from_verbosity(verbosity: u8) -> Option<LevelFilter> {
    match verbosity {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

/// 로거를 초기화한다. 로그는 결과 출력과 섞이지 않도록 stderr로 보낸다.
///
/// 우선순위: `-v` 플래그 → RUST_LOG → warn.
pub fn init_logging(verbosity: u8) {
    let level = level_from_verbosity(verbosity)
        .or_else(|| {
            std::env::var("RUST_LOG")
                .ok()
                .and_then(|v| v.parse::<LevelFilter>().ok())
        })
        .unwrap_or(LevelFilter::Warn);

    let _ = Builder::new()
        .filter_level(level)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{:5} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_from_verbosity(0), None);
        assert_eq!(level_from_verbosity(2), Some(LevelFilter::Debug));
        assert_eq!(level_from_verbosity(9), Some(LevelFilter::Trace));
    }
}
