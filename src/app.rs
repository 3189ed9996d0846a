use log::info;

use crate::config::{Config, ConfigError};
use crate::fin::FinError;
use crate::heat_exchanger::HeatExchangerError;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;
use crate::ParseEnumError;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 표준 입력이 닫힘
    #[error("입력이 종료되었습니다")]
    InputClosed,
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 핀 설정 오류
    #[error("핀 입력 오류: {0}")]
    Fin(#[from] FinError),
    /// 열교환기 계산 오류
    #[error("열교환기 계산 오류: {0}")]
    HeatExchanger(#[from] HeatExchangerError),
    /// 선택값 해석 오류
    #[error("{0}")]
    Parse(#[from] ParseEnumError),
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &mut Translator) -> Result<(), AppError> {
    loop {
        let choice = match ui_cli::main_menu(tr) {
            Ok(choice) => choice,
            Err(AppError::InputClosed) => MenuChoice::Exit,
            Err(e) => return Err(e),
        };
        let outcome = match choice {
            MenuChoice::FinAnalysis => ui_cli::handle_fin_analysis(tr, config),
            MenuChoice::Lmtd => ui_cli::handle_lmtd(tr, config),
            MenuChoice::Settings => ui_cli::handle_settings(tr, config).and_then(|changed| {
                if changed {
                    let code = i18n::resolve_language("", Some(&config.language));
                    *tr = Translator::new_with_pack(&code, None);
                    info!("언어 변경: {}", tr.language().as_code());
                }
                config.save()?;
                println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
                Ok(())
            }),
            MenuChoice::Exit => {
                config.save()?;
                info!("종료");
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        match outcome {
            Ok(()) => {}
            Err(AppError::InputClosed) => {
                config.save()?;
                break;
            }
            // 입력값 문제는 메뉴로 돌아가 다시 시도할 수 있게 한다.
            Err(AppError::HeatExchanger(e)) => {
                println!("{}: {e}", tr.t(i18n::keys::LMTD_UNDEFINED));
            }
            Err(e @ (AppError::Fin(_) | AppError::Parse(_))) => {
                println!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX));
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
