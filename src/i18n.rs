use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const DEFAULT_HINT: &str = "general.default_hint";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_FIN: &str = "main_menu.fin";
    pub const MAIN_MENU_LMTD: &str = "main_menu.lmtd";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const FIN_HEADING: &str = "fin.heading";
    pub const FIN_CASE_OPTIONS: &str = "fin.case_options";
    pub const PROMPT_CASE: &str = "fin.prompt_case";
    pub const PROMPT_SHAPE: &str = "fin.prompt_shape";
    pub const PROMPT_WIDTH: &str = "fin.prompt_width";
    pub const PROMPT_THICKNESS: &str = "fin.prompt_thickness";
    pub const PROMPT_DIAMETER: &str = "fin.prompt_diameter";
    pub const PROMPT_LENGTH: &str = "fin.prompt_length";
    pub const PROMPT_MATERIAL: &str = "fin.prompt_material";
    pub const PROMPT_H: &str = "fin.prompt_h";
    pub const PROMPT_AMBIENT: &str = "fin.prompt_ambient";
    pub const PROMPT_BASE_TEMP: &str = "fin.prompt_base_temp";
    pub const PROMPT_TIP_TEMP: &str = "fin.prompt_tip_temp";
    pub const PROMPT_POSITION: &str = "fin.prompt_position";
    pub const RESULT_GEOMETRY: &str = "fin.result_geometry";
    pub const RESULT_FIN_PARAMETER: &str = "fin.result_m";
    pub const RESULT_HEAT_SCALE: &str = "fin.result_big_m";
    pub const RESULT_RATIO: &str = "fin.result_ratio";
    pub const RESULT_TEMPERATURE: &str = "fin.result_temperature";
    pub const RESULT_HEAT_RATE: &str = "fin.result_heat_rate";
    pub const RESULT_NON_FINITE: &str = "fin.result_non_finite";
    pub const CHART_HEADING: &str = "fin.chart_heading";

    pub const LMTD_HEADING: &str = "lmtd.heading";
    pub const PROMPT_ARRANGEMENT: &str = "lmtd.prompt_arrangement";
    pub const PROMPT_FLUID1_IN: &str = "lmtd.prompt_fluid1_in";
    pub const PROMPT_FLUID1_OUT: &str = "lmtd.prompt_fluid1_out";
    pub const PROMPT_FLUID2_IN: &str = "lmtd.prompt_fluid2_in";
    pub const PROMPT_FLUID2_OUT: &str = "lmtd.prompt_fluid2_out";
    pub const RESULT_HOT_FLUID: &str = "lmtd.result_hot_fluid";
    pub const RESULT_DELTA_T: &str = "lmtd.result_delta_t";
    pub const RESULT_LMTD: &str = "lmtd.result_lmtd";
    pub const LMTD_UNDEFINED: &str = "lmtd.undefined";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
    Pt,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else if c.starts_with("pt") {
            Language::Pt
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Pt => "pt",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en/pt)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 영어 → 한국어 순으로 찾고, 모두 없으면 키를 그대로 돌려준다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        let builtin = match self.lang {
            Language::Ko => ko(key),
            Language::En => en(key).or_else(|| ko(key)),
            Language::Pt => pt(key).or_else(|| en(key)).or_else(|| ko(key)),
        };
        builtin.unwrap_or(key)
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        "ko" | "ko-kr" => Some("ko".into()),
        "en" | "en-us" | "en-uk" => Some("en-us".into()),
        "pt" | "pt-br" => Some("pt-br".into()),
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        other if other.starts_with("pt") => Some("pt-br".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en-us".into()),
        "pt" => Some("pt-br".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., pt-br)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., pt)
    let (base, _) = lang.split_once(['-', '_'])?;
    try_load(base)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        DEFAULT_HINT => "엔터 = 기본값",
        MAIN_MENU_TITLE => "\n=== Fin & Heat Exchanger Toolbox ===",
        MAIN_MENU_FIN => "1) 핀(확장 표면) 해석",
        MAIN_MENU_LMTD => "2) 이중관 열교환기 LMTD",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        FIN_HEADING => "\n-- 핀 해석 --",
        FIN_CASE_OPTIONS => "A) 끝단 대류  B) 끝단 단열  C) 끝단 온도 지정  D) 무한 핀",
        PROMPT_CASE => "경계조건",
        PROMPT_SHAPE => "단면 형상 (rectangular/circular)",
        PROMPT_WIDTH => "폭 w",
        PROMPT_THICKNESS => "두께 t",
        PROMPT_DIAMETER => "직경 d",
        PROMPT_LENGTH => "핀 길이 L",
        PROMPT_MATERIAL => "재질 (copper/aluminum-2024/stainless-316)",
        PROMPT_H => "대류 열전달계수 h",
        PROMPT_AMBIENT => "주변 온도 T∞",
        PROMPT_BASE_TEMP => "기저부 온도 T_b",
        PROMPT_TIP_TEMP => "끝단 온도 T_L",
        PROMPT_POSITION => "조회 위치 x",
        RESULT_GEOMETRY => "단면적 / 둘레",
        RESULT_FIN_PARAMETER => "핀 파라미터 m",
        RESULT_HEAT_SCALE => "열전달률 스케일 M",
        RESULT_RATIO => "온도비 θ/θ_b",
        RESULT_TEMPERATURE => "온도 T(x)",
        RESULT_HEAT_RATE => "핀 열전달률 q_f",
        RESULT_NON_FINITE => "주의: 입력값으로는 결과가 수치적으로 정의되지 않습니다.",
        CHART_HEADING => "온도 분포",
        LMTD_HEADING => "\n-- 이중관 열교환기 LMTD --",
        PROMPT_ARRANGEMENT => "흐름 방향 (parallel/counter)",
        PROMPT_FLUID1_IN => "유체 1(외관) 입구 온도",
        PROMPT_FLUID1_OUT => "유체 1(외관) 출구 온도",
        PROMPT_FLUID2_IN => "유체 2(내관) 입구 온도",
        PROMPT_FLUID2_OUT => "유체 2(내관) 출구 온도",
        RESULT_HOT_FLUID => "고온측 유체",
        RESULT_DELTA_T => "ΔT1 / ΔT2",
        RESULT_LMTD => "로그 평균 온도차 (LMTD)",
        LMTD_UNDEFINED => "LMTD를 계산할 수 없습니다",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "현재 단위 시스템:",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) SI  2) Imperial",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 (ko/en/pt/auto, 유지하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        DEFAULT_HINT => "enter = default",
        MAIN_MENU_TITLE => "\n=== Fin & Heat Exchanger Toolbox ===",
        MAIN_MENU_FIN => "1) Fin (extended surface) analysis",
        MAIN_MENU_LMTD => "2) Double-pipe exchanger LMTD",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        FIN_HEADING => "\n-- Fin Analysis --",
        FIN_CASE_OPTIONS => "A) Convective tip  B) Adiabatic tip  C) Prescribed tip temperature  D) Infinite fin",
        PROMPT_CASE => "Boundary case",
        PROMPT_SHAPE => "Cross-section (rectangular/circular)",
        PROMPT_WIDTH => "Width w",
        PROMPT_THICKNESS => "Thickness t",
        PROMPT_DIAMETER => "Diameter d",
        PROMPT_LENGTH => "Fin length L",
        PROMPT_MATERIAL => "Material (copper/aluminum-2024/stainless-316)",
        PROMPT_H => "Convection coefficient h",
        PROMPT_AMBIENT => "Ambient temperature T∞",
        PROMPT_BASE_TEMP => "Base temperature T_b",
        PROMPT_TIP_TEMP => "Tip temperature T_L",
        PROMPT_POSITION => "Probe position x",
        RESULT_GEOMETRY => "Area / perimeter",
        RESULT_FIN_PARAMETER => "Fin parameter m",
        RESULT_HEAT_SCALE => "Heat-rate scale M",
        RESULT_RATIO => "Temperature ratio θ/θ_b",
        RESULT_TEMPERATURE => "Temperature T(x)",
        RESULT_HEAT_RATE => "Fin heat rate q_f",
        RESULT_NON_FINITE => "Warning: the inputs do not give a numerically defined result.",
        CHART_HEADING => "Temperature distribution",
        LMTD_HEADING => "\n-- Double-pipe Exchanger LMTD --",
        PROMPT_ARRANGEMENT => "Flow arrangement (parallel/counter)",
        PROMPT_FLUID1_IN => "Fluid 1 (outer) inlet temperature",
        PROMPT_FLUID1_OUT => "Fluid 1 (outer) outlet temperature",
        PROMPT_FLUID2_IN => "Fluid 2 (inner) inlet temperature",
        PROMPT_FLUID2_OUT => "Fluid 2 (inner) outlet temperature",
        RESULT_HOT_FLUID => "Hot stream",
        RESULT_DELTA_T => "ΔT1 / ΔT2",
        RESULT_LMTD => "Log-mean temperature difference (LMTD)",
        LMTD_UNDEFINED => "LMTD is undefined",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit system:",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) SI  2) Imperial",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_PROMPT_LANGUAGE => "Language code (ko/en/pt/auto, enter to keep): ",
        SETTINGS_INVALID => "Invalid input; unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    })
}

fn pt(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Erro",
        APP_EXIT => "Encerrando.",
        DEFAULT_HINT => "enter = padrão",
        MAIN_MENU_FIN => "1) Aletas",
        MAIN_MENU_LMTD => "2) Trocador Bitubular",
        MAIN_MENU_SETTINGS => "3) Configurações",
        MAIN_MENU_EXIT => "0) Sair",
        PROMPT_MENU_SELECT => "Selecione: ",
        INVALID_SELECTION_RETRY => "Entrada inválida. Tente novamente.",
        ERROR_INVALID_NUMBER => "Digite um número.",
        FIN_HEADING => "\n-- Aletas --",
        FIN_CASE_OPTIONS => "A) Convecção na ponta  B) Adiabática  C) Temperatura prescrita  D) Aleta infinita",
        PROMPT_CASE => "Caso",
        PROMPT_SHAPE => "Formato (rectangular/circular)",
        PROMPT_LENGTH => "Comprimento L",
        PROMPT_MATERIAL => "Material (copper/aluminum-2024/stainless-316)",
        PROMPT_POSITION => "Posição x",
        RESULT_HEAT_RATE => "Taxa de transferência de calor da aleta",
        CHART_HEADING => "Distribuição de temperatura",
        LMTD_HEADING => "\n-- Trocador Bitubular --",
        PROMPT_ARRANGEMENT => "Sentido de escoamento (parallel/counter)",
        PROMPT_FLUID1_IN => "Fluido 1 (externo) temperatura de entrada",
        PROMPT_FLUID1_OUT => "Fluido 1 (externo) temperatura de saída",
        PROMPT_FLUID2_IN => "Fluido 2 (interno) temperatura de entrada",
        PROMPT_FLUID2_OUT => "Fluido 2 (interno) temperatura de saída",
        RESULT_LMTD => "Média logarítmica das diferenças de temperatura (LMTD)",
        SETTINGS_HEADING => "\n-- Configurações --",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portuguese_falls_back_to_english() {
        let tr = Translator::new("pt-br");
        assert_eq!(tr.language(), Language::Pt);
        assert_eq!(tr.t(keys::MAIN_MENU_FIN), "1) Aletas");
        assert_eq!(tr.t(keys::RESULT_HEAT_SCALE), "Heat-rate scale M");
    }

    #[test]
    fn unknown_key_is_returned_verbatim() {
        let tr = Translator::new("en");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn explicit_language_wins_over_config() {
        assert_eq!(resolve_language("pt", Some("ko")), "pt-br");
        assert_eq!(resolve_language("auto", Some("ko-kr")), "ko");
    }

    #[test]
    fn nested_pack_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("[fin]\nheading = \"Fins\"\n").unwrap();
        assert_eq!(map.get(keys::FIN_HEADING).map(String::as_str), Some("Fins"));
    }
}
