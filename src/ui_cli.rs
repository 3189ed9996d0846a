use std::fmt::{Display, Write as _};
use std::io::{self, Write};
use std::str::FromStr;

use crate::app::AppError;
use crate::config::{Config, DefaultUnits, UnitSystem};
use crate::fin::{
    validate_resolution, ChartPoint, CrossSectionShape, FinBoundaryCase, FinConfiguration,
    FinReport, ShapeKind,
};
use crate::heat_exchanger::{lmtd_breakdown, HeatExchangerFluid, LmtdBreakdown};
use crate::i18n::{keys, Translator};
use crate::material_db::{materials, Material};
use crate::units::*;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    FinAnalysis,
    Lmtd,
    Settings,
    Exit,
}

/// 차트 막대의 최대 폭(문자 수).
const CHART_BAR_WIDTH: usize = 40;

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_FIN));
    println!("{}", tr.t(keys::MAIN_MENU_LMTD));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::FinAnalysis),
            "2" => return Ok(MenuChoice::Lmtd),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 핀 해석 메뉴를 처리한다. 모든 입력은 엔터로 설정값을 유지할 수 있다.
pub fn handle_fin_analysis(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FIN_HEADING));
    let units = &cfg.default_units;
    let d = &cfg.fin;

    println!("{}", tr.t(keys::FIN_CASE_OPTIONS));
    let case: FinBoundaryCase = read_choice_or(tr, tr.t(keys::PROMPT_CASE), d.case.letter(), d.case)?;
    let kind: ShapeKind = read_choice_or(tr, tr.t(keys::PROMPT_SHAPE), d.shape.kind(), d.shape.kind())?;
    let shape = match kind {
        ShapeKind::Rectangular => {
            let (w0, t0) = match d.shape {
                CrossSectionShape::Rectangular { width, thickness } => (width, thickness),
                CrossSectionShape::Circular { diameter } => (diameter, diameter),
            };
            CrossSectionShape::Rectangular {
                width: read_length(tr, keys::PROMPT_WIDTH, w0, units)?,
                thickness: read_length(tr, keys::PROMPT_THICKNESS, t0, units)?,
            }
        }
        ShapeKind::Circular => {
            let d0 = match d.shape {
                CrossSectionShape::Circular { diameter } => diameter,
                CrossSectionShape::Rectangular { width, .. } => width,
            };
            CrossSectionShape::Circular {
                diameter: read_length(tr, keys::PROMPT_DIAMETER, d0, units)?,
            }
        }
    };
    let length_m = read_length(tr, keys::PROMPT_LENGTH, d.length_m, units)?;
    print!("{}", render_material_table(units));
    let material: Material = read_choice_or(tr, tr.t(keys::PROMPT_MATERIAL), d.material.code(), d.material)?;
    let h_display = convert_heat_transfer(d.h_w_m2k, HeatTransferUnit::WPerSquareMeterK, units.heat_transfer);
    let h = convert_heat_transfer(
        read_f64_or(tr, &labelled(tr, keys::PROMPT_H, units.heat_transfer.symbol()), h_display)?,
        units.heat_transfer,
        HeatTransferUnit::WPerSquareMeterK,
    );
    let ambient_temp_c = read_temperature(tr, keys::PROMPT_AMBIENT, d.ambient_temp_c, units)?;
    let base_temp_c = read_temperature(tr, keys::PROMPT_BASE_TEMP, d.base_temp_c, units)?;
    let tip_temp_c = if case.needs_tip_temperature() {
        Some(read_temperature(tr, keys::PROMPT_TIP_TEMP, d.tip_temp_c, units)?)
    } else {
        None
    };
    let position_m = read_length(tr, keys::PROMPT_POSITION, d.position_m, units)?;

    let fin = FinConfiguration {
        h,
        ambient_temp_c,
        base_temp_c,
        length_m,
        material,
        shape,
        case,
        tip_temp_c,
    };
    fin.validate()?;
    validate_resolution(d.chart_resolution_m)?;
    print_fin_analysis(tr, units, &fin, position_m, d.chart_resolution_m, false);
    Ok(())
}

/// 핀 해석 결과와 온도 분포 차트를 출력한다. `csv`이면 차트를 `x,T` 행으로만 출력한다.
pub fn print_fin_analysis(
    tr: &Translator,
    units: &DefaultUnits,
    fin: &FinConfiguration,
    position_m: f64,
    resolution_m: f64,
    csv: bool,
) {
    let points = fin.profile(resolution_m);
    if csv {
        print!("{}", render_csv(&points));
        return;
    }
    let report = FinReport::compute(fin, position_m);
    print!("{}", render_report(tr, units, fin, &report));
    println!("\n{}", tr.t(keys::CHART_HEADING));
    print!("{}", render_chart(&points, fin.ambient_temp_c, fin.base_temp_c, units));
}

/// 핀 해석 결과 표를 문자열로 만든다.
pub fn render_report(
    tr: &Translator,
    units: &DefaultUnits,
    fin: &FinConfiguration,
    report: &FinReport,
) -> String {
    let t_unit = units.temperature;
    let l_unit = units.length;
    let mut out = String::new();
    let _ = writeln!(out, "{}: {}", tr.t(keys::PROMPT_CASE), fin.case);
    let _ = writeln!(
        out,
        "{}: {} (k = {:.3} {})",
        tr.t(keys::PROMPT_MATERIAL).split(" (").next().unwrap_or_default(),
        fin.material,
        convert_conductivity(
            fin.material.conductivity(),
            ConductivityUnit::WPerMeterK,
            units.conductivity
        ),
        units.conductivity.symbol()
    );
    let _ = writeln!(
        out,
        "{}: {:.4e} m² / {:.4e} m",
        tr.t(keys::RESULT_GEOMETRY),
        report.area_m2,
        report.perimeter_m
    );
    let _ = writeln!(out, "{}: {:.6} 1/m", tr.t(keys::RESULT_FIN_PARAMETER), report.m);
    let _ = writeln!(out, "{}: {:.6} W", tr.t(keys::RESULT_HEAT_SCALE), report.big_m);
    let _ = writeln!(
        out,
        "{} @ x = {:.4} {}: {:.8}",
        tr.t(keys::RESULT_RATIO),
        convert_length(report.position_m, LengthUnit::Meter, l_unit),
        l_unit.symbol(),
        report.ratio
    );
    let _ = writeln!(
        out,
        "{}: {:.4} {}",
        tr.t(keys::RESULT_TEMPERATURE),
        convert_temperature(report.temperature_c, TemperatureUnit::Celsius, t_unit),
        t_unit.symbol()
    );
    let _ = writeln!(out, "{}: {:.6} W", tr.t(keys::RESULT_HEAT_RATE), report.heat_rate_w);
    if !report.is_finite() {
        let _ = writeln!(out, "{}", tr.t(keys::RESULT_NON_FINITE));
    }
    out
}

/// 선택 가능한 재질 목록을 코드, k, 비고와 함께 만든다.
pub fn render_material_table(units: &DefaultUnits) -> String {
    let mut out = String::new();
    for m in materials() {
        let k = convert_conductivity(
            m.conductivity_w_mk,
            ConductivityUnit::WPerMeterK,
            units.conductivity,
        );
        let _ = writeln!(
            out,
            "  {:<14} {:<18} k = {:>7.1} {}  ({})",
            m.code,
            m.name,
            k,
            units.conductivity.symbol(),
            m.notes
        );
    }
    out
}

/// 차트 점을 `x,T` CSV로 만든다. 단위는 m, °C 고정이다.
pub fn render_csv(points: &[ChartPoint]) -> String {
    let mut out = String::from("x,T\n");
    for p in points {
        let _ = writeln!(out, "{},{}", p.x, p.t);
    }
    out
}

/// 온도 분포를 가로 막대 표로 그린다. 막대 길이는 T∞~T_b 범위 기준이며 범위를 벗어나면 잘라낸다.
pub fn render_chart(points: &[ChartPoint], t_inf: f64, t_b: f64, units: &DefaultUnits) -> String {
    let lo = t_inf.min(t_b);
    let span = (t_b - t_inf).abs();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>10} | {:>10} |",
        format!("x [{}]", units.length.symbol()),
        format!("T [{}]", units.temperature.symbol())
    );
    for p in points {
        let filled = if p.t.is_finite() && span > 0.0 {
            let frac = ((p.t - lo) / span).clamp(0.0, 1.0);
            (frac * CHART_BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "{:>10.3} | {:>10.3} | {}",
            convert_length(p.x, LengthUnit::Meter, units.length),
            convert_temperature(p.t, TemperatureUnit::Celsius, units.temperature),
            "█".repeat(filled)
        );
    }
    out
}

/// 이중관 열교환기 LMTD 메뉴를 처리한다.
pub fn handle_lmtd(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::LMTD_HEADING));
    let units = &cfg.default_units;
    let d = &cfg.exchanger;
    let arrangement = read_choice_or(tr, tr.t(keys::PROMPT_ARRANGEMENT), d.arrangement, d.arrangement)?;
    let fluid1 = HeatExchangerFluid::new(
        read_temperature(tr, keys::PROMPT_FLUID1_IN, d.fluid1.inlet_c, units)?,
        read_temperature(tr, keys::PROMPT_FLUID1_OUT, d.fluid1.outlet_c, units)?,
    );
    let fluid2 = HeatExchangerFluid::new(
        read_temperature(tr, keys::PROMPT_FLUID2_IN, d.fluid2.inlet_c, units)?,
        read_temperature(tr, keys::PROMPT_FLUID2_OUT, d.fluid2.outlet_c, units)?,
    );
    let result = lmtd_breakdown(fluid1, fluid2, arrangement)?;
    print!("{}", render_lmtd(tr, units, fluid1, &result));
    Ok(())
}

/// LMTD 결과를 문자열로 만든다. `fluid1`은 어느 쪽이 고온측인지 표시하는 데 쓴다.
pub fn render_lmtd(
    tr: &Translator,
    units: &DefaultUnits,
    fluid1: HeatExchangerFluid,
    result: &LmtdBreakdown,
) -> String {
    let diff = units.temperature.difference_unit();
    let to_diff = |v: f64| convert_temperature_diff(v, TemperatureDiffUnit::Kelvin, diff);
    let hot_label = if result.hot == fluid1 { "1" } else { "2" };
    let mut out = String::new();
    let _ = writeln!(out, "{}: {hot_label}", tr.t(keys::RESULT_HOT_FLUID));
    let _ = writeln!(
        out,
        "{}: {:.4} / {:.4} {}",
        tr.t(keys::RESULT_DELTA_T),
        to_diff(result.delta_t1),
        to_diff(result.delta_t2),
        diff.symbol()
    );
    let _ = writeln!(
        out,
        "{}: {:.8} {}",
        tr.t(keys::RESULT_LMTD),
        to_diff(result.lmtd),
        diff.symbol()
    );
    out
}

/// 설정 메뉴를 처리한다. 언어가 바뀌면 `true`를 돌려준다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {:?}", tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM), cfg.unit_system);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => {}
        "1" => cfg.set_unit_system(UnitSystem::SI),
        "2" => cfg.set_unit_system(UnitSystem::Imperial),
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }

    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    let lang = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    let lang = lang.trim();
    if lang.is_empty() || lang.eq_ignore_ascii_case(&cfg.language) {
        return Ok(false);
    }
    cfg.language = lang.to_lowercase();
    Ok(true)
}

fn labelled(tr: &Translator, key: &str, unit: &str) -> String {
    format!("{} [{unit}]", tr.t(key))
}

fn read_length(tr: &Translator, key: &str, default_m: f64, units: &DefaultUnits) -> Result<f64, AppError> {
    let shown = convert_length(default_m, LengthUnit::Meter, units.length);
    let v = read_f64_or(tr, &labelled(tr, key, units.length.symbol()), shown)?;
    Ok(convert_length(v, units.length, LengthUnit::Meter))
}

fn read_temperature(
    tr: &Translator,
    key: &str,
    default_c: f64,
    units: &DefaultUnits,
) -> Result<f64, AppError> {
    let shown = convert_temperature(default_c, TemperatureUnit::Celsius, units.temperature);
    let v = read_f64_or(tr, &labelled(tr, key, units.temperature.symbol()), shown)?;
    Ok(convert_temperature(v, units.temperature, TemperatureUnit::Celsius))
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

fn read_f64_or(tr: &Translator, prompt: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{prompt} ({}: {default}): ", tr.t(keys::DEFAULT_HINT)))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_choice_or<T: FromStr>(
    tr: &Translator,
    prompt: &str,
    shown: impl Display,
    default: T,
) -> Result<T, AppError> {
    loop {
        let s = read_line(&format!("{prompt} ({}: {shown}): ", tr.t(keys::DEFAULT_HINT)))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<T>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heat_exchanger::FlowArrangement;

    #[test]
    fn chart_bars_span_ambient_to_base() {
        let pts = [
            ChartPoint { x: 0.0, t: 100.0 },
            ChartPoint { x: 0.2, t: 62.5 },
            ChartPoint { x: 0.4, t: 25.0 },
        ];
        let chart = render_chart(&pts, 25.0, 100.0, &DefaultUnits::default());
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].matches('█').count(), CHART_BAR_WIDTH);
        assert_eq!(lines[2].matches('█').count(), CHART_BAR_WIDTH / 2);
        assert_eq!(lines[3].matches('█').count(), 0);
    }

    #[test]
    fn chart_tolerates_non_finite_points() {
        let pts = [ChartPoint { x: 0.0, t: f64::NAN }];
        let chart = render_chart(&pts, 25.0, 100.0, &DefaultUnits::default());
        assert!(chart.lines().nth(1).is_some_and(|l| !l.contains('█')));
    }

    #[test]
    fn csv_has_header_and_one_row_per_point() {
        let pts = [ChartPoint { x: 0.0, t: 100.0 }, ChartPoint { x: 0.025, t: 90.5 }];
        assert_eq!(render_csv(&pts), "x,T\n0,100\n0.025,90.5\n");
    }

    #[test]
    fn material_table_lists_every_code_with_notes() {
        let table = render_material_table(&DefaultUnits::default());
        assert_eq!(table.lines().count(), Material::ALL.len());
        for m in Material::ALL {
            let line = table
                .lines()
                .find(|l| l.contains(m.code()))
                .expect("material row");
            assert!(line.contains(m.data().notes));
        }
        assert!(table.contains("k =   398.0 W/(m·K)"));
    }

    #[test]
    fn lmtd_report_marks_hot_fluid() {
        let tr = Translator::new("en");
        let f1 = HeatExchangerFluid::new(22.0, 25.0);
        let f2 = HeatExchangerFluid::new(49.0, 43.0);
        let r = lmtd_breakdown(f1, f2, FlowArrangement::CounterCurrent).unwrap();
        let text = render_lmtd(&tr, &DefaultUnits::default(), f1, &r);
        assert!(text.starts_with("Hot stream: 2"));
        assert!(text.contains("24.0000 / 21.0000 K"));
    }
}
