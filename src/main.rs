use clap::{Args, Parser, Subcommand};
use fin_heat_toolbox::fin::{validate_resolution, CrossSectionShape, FinBoundaryCase, ShapeKind};
use fin_heat_toolbox::heat_exchanger::{lmtd_breakdown, FlowArrangement, HeatExchangerFluid};
use fin_heat_toolbox::material_db::Material;
use fin_heat_toolbox::{app, config, i18n, logging, ui_cli};

/// 핀 온도분포/열전달률과 이중관 열교환기 LMTD 계산기.
#[derive(Debug, Parser)]
#[command(name = "fin_heat_toolbox", version, about)]
struct Cli {
    /// 언어 코드 (auto, ko, en, pt)
    #[arg(short = 'L', long, global = true, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: String,
    /// 로그 상세도 (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 대화형 메뉴 (기본값)
    Menu,
    /// 핀 해석을 한 번 실행한다. 생략한 값은 설정 파일의 값을 쓴다. 단위는 SI(m, °C, W/(m²·K)).
    Fin(FinArgs),
    /// 이중관 열교환기 LMTD를 한 번 계산한다.
    Lmtd(LmtdArgs),
}

#[derive(Debug, Args)]
struct FinArgs {
    /// 경계조건 A/B/C/D
    #[arg(long)]
    case: Option<FinBoundaryCase>,
    /// copper, aluminum-2024, stainless-316
    #[arg(long)]
    material: Option<Material>,
    /// rectangular 또는 circular
    #[arg(long)]
    shape: Option<ShapeKind>,
    #[arg(long)]
    width: Option<f64>,
    #[arg(long)]
    thickness: Option<f64>,
    #[arg(long)]
    diameter: Option<f64>,
    /// 핀 길이 L [m]
    #[arg(long)]
    length: Option<f64>,
    /// 대류 열전달계수 h [W/(m²·K)]
    #[arg(long)]
    h: Option<f64>,
    /// 주변 온도 T∞ [°C]
    #[arg(long)]
    t_inf: Option<f64>,
    /// 기저부 온도 T_b [°C]
    #[arg(long)]
    t_base: Option<f64>,
    /// 끝단 온도 T_L [°C] (C 조건)
    #[arg(long)]
    t_tip: Option<f64>,
    /// 조회 위치 x [m]
    #[arg(long)]
    x: Option<f64>,
    /// 차트 샘플 간격 [m]
    #[arg(long)]
    resolution: Option<f64>,
    /// 차트를 x,T CSV로만 출력
    #[arg(long)]
    csv: bool,
}

#[derive(Debug, Args)]
struct LmtdArgs {
    /// 유체 1 입구 온도 [°C]
    #[arg(long)]
    fluid1_in: Option<f64>,
    /// 유체 1 출구 온도 [°C]
    #[arg(long)]
    fluid1_out: Option<f64>,
    /// 유체 2 입구 온도 [°C]
    #[arg(long)]
    fluid2_in: Option<f64>,
    /// 유체 2 출구 온도 [°C]
    #[arg(long)]
    fluid2_out: Option<f64>,
    /// parallel 또는 counter
    #[arg(long)]
    arrangement: Option<FlowArrangement>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    if let Err(err) = try_run(cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let mut cfg = config::load_or_default_from(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let mut tr = i18n::Translator::new_with_pack(&lang, None);

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => app::run(&mut cfg, &mut tr)?,
        Command::Fin(args) => {
            let mut fin = cfg.fin.to_configuration();
            fin.case = args.case.unwrap_or(fin.case);
            fin.material = args.material.unwrap_or(fin.material);
            fin.shape = resolve_shape(&args, fin.shape);
            fin.length_m = args.length.unwrap_or(fin.length_m);
            fin.h = args.h.unwrap_or(fin.h);
            fin.ambient_temp_c = args.t_inf.unwrap_or(fin.ambient_temp_c);
            fin.base_temp_c = args.t_base.unwrap_or(fin.base_temp_c);
            fin.tip_temp_c = args.t_tip.or(fin.tip_temp_c);
            fin.validate()?;
            let resolution = args.resolution.unwrap_or(cfg.fin.chart_resolution_m);
            validate_resolution(resolution)?;
            ui_cli::print_fin_analysis(
                &tr,
                &cfg.default_units,
                &fin,
                args.x.unwrap_or(cfg.fin.position_m),
                resolution,
                args.csv,
            );
        }
        Command::Lmtd(args) => {
            let d = &cfg.exchanger;
            let fluid1 = HeatExchangerFluid::new(
                args.fluid1_in.unwrap_or(d.fluid1.inlet_c),
                args.fluid1_out.unwrap_or(d.fluid1.outlet_c),
            );
            let fluid2 = HeatExchangerFluid::new(
                args.fluid2_in.unwrap_or(d.fluid2.inlet_c),
                args.fluid2_out.unwrap_or(d.fluid2.outlet_c),
            );
            let arrangement = args.arrangement.unwrap_or(d.arrangement);
            let result = lmtd_breakdown(fluid1, fluid2, arrangement)?;
            print!("{}", ui_cli::render_lmtd(&tr, &cfg.default_units, fluid1, &result));
        }
    }
    Ok(())
}

/// 형상 플래그와 치수 플래그를 설정값 위에 덮어쓴다.
fn resolve_shape(args: &FinArgs, current: CrossSectionShape) -> CrossSectionShape {
    let kind = args.shape.unwrap_or(current.kind());
    let (w0, t0, d0) = match current {
        CrossSectionShape::Rectangular { width, thickness } => (width, thickness, width),
        CrossSectionShape::Circular { diameter } => (diameter, diameter, diameter),
    };
    match kind {
        ShapeKind::Rectangular => CrossSectionShape::Rectangular {
            width: args.width.unwrap_or(w0),
            thickness: args.thickness.unwrap_or(t0),
        },
        ShapeKind::Circular => CrossSectionShape::Circular {
            diameter: args.diameter.unwrap_or(d0),
        },
    }
}
