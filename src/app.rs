use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::batch::{self, BatchError, BatchRequest, BatchSummary};
use crate::category::{Category, CategoryKind};
use crate::config::{Config, ConfigError};
use crate::conversion::{self, Conversion, ConversionError};
use crate::field_calcs::{self, FieldCalcError};
use crate::session::{Session, SessionError};
use crate::ui_cli::{self, MenuChoice};
use crate::units;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),
    #[error("field calculation error: {0}")]
    FieldCalc(#[from] FieldCalcError),
    #[error("batch error: {0}")]
    Batch(#[from] BatchError),
    #[error("session error: {0}")]
    Session(#[from] SessionError),
    #[error("PVT correction needs both reservoir pressure and temperature")]
    IncompletePvt,
}

/// 보정 계수를 결정한다. 직접 지정값이 우선이며, 없으면 저류층 압력/온도로 PVT 보정을 계산한다.
pub fn resolve_correction(
    correction: Option<f64>,
    pvt_pressure_psia: Option<f64>,
    pvt_temperature_f: Option<f64>,
) -> Result<f64, AppError> {
    if let Some(c) = correction {
        return Ok(c);
    }
    match (pvt_pressure_psia, pvt_temperature_f) {
        (Some(p), Some(t)) => Ok(field_calcs::pvt_correction(p, t)?),
        (None, None) => Ok(1.0),
        _ => Err(AppError::IncompletePvt),
    }
}

/// 주요 단위 설명을 출력한다.
pub fn print_glossary() {
    for (symbol, text) in units::GLOSSARY {
        println!("{symbol:<8} {text}");
    }
}

/// 물리량 목록을 출력한다.
pub fn print_categories() {
    for (i, category) in Category::ALL.iter().enumerate() {
        let kind = match category.kind() {
            CategoryKind::Linear => "catalog",
            CategoryKind::Special(_) => "special",
        };
        println!("{:>2}) {:<34} [{kind}]", i + 1, category.name());
    }
}

/// 물리량의 단위 목록(라벨과 배율)을 출력한다.
pub fn print_units(category: &str) -> Result<(), AppError> {
    let category: Category = category.parse()?;
    if category.is_special() {
        for label in units::special_unit_labels(category) {
            println!("  {label}");
        }
    } else {
        for unit in units::units_for(category) {
            let base = if unit.is_base() { "  (base)" } else { "" };
            println!("  {:<48} {:e}{base}", unit.label, unit.factor);
        }
    }
    if let Some(note) = category.note() {
        println!("note: {note}");
    }
    Ok(())
}

/// 단일 변환을 수행하고 결과와 수식을 출력한다.
pub fn run_convert(
    config: &Config,
    category: &str,
    from_unit: &str,
    to_unit: &str,
    value: f64,
    correction: f64,
) -> Result<Conversion, AppError> {
    debug!(category, from_unit, to_unit, value, correction, "convert");
    let conversion = conversion::convert_detailed(category, from_unit, to_unit, value, correction)?;
    print_conversion(config, &conversion);
    Ok(conversion)
}

pub(crate) fn print_conversion(config: &Config, conversion: &Conversion) {
    if conversion.value == 0.0 {
        println!("Zero value converts to zero.");
    }
    println!("{:.*}", config.display_precision, conversion);
    println!("Formula: {}", conversion.formula());
    if let Some(note) = conversion.category.note() {
        println!("note: {note}");
    }
}

/// CSV 일괄 변환을 수행한다. 출력 경로가 없으면 `<입력>.converted.csv`에 쓴다.
pub fn run_batch(
    input: &Path,
    output: Option<&Path>,
    request: &BatchRequest<'_>,
) -> Result<BatchSummary, AppError> {
    let default_output = input.with_extension("converted.csv");
    let output = output.unwrap_or(&default_output);
    let summary = batch::convert_file(input, output, request)?;
    println!(
        "{} rows converted, {} failed -> {}",
        summary.converted,
        summary.failed,
        output.display()
    );
    Ok(summary)
}

/// 대화형 메인 루프를 실행한다. 종료 시 설정을 저장한다.
pub fn run(config: &mut Config, config_path: &Path) -> Result<(), AppError> {
    let mut session = Session::new(config.history_limit);
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::Convert => ui_cli::handle_convert(config, &mut session)?,
            MenuChoice::History => ui_cli::handle_history(config, &session),
            MenuChoice::Favorites => ui_cli::handle_favorites(config, &mut session)?,
            MenuChoice::FieldCalcs => ui_cli::handle_field_calcs()?,
            MenuChoice::Export => ui_cli::handle_export(&session)?,
            MenuChoice::Glossary => print_glossary(),
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save(config_path)?;
            }
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!(
                    "{} conversions this session. Bye.",
                    session.conversion_count()
                );
                break;
            }
        }
    }
    Ok(())
}
