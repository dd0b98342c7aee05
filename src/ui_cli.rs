use std::io::{self, Write};
use std::path::PathBuf;

use crate::app::{self, AppError};
use crate::category::Category;
use crate::config::Config;
use crate::conversion;
use crate::field_calcs;
use crate::session::Session;
use crate::units;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    History,
    Favorites,
    FieldCalcs,
    Export,
    Glossary,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Petroleum Engineering Unit Converter ===");
    println!("1) Convert");
    println!("2) History");
    println!("3) Favorites");
    println!("4) Field calculations");
    println!("5) Export history (JSON)");
    println!("6) Settings");
    println!("7) Unit definitions");
    println!("0) Exit");
    loop {
        let sel = read_line("Select: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::History),
            "3" => return Ok(MenuChoice::Favorites),
            "4" => return Ok(MenuChoice::FieldCalcs),
            "5" => return Ok(MenuChoice::Export),
            "6" => return Ok(MenuChoice::Settings),
            "7" => return Ok(MenuChoice::Glossary),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("Invalid selection, try again."),
        }
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_convert(cfg: &Config, session: &mut Session) -> Result<(), AppError> {
    println!("\n-- Convert --");
    let category = read_category(cfg.default_category())?;
    let labels = unit_labels(category);
    for (i, label) in labels.iter().enumerate() {
        println!("{:>2}) {label}", i + 1);
    }
    let from = read_choice("From unit #: ", &labels)?;
    let to = read_choice("To unit #: ", &labels)?;
    let value = read_f64("Value: ")?;
    let correction = if category == Category::GasOilRatio {
        read_pvt_correction(cfg)?
    } else {
        1.0
    };
    convert_and_record(cfg, session, category, from, to, value, correction)?;

    let fav = read_line("Add to favorites? (y/N): ")?;
    if fav.trim().eq_ignore_ascii_case("y") {
        if session.add_favorite(category, from, to) {
            println!("Saved.");
        } else {
            println!("Already in favorites.");
        }
    }
    Ok(())
}

/// 변환 이력을 최신순으로 보여준다.
pub fn handle_history(cfg: &Config, session: &Session) {
    println!("\n-- History ({} conversions) --", session.conversion_count());
    let mut empty = true;
    for entry in session.history() {
        empty = false;
        println!(
            "[{}] {} {} = {:.*} {}",
            entry.category,
            entry.value,
            entry.from_unit,
            cfg.display_precision,
            entry.result,
            entry.to_unit
        );
    }
    if empty {
        println!("No conversions yet.");
    }
}

/// 즐겨찾기 목록에서 선택해 변환하거나 삭제한다.
pub fn handle_favorites(cfg: &Config, session: &mut Session) -> Result<(), AppError> {
    println!("\n-- Favorites --");
    if session.favorites().is_empty() {
        println!("No favorites yet.");
        return Ok(());
    }
    for (i, fav) in session.favorites().iter().enumerate() {
        println!(
            "{:>2}) [{}] {} → {}",
            i + 1,
            fav.category,
            fav.from_unit,
            fav.to_unit
        );
    }
    let sel = read_line("Number to use, d<number> to delete (enter to cancel): ")?;
    let sel = sel.trim();
    if sel.is_empty() {
        return Ok(());
    }
    if let Some(rest) = sel.strip_prefix('d') {
        match rest.trim().parse::<usize>() {
            Ok(n) if n > 0 => match session.remove_favorite(n - 1) {
                Some(_) => println!("Removed."),
                None => println!("No such favorite."),
            },
            _ => println!("Invalid selection."),
        }
        return Ok(());
    }
    let Some(fav) = sel
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| session.favorites().get(i))
        .cloned()
    else {
        println!("Invalid selection.");
        return Ok(());
    };
    let value = read_f64("Value: ")?;
    let correction = if fav.category == Category::GasOilRatio {
        read_pvt_correction(cfg)?
    } else {
        1.0
    };
    convert_and_record(
        cfg,
        session,
        fav.category,
        &fav.from_unit,
        &fav.to_unit,
        value,
        correction,
    )
}

/// 현장 계산 메뉴를 처리한다.
pub fn handle_field_calcs() -> Result<(), AppError> {
    println!("\n-- Field calculations --");
    println!("1) Hydrostatic pressure: P(psi) = TVD(ft) × MW(ppg) × 0.052");
    println!("2) Drill pipe volume: V(bbl) = L(ft) × ID(in)² / 1029.4");
    println!("3) PVT correction factor: (P / 14.7) × ((T + 460) / 520)");
    let sel = read_line("Select: ")?;
    match sel.trim() {
        "1" => {
            let tvd = read_f64("TVD [ft]: ")?;
            let mw = read_f64("Mud weight [ppg]: ")?;
            let p = field_calcs::hydrostatic_pressure_psi(tvd, mw)?;
            println!("Hydrostatic pressure: {p:.2} psi");
        }
        "2" => {
            let length = read_f64("Pipe length [ft]: ")?;
            let id = read_f64("Pipe inner diameter [in]: ")?;
            let v = field_calcs::drill_pipe_volume_bbl(length, id)?;
            println!("Drill pipe volume: {v:.2} bbl");
        }
        "3" => {
            let p = read_f64("Reservoir pressure [psia]: ")?;
            let t = read_f64("Reservoir temperature [°F]: ")?;
            let c = field_calcs::pvt_correction(p, t)?;
            println!("PVT correction factor: {c:.4}");
        }
        _ => println!("Invalid selection."),
    }
    Ok(())
}

/// 이력을 JSON 파일로 내보낸다.
pub fn handle_export(session: &Session) -> Result<(), AppError> {
    let path = read_line("Export path [history.json]: ")?;
    let path = match path.trim() {
        "" => PathBuf::from("history.json"),
        p => PathBuf::from(p),
    };
    session.export_history(&path)?;
    println!("History written to {}", path.display());
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- Settings --");
    println!("Display precision: {}", cfg.display_precision);
    println!("History limit: {}", cfg.history_limit);
    println!("Default category: {}", cfg.default_category());
    let sel = read_line("New display precision (enter to keep): ")?;
    if let Ok(p) = sel.trim().parse::<usize>() {
        cfg.display_precision = p;
    }
    let sel = read_line("New history limit (enter to keep, applies next session): ")?;
    if let Ok(n) = sel.trim().parse::<usize>() {
        cfg.history_limit = n;
    }
    let sel = read_line("New default category (enter to keep): ")?;
    if !sel.trim().is_empty() {
        match Category::from_name(&sel) {
            Some(c) => cfg.default_category = c.name().to_string(),
            None => println!("Unknown category, keeping {}.", cfg.default_category()),
        }
    }
    Ok(())
}

fn convert_and_record(
    cfg: &Config,
    session: &mut Session,
    category: Category,
    from: &str,
    to: &str,
    value: f64,
    correction: f64,
) -> Result<(), AppError> {
    match conversion::convert_category(category, from, to, value, correction) {
        Ok(c) => {
            app::print_conversion(cfg, &c);
            session.record(&c);
        }
        // 입력값 오류는 메뉴를 빠져나가지 않고 안내만 한다.
        Err(err @ conversion::ConversionError::InvalidInput { .. }) => {
            println!("Conversion error: {err}");
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn unit_labels(category: Category) -> Vec<&'static str> {
    if category.is_special() {
        units::special_unit_labels(category).to_vec()
    } else {
        units::units_for(category).iter().map(|u| u.label).collect()
    }
}

fn read_category(default: Category) -> Result<Category, AppError> {
    for (i, category) in Category::ALL.iter().enumerate() {
        println!("{:>2}) {category}", i + 1);
    }
    loop {
        let sel = read_line(&format!("Category # [{default}]: "))?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(default);
        }
        if let Some(c) = sel
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Category::ALL.get(i))
        {
            return Ok(*c);
        }
        if let Some(c) = Category::from_name(sel) {
            return Ok(c);
        }
        println!("Unsupported category.");
    }
}

fn read_choice<'a>(prompt: &str, labels: &[&'a str]) -> Result<&'a str, AppError> {
    loop {
        let sel = read_line(prompt)?;
        if let Some(label) = sel
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| labels.get(i))
        {
            return Ok(*label);
        }
        println!("Enter a number between 1 and {}.", labels.len());
    }
}

fn read_pvt_correction(cfg: &Config) -> Result<f64, AppError> {
    let p = read_f64_or(
        "Reservoir pressure [psia]",
        cfg.pvt.reference_pressure_psia,
    )?;
    let t = read_f64_or(
        "Reservoir temperature [°F]",
        cfg.pvt.reference_temperature_f,
    )?;
    let c = field_calcs::pvt_correction(p, t)?;
    println!("PVT correction factor: {c:.4}");
    Ok(c)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn read_f64_or(label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} [{default}]: "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("Please enter a number."),
        }
    }
}
