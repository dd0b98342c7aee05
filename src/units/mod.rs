//! 단위 카탈로그 및 특수 변환 모듈 모음.
//!
//! 선형 물리량은 `(라벨, 배율)` 정적 테이블로 정의한다. 배율은
//! "1 단위 = factor × 기준 단위"를 뜻하며 기준 단위의 배율은 1이다.

pub mod drilling;
pub mod fluid;
pub mod gravity;
pub mod mechanical;
pub mod temperature;

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::category::{Category, CategoryKind};

pub use gravity::{api_to_sg, convert_gravity, sg_to_api, GravityUnit};
pub use temperature::{convert_temperature, from_celsius, to_celsius, TemperatureUnit};

/// 선형 카탈로그의 단위 하나.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    pub label: &'static str,
    pub factor: f64,
}

impl Unit {
    pub const fn new(label: &'static str, factor: f64) -> Self {
        Self { label, factor }
    }

    /// 괄호 앞 이름 부분. `"meter (m)"` → `"meter"`
    pub fn name(&self) -> &'static str {
        match self.label.split_once(" (") {
            Some((name, rest)) if rest.ends_with(')') => name,
            _ => self.label,
        }
    }

    /// 괄호 안 기호 부분. `"meter (m)"` → `Some("m")`
    pub fn symbol(&self) -> Option<&'static str> {
        self.label
            .split_once(" (")
            .and_then(|(_, rest)| rest.strip_suffix(')'))
    }

    pub fn is_base(&self) -> bool {
        self.factor == 1.0
    }

    fn matches_exact(&self, query: &str) -> bool {
        self.name() == query || self.symbol() == Some(query)
    }
}

/// 물리량의 선형 단위 테이블을 반환한다. 특수 물리량이면 빈 슬라이스.
pub fn units_for(category: Category) -> &'static [Unit] {
    match category {
        Category::Length => mechanical::LENGTH,
        Category::Area => mechanical::AREA,
        Category::Volume => mechanical::VOLUME,
        Category::Mass => mechanical::MASS,
        Category::Density => mechanical::DENSITY,
        Category::Force => mechanical::FORCE,
        Category::Energy => mechanical::ENERGY,
        Category::Power => mechanical::POWER,
        Category::Time => mechanical::TIME,
        Category::Velocity => mechanical::VELOCITY,
        Category::Torque => mechanical::TORQUE,
        Category::Angle => mechanical::ANGLE,
        Category::Pressure => fluid::PRESSURE,
        Category::DynamicViscosity => fluid::DYNAMIC_VISCOSITY,
        Category::KinematicViscosity => fluid::KINEMATIC_VISCOSITY,
        Category::LiquidFlowRate => fluid::LIQUID_FLOW,
        Category::GasFlowRate => fluid::GAS_FLOW,
        Category::Permeability => fluid::PERMEABILITY,
        Category::GasOilRatio => fluid::GAS_OIL_RATIO,
        Category::Concentration => drilling::CONCENTRATION,
        Category::HeatCapacity => drilling::HEAT_CAPACITY,
        Category::ThermalConductivity => drilling::THERMAL_CONDUCTIVITY,
        Category::Resistivity => drilling::RESISTIVITY,
        Category::MudWeight => drilling::MUD_WEIGHT,
        Category::RateOfPenetration => drilling::RATE_OF_PENETRATION,
        Category::Temperature | Category::ApiGravity => &[],
    }
}

/// 단위 문자열을 카탈로그에서 찾는다.
///
/// 전체 라벨 일치 → 이름/기호 일치 순으로 검색하며, 같은 단계에서는 카탈로그 순서상
/// 먼저 나온 단위를 사용한다. SI 접두어(`mJ`/`MJ`)가 갈리므로 대소문자를 구분한다.
pub fn find_unit(category: Category, query: &str) -> Option<&'static Unit> {
    let table = units_for(category);
    let query = query.trim();
    table
        .iter()
        .find(|u| u.label == query)
        .or_else(|| table.iter().find(|u| u.matches_exact(query)))
}

/// 현장에서 자주 쓰는 단위의 설명. `(기호, 설명)` 쌍.
pub const GLOSSARY: &[(&str, &str)] = &[
    ("scf/bbl", "Standard cubic feet per barrel, used in Gas-Oil Ratio (GOR)."),
    ("mD", "Millidarcy, a unit of permeability for reservoir rocks."),
    ("bbl", "Barrel, commonly used in oil and gas (1 bbl = 0.158987 m³)."),
    ("ppg", "Pounds per gallon, used for mud weight (1 ppg ≈ 0.119826 SG)."),
    ("°API", "Measure of oil density, related to SG by SG = 141.5 / (API + 131.5)."),
    ("sm³/d", "Standard cubic meter per day, used for gas flow rates."),
];

/// 특수 물리량이 허용하는 고정 단위 라벨.
pub fn special_unit_labels(category: Category) -> &'static [&'static str] {
    match category {
        Category::Temperature => TemperatureUnit::LABELS,
        Category::ApiGravity => GravityUnit::LABELS,
        _ => &[],
    }
}

/// 카탈로그 불변 조건 위반.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("{category}: factor for '{label}' must be finite and positive (got {factor})")]
    InvalidFactor {
        category: &'static str,
        label: &'static str,
        factor: f64,
    },
    #[error("{category}: duplicate unit label '{label}'")]
    DuplicateLabel {
        category: &'static str,
        label: &'static str,
    },
    #[error("{category}: no base unit with factor 1")]
    MissingBase { category: &'static str },
    #[error("{category}: linear units defined for a special category")]
    MixedKind { category: &'static str },
}

/// 전체 카탈로그의 불변 조건을 검사한다.
///
/// 기준 단위(배율 1)가 둘 이상인 경우(체적의 m³/sm³, 염도의 mg/L·ppm·kg/m³)는
/// 동일 단위의 별칭으로 허용한다.
pub fn verify_catalog() -> Result<(), CatalogError> {
    for category in Category::ALL {
        let table = units_for(category);
        let name = category.name();
        if category.kind() != CategoryKind::Linear {
            if !table.is_empty() {
                return Err(CatalogError::MixedKind { category: name });
            }
            continue;
        }
        let mut seen = HashSet::new();
        for unit in table {
            if !unit.factor.is_finite() || unit.factor <= 0.0 {
                return Err(CatalogError::InvalidFactor {
                    category: name,
                    label: unit.label,
                    factor: unit.factor,
                });
            }
            if !seen.insert(unit.label) {
                return Err(CatalogError::DuplicateLabel {
                    category: name,
                    label: unit.label,
                });
            }
        }
        if !table.iter().any(Unit::is_base) {
            return Err(CatalogError::MissingBase { category: name });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_invariants_hold() {
        assert_eq!(verify_catalog(), Ok(()));
    }

    #[test]
    fn label_parts() {
        let unit = Unit::new("meter (m)", 1.0);
        assert_eq!(unit.name(), "meter");
        assert_eq!(unit.symbol(), Some("m"));

        let plain = Unit::new("lb/(ft·s)", 1.48816);
        assert_eq!(plain.name(), "lb/(ft·s)");
        assert_eq!(plain.symbol(), None);
    }

    #[test]
    fn lookup_by_label_name_and_symbol() {
        let by_label = find_unit(Category::Length, "foot (ft)").unwrap();
        let by_name = find_unit(Category::Length, "foot").unwrap();
        let by_symbol = find_unit(Category::Length, "ft").unwrap();
        assert_eq!(by_label, by_name);
        assert_eq!(by_name, by_symbol);
        assert!(find_unit(Category::Length, "FT").is_none());
        assert!(find_unit(Category::Length, "parsec").is_none());
    }

    #[test]
    fn lookup_is_case_sensitive_for_si_prefixes() {
        let md = find_unit(Category::Permeability, "mD").unwrap();
        assert_eq!(md.label, "millidarcy (mD)");
        assert!(find_unit(Category::Energy, "mJ").is_none());
        assert!(find_unit(Category::Pressure, "mPa").is_none());
        assert!(find_unit(Category::Length, "Mm").is_none());
        assert_eq!(find_unit(Category::Energy, "MJ").unwrap().factor, 1e6);
    }

    #[test]
    fn glossary_symbols_are_catalog_units() {
        let lookups = [
            ("scf/bbl", Category::GasOilRatio),
            ("mD", Category::Permeability),
            ("bbl", Category::Volume),
            ("ppg", Category::MudWeight),
            ("sm³/d", Category::GasFlowRate),
        ];
        for (symbol, category) in lookups {
            assert!(GLOSSARY.iter().any(|(s, _)| *s == symbol), "{symbol}");
            assert!(find_unit(category, symbol).is_some(), "{symbol}");
        }
        assert!(GravityUnit::parse("°API").is_some());
    }

    #[test]
    fn special_categories_have_no_linear_units() {
        assert!(units_for(Category::Temperature).is_empty());
        assert!(units_for(Category::ApiGravity).is_empty());
        assert_eq!(special_unit_labels(Category::Temperature).len(), 4);
        assert_eq!(special_unit_labels(Category::ApiGravity).len(), 2);
        assert!(special_unit_labels(Category::Length).is_empty());
    }
}
