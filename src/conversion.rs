use std::fmt;

use serde::Serialize;

use crate::category::{Category, CategoryKind, SpecialKind};
use crate::units::{self, GravityUnit, TemperatureUnit, Unit};
use crate::validation;

pub use crate::error::ConversionError;

/// 변환에 사용된 규칙. 수식 문자열 생성에 필요한 정보를 담는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Method {
    /// 같은 단위 간 변환
    Identity,
    /// `value × from_factor / to_factor`
    Linear { from_factor: f64, to_factor: f64 },
    /// 섭씨 경유 아핀 변환
    Temperature {
        from: TemperatureUnit,
        to: TemperatureUnit,
    },
    /// API ↔ SG 역수 관계
    Gravity { from: GravityUnit, to: GravityUnit },
}

/// 한 번의 변환 결과. 엔진은 보관하지 않으며 호출자가 필요하면 기록한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conversion {
    pub category: Category,
    pub from_unit: &'static str,
    pub to_unit: &'static str,
    pub value: f64,
    /// 실제 적용된 보정 계수. 특수 변환에서는 항상 1.0이다.
    pub correction: f64,
    pub result: f64,
    pub method: Method,
}

impl Conversion {
    /// 사람이 읽을 수 있는 수식 문자열을 만든다.
    pub fn formula(&self) -> String {
        match self.method {
            Method::Identity if self.correction == 1.0 => "Same unit".to_string(),
            Method::Identity => format!("{} × {:.4}", self.value, self.correction),
            Method::Linear {
                from_factor,
                to_factor,
            } => format!(
                "{} × ({} / {}) × {:.4}",
                self.value, from_factor, to_factor, self.correction
            ),
            Method::Temperature { from, to } => format!(
                "°C = {}; {} = {}",
                from.to_celsius_formula(),
                to.label(),
                to.from_celsius_formula()
            ),
            Method::Gravity {
                from: GravityUnit::ApiGravity,
                ..
            } => "SG = 141.5 / (API + 131.5)".to_string(),
            Method::Gravity { .. } => "API = 141.5 / SG − 131.5".to_string(),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(
                f,
                "{} {} = {:.*} {}",
                self.value, self.from_unit, p, self.result, self.to_unit
            ),
            None => write!(
                f,
                "{} {} = {} {}",
                self.value, self.from_unit, self.result, self.to_unit
            ),
        }
    }
}

/// 물리량 이름과 단위 문자열로 값을 변환한다.
///
/// `correction`은 선형 물리량 결과에만 곱해지는 외부 보정 계수(GOR의 PVT 보정 등)이며
/// 보정이 필요 없는 호출자는 1.0을 넘긴다. 입력/출력 단위 문자열이 같으면 카탈로그를
/// 조회하지 않고 값을 그대로 돌려준다.
pub fn convert(
    category: &str,
    from_unit: &str,
    to_unit: &str,
    value: f64,
    correction: f64,
) -> Result<f64, ConversionError> {
    let category: Category = category.parse()?;
    if from_unit.trim() == to_unit.trim() {
        validation::validate(category, value)?;
        return Ok(match category.kind() {
            CategoryKind::Linear => value * correction,
            CategoryKind::Special(_) => value,
        });
    }
    convert_category(category, from_unit, to_unit, value, correction).map(|c| c.result)
}

/// [`convert`]와 같지만 수식 표시용 정보를 포함한 결과를 돌려준다.
///
/// 결과에 표준 라벨을 담아야 하므로 같은 단위끼리의 변환도 두 단위를 모두 확인한다.
pub fn convert_detailed(
    category: &str,
    from_unit: &str,
    to_unit: &str,
    value: f64,
    correction: f64,
) -> Result<Conversion, ConversionError> {
    let category: Category = category.parse()?;
    convert_category(category, from_unit, to_unit, value, correction)
}

/// 검증 → 특수/선형 분기 → 보정 순으로 변환한다.
pub fn convert_category(
    category: Category,
    from_unit: &str,
    to_unit: &str,
    value: f64,
    correction: f64,
) -> Result<Conversion, ConversionError> {
    validation::validate(category, value)?;
    let name = category.name();

    match category.kind() {
        CategoryKind::Special(SpecialKind::Temperature) => {
            let from = TemperatureUnit::parse(from_unit)
                .ok_or_else(|| ConversionError::unknown_unit(name, from_unit))?;
            let to = TemperatureUnit::parse(to_unit)
                .ok_or_else(|| ConversionError::unknown_unit(name, to_unit))?;
            let method = if from == to {
                Method::Identity
            } else {
                Method::Temperature { from, to }
            };
            Ok(Conversion {
                category,
                from_unit: from.label(),
                to_unit: to.label(),
                value,
                correction: 1.0,
                result: units::convert_temperature(value, from, to),
                method,
            })
        }
        CategoryKind::Special(SpecialKind::Gravity) => {
            let from = GravityUnit::parse(from_unit)
                .ok_or_else(|| ConversionError::unknown_unit(name, from_unit))?;
            let to = GravityUnit::parse(to_unit)
                .ok_or_else(|| ConversionError::unknown_unit(name, to_unit))?;
            let method = if from == to {
                Method::Identity
            } else {
                Method::Gravity { from, to }
            };
            Ok(Conversion {
                category,
                from_unit: from.label(),
                to_unit: to.label(),
                value,
                correction: 1.0,
                result: units::convert_gravity(value, from, to)?,
                method,
            })
        }
        CategoryKind::Linear => {
            if units::units_for(category).is_empty() {
                return Err(ConversionError::UnknownCategory(name.to_string()));
            }
            let (from, to) = resolve_pair(category, from_unit, to_unit)?;
            let (converted, method) = if from.label == to.label {
                (value, Method::Identity)
            } else {
                (
                    value * from.factor / to.factor,
                    Method::Linear {
                        from_factor: from.factor,
                        to_factor: to.factor,
                    },
                )
            };
            Ok(Conversion {
                category,
                from_unit: from.label,
                to_unit: to.label,
                value,
                correction,
                result: converted * correction,
                method,
            })
        }
    }
}

/// 선형 규칙만 적용한다. 같은 단위면 부동소수 오차 없이 값을 그대로 돌려준다.
pub fn convert_linear(
    category: Category,
    from_unit: &str,
    to_unit: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    if from_unit.trim() == to_unit.trim() {
        return Ok(value);
    }
    let (from, to) = resolve_pair(category, from_unit, to_unit)?;
    if from.label == to.label {
        return Ok(value);
    }
    Ok(value * from.factor / to.factor)
}

/// 입력/출력 단위 문자열을 표준 라벨로 확인한다. 값은 검사하지 않는다.
pub fn resolve_labels(
    category: Category,
    from_unit: &str,
    to_unit: &str,
) -> Result<(&'static str, &'static str), ConversionError> {
    let lookup = |query: &str| -> Option<&'static str> {
        match category.kind() {
            CategoryKind::Special(SpecialKind::Temperature) => {
                TemperatureUnit::parse(query).map(TemperatureUnit::label)
            }
            CategoryKind::Special(SpecialKind::Gravity) => {
                GravityUnit::parse(query).map(GravityUnit::label)
            }
            CategoryKind::Linear => units::find_unit(category, query).map(|u| u.label),
        }
    };
    let name = category.name();
    let from = lookup(from_unit).ok_or_else(|| ConversionError::unknown_unit(name, from_unit))?;
    let to = lookup(to_unit).ok_or_else(|| ConversionError::unknown_unit(name, to_unit))?;
    Ok((from, to))
}

fn resolve_pair(
    category: Category,
    from_unit: &str,
    to_unit: &str,
) -> Result<(&'static Unit, &'static Unit), ConversionError> {
    let name = category.name();
    let from = units::find_unit(category, from_unit)
        .ok_or_else(|| ConversionError::unknown_unit(name, from_unit))?;
    let to = units::find_unit(category, to_unit)
        .ok_or_else(|| ConversionError::unknown_unit(name, to_unit))?;
    Ok((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn meters_to_feet() {
        let out = convert("Length", "meter", "foot", 1.0, 1.0).unwrap();
        assert_relative_eq!(out, 1.0 / 0.3048);
    }

    #[test]
    fn linear_formula_matches_factors() {
        let c = convert_detailed("Pressure", "bar", "psi", 2.0, 1.0).unwrap();
        assert_eq!(c.formula(), "2 × (100000 / 6894.76) × 1.0000");
        assert_eq!(c.from_unit, "bar");
        assert_eq!(c.to_unit, "psi");
    }

    #[test]
    fn identity_formula() {
        let c = convert_detailed("Mass", "kg", "kilogram (kg)", 3.5, 1.0).unwrap();
        assert_eq!(c.method, Method::Identity);
        assert_eq!(c.result, 3.5);
        assert_eq!(c.formula(), "Same unit");
    }

    #[test]
    fn special_formulas() {
        let t = convert_detailed("Temperature", "F", "K", 212.0, 1.0).unwrap();
        assert_eq!(t.formula(), "°C = (°F − 32) / 1.8; Kelvin (K) = °C + 273.15");
        let g = convert_detailed("API↔SG", "SG", "API", 0.85, 1.0).unwrap();
        assert_eq!(g.formula(), "API = 141.5 / SG − 131.5");
    }

    #[test]
    fn display_respects_precision() {
        let c = convert_detailed("Length", "km", "m", 1.5, 1.0).unwrap();
        assert_eq!(format!("{c:.2}"), "1.5 kilometer (km) = 1500.00 meter (m)");
    }

    #[test]
    fn labels_resolve_to_canonical_form() {
        assert_eq!(
            resolve_labels(Category::Temperature, "C", "°F").unwrap(),
            ("Celsius (°C)", "Fahrenheit (°F)")
        );
        assert_eq!(
            resolve_labels(Category::GasOilRatio, "scf/bbl", "sm³/m³").unwrap(),
            (
                "standard cubic foot per barrel (scf/bbl)",
                "standard cubic meter per cubic meter (sm³/m³)"
            )
        );
        assert!(resolve_labels(Category::ApiGravity, "API", "Baumé").is_err());
    }

    #[test]
    fn linear_rule_rejects_unknown_labels() {
        let err = convert_linear(Category::Length, "parsec", "meter", 1.0).unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownUnit {
                category: "Length",
                unit: "parsec".into()
            }
        );
    }

    #[test]
    fn same_unit_string_short_circuits_lookup() {
        assert_eq!(convert_linear(Category::Length, "parsec", "parsec", 2.5).unwrap(), 2.5);
        assert_eq!(convert("Length", "parsec", "parsec", 1.0, 1.0).unwrap(), 1.0);
        assert_eq!(convert("GOR", "scf/bbl", "scf/bbl", 10.0, 1.5).unwrap(), 15.0);
        assert_eq!(convert("Temperature", "C", "C", -40.0, 3.0).unwrap(), -40.0);
        assert!(convert("Length", "parsec", "parsec", -1.0, 1.0).is_err());
        assert!(convert("Nope", "m", "m", 1.0, 1.0).is_err());
        assert!(matches!(
            convert_detailed("Length", "parsec", "parsec", 1.0, 1.0),
            Err(ConversionError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn wrong_case_si_prefix_is_unknown() {
        assert_eq!(
            convert("Energy", "mJ", "J", 1.0, 1.0).unwrap_err(),
            ConversionError::UnknownUnit {
                category: "Energy",
                unit: "mJ".into()
            }
        );
        assert_eq!(
            convert("Pressure", "mPa", "Pa", 1.0, 1.0).unwrap_err(),
            ConversionError::UnknownUnit {
                category: "Pressure",
                unit: "mPa".into()
            }
        );
    }
}
