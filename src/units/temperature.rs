use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 4] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
        TemperatureUnit::Rankine,
    ];

    pub const LABELS: &'static [&'static str] = &[
        "Celsius (°C)",
        "Fahrenheit (°F)",
        "Kelvin (K)",
        "Rankine (°R)",
    ];

    pub fn label(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => Self::LABELS[0],
            TemperatureUnit::Fahrenheit => Self::LABELS[1],
            TemperatureUnit::Kelvin => Self::LABELS[2],
            TemperatureUnit::Rankine => Self::LABELS[3],
        }
    }

    /// 라벨 또는 약어(`C`, `°F`, `kelvin` 등)를 단위로 해석한다.
    pub fn parse(s: &str) -> Option<TemperatureUnit> {
        let s = s.trim();
        if let Some(unit) = Self::ALL.into_iter().find(|u| u.label() == s) {
            return Some(unit);
        }
        match s.to_lowercase().as_str() {
            "c" | "°c" | "celsius" => Some(TemperatureUnit::Celsius),
            "f" | "°f" | "fahrenheit" => Some(TemperatureUnit::Fahrenheit),
            "k" | "kelvin" => Some(TemperatureUnit::Kelvin),
            "r" | "°r" | "rankine" => Some(TemperatureUnit::Rankine),
            _ => None,
        }
    }

    /// 섭씨로 가는 식 (표시용).
    pub fn to_celsius_formula(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "(°F − 32) / 1.8",
            TemperatureUnit::Kelvin => "K − 273.15",
            TemperatureUnit::Rankine => "(°R − 491.67) / 1.8",
        }
    }

    /// 섭씨에서 오는 식 (표시용).
    pub fn from_celsius_formula(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°C × 1.8 + 32",
            TemperatureUnit::Kelvin => "°C + 273.15",
            TemperatureUnit::Rankine => "°C × 1.8 + 491.67",
        }
    }
}

/// 주어진 값을 섭씨로 변환한다.
pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) / 1.8,
        TemperatureUnit::Kelvin => value - 273.15,
        TemperatureUnit::Rankine => (value - 491.67) / 1.8,
    }
}

/// 섭씨 값을 원하는 단위로 변환한다.
pub fn from_celsius(value_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value_c,
        TemperatureUnit::Fahrenheit => value_c * 1.8 + 32.0,
        TemperatureUnit::Kelvin => value_c + 273.15,
        TemperatureUnit::Rankine => value_c * 1.8 + 491.67,
    }
}

/// 온도를 서로 다른 단위로 변환한다. 같은 단위면 값을 그대로 돌려준다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    let c = to_celsius(value, from);
    from_celsius(c, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fixed_points() {
        use TemperatureUnit::*;
        assert_eq!(convert_temperature(0.0, Celsius, Fahrenheit), 32.0);
        assert_eq!(convert_temperature(100.0, Celsius, Fahrenheit), 212.0);
        assert_eq!(convert_temperature(0.0, Celsius, Kelvin), 273.15);
        assert_eq!(convert_temperature(32.0, Fahrenheit, Celsius), 0.0);
        assert_relative_eq!(convert_temperature(0.0, Kelvin, Rankine), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn parse_accepts_labels_and_short_forms() {
        assert_eq!(TemperatureUnit::parse("Kelvin (K)"), Some(TemperatureUnit::Kelvin));
        assert_eq!(TemperatureUnit::parse("°F"), Some(TemperatureUnit::Fahrenheit));
        assert_eq!(TemperatureUnit::parse("celsius"), Some(TemperatureUnit::Celsius));
        assert_eq!(TemperatureUnit::parse("R"), Some(TemperatureUnit::Rankine));
        assert_eq!(TemperatureUnit::parse("Réaumur"), None);
    }
}
