use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConversionError;

/// 다루는 물리량 종류를 나타낸다. 표시 순서는 [`Category::ALL`]을 따른다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Length,
    Area,
    Volume,
    Mass,
    Density,
    Temperature,
    Pressure,
    Force,
    Energy,
    Power,
    DynamicViscosity,
    KinematicViscosity,
    LiquidFlowRate,
    GasFlowRate,
    Permeability,
    Time,
    Velocity,
    Torque,
    GasOilRatio,
    ApiGravity,
    Concentration,
    HeatCapacity,
    ThermalConductivity,
    Angle,
    Resistivity,
    MudWeight,
    RateOfPenetration,
}

/// 비선형 변환식이 필요한 물리량.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialKind {
    /// 섭씨를 경유하는 아핀 변환
    Temperature,
    /// API 비중 ↔ 비중(SG) 역수 관계
    Gravity,
}

/// 물리량이 어떤 변환 규칙을 사용하는지 표현한다. 선형과 특수는 배타적이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryKind {
    /// 기준 단위 대비 배율만으로 변환
    Linear,
    /// 전용 변환 함수로 변환
    Special(SpecialKind),
}

impl Category {
    /// 화면에 표시되는 순서대로 나열한 전체 물리량.
    pub const ALL: [Category; 27] = [
        Category::Length,
        Category::Area,
        Category::Volume,
        Category::Mass,
        Category::Density,
        Category::Temperature,
        Category::Pressure,
        Category::Force,
        Category::Energy,
        Category::Power,
        Category::DynamicViscosity,
        Category::KinematicViscosity,
        Category::LiquidFlowRate,
        Category::GasFlowRate,
        Category::Permeability,
        Category::Time,
        Category::Velocity,
        Category::Torque,
        Category::GasOilRatio,
        Category::ApiGravity,
        Category::Concentration,
        Category::HeatCapacity,
        Category::ThermalConductivity,
        Category::Angle,
        Category::Resistivity,
        Category::MudWeight,
        Category::RateOfPenetration,
    ];

    /// 표시용 이름.
    pub fn name(self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Area => "Area",
            Category::Volume => "Volume",
            Category::Mass => "Mass",
            Category::Density => "Density",
            Category::Temperature => "Temperature",
            Category::Pressure => "Pressure",
            Category::Force => "Force",
            Category::Energy => "Energy",
            Category::Power => "Power",
            Category::DynamicViscosity => "Dynamic Viscosity",
            Category::KinematicViscosity => "Kinematic Viscosity",
            Category::LiquidFlowRate => "Liquid Flow Rate",
            Category::GasFlowRate => "Gas Flow Rate",
            Category::Permeability => "Permeability",
            Category::Time => "Time",
            Category::Velocity => "Velocity",
            Category::Torque => "Torque",
            Category::GasOilRatio => "Gas-Oil Ratio (GOR)",
            Category::ApiGravity => "API Gravity and Specific Gravity",
            Category::Concentration => "Salinity / Concentration",
            Category::HeatCapacity => "Heat Capacity",
            Category::ThermalConductivity => "Thermal Conductivity",
            Category::Angle => "Angle",
            Category::Resistivity => "Conductivity / Resistivity",
            Category::MudWeight => "Mud Weight",
            Category::RateOfPenetration => "Rate of Penetration (ROP)",
        }
    }

    pub fn kind(self) -> CategoryKind {
        match self {
            Category::Temperature => CategoryKind::Special(SpecialKind::Temperature),
            Category::ApiGravity => CategoryKind::Special(SpecialKind::Gravity),
            _ => CategoryKind::Linear,
        }
    }

    /// 고정된 짧은 단위 목록(2~4개)만 갖는 물리량인지 여부.
    pub fn is_special(self) -> bool {
        matches!(self.kind(), CategoryKind::Special(_))
    }

    /// 근사값 사용에 대한 참고 문구.
    pub fn note(self) -> Option<&'static str> {
        match self {
            Category::GasOilRatio => Some(
                "GOR: surface conditions; reservoir GOR requires PVT data. \
                 Factors assume standard conditions (14.7 psia / 60°F).",
            ),
            Category::GasFlowRate => Some(
                "Gas flow: approximations use US standard conditions (14.7 psia / 60°F). \
                 EU normal conditions (1 atm / 0°C) differ by ~5%.",
            ),
            Category::ApiGravity => Some("SG = 141.5 / (API + 131.5), referenced to 60°F."),
            Category::MudWeight => Some("1 ppg ≈ 0.119826 SG (fresh water = 8.3454 ppg)."),
            _ => None,
        }
    }

    /// 이름 또는 별칭으로 물리량을 찾는다. 대소문자는 구분하지 않는다.
    pub fn from_name(s: &str) -> Option<Category> {
        let query = s.trim();
        if let Some(found) = Self::ALL.iter().find(|c| c.name().eq_ignore_ascii_case(query)) {
            return Some(*found);
        }
        match query.to_lowercase().as_str() {
            "gor" | "gas-oil ratio" | "gas oil ratio" => Some(Category::GasOilRatio),
            "api↔sg" | "api/sg" | "api-sg" | "api" | "api gravity" | "gravity" => {
                Some(Category::ApiGravity)
            }
            "salinity" | "concentration" => Some(Category::Concentration),
            "resistivity" | "conductivity" => Some(Category::Resistivity),
            "rop" | "rate of penetration" => Some(Category::RateOfPenetration),
            "viscosity" => Some(Category::DynamicViscosity),
            "liquid flow" => Some(Category::LiquidFlowRate),
            "gas flow" => Some(Category::GasFlowRate),
            "mud" => Some(Category::MudWeight),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_name(s).ok_or_else(|| ConversionError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_name() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!("GOR".parse::<Category>().unwrap(), Category::GasOilRatio);
        assert_eq!("API↔SG".parse::<Category>().unwrap(), Category::ApiGravity);
        assert_eq!("pressure".parse::<Category>().unwrap(), Category::Pressure);
    }

    #[test]
    fn only_temperature_and_gravity_are_special() {
        let special: Vec<_> = Category::ALL.iter().filter(|c| c.is_special()).collect();
        assert_eq!(special, vec![&Category::Temperature, &Category::ApiGravity]);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "NotACategory".parse::<Category>().unwrap_err();
        assert_eq!(err, ConversionError::UnknownCategory("NotACategory".into()));
    }
}
