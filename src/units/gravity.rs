use serde::{Deserialize, Serialize};

use crate::error::ConversionError;

const CATEGORY: &str = "API Gravity and Specific Gravity";

/// API 비중과 60°F 기준 비중(SG).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GravityUnit {
    ApiGravity,
    SpecificGravity,
}

impl GravityUnit {
    pub const LABELS: &'static [&'static str] =
        &["API Gravity (°API)", "Specific Gravity (SG at 60°F)"];

    pub fn label(self) -> &'static str {
        match self {
            GravityUnit::ApiGravity => Self::LABELS[0],
            GravityUnit::SpecificGravity => Self::LABELS[1],
        }
    }

    pub fn parse(s: &str) -> Option<GravityUnit> {
        let s = s.trim();
        if s == Self::LABELS[0] {
            return Some(GravityUnit::ApiGravity);
        }
        if s == Self::LABELS[1] {
            return Some(GravityUnit::SpecificGravity);
        }
        match s.to_lowercase().as_str() {
            "api" | "°api" | "api gravity" => Some(GravityUnit::ApiGravity),
            "sg" | "specific gravity" | "sg at 60°f" => Some(GravityUnit::SpecificGravity),
            _ => None,
        }
    }
}

/// `SG = 141.5 / (API + 131.5)`. API = -131.5에서는 정의되지 않는다.
pub fn api_to_sg(api: f64) -> Result<f64, ConversionError> {
    let denom = api + 131.5;
    if denom == 0.0 {
        return Err(ConversionError::invalid(
            CATEGORY,
            api,
            "API gravity of -131.5 has no specific gravity",
        ));
    }
    Ok(141.5 / denom)
}

/// `API = 141.5 / SG − 131.5`. SG = 0에서는 정의되지 않는다.
pub fn sg_to_api(sg: f64) -> Result<f64, ConversionError> {
    if sg == 0.0 {
        return Err(ConversionError::invalid(
            CATEGORY,
            sg,
            "specific gravity of 0 has no API gravity",
        ));
    }
    Ok(141.5 / sg - 131.5)
}

/// API ↔ SG 변환. 변환 방향은 입력 단위로 결정한다.
pub fn convert_gravity(
    value: f64,
    from: GravityUnit,
    to: GravityUnit,
) -> Result<f64, ConversionError> {
    if from == to {
        return Ok(value);
    }
    match from {
        GravityUnit::ApiGravity => api_to_sg(value),
        GravityUnit::SpecificGravity => sg_to_api(value),
    }
}
