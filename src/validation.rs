//! 물리량별 입력값 허용 범위 검사.

use crate::category::Category;
use crate::error::ConversionError;

/// 음수가 물리적으로 의미 없는 물리량인지 여부.
pub fn rejects_negative(category: Category) -> bool {
    matches!(
        category,
        Category::Length
            | Category::Mass
            | Category::Volume
            | Category::Area
            | Category::Density
            | Category::Time
            | Category::Permeability
            | Category::DynamicViscosity
            | Category::KinematicViscosity
            | Category::LiquidFlowRate
            | Category::GasFlowRate
            | Category::Energy
            | Category::Power
            | Category::Force
    )
}

/// 입력값이 물리량의 허용 범위 안에 있는지 확인한다. 부수효과는 없다.
///
/// 온도처럼 음수가 정상인 물리량은 유한한 실수면 모두 통과한다.
pub fn validate(category: Category, value: f64) -> Result<(), ConversionError> {
    let name = category.name();
    if !value.is_finite() {
        return Err(ConversionError::invalid(name, value, "value must be finite"));
    }
    if rejects_negative(category) && value < 0.0 {
        return Err(ConversionError::invalid(
            name,
            value,
            format!("negative values are not valid for {name}"),
        ));
    }
    if category == Category::ApiGravity && value <= 0.0 {
        return Err(ConversionError::invalid(
            name,
            value,
            "gravity must be positive",
        ));
    }
    Ok(())
}
