use thiserror::Error;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// 물리량의 허용 범위를 벗어난 입력값 (음수 길이, 0 이하의 비중 등)
    #[error("invalid input {value} for {category}: {reason}")]
    InvalidInput {
        category: &'static str,
        value: f64,
        reason: String,
    },

    /// 카탈로그에 없는 물리량 이름
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// 해당 물리량에 정의되지 않은 단위
    #[error("unknown unit '{unit}' for {category}")]
    UnknownUnit { category: &'static str, unit: String },

    /// 그 밖의 예외 상황 (숫자가 아닌 입력 등)
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl ConversionError {
    pub(crate) fn invalid(category: &'static str, value: f64, reason: impl Into<String>) -> Self {
        ConversionError::InvalidInput {
            category,
            value,
            reason: reason.into(),
        }
    }

    pub(crate) fn unknown_unit(category: &'static str, unit: &str) -> Self {
        ConversionError::UnknownUnit {
            category,
            unit: unit.to_string(),
        }
    }
}
