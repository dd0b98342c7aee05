//! 석유공학 단위 변환 엔진. 변환 로직은 라이브러리에 두고 CLI는 얇은 호출자로 유지한다.
//!
//! 엔진(카탈로그, 검증, 선형/특수 변환, 퍼사드)은 상태가 없으며 어느 스레드에서든
//! 동기화 없이 호출할 수 있다. 이력/즐겨찾기 같은 상태는 [`session::Session`]이 담당한다.

pub mod app;
pub mod batch;
pub mod category;
pub mod config;
pub mod conversion;
pub mod error;
pub mod field_calcs;
pub mod session;
pub mod ui_cli;
pub mod units;
pub mod validation;

pub use category::{Category, CategoryKind, SpecialKind};
pub use conversion::{convert, convert_category, convert_detailed, Conversion, Method};
pub use error::ConversionError;
pub use units::{special_unit_labels, Unit};

/// 표시 순서대로 나열한 전체 물리량.
pub fn list_categories() -> &'static [Category] {
    &Category::ALL
}

/// 물리량 이름으로 선형 단위 테이블을 조회한다.
///
/// 알 수 없는 물리량이나 특수 물리량(온도, API/SG)은 오류 대신 빈 슬라이스를 반환하므로
/// 호출자는 [`Category::is_special`]로 구분해야 한다.
pub fn get_units(category: &str) -> &'static [Unit] {
    Category::from_name(category)
        .map(units::units_for)
        .unwrap_or(&[])
}
