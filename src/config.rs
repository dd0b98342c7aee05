use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::category::Category;
use crate::field_calcs::{STANDARD_PRESSURE_PSIA, STANDARD_TEMPERATURE_R};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// PVT 보정 입력의 기본값 (표준 상태).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PvtDefaults {
    pub reference_pressure_psia: f64,
    pub reference_temperature_f: f64,
}

impl Default for PvtDefaults {
    fn default() -> Self {
        Self {
            reference_pressure_psia: STANDARD_PRESSURE_PSIA,
            reference_temperature_f: STANDARD_TEMPERATURE_R - 460.0,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 결과 표시 소수 자릿수. 엔진 계산에는 영향을 주지 않는다.
    pub display_precision: usize,
    /// 세션 이력 최대 보관 개수
    pub history_limit: usize,
    /// 대화형 모드에서 처음 선택되는 물리량 이름
    pub default_category: String,
    pub pvt: PvtDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_precision: 6,
            history_limit: 50,
            default_category: Category::Length.name().to_string(),
            pvt: PvtDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        info!(path = %path.display(), "created default config");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 기본 물리량. 설정값이 잘못되었으면 길이를 사용한다.
    pub fn default_category(&self) -> Category {
        Category::from_name(&self.default_category).unwrap_or(Category::Length)
    }
}
