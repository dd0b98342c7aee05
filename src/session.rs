//! 대화형 세션 상태(변환 이력, 즐겨찾기, 카운터).
//!
//! 변환 엔진은 상태를 갖지 않으므로 이 객체는 호출 측이 소유하고 명시적으로 넘긴다.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::category::Category;
use crate::conversion::Conversion;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("history export failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// 이력 한 줄.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    pub value: f64,
    pub result: f64,
    pub formula: String,
}

impl From<&Conversion> for HistoryEntry {
    fn from(c: &Conversion) -> Self {
        Self {
            category: c.category.name().to_string(),
            from_unit: c.from_unit.to_string(),
            to_unit: c.to_unit.to_string(),
            value: c.value,
            result: c.result,
            formula: c.formula(),
        }
    }
}

/// 자주 쓰는 (물리량, 입력 단위, 출력 단위) 조합.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub category: Category,
    pub from_unit: String,
    pub to_unit: String,
}

/// 한 사용자 세션의 상태. 단일 작성자 가정이며 `&mut self`로만 변경된다.
#[derive(Debug, Clone)]
pub struct Session {
    history: VecDeque<HistoryEntry>,
    favorites: Vec<Favorite>,
    history_limit: usize,
    conversion_count: u64,
}

impl Session {
    pub fn new(history_limit: usize) -> Self {
        Self {
            history: VecDeque::new(),
            favorites: Vec::new(),
            history_limit,
            conversion_count: 0,
        }
    }

    /// 변환 결과를 이력에 추가한다. 한도를 넘으면 가장 오래된 항목을 버린다.
    pub fn record(&mut self, conversion: &Conversion) {
        self.conversion_count += 1;
        if self.history_limit == 0 {
            return;
        }
        if self.history.len() == self.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(HistoryEntry::from(conversion));
        debug!(count = self.conversion_count, "recorded conversion");
    }

    /// 최신 항목부터 순회한다.
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter().rev()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// 이 세션에서 수행한 변환 횟수. 이력 한도와 무관하게 누적된다.
    pub fn conversion_count(&self) -> u64 {
        self.conversion_count
    }

    /// 즐겨찾기를 추가한다. 이미 있으면 `false`.
    pub fn add_favorite(&mut self, category: Category, from_unit: &str, to_unit: &str) -> bool {
        let fav = Favorite {
            category,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
        };
        if self.favorites.contains(&fav) {
            return false;
        }
        self.favorites.push(fav);
        true
    }

    pub fn remove_favorite(&mut self, index: usize) -> Option<Favorite> {
        (index < self.favorites.len()).then(|| self.favorites.remove(index))
    }

    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }

    /// 이력을 오래된 순서의 JSON 배열로 직렬화한다.
    pub fn history_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string_pretty(&self.history)?)
    }

    pub fn export_history(&self, path: &Path) -> Result<(), SessionError> {
        fs::write(path, self.history_json()?)?;
        debug!(path = %path.display(), entries = self.history.len(), "exported history");
        Ok(())
    }
}
