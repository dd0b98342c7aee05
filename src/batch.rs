//! CSV 일괄 변환. 행마다 변환 엔진을 한 번씩 호출한다.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::category::Category;
use crate::conversion::{self, ConversionError};

/// 입력 CSV에서 값을 읽을 열 이름.
pub const VALUE_COLUMN: &str = "value";

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input has no 'value' column")]
    MissingValueColumn,
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// 일괄 변환 요청. 모든 행에 같은 물리량/단위/보정을 적용한다.
#[derive(Debug, Clone)]
pub struct BatchRequest<'a> {
    pub category: &'a str,
    pub from_unit: &'a str,
    pub to_unit: &'a str,
    pub correction: f64,
}

/// 처리 결과 요약.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
}

#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    value: &'a str,
    result: Option<f64>,
    error: Option<String>,
}

/// CSV를 읽어 `value,result,error` 형식으로 쓴다.
///
/// 행 단위 오류(음수 길이, 숫자가 아닌 값 등)는 `error` 열에 기록하고 계속 진행한다.
/// 물리량이나 단위 자체가 잘못된 경우는 첫 행을 처리하기 전에 실패한다.
pub fn convert_csv<R: Read, W: Write>(
    input: R,
    output: W,
    request: &BatchRequest<'_>,
) -> Result<BatchSummary, BatchError> {
    let category: Category = request.category.parse()?;
    // 단위 오류는 행마다 반복하지 않고 한 번에 보고한다.
    conversion::resolve_labels(category, request.from_unit, request.to_unit)?;

    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);
    let column = reader
        .headers()?
        .iter()
        .position(|h| h.eq_ignore_ascii_case(VALUE_COLUMN))
        .ok_or(BatchError::MissingValueColumn)?;

    let mut writer = csv::Writer::from_writer(output);
    let mut summary = BatchSummary::default();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let raw = record.get(column).unwrap_or("");
        let outcome = raw
            .parse::<f64>()
            .map_err(|_| ConversionError::Unexpected(format!("not a number: '{raw}'")))
            .and_then(|value| {
                conversion::convert_category(
                    category,
                    request.from_unit,
                    request.to_unit,
                    value,
                    request.correction,
                )
            });
        let row = match outcome {
            Ok(c) => {
                summary.converted += 1;
                OutputRow {
                    value: raw,
                    result: Some(c.result),
                    error: None,
                }
            }
            Err(err) => {
                summary.failed += 1;
                // 헤더가 1행이므로 데이터는 2행부터 시작한다.
                warn!(row = index + 2, %err, "batch row failed");
                OutputRow {
                    value: raw,
                    result: None,
                    error: Some(err.to_string()),
                }
            }
        };
        writer.serialize(row)?;
    }
    writer.flush()?;
    debug!(?summary, "batch finished");
    Ok(summary)
}

/// 파일 경로 기반 일괄 변환.
pub fn convert_file(
    input: &Path,
    output: &Path,
    request: &BatchRequest<'_>,
) -> Result<BatchSummary, BatchError> {
    let reader = File::open(input)?;
    let writer = File::create(output)?;
    convert_csv(reader, writer, request)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request<'a>(category: &'a str, from: &'a str, to: &'a str) -> BatchRequest<'a> {
        BatchRequest {
            category,
            from_unit: from,
            to_unit: to,
            correction: 1.0,
        }
    }

    #[test]
    fn converts_each_row_and_reports_failures() {
        let input = "well,value\nA,1\nB,-2\nC,abc\nD,0\n";
        let mut out = Vec::new();
        let summary =
            convert_csv(input.as_bytes(), &mut out, &request("Length", "km", "m")).unwrap();
        assert_eq!(summary, BatchSummary { converted: 2, failed: 2 });

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "value,result,error");
        assert_eq!(lines[1], "1,1000.0,");
        assert!(lines[2].starts_with("-2,,"));
        assert!(lines[2].contains("negative values are not valid for Length"));
        assert!(lines[3].contains("not a number"));
        assert_eq!(lines[4], "0,0.0,");
    }

    #[test]
    fn unknown_unit_fails_up_front() {
        let input = "value\n1\n";
        let err = convert_csv(input.as_bytes(), Vec::new(), &request("Length", "parsec", "m"))
            .unwrap_err();
        assert!(matches!(
            err,
            BatchError::Conversion(ConversionError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn missing_value_column() {
        let input = "depth\n1\n";
        let err = convert_csv(input.as_bytes(), Vec::new(), &request("Length", "m", "ft"))
            .unwrap_err();
        assert!(matches!(err, BatchError::MissingValueColumn));
    }
}
