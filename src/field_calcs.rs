//! 현장 계산 보조 기능: PVT 보정 계수, 정수압, 드릴파이프 내부 체적.
use thiserror::Error;

/// 표준 상태 압력 [psia]
pub const STANDARD_PRESSURE_PSIA: f64 = 14.7;
/// 표준 상태 절대온도 [°R] (60°F + 460)
pub const STANDARD_TEMPERATURE_R: f64 = 520.0;
/// 이수 정수압 구배 상수 [psi/(ft·ppg)]
pub const HYDROSTATIC_GRADIENT: f64 = 0.052;
/// 내경[in]²/1029.4 = bbl/ft
pub const PIPE_CAPACITY_DIVISOR: f64 = 1029.4;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldCalcError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

/// GOR 변환에 곱할 PVT 보정 계수. `(P / 14.7) × ((T + 460) / 520)`
///
/// 표준 상태(14.7 psia, 60°F)에서는 정확히 1이다.
pub fn pvt_correction(pressure_psia: f64, temperature_f: f64) -> Result<f64, FieldCalcError> {
    if pressure_psia <= 0.0 {
        return Err(FieldCalcError::InvalidInput(
            "reservoir pressure must be positive",
        ));
    }
    let temperature_r = temperature_f + 460.0;
    if temperature_r <= 0.0 {
        return Err(FieldCalcError::InvalidInput(
            "reservoir temperature must be above absolute zero",
        ));
    }
    Ok((pressure_psia / STANDARD_PRESSURE_PSIA) * (temperature_r / STANDARD_TEMPERATURE_R))
}

/// 이수 기둥의 정수압 [psi]. `TVD(ft) × 이수비중(ppg) × 0.052`
pub fn hydrostatic_pressure_psi(tvd_ft: f64, mud_ppg: f64) -> Result<f64, FieldCalcError> {
    if tvd_ft < 0.0 || mud_ppg < 0.0 {
        return Err(FieldCalcError::InvalidInput(
            "depth and mud weight cannot be negative",
        ));
    }
    Ok(tvd_ft * mud_ppg * HYDROSTATIC_GRADIENT)
}

/// 드릴파이프 내부 체적 [bbl]. `길이(ft) × 내경(in)² / 1029.4`
pub fn drill_pipe_volume_bbl(
    length_ft: f64,
    inner_diameter_in: f64,
) -> Result<f64, FieldCalcError> {
    if length_ft < 0.0 || inner_diameter_in < 0.0 {
        return Err(FieldCalcError::InvalidInput(
            "pipe length and inner diameter cannot be negative",
        ));
    }
    Ok(length_ft * inner_diameter_in.powi(2) / PIPE_CAPACITY_DIVISOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn pvt_is_unity_at_standard_conditions() {
        assert_eq!(pvt_correction(14.7, 60.0).unwrap(), 1.0);
    }

    #[test]
    fn pvt_scales_with_pressure_and_temperature() {
        let factor = pvt_correction(29.4, 100.0).unwrap();
        assert_relative_eq!(factor, 2.0 * 560.0 / 520.0, max_relative = 1e-12);
        assert!(pvt_correction(0.0, 60.0).is_err());
        assert!(pvt_correction(14.7, -460.0).is_err());
    }

    #[test]
    fn hydrostatic_pressure() {
        assert_relative_eq!(
            hydrostatic_pressure_psi(1000.0, 10.0).unwrap(),
            520.0,
            max_relative = 1e-12
        );
        assert!(hydrostatic_pressure_psi(-1.0, 10.0).is_err());
    }

    #[test]
    fn drill_pipe_volume() {
        let v = drill_pipe_volume_bbl(1000.0, 4.0).unwrap();
        assert_relative_eq!(v, 16000.0 / 1029.4);
        assert!(drill_pipe_volume_bbl(1000.0, -4.0).is_err());
    }
}
