//! 시추/물성 관련 단위 테이블 (이수 비중, 굴진율, 비저항, 염도, 열물성).

use super::Unit;

/// 염도/농도. 희석 수용액 가정으로 mg/L, ppm, kg/m³을 동일하게 취급한다.
pub const CONCENTRATION: &[Unit] = &[
    Unit::new("mg/L", 1.0),
    Unit::new("ppm (parts per million)", 1.0),
    Unit::new("g/L", 1000.0),
    Unit::new("kg/m³", 1.0),
];

pub const HEAT_CAPACITY: &[Unit] = &[
    Unit::new("J/kg·K", 1.0),
    Unit::new("Btu/lb·°F", 4186.8),
];

pub const THERMAL_CONDUCTIVITY: &[Unit] = &[
    Unit::new("W/m·K", 1.0),
    Unit::new("Btu/hr·ft·°F", 1.73073),
];

pub const RESISTIVITY: &[Unit] = &[
    Unit::new("ohm-meter (ohm·m)", 1.0),
    Unit::new("ohm-foot (ohm·ft)", 0.3048),
];

/// 이수 비중. 기준은 비중(SG)이며 청수 8.3454 ppg, 62.428 lb/ft³을 1로 본다.
pub const MUD_WEIGHT: &[Unit] = &[
    Unit::new("Specific Gravity (SG)", 1.0),
    Unit::new("pounds per gallon (ppg)", 1.0 / 8.3454),
    Unit::new("lb/ft³", 1.0 / 62.428),
];

pub const RATE_OF_PENETRATION: &[Unit] = &[
    Unit::new("meter per hour (m/h)", 1.0),
    Unit::new("foot per hour (ft/h)", 0.3048),
];
