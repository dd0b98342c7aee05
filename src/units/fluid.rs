//! 압력, 점도, 유량 등 유체/저류층 물리량 단위 테이블.

use super::Unit;

const BARREL_M3: f64 = 0.158987;
const US_GALLON_M3: f64 = 0.00378541;
const SCF_M3: f64 = 0.0283168;

/// 압력. 기준 단위는 파스칼이다. 게이지/절대압 구분은 하지 않는다.
pub const PRESSURE: &[Unit] = &[
    Unit::new("Pascal (Pa)", 1.0),
    Unit::new("kilopascal (kPa)", 1000.0),
    Unit::new("megapascal (MPa)", 1e6),
    Unit::new("bar", 1e5),
    Unit::new("psi", 6894.76),
    Unit::new("atmosphere (atm)", 101_325.0),
    Unit::new("mmHg (torr)", 133.322),
    Unit::new("kg/cm²", 98066.5),
];

/// 동점성 계수가 아닌 절대 점도. 기준 단위는 Pa·s이다.
pub const DYNAMIC_VISCOSITY: &[Unit] = &[
    Unit::new("Pascal-second (Pa·s)", 1.0),
    Unit::new("centipoise (cP)", 0.001),
    Unit::new("poise (P)", 0.1),
    Unit::new("lb/(ft·s)", 1.48816),
];

pub const KINEMATIC_VISCOSITY: &[Unit] = &[
    Unit::new("square meter per second (m²/s)", 1.0),
    Unit::new("centistoke (cSt)", 1e-6),
    Unit::new("stoke (St)", 1e-4),
    Unit::new("square foot per second (ft²/s)", 0.092903),
];

/// 액체 유량. 기준 단위는 m³/s이다.
pub const LIQUID_FLOW: &[Unit] = &[
    Unit::new("cubic meter per second (m³/s)", 1.0),
    Unit::new("cubic meter per hour (m³/h)", 1.0 / 3600.0),
    Unit::new("cubic meter per day (m³/d)", 1.0 / 86400.0),
    Unit::new("barrel per day (bpd)", BARREL_M3 / 86400.0),
    Unit::new("US gallon per minute (gpm)", US_GALLON_M3 / 60.0),
    Unit::new("liter per second (L/s)", 0.001),
    Unit::new("barrel per hour (bph)", BARREL_M3 / 3600.0),
];

/// 가스 유량. 기준 단위는 sm³/d이며 미국 표준상태(14.7 psia / 60°F) 근사를 따른다.
/// nm³/h는 노멀/표준 상태 비율 1.0549를 적용한다.
pub const GAS_FLOW: &[Unit] = &[
    Unit::new("standard cubic meter per day (sm³/d)", 1.0),
    Unit::new("thousand standard cubic feet per day (mscfd)", SCF_M3),
    Unit::new("million standard cubic feet per day (mmscfd)", 28.3168),
    Unit::new("billion cubic feet per day (bcfd)", 28316.8),
    Unit::new("normal cubic meter per hour (nm³/h)", 24.0 / 1.0549),
    Unit::new("standard cubic foot per hour (scfh)", SCF_M3 / 24.0),
];

pub const PERMEABILITY: &[Unit] = &[
    Unit::new("square meter (m²)", 1.0),
    Unit::new("Darcy (D)", 9.86923e-13),
    Unit::new("millidarcy (mD)", 9.86923e-16),
];

/// 가스-오일비. 기준 단위는 sm³/m³이다. PVT 보정은 변환 결과에 별도로 곱한다.
pub const GAS_OIL_RATIO: &[Unit] = &[
    Unit::new("standard cubic meter per cubic meter (sm³/m³)", 1.0),
    Unit::new("standard cubic foot per barrel (scf/bbl)", 0.178107),
    Unit::new("normal cubic meter per cubic meter (nm³/m³)", 1.0549),
];
