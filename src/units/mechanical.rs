//! 일반 역학/기하 물리량 단위 테이블.

use super::Unit;

/// 길이. 기준 단위는 미터이다.
pub const LENGTH: &[Unit] = &[
    Unit::new("millimeter (mm)", 0.001),
    Unit::new("centimeter (cm)", 0.01),
    Unit::new("meter (m)", 1.0),
    Unit::new("kilometer (km)", 1000.0),
    Unit::new("inch (in)", 0.0254),
    Unit::new("foot (ft)", 0.3048),
    Unit::new("yard (yd)", 0.9144),
    Unit::new("mile (mi)", 1609.34),
];

/// 면적. 기준 단위는 제곱미터이다.
pub const AREA: &[Unit] = &[
    Unit::new("square meter (m²)", 1.0),
    Unit::new("square kilometer (km²)", 1e6),
    Unit::new("square foot (ft²)", 0.092903),
    Unit::new("square yard (yd²)", 0.836127),
    Unit::new("acre", 4046.86),
    Unit::new("hectare", 10000.0),
    Unit::new("square mile (mi²)", 2.58999e6),
];

/// 체적. 기준 단위는 세제곱미터이며 표준 세제곱미터(sm³)는 같은 값으로 취급한다.
pub const VOLUME: &[Unit] = &[
    Unit::new("cubic meter (m³)", 1.0),
    Unit::new("liter (L)", 0.001),
    Unit::new("cubic centimeter (cm³)", 1e-6),
    Unit::new("barrel (bbl)", 0.158987),
    Unit::new("US gallon (gal)", 0.00378541),
    Unit::new("cubic foot (ft³)", 0.0283168),
    Unit::new("acre-foot", 1233.48),
    Unit::new("standard cubic foot (scf)", 0.0283168),
    Unit::new("thousand standard cubic feet (mscf)", 28.3168),
    Unit::new("million standard cubic feet (mmscf)", 28316.8),
    Unit::new("billion cubic feet (bcf)", 2.83168e7),
    Unit::new("standard cubic meter (sm³)", 1.0),
];

/// 질량. 기준 단위는 킬로그램이다.
pub const MASS: &[Unit] = &[
    Unit::new("gram (g)", 0.001),
    Unit::new("kilogram (kg)", 1.0),
    Unit::new("tonne (metric ton)", 1000.0),
    Unit::new("pound (lb)", 0.453592),
    Unit::new("short ton (US)", 907.185),
    Unit::new("long ton (UK)", 1016.05),
];

/// 밀도. 기준 단위는 kg/m³이다.
pub const DENSITY: &[Unit] = &[
    Unit::new("kg/m³", 1.0),
    Unit::new("g/cm³", 1000.0),
    Unit::new("lb/ft³", 16.0185),
    Unit::new("lb/gal (US)", 119.826),
    Unit::new("lb/bbl", 2.85301),
];

pub const FORCE: &[Unit] = &[
    Unit::new("Newton (N)", 1.0),
    Unit::new("kilonewton (kN)", 1000.0),
    Unit::new("pound-force (lbf)", 4.44822),
    Unit::new("dyne", 1e-5),
    Unit::new("kilopond (kp)", 9.80665),
];

/// 에너지. 기준 단위는 줄이다. boe/toe는 관례적 환산값을 사용한다.
pub const ENERGY: &[Unit] = &[
    Unit::new("Joule (J)", 1.0),
    Unit::new("kilojoule (kJ)", 1000.0),
    Unit::new("megajoule (MJ)", 1e6),
    Unit::new("erg", 1e-7),
    Unit::new("calorie (cal)", 4.184),
    Unit::new("kilocalorie (kcal)", 4184.0),
    Unit::new("British thermal unit (BTU)", 1055.06),
    Unit::new("kilowatt-hour (kWh)", 3.6e6),
    Unit::new("therm", 1.05506e8),
    Unit::new("barrel of oil equivalent (boe)", 6.12e9),
    Unit::new("tonne of oil equivalent (toe)", 4.1868e10),
];

pub const POWER: &[Unit] = &[
    Unit::new("Watt (W)", 1.0),
    Unit::new("kilowatt (kW)", 1000.0),
    Unit::new("horsepower (hp)", 745.7),
    Unit::new("metric horsepower (PS)", 735.499),
];

/// 시간. 1년은 365일로 계산한다.
pub const TIME: &[Unit] = &[
    Unit::new("second (s)", 1.0),
    Unit::new("minute (min)", 60.0),
    Unit::new("hour (h)", 3600.0),
    Unit::new("day (d)", 86400.0),
    Unit::new("year (yr)", 31_536_000.0),
];

pub const VELOCITY: &[Unit] = &[
    Unit::new("meter per second (m/s)", 1.0),
    Unit::new("foot per second (ft/s)", 0.3048),
    Unit::new("kilometer per hour (km/h)", 1.0 / 3.6),
    Unit::new("mile per hour (mph)", 0.44704),
];

pub const TORQUE: &[Unit] = &[
    Unit::new("Newton-meter (N·m)", 1.0),
    Unit::new("foot-pound (ft·lb)", 1.35582),
    Unit::new("inch-pound (in·lb)", 0.112985),
];

/// 각도. 오프셋이 없으므로 라디안 기준의 선형 변환으로 처리한다.
pub const ANGLE: &[Unit] = &[
    Unit::new("radian (rad)", 1.0),
    Unit::new("degree (deg)", std::f64::consts::PI / 180.0),
];
