//! 변환 엔진의 성질 회귀 테스트 (항등, 왕복, 배율 일관성, 고정점, 보정 계수 범위).
use approx::assert_relative_eq;
use petroleum_unit_converter::{
    convert, convert_category, get_units, list_categories, special_unit_labels, Category,
    ConversionError,
};

fn linear_categories() -> impl Iterator<Item = Category> {
    list_categories().iter().copied().filter(|c| !c.is_special())
}

/// 검증을 통과하는 대표 입력값.
fn sample_value(category: Category) -> f64 {
    match category {
        Category::ApiGravity => 35.0,
        _ => 12.345,
    }
}

#[test]
fn identity_is_exact_for_every_unit() {
    for category in list_categories().iter().copied() {
        let v = sample_value(category);
        let labels: Vec<&str> = if category.is_special() {
            special_unit_labels(category).to_vec()
        } else {
            get_units(category.name()).iter().map(|u| u.label).collect()
        };
        assert!(!labels.is_empty(), "{category} has no units");
        for label in labels {
            let out = convert(category.name(), label, label, v, 1.0).unwrap();
            assert_eq!(out, v, "{category}: {label}");
        }
    }
}

#[test]
fn round_trip_recovers_value() {
    for category in linear_categories() {
        let units = get_units(category.name());
        let v = sample_value(category);
        for a in units {
            for b in units {
                let there = convert(category.name(), a.label, b.label, v, 1.0).unwrap();
                let back = convert(category.name(), b.label, a.label, there, 1.0).unwrap();
                assert_relative_eq!(back, v, max_relative = 1e-9);
            }
        }
    }
}

#[test]
fn result_matches_factor_ratio() {
    for category in linear_categories() {
        let units = get_units(category.name());
        for a in units {
            for b in units.iter().filter(|b| b.label != a.label) {
                let out = convert(category.name(), a.label, b.label, 7.5, 1.0).unwrap();
                assert_eq!(
                    out,
                    7.5 * a.factor / b.factor,
                    "{category}: {} → {}",
                    a.label,
                    b.label
                );
            }
        }
    }
}

#[test]
fn zero_converts_to_zero_in_linear_categories() {
    for category in linear_categories() {
        let units = get_units(category.name());
        let (first, last) = (units[0], units[units.len() - 1]);
        assert_eq!(convert(category.name(), first.label, last.label, 0.0, 1.0).unwrap(), 0.0);
    }
}

#[test]
fn temperature_fixed_points() {
    let t = |from: &str, to: &str, v: f64| convert("Temperature", from, to, v, 1.0).unwrap();
    assert_eq!(t("Celsius (°C)", "Fahrenheit (°F)", 0.0), 32.0);
    assert_eq!(t("Celsius (°C)", "Fahrenheit (°F)", 100.0), 212.0);
    assert_eq!(t("Celsius (°C)", "Kelvin (K)", 0.0), 273.15);
    assert_eq!(t("Fahrenheit (°F)", "Celsius (°C)", 32.0), 0.0);
    assert_relative_eq!(t("F", "R", 32.0), 491.67, max_relative = 1e-12);
}

#[test]
fn api_and_specific_gravity() {
    let sg = convert("API↔SG", "API", "SG", 10.0, 1.0).unwrap();
    assert_relative_eq!(sg, 1.0);
    let sg = convert("API↔SG", "API", "SG", 35.0, 1.0).unwrap();
    assert_relative_eq!(sg, 141.5 / 166.5);

    let original = 0.82;
    let api = convert("API↔SG", "SG", "API", original, 1.0).unwrap();
    let back = convert("API↔SG", "API", "SG", api, 1.0).unwrap();
    assert_relative_eq!(back, original, max_relative = 1e-12);
}

#[test]
fn zero_gravity_is_rejected_before_the_formula() {
    let err = convert("API↔SG", "API", "SG", 0.0, 1.0).unwrap_err();
    assert_eq!(
        err,
        ConversionError::InvalidInput {
            category: "API Gravity and Specific Gravity",
            value: 0.0,
            reason: "gravity must be positive".into(),
        }
    );
}

#[test]
fn negative_length_is_rejected() {
    let err = convert("Length", "meter", "foot", -1.0, 1.0).unwrap_err();
    assert!(matches!(err, ConversionError::InvalidInput { category: "Length", .. }));
}

#[test]
fn correction_applies_to_gor_only() {
    let base = convert("GOR", "scf/bbl", "sm³/m³", 500.0, 1.0).unwrap();
    let corrected = convert("GOR", "scf/bbl", "sm³/m³", 500.0, 2.0).unwrap();
    assert_eq!(corrected, 2.0 * base);

    let same_unit = convert("GOR", "scf/bbl", "scf/bbl", 500.0, 2.0).unwrap();
    assert_eq!(same_unit, 1000.0);

    let t1 = convert("Temperature", "C", "F", 25.0, 1.0).unwrap();
    let t2 = convert("Temperature", "C", "F", 25.0, 3.7).unwrap();
    assert_eq!(t1, t2);

    let detailed = convert_category(Category::ApiGravity, "SG", "API", 0.9, 5.0).unwrap();
    assert_eq!(detailed.correction, 1.0);
}

#[test]
fn unknown_category_and_unit() {
    assert_eq!(
        convert("NotACategory", "m", "ft", 1.0, 1.0).unwrap_err(),
        ConversionError::UnknownCategory("NotACategory".into())
    );
    assert_eq!(
        convert("Length", "parsec", "meter", 1.0, 1.0).unwrap_err(),
        ConversionError::UnknownUnit {
            category: "Length",
            unit: "parsec".into()
        }
    );
    assert!(matches!(
        convert("Temperature", "C", "Delisle", 1.0, 1.0),
        Err(ConversionError::UnknownUnit { .. })
    ));
    for (category, unit, base) in [("Energy", "mJ", "J"), ("Pressure", "mPa", "Pa")] {
        assert!(
            matches!(
                convert(category, unit, base, 1.0, 1.0),
                Err(ConversionError::UnknownUnit { .. })
            ),
            "{category}: {unit}"
        );
    }
}

#[test]
fn catalog_lookup_contract() {
    assert_eq!(list_categories().len(), 27);
    assert!(get_units("NotACategory").is_empty());
    assert!(get_units("Temperature").is_empty());
    assert_eq!(get_units("Length").len(), 8);
    assert_eq!(get_units("Heat Capacity").len(), 2);
    assert_eq!(get_units("Thermal Conductivity").len(), 2);
}

#[test]
fn petroleum_reference_values() {
    assert_relative_eq!(convert("Volume", "bbl", "m³", 1.0, 1.0).unwrap(), 0.158987);
    assert_relative_eq!(
        convert("Mud Weight", "ppg", "SG", 8.3454, 1.0).unwrap(),
        1.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        convert("Permeability", "D", "mD", 1.0, 1.0).unwrap(),
        1000.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        convert("Angle", "deg", "rad", 180.0, 1.0).unwrap(),
        std::f64::consts::PI,
        max_relative = 1e-12
    );
}

#[test]
fn engine_is_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                convert("Pressure", "bar", "psi", f64::from(i), 1.0).unwrap()
            })
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        let expected = i as f64 * 1e5 / 6894.76;
        assert_eq!(h.join().unwrap(), expected);
    }
}
