use mirelle_fit_model::{
    band_index, nearest_band_cm, BandUnit, CanonicalSize, RegionCode, RegionRegistry,
    RegionScheme, SizeError, UniversalCode, BAND_MAX_CM, BAND_MIN_CM,
};

#[test]
fn canonical_size_rejects_zero_cup_and_off_axis_bands() {
    assert!(CanonicalSize::new(75, 0).is_err());
    assert!(CanonicalSize::new(62, 1).is_err());
    assert!(CanonicalSize::new(BAND_MIN_CM - 5, 1).is_err());
    assert!(CanonicalSize::new(BAND_MAX_CM + 5, 1).is_err());
    assert!(CanonicalSize::new(75, 3).is_ok());
}

#[test]
fn universal_code_round_trips() {
    let size = CanonicalSize::new(75, 3).expect("canonical");
    let code = size.universal_code();
    assert_eq!(code.as_str(), "75:3");
    assert_eq!(CanonicalSize::from_universal_code("75:3").expect("decode"), size);
    assert!(CanonicalSize::from_universal_code("75-3").is_err());
    assert!(CanonicalSize::from_universal_code("75:0").is_err());
    assert!(CanonicalSize::from_universal_code("banana").is_err());
    assert!(UniversalCode::parse("75:3").is_ok());
}

#[test]
fn band_index_only_accepts_table_entries() {
    assert_eq!(band_index(60), Some(0));
    assert_eq!(band_index(110), Some(10));
    assert_eq!(band_index(61), None);
    assert_eq!(band_index(55), None);
    assert_eq!(band_index(115), None);
}

#[test]
fn nearest_band_rounds_half_up_toward_larger_band() {
    assert_eq!(nearest_band_cm(74.0), Some(75));
    assert_eq!(nearest_band_cm(76.0), Some(75));
    // Exact midpoints go to the larger band.
    assert_eq!(nearest_band_cm(62.5), Some(65));
    assert_eq!(nearest_band_cm(107.5), Some(110));
    assert_eq!(nearest_band_cm(57.4), None);
    assert_eq!(nearest_band_cm(113.0), None);
    assert_eq!(nearest_band_cm(f64::NAN), None);
}

#[test]
fn shifted_respects_both_axes() {
    let size = CanonicalSize::new(75, 3).expect("canonical");
    let down = size.shifted(-1, 1).expect("sister down");
    assert_eq!((down.band_cm(), down.cup_volume()), (70, 4));
    let up = size.shifted(1, -1).expect("sister up");
    assert_eq!((up.band_cm(), up.cup_volume()), (80, 2));

    let floor = CanonicalSize::new(BAND_MIN_CM, 1).expect("floor");
    assert!(floor.shifted(-1, 1).is_none());
    assert!(floor.shifted(1, -1).is_none());
    let ceiling = CanonicalSize::new(BAND_MAX_CM, 2).expect("ceiling");
    assert!(ceiling.shifted(1, -1).is_none());
}

#[test]
fn label_parse_rejects_malformed_input() {
    let registry = RegionRegistry::builtin();
    let us = registry.scheme(RegionCode::Us).expect("US scheme");
    assert!(matches!(
        us.parse_label("C34"),
        Err(SizeError::InvalidSizeFormat { .. })
    ));
    assert!(matches!(
        us.parse_label("34"),
        Err(SizeError::InvalidSizeFormat { .. })
    ));
    assert!(matches!(
        us.parse_label(""),
        Err(SizeError::InvalidSizeFormat { .. })
    ));
    assert!(matches!(
        us.parse_label("34C2"),
        Err(SizeError::InvalidSizeFormat { .. })
    ));
    assert!(matches!(
        us.parse_label("33C"),
        Err(SizeError::BandOutOfRange { .. })
    ));
    assert!(matches!(
        us.parse_label("34Q"),
        Err(SizeError::CupSymbolNotFound { .. })
    ));
}

#[test]
fn label_parse_is_lenient_about_case_and_whitespace() {
    let registry = RegionRegistry::builtin();
    let us = registry.scheme(RegionCode::Us).expect("US scheme");
    let canonical = us.parse_label(" 34c ").expect("parse");
    assert_eq!((canonical.band_cm(), canonical.cup_volume()), (75, 3));
}

#[test]
fn region_code_parse_matches_wire_spelling() {
    assert_eq!(RegionCode::parse("US").expect("US"), RegionCode::Us);
    assert_eq!(RegionCode::parse("vn").expect("vn"), RegionCode::Vn);
    assert!(matches!(
        RegionCode::parse("XX"),
        Err(SizeError::UnsupportedRegion { .. })
    ));
}

#[test]
fn scheme_construction_validates_tables() {
    let cups = |letters: &[&str]| letters.iter().map(|s| (*s).to_string()).collect::<Vec<_>>();

    assert!(RegionScheme::new(
        RegionCode::Vn,
        "Việt Nam",
        BandUnit::Cm,
        60,
        vec![60, 65, 70],
        cups(&["AA", "A", "B"]),
    )
    .is_ok());

    // Misaligned floor.
    assert!(RegionScheme::new(
        RegionCode::Vn,
        "Việt Nam",
        BandUnit::Cm,
        62,
        vec![60, 65],
        cups(&["A"]),
    )
    .is_err());

    // Band table running past the canonical axis.
    assert!(RegionScheme::new(
        RegionCode::Vn,
        "Việt Nam",
        BandUnit::Cm,
        105,
        vec![105, 110, 115],
        cups(&["A"]),
    )
    .is_err());

    // Non-increasing labels.
    assert!(RegionScheme::new(
        RegionCode::Vn,
        "Việt Nam",
        BandUnit::Cm,
        60,
        vec![60, 60],
        cups(&["A"]),
    )
    .is_err());

    // Duplicate and lowercase cup symbols.
    assert!(RegionScheme::new(
        RegionCode::Vn,
        "Việt Nam",
        BandUnit::Cm,
        60,
        vec![60],
        cups(&["A", "A"]),
    )
    .is_err());
    assert!(RegionScheme::new(
        RegionCode::Vn,
        "Việt Nam",
        BandUnit::Cm,
        60,
        vec![60],
        cups(&["a"]),
    )
    .is_err());
}

#[test]
fn registry_rejects_duplicate_regions() {
    let scheme = |code| {
        RegionScheme::new(
            code,
            "test",
            BandUnit::Cm,
            60,
            vec![60, 65],
            vec!["A".to_string(), "B".to_string()],
        )
        .expect("scheme")
    };
    assert!(RegionRegistry::from_schemes(vec![scheme(RegionCode::Eu)]).is_ok());
    assert!(
        RegionRegistry::from_schemes(vec![scheme(RegionCode::Eu), scheme(RegionCode::Eu)])
            .is_err()
    );
}

#[test]
fn registry_lookup_reports_unsupported_region() {
    let registry = RegionRegistry::from_schemes(vec![]).expect("empty registry");
    assert!(registry.is_empty());
    assert!(matches!(
        registry.scheme(RegionCode::Us),
        Err(SizeError::UnsupportedRegion { .. })
    ));
}
