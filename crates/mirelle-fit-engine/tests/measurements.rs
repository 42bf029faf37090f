use mirelle_fit_engine::{bra_fit_notes, bra_fit_score, canonical_from_measurements, FitEngine};
use mirelle_fit_model::{CanonicalSize, RegionCode, SizeError};

#[test]
fn chart_anchors_resolve_to_the_published_sizes() {
    let engine = FitEngine::with_builtin_regions();

    // The reference chart's 75A row: under-bust 73–77, bust 83–85.
    let canonical = engine.size_from_measurements(75.0, 84.0).expect("measure");
    assert_eq!(
        engine
            .format_size(canonical, RegionCode::Vn)
            .expect("format")
            .to_string(),
        "75A"
    );

    // A 12.5 cm difference is the chart's B.
    let canonical = engine.size_from_measurements(75.0, 87.5).expect("measure");
    assert_eq!(
        engine
            .format_size(canonical, RegionCode::Vn)
            .expect("format")
            .to_string(),
        "75B"
    );

    // 15 cm lands on C.
    let canonical = engine.size_from_measurements(80.0, 95.0).expect("measure");
    assert_eq!(
        engine
            .format_size(canonical, RegionCode::Vn)
            .expect("format")
            .to_string(),
        "80C"
    );
}

#[test]
fn under_bust_snaps_half_up_toward_the_larger_band() {
    let canonical = canonical_from_measurements(62.5, 72.5).expect("measure");
    assert_eq!(canonical.band_cm(), 65);
}

#[test]
fn tiny_differences_floor_at_the_first_cup() {
    let canonical = canonical_from_measurements(75.0, 76.0).expect("measure");
    assert_eq!(canonical.cup_volume(), 1);
}

#[test]
fn off_axis_measurements_are_reported() {
    assert!(matches!(
        canonical_from_measurements(40.0, 50.0),
        Err(SizeError::MeasurementOutOfRange { .. })
    ));
    assert!(matches!(
        canonical_from_measurements(130.0, 140.0),
        Err(SizeError::MeasurementOutOfRange { .. })
    ));
}

#[test]
fn fit_score_is_one_on_exact_match_and_decays_with_distance() {
    let user = CanonicalSize::new(75, 3).expect("canonical");
    assert!((bra_fit_score(user, user) - 1.0).abs() < f64::EPSILON);

    let one_band_off = CanonicalSize::new(80, 3).expect("canonical");
    let two_bands_off = CanonicalSize::new(85, 3).expect("canonical");
    assert!(bra_fit_score(user, one_band_off) > bra_fit_score(user, two_bands_off));
    assert!((bra_fit_score(user, one_band_off) - 0.75).abs() < 1e-9);
    assert!((bra_fit_score(user, two_bands_off) - 0.5).abs() < 1e-9);

    let one_cup_off = CanonicalSize::new(75, 4).expect("canonical");
    assert!((bra_fit_score(user, one_cup_off) - 0.75).abs() < 1e-9);

    // Both components bottom out at zero rather than going negative.
    let far = CanonicalSize::new(110, 15).expect("canonical");
    assert!(bra_fit_score(user, far).abs() < f64::EPSILON);
}

#[test]
fn sister_sizes_score_equally_by_symmetry() {
    let user = CanonicalSize::new(75, 3).expect("canonical");
    let down = user.shifted(-1, 1).expect("down");
    let up = user.shifted(1, -1).expect("up");
    assert!((bra_fit_score(user, down) - bra_fit_score(user, up)).abs() < f64::EPSILON);
}

#[test]
fn fit_notes_name_the_loose_and_snug_directions() {
    let user = CanonicalSize::new(75, 3).expect("canonical");

    let exact = bra_fit_notes(user, user);
    assert_eq!(
        exact,
        vec![
            "Band should fit comfortably.".to_string(),
            "Cup should provide excellent support.".to_string(),
        ]
    );

    let looser_band = CanonicalSize::new(80, 3).expect("canonical");
    let notes = bra_fit_notes(user, looser_band);
    assert!(notes[0].contains("loose"));
    assert!(notes[0].contains("sister sizing down"));

    let tighter_band = CanonicalSize::new(70, 3).expect("canonical");
    let notes = bra_fit_notes(user, tighter_band);
    assert!(notes[0].contains("tight"));
    assert!(notes[0].contains("sister sizing up"));

    let bigger_cup = CanonicalSize::new(75, 4).expect("canonical");
    let notes = bra_fit_notes(user, bigger_cup);
    assert!(notes[1].contains("extra room"));

    let smaller_cup = CanonicalSize::new(75, 2).expect("canonical");
    let notes = bra_fit_notes(user, smaller_cup);
    assert!(notes[1].contains("snug"));
}
