// SPDX-License-Identifier: Apache-2.0

//! Measurement helpers: deriving a canonical size from raw under-bust and
//! bust measurements, and scoring how well a candidate size fits them.
//!
//! The cup rule follows the product's reference chart: the bust/under-bust
//! difference anchors the first cup at 7.5 cm and steps 2.5 cm per cup
//! volume (10 cm lands on the metric regions' "A").

use mirelle_fit_model::{nearest_band_cm, CanonicalSize, SizeError};

/// Bust minus under-bust, in centimeters, at ordinal cup volume 1.
pub const CUP_ANCHOR_DIFF_CM: f64 = 7.5;
/// Additional difference per cup-volume step.
pub const CUP_STEP_DIFF_CM: f64 = 2.5;

/// Band distance at which the band component of the fit score reaches
/// zero. Matches the storefront's four-inch tolerance.
pub const BAND_TOLERANCE_CM: f64 = 10.0;
/// Cup-volume distance at which the cup component reaches zero.
pub const CUP_TOLERANCE_STEPS: f64 = 2.0;

/// Derives the canonical size for raw measurements. The under-bust snaps
/// to the nearest band (ties round half-up toward the larger band); the
/// cup ordinal comes from the bust difference, floored at 1 for
/// differences below the chart's anchor.
pub fn canonical_from_measurements(
    under_bust_cm: f64,
    bust_cm: f64,
) -> Result<CanonicalSize, SizeError> {
    let band_cm = nearest_band_cm(under_bust_cm).ok_or(SizeError::MeasurementOutOfRange {
        under_bust_cm: under_bust_cm.round() as u16,
    })?;
    let diff = bust_cm - under_bust_cm;
    let steps = ((diff - CUP_ANCHOR_DIFF_CM) / CUP_STEP_DIFF_CM + 0.5).floor();
    let cup_volume = if steps < 0.0 {
        1
    } else {
        (steps as u8).saturating_add(1)
    };
    CanonicalSize::new(band_cm, cup_volume)
}

/// Scores how well `candidate` fits a customer whose measurements resolve
/// to `user`, in `[0, 1]`. Band closeness and cup closeness each carry
/// half the weight.
#[must_use]
pub fn bra_fit_score(user: CanonicalSize, candidate: CanonicalSize) -> f64 {
    let band_diff = f64::from(user.band_cm().abs_diff(candidate.band_cm()));
    let band_score = (1.0 - band_diff / BAND_TOLERANCE_CM).max(0.0);
    let cup_diff = f64::from(user.cup_volume().abs_diff(candidate.cup_volume()));
    let cup_score = (1.0 - cup_diff / CUP_TOLERANCE_STEPS).max(0.0);
    band_score * 0.5 + cup_score * 0.5
}

/// Human-readable notes on how `candidate` will fit relative to `user`.
#[must_use]
pub fn bra_fit_notes(user: CanonicalSize, candidate: CanonicalSize) -> Vec<String> {
    let mut notes = Vec::with_capacity(2);
    notes.push(
        match user.band_cm().cmp(&candidate.band_cm()) {
            std::cmp::Ordering::Less => {
                "Band may be slightly loose. Consider sister sizing down."
            }
            std::cmp::Ordering::Greater => {
                "Band may be slightly tight. Consider sister sizing up."
            }
            std::cmp::Ordering::Equal => "Band should fit comfortably.",
        }
        .to_string(),
    );
    notes.push(
        match user.cup_volume().cmp(&candidate.cup_volume()) {
            std::cmp::Ordering::Less => "Cup may have extra room. Perfect for padded styles.",
            std::cmp::Ordering::Greater => "Cup may be snug. Ensure full coverage.",
            std::cmp::Ordering::Equal => "Cup should provide excellent support.",
        }
        .to_string(),
    );
    notes
}
