// SPDX-License-Identifier: Apache-2.0

//! Sister size calculator.
//!
//! A sister size trades one band step for one cup-volume step in the other
//! direction, keeping total cup volume constant: a 34C customer fits a 32D
//! (snugger band) or a 36B (more relaxed band).

use mirelle_fit_model::{
    CanonicalSize, RegionScheme, SisterKind, SisterSizeAlternative, SisterSizeRecommendation,
    SizeError, SizeLabel, UniversalCode,
};

/// Enumerates sister alternatives for `canonical`, labeled in `scheme`'s
/// region, walking up to `band_steps` band increments in each direction.
///
/// Candidates that leave the canonical band axis, would drop the cup
/// ordinal below 1, or have no cup symbol in the region are skipped, not
/// errors. Results come out nearest band first, `SISTER_DOWN` before
/// `SISTER_UP` at equal distance.
#[must_use]
pub fn compute_sister_sizes(
    scheme: &RegionScheme,
    canonical: CanonicalSize,
    band_steps: u8,
) -> Vec<SisterSizeAlternative> {
    let original_text = display_text(scheme, canonical);
    let mut alternatives = Vec::new();
    for step in 1..=i16::from(band_steps) {
        for kind in [SisterKind::SisterDown, SisterKind::SisterUp] {
            let (band_delta, cup_delta) = match kind {
                SisterKind::SisterDown => (-step, step),
                SisterKind::SisterUp => (step, -step),
            };
            let Some(shifted) = canonical.shifted(band_delta, cup_delta) else {
                continue;
            };
            let Ok(size) = scheme.format_label(shifted) else {
                continue;
            };
            let band_difference_cm =
                shifted.band_cm() as i16 - canonical.band_cm() as i16;
            let fit_note = fit_note(kind, &original_text, &size.to_string());
            alternatives.push(SisterSizeAlternative {
                universal_code: shifted.universal_code(),
                size,
                kind,
                fit_note,
                band_difference_cm,
            });
        }
    }
    alternatives
}

/// All sizes in the region's band table that share `canonical`'s cup
/// volume, ascending by band. The size itself is included.
#[must_use]
pub fn sister_size_family(scheme: &RegionScheme, canonical: CanonicalSize) -> Vec<SizeLabel> {
    scheme
        .covered_bands_cm()
        .filter_map(|band_cm| {
            let member = CanonicalSize::new(band_cm, canonical.cup_volume()).ok()?;
            scheme.format_label(member).ok()
        })
        .collect()
}

/// Out-of-stock flow: parses the requested label, checks availability via
/// the caller's predicate, and otherwise returns the in-stock sister
/// alternatives. The engine decides validity; the caller owns stock.
pub fn recommend_for_out_of_stock<F>(
    scheme: &RegionScheme,
    requested: &str,
    band_steps: u8,
    in_stock: F,
) -> Result<SisterSizeRecommendation, SizeError>
where
    F: Fn(&UniversalCode) -> bool,
{
    let canonical = scheme.parse_label(requested)?;
    let requested_size = scheme.format_label(canonical)?;
    if in_stock(&canonical.universal_code()) {
        return Ok(SisterSizeRecommendation {
            requested_size,
            is_available: true,
            alternatives: Vec::new(),
            message: None,
        });
    }
    let alternatives: Vec<SisterSizeAlternative> =
        compute_sister_sizes(scheme, canonical, band_steps)
            .into_iter()
            .filter(|alt| in_stock(&alt.universal_code))
            .collect();
    let message = if alternatives.is_empty() {
        "Size is out of stock and no sister sizes available"
    } else {
        "Size is out of stock, but sister sizes are available"
    };
    Ok(SisterSizeRecommendation {
        requested_size,
        is_available: false,
        alternatives,
        message: Some(message.to_string()),
    })
}

fn fit_note(kind: SisterKind, original: &str, sister: &str) -> String {
    match kind {
        SisterKind::SisterDown => format!(
            "Band will be tighter. {sister} has a snugger band than {original} \
             but the same cup volume. Good if you prefer more support."
        ),
        SisterKind::SisterUp => format!(
            "Band will be looser. {sister} has a more relaxed band than {original} \
             but the same cup volume. Good if you prefer more comfort."
        ),
    }
}

// Fit notes want the original size in the customer's labeling; when the
// region cannot express it, the universal code still identifies it.
fn display_text(scheme: &RegionScheme, canonical: CanonicalSize) -> String {
    scheme
        .format_label(canonical)
        .map(|label| label.to_string())
        .unwrap_or_else(|_| canonical.universal_code().to_string())
}
