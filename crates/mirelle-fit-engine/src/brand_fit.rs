// SPDX-License-Identifier: Apache-2.0

//! Brand fit adjuster.
//!
//! Brands fit differently: a brand that runs small gets one sister-up step
//! (size up), one that runs large gets one sister-down step, and a
//! true-to-size brand gets no change. The adjustment is a single stateless
//! dispatch over the brand's fit bias, gated on how much feedback backs
//! the bias up.

use mirelle_fit_model::{
    BrandFitProfile, FitType, RecommendationPolicy, RegionScheme, SizeAdjustmentResult,
    SizeError,
};

/// Recommends a size for one brand given the customer's usual size.
///
/// A non-identity recommendation is only emitted when the profile's
/// confidence reaches `policy.min_confidence`; below that, or when the
/// shifted size falls off the region's tables, the customer's usual size
/// is returned with an explanatory note instead of asserting a change.
pub fn adjust_for_brand_fit(
    scheme: &RegionScheme,
    policy: &RecommendationPolicy,
    normal_size: &str,
    profile: &BrandFitProfile,
    brand_name: &str,
) -> Result<SizeAdjustmentResult, SizeError> {
    let canonical = scheme.parse_label(normal_size)?;
    let original = scheme.format_label(canonical)?;

    let identity = |fit_note: String| SizeAdjustmentResult {
        brand_name: brand_name.to_string(),
        original_size: original.clone(),
        recommended_size: original.clone(),
        fit_type: profile.fit_type,
        confidence: profile.confidence,
        fit_note,
    };

    let (band_delta, cup_delta, direction) = match profile.fit_type {
        FitType::TrueToSize => {
            return Ok(identity(with_brand_notes(
                profile,
                format!("{brand_name} is true to size. No size adjustment needed."),
            )));
        }
        FitType::RunsSmall => (1, -1, "small"),
        FitType::RunsLarge => (-1, 1, "large"),
    };

    if profile.confidence < policy.min_confidence {
        return Ok(identity(with_brand_notes(
            profile,
            format!(
                "{brand_name} may run {direction}, but we don't have enough fit \
                 feedback yet to recommend a change. Your usual {original} is the \
                 safest choice."
            ),
        )));
    }

    let recommended = canonical
        .shifted(band_delta, cup_delta)
        .and_then(|shifted| scheme.format_label(shifted).ok());
    let Some(recommended_size) = recommended else {
        return Ok(identity(with_brand_notes(
            profile,
            format!(
                "{brand_name} runs {direction}, but {original} sits at the edge of \
                 the size range, so we recommend staying with it."
            ),
        )));
    };

    let band_direction = if band_delta > 0 { "up" } else { "down" };
    let fit_note = with_brand_notes(
        profile,
        format!(
            "Normally wear {original}? We recommend {recommended_size} in this \
             brand. (Band runs 1 size {band_direction})"
        ),
    );
    Ok(SizeAdjustmentResult {
        brand_name: brand_name.to_string(),
        original_size: original,
        recommended_size,
        fit_type: profile.fit_type,
        confidence: profile.confidence,
        fit_note,
    })
}

fn with_brand_notes(profile: &BrandFitProfile, generated: String) -> String {
    match profile.fit_notes.as_deref().map(str::trim) {
        Some(curated) if !curated.is_empty() => format!("{curated} {generated}"),
        _ => generated,
    }
}
