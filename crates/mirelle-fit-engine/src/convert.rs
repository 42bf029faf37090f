// SPDX-License-Identifier: Apache-2.0

//! Regional converter: re-expresses a size from one region's labeling in
//! another's by way of the canonical model. Conversion is a table walk at
//! equal ordinal cup volume, never letter arithmetic; regions disagree on
//! which symbols exist (US DD/DDD, UK FF/GG), so math on letters lies.

use mirelle_fit_model::{
    CanonicalSize, CupProgressionInfo, RegionCode, RegionRegistry, SizeError, SizeLabel,
};
use std::collections::BTreeMap;

/// Converts a size label between regions.
///
/// Round-trip through any region pair is lossless whenever both band
/// tables can express the size.
pub fn convert_size(
    registry: &RegionRegistry,
    label: &str,
    from: RegionCode,
    to: RegionCode,
) -> Result<SizeLabel, SizeError> {
    let canonical = registry.scheme(from)?.parse_label(label)?;
    registry.scheme(to)?.format_label(canonical)
}

/// Formats one canonical size into every requested region.
///
/// Regions that cannot express the size (band or cup outside their tables)
/// are omitted rather than failing the batch; a partial map is a valid,
/// useful result.
#[must_use]
pub fn conversion_matrix(
    registry: &RegionRegistry,
    canonical: CanonicalSize,
    regions: &[RegionCode],
) -> BTreeMap<RegionCode, SizeLabel> {
    regions
        .iter()
        .filter_map(|&code| {
            let scheme = registry.scheme(code).ok()?;
            let label = scheme.format_label(canonical).ok()?;
            Some((code, label))
        })
        .collect()
}

/// Converts a cup symbol alone between regions, at equal ordinal volume.
pub fn convert_cup_letter(
    registry: &RegionRegistry,
    symbol: &str,
    from: RegionCode,
    to: RegionCode,
) -> Result<String, SizeError> {
    let from_scheme = registry.scheme(from)?;
    let symbol_upper = symbol.trim().to_ascii_uppercase();
    let volume = from_scheme
        .cup_ordinal(&symbol_upper)
        .ok_or(SizeError::CupSymbolNotFound {
            region: from,
            symbol: symbol_upper,
        })?;
    let to_scheme = registry.scheme(to)?;
    to_scheme
        .cup_symbol(volume)
        .map(str::to_string)
        .ok_or(SizeError::CupVolumeOutOfRange { region: to, volume })
}

/// Where a cup symbol sits in its region's progression, with neighbors.
pub fn cup_progression_info(
    registry: &RegionRegistry,
    symbol: &str,
    region: RegionCode,
) -> Result<CupProgressionInfo, SizeError> {
    let scheme = registry.scheme(region)?;
    let symbol_upper = symbol.trim().to_ascii_uppercase();
    let volume = scheme
        .cup_ordinal(&symbol_upper)
        .ok_or(SizeError::CupSymbolNotFound {
            region,
            symbol: symbol_upper.clone(),
        })?;
    let previous_cup = scheme.cup_symbol(volume - 1).map(str::to_string);
    let next_cup = scheme.cup_symbol(volume + 1).map(str::to_string);
    Ok(CupProgressionInfo {
        region,
        cup_letter: symbol_upper,
        cup_volume: volume,
        is_first_cup: previous_cup.is_none(),
        is_last_cup: next_cup.is_none(),
        previous_cup,
        next_cup,
    })
}
