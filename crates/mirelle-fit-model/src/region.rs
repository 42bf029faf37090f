// SPDX-License-Identifier: Apache-2.0

use crate::error::{SchemeError, SizeError};
use crate::size::{band_index, CanonicalSize, SizeLabel, BAND_MIN_CM, BAND_STEP_CM};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Supported regional sizing systems.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[non_exhaustive]
pub enum RegionCode {
    Us,
    Uk,
    Eu,
    Fr,
    Jp,
    Au,
    Vn,
}

impl RegionCode {
    pub fn parse(input: &str) -> Result<Self, SizeError> {
        match input.trim().to_ascii_uppercase().as_str() {
            "US" => Ok(Self::Us),
            "UK" => Ok(Self::Uk),
            "EU" => Ok(Self::Eu),
            "FR" => Ok(Self::Fr),
            "JP" => Ok(Self::Jp),
            "AU" => Ok(Self::Au),
            "VN" => Ok(Self::Vn),
            other => Err(SizeError::UnsupportedRegion {
                code: other.to_string(),
            }),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Uk => "UK",
            Self::Eu => "EU",
            Self::Fr => "FR",
            Self::Jp => "JP",
            Self::Au => "AU",
            Self::Vn => "VN",
        }
    }

    /// All builtin region codes, in stable order.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Us,
            Self::Uk,
            Self::Eu,
            Self::Fr,
            Self::Jp,
            Self::Au,
            Self::Vn,
        ]
    }
}

impl Display for RegionCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit a region's band numbers are quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum BandUnit {
    Cm,
    Inch,
}

/// Static per-region sizing configuration: how band numbers and cup symbols
/// map onto the canonical axis.
///
/// `band_labels[i]` is the region's label for canonical band
/// `band_floor_cm + i * BAND_STEP_CM`; `cup_letters[i]` denotes ordinal cup
/// volume `i + 1`. The latter alignment is what makes cross-region
/// conversion possible: equal-ordinal symbols hold equal physical volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionScheme {
    code: RegionCode,
    display_name: String,
    band_unit: BandUnit,
    band_floor_cm: u16,
    band_labels: Vec<u16>,
    cup_letters: Vec<String>,
}

impl RegionScheme {
    /// Builds and validates a scheme. Table defects are configuration
    /// errors, reported as [`SchemeError`].
    pub fn new(
        code: RegionCode,
        display_name: impl Into<String>,
        band_unit: BandUnit,
        band_floor_cm: u16,
        band_labels: Vec<u16>,
        cup_letters: Vec<String>,
    ) -> Result<Self, SchemeError> {
        if band_labels.is_empty() {
            return Err(SchemeError(format!("{code}: band table must not be empty")));
        }
        if band_index(band_floor_cm).is_none() {
            return Err(SchemeError(format!(
                "{code}: band floor {band_floor_cm} cm is not on the canonical axis"
            )));
        }
        let ceiling = band_floor_cm + BAND_STEP_CM * (band_labels.len() as u16 - 1);
        if band_index(ceiling).is_none() {
            return Err(SchemeError(format!(
                "{code}: band table overruns the canonical axis at {ceiling} cm"
            )));
        }
        if !band_labels.windows(2).all(|w| w[0] < w[1]) {
            return Err(SchemeError(format!(
                "{code}: band labels must be strictly increasing"
            )));
        }
        if cup_letters.is_empty() {
            return Err(SchemeError(format!("{code}: cup progression must not be empty")));
        }
        for symbol in &cup_letters {
            if symbol.is_empty() || !symbol.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(SchemeError(format!(
                    "{code}: cup symbol `{symbol}` must be uppercase ASCII letters"
                )));
            }
        }
        let mut seen = cup_letters.clone();
        seen.sort();
        seen.dedup();
        if seen.len() != cup_letters.len() {
            return Err(SchemeError(format!("{code}: duplicate cup symbol in progression")));
        }
        Ok(Self {
            code,
            display_name: display_name.into(),
            band_unit,
            band_floor_cm,
            band_labels,
            cup_letters,
        })
    }

    // Builtin tables are compile-time known-good; they skip `new` so that
    // table validation stays on the custom-configuration path only.
    fn builtin(
        code: RegionCode,
        display_name: &str,
        band_unit: BandUnit,
        band_floor_cm: u16,
        band_labels: &[u16],
        cup_letters: &[&str],
    ) -> Self {
        Self {
            code,
            display_name: display_name.to_string(),
            band_unit,
            band_floor_cm,
            band_labels: band_labels.to_vec(),
            cup_letters: cup_letters.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[must_use]
    pub const fn code(&self) -> RegionCode {
        self.code
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub const fn band_unit(&self) -> BandUnit {
        self.band_unit
    }

    /// The region's label for a canonical band, if the band table covers it.
    #[must_use]
    pub fn band_label_for(&self, band_cm: u16) -> Option<u16> {
        if band_cm < self.band_floor_cm {
            return None;
        }
        let offset = band_cm - self.band_floor_cm;
        if offset % BAND_STEP_CM != 0 {
            return None;
        }
        self.band_labels.get((offset / BAND_STEP_CM) as usize).copied()
    }

    /// Inverse of [`RegionScheme::band_label_for`].
    #[must_use]
    pub fn band_cm_for_label(&self, label: u16) -> Option<u16> {
        let idx = self.band_labels.iter().position(|&b| b == label)?;
        Some(self.band_floor_cm + BAND_STEP_CM * idx as u16)
    }

    /// Ordinal cup volume of a symbol in this region's progression.
    #[must_use]
    pub fn cup_ordinal(&self, symbol: &str) -> Option<u8> {
        self.cup_letters
            .iter()
            .position(|c| c == symbol)
            .map(|i| i as u8 + 1)
    }

    /// Cup symbol at an ordinal volume, if the progression reaches it.
    #[must_use]
    pub fn cup_symbol(&self, volume: u8) -> Option<&str> {
        if volume == 0 {
            return None;
        }
        self.cup_letters.get(usize::from(volume) - 1).map(String::as_str)
    }

    #[must_use]
    pub fn cup_letters(&self) -> &[String] {
        &self.cup_letters
    }

    /// Canonical bands this scheme's band table covers, ascending.
    pub fn covered_bands_cm(&self) -> impl Iterator<Item = u16> + '_ {
        (0..self.band_labels.len() as u16).map(move |i| self.band_floor_cm + BAND_STEP_CM * i)
    }

    /// Parses a region-specific label such as `"34C"` into its canonical
    /// form: numeric band prefix, then cup symbol, both resolved through
    /// this scheme's tables.
    pub fn parse_label(&self, label: &str) -> Result<CanonicalSize, SizeError> {
        let trimmed = label.trim();
        let split = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        let (band_raw, cup_raw) = trimmed.split_at(split);
        if band_raw.is_empty()
            || cup_raw.is_empty()
            || !cup_raw.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(SizeError::InvalidSizeFormat {
                label: label.to_string(),
            });
        }
        let band: u16 = band_raw.parse().map_err(|_| SizeError::InvalidSizeFormat {
            label: label.to_string(),
        })?;
        let symbol = cup_raw.to_ascii_uppercase();
        let band_cm = self
            .band_cm_for_label(band)
            .ok_or(SizeError::BandOutOfRange {
                region: self.code,
                band,
            })?;
        let cup_volume = self
            .cup_ordinal(&symbol)
            .ok_or_else(|| SizeError::CupSymbolNotFound {
                region: self.code,
                symbol,
            })?;
        CanonicalSize::new(band_cm, cup_volume)
    }

    /// Renders a canonical size in this region's labeling.
    pub fn format_label(&self, canonical: CanonicalSize) -> Result<SizeLabel, SizeError> {
        let band = self
            .band_label_for(canonical.band_cm())
            .ok_or(SizeError::BandOutOfRange {
                region: self.code,
                band: canonical.band_cm(),
            })?;
        let cup = self
            .cup_symbol(canonical.cup_volume())
            .ok_or(SizeError::CupVolumeOutOfRange {
                region: self.code,
                volume: canonical.cup_volume(),
            })?;
        Ok(SizeLabel::new(self.code, band, cup))
    }
}

/// Immutable collection of region schemes. Built once at startup and shared
/// read-only; every lookup is by value with no interior mutability, so the
/// registry is freely usable from concurrent request handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionRegistry {
    schemes: BTreeMap<RegionCode, RegionScheme>,
}

impl RegionRegistry {
    /// The seven builtin regions with the product's reference tables.
    #[must_use]
    pub fn builtin() -> Self {
        let schemes = builtin_schemes()
            .into_iter()
            .map(|scheme| (scheme.code(), scheme))
            .collect();
        Self { schemes }
    }

    /// Builds a registry from custom schemes, rejecting duplicates.
    pub fn from_schemes(schemes: Vec<RegionScheme>) -> Result<Self, SchemeError> {
        let mut map = BTreeMap::new();
        for scheme in schemes {
            let code = scheme.code();
            if map.insert(code, scheme).is_some() {
                return Err(SchemeError(format!("duplicate scheme for region {code}")));
            }
        }
        Ok(Self { schemes: map })
    }

    pub fn scheme(&self, code: RegionCode) -> Result<&RegionScheme, SizeError> {
        self.schemes
            .get(&code)
            .ok_or_else(|| SizeError::UnsupportedRegion {
                code: code.as_str().to_string(),
            })
    }

    pub fn codes(&self) -> impl Iterator<Item = RegionCode> + '_ {
        self.schemes.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}

// Band tables are index-aligned with the canonical axis: US/UK quote inches
// (28 at 60 cm, two inches per 5 cm step), AU quotes dress numbers, the
// metric regions quote centimeters (FR offset +15). Inch-region cup
// progressions start at A, metric ones at AA; the equal-ordinal rule then
// yields US 34C = EU 75B per the reference conversion chart. JP's table
// stops at 100 cm, the narrowest of the builtin ranges.
fn builtin_schemes() -> Vec<RegionScheme> {
    const INCH_BANDS: &[u16] = &[28, 30, 32, 34, 36, 38, 40, 42, 44, 46, 48];
    const METRIC_BANDS: &[u16] = &[60, 65, 70, 75, 80, 85, 90, 95, 100, 105, 110];
    const FR_BANDS: &[u16] = &[75, 80, 85, 90, 95, 100, 105, 110, 115, 120, 125];
    const JP_BANDS: &[u16] = &[60, 65, 70, 75, 80, 85, 90, 95, 100];
    const AU_BANDS: &[u16] = &[6, 8, 10, 12, 14, 16, 18, 20, 22, 24, 26];

    const US_CUPS: &[&str] = &[
        "A", "B", "C", "D", "DD", "DDD", "G", "H", "I", "J", "K", "L", "M", "N",
    ];
    const UK_CUPS: &[&str] = &[
        "A", "B", "C", "D", "DD", "E", "F", "FF", "G", "GG", "H", "HH", "J", "JJ", "K",
    ];
    const EU_CUPS: &[&str] = &[
        "AA", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N",
    ];
    const AU_CUPS: &[&str] = &[
        "AA", "A", "B", "C", "D", "DD", "E", "F", "FF", "G", "GG", "H", "HH", "J", "JJ",
    ];
    const VN_CUPS: &[&str] = &["AA", "A", "B", "C", "D", "DD", "E", "F", "G", "H", "I", "J"];

    vec![
        RegionScheme::builtin(
            RegionCode::Us,
            "United States",
            BandUnit::Inch,
            BAND_MIN_CM,
            INCH_BANDS,
            US_CUPS,
        ),
        RegionScheme::builtin(
            RegionCode::Uk,
            "United Kingdom",
            BandUnit::Inch,
            BAND_MIN_CM,
            INCH_BANDS,
            UK_CUPS,
        ),
        RegionScheme::builtin(
            RegionCode::Eu,
            "Europe",
            BandUnit::Cm,
            BAND_MIN_CM,
            METRIC_BANDS,
            EU_CUPS,
        ),
        RegionScheme::builtin(
            RegionCode::Fr,
            "France",
            BandUnit::Cm,
            BAND_MIN_CM,
            FR_BANDS,
            EU_CUPS,
        ),
        RegionScheme::builtin(
            RegionCode::Jp,
            "Japan",
            BandUnit::Cm,
            BAND_MIN_CM,
            JP_BANDS,
            EU_CUPS,
        ),
        RegionScheme::builtin(
            RegionCode::Au,
            "Australia",
            BandUnit::Cm,
            BAND_MIN_CM,
            AU_BANDS,
            AU_CUPS,
        ),
        RegionScheme::builtin(
            RegionCode::Vn,
            "Việt Nam",
            BandUnit::Cm,
            BAND_MIN_CM,
            METRIC_BANDS,
            VN_CUPS,
        ),
    ]
}
