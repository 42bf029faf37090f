// SPDX-License-Identifier: Apache-2.0

use crate::error::SizeError;
use crate::region::RegionCode;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Smallest under-bust band on the canonical axis, in centimeters.
pub const BAND_MIN_CM: u16 = 60;
/// Largest under-bust band on the canonical axis, in centimeters.
pub const BAND_MAX_CM: u16 = 110;
/// Distance between adjacent bands. One sister-size step moves exactly
/// one band step while compensating one cup volume in the other direction.
pub const BAND_STEP_CM: u16 = 5;

/// Number of entries on the canonical band axis.
#[must_use]
pub const fn band_step_count() -> usize {
    ((BAND_MAX_CM - BAND_MIN_CM) / BAND_STEP_CM) as usize + 1
}

/// Region-independent bra size: under-bust band in centimeters plus the
/// ordinal cup volume. Two sizes with the same cup volume at equal-ordinal
/// cup symbols hold the same physical cup volume in every region.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(deny_unknown_fields)]
pub struct CanonicalSize {
    band_cm: u16,
    cup_volume: u8,
}

impl CanonicalSize {
    /// Builds a canonical size, validating that the band sits on the
    /// canonical axis and the cup volume is at least 1.
    pub fn new(band_cm: u16, cup_volume: u8) -> Result<Self, SizeError> {
        if cup_volume == 0 {
            return Err(SizeError::InvalidSizeFormat {
                label: format!("{band_cm}:{cup_volume}"),
            });
        }
        if band_index(band_cm).is_none() {
            return Err(SizeError::MeasurementOutOfRange {
                under_bust_cm: band_cm,
            });
        }
        Ok(Self { band_cm, cup_volume })
    }

    /// Parses the `"<band_cm>:<cup_volume>"` form produced by
    /// [`CanonicalSize::universal_code`].
    pub fn from_universal_code(input: &str) -> Result<Self, SizeError> {
        let invalid = || SizeError::InvalidSizeFormat {
            label: input.to_string(),
        };
        let (band_raw, cup_raw) = input.split_once(':').ok_or_else(invalid)?;
        let band_cm = band_raw.parse::<u16>().map_err(|_| invalid())?;
        let cup_volume = cup_raw.parse::<u8>().map_err(|_| invalid())?;
        Self::new(band_cm, cup_volume)
    }

    #[must_use]
    pub const fn band_cm(self) -> u16 {
        self.band_cm
    }

    #[must_use]
    pub const fn cup_volume(self) -> u8 {
        self.cup_volume
    }

    /// Cross-region-stable identifier for this size.
    #[must_use]
    pub fn universal_code(self) -> UniversalCode {
        UniversalCode(format!("{}:{}", self.band_cm, self.cup_volume))
    }

    /// Moves `band_steps` along the band axis and `cup_steps` along the cup
    /// ordinal. Returns `None` when the result leaves the canonical axis or
    /// the cup ordinal would drop below 1.
    #[must_use]
    pub fn shifted(self, band_steps: i16, cup_steps: i16) -> Option<Self> {
        let band = i32::from(self.band_cm) + i32::from(band_steps) * i32::from(BAND_STEP_CM);
        let cup = i32::from(self.cup_volume) + i32::from(cup_steps);
        if cup < 1 || cup > i32::from(u8::MAX) {
            return None;
        }
        let band = u16::try_from(band).ok()?;
        band_index(band)?;
        Some(Self {
            band_cm: band,
            cup_volume: cup as u8,
        })
    }
}

/// Index of a band on the canonical axis, if it lies on it.
#[must_use]
pub fn band_index(band_cm: u16) -> Option<usize> {
    if band_cm < BAND_MIN_CM || band_cm > BAND_MAX_CM {
        return None;
    }
    let offset = band_cm - BAND_MIN_CM;
    if offset % BAND_STEP_CM != 0 {
        return None;
    }
    Some((offset / BAND_STEP_CM) as usize)
}

/// Snaps a measured under-bust to the nearest canonical band. Ties between
/// two bands round half-up toward the larger band.
#[must_use]
pub fn nearest_band_cm(measured_cm: f64) -> Option<u16> {
    if !measured_cm.is_finite() {
        return None;
    }
    let steps = (measured_cm - f64::from(BAND_MIN_CM)) / f64::from(BAND_STEP_CM);
    let snapped = (steps + 0.5).floor();
    if snapped < 0.0 || snapped > (band_step_count() - 1) as f64 {
        return None;
    }
    Some(BAND_MIN_CM + BAND_STEP_CM * snapped as u16)
}

/// Cross-region-stable identifier for a canonical size, serialized as
/// `"<band_cm>:<cup_volume>"`. Callers use it to match sizes across regions
/// without re-deriving the canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniversalCode(String);

impl UniversalCode {
    pub fn parse(input: &str) -> Result<Self, SizeError> {
        CanonicalSize::from_universal_code(input).map(CanonicalSize::universal_code)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UniversalCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The externally visible size string for one region, split into its
/// region-specific band number and cup symbol. Many labels (one per region)
/// map to one [`CanonicalSize`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SizeLabel {
    pub region: RegionCode,
    pub band: u16,
    pub cup: String,
}

impl SizeLabel {
    #[must_use]
    pub fn new(region: RegionCode, band: u16, cup: impl Into<String>) -> Self {
        Self {
            region,
            band,
            cup: cup.into(),
        }
    }
}

impl Display for SizeLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.band, self.cup)
    }
}
