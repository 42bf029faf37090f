// SPDX-License-Identifier: Apache-2.0

use crate::region::RegionCode;
use crate::size::{SizeLabel, UniversalCode};
use serde::{Deserialize, Serialize};

/// Direction of a sister-size substitution.
///
/// `SisterDown` trades a tighter band for one cup-letter step up;
/// `SisterUp` trades a looser band for one step down. Total cup volume is
/// unchanged either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SisterKind {
    SisterDown,
    SisterUp,
}

impl SisterKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SisterDown => "SISTER_DOWN",
            Self::SisterUp => "SISTER_UP",
        }
    }
}

/// One candidate substitute size for an out-of-stock request. Computed on
/// demand and never persisted here; whether the customer accepted it is the
/// caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SisterSizeAlternative {
    pub size: SizeLabel,
    pub universal_code: UniversalCode,
    pub kind: SisterKind,
    pub fit_note: String,
    /// Signed canonical band distance from the requested size.
    pub band_difference_cm: i16,
}

/// Result of the out-of-stock recommendation flow: the requested size,
/// whether the caller's availability check passed for it, and the in-stock
/// sister alternatives otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SisterSizeRecommendation {
    pub requested_size: SizeLabel,
    pub is_available: bool,
    pub alternatives: Vec<SisterSizeAlternative>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A cup symbol's position within one region's progression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CupProgressionInfo {
    pub region: RegionCode,
    pub cup_letter: String,
    pub cup_volume: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_cup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cup: Option<String>,
    pub is_first_cup: bool,
    pub is_last_cup: bool,
}
