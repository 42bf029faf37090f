#![forbid(unsafe_code)]
//! Sizing model SSOT: canonical bra sizes, region schemes, and the plain
//! data shapes exchanged with the recommendation engine's callers.

mod alternative;
mod brand;
mod error;
mod region;
mod size;

pub use alternative::{CupProgressionInfo, SisterKind, SisterSizeAlternative, SisterSizeRecommendation};
pub use brand::{
    BrandFitProfile, FitType, RecommendationPolicy, SizeAdjustmentResult,
    MIN_RECOMMEND_CONFIDENCE,
};
pub use error::{SchemeError, SizeError};
pub use region::{BandUnit, RegionCode, RegionRegistry, RegionScheme};
pub use size::{
    band_index, band_step_count, nearest_band_cm, CanonicalSize, SizeLabel, UniversalCode,
    BAND_MAX_CM, BAND_MIN_CM, BAND_STEP_CM,
};

pub const CRATE_NAME: &str = "mirelle-fit-model";
