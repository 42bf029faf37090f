#![forbid(unsafe_code)]
//! Pure recommendation engine over the sizing model: sister sizes for
//! out-of-stock requests, cross-region conversion, and brand fit
//! adjustment. The engine performs no I/O and keeps no state; callers own
//! persistence and transport and exchange plain data shapes with it.

mod brand_fit;
mod convert;
mod engine;
mod measure;
mod sister;

pub use brand_fit::adjust_for_brand_fit;
pub use convert::{convert_cup_letter, convert_size, conversion_matrix, cup_progression_info};
pub use engine::{FitEngine, DEFAULT_BAND_STEPS};
pub use measure::{
    bra_fit_notes, bra_fit_score, canonical_from_measurements, BAND_TOLERANCE_CM,
    CUP_ANCHOR_DIFF_CM, CUP_STEP_DIFF_CM, CUP_TOLERANCE_STEPS,
};
pub use sister::{compute_sister_sizes, recommend_for_out_of_stock, sister_size_family};

pub const CRATE_NAME: &str = "mirelle-fit-engine";
