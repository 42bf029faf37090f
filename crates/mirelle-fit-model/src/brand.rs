use crate::size::SizeLabel;
use serde::{Deserialize, Serialize};

/// Minimum brand-fit confidence at which a non-identity recommendation is
/// shown. The default comes from the storefront's display heuristic; it is
/// a tunable policy value, not a hard business rule, which is why it lives
/// on [`RecommendationPolicy`] rather than being baked into the adjuster.
pub const MIN_RECOMMEND_CONFIDENCE: u8 = 70;

/// A brand's empirical fit bias relative to its labeled sizes. This set is
/// closed: it is the collaborator wire contract, not an extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FitType {
    TrueToSize,
    RunsSmall,
    RunsLarge,
}

impl FitType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TrueToSize => "TRUE_TO_SIZE",
            Self::RunsSmall => "RUNS_SMALL",
            Self::RunsLarge => "RUNS_LARGE",
        }
    }
}

/// Collaborator-supplied fit profile for one brand. `confidence` is derived
/// externally from aggregated customer feedback and is assumed to be
/// clamped to 0–100 already.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrandFitProfile {
    pub fit_type: FitType,
    pub confidence: u8,
    /// Free-form note curated for the brand, prefixed to generated notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit_notes: Option<String>,
}

impl BrandFitProfile {
    #[must_use]
    pub fn new(fit_type: FitType, confidence: u8) -> Self {
        Self {
            fit_type,
            confidence,
            fit_notes: None,
        }
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.fit_notes = Some(notes.into());
        self
    }
}

/// Tunable thresholds for the recommendation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecommendationPolicy {
    /// Below this confidence the adjuster keeps the customer's usual size.
    pub min_confidence: u8,
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Self {
            min_confidence: MIN_RECOMMEND_CONFIDENCE,
        }
    }
}

/// Outcome of adjusting a customer's usual size for one brand.
///
/// For `TRUE_TO_SIZE`, and whenever the profile's confidence sits below the
/// policy threshold, `recommended_size == original_size`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SizeAdjustmentResult {
    pub brand_name: String,
    pub original_size: SizeLabel,
    pub recommended_size: SizeLabel,
    pub fit_type: FitType,
    pub confidence: u8,
    pub fit_note: String,
}
