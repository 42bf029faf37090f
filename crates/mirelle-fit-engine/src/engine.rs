use crate::{brand_fit, convert, measure, sister};
use mirelle_fit_model::{
    BrandFitProfile, CanonicalSize, CupProgressionInfo, RecommendationPolicy, RegionCode,
    RegionRegistry, SisterSizeAlternative, SisterSizeRecommendation, SizeAdjustmentResult,
    SizeError, SizeLabel, UniversalCode,
};
use std::collections::BTreeMap;

/// Default number of band steps explored in each sister direction:
/// immediate neighbors only.
pub const DEFAULT_BAND_STEPS: u8 = 1;

/// Entry point composing the sizing pipeline: canonical parsing, sister
/// enumeration, regional conversion, and brand fit adjustment.
///
/// The engine is an immutable value over its region tables and policy; all
/// methods are pure and safe to call concurrently without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitEngine {
    registry: RegionRegistry,
    policy: RecommendationPolicy,
}

impl FitEngine {
    #[must_use]
    pub fn new(registry: RegionRegistry, policy: RecommendationPolicy) -> Self {
        Self { registry, policy }
    }

    /// Engine over the builtin region tables with the default policy.
    #[must_use]
    pub fn with_builtin_regions() -> Self {
        Self::new(RegionRegistry::builtin(), RecommendationPolicy::default())
    }

    #[must_use]
    pub fn registry(&self) -> &RegionRegistry {
        &self.registry
    }

    #[must_use]
    pub fn policy(&self) -> &RecommendationPolicy {
        &self.policy
    }

    /// Parses a region-specific label into its canonical form.
    pub fn parse_size(&self, label: &str, region: RegionCode) -> Result<CanonicalSize, SizeError> {
        self.registry.scheme(region)?.parse_label(label)
    }

    /// Renders a canonical size in a region's labeling.
    pub fn format_size(
        &self,
        canonical: CanonicalSize,
        region: RegionCode,
    ) -> Result<SizeLabel, SizeError> {
        self.registry.scheme(region)?.format_label(canonical)
    }

    /// Sister alternatives for a canonical size, labeled in `region`.
    pub fn sister_sizes(
        &self,
        canonical: CanonicalSize,
        region: RegionCode,
        band_steps: u8,
    ) -> Result<Vec<SisterSizeAlternative>, SizeError> {
        let scheme = self.registry.scheme(region)?;
        Ok(sister::compute_sister_sizes(scheme, canonical, band_steps))
    }

    /// Every size in the region sharing the canonical size's cup volume.
    pub fn sister_size_family(
        &self,
        canonical: CanonicalSize,
        region: RegionCode,
    ) -> Result<Vec<SizeLabel>, SizeError> {
        let scheme = self.registry.scheme(region)?;
        Ok(sister::sister_size_family(scheme, canonical))
    }

    /// Out-of-stock recommendation over a caller-supplied availability
    /// predicate keyed by universal code.
    pub fn recommend_for_out_of_stock<F>(
        &self,
        requested: &str,
        region: RegionCode,
        in_stock: F,
    ) -> Result<SisterSizeRecommendation, SizeError>
    where
        F: Fn(&UniversalCode) -> bool,
    {
        let scheme = self.registry.scheme(region)?;
        sister::recommend_for_out_of_stock(scheme, requested, DEFAULT_BAND_STEPS, in_stock)
    }

    /// Converts a size label between regions.
    pub fn convert_size(
        &self,
        label: &str,
        from: RegionCode,
        to: RegionCode,
    ) -> Result<SizeLabel, SizeError> {
        convert::convert_size(&self.registry, label, from, to)
    }

    /// Formats a canonical size into every requested region, omitting
    /// regions that cannot express it.
    #[must_use]
    pub fn conversion_matrix(
        &self,
        canonical: CanonicalSize,
        regions: &[RegionCode],
    ) -> BTreeMap<RegionCode, SizeLabel> {
        convert::conversion_matrix(&self.registry, canonical, regions)
    }

    /// Converts a cup symbol alone between regions.
    pub fn convert_cup_letter(
        &self,
        symbol: &str,
        from: RegionCode,
        to: RegionCode,
    ) -> Result<String, SizeError> {
        convert::convert_cup_letter(&self.registry, symbol, from, to)
    }

    /// Neighbors and boundary flags for a cup symbol in a region.
    pub fn cup_progression_info(
        &self,
        symbol: &str,
        region: RegionCode,
    ) -> Result<CupProgressionInfo, SizeError> {
        convert::cup_progression_info(&self.registry, symbol, region)
    }

    /// Brand fit adjustment for a customer's usual size.
    pub fn adjust_for_brand_fit(
        &self,
        normal_size: &str,
        region: RegionCode,
        profile: &BrandFitProfile,
        brand_name: &str,
    ) -> Result<SizeAdjustmentResult, SizeError> {
        let scheme = self.registry.scheme(region)?;
        brand_fit::adjust_for_brand_fit(scheme, &self.policy, normal_size, profile, brand_name)
    }

    /// Canonical size for raw under-bust and bust measurements.
    pub fn size_from_measurements(
        &self,
        under_bust_cm: f64,
        bust_cm: f64,
    ) -> Result<CanonicalSize, SizeError> {
        measure::canonical_from_measurements(under_bust_cm, bust_cm)
    }
}

impl Default for FitEngine {
    fn default() -> Self {
        Self::with_builtin_regions()
    }
}
