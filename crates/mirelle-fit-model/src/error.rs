use crate::region::RegionCode;
use std::fmt::{Display, Formatter};

/// Business failures of the sizing core.
///
/// Every variant is an expected, recoverable condition reported back to the
/// caller; none is process-fatal and none is logged here.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SizeError {
    /// The input string does not split into `<band><cup>`.
    InvalidSizeFormat { label: String },
    /// The region code has no configured scheme.
    UnsupportedRegion { code: String },
    /// The cup symbol is not part of the region's cup progression.
    CupSymbolNotFound { region: RegionCode, symbol: String },
    /// The band number is well-formed but outside the region's band table.
    BandOutOfRange { region: RegionCode, band: u16 },
    /// The region has no cup symbol at this ordinal volume.
    CupVolumeOutOfRange { region: RegionCode, volume: u8 },
    /// A measured under-bust falls outside the supported band axis.
    MeasurementOutOfRange { under_bust_cm: u16 },
}

impl Display for SizeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSizeFormat { label } => {
                write!(f, "size label `{label}` must be <band><cup>, e.g. 34C or 75B")
            }
            Self::UnsupportedRegion { code } => {
                write!(f, "region `{code}` has no configured size scheme")
            }
            Self::CupSymbolNotFound { region, symbol } => {
                write!(f, "cup `{symbol}` is not in the {region} cup progression")
            }
            Self::BandOutOfRange { region, band } => {
                write!(f, "band {band} is not in the {region} band table")
            }
            Self::CupVolumeOutOfRange { region, volume } => {
                write!(f, "{region} has no cup symbol for volume {volume}")
            }
            Self::MeasurementOutOfRange { under_bust_cm } => {
                write!(f, "under-bust {under_bust_cm} cm is outside the supported band axis")
            }
        }
    }
}

impl std::error::Error for SizeError {}

/// Raised when a region scheme table is internally inconsistent.
///
/// Malformed tables are a configuration defect, distinct from the
/// request-time [`SizeError`] taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeError(pub String);

impl Display for SchemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for SchemeError {}
