// crates/domain/src/age.rs
use std::{fmt, str::FromStr};

use readability_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Reader ages for rounded scores 1 through 13.
const AGE_TABLE: [u8; 13] = [6, 7, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 24];

/// Highest rounded score covered by [`AGE_TABLE`].
const MAX_TABLE_SCORE: f64 = 13.0;

/// Ages at or above this are reported as "24+".
const TOP_OF_SCALE: u8 = 24;

/// Numeric stand-ins used by [`SentinelPolicy::Reference`].
const TWENTY_FOUR_PLUS_VALUE: f64 = 99.0;
const UNKNOWN_VALUE: f64 = -1.0;

/// Recommended reader age for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "years", rename_all = "snake_case")]
pub enum AgeEstimate {
    /// A looked-up age in years.
    Years(u8),
    /// The score is beyond the lookup table.
    TwentyFourPlus,
    /// The score is below the lookup table or not a number.
    Unknown,
}

impl AgeEstimate {
    /// Value this estimate contributes to an average, if any.
    pub fn numeric(self, policy: SentinelPolicy) -> Option<f64> {
        match (self, policy) {
            (Self::Years(age), _) => Some(f64::from(age)),
            (Self::TwentyFourPlus, SentinelPolicy::Reference) => Some(TWENTY_FOUR_PLUS_VALUE),
            (Self::Unknown, SentinelPolicy::Reference) => Some(UNKNOWN_VALUE),
            (_, SentinelPolicy::Exclude) => None,
        }
    }
}

/// User-facing phrase; ages at the top of the scale read the same whichever
/// variant produced them.
impl fmt::Display for AgeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Years(age) if *age >= TOP_OF_SCALE => write!(f, "{TOP_OF_SCALE}+ year olds"),
            Self::TwentyFourPlus => write!(f, "{TOP_OF_SCALE}+ year olds"),
            Self::Years(age) => write!(f, "about {age} year olds"),
            Self::Unknown => f.write_str("age unknown"),
        }
    }
}

/// Maps a score to a reader age.
///
/// The score is rounded half away from zero before the lookup.
pub fn estimate_age(score: f64) -> AgeEstimate {
    if score.is_nan() {
        return AgeEstimate::Unknown;
    }
    let rounded = score.round();
    if rounded > MAX_TABLE_SCORE {
        return AgeEstimate::TwentyFourPlus;
    }
    if rounded < 1.0 {
        return AgeEstimate::Unknown;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = rounded as usize - 1;
    AGE_TABLE.get(index).map_or(AgeEstimate::Unknown, |age| AgeEstimate::Years(*age))
}

/// How the two sentinels enter the cross-formula average.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentinelPolicy {
    /// "24+" counts as 99 and "unknown" as -1.
    #[default]
    Reference,
    /// Sentinels are left out of the average.
    Exclude,
}

impl FromStr for SentinelPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reference" => Ok(Self::Reference),
            "exclude" => Ok(Self::Exclude),
            other => Err(format!("Unknown average policy: {other}")),
        }
    }
}

/// Arithmetic mean of the ages under `policy`.
///
/// Fails with [`DomainError::AverageUndefined`] when nothing contributes.
pub fn average_age(ages: &[AgeEstimate], policy: SentinelPolicy) -> DomainResult<f64> {
    let values: Vec<f64> = ages.iter().filter_map(|age| age.numeric(policy)).collect();
    if values.is_empty() {
        return Err(DomainError::AverageUndefined);
    }
    #[allow(clippy::cast_precision_loss)]
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    Ok(mean)
}
