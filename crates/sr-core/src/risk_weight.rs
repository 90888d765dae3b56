//! The caller-tunable risk/time balance parameter.

use std::fmt;

use crate::{CoreError, CoreResult};

/// How strongly an edge's risk score inflates its cost, in `[0, 1]`.
///
/// `0.0` reproduces the time-optimal route; `1.0` makes an edge with the
/// maximum observed risk (~5) cost about 3.5× its travel time.
///
/// Construction rejects out-of-range and NaN values instead of clamping
/// them, so a caller bug surfaces as an error.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct RiskWeight(f64);

impl RiskWeight {
    pub const ZERO: RiskWeight = RiskWeight(0.0);
    pub const MAX: RiskWeight = RiskWeight(1.0);

    pub fn new(w: f64) -> CoreResult<Self> {
        if (0.0..=1.0).contains(&w) {
            Ok(Self(w))
        } else {
            Err(CoreError::InvalidRiskWeight(w))
        }
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for RiskWeight {
    /// Balanced default: 0.5.
    fn default() -> Self {
        RiskWeight(0.5)
    }
}

impl TryFrom<f64> for RiskWeight {
    type Error = CoreError;
    fn try_from(w: f64) -> Result<Self, Self::Error> {
        RiskWeight::new(w)
    }
}

impl From<RiskWeight> for f64 {
    fn from(w: RiskWeight) -> f64 {
        w.0
    }
}

impl fmt::Display for RiskWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
