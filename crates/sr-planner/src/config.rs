//! Planner configuration.

use std::time::Duration;

use sr_core::RiskWeight;
use sr_network::DEFAULT_RISK_THRESHOLD;

use crate::area::ServiceAreas;

/// Tunables for [`RoutePlanner`][crate::RoutePlanner] and
/// [`AddressResolver`][crate::AddressResolver].
///
/// With the `serde` feature every field may be omitted from a config file;
/// missing fields take their [`Default`] value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Edges with risk strictly above this are reported as risk points.
    pub risk_threshold: f64,
    /// Risk weight used when a request does not specify one.
    pub default_risk_weight: RiskWeight,
    pub areas: ServiceAreas,
    /// Appended to geocoding queries, e.g. `"UK"`.
    pub region_suffix: String,
    /// Minimum spacing between geocoding calls.
    pub geocode_interval: Duration,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            risk_threshold: DEFAULT_RISK_THRESHOLD,
            default_risk_weight: RiskWeight::default(),
            areas: ServiceAreas::uk_default(),
            region_suffix: "UK".to_owned(),
            geocode_interval: Duration::from_millis(100),
        }
    }
}
