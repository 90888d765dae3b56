//! Fluent builder for constructing a [`RoutePlanner`].

use std::sync::Arc;

use sr_network::{NetworkError, RoadNetwork, Router};

use crate::config::PlannerConfig;
use crate::{PlannerError, PlannerResult, RoutePlanner};

/// Fluent builder for [`RoutePlanner<R>`].
///
/// # Required inputs
///
/// - `R: Router` — the routing algorithm (e.g. [`sr_network::DijkstraRouter`])
/// - a loaded [`RoadNetwork`], via `.network(..)`
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                    |
/// |---------------|----------------------------|
/// | `.config(c)`  | `PlannerConfig::default()` |
///
/// # Example
///
/// ```rust,ignore
/// let planner = PlannerBuilder::new(DijkstraRouter)
///     .network(network)
///     .config(config)
///     .build()?;
/// let comparison = planner.plan(origin, destination, 0.5)?;
/// ```
pub struct PlannerBuilder<R: Router> {
    router:  R,
    network: Option<Arc<RoadNetwork>>,
    config:  Option<PlannerConfig>,
}

impl<R: Router> PlannerBuilder<R> {
    pub fn new(router: R) -> Self {
        Self { router, network: None, config: None }
    }

    /// Supply the road network.  Accepts an owned network or an existing
    /// `Arc` shared with other planners.
    pub fn network(mut self, network: impl Into<Arc<RoadNetwork>>) -> Self {
        self.network = Some(network.into());
        self
    }

    pub fn config(mut self, config: PlannerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Validate inputs and return a ready-to-use [`RoutePlanner`].
    ///
    /// # Errors
    ///
    /// - [`PlannerError::Network`] with `EmptyNetwork` if no network was
    ///   supplied or it has no nodes.
    /// - [`PlannerError::Config`] if the risk threshold is not finite or no
    ///   service areas are configured.
    pub fn build(self) -> PlannerResult<RoutePlanner<R>> {
        let network = match self.network {
            Some(n) if !n.is_empty() => n,
            _ => return Err(NetworkError::EmptyNetwork.into()),
        };

        let config = self.config.unwrap_or_default();
        if !config.risk_threshold.is_finite() {
            return Err(PlannerError::Config(format!(
                "risk_threshold must be finite, got {}",
                config.risk_threshold
            )));
        }
        if config.areas.is_empty() {
            return Err(PlannerError::Config("no service areas configured".into()));
        }

        Ok(RoutePlanner::with_config(network, self.router, config))
    }
}
