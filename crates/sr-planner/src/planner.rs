//! The fastest-vs-safest planning pipeline.

use std::sync::Arc;
use std::time::Instant;

use sr_core::{GeoPoint, RiskWeight};
use sr_network::{
    DijkstraRouter, NodeLocator, RoadNetwork, Route, Router, Weighting, evaluate,
    extract_risk_points,
};

use crate::compare::{EvaluatedRoute, RouteComparison, SafestStatus, compare};
use crate::config::PlannerConfig;
use crate::error::{PlannerError, PlannerResult, Stage};
use crate::observer::{NoopObserver, PlanObserver};

// ── Requests ──────────────────────────────────────────────────────────────────

/// One planning request.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlanRequest {
    pub origin: GeoPoint,
    pub destination: GeoPoint,
    /// `None` uses the planner's configured default.
    pub risk_weight: Option<RiskWeight>,
    /// Checked between pipeline stages; a running solve is not interrupted.
    pub deadline: Option<Instant>,
}

impl PlanRequest {
    pub fn new(origin: GeoPoint, destination: GeoPoint) -> Self {
        Self { origin, destination, risk_weight: None, deadline: None }
    }

    /// Set the risk weight.  Values outside `[0, 1]` are rejected, not
    /// clamped.
    pub fn with_risk_weight(mut self, risk_weight: f64) -> PlannerResult<Self> {
        self.risk_weight = Some(RiskWeight::new(risk_weight)?);
        Ok(self)
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    fn check_deadline(&self, stage: Stage) -> PlannerResult<()> {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                Err(PlannerError::DeadlineExceeded { stage })
            }
            _ => Ok(()),
        }
    }
}

// ── RoutePlanner ──────────────────────────────────────────────────────────────

/// Computes a fastest and a risk-aware route between two points and
/// compares them.
///
/// # Pipeline
///
/// ```text
/// resolve_pair ──► fastest solve ──► safest solve ──► evaluate ×2 ──► compare
///                  (error = fail)    (error = fall back to fastest, flagged)
/// ```
///
/// The network is shared behind an `Arc` and never mutated, so one planner
/// can serve any number of threads.
pub struct RoutePlanner<R: Router = DijkstraRouter> {
    network: Arc<RoadNetwork>,
    router: R,
    config: PlannerConfig,
}

impl<R: Router> RoutePlanner<R> {
    pub fn new(network: Arc<RoadNetwork>, router: R) -> Self {
        Self::with_config(network, router, PlannerConfig::default())
    }

    pub fn with_config(network: Arc<RoadNetwork>, router: R, config: PlannerConfig) -> Self {
        Self { network, router, config }
    }

    pub fn network(&self) -> &Arc<RoadNetwork> {
        &self.network
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan between two points with an explicit risk weight in `[0, 1]`.
    pub fn plan(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        risk_weight: f64,
    ) -> PlannerResult<RouteComparison> {
        let request = PlanRequest::new(origin, destination).with_risk_weight(risk_weight)?;
        self.plan_request(&request)
    }

    /// Like [`plan`](Self::plan), but first requires both points to fall in
    /// the same configured service area.
    pub fn plan_in_area(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
        risk_weight: f64,
    ) -> PlannerResult<RouteComparison> {
        let area = self.config.areas.require_same_area(origin, destination)?;
        let name = area.name.clone();
        let mut comparison = self.plan(origin, destination, risk_weight)?;
        comparison.area = Some(name);
        Ok(comparison)
    }

    pub fn plan_request(&self, request: &PlanRequest) -> PlannerResult<RouteComparison> {
        self.plan_observed(request, &mut NoopObserver)
    }

    /// Run the full pipeline, reporting progress to `observer`.
    pub fn plan_observed(
        &self,
        request: &PlanRequest,
        observer: &mut impl PlanObserver,
    ) -> PlannerResult<RouteComparison> {
        let network = self.network.as_ref();
        let risk_weight = request.risk_weight.unwrap_or(self.config.default_risk_weight);

        request.check_deadline(Stage::Resolve)?;
        let pair = NodeLocator::new(network).resolve_pair(request.origin, request.destination)?;
        observer.on_resolved(&pair);

        request.check_deadline(Stage::Fastest)?;
        let fastest = self
            .router
            .route(network, pair.origin, pair.destination, Weighting::Time)?;
        observer.on_route(&fastest);

        request.check_deadline(Stage::Safest)?;
        let (safest, safest_status) = match self.router.route(
            network,
            pair.origin,
            pair.destination,
            Weighting::RiskAware(risk_weight),
        ) {
            Ok(route) => {
                observer.on_route(&route);
                (route, SafestStatus::RiskOptimized)
            }
            Err(e) => {
                log::warn!(
                    "risk-aware solve {} -> {} failed ({e}); falling back to fastest route",
                    pair.origin,
                    pair.destination
                );
                observer.on_fallback(&e);
                (fastest.clone(), SafestStatus::FellBackToFastest { reason: e.to_string() })
            }
        };

        request.check_deadline(Stage::Evaluate)?;
        let fastest = self.evaluate_route(fastest)?;
        let safest = self.evaluate_route(safest)?;
        let metrics = compare(&fastest.metrics, &safest.metrics);

        let comparison = RouteComparison {
            pair,
            risk_weight,
            area: None,
            fastest,
            safest,
            safest_status,
            metrics,
        };
        observer.on_plan_end(&comparison);
        Ok(comparison)
    }

    /// Plan independent requests, results in request order.  Runs on
    /// Rayon's thread pool with the `parallel` feature.
    pub fn plan_many(&self, requests: &[PlanRequest]) -> Vec<PlannerResult<RouteComparison>> {
        #[cfg(not(feature = "parallel"))]
        {
            requests.iter().map(|r| self.plan_request(r)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            requests.par_iter().map(|r| self.plan_request(r)).collect()
        }
    }

    fn evaluate_route(&self, route: Route) -> PlannerResult<EvaluatedRoute> {
        let metrics = evaluate(&route, &self.network)?;
        let risk_points = extract_risk_points(&route, &self.network, self.config.risk_threshold)?;
        Ok(EvaluatedRoute { route, metrics, risk_points })
    }
}
