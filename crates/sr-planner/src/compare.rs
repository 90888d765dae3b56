//! Fastest-vs-safest comparison results.

use sr_core::RiskWeight;
use sr_network::{ResolvedPair, RiskPoint, Route, RouteMetrics};

/// Time cost and risk benefit of taking the safest route.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonMetrics {
    /// `safest.total_time - fastest.total_time`, seconds.  Not clamped.
    pub time_difference: f64,
    /// Fraction of the fastest route's risk avoided, in `[0, 1]`.
    pub risk_reduction: f64,
}

/// Compare two evaluated routes.
///
/// `risk_reduction` is `0` when the fastest route carries no risk and is
/// never negative: a safest route that happens to be riskier reports `0`.
pub fn compare(fastest: &RouteMetrics, safest: &RouteMetrics) -> ComparisonMetrics {
    let risk_reduction = if fastest.total_risk > 0.0 {
        ((fastest.total_risk - safest.total_risk) / fastest.total_risk).max(0.0)
    } else {
        0.0
    };
    ComparisonMetrics {
        time_difference: safest.total_time - fastest.total_time,
        risk_reduction,
    }
}

/// A route together with its evaluation and flagged segments.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluatedRoute {
    pub route: Route,
    pub metrics: RouteMetrics,
    pub risk_points: Vec<RiskPoint>,
}

/// How the safest route was obtained.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SafestStatus {
    /// Solved under the risk-aware weighting.
    RiskOptimized,
    /// The risk-aware solve failed; the safest route is a copy of the
    /// fastest one.
    FellBackToFastest { reason: String },
}

/// Output of one planning request.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteComparison {
    pub pair: ResolvedPair,
    pub risk_weight: RiskWeight,
    /// Service area both endpoints were validated against, if any.
    pub area: Option<String>,
    pub fastest: EvaluatedRoute,
    pub safest: EvaluatedRoute,
    pub safest_status: SafestStatus,
    pub metrics: ComparisonMetrics,
}

impl RouteComparison {
    /// `true` if the safest route is a fallback copy of the fastest.
    pub fn is_degraded(&self) -> bool {
        matches!(self.safest_status, SafestStatus::FellBackToFastest { .. })
    }

    pub fn time_difference(&self) -> f64 {
        self.metrics.time_difference
    }

    pub fn risk_reduction(&self) -> f64 {
        self.metrics.risk_reduction
    }
}
