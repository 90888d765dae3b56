//! Edge weight functions.
//!
//! Both functions are total: for any edge, however malformed its
//! attributes, they return a finite value `>= 0`.  Dijkstra's correctness
//! depends on it.
//!
//! ```text
//! time_cost(e)    = base_travel_time                       if present and valid
//!                 = length / speed_from(maxspeed, 50 km/h) otherwise
//! risk_cost(e, w) = time_cost(e) * (1 + w * risk(e) * 0.5)
//! ```

use sr_core::{AttrValue, RiskWeight, coerce_f64};

use crate::network::EdgeAttrs;

/// Speed assumed when `maxspeed` is missing or unusable, km/h.
pub const DEFAULT_SPEED_KMH: f64 = 50.0;

/// Fallback speed for non-positive coerced speeds, m/s (50 km/h).
pub const REFERENCE_SPEED_MPS: f64 = DEFAULT_SPEED_KMH * 1000.0 / 3600.0;

/// Scale applied to `risk_weight * risk` in the penalty factor.
const RISK_PENALTY_SCALE: f64 = 0.5;

// ── Attribute readers ─────────────────────────────────────────────────────────

/// Coerce `maxspeed` to km/h, falling back to `default_kmh`.
#[inline]
pub fn speed_from(maxspeed: Option<&AttrValue>, default_kmh: f64) -> f64 {
    coerce_f64(maxspeed, default_kmh)
}

/// Coerced, non-negative risk score of `edge` (absent → 0).
#[inline]
pub fn risk_score(edge: &EdgeAttrs) -> f64 {
    coerce_f64(edge.normalized_risk.as_ref(), 0.0).max(0.0)
}

/// Length in metres; negative or non-finite lengths count as 0.
#[inline]
fn sanitized_length(edge: &EdgeAttrs) -> f64 {
    if edge.length_m.is_finite() && edge.length_m > 0.0 { edge.length_m } else { 0.0 }
}

// ── Weight functions ──────────────────────────────────────────────────────────

/// Travel time over `edge` in seconds.
pub fn time_cost(edge: &EdgeAttrs) -> f64 {
    if let Some(t) = edge.base_travel_time {
        if t.is_finite() && t >= 0.0 {
            return t;
        }
        log::trace!("ignoring invalid base_travel_time {t}");
    }

    let kmh = speed_from(edge.maxspeed.as_ref(), DEFAULT_SPEED_KMH);
    let mps = kmh * 1000.0 / 3600.0;
    let mps = if mps > 0.0 { mps } else { REFERENCE_SPEED_MPS };

    let t = sanitized_length(edge) / mps;
    // Tiny positive speeds can overflow to +inf.
    if t.is_finite() { t } else { sanitized_length(edge) / REFERENCE_SPEED_MPS }
}

/// Risk-inflated travel time over `edge`.  `risk_cost(e, 0) == time_cost(e)`.
pub fn risk_cost(edge: &EdgeAttrs, risk_weight: RiskWeight) -> f64 {
    let base = time_cost(edge);
    if base == 0.0 {
        return 0.0;
    }
    let penalty = 1.0 + risk_weight.get() * risk_score(edge) * RISK_PENALTY_SCALE;
    let cost = base * penalty;
    if cost.is_finite() { cost } else { f64::MAX }
}

// ── Weighting ─────────────────────────────────────────────────────────────────

/// The weight function a solve runs under.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weighting {
    /// Pure travel time.
    #[default]
    Time,
    /// Travel time inflated by edge risk.
    RiskAware(RiskWeight),
}

impl Weighting {
    #[inline]
    pub fn cost(self, edge: &EdgeAttrs) -> f64 {
        match self {
            Weighting::Time => time_cost(edge),
            Weighting::RiskAware(w) => risk_cost(edge, w),
        }
    }
}

impl std::fmt::Display for Weighting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Weighting::Time => f.write_str("time"),
            Weighting::RiskAware(w) => write!(f, "risk-aware(w={w})"),
        }
    }
}
