//! Geocoding contract and area-aware address resolution.
//!
//! No backend ships here; applications implement [`Geocoder`] over
//! whatever service they use.  Backends are assumed blocking and
//! rate-limited, hence [`RateLimited`].

use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use sr_core::GeoPoint;
use thiserror::Error;

use crate::area::ServiceAreas;
use crate::config::PlannerConfig;
use crate::error::{PlannerError, PlannerResult};

/// Recoverable failures from a geocoding backend.  "Not found" is not an
/// error; see [`Geocoder::geocode`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GeocodeError {
    #[error("geocoding service timed out")]
    Timeout,

    #[error("geocoding quota exceeded")]
    QuotaExceeded,

    #[error("geocoding service error: {0}")]
    Service(String),
}

/// Free-text address → coordinates.
pub trait Geocoder: Send + Sync {
    /// `Ok(None)` when the service has no match for `query`.
    fn geocode(&self, query: &str) -> Result<Option<GeoPoint>, GeocodeError>;
}

impl<G: Geocoder + ?Sized> Geocoder for &G {
    fn geocode(&self, query: &str) -> Result<Option<GeoPoint>, GeocodeError> {
        (**self).geocode(query)
    }
}

// ── Rate limiting ─────────────────────────────────────────────────────────────

/// Enforces a minimum spacing between successive calls to `inner`.
///
/// Calls are serialised: the lock is held across the backend call so
/// concurrent callers queue up rather than burst.
pub struct RateLimited<G> {
    inner: G,
    interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl<G: Geocoder> RateLimited<G> {
    pub fn new(inner: G, interval: Duration) -> Self {
        Self { inner, interval, last_call: Mutex::new(None) }
    }
}

impl<G: Geocoder> Geocoder for RateLimited<G> {
    fn geocode(&self, query: &str) -> Result<Option<GeoPoint>, GeocodeError> {
        let mut last = self.last_call.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.interval {
                thread::sleep(self.interval - elapsed);
            }
        }
        let result = self.inner.geocode(query);
        *last = Some(Instant::now());
        result
    }
}

// ── Address resolution ────────────────────────────────────────────────────────

/// Turns user-entered addresses into points inside a service area.
///
/// ```text
/// address names an area?  → geocode "{address}, {region}"
/// otherwise, per area     → geocode "{address}, {area}, {region}"
///                           accept the first hit that lands inside that area
/// nothing accepted        → LocationNotFound
/// ```
///
/// Backend errors are not swallowed; they surface as
/// [`PlannerError::Geocode`].
pub struct AddressResolver<G> {
    geocoder: G,
    areas: ServiceAreas,
    region: String,
}

impl<G: Geocoder> AddressResolver<G> {
    pub fn new(geocoder: G, areas: ServiceAreas, region: impl Into<String>) -> Self {
        Self { geocoder, areas, region: region.into() }
    }

    pub fn resolve(&self, address: &str) -> PlannerResult<GeoPoint> {
        let address = address.trim();
        if address.is_empty() {
            return Err(PlannerError::LocationNotFound(String::new()));
        }

        if self.areas.iter().any(|a| a.is_named_in(address)) {
            let query = format!("{address}, {}", self.region);
            return self
                .geocoder
                .geocode(&query)?
                .ok_or_else(|| PlannerError::LocationNotFound(address.to_owned()));
        }

        for area in self.areas.iter() {
            let query = format!("{address}, {}, {}", area.name, self.region);
            let Some(point) = self.geocoder.geocode(&query)? else {
                continue;
            };
            if self.areas.locate(point).is_some_and(|hit| hit.name == area.name) {
                log::debug!("resolved {address:?} in {} at {point}", area.name);
                return Ok(point);
            }
            log::debug!("{query:?} geocoded to {point}, outside {}; skipping", area.name);
        }
        Err(PlannerError::LocationNotFound(address.to_owned()))
    }
}

impl<G: Geocoder> AddressResolver<RateLimited<G>> {
    /// Resolver over `geocoder` with the areas, region suffix, and call
    /// spacing taken from `config`.
    pub fn from_config(geocoder: G, config: &PlannerConfig) -> Self {
        Self::new(
            RateLimited::new(geocoder, config.geocode_interval),
            config.areas.clone(),
            config.region_suffix.clone(),
        )
    }
}
