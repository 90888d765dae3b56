//! `sr-planner` — fastest-vs-safest route planning for the saferoute
//! workspace.
//!
//! # Pipeline
//!
//! ```text
//! (address ─► AddressResolver ─►) GeoPoint ×2
//!   ① Area       — both points in the same ServiceArea (plan_in_area only)
//!   ② Resolve    — NodeLocator::resolve_pair, with component repair
//!   ③ Fastest    — Router under Weighting::Time; failure is an error
//!   ④ Safest     — Router under Weighting::RiskAware(w); failure falls back
//!                  to the fastest route and is flagged in SafestStatus
//!   ⑤ Evaluate   — RouteMetrics + RiskPoints for each route
//!   ⑥ Compare    — time_difference, risk_reduction
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | `plan_many` runs on Rayon's thread pool.                |
//! | `serde`    | Serde derives on config, results, and `MapOverlay`.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sr_network::{DijkstraRouter, load_csv};
//! use sr_planner::PlannerBuilder;
//!
//! let network = load_csv("nodes.csv".as_ref(), "edges.csv".as_ref())?;
//! let planner = PlannerBuilder::new(DijkstraRouter).network(network).build()?;
//! let cmp = planner.plan_in_area(start, end, 0.5)?;
//! println!("{:.0}% less risk for {:+.0} s", cmp.risk_reduction() * 100.0, cmp.time_difference());
//! ```

pub mod area;
pub mod builder;
pub mod compare;
pub mod config;
pub mod error;
pub mod geocode;
pub mod observer;
pub mod overlay;
pub mod planner;


pub use area::{ServiceArea, ServiceAreas};
pub use builder::PlannerBuilder;
pub use compare::{ComparisonMetrics, EvaluatedRoute, RouteComparison, SafestStatus, compare};
pub use config::PlannerConfig;
pub use error::{Endpoint, PlannerError, PlannerResult, Stage};
pub use geocode::{AddressResolver, GeocodeError, Geocoder, RateLimited};
pub use observer::{NoopObserver, PlanObserver};
pub use overlay::{MapOverlay, RouteLayer};
pub use planner::{PlanRequest, RoutePlanner};
