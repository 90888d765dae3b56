//! `sr-network` — risk-annotated road network, snapping, and routing.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`network`]  | `RoadNetwork` (CSR multigraph + R-tree), `RoadNetworkBuilder`, `EdgeAttrs` |
//! | [`weight`]   | `time_cost`, `risk_cost`, `Weighting`                       |
//! | [`router`]   | `Router` trait, `Route`, `DijkstraRouter`, `has_path`       |
//! | [`locator`]  | `NodeLocator`: nearest node, pair resolution with repair    |
//! | [`evaluate`] | `RouteMetrics`, `evaluate`                                  |
//! | [`segments`] | `RiskPoint`, `extract_risk_points`                          |
//! | [`loader`]   | `load_csv` / `load_reader` for the network artifact         |
//! | [`error`]    | `NetworkError`, `NetworkResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod evaluate;
pub mod loader;
pub mod locator;
pub mod network;
pub mod router;
pub mod segments;
pub mod weight;


pub use error::{NetworkError, NetworkResult};
pub use evaluate::{RouteMetrics, evaluate};
pub use loader::{load_csv, load_reader};
pub use locator::{NodeLocator, ResolvedPair};
pub use network::{EdgeAttrs, RoadNetwork, RoadNetworkBuilder};
pub use router::{BoundedDijkstraRouter, DijkstraRouter, Route, Router, has_path};
pub use segments::{DEFAULT_RISK_THRESHOLD, RiskPoint, extract_risk_points};
pub use weight::{Weighting, risk_cost, risk_score, time_cost};
