//! leeds — fastest-vs-safest route comparison across Leeds city centre.
//!
//! Resolves two landmark addresses, plans the trip at three risk weights,
//! and writes the full-weight map overlay to `output/leeds/overlay.json`.
//!
//! ```text
//! cargo run -p leeds                          # embedded network
//! cargo run -p leeds -- nodes.csv edges.csv   # exported artifact
//! SR_PLANNER_CONFIG=planner.json cargo run -p leeds
//! RUST_LOG=debug cargo run -p leeds           # show locator repairs
//! ```

mod network;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};

use sr_core::GeoPoint;
use sr_network::{DijkstraRouter, RoadNetwork, load_csv};
use sr_planner::{
    AddressResolver, GeocodeError, Geocoder, PlanRequest, PlannerBuilder, PlannerConfig,
    RouteComparison,
};

use network::embedded_network;

// ── Constants ─────────────────────────────────────────────────────────────────

const START_ADDRESS: &str = "Leeds Station";
const END_ADDRESS:   &str = "Hyde Park";
const RISK_WEIGHTS:  [f64; 3] = [0.0, 0.5, 1.0];
const OUTPUT_DIR:    &str = "output/leeds";

// ── Geocoder ──────────────────────────────────────────────────────────────────

/// Offline stand-in for a geocoding service: a handful of landmarks, matched
/// on the start of the query.
struct LandmarkGeocoder;

const LANDMARKS: &[(&str, GeoPoint)] = &[
    ("leeds station", GeoPoint { lat: 53.7949, lon: -1.5474 }),
    ("briggate",      GeoPoint { lat: 53.7983, lon: -1.5430 }),
    ("university",    GeoPoint { lat: 53.8068, lon: -1.5552 }),
    ("hyde park",     GeoPoint { lat: 53.8102, lon: -1.5622 }),
    ("kirkstall",     GeoPoint { lat: 53.8152, lon: -1.6004 }),
];

impl Geocoder for LandmarkGeocoder {
    fn geocode(&self, query: &str) -> Result<Option<GeoPoint>, GeocodeError> {
        let query = query.to_lowercase();
        Ok(LANDMARKS
            .iter()
            .find(|(name, _)| query.starts_with(name))
            .map(|&(_, point)| point))
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    println!("=== leeds — risk-aware route comparison ===");
    println!();

    // 1. Road network.
    let network = load_network()?;
    println!(
        "Road network: {} nodes, {} edges",
        network.node_count(),
        network.edge_count()
    );

    // 2. Config.
    let config = load_config()?;
    println!(
        "Risk threshold: {}  |  Areas: {}",
        config.risk_threshold,
        config.areas.iter().map(|a| a.name.as_str()).collect::<Vec<_>>().join(", ")
    );

    // 3. Geocode both ends.
    let resolver = AddressResolver::from_config(LandmarkGeocoder, &config);
    let start = resolver.resolve(START_ADDRESS)?;
    let end = resolver.resolve(END_ADDRESS)?;
    let area = config.areas.require_same_area(start, end)?;
    println!("{START_ADDRESS} {start}  →  {END_ADDRESS} {end}  [{}]", area.name);
    println!();

    // 4. Plan at each risk weight.
    let planner = PlannerBuilder::new(DijkstraRouter)
        .network(network)
        .config(config)
        .build()?;

    let requests = RISK_WEIGHTS
        .iter()
        .map(|&w| PlanRequest::new(start, end).with_risk_weight(w))
        .collect::<Result<Vec<_>, _>>()?;

    let t0 = Instant::now();
    let results = planner.plan_many(&requests);
    let elapsed = t0.elapsed();

    println!(
        "{:<8} {:>10} {:>10} {:>10} {:>10} {:>9}  {}",
        "Weight", "Fast (s)", "Safe (s)", "Δt (s)", "Fast risk", "Risk ↓", "Safest path"
    );
    println!("{}", "-".repeat(80));

    let mut last: Option<RouteComparison> = None;
    for (w, result) in RISK_WEIGHTS.iter().zip(results) {
        let cmp = result.with_context(|| format!("planning at risk weight {w}"))?;
        println!(
            "{:<8.2} {:>10.1} {:>10.1} {:>+10.1} {:>10.1} {:>8.0}%  {}{}",
            w,
            cmp.fastest.metrics.total_time,
            cmp.safest.metrics.total_time,
            cmp.time_difference(),
            cmp.fastest.metrics.total_risk,
            cmp.risk_reduction() * 100.0,
            path_label(&cmp),
            if cmp.is_degraded() { "  (fallback)" } else { "" },
        );
        last = Some(cmp);
    }
    println!();
    println!("Planned {} requests in {:.3} ms", requests.len(), elapsed.as_secs_f64() * 1e3);

    // 5. Overlay for the last (highest) weight.
    let Some(cmp) = last else {
        bail!("no risk weights configured");
    };
    let overlay = cmp.overlay(planner.network(), start, end)?;
    log::debug!("overlay centre {}", overlay.center);
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let path = Path::new(OUTPUT_DIR).join("overlay.json");
    serde_json::to_writer_pretty(BufWriter::new(File::create(&path)?), &overlay)?;
    println!(
        "Overlay: {} ({} + {} risk points)",
        path.display(),
        overlay.fastest.risk_points.len(),
        overlay.safest.risk_points.len()
    );

    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Embedded network, or `nodes.csv edges.csv` from the command line.
fn load_network() -> Result<RoadNetwork> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => Ok(embedded_network()?),
        [nodes, edges] => load_csv(Path::new(nodes), Path::new(edges))
            .with_context(|| format!("loading {nodes} / {edges}")),
        _ => bail!("usage: leeds [nodes.csv edges.csv]"),
    }
}

/// `PlannerConfig` from the JSON file named by `SR_PLANNER_CONFIG`, else
/// defaults.
fn load_config() -> Result<PlannerConfig> {
    match std::env::var_os("SR_PLANNER_CONFIG") {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("opening config {}", path.to_string_lossy()))?;
            Ok(serde_json::from_reader(file)?)
        }
        None => Ok(PlannerConfig::default()),
    }
}

fn path_label(cmp: &RouteComparison) -> String {
    cmp.safest
        .route
        .nodes
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("→")
}
