use std::fmt;

use sr_core::{CoreError, GeoPoint};
use sr_network::NetworkError;
use thiserror::Error;

use crate::geocode::GeocodeError;

/// Which end of a trip an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Origin,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endpoint::Origin => "origin",
            Endpoint::Destination => "destination",
        })
    }
}

/// Pipeline stage, reported when a deadline cuts a plan short.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    Resolve,
    Fastest,
    Safest,
    Evaluate,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Resolve => "resolve",
            Stage::Fastest => "fastest solve",
            Stage::Safest => "safest solve",
            Stage::Evaluate => "evaluate",
        })
    }
}

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("planner configuration error: {0}")]
    Config(String),

    #[error("could not find location for address {0:?}")]
    LocationNotFound(String),

    #[error("{which} {point} is outside every service area")]
    OutOfServiceArea { which: Endpoint, point: GeoPoint },

    #[error("origin is in {origin} but destination is in {destination}")]
    AreaMismatch { origin: String, destination: String },

    #[error("geocoding failed: {0}")]
    Geocode(#[from] GeocodeError),

    #[error(transparent)]
    InvalidRiskWeight(#[from] CoreError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("deadline exceeded before {stage}")]
    DeadlineExceeded { stage: Stage },
}

pub type PlannerResult<T> = Result<T, PlannerError>;
