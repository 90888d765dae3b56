//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `From`, keeping error sites clean with `?`.

use thiserror::Error;

/// Errors produced by `sr-core`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("risk weight {0} is outside [0, 1]")]
    InvalidRiskWeight(f64),
}

/// Shorthand result type for `sr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
