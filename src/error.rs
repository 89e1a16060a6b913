use thiserror::Error;

use crate::team::Conference;

/// Errors raised at the boundary of the simulation core.
///
/// The simulation itself never fails once its inputs are validated; every
/// variant here describes bad input.
#[derive(Debug, Error)]
pub enum Error {
    #[error("weighting `{field}` must be a finite, non-negative number (got {value})")]
    InvalidWeight { field: &'static str, value: f64 },

    #[error("invalid weighting payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{conference} conference needs 10 seeded teams, found {found}")]
    IncompleteConference { conference: Conference, found: usize },

    #[error("simulation count must be positive")]
    NoSimulations,
}

pub type Result<T> = std::result::Result<T, Error>;
