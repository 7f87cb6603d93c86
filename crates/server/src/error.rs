use cramer_core::ShapeError;
use cramer_solvers::ParseError;
use thiserror::Error;

use crate::ConfigError;

/// Client errors reported by the solver endpoint.
///
/// Each variant displays as the plain-text body sent with `400 Bad Request`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Bad Request: Incorrect url query, use 'coef'")]
    MissingParameter,

    #[error("Bad Request: Incorrect number of coefficients.")]
    WrongTokenCount { found: usize },

    #[error("Bad Request: Incorrect input format.")]
    UnparseableToken { index: usize, token: String },

    #[error("Bad Request: Incorrect URL format")]
    UnknownRoute,
}

impl From<ParseError> for RequestError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::TokenCount { found } => Self::WrongTokenCount { found },
            ParseError::InvalidToken { index, token } => Self::UnparseableToken { index, token },
        }
    }
}

impl From<ShapeError> for RequestError {
    fn from(err: ShapeError) -> Self {
        Self::WrongTokenCount { found: err.found }
    }
}

/// Errors that stop the server from starting.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to bind listener")]
    Bind(#[source] warp::Error),
}
