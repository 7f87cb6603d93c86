use cramer_core::{EquationMatrix, Model};
use cramer_solvers::{Cramer, parse_coefficients};
use tracing::debug;

use crate::RequestError;

/// Name of the query parameter holding the coefficient list.
pub const COEFFICIENTS_PARAM: &str = "coef";

/// Solves the system described by a raw `coef` query value.
///
/// Returns the rendered system and its solution or classification.
///
/// # Errors
///
/// Returns `RequestError::MissingParameter` if `coef` is `None`, and the
/// matching client error if the coefficient list is malformed.
pub fn handle_solve(coef: Option<&str>) -> Result<String, RequestError> {
    let raw = coef.ok_or(RequestError::MissingParameter)?;
    let coefficients = parse_coefficients(raw)?;
    let system = EquationMatrix::from_coefficients(&coefficients)?;

    let Ok(solution) = Cramer.call(&system);
    debug!(outcome = ?solution.outcome, "solved system");

    Ok(solution.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_known_system() {
        let body = handle_solve(Some("1,0,0,1,0,1,0,2,0,0,1,3")).unwrap();
        assert!(body.ends_with("solution:\nx = 1.00, y = 2.00, z = 3.00\n"));
    }

    #[test]
    fn missing_parameter() {
        assert_eq!(handle_solve(None), Err(RequestError::MissingParameter));
    }

    #[test]
    fn malformed_token_is_reported_before_count() {
        assert!(matches!(
            handle_solve(Some("1,,x,4,5,6,7,8,9,10,11,12")),
            Err(RequestError::UnparseableToken { index: 2, .. })
        ));
    }

    #[test]
    fn empty_value_has_wrong_count() {
        assert_eq!(
            handle_solve(Some("")),
            Err(RequestError::WrongTokenCount { found: 1 })
        );
    }
}
