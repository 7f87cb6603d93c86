use cramer_core::COEFFICIENT_COUNT;
use thiserror::Error;

/// Errors that can occur when parsing a coefficient list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The list does not hold exactly [`COEFFICIENT_COUNT`] values.
    #[error("expected {expected} coefficients, found {found}", expected = COEFFICIENT_COUNT)]
    TokenCount { found: usize },

    /// A token is not a finite number.
    #[error("invalid coefficient {token:?} at position {index}")]
    InvalidToken { index: usize, token: String },
}

/// Parses a comma-separated list of coefficients.
///
/// The raw string must split into exactly [`COEFFICIENT_COUNT`] tokens.
/// Empty tokens are skipped, so the parsed list is checked against the
/// expected count a second time. Tokens are not trimmed.
///
/// # Errors
///
/// Returns `ParseError::TokenCount` if the split or the parsed list has the
/// wrong length, or `ParseError::InvalidToken` for the first token that is
/// not a finite number. An invalid token takes precedence over a short list.
pub fn parse_coefficients(raw: &str) -> Result<Vec<f64>, ParseError> {
    let tokens: Vec<&str> = raw.split(',').collect();
    if tokens.len() != COEFFICIENT_COUNT {
        return Err(ParseError::TokenCount {
            found: tokens.len(),
        });
    }

    let mut coefficients = Vec::with_capacity(COEFFICIENT_COUNT);
    for (index, token) in tokens.into_iter().enumerate() {
        if token.is_empty() {
            continue;
        }

        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => coefficients.push(value),
            _ => {
                return Err(ParseError::InvalidToken {
                    index,
                    token: token.to_owned(),
                });
            }
        }
    }

    if coefficients.len() != COEFFICIENT_COUNT {
        return Err(ParseError::TokenCount {
            found: coefficients.len(),
        });
    }

    Ok(coefficients)
}
