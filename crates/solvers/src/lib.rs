//! Solvers for three-by-three linear systems.
//!
//! - [`parse`] turns a comma-separated coefficient list into numbers
//! - [`cramer`] classifies and solves a system using Cramer's rule
//!
//! A [`cramer::Solution`] renders as plain text through its `Display` impl.

pub mod cramer;
pub mod parse;

pub use cramer::{Cramer, Determinants, Outcome, Solution, solve};
pub use parse::{ParseError, parse_coefficients};
