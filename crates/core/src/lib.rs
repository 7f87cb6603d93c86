//! Core traits and types for solving three-by-three linear systems.
//!
//! This crate defines the shared abstractions the solvers and the server
//! build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`EquationMatrix`]: an immutable system of three equations in three
//!   unknowns, stored as `[a, b, c, d]` rows
//! - [`Matrix3`]: a square matrix with its [`determinant`](Matrix3::determinant)

mod matrix;
mod model;

pub use matrix::{COEFFICIENT_COUNT, EQUATIONS, EquationMatrix, Matrix3, ShapeError, UNKNOWNS};
pub use model::Model;
