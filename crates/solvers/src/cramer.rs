//! Cramer's rule for three equations in three unknowns.
//!
//! The coefficient determinant `D` decides the outcome:
//!
//! - `D != 0`: the unique solution is `x = D1/D`, `y = D2/D`, `z = D3/D`
//! - `D == 0` and `D1 == D2 == D3 == 0`: the system is dependent
//! - `D == 0` otherwise: the system is inconsistent
//!
//! `Dk` is the determinant of the coefficient matrix with column `k`
//! replaced by the constants. Zero checks are exact; no tolerance is applied,
//! so nearly singular systems are classified by their rounded determinants.

mod render;
mod solution;

use std::convert::Infallible;

use cramer_core::{EquationMatrix, Model};

pub use solution::{Determinants, Outcome, Solution};

/// Solves a system using Cramer's rule.
///
/// Finite coefficients can still overflow a determinant. Non-finite
/// determinants are not treated specially: an infinite `D` yields a unique
/// outcome whose values may be NaN.
#[must_use]
pub fn solve(system: &EquationMatrix) -> Solution {
    let determinants = Determinants::of(system);
    let Determinants { d, d1, d2, d3 } = determinants;

    #[allow(clippy::float_cmp)]
    let outcome = if d != 0.0 {
        Outcome::Unique {
            x: d1 / d,
            y: d2 / d,
            z: d3 / d,
        }
    } else if d1 == 0.0 && d2 == 0.0 && d3 == 0.0 {
        Outcome::Dependent
    } else {
        Outcome::Inconsistent
    };

    Solution {
        system: *system,
        determinants,
        outcome,
    }
}

/// Cramer's rule as a [`Model`].
///
/// Solving cannot fail once the system is built.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cramer;

impl Model for Cramer {
    type Input = EquationMatrix;
    type Output = Solution;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(solve(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn system(coefficients: [f64; 12]) -> EquationMatrix {
        EquationMatrix::from_coefficients(&coefficients).unwrap()
    }

    fn unique(solution: &Solution) -> [f64; 3] {
        match solution.outcome {
            Outcome::Unique { x, y, z } => [x, y, z],
            other => panic!("expected a unique solution, got {other:?}"),
        }
    }

    #[test]
    fn solves_diagonal_system() {
        let solution = solve(&system([
            1.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 2.0, 0.0, 0.0, 1.0, 3.0,
        ]));

        assert_eq!(solution.outcome, Outcome::Unique { x: 1.0, y: 2.0, z: 3.0 });
        assert_relative_eq!(solution.determinants.d, 1.0);
    }

    #[test]
    fn solution_satisfies_every_equation() {
        let systems = [
            [2.0, 1.0, -1.0, 8.0, -3.0, -1.0, 2.0, -11.0, -2.0, 1.0, 2.0, -3.0],
            [0.5, -2.0, 7.0, 1.25, 3.0, 0.0, -4.5, 10.0, -1.0, 6.0, 2.0, -8.0],
            [1e-3, 4.0, 2.0, 5.0, 9.0, -3.0, 1.0, 0.0, 2.0, 2.0, 8.0, 1.0],
        ];

        for coefficients in systems {
            let solution = solve(&system(coefficients));
            let [x, y, z] = unique(&solution);

            for [a, b, c, d] in solution.system.rows() {
                assert_relative_eq!(a * x + b * y + c * z, *d, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn identical_equations_are_dependent() {
        let solution = solve(&system([
            1.0, 1.0, 1.0, 6.0, 1.0, 1.0, 1.0, 6.0, 1.0, 1.0, 1.0, 6.0,
        ]));

        assert_eq!(solution.outcome, Outcome::Dependent);
        assert_eq!(solution.determinants.d, 0.0);
    }

    #[test]
    fn parallel_planes_are_inconsistent() {
        let solution = solve(&system([
            1.0, 1.0, 1.0, 6.0, 1.0, 1.0, 1.0, 7.0, 0.0, 0.0, 1.0, 1.0,
        ]));

        assert_eq!(solution.outcome, Outcome::Inconsistent);
        assert_relative_eq!(solution.determinants.d1, -1.0);
    }

    #[test]
    fn all_zero_system_is_dependent() {
        let solution = solve(&system([0.0; 12]));
        assert_eq!(solution.outcome, Outcome::Dependent);
    }

    #[test]
    fn negative_zero_determinant_counts_as_zero() {
        let solution = solve(&system([
            -1.0, 0.0, -0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        ]));

        assert!(solution.determinants.d.is_sign_negative());
        assert_eq!(solution.outcome, Outcome::Dependent);
    }

    #[test]
    fn overflowing_determinants_pass_through() {
        let solution = solve(&system([
            1e300, 0.0, 0.0, 1.0, 0.0, 1e300, 0.0, 2.0, 0.0, 0.0, 1e300, 3.0,
        ]));

        assert_eq!(solution.determinants.d, f64::INFINITY);
        let [x, y, z] = unique(&solution);
        assert!(x.is_nan() && y.is_nan() && z.is_nan());
    }

    #[test]
    fn solving_is_deterministic() {
        let input = system([
            3.0, 2.0, -1.0, 1.0, 2.0, -2.0, 4.0, -2.0, -1.0, 0.5, -1.0, 0.0,
        ]);

        assert_eq!(solve(&input), solve(&input));
        assert_eq!(Cramer.call(&input).unwrap(), solve(&input));
    }
}
