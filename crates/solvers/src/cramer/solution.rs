use cramer_core::EquationMatrix;
use serde::{Deserialize, Serialize};

/// The four determinants used by Cramer's rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Determinants {
    /// Determinant of the coefficient matrix.
    pub d: f64,
    /// Determinant with the `x` column replaced by the constants.
    pub d1: f64,
    /// Determinant with the `y` column replaced by the constants.
    pub d2: f64,
    /// Determinant with the `z` column replaced by the constants.
    pub d3: f64,
}

impl Determinants {
    /// Computes the determinants of a system.
    #[must_use]
    pub fn of(system: &EquationMatrix) -> Self {
        let [d1, d2, d3] = system.substitutions().map(|matrix| matrix.determinant());
        Self {
            d: system.coefficients().determinant(),
            d1,
            d2,
            d3,
        }
    }
}

/// Classification of a system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Exactly one solution.
    Unique { x: f64, y: f64, z: f64 },
    /// Infinitely many solutions.
    Dependent,
    /// No solution.
    Inconsistent,
}

/// The result of solving a system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// The system that was solved.
    pub system: EquationMatrix,
    pub determinants: Determinants,
    pub outcome: Outcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn outcome_is_tagged_by_kind() {
        assert_eq!(
            serde_json::to_value(Outcome::Unique {
                x: 1.0,
                y: -2.5,
                z: 3.0
            })
            .unwrap(),
            json!({ "kind": "unique", "x": 1.0, "y": -2.5, "z": 3.0 })
        );
        assert_eq!(
            serde_json::to_value(Outcome::Dependent).unwrap(),
            json!({ "kind": "dependent" })
        );
        assert_eq!(
            serde_json::from_value::<Outcome>(json!({ "kind": "inconsistent" })).unwrap(),
            Outcome::Inconsistent
        );
    }

    #[test]
    fn solution_survives_json() {
        let system = EquationMatrix::new([
            [1.0, 0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0, 2.0],
            [0.0, 0.0, 1.0, 3.0],
        ]);
        let solution = Solution {
            system,
            determinants: Determinants::of(&system),
            outcome: Outcome::Unique {
                x: 1.0,
                y: 2.0,
                z: 3.0,
            },
        };

        let text = serde_json::to_string(&solution).unwrap();
        let restored: Solution = serde_json::from_str(&text).unwrap();

        assert_eq!(restored, solution);
    }
}
