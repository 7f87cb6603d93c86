use std::fmt;

use super::{Outcome, Solution};

impl fmt::Display for Solution {
    /// Writes the system followed by its solution or classification.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "system:")?;
        for [a, b, c, d] in self.system.rows() {
            writeln!(f, "{a}x + {b}y + {c}z = {d}")?;
        }

        match self.outcome {
            Outcome::Unique { x, y, z } => {
                writeln!(f, "solution:")?;
                writeln!(f, "x = {x:.2}, y = {y:.2}, z = {z:.2}")
            }
            Outcome::Dependent => writeln!(f, "dependent - with multiple solutions"),
            Outcome::Inconsistent => writeln!(f, "inconsistent - no solution"),
        }
    }
}
