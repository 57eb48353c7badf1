//! Clauses, aka. a disjunction of exactly three literals.
//!
//! A clause is checked against the variable count of a solver when built, and so any clause held by a solver is a 3-SAT clause over the variables of the solver.
//! Literals may repeat, which is the way to express a clause of fewer literals.
//!
//! ```rust
//! # use molecular_sat::structures::clause::Clause;
//! let clause = Clause::new(&[1, -2, 2], 2).unwrap();
//!
//! assert!(clause.satisfied_by(&[false, false]));
//! assert_eq!(clause.as_dimacs(true), "1 -2 2 0");
//!
//! assert!(Clause::new(&[1, 2], 2).is_err());
//! assert!(Clause::new(&[1, 2, 3], 2).is_err());
//! ```

use crate::{
    structures::literal::{self, Literal},
    types::err::ClauseError,
};

/// The number of literals in a clause.
pub const CLAUSE_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Clause {
    literals: [Literal; CLAUSE_SIZE],
}

impl Clause {
    /// A clause of the given literals, if there are exactly three, each over some variable in `1..=variable_count`.
    pub fn new(literals: &[Literal], variable_count: usize) -> Result<Self, ClauseError> {
        let literals: [Literal; CLAUSE_SIZE] = literals
            .try_into()
            .map_err(|_| ClauseError::Length(literals.len()))?;

        for literal in literals {
            if literal == 0 {
                return Err(ClauseError::ZeroLiteral);
            }
            if literal::variable(literal) > variable_count {
                return Err(ClauseError::OutOfRange(literal));
            }
        }

        Ok(Clause { literals })
    }

    /// The literals of the clause, in the order given.
    pub fn literals(&self) -> &[Literal; CLAUSE_SIZE] {
        &self.literals
    }

    /// Whether some literal of the clause is true on the valuation.
    ///
    /// The valuation is indexed from zero, and so the value of variable `v` is at `v - 1`.
    /// Literals over variables outside of the valuation are never true.
    pub fn satisfied_by(&self, valuation: &[bool]) -> bool {
        self.literals.iter().any(|&literal| {
            valuation.get(literal::variable(literal) - 1) == Some(&literal::polarity(literal))
        })
    }

    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    pub fn as_dimacs(&self, zero: bool) -> String {
        let mut dimacs = self
            .literals
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if zero {
            dimacs.push_str(" 0");
        }
        dimacs
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.literals;
        write!(f, "[{a}, {b}, {c}]")
    }
}

#[cfg(test)]
mod clause_tests {
    use super::*;

    #[test]
    fn rejections() {
        assert_eq!(Clause::new(&[], 3), Err(ClauseError::Length(0)));
        assert_eq!(Clause::new(&[1, 2, 3, 1], 3), Err(ClauseError::Length(4)));
        assert_eq!(Clause::new(&[1, 0, 3], 3), Err(ClauseError::ZeroLiteral));
        assert_eq!(Clause::new(&[1, -4, 3], 3), Err(ClauseError::OutOfRange(-4)));
    }

    #[test]
    fn repeated_literals() {
        let clause = Clause::new(&[1, 1, 1], 1).unwrap();
        assert!(clause.satisfied_by(&[true]));
        assert!(!clause.satisfied_by(&[false]));
        assert_eq!(clause.to_string(), "[1, 1, 1]");
    }
}
