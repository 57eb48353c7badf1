/*!
Reports for a solver.
*/

use serde::Serialize;

use crate::context::SolveState;

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Report {
    /// Some molecule survived every clause.
    Satisfiable,

    /// Some clause removed every molecule.
    Unsatisfiable,

    /// Satisfiability is unknown, as no solve has completed since the last clause was added.
    Unknown,
}

impl From<&SolveState> for Report {
    fn from(value: &SolveState) -> Self {
        match value {
            SolveState::Unsolved | SolveState::Evaluating(_) => Self::Unknown,
            SolveState::Satisfiable => Self::Satisfiable,
            SolveState::Unsatisfiable(_) => Self::Unsatisfiable,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
