/*!
The solver --- to which clauses are added and within which solves take place.

A solver is built with a configuration and a variable count, and on being built draws an [encoding](crate::encoding) for each literal.
Clauses are then added (in any order) and a [solve](crate::procedures::solve) determines satisfiability by filtering a tube of every assignment.

The state of a solver follows a solve:

- [Unsolved](SolveState::Unsolved), before a solve, and after a clause is added.
- [Evaluating](SolveState::Evaluating)(*i*), while the tube is filtered by clause *i*.
- [Satisfiable](SolveState::Satisfiable), if some molecule survives every clause.
- [Unsatisfiable](SolveState::Unsatisfiable)(*i*), if clause *i* removed every remaining molecule.
  No clause after *i* is processed.

# Example
```rust
# use molecular_sat::context::Solver;
# use molecular_sat::config::Config;
# use molecular_sat::reports::Report;
let mut solver = Solver::from_config(Config::default(), 3).unwrap();

assert!(solver.add_clause(&[1, 2, 3]).is_ok());
assert!(solver.add_clause(&[-1, 2, 3]).is_ok());

assert_eq!(solver.solve(), Ok(Report::Satisfiable));

let model = solver.model().unwrap();
assert!(model[1] || model[2]);
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    encoding::EncodingTable,
    reports::Report,
    structures::{clause::Clause, tube::Tube},
};

/// The state of a solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveState {
    /// No solve has taken place since the last clause was added.
    Unsolved,

    /// The tube is being filtered by the clause at the given index.
    Evaluating(usize),

    /// Some molecule survived every clause.
    Satisfiable,

    /// The clause at the given index removed every remaining molecule.
    Unsatisfiable(usize),
}

impl std::fmt::Display for SolveState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsolved => write!(f, "Unsolved"),
            Self::Evaluating(index) => write!(f, "Evaluating({index})"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable(index) => write!(f, "Unsatisfiable({index})"),
        }
    }
}

/// A solver, owning its encodings, clauses, and tubes.
pub struct Solver {
    /// The configuration of the solver.
    pub config: Config,

    /// Counts from the most recent solve.
    pub counters: Counters,

    pub(crate) encodings: EncodingTable,

    pub(crate) clauses: Vec<Clause>,

    pub(crate) state: SolveState,

    /// The tube after the most recent solve.
    pub(crate) tube: Tube,

    /// The tube of each stage of the most recent solve, if [retained](Config::retain_stages).
    pub(crate) stages: Vec<Tube>,
}

impl Solver {
    /// The number of variables of the solver.
    pub fn variable_count(&self) -> usize {
        self.encodings.variable_count()
    }

    /// The blocks drawn for each literal.
    pub fn encodings(&self) -> &EncodingTable {
        &self.encodings
    }

    /// The clauses of the solver, in the order added.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn state(&self) -> SolveState {
        self.state
    }

    /// A report on the most recent solve.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// The tube at the end of the most recent solve.
    ///
    /// Empty before a solve, and if the formula is unsatisfiable.
    pub fn tube(&self) -> &Tube {
        &self.tube
    }

    /// The tube of each stage of the most recent solve: the initial tube, then the tube after each clause processed.
    ///
    /// Empty unless [retain_stages](Config::retain_stages) is set.
    pub fn stages(&self) -> &[Tube] {
        &self.stages
    }
}
