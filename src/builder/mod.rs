/*!
Methods for building a solver and adding clauses.

Encodings are drawn when a solver is built.
For reproducible encodings either fix the [seed](crate::config::Config::seed) of the default source of randomness, or supply a source with [from_config_and_rng](Solver::from_config_and_rng).

```rust
# use molecular_sat::context::Solver;
# use molecular_sat::config::Config;
# use molecular_sat::types::err::{ClauseError, ErrorKind};
let mut solver = Solver::from_config(Config::default(), 2).unwrap();

assert!(solver.add_clause(&[1, -2, -2]).is_ok());
assert_eq!(
    solver.add_clause(&[1, 3, 2]),
    Err(ErrorKind::Clause(ClauseError::OutOfRange(3)))
);
assert_eq!(solver.clauses().len(), 1);
```
*/

pub mod dimacs;

use rand::{Rng, SeedableRng};

use crate::{
    config::Config,
    context::{Counters, SolveState, Solver},
    encoding::EncodingTable,
    generic::random::MinimalPCG32,
    misc::log::targets::{self},
    structures::{clause::Clause, literal::Literal, tube::Tube},
    types::err::{self, ErrorKind},
};

impl Solver {
    /// A solver over `variable_count` variables, with encodings drawn from a [MinimalPCG32] seeded by the config.
    pub fn from_config(config: Config, variable_count: usize) -> Result<Self, ErrorKind> {
        let mut rng = MinimalPCG32::from_seed(config.seed.value.to_le_bytes());
        Self::from_config_and_rng(config, variable_count, &mut rng)
    }

    /// A solver over `variable_count` variables, with encodings drawn from the given source of randomness.
    pub fn from_config_and_rng(
        config: Config,
        variable_count: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, ErrorKind> {
        if variable_count == 0 {
            return Err(err::BuildError::NoVariables.into());
        }

        let encodings =
            EncodingTable::generate(variable_count, config.encoding_attempts.value, rng)?;

        log::info!(target: targets::ENCODING, "Encodings drawn for {variable_count} variables");

        Ok(Solver {
            config,
            counters: Counters::default(),
            encodings,
            clauses: Vec::default(),
            state: SolveState::Unsolved,
            tube: Tube::new("T0"),
            stages: Vec::default(),
        })
    }

    /// Adds a clause of exactly three literals, each over some variable of the solver.
    ///
    /// An invalid clause is rejected whole.
    /// Adding a clause returns the solver to the [Unsolved](SolveState::Unsolved) state.
    pub fn add_clause(&mut self, literals: &[Literal]) -> Result<(), ErrorKind> {
        let clause = Clause::new(literals, self.variable_count())?;

        log::debug!(target: targets::SOLVE, "Clause {} added: {clause}", self.clauses.len());

        self.clauses.push(clause);
        self.state = SolveState::Unsolved;
        Ok(())
    }
}
