/*!
The solve procedure.

A solve is generate-and-test:

1. The initial tube of every assignment is [generated](crate::procedures::initial_tube).
2. For each clause, in the order added, the tube is replaced by the molecules which satisfy the clause.
3. If the tube is ever empty, the formula is unsatisfiable, and no further clause is processed.
   Otherwise, after every clause, each molecule in the tube encodes a model of the formula.

Work and memory are exponential in the variable count, as the initial tube holds 2<sup>n</sup> molecules of 3n bases.

Each solve begins from the initial tube, and so a solve may be repeated after clauses are added.

```rust
# use molecular_sat::context::Solver;
# use molecular_sat::config::Config;
# use molecular_sat::reports::Report;
let mut solver = Solver::from_config(Config::default(), 1).unwrap();
solver.add_clause(&[1, 1, 1]).unwrap();

assert_eq!(solver.solve(), Ok(Report::Satisfiable));
assert_eq!(solver.counters.tube_sizes, vec![2, 1]);
assert_eq!(solver.valuation_string(), Some("1".to_string()));

solver.add_clause(&[-1, -1, -1]).unwrap();
assert_eq!(solver.solve(), Ok(Report::Unsatisfiable));
```
*/

use std::time::Instant;

use crate::{
    context::{Counters, SolveState, Solver},
    encoding::{EncodingTable, BLOCK_WIDTH},
    misc::log::targets::{self},
    procedures::clause_filter::process_clause,
    reports::Report,
    structures::{literal, strand::Strand},
    types::err::ErrorKind,
};

impl Solver {
    /// Determines the satisfiability of the clauses added to the solver.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        let start = Instant::now();
        let retain_stages = self.config.retain_stages.value;

        self.counters = Counters::default();
        self.stages.clear();

        let mut tube = self.initial_tube()?;
        log::info!(target: targets::SOLVE, "Initial assignments: {} molecules", tube.len());
        self.counters.tube_sizes.push(tube.len());
        if retain_stages {
            self.stages.push(tube.clone());
        }

        for (index, clause) in self.clauses.iter().enumerate() {
            self.state = SolveState::Evaluating(index);

            let filtered = process_clause(&tube, clause, &self.encodings)?;

            log::info!(target: targets::SOLVE,
                "After clause {} {clause}: {} molecules", index + 1, filtered.len());

            self.counters.molecules_removed += tube.len() - filtered.len();
            self.counters.tube_sizes.push(filtered.len());
            if retain_stages {
                self.stages.push(filtered.clone());
            }

            tube = filtered;

            if tube.is_empty() {
                self.state = SolveState::Unsatisfiable(index);
                break;
            }
        }

        if !tube.is_empty() {
            self.state = SolveState::Satisfiable;
        }

        self.tube = tube;
        self.counters.time = start.elapsed();

        let report = self.report();
        log::info!(target: targets::SOLVE, "Formula is {report}");
        Ok(report)
    }

    /// Decodes a molecule to the assignment it encodes, indexed from zero.
    ///
    /// Returns None if some block of the molecule does not encode a literal of its variable.
    pub fn decode(&self, molecule: &Strand) -> Option<Vec<bool>> {
        (1..=self.variable_count())
            .map(|variable| {
                let block = molecule.window(EncodingTable::offset(variable)?, BLOCK_WIDTH)?;
                self.encodings
                    .literal_of(variable, block)
                    .map(literal::polarity)
            })
            .collect()
    }

    /// A model of the formula, if the most recent solve found the formula satisfiable.
    ///
    /// Of the surviving molecules, the least (by order on bases) is decoded, and so the model is fixed by the encodings.
    pub fn model(&self) -> Option<Vec<bool>> {
        match self.state {
            SolveState::Satisfiable => self.decode(self.tube.least()?),
            _ => None,
        }
    }

    /// Every model of the formula, if the most recent solve found the formula satisfiable.
    ///
    /// Models are sorted, as vectors of booleans.
    pub fn models(&self) -> Vec<Vec<bool>> {
        if self.state != SolveState::Satisfiable {
            return Vec::default();
        }

        let mut models = self
            .tube
            .molecules()
            .filter_map(|molecule| self.decode(molecule))
            .collect::<Vec<_>>();
        models.sort_unstable();
        models
    }

    /// A model as a string of literals, in the style of DIMACS (e.g. `1 -2 3`).
    pub fn valuation_string(&self) -> Option<String> {
        let model = self.model()?;
        let literals = model
            .iter()
            .enumerate()
            .map(|(index, value)| literal::from_parts(index + 1, *value).to_string())
            .collect::<Vec<_>>();
        Some(literals.join(" "))
    }
}

#[cfg(test)]
mod solve_tests {
    use crate::{config::Config, context::Solver, reports::Report};

    #[test]
    fn no_clauses() {
        let mut solver = Solver::from_config(Config::default(), 2).unwrap();
        assert_eq!(solver.report(), Report::Unknown);

        assert_eq!(solver.solve(), Ok(Report::Satisfiable));
        assert_eq!(solver.models().len(), 4);
    }

    #[test]
    fn short_circuit() {
        let mut solver = Solver::from_config(Config::default(), 1).unwrap();
        solver.add_clause(&[1, 1, 1]).unwrap();
        solver.add_clause(&[-1, -1, -1]).unwrap();
        solver.add_clause(&[1, -1, 1]).unwrap();

        assert_eq!(solver.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(solver.state(), crate::context::SolveState::Unsatisfiable(1));
        assert_eq!(solver.counters.tube_sizes, vec![2, 1, 0]);
        assert_eq!(solver.counters.molecules_removed, 2);
        assert_eq!(solver.model(), None);
    }

    #[test]
    fn decode_every_assignment() {
        let solver = Solver::from_config(Config::default(), 3).unwrap();
        for index in 0..8 {
            let molecule = solver.assignment_encoding(index).unwrap();
            let model = solver.decode(&molecule).unwrap();
            let expected = (1..=3).map(|v| (index >> (3 - v)) & 1 == 1).collect::<Vec<_>>();
            assert_eq!(model, expected);
        }
    }
}
