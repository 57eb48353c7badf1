use std::io::BufRead;

use crate::{
    config::Config,
    context::Solver,
    misc::log::targets::{self},
    structures::literal::Literal,
    types::err::{self, ErrorKind},
};

/// Information from a DIMACS input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserInfo {
    /// The variable count of the problem specification.
    pub expected_variables: usize,

    /// The clause count of the problem specification.
    pub expected_clauses: usize,

    /// The number of clauses read.
    pub added_clauses: usize,
}

/// Reads the counts from a problem line of the form `p cnf <variables> <clauses>`.
fn problem_specification(line: &str) -> Result<(usize, usize), ErrorKind> {
    let mut details = line.split_whitespace();

    if details.next() != Some("p") || details.next() != Some("cnf") {
        return Err(err::ParseError::ProblemSpecification.into());
    }

    let mut count = || -> Result<usize, ErrorKind> {
        match details.next().map(|string| string.parse::<usize>()) {
            Some(Ok(count)) => Ok(count),
            _ => Err(err::ParseError::ProblemSpecification.into()),
        }
    };

    let variables = count()?;
    let clauses = count()?;
    Ok((variables, clauses))
}

impl Solver {
    /// Builds a solver from a DIMACS 3-CNF input.
    ///
    /// The problem specification is required, as encodings are drawn for each variable before any clause is read.
    /// Lines beginning with `c` are comments, and a line beginning with `%` ends the formula.
    ///
    /// ```rust
    /// # use molecular_sat::context::Solver;
    /// # use molecular_sat::config::Config;
    /// # use molecular_sat::reports::Report;
    /// # use std::io::Write;
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// c x1 and x2 may not differ, and may not agree
    /// p cnf 2 4
    ///  1  1  2 0
    /// -1 -1 -2 0
    ///  1 -2 -2 0
    /// -1  2  2 0
    /// ");
    ///
    /// let (mut solver, info) = Solver::from_dimacs(Config::default(), dimacs.as_slice()).unwrap();
    /// assert_eq!(info.added_clauses, 4);
    /// assert_eq!(solver.solve(), Ok(Report::Unsatisfiable));
    /// ```
    pub fn from_dimacs(
        config: Config,
        mut reader: impl BufRead,
    ) -> Result<(Self, ParserInfo), ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;

        // first phase, read until the problem specification
        let (expected_variables, expected_clauses) = loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => return Err(err::ParseError::MissingProblem.into()),
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter).into()),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => continue,
                Some('p') => break problem_specification(&buffer)?,
                Some(_) => return Err(err::ParseError::MissingProblem.into()),
            }
        };

        log::info!(target: targets::PARSE,
            "Expecting {expected_variables} variables and {expected_clauses} clauses");

        let mut solver = Solver::from_config(config, expected_variables)?;
        let mut clause_buffer: Vec<Literal> = Vec::with_capacity(3);
        let mut added_clauses = 0;

        // second phase, read until the formula ends
        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter).into()),
            }

            match buffer.trim_start().chars().next() {
                Some('%') => break 'formula_loop,
                Some('c') | None => {}
                Some(_) => {
                    for item in buffer.split_whitespace() {
                        match item {
                            "0" => {
                                let the_clause = std::mem::take(&mut clause_buffer);
                                solver.add_clause(&the_clause)?;
                                added_clauses += 1;
                            }
                            _ => match item.parse::<Literal>() {
                                Ok(literal) => clause_buffer.push(literal),
                                Err(_) => return Err(err::ParseError::Literal(line_counter).into()),
                            },
                        }
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            return Err(err::ParseError::TrailingLiterals.into());
        }

        if added_clauses != expected_clauses {
            log::warn!(target: targets::PARSE,
                "Read {added_clauses} clauses, though {expected_clauses} were expected");
        }

        let info = ParserInfo {
            expected_variables,
            expected_clauses,
            added_clauses,
        };

        Ok((solver, info))
    }
}

#[cfg(test)]
mod dimacs_tests {
    use super::*;
    use crate::types::err::{ClauseError, ParseError};

    #[test]
    fn problem_line() {
        assert_eq!(problem_specification("p cnf 3 2\n"), Ok((3, 2)));
        assert!(problem_specification("p dnf 3 2").is_err());
        assert!(problem_specification("p cnf three 2").is_err());
        assert!(problem_specification("p cnf 3").is_err());
    }

    #[test]
    fn missing_problem() {
        let result = Solver::from_dimacs(Config::default(), "c only\n1 2 3 0\n".as_bytes());
        assert!(matches!(
            result,
            Err(ErrorKind::Parse(ParseError::MissingProblem))
        ));
    }

    #[test]
    fn short_clause() {
        let result = Solver::from_dimacs(Config::default(), "p cnf 2 1\n1 2 0\n".as_bytes());
        assert!(matches!(
            result,
            Err(ErrorKind::Clause(ClauseError::Length(2)))
        ));
    }

    #[test]
    fn trailing_literals() {
        let result = Solver::from_dimacs(Config::default(), "p cnf 3 1\n1 2 3".as_bytes());
        assert!(matches!(
            result,
            Err(ErrorKind::Parse(ParseError::TrailingLiterals))
        ));
    }

    #[test]
    fn bad_literal() {
        let result = Solver::from_dimacs(Config::default(), "p cnf 3 1\n1 x 3 0\n".as_bytes());
        assert!(matches!(result, Err(ErrorKind::Parse(ParseError::Literal(2)))));
    }

    #[test]
    fn clauses_over_lines() {
        let input = "c comment\n\np cnf 3 2\n1 2\n3 0 -1\n2 3 0\n%\n0\n";
        let (solver, info) = Solver::from_dimacs(Config::default(), input.as_bytes()).unwrap();

        assert_eq!(solver.variable_count(), 3);
        assert_eq!(info.added_clauses, 2);
        assert_eq!(solver.clauses()[1].literals(), &[-1, 2, 3]);
    }
}
