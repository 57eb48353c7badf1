//! A simulation of molecular (DNA) computing applied to 3-SAT.
//!
//! molecular_sat determines the satisfiability of formulas in 3-CNF the way an Adleman-style molecular computer would: by generating every candidate assignment as a strand in a test tube, and then removing, clause by clause, each strand which encodes an assignment falsifying the clause.
//! If the tube is ever empty the formula is unsatisfiable, and otherwise any surviving strand encodes a model.
//!
//! The simulation is abstract.
//! Strands are sequences of bases, tubes are sets of strands, and no chemistry is modelled.
//! Nor is there any pretence of efficiency: the initial tube holds 2<sup>n</sup> strands for a formula of n variables.
//!
//! # Orientation
//!
//! The library is designed around a [solver](crate::context).
//!
//! - On being built a solver draws an [encoding](crate::encoding) for each literal: a block of three bases, distinct from (and not complementary to) the block of any other literal.
//! - Clauses are added [programatically](crate::context::Solver::add_clause) or through a [DIMACS](crate::context::Solver::from_dimacs) representation of a formula.
//! - A [solve](crate::procedures::solve) generates the initial tube and [filters](crate::procedures::clause_filter) it by each clause.
//!
//! The elements of a solve (bases, strands, tubes, literals, clauses) are found in [structures].
//! A [PCR simulation](crate::procedures::pcr), independent of a solve, is also included.
//!
//! # Examples
//!
//! + Find a model of a satisfiable formula.
//!
//! ```rust
//! # use molecular_sat::config::Config;
//! # use molecular_sat::context::Solver;
//! # use molecular_sat::reports::Report;
//! let mut solver = Solver::from_config(Config::default(), 3).unwrap();
//!
//! solver.add_clause(&[1, 2, 3]).unwrap();
//! solver.add_clause(&[-1, 2, 3]).unwrap();
//! solver.add_clause(&[-2, -2, -2]).unwrap();
//!
//! assert_eq!(solver.solve(), Ok(Report::Satisfiable));
//! assert_eq!(solver.models(), vec![vec![false, false, true], vec![true, false, true]]);
//! ```
//!
//! + Identify an unsatisfiable formula.
//!
//! ```rust
//! # use molecular_sat::config::Config;
//! # use molecular_sat::context::Solver;
//! # use molecular_sat::reports::Report;
//! let mut solver = Solver::from_config(Config::default(), 2).unwrap();
//!
//! for clause in [[1, 1, 2], [-1, -1, -2], [1, -2, -2], [-1, 2, 2]] {
//!     solver.add_clause(&clause).unwrap();
//! }
//!
//! assert_eq!(solver.solve(), Ok(Report::Unsatisfiable));
//! assert!(solver.tube().is_empty());
//! ```
//!
//! # Capacity
//!
//! Blocks are three bases wide, and so at most [sixteen](crate::encoding::MAX_VARIABLES) variables can be given distinct encodings.
//! Encoding draws are bounded, and a request beyond capacity is an [error](crate::types::err::EncodingError).
//!
//! # Logs
//!
//! Calls to [log!](log) are made with a variety of targets, in order to help narrow output to relevant parts of the library.
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - The size of the tube after each clause can be found with `RUST_LOG=solve=info …`
//! - Each molecule kept or removed can be found with `RUST_LOG=filter=trace …`
//!
//! The targets are listed in [misc::log].

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod encoding;
pub mod reports;
pub mod structures;
pub mod types;

pub mod generic;

pub mod misc;
