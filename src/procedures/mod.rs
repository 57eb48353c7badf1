//! Procedures of a solve, and supporting simulations.
//!
//! - [initial_tube] generates the encoding of every assignment.
//! - [clause_filter] narrows a tube to the molecules which satisfy a clause.
//! - [solve] chains the two, and decodes models from surviving molecules.
//! - [pcr] simulates copying fidelity during amplification, independent of a solve.

pub mod clause_filter;
pub mod initial_tube;
pub mod pcr;
pub mod solve;
