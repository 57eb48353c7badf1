//! The abstract elements of a solve and their representation.
//!
//! - [Bases](base) and [strands](strand) model molecules.
//! - [Tubes](tube) model a population of molecules.
//! - [Literals](literal) and [clauses](clause) model a 3-SAT formula.

pub mod base;
pub mod clause;
pub mod literal;
pub mod strand;
pub mod tube;
