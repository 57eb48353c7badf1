//! Error types used in the library.
//!
//! - Sequence and clause errors follow from input which does not describe a strand or a 3-SAT clause.
//! - Encoding errors follow from a request for more variables than the block alphabet can keep apart.
//! - None of the errors are handled internally, each is returned to the caller.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::literal::Literal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Build(BuildError),
    Clause(ClauseError),
    Encoding(EncodingError),
    Parse(ParseError),
    Pcr(PcrError),
    Sequence(SequenceError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Build(e) => write!(f, "build error: {e:?}"),
            Self::Clause(e) => write!(f, "invalid clause: {e:?}"),
            Self::Encoding(e) => write!(f, "encoding error: {e:?}"),
            Self::Parse(e) => write!(f, "parse error: {e:?}"),
            Self::Pcr(e) => write!(f, "pcr error: {e:?}"),
            Self::Sequence(e) => write!(f, "invalid sequence: {e:?}"),
        }
    }
}

/// Noted errors when building a solver.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A solver requires at least one variable.
    NoVariables,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// A clause which is not a 3-SAT clause over the variables of a solver.
///
/// The whole clause is rejected, no part of it is kept.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseError {
    /// The clause has the given number of literals, rather than three.
    Length(usize),

    /// Zero is not a literal.
    ZeroLiteral,

    /// The variable of the literal is greater than the variable count of the solver.
    OutOfRange(Literal),
}

impl From<ClauseError> for ErrorKind {
    fn from(e: ClauseError) -> Self {
        ErrorKind::Clause(e)
    }
}

/// Errors while drawing blocks for literals.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EncodingError {
    /// No block distinct from (the complements of) every used block was found for the literal.
    ///
    /// Either the attempt budget was spent, or the block space is known to be exhausted.
    SpaceExhausted { literal: Literal, attempts: u32 },
}

impl From<EncodingError> for ErrorKind {
    fn from(e: EncodingError) -> Self {
        ErrorKind::Encoding(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// No problem specification was found before the formula.
    ///
    /// Encodings are drawn when a solver is built, and so the variable count is required upfront.
    MissingProblem,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// Something other than an integer was found where a literal was expected, at the given line.
    Literal(usize),

    /// The input ended with literals that were not terminated by a `0`.
    TrailingLiterals,

    /// Something other than an integer was found in a clause given outside of a file, as the given (counting from one) clause.
    InlineLiteral(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors from a PCR simulation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PcrError {
    /// The error rate is not a probability.
    ErrorRate,
}

impl From<PcrError> for ErrorKind {
    fn from(e: PcrError) -> Self {
        ErrorKind::Pcr(e)
    }
}

/// Input which does not describe a strand.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SequenceError {
    /// A symbol outside of A, C, G, and T, at the given position.
    InvalidSymbol { position: usize, symbol: char },

    /// An empty sequence, where some non-empty sequence was required.
    Empty,
}

impl From<SequenceError> for ErrorKind {
    fn from(e: SequenceError) -> Self {
        ErrorKind::Sequence(e)
    }
}
