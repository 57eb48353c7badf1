//! Literals, aka. a variable or its negation.
//!
//! As in DIMACS, a literal is a nonzero signed integer.
//! The absolute value of the integer is the variable (counted from one), and the sign is the polarity.
//!
//! ```rust
//! # use molecular_sat::structures::literal;
//! assert_eq!(literal::variable(-3), 3);
//! assert!(!literal::polarity(-3));
//! assert_eq!(literal::from_parts(3, false), -3);
//! ```

/// A literal, as a signed integer.
pub type Literal = isize;

/// A variable, counted from one.
pub type Variable = usize;

/// The variable of a literal.
pub fn variable(literal: Literal) -> Variable {
    literal.unsigned_abs()
}

/// The polarity of a literal, `true` for a positive literal.
pub fn polarity(literal: Literal) -> bool {
    literal.is_positive()
}

/// The literal of a variable with the given polarity.
pub fn from_parts(variable: Variable, polarity: bool) -> Literal {
    let literal = variable as Literal;
    match polarity {
        true => literal,
        false => -literal,
    }
}
