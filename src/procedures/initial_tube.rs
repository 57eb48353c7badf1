//! The initial tube, of every assignment.
//!
//! Assignments are enumerated as a binary counter over the variables, with variable one as the most significant bit.
//! So, for two variables, the order is (false, false), (false, true), (true, false), (true, true).
//! And, the encoding of an assignment is the concatenation of the block of each literal made true, in variable order.

use crate::{
    context::Solver,
    encoding::BLOCK_WIDTH,
    misc::log::targets::{self},
    structures::{literal, strand::Strand, tube::Tube},
    types::err::{self, ErrorKind},
};

impl Solver {
    /// The value of `variable` in the assignment at `index` of the enumeration.
    fn assignment_value(&self, index: usize, variable: usize) -> bool {
        (index >> (self.variable_count() - variable)) & 1 == 1
    }

    /// The encoding of the assignment at `index` of the enumeration.
    pub fn assignment_encoding(&self, index: usize) -> Result<Strand, ErrorKind> {
        let mut symbols = Vec::with_capacity(self.variable_count() * BLOCK_WIDTH);

        for variable in 1..=self.variable_count() {
            let literal = literal::from_parts(variable, self.assignment_value(index, variable));
            match self.encodings.block(literal) {
                Some(block) => symbols.extend_from_slice(block),
                None => return Err(err::ClauseError::OutOfRange(literal).into()),
            }
        }

        Ok(Strand::new(symbols)?)
    }

    /// A tube of the encoding of every assignment to the variables of the solver.
    pub fn initial_tube(&self) -> Result<Tube, ErrorKind> {
        let assignment_count = 1_usize << self.variable_count();
        let mut tube = Tube::new("T0");

        for index in 0..assignment_count {
            let molecule = self.assignment_encoding(index)?;
            log::trace!(target: targets::SOLVE, "Generated molecule: {}", molecule.as_string());
            tube.add(molecule);
        }

        Ok(tube)
    }
}
