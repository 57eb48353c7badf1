//! Filtering a tube by a clause.
//!
//! A molecule is kept if, for some literal of the clause, the block at the position of the variable of the literal is the block of the (signed) literal.
//! That is, if the assignment encoded by the molecule makes some literal of the clause true.
//!
//! In the molecular protocol this is an affinity extraction for each literal, followed by the union of the extractions.
//! Here, the position of each block is known, and so a single comparison per literal suffices.

use crate::{
    encoding::EncodingTable,
    misc::log::targets::{self},
    structures::{clause::Clause, literal, tube::Tube},
    types::err::ClauseError,
};

/// A fresh tube of the molecules in `tube` which satisfy `clause`, given the encodings of each literal.
///
/// Returns an error if some literal of the clause has no encoding.
pub fn process_clause(
    tube: &Tube,
    clause: &Clause,
    encodings: &EncodingTable,
) -> Result<Tube, ClauseError> {
    let mut sites = Vec::with_capacity(clause.literals().len());
    for &literal in clause.literals() {
        let offset = EncodingTable::offset(literal::variable(literal));
        match (encodings.block(literal), offset) {
            (Some(block), Some(offset)) => sites.push((literal, offset, block)),
            _ => return Err(ClauseError::OutOfRange(literal)),
        }
    }

    let mut result = Tube::new(format!("clause_{clause}"));

    for molecule in tube.molecules() {
        let satisfied = sites
            .iter()
            .find(|(_, offset, block)| molecule.contains_at(block.as_slice(), *offset));

        match satisfied {
            Some((literal, _, _)) => {
                log::trace!(target: targets::FILTER,
                    "Keeping molecule: {} (satisfies literal {literal})", molecule.as_string());
                result.add(molecule.clone());
            }
            None => {
                log::trace!(target: targets::FILTER,
                    "Removing molecule: {} (satisfies no literals)", molecule.as_string());
            }
        }
    }

    Ok(result)
}
