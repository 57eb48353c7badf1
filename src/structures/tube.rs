//! Tubes, aka. a population of molecules.
//!
//! A tube is a set of [strands](Strand): adding a molecule already in the tube has no effect.
//! Selection operations (extraction, intersection) leave the tube as is and return a fresh tube.
//!
//! ```rust
//! # use molecular_sat::structures::{strand::{self, Strand}, tube::Tube};
//! # use std::str::FromStr;
//! let mut tube = Tube::new("T0");
//! tube.add(Strand::from_str("AAACCC").unwrap());
//! tube.add(Strand::from_str("CCCAAA").unwrap());
//! tube.add(Strand::from_str("ACCCAA").unwrap());
//!
//! let ccc = strand::bases_from_str("CCC").unwrap();
//! let extracted = tube.extract(&ccc);
//!
//! // The occurrence of CCC at offset 1 is not aligned to a block.
//! assert_eq!(extracted.len(), 2);
//! assert_eq!(tube.len(), 3);
//! ```

use std::{collections::HashSet, num::NonZeroUsize};

use crate::{
    encoding::BLOCK_WIDTH,
    structures::{
        base::Base,
        strand::{self, Strand},
    },
};

/// The block width, as a step between offsets.
const BLOCK_STEP: NonZeroUsize = match NonZeroUsize::new(BLOCK_WIDTH) {
    Some(step) => step,
    None => panic!("blocks have some width"),
};

/// A named set of molecules.
///
/// The name is a label for diagnostics only, and is ignored by equality.
#[derive(Clone, Debug)]
pub struct Tube {
    name: String,
    molecules: HashSet<Strand>,
}

impl Tube {
    /// An empty tube.
    pub fn new(name: impl Into<String>) -> Self {
        Tube {
            name: name.into(),
            molecules: HashSet::default(),
        }
    }

    /// The label of the tube.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a molecule to the tube, returning whether the molecule was not already present.
    pub fn add(&mut self, molecule: Strand) -> bool {
        self.molecules.insert(molecule)
    }

    pub fn is_empty(&self) -> bool {
        self.molecules.is_empty()
    }

    /// The number of (distinct) molecules in the tube.
    pub fn len(&self) -> usize {
        self.molecules.len()
    }

    pub fn contains(&self, molecule: &Strand) -> bool {
        self.molecules.contains(molecule)
    }

    /// An iterator over the molecules of the tube, order is not guaranteed.
    pub fn molecules(&self) -> impl Iterator<Item = &Strand> {
        self.molecules.iter()
    }

    /// The least molecule of the tube, by order on symbols.
    pub fn least(&self) -> Option<&Strand> {
        self.molecules.iter().min()
    }

    /// Molecules which contain `target` at an offset divisible by the [block width](BLOCK_WIDTH).
    pub fn extract(&self, target: &[Base]) -> Tube {
        self.extract_aligned(target, BLOCK_STEP)
    }

    /// Molecules which contain `target` at some offset divisible by `step`.
    ///
    /// A step of one finds `target` anywhere in a molecule.
    pub fn extract_aligned(&self, target: &[Base], step: NonZeroUsize) -> Tube {
        let mut extracted = Tube::new(format!("extract_{}", strand::bases_to_string(target)));

        for molecule in &self.molecules {
            let last_offset = match molecule.len().checked_sub(target.len()) {
                Some(offset) => offset,
                None => continue,
            };

            let found = (0..=last_offset)
                .step_by(step.get())
                .any(|offset| molecule.contains_at(target, offset));

            if found {
                extracted.add(molecule.clone());
            }
        }

        log::trace!(target: crate::misc::log::targets::TUBE,
            "{} of {} molecules extracted from {}", extracted.len(), self.len(), self.name);

        extracted
    }

    /// Molecules present both in the tube and in `other`.
    pub fn intersect(&self, other: &Tube) -> Tube {
        Tube {
            name: format!("intersect_{}_{}", self.name, other.name),
            molecules: self
                .molecules
                .intersection(&other.molecules)
                .cloned()
                .collect(),
        }
    }
}

impl PartialEq for Tube {
    fn eq(&self, other: &Self) -> bool {
        self.molecules == other.molecules
    }
}

impl Eq for Tube {}

impl Extend<Strand> for Tube {
    fn extend<I: IntoIterator<Item = Strand>>(&mut self, iter: I) {
        self.molecules.extend(iter)
    }
}

impl std::fmt::Display for Tube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tube {}: {} molecules", self.name, self.len())?;
        let mut molecules = self.molecules.iter().collect::<Vec<_>>();
        molecules.sort_unstable();
        for molecule in molecules {
            write!(f, "\n{molecule}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tube_tests {
    use std::str::FromStr;

    use super::*;

    fn tube_of(name: &str, molecules: &[&str]) -> Tube {
        let mut tube = Tube::new(name);
        for molecule in molecules {
            tube.add(Strand::from_str(molecule).unwrap());
        }
        tube
    }

    #[test]
    fn add_is_idempotent() {
        let mut tube = Tube::new("T0");
        assert!(tube.is_empty());

        assert!(tube.add(Strand::from_str("ACGTTT").unwrap()));
        assert!(!tube.add(Strand::from_str("ACGTTT").unwrap()));
        assert_eq!(tube.len(), 1);
    }

    #[test]
    fn extract_step_one() {
        let tube = tube_of("T0", &["AAACCC", "ACCCAA", "GGGTTT"]);
        let ccc = strand::bases_from_str("CCC").unwrap();

        let anywhere = tube.extract_aligned(&ccc, NonZeroUsize::MIN);
        assert_eq!(anywhere.len(), 2);
        assert_eq!(anywhere.name(), "extract_CCC");
    }

    #[test]
    fn extract_longer_than_molecule() {
        let tube = tube_of("T0", &["AAA"]);
        let target = strand::bases_from_str("AAAA").unwrap();
        assert!(tube.extract(&target).is_empty());
    }

    #[test]
    fn intersection() {
        let a = tube_of("a", &["AAA", "CCC", "GGG"]);
        let b = tube_of("b", &["CCC", "GGG", "TTT"]);
        let empty = Tube::new("empty");

        assert_eq!(a.intersect(&a), a);
        assert_eq!(a.intersect(&empty), empty);

        let both = a.intersect(&b);
        assert_eq!(both, tube_of("expected", &["CCC", "GGG"]));
        assert_eq!(both.name(), "intersect_a_b");
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn display_is_sorted() {
        let tube = tube_of("T0", &["TTT", "AAA"]);
        let display = tube.to_string();
        let mut lines = display.lines();

        assert_eq!(lines.next(), Some("Tube T0: 2 molecules"));
        assert_eq!(lines.next(), Some("5'-AAA-3'"));
    }
}
