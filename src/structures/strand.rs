//! Strands, aka. symbol sequences over the bases A, C, G, and T.
//!
//! A strand stores its symbols together with the complementary strand, derived once on construction.
//! The complement is derived data, and so equality, ordering, and hashing of strands are defined by the symbols alone.
//!
//! ```rust
//! # use molecular_sat::structures::strand::{self, Strand};
//! # use std::str::FromStr;
//! let strand = Strand::from_str("AGCT").unwrap();
//!
//! assert_eq!(strand.to_string(), "5'-AGCT-3'\n3'-TCGA-5'");
//! assert!(strand::is_complementary(strand.symbols(), strand.complement()));
//!
//! assert!(Strand::from_str("AGXT").is_err());
//! ```
//!
//! Construction fails on an empty sequence, as a strand always has some symbol.

use std::str::FromStr;

use crate::{structures::base::Base, types::err::SequenceError};

/// The complement of a sequence of bases: each base replaced by its pairing partner.
pub fn complement(symbols: &[Base]) -> Vec<Base> {
    symbols.iter().map(|base| base.complement()).collect()
}

/// Whether `other` is the complement of `strand`: equal length, and pairing at each position.
pub fn is_complementary(strand: &[Base], other: &[Base]) -> bool {
    strand.len() == other.len()
        && strand
            .iter()
            .zip(other)
            .all(|(base, partner)| base.complement() == *partner)
}

/// Reads a string of bases, failing on the first symbol outside of A, C, G, and T.
///
/// The empty string reads as the empty sequence.
pub fn bases_from_str(symbols: &str) -> Result<Vec<Base>, SequenceError> {
    symbols
        .chars()
        .enumerate()
        .map(|(position, symbol)| {
            Base::try_from(symbol).map_err(|symbol| SequenceError::InvalidSymbol { position, symbol })
        })
        .collect()
}

/// Writes a sequence of bases as a string.
pub fn bases_to_string(symbols: &[Base]) -> String {
    symbols.iter().map(|base| base.as_char()).collect()
}

/// A (non-empty) strand with its complement.
#[derive(Clone, Debug)]
pub struct Strand {
    symbols: Vec<Base>,
    complement: Vec<Base>,
}

impl Strand {
    /// A strand of the given symbols, or an error if there are no symbols.
    pub fn new(symbols: Vec<Base>) -> Result<Self, SequenceError> {
        match symbols.is_empty() {
            true => Err(SequenceError::Empty),
            false => Ok(Self::fresh(symbols)),
        }
    }

    /// A strand from symbols known to be non-empty.
    fn fresh(symbols: Vec<Base>) -> Self {
        let complement = complement(&symbols);
        Strand {
            symbols,
            complement,
        }
    }

    /// The symbols of the strand, read 5' to 3'.
    pub fn symbols(&self) -> &[Base] {
        &self.symbols
    }

    /// The complementary strand, aligned to the symbols (and so read 3' to 5').
    pub fn complement(&self) -> &[Base] {
        &self.complement
    }

    /// The number of symbols in the strand.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// The `width` symbols starting at `offset`, if the strand extends that far.
    pub fn window(&self, offset: usize, width: usize) -> Option<&[Base]> {
        self.symbols.get(offset..offset.checked_add(width)?)
    }

    /// Whether `target` occurs in the strand at exactly `offset`.
    pub fn contains_at(&self, target: &[Base], offset: usize) -> bool {
        self.window(offset, target.len()) == Some(target)
    }

    /// The symbols of the strand as a string.
    pub fn as_string(&self) -> String {
        bases_to_string(&self.symbols)
    }

    /// Cuts the strand at every occurrence of a recognition site.
    ///
    /// Occurrences are found left to right without overlap, each site is removed, and empty segments are dropped.
    ///
    /// ```rust
    /// # use molecular_sat::structures::strand::{self, Strand};
    /// # use std::str::FromStr;
    /// let strand = Strand::from_str("ATCGGAATTCGGAATTC").unwrap();
    /// let eco_r1 = strand::bases_from_str("GAATTC").unwrap();
    ///
    /// let segments = strand.cleave(&eco_r1).unwrap();
    /// let segments = segments.iter().map(|s| s.as_string()).collect::<Vec<_>>();
    /// assert_eq!(segments, vec!["ATCG", "G"]);
    /// ```
    pub fn cleave(&self, site: &[Base]) -> Result<Vec<Strand>, SequenceError> {
        if site.is_empty() {
            return Err(SequenceError::Empty);
        }

        let mut segments = Vec::default();
        let mut segment_start = 0;
        let mut index = 0;

        while index + site.len() <= self.symbols.len() {
            if self.symbols[index..].starts_with(site) {
                if segment_start < index {
                    segments.push(Strand::fresh(self.symbols[segment_start..index].to_vec()));
                }
                index += site.len();
                segment_start = index;
            } else {
                index += 1;
            }
        }

        if segment_start < self.symbols.len() {
            segments.push(Strand::fresh(self.symbols[segment_start..].to_vec()));
        }

        Ok(segments)
    }
}

impl PartialEq for Strand {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for Strand {}

impl std::hash::Hash for Strand {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.symbols.hash(state);
    }
}

impl PartialOrd for Strand {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Strand {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.symbols.cmp(&other.symbols)
    }
}

impl FromStr for Strand {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strand::new(bases_from_str(s)?)
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "5'-{}-3'\n3'-{}-5'",
            bases_to_string(&self.symbols),
            bases_to_string(&self.complement)
        )
    }
}

#[cfg(test)]
mod strand_tests {
    use super::*;

    #[test]
    fn double_complement() {
        for sequence in ["A", "ACGT", "TTTTGCA", "GATTACA"] {
            let bases = bases_from_str(sequence).unwrap();
            assert_eq!(complement(&complement(&bases)), bases);
        }
    }

    #[test]
    fn invalid_symbol_position() {
        assert_eq!(
            Strand::from_str("ACNT"),
            Err(SequenceError::InvalidSymbol {
                position: 2,
                symbol: 'N'
            })
        );
        assert!(Strand::from_str("acgt").is_err());
        assert_eq!(Strand::from_str(""), Err(SequenceError::Empty));
    }

    #[test]
    fn identity_ignores_complement() {
        use std::collections::HashSet;

        let a = Strand::from_str("GATTACA").unwrap();
        let b = Strand::new(bases_from_str("GATTACA").unwrap()).unwrap();

        let set = HashSet::from([a, b]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn complementary_pairs() {
        let strand = bases_from_str("AGCT").unwrap();
        assert!(is_complementary(&strand, &bases_from_str("TCGA").unwrap()));
        assert!(!is_complementary(&strand, &bases_from_str("TCGT").unwrap()));
        assert!(!is_complementary(&strand, &bases_from_str("TCG").unwrap()));
    }

    #[test]
    fn windows() {
        let strand = Strand::from_str("AAACCCGGG").unwrap();
        let ccc = bases_from_str("CCC").unwrap();

        assert!(strand.contains_at(&ccc, 3));
        assert!(!strand.contains_at(&ccc, 2));
        assert_eq!(strand.window(7, 3), None);
        assert_eq!(strand.window(usize::MAX, 3), None);
    }

    #[test]
    fn cleave_edges() {
        let site = bases_from_str("GG").unwrap();

        let whole = Strand::from_str("GGACGG").unwrap().cleave(&site).unwrap();
        assert_eq!(whole.len(), 1);
        assert_eq!(whole[0].as_string(), "AC");

        let nothing = Strand::from_str("GGGG").unwrap().cleave(&site).unwrap();
        assert!(nothing.is_empty());

        let untouched = Strand::from_str("ACT").unwrap().cleave(&site).unwrap();
        assert_eq!(untouched[0].as_string(), "ACT");

        assert_eq!(
            Strand::from_str("ACT").unwrap().cleave(&[]),
            Err(SequenceError::Empty)
        );
    }
}
