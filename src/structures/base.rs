//! The four symbols of a strand.
//!
//! ```rust
//! # use molecular_sat::structures::base::Base;
//! assert_eq!(Base::A.complement(), Base::T);
//! assert_eq!(Base::try_from('G'), Ok(Base::G));
//! assert!(Base::try_from('U').is_err());
//! ```

/// A nucleotide base, paired by Watson-Crick complementarity: A with T, and C with G.
///
/// Bases are ordered alphabetically, and so strands are ordered lexicographically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Base {
    A,
    C,
    G,
    T,
}

impl Base {
    /// Every base, in order.
    pub const ALL: [Base; 4] = [Base::A, Base::C, Base::G, Base::T];

    /// The pairing partner of the base.
    pub fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::C => Self::G,
            Self::G => Self::C,
            Self::T => Self::A,
        }
    }

    /// The base as an (uppercase) character.
    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::C => 'C',
            Self::G => 'G',
            Self::T => 'T',
        }
    }
}

/// Conversion is case-sensitive, and the error is the character which is not a base.
impl TryFrom<char> for Base {
    type Error = char;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'A' => Ok(Self::A),
            'C' => Ok(Self::C),
            'G' => Ok(Self::G),
            'T' => Ok(Self::T),
            _ => Err(symbol),
        }
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod base_tests {
    use super::*;

    #[test]
    fn complement_is_an_involution() {
        for base in Base::ALL {
            assert_ne!(base, base.complement());
            assert_eq!(base, base.complement().complement());
        }
    }

    #[test]
    fn char_round_trip() {
        for base in Base::ALL {
            assert_eq!(Base::try_from(base.as_char()), Ok(base));
        }
        assert_eq!(Base::try_from('a'), Err('a'));
    }
}
