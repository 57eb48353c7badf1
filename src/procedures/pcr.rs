/*!
A toy simulation of copying fidelity during PCR amplification.

Each cycle separates every duplex into its two strands, and each strand is used as a template for the synthesis of a fresh partner strand.
So, the population of duplexes doubles each cycle.

During synthesis each base is paired correctly, except with probability given by the error rate, in which case one of the three other bases is chosen uniformly.
Errors are inherited: a strand synthesized with an error is a template in the next cycle.

The simulation is independent of the solver, and no chemistry (annealing temperatures, primer design, etc.) is modelled.

```rust
# use molecular_sat::procedures::pcr;
# use molecular_sat::generic::random::MinimalPCG32;
# use molecular_sat::structures::strand::Strand;
# use rand::SeedableRng;
# use std::str::FromStr;
let mut rng = MinimalPCG32::from_seed(0u64.to_le_bytes());
let strand = Strand::from_str("AGCT").unwrap();

let products = pcr::amplify(&strand, 3, 0.0, &mut rng).unwrap();
assert_eq!(products.len(), 8);
assert_eq!(pcr::faithful_count(&products), 8);

assert!(pcr::amplify(&strand, 3, 1.5, &mut rng).is_err());
```
*/

use rand::Rng;

use crate::{
    config::{Config, ErrorRate},
    misc::log::targets::{self},
    structures::{
        base::Base,
        strand::{self, Strand},
    },
    types::err::{self, ErrorKind},
};

/// A double strand: a template paired with a strand synthesized from the template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Duplex {
    pub template: Strand,
    pub synthesized: Strand,
}

impl Duplex {
    /// A duplex of a strand and its (exact) complement.
    pub fn from_strand(strand: &Strand) -> Result<Self, ErrorKind> {
        Ok(Duplex {
            template: strand.clone(),
            synthesized: Strand::new(strand.complement().to_vec())?,
        })
    }

    /// Whether the synthesized strand is the complement of the template.
    pub fn is_faithful(&self) -> bool {
        strand::is_complementary(self.template.symbols(), self.synthesized.symbols())
    }
}

impl std::fmt::Display for Duplex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "5'-{}-3'\n3'-{}-5'",
            self.template.as_string(),
            self.synthesized.as_string()
        )
    }
}

/// The base paired with `base` during synthesis, with a copying error at the given rate.
fn pair(base: Base, error_rate: ErrorRate, rng: &mut impl Rng) -> Base {
    let partner = base.complement();
    if !rng.random_bool(error_rate) {
        return partner;
    }

    let mismatches = Base::ALL
        .into_iter()
        .filter(|other| *other != partner)
        .collect::<Vec<_>>();
    mismatches[rng.random_range(0..mismatches.len())]
}

/// Synthesizes a partner for the template, with a copying error for each base at the given rate.
pub fn synthesize(
    template: &Strand,
    error_rate: ErrorRate,
    rng: &mut impl Rng,
) -> Result<Strand, ErrorKind> {
    if !(0.0..=1.0).contains(&error_rate) {
        return Err(err::PcrError::ErrorRate.into());
    }

    let symbols = template
        .symbols()
        .iter()
        .map(|base| pair(*base, error_rate, rng))
        .collect();

    Ok(Strand::new(symbols)?)
}

/// The duplexes after `cycles` rounds of amplification of a strand (and its complement).
pub fn amplify(
    strand: &Strand,
    cycles: u32,
    error_rate: ErrorRate,
    rng: &mut impl Rng,
) -> Result<Vec<Duplex>, ErrorKind> {
    if !(0.0..=1.0).contains(&error_rate) {
        return Err(err::PcrError::ErrorRate.into());
    }

    let mut population = vec![Duplex::from_strand(strand)?];

    for cycle in 1..=cycles {
        let mut fresh_population = Vec::with_capacity(population.len() * 2);

        for duplex in population {
            for template in [duplex.template, duplex.synthesized] {
                let synthesized = synthesize(&template, error_rate, rng)?;
                fresh_population.push(Duplex {
                    template,
                    synthesized,
                });
            }
        }

        population = fresh_population;
        log::debug!(target: targets::PCR,
            "Cycle {cycle}: {} molecules, {} faithful", population.len(), faithful_count(&population));
    }

    Ok(population)
}

/// Amplification with the cycle count and error rate of a config.
pub fn amplify_with_config(
    strand: &Strand,
    config: &Config,
    rng: &mut impl Rng,
) -> Result<Vec<Duplex>, ErrorKind> {
    amplify(
        strand,
        config.pcr_cycles.value,
        config.pcr_error_rate.value,
        rng,
    )
}

/// The number of duplexes without a copying error in the synthesized strand.
pub fn faithful_count(duplexes: &[Duplex]) -> usize {
    duplexes.iter().filter(|duplex| duplex.is_faithful()).count()
}

#[cfg(test)]
mod pcr_tests {
    use std::str::FromStr;

    use rand::SeedableRng;

    use super::*;
    use crate::generic::random::MinimalPCG32;

    #[test]
    fn certain_error() {
        let mut rng = MinimalPCG32::from_seed(9u64.to_le_bytes());
        let template = Strand::from_str("AACCGGTT").unwrap();

        let synthesized = synthesize(&template, 1.0, &mut rng).unwrap();
        for (base, paired) in template.symbols().iter().zip(synthesized.symbols()) {
            assert_ne!(base.complement(), *paired);
        }
    }

    #[test]
    fn zero_cycles() {
        let mut rng = MinimalPCG32::from_seed(9u64.to_le_bytes());
        let strand = Strand::from_str("GATTACA").unwrap();

        let products = amplify(&strand, 0, 0.5, &mut rng).unwrap();
        assert_eq!(products, vec![Duplex::from_strand(&strand).unwrap()]);
    }

    #[test]
    fn templates_are_kept() {
        let mut rng = MinimalPCG32::from_seed(9u64.to_le_bytes());
        let strand = Strand::from_str("GATTACA").unwrap();

        let products = amplify(&strand, 1, 1.0, &mut rng).unwrap();
        assert_eq!(products[0].template, strand);
        assert_eq!(faithful_count(&products), 0);
    }

    #[test]
    fn invalid_rate() {
        let mut rng = MinimalPCG32::from_seed(9u64.to_le_bytes());
        let strand = Strand::from_str("GATTACA").unwrap();

        assert_eq!(
            amplify(&strand, 1, f64::NAN, &mut rng),
            Err(ErrorKind::Pcr(err::PcrError::ErrorRate))
        );
    }
}
