/*!
The encoding of literals as blocks of bases.

Each variable is given two blocks: one for the positive literal and one for the negative literal.
The encoding of an assignment to every variable is then the concatenation of the block of the literal made true, for each variable in order, and so the block of variable `v` is found at offset `(v - 1) * BLOCK_WIDTH` of the encoding.

# Distinct blocks

Blocks are drawn at random, and a block is kept only if it differs from every block used so far and from the complement of every block used so far.
So, no two literals share a block, and no literal has a block complementary to the block of another literal.

# Capacity

With [BLOCK_WIDTH] three there are 64 blocks.
No block is its own complement (no base is its own partner), so the blocks form 32 complementary pairs, and each literal uses up a pair.
As a consequence, at most 32 literals, and so [MAX_VARIABLES] sixteen variables, can be encoded.

Draws for a literal are bounded by an attempt count.
As the ceiling is approached most draws are rejected (for the last literal of sixteen variables, 62 of every 64), and on exceeding the attempt count [SpaceExhausted](crate::types::err::EncodingError::SpaceExhausted) is returned.
A request for more than [MAX_VARIABLES] fails immediately with the same error.

```rust
# use molecular_sat::encoding::EncodingTable;
# use molecular_sat::generic::random::MinimalPCG32;
# use rand::SeedableRng;
let mut rng = MinimalPCG32::from_seed(7u64.to_le_bytes());
let table = EncodingTable::generate(3, 4096, &mut rng).unwrap();

assert_eq!(table.variable_count(), 3);
assert_ne!(table.block(2), table.block(-2));

let negative_two = table.block(-2).unwrap();
assert_eq!(table.literal_of(2, negative_two), Some(-2));

assert!(EncodingTable::generate(17, 4096, &mut rng).is_err());
```
*/

use std::collections::HashSet;

use rand::Rng;

use crate::{
    misc::log::targets::{self},
    structures::{
        base::Base,
        literal::{self, Literal, Variable},
        strand,
    },
    types::err::EncodingError,
};

/// The number of bases in the block of a literal.
pub const BLOCK_WIDTH: usize = 3;

/// The encoding of a literal.
pub type Block = [Base; BLOCK_WIDTH];

/// The number of distinct blocks.
pub const BLOCK_SPACE: usize = 64;

/// The most variables for which distinct blocks exist.
///
/// Each literal uses a block and its complement, and each variable has two literals.
pub const MAX_VARIABLES: usize = BLOCK_SPACE / 4;

/// The blocks of each literal of a formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodingTable {
    /// The block of the positive literal of variable `v` at index `v - 1`.
    positive: Vec<Block>,

    /// The block of the negative literal of variable `v` at index `v - 1`.
    negative: Vec<Block>,
}

/// The complement of a block.
pub fn block_complement(block: &Block) -> Block {
    block.map(Base::complement)
}

/// Whether two blocks are identical, or one is the complement of the other.
fn similar(block: &Block, other: &Block) -> bool {
    block == other || strand::is_complementary(block, other)
}

/// Whether a candidate block may be used, given the blocks (and complements) used so far.
pub fn is_distinct(candidate: &Block, used: &HashSet<Block>) -> bool {
    if used.contains(candidate) || used.contains(&block_complement(candidate)) {
        return false;
    }
    !used.iter().any(|used_block| similar(candidate, used_block))
}

/// A block drawn uniformly from the [BLOCK_SPACE].
pub fn random_block(rng: &mut impl Rng) -> Block {
    std::array::from_fn(|_| Base::ALL[rng.random_range(0..Base::ALL.len())])
}

/// Draws blocks until one is distinct from every used block, or `attempts` draws have been made.
fn draw_distinct(
    literal: Literal,
    used: &mut HashSet<Block>,
    attempts: u32,
    rng: &mut impl Rng,
) -> Result<Block, EncodingError> {
    for attempt in 1..=attempts {
        let candidate = random_block(rng);
        if is_distinct(&candidate, used) {
            log::trace!(target: targets::ENCODING, "Block for {literal} found on draw {attempt}");
            used.insert(candidate);
            used.insert(block_complement(&candidate));
            return Ok(candidate);
        }
    }

    log::warn!(target: targets::ENCODING, "No block for {literal} within {attempts} draws");
    Err(EncodingError::SpaceExhausted { literal, attempts })
}

impl EncodingTable {
    /// Draws a positive and a negative block for each variable in `1..=variable_count`, in order.
    ///
    /// At most `attempts` draws are made for each literal.
    pub fn generate(
        variable_count: usize,
        attempts: u32,
        rng: &mut impl Rng,
    ) -> Result<Self, EncodingError> {
        if variable_count > MAX_VARIABLES {
            log::warn!(target: targets::ENCODING,
                "{variable_count} variables requested, beyond the capacity of {MAX_VARIABLES}");
            return Err(EncodingError::SpaceExhausted {
                literal: (MAX_VARIABLES + 1) as Literal,
                attempts: 0,
            });
        }

        let mut used = HashSet::with_capacity(4 * variable_count);
        let mut positive = Vec::with_capacity(variable_count);
        let mut negative = Vec::with_capacity(variable_count);

        for variable in 1..=variable_count {
            let p = literal::from_parts(variable, true);
            positive.push(draw_distinct(p, &mut used, attempts, rng)?);

            let n = literal::from_parts(variable, false);
            negative.push(draw_distinct(n, &mut used, attempts, rng)?);

            log::debug!(target: targets::ENCODING,
                "Variable {variable}: positive {}, negative {}",
                strand::bases_to_string(&positive[variable - 1]),
                strand::bases_to_string(&negative[variable - 1]));
        }

        Ok(EncodingTable { positive, negative })
    }

    /// The number of variables encoded.
    pub fn variable_count(&self) -> usize {
        self.positive.len()
    }

    /// The block of a literal, if the variable of the literal is encoded.
    pub fn block(&self, literal: Literal) -> Option<&Block> {
        let index = literal::variable(literal).checked_sub(1)?;
        match literal::polarity(literal) {
            true => self.positive.get(index),
            false => self.negative.get(index),
        }
    }

    /// The literal of `variable` encoded by `block`, if any.
    pub fn literal_of(&self, variable: Variable, block: &[Base]) -> Option<Literal> {
        let index = variable.checked_sub(1)?;
        if self.positive.get(index)?.as_slice() == block {
            Some(literal::from_parts(variable, true))
        } else if self.negative.get(index)?.as_slice() == block {
            Some(literal::from_parts(variable, false))
        } else {
            None
        }
    }

    /// The offset of the block of a variable within an assignment encoding, or None for variable zero.
    pub fn offset(variable: Variable) -> Option<usize> {
        variable.checked_sub(1)?.checked_mul(BLOCK_WIDTH)
    }

    /// An iterator over every literal and its block, ordered by variable, with the positive literal first.
    pub fn blocks(&self) -> impl Iterator<Item = (Literal, &Block)> {
        self.positive
            .iter()
            .zip(&self.negative)
            .enumerate()
            .flat_map(|(index, (positive, negative))| {
                [
                    (literal::from_parts(index + 1, true), positive),
                    (literal::from_parts(index + 1, false), negative),
                ]
            })
    }
}

impl std::fmt::Display for EncodingTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, (positive, negative)) in self.positive.iter().zip(&self.negative).enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "Variable {}:\n  Positive: {}\n  Negative: {}",
                index + 1,
                strand::bases_to_string(positive),
                strand::bases_to_string(negative)
            )?;
        }
        Ok(())
    }
}
