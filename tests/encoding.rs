use std::collections::{HashMap, HashSet};

use molecular_sat::{
    config::Config,
    context::Solver,
    encoding::{
        block_complement, random_block, Block, EncodingTable, BLOCK_SPACE, BLOCK_WIDTH, MAX_VARIABLES,
    },
    generic::random::MinimalPCG32,
    types::err::{EncodingError, ErrorKind},
};
use rand::SeedableRng;

fn assert_distinct(table: &EncodingTable) {
    let blocks = table.blocks().map(|(_, block)| *block).collect::<Vec<_>>();
    assert_eq!(blocks.len(), 2 * table.variable_count());

    let unique = blocks.iter().copied().collect::<HashSet<_>>();
    assert_eq!(unique.len(), blocks.len());

    for block in &blocks {
        assert!(!unique.contains(&block_complement(block)));
    }
}

mod encoding {
    use super::*;

    #[test]
    fn distinct_across_seeds() {
        for seed in 0..64_u64 {
            let mut rng = MinimalPCG32::from_seed(seed.to_le_bytes());
            let table = EncodingTable::generate(8, 4096, &mut rng).unwrap();
            assert_distinct(&table);
        }
    }

    #[test]
    fn full_capacity() {
        let mut config = Config::default();
        for seed in 0..200_u64 {
            config.seed.value = seed;
            let solver = Solver::from_config(config.clone(), MAX_VARIABLES).unwrap();
            assert_distinct(solver.encodings());
        }
    }

    #[test]
    fn blocks_drawn_uniformly() {
        const DRAWS: usize = 640_000;
        let expected = DRAWS / BLOCK_SPACE;

        let mut rng = MinimalPCG32::from_seed(0_u64.to_le_bytes());
        let mut counts: HashMap<Block, usize> = HashMap::default();
        for _ in 0..DRAWS {
            *counts.entry(random_block(&mut rng)).or_default() += 1;
        }

        assert_eq!(counts.len(), BLOCK_SPACE);
        for count in counts.values() {
            assert!(count.abs_diff(expected) < expected / 10, "{count} of {expected}");
        }
    }

    #[test]
    fn beyond_capacity() {
        let result = Solver::from_config(Config::default(), MAX_VARIABLES + 1);
        assert!(matches!(
            result,
            Err(ErrorKind::Encoding(EncodingError::SpaceExhausted { .. }))
        ));
    }

    #[test]
    fn seed_fixes_encodings() {
        let mut config = Config::default();
        config.seed.value = 42;

        let a = Solver::from_config(config.clone(), 5).unwrap();
        let b = Solver::from_config(config, 5).unwrap();
        assert_eq!(a.encodings(), b.encodings());
    }

    #[test]
    fn initial_tube_is_every_assignment() {
        for variables in 1..=6 {
            let solver = Solver::from_config(Config::default(), variables).unwrap();
            let tube = solver.initial_tube().unwrap();

            assert_eq!(tube.len(), 1 << variables);
            assert!(tube
                .molecules()
                .all(|molecule| molecule.len() == BLOCK_WIDTH * variables));
        }
    }

    #[test]
    fn extraction_matches_literals() {
        let solver = Solver::from_config(Config::default(), 4).unwrap();
        let tube = solver.initial_tube().unwrap();

        // Blocks never collide, so an aligned extraction of a block selects the assignments making its literal true.
        for (_, block) in solver.encodings().blocks() {
            assert_eq!(tube.extract(block).len(), 8);
        }

        let both = tube
            .extract(solver.encodings().block(1).unwrap())
            .intersect(&tube.extract(solver.encodings().block(-3).unwrap()));
        assert_eq!(both.len(), 4);
    }
}
