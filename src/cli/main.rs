#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::str::FromStr;

use clap::Parser;
use molecular_sat::{
    context::Solver,
    generic::random::MinimalPCG32,
    procedures::pcr,
    reports::Report,
    structures::strand::{self, Strand},
};
use rand::SeedableRng;

mod args;
mod misc;

use args::{Args, CleaveArgs, Command, Detail, PcrArgs, SolveArgs};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Command::Solve(solve_args) => solve(solve_args),
        Command::Pcr(pcr_args) => amplify(pcr_args),
        Command::Cleave(cleave_args) => cleave(cleave_args),
    }
}

fn solve(args: SolveArgs) {
    let config = args.config();

    if args.mixed_input() {
        println!("c A DIMACS file may not be combined with a variable count or inline clauses");
        std::process::exit(1);
    }

    let built = match (&args.formula_file, args.variables) {
        (Some(path), _) => {
            println!("c Reading DIMACS file from {path:?}");
            misc::load_dimacs(config, path)
        }

        (None, Some(variables)) => Solver::from_config(config, variables).and_then(|mut solver| {
            for (index, clause) in args.clauses.iter().enumerate() {
                let literals = misc::parse_clause(index + 1, clause)?;
                solver.add_clause(&literals)?;
            }
            Ok(solver)
        }),

        (None, None) => {
            println!("c Either a DIMACS file or a variable count is required");
            std::process::exit(1);
        }
    };

    let mut solver = match built {
        Ok(solver) => solver,
        Err(e) => {
            println!("c Build error: {e}");
            std::process::exit(1);
        }
    };

    if args.detail != Detail::Quiet {
        for line in solver.encodings().to_string().lines() {
            println!("c {line}");
        }
    }

    let result = match solver.solve() {
        Ok(report) => report,
        Err(e) => {
            println!("c Solve error: {e}");
            std::process::exit(2);
        }
    };

    match args.detail {
        Detail::Quiet => {}

        Detail::Summary => {
            for (stage, size) in solver.counters.tube_sizes.iter().enumerate() {
                match stage {
                    0 => println!("c Initial assignments: {size} molecules"),
                    _ => println!(
                        "c After clause {stage} {}: {size} molecules",
                        solver.clauses()[stage - 1]
                    ),
                }
            }
        }

        Detail::Molecules => {
            for tube in solver.stages() {
                for line in tube.to_string().lines() {
                    println!("c {line}");
                }
            }
        }
    }

    if args.detail != Detail::Quiet {
        println!("c Solved in {:?}", solver.counters.time);
    }

    match result {
        Report::Satisfiable => println!("s SATISFIABLE"),
        Report::Unsatisfiable => println!("s UNSATISFIABLE"),
        Report::Unknown => println!("s UNKNOWN"),
    }

    if args.model {
        if let Some(valuation) = solver.valuation_string() {
            println!("v {valuation} 0");
        }
    }
}

fn read_strand(sequence: &str) -> Strand {
    match Strand::from_str(sequence) {
        Ok(strand) => strand,
        Err(e) => {
            println!("c Invalid sequence {sequence:?}: {e:?}");
            std::process::exit(1);
        }
    }
}

fn amplify(args: PcrArgs) {
    let config = args.config();
    let strand = read_strand(&args.sequence);
    let mut rng = MinimalPCG32::from_seed(config.seed.value.to_le_bytes());

    println!("c Initial molecule:");
    for line in strand.to_string().lines() {
        println!("c {line}");
    }

    let products = match pcr::amplify_with_config(&strand, &config, &mut rng) {
        Ok(products) => products,
        Err(e) => {
            println!("c PCR error: {e}");
            std::process::exit(2);
        }
    };

    println!(
        "c After {} cycles: {} molecules, {} faithful",
        config.pcr_cycles.value,
        products.len(),
        pcr::faithful_count(&products)
    );

    for (index, duplex) in products.iter().take(2).enumerate() {
        println!("c Molecule {}:", index + 1);
        for line in duplex.to_string().lines() {
            println!("c {line}");
        }
    }
}

fn cleave(args: CleaveArgs) {
    let strand = read_strand(&args.sequence);
    let site = match strand::bases_from_str(&args.site) {
        Ok(site) => site,
        Err(e) => {
            println!("c Invalid site {:?}: {e:?}", args.site);
            std::process::exit(1);
        }
    };

    match strand.cleave(&site) {
        Ok(segments) => {
            for segment in segments {
                println!("{}", segment.as_string());
            }
        }
        Err(e) => {
            println!("c Cleave error: {e:?}");
            std::process::exit(1);
        }
    }
}
