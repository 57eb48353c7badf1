use std::path::PathBuf;

use clap::{Parser, Subcommand};
use molecular_sat::config::{Config, ConfigOption};
use serde::Serialize;

/// Determines whether a 3-CNF formula is satisfiable by simulating a molecular computer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve a formula, from a DIMACS file or from clauses given inline
    Solve(SolveArgs),

    /// Simulate PCR amplification of a strand
    Pcr(PcrArgs),

    /// Cut a strand at each occurrence of a recognition site
    Cleave(CleaveArgs),
}

#[derive(clap::Args, Debug)]
pub struct SolveArgs {
    /// A DIMACS form 3-CNF file, with a problem specification
    pub formula_file: Option<PathBuf>,

    /// The number of variables, when clauses are given inline
    #[arg(short = 'n', long)]
    pub variables: Option<usize>,

    /// A clause of three literals, e.g. "1 -2 3" or "1,-2,3"
    #[arg(short, long = "clause", value_name = "LITERALS", allow_hyphen_values = true)]
    pub clauses: Vec<String>,

    /// The seed used when drawing encodings
    #[arg(long)]
    pub seed: Option<u64>,

    /// The number of draws for each literal before the encoding space is taken to be exhausted
    #[arg(long)]
    pub encoding_attempts: Option<u32>,

    /// Display a satisfying assignment, if possible
    #[arg(short, long, default_value_t = false)]
    pub model: bool,

    /// How much of a solve to display
    #[arg(long, default_value_t, value_enum)]
    pub detail: Detail,
}

#[derive(clap::Args, Debug)]
pub struct PcrArgs {
    /// The strand to amplify, e.g. AGCT
    pub sequence: String,

    /// The number of amplification cycles
    #[arg(long)]
    pub cycles: Option<u32>,

    /// The probability of a copying error, for each base
    #[arg(long)]
    pub error_rate: Option<f64>,

    /// The seed used when drawing copying errors
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(clap::Args, Debug)]
pub struct CleaveArgs {
    /// The strand to cut
    pub sequence: String,

    /// The recognition site of the enzyme, e.g. GAATTC for EcoRI
    pub site: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Detail {
    /// Only the verdict (and model, if requested)
    Quiet,
    #[default]
    /// Encodings and the size of the tube after each clause
    Summary,
    /// The molecules of the tube after each clause
    Molecules,
}

/// Sets the value of an option, or terminates the process if the value is out of bounds.
fn set_or_exit<T: Clone + PartialOrd + std::fmt::Display>(option: &mut ConfigOption<T>, value: T) {
    if option.set(value.clone()) {
        println!("c {} set to: {value}", option.name);
    } else {
        let (min, max) = option.min_max();
        println!("{} requires a value between {min} and {max}", option.name);
        std::process::exit(1);
    }
}

impl SolveArgs {
    /// Whether a formula file is given alongside a variable count or inline clauses.
    pub fn mixed_input(&self) -> bool {
        self.formula_file.is_some() && (self.variables.is_some() || !self.clauses.is_empty())
    }

    /// A config with the options requested.
    pub fn config(&self) -> Config {
        let mut config = Config::default();

        if let Some(seed) = self.seed {
            set_or_exit(&mut config.seed, seed);
        }
        if let Some(attempts) = self.encoding_attempts {
            set_or_exit(&mut config.encoding_attempts, attempts);
        }
        if self.detail == Detail::Molecules {
            config.retain_stages.value = true;
        }

        config
    }
}

impl PcrArgs {
    /// A config with the options requested.
    pub fn config(&self) -> Config {
        let mut config = Config::default();

        if let Some(seed) = self.seed {
            set_or_exit(&mut config.seed, seed);
        }
        if let Some(cycles) = self.cycles {
            set_or_exit(&mut config.pcr_cycles, cycles);
        }
        if let Some(rate) = self.error_rate {
            set_or_exit(&mut config.pcr_error_rate, rate);
        }

        config
    }
}

#[cfg(test)]
mod args_tests {
    use super::*;

    fn solve_args(args: &[&str]) -> SolveArgs {
        let full = ["molecular_sat", "solve"].iter().chain(args);
        match Args::try_parse_from(full) {
            Ok(Args {
                command: Command::Solve(solve_args),
            }) => solve_args,
            _ => panic!("not solve arguments: {args:?}"),
        }
    }

    #[test]
    fn mixed_input() {
        assert!(!solve_args(&["formula.cnf"]).mixed_input());
        assert!(!solve_args(&["-n", "3", "-c", "1 -2 3"]).mixed_input());

        assert!(solve_args(&["formula.cnf", "-n", "3"]).mixed_input());
        assert!(solve_args(&["formula.cnf", "-c", "-1 2 3"]).mixed_input());
    }
}
