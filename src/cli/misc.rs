use std::{fs::File, io::BufReader, path::Path};

use molecular_sat::{
    builder::dimacs::ParserInfo,
    config::Config,
    context::Solver,
    structures::literal::Literal,
    types::err::{self, ErrorKind},
};

pub fn examine_parser_report(info: &ParserInfo) {
    println!("c Expected {} variables.", info.expected_variables);
    println!("c Expected {} clauses.", info.expected_clauses);
    println!("c Added    {} clauses.", info.added_clauses);
}

/// Reads the literals of the `position`th clause, separated by whitespace and/or commas.
pub fn parse_clause(position: usize, clause: &str) -> Result<Vec<Literal>, ErrorKind> {
    clause
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<Literal>()
                .map_err(|_| ErrorKind::from(err::ParseError::InlineLiteral(position)))
        })
        .collect()
}

/// Builds a solver from a DIMACS file, decompressing files with an `xz` extension if supported.
pub fn load_dimacs(config: Config, path: &Path) -> Result<Solver, ErrorKind> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            println!("c Failed to open CNF file {path:?}");
            std::process::exit(1);
        }
    };

    let (solver, info) = match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => {
            Solver::from_dimacs(config, BufReader::new(xz2::read::XzDecoder::new(&file)))?
        }

        _ => Solver::from_dimacs(config, BufReader::new(&file))?,
    };

    examine_parser_report(&info);
    Ok(solver)
}

#[cfg(test)]
mod misc_tests {
    use super::*;

    #[test]
    fn clause_separators() {
        assert_eq!(parse_clause(1, "1 -2 3"), Ok(vec![1, -2, 3]));
        assert_eq!(parse_clause(1, "1,-2, 3"), Ok(vec![1, -2, 3]));
    }

    #[test]
    fn clause_position_reported() {
        assert_eq!(
            parse_clause(3, "1 two 3"),
            Err(ErrorKind::Parse(err::ParseError::InlineLiteral(3)))
        );
    }
}
