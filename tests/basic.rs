use molecular_sat::{
    config::Config,
    context::{SolveState, Solver},
    reports::Report,
    types::err::{BuildError, ClauseError, ErrorKind},
};

mod basic {
    use super::*;

    #[test]
    fn single_variable() {
        let mut solver = Solver::from_config(Config::default(), 1).unwrap();
        assert!(solver.add_clause(&[1, 1, 1]).is_ok());

        assert_eq!(solver.solve(), Ok(Report::Satisfiable));
        assert_eq!(solver.counters.tube_sizes, vec![2, 1]);

        let positive = solver.encodings().block(1).unwrap();
        let survivor = solver.tube().molecules().next().unwrap();
        assert_eq!(survivor.symbols(), positive.as_slice());

        assert_eq!(solver.model(), Some(vec![true]));
    }

    #[test]
    fn conflict() {
        let mut solver = Solver::from_config(Config::default(), 2).unwrap();

        for clause in [[1, 1, 2], [-1, -1, -2], [1, -2, -2], [-1, 2, 2]] {
            assert!(solver.add_clause(&clause).is_ok());
        }

        assert_eq!(solver.solve(), Ok(Report::Unsatisfiable));
        assert!(solver.tube().is_empty());
        assert!(matches!(solver.state(), SolveState::Unsatisfiable(index) if index <= 3));
        assert_eq!(solver.counters.tube_sizes.last(), Some(&0));
        assert!(solver.models().is_empty());
        assert_eq!(solver.valuation_string(), None);
    }

    #[test]
    fn shared_literals() {
        let mut solver = Solver::from_config(Config::default(), 3).unwrap();
        assert!(solver.add_clause(&[1, 2, 3]).is_ok());
        assert!(solver.add_clause(&[-1, 2, 3]).is_ok());

        assert_eq!(solver.solve(), Ok(Report::Satisfiable));
        assert!(solver.models().contains(&vec![false, true, true]));

        // Each clause removes exactly one assignment of the eight.
        assert_eq!(solver.counters.tube_sizes, vec![8, 7, 6]);
    }

    #[test]
    fn invalid_clauses() {
        let mut solver = Solver::from_config(Config::default(), 3).unwrap();

        assert_eq!(
            solver.add_clause(&[1, 2]),
            Err(ErrorKind::Clause(ClauseError::Length(2)))
        );
        assert_eq!(
            solver.add_clause(&[1, 0, 2]),
            Err(ErrorKind::Clause(ClauseError::ZeroLiteral))
        );
        assert_eq!(
            solver.add_clause(&[1, 2, -4]),
            Err(ErrorKind::Clause(ClauseError::OutOfRange(-4)))
        );
        assert!(solver.clauses().is_empty());
    }

    #[test]
    fn no_variables() {
        assert!(matches!(
            Solver::from_config(Config::default(), 0),
            Err(ErrorKind::Build(BuildError::NoVariables))
        ));
    }

    #[test]
    fn incremental() {
        let mut solver = Solver::from_config(Config::default(), 2).unwrap();
        assert!(solver.add_clause(&[1, 2, 2]).is_ok());
        assert_eq!(solver.solve(), Ok(Report::Satisfiable));
        assert_eq!(solver.models().len(), 3);

        assert!(solver.add_clause(&[-1, -1, -1]).is_ok());
        assert_eq!(solver.state(), SolveState::Unsolved);
        assert_eq!(solver.report(), Report::Unknown);

        assert_eq!(solver.solve(), Ok(Report::Satisfiable));
        assert_eq!(solver.models(), vec![vec![false, true]]);
        assert_eq!(solver.valuation_string(), Some("-1 2".to_string()));
    }

    #[test]
    fn retained_stages_narrow() {
        let mut config = Config::default();
        config.retain_stages.value = true;

        let mut solver = Solver::from_config(config, 3).unwrap();
        for clause in [[1, 2, 3], [-1, -2, 3], [1, -3, -3], [-2, -2, -1]] {
            assert!(solver.add_clause(&clause).is_ok());
        }
        assert!(solver.solve().is_ok());

        let stages = solver.stages();
        assert_eq!(stages.len(), solver.counters.tube_sizes.len());
        for pair in stages.windows(2) {
            assert!(pair[1].len() <= pair[0].len());
            assert!(pair[1].molecules().all(|molecule| pair[0].contains(molecule)));
        }
    }

    #[test]
    fn stages_not_retained_by_default() {
        let mut solver = Solver::from_config(Config::default(), 2).unwrap();
        assert!(solver.add_clause(&[1, 2, -1]).is_ok());
        assert!(solver.solve().is_ok());
        assert!(solver.stages().is_empty());
    }
}
