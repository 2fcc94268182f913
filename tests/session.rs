use otter_ipasir::{
    reports::Report,
    session::{pool::POOL_SIZE_MAX, Session, SessionState},
    types::err::{ErrorKind, OptionError},
};

mod scenarios {
    use super::*;

    #[test]
    fn units() {
        let mut session: Session = Session::new();
        assert!(session.add_clause(&[1]).is_ok());
        assert!(session.add_clause(&[-2]).is_ok());

        assert_eq!(session.solve(), Ok(Report::Satisfiable));
        assert_eq!(session.value(1), 1);
        assert_eq!(session.value(2), -2);
    }

    #[test]
    fn negative_queries() {
        let mut session: Session = Session::new();
        assert!(session.add_clause(&[-1, -2]).is_ok());
        assert!(session.add_clause(&[2]).is_ok());

        assert_eq!(session.solve(), Ok(Report::Satisfiable));
        assert_eq!(session.value(-1), 1);
        assert_eq!(session.value(1), -1);
        assert_eq!(session.value(-2), -2);
        assert_eq!(session.value(2), 2);
    }

    #[test]
    fn contradiction() {
        let mut session: Session = Session::new();
        assert!(session.add_clause(&[1]).is_ok());
        assert!(session.add_clause(&[-1]).is_ok());

        assert_eq!(session.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(session.state(), SessionState::Unsatisfiable);
    }

    #[test]
    fn failed_assumptions() {
        let mut session: Session = Session::new();
        assert!(session.add_clause(&[1, 2]).is_ok());
        assert!(session.assume(-1).is_ok());
        assert!(session.assume(-2).is_ok());

        assert_eq!(session.solve(), Ok(Report::Unsatisfiable));
        assert_ne!(session.failed(-1), 0);
        assert_ne!(session.failed(-2), 0);
        assert_eq!(session.failed(3), 0);
    }

    #[test]
    fn distant_atom() {
        let mut session: Session = Session::new();
        assert!(session.add_clause(&[100]).is_ok());
        assert_eq!(session.pool_size(), 100);

        assert_eq!(session.solve(), Ok(Report::Satisfiable));
        assert_eq!(session.value(100), 100);
        assert_eq!(session.value(-100), -100);
    }

    #[test]
    fn beyond_the_pool() {
        let beyond = POOL_SIZE_MAX as i32 + 1;

        let mut session: Session = Session::new();
        assert_eq!(session.assume(i32::MAX), Err(ErrorKind::InvalidArgument));
        assert_eq!(session.add(-beyond), Err(ErrorKind::InvalidArgument));
        assert_eq!(session.add_clause(&[1, beyond]), Err(ErrorKind::InvalidArgument));
        assert_eq!(session.solve_given(&[beyond]), Err(ErrorKind::InvalidArgument));
        assert_eq!(session.pool_size(), 0);
        assert_eq!(session.state(), SessionState::Config);

        assert!(session.add_clause(&[1]).is_ok());
        assert_eq!(session.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn literal_by_literal() {
        let mut session: Session = Session::new();
        for lit in [1, 2, 0, -1, 0, -2, 3, 0] {
            assert!(session.add(lit).is_ok());
        }

        assert_eq!(session.solve(), Ok(Report::Satisfiable));
        assert_eq!(session.value(1), -1);
        assert_eq!(session.value(2), 2);
        assert_eq!(session.value(3), 3);
    }
}

mod states {
    use super::*;

    #[test]
    fn transitions() {
        let mut session: Session = Session::new();
        assert_eq!(session.state(), SessionState::Config);

        assert!(session.add_clause(&[1, 2]).is_ok());
        assert_eq!(session.state(), SessionState::Input);

        assert_eq!(session.solve(), Ok(Report::Satisfiable));
        assert_eq!(session.state(), SessionState::Satisfiable);

        assert!(session.assume(-1).is_ok());
        assert_eq!(session.state(), SessionState::Input);
        assert_eq!(session.value(2), 0);

        assert!(session.assume(-2).is_ok());
        assert_eq!(session.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(session.state(), SessionState::Unsatisfiable);
        assert_eq!(session.value(1), 0);

        assert_eq!(session.solve(), Ok(Report::Satisfiable));
        assert_eq!(session.failed(-1), 0);
    }

    #[test]
    fn no_stale_failures() {
        let mut session: Session = Session::new();
        assert!(session.add_clause(&[1, 2]).is_ok());
        assert!(session.add_clause(&[3, 4]).is_ok());

        assert_eq!(session.solve_given(&[-1, -2]), Ok(Report::Unsatisfiable));
        assert_eq!(session.failed(-1), -1);
        assert_eq!(session.failed(-2), -2);

        assert!(session.add_clause(&[5]).is_ok());
        assert_eq!(session.failed(-1), 0);

        assert_eq!(session.solve_given(&[-3, -4]), Ok(Report::Unsatisfiable));
        assert_eq!(session.failed(-3), -3);
        assert_eq!(session.failed(-4), -4);
        assert_eq!(session.failed(-1), 0);
        assert_eq!(session.failed(-2), 0);
    }

    #[test]
    fn assumptions_last_one_solve() {
        let mut session: Session = Session::new();
        assert!(session.add_clause(&[1, 2]).is_ok());

        assert_eq!(session.solve_given(&[-1]), Ok(Report::Satisfiable));
        assert_eq!(session.value(1), -1);

        assert_eq!(session.solve_given(&[-2]), Ok(Report::Satisfiable));
        assert_eq!(session.value(2), -2);
        assert_eq!(session.value(1), 1);
    }

    #[test]
    fn unsatisfiable_formula_stays_unsatisfiable() {
        let mut session: Session = Session::new();
        assert!(session.add_clause(&[1, 2]).is_ok());
        assert!(session.add_clause(&[-1]).is_ok());
        assert!(session.add_clause(&[-2]).is_ok());

        assert_eq!(session.solve(), Ok(Report::Unsatisfiable));
        assert!(session.add_clause(&[3]).is_ok());
        assert_eq!(session.solve_given(&[3]), Ok(Report::Unsatisfiable));
        assert_eq!(session.failed(3), 0);
    }
}

mod options {
    use super::*;

    #[test]
    fn idempotent() {
        let first = <Session>::options();
        let second = <Session>::options();
        assert_eq!(first, second);
        assert_eq!(first.len(), 20);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn defaults_in_range() {
        let session: Session = Session::new();
        for option in <Session>::options() {
            let value = session.get_option(option.name);
            assert!(value.is_ok_and(|value| option.permits(value)), "{}", option.name);
        }
    }

    #[test]
    fn frozen_after_input() {
        let first_inputs: [fn(&mut Session) -> Result<(), ErrorKind>; 3] = [
            |session: &mut Session| session.add(1),
            |session: &mut Session| session.assume(1),
            |session: &mut Session| session.add_clause(&[1]),
        ];

        for first_input in first_inputs {
            let mut session: Session = Session::new();
            assert!(first_input(&mut session).is_ok());

            for option in <Session>::options() {
                assert_eq!(
                    session.set_option(option.name, option.min),
                    Err(ErrorKind::Option(OptionError::InvalidState))
                );
            }
        }
    }

    #[test]
    fn order_of_checks() {
        let mut session: Session = Session::new();
        assert!(session.add(1).is_ok());

        assert_eq!(
            session.set_option("restartType", 9),
            Err(ErrorKind::Option(OptionError::InvalidValue))
        );
        assert_eq!(
            session.set_option("restart_type", 1),
            Err(ErrorKind::Option(OptionError::Unknown))
        );
    }

    #[test]
    fn every_extreme() {
        for option in <Session>::options() {
            for value in [option.min, option.max] {
                let mut session: Session = Session::new();
                assert!(session.set_option(option.name, value).is_ok());
                assert_eq!(session.get_option(option.name), Ok(value));

                assert!(session.add_clause(&[1, 2]).is_ok());
                assert!(session.add_clause(&[-1, 2]).is_ok());
                assert_eq!(session.solve(), Ok(Report::Satisfiable));
                assert_eq!(session.value(2), 2);
            }
        }
    }
}

mod interrupts {
    use std::sync::atomic::Ordering;

    use super::*;

    #[test]
    fn interrupted_solve() {
        let mut session: Session = Session::new();
        assert!(session.add_clause(&[1, 2]).is_ok());
        assert!(session.assume(-1).is_ok());

        session.interrupt_handle().store(true, Ordering::Relaxed);
        let result = session.solve();

        assert_eq!(result.map(|report| report.code()), Ok(0));
        assert_eq!(session.state(), SessionState::Input);
        assert_eq!(session.value(2), 0);
        assert!(!session.interrupt_handle().load(Ordering::Relaxed));

        assert_eq!(session.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn interrupt_consumed_by_unsatisfiable_formula() {
        let mut session: Session = Session::new();
        assert!(session.add_clause(&[1]).is_ok());
        assert!(session.add_clause(&[-1]).is_ok());
        assert_eq!(session.solve(), Ok(Report::Unsatisfiable));

        session.interrupt_handle().store(true, Ordering::Relaxed);
        assert_eq!(session.solve(), Ok(Report::Unsatisfiable));
        assert!(!session.interrupt_handle().load(Ordering::Relaxed));
    }
}
