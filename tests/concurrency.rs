use std::{sync::atomic::Ordering, time::Duration};

use otter_ipasir::{
    reports::Report,
    session::{Session, SessionState},
};

/// Adds the pigeonhole principle for `pigeons` pigeons and `holes` holes.
fn pigeonhole(session: &mut Session, pigeons: i32, holes: i32) {
    let atom = |pigeon: i32, hole: i32| pigeon * holes + hole + 1;
    for pigeon in 0..pigeons {
        let somewhere: Vec<i32> = (0..holes).map(|hole| atom(pigeon, hole)).collect();
        assert!(session.add_clause(&somewhere).is_ok());
    }
    for hole in 0..holes {
        for a in 0..pigeons {
            for b in (a + 1)..pigeons {
                assert!(session.add_clause(&[-atom(a, hole), -atom(b, hole)]).is_ok());
            }
        }
    }
}

mod threads {
    use super::*;

    #[test]
    fn independent_sessions() {
        let results = crossbeam::scope(|scope| {
            let handles: Vec<_> = (3..7)
                .map(|holes: i64| {
                    scope.spawn(move |_| {
                        let mut session: Session = Session::new();
                        assert!(session.set_option("branch_strategy_setup", holes % 4).is_ok());
                        pigeonhole(&mut session, holes as i32 + (holes as i32 % 2), holes as i32);
                        session.solve()
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().ok())
                .collect::<Vec<_>>()
        });

        let Ok(results) = results else {
            panic!("A session thread panicked");
        };

        for (holes, result) in (3..7).zip(results) {
            let expected = match holes % 2 {
                0 => Report::Satisfiable,
                _ => Report::Unsatisfiable,
            };
            assert_eq!(result, Some(Ok(expected)));
        }
    }

    #[test]
    fn interrupt_from_another_thread() {
        let mut session: Session = Session::new();
        pigeonhole(&mut session, 11, 10);
        let handle = session.interrupt_handle();

        let result = crossbeam::scope(|scope| {
            scope.spawn(|_| {
                std::thread::sleep(Duration::from_millis(50));
                handle.store(true, Ordering::Relaxed);
            });

            session.solve()
        });

        match result {
            Ok(Ok(Report::Unknown)) => assert_eq!(session.state(), SessionState::Input),
            Ok(Ok(Report::Unsatisfiable)) => assert_eq!(session.state(), SessionState::Unsatisfiable),
            other => panic!("Unexpected result {other:?}"),
        }
    }
}
