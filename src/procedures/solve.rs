//! Determines the satisfiability of the formula in a context, given some assumptions.
//!
//! # Overview
//!
//! The solve loop alternates between propagation and choice:
//!
//! ```none
//!                   +---------------------------------+
//!   +-------------->| bcp                             |
//!   |               +---------------------------------+
//!   |                  |                         |
//!   |                  | conflict                | no conflict
//!   |                  ⌄                         ⌄
//!   |   +----------------------------+   +-------------------------------+
//!   |   | analysis, backjump, learn  |   | restart (if due)              |
//!   |   | reduce (if due)            |   | next assumption, or decision  |
//!   |   +----------------------------+   +-------------------------------+
//!   |                  |                         |
//!   +------------------+-------------------------+
//! ```
//!
//! - A conflict at level zero shows the formula is unsatisfiable, regardless of assumptions.
//! - An assumption found false shows the formula is unsatisfiable given the assumptions, and the [final conflict](crate::procedures::analysis) is noted.
//! - If every atom has a value after propagation, the formula is satisfiable and the valuation is noted as a model.
//!
//! Assumptions occupy the first decision levels of a solve, one level for each assumption.
//! An assumption which is already true is given an empty level, so the level of each assumption is fixed by its position.
//!
//! Before each iteration the interrupt flag of the context is checked.
//! If set, the flag is cleared and the solve ends with an unknown result.
//!
//! At the end of a solve the context backjumps to level zero, so clauses may be added before the next solve.

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    procedures::analysis::Analysis,
    reports::Report,
    structures::literal::CLiteral,
    types::err::{self, ErrorKind},
};

/// The outcome of placing the next assumption or decision.
enum Step {
    /// A literal to value on a fresh level.
    Decide(CLiteral),

    /// Every atom has a value.
    Satisfiable,

    /// Some assumption is false.
    Unsatisfiable,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Determines the satisfiability of the formula of the context with each assumption true.
    ///
    /// For documentation, see [procedures::solve](crate::procedures::solve).
    pub fn solve_given(&mut self, assumptions: &[CLiteral]) -> Result<Report, ErrorKind> {
        self.counters.solves += 1;
        self.model.clear();
        self.final_conflict.clear();

        if let Some(atom) = assumptions.iter().map(|literal| literal.atom()).max() {
            self.ensure_atom_count(atom as usize + 1);
        }

        if !self.consistent {
            // A pending interrupt is consumed by the solve, whatever the result.
            self.take_interrupt();
            log::info!("Solve {}: formula already unsatisfiable", self.counters.solves);
            return Ok(Report::Unsatisfiable);
        }

        self.assumptions = assumptions.to_vec();
        let result = self.search();
        self.backjump(0);
        self.assumptions.clear();

        log::info!(
            "Solve {}: {:?} after {} conflicts",
            self.counters.solves,
            result,
            self.counters.total_conflicts
        );
        result
    }

    fn search(&mut self) -> Result<Report, ErrorKind> {
        loop {
            if self.take_interrupt() {
                log::info!("Solve {} interrupted", self.counters.solves);
                return Ok(Report::Unknown);
            }

            match self.bcp() {
                Err(err::BCPError::Conflict(key)) => {
                    if self.trail.decision_level() == 0 {
                        self.consistent = false;
                        return Ok(Report::Unsatisfiable);
                    }

                    let analysis = self.conflict_analysis(key)?;
                    self.note_conflict(analysis.lbd);
                    self.backjump(analysis.backjump_level);
                    self.learn(analysis);

                    self.atom_db.decay_activity();
                    self.clause_db.decay_activity();
                    self.reduce_if_due();
                }

                Ok(()) => {
                    if self.restart_due() {
                        self.restart();
                    }

                    match self.next_step()? {
                        Step::Decide(literal) => {
                            self.trail.push_level();
                            self.assign(literal, None);
                        }

                        Step::Satisfiable => {
                            self.model = self.atom_db.valuation().to_vec();
                            return Ok(Report::Satisfiable);
                        }

                        Step::Unsatisfiable => return Ok(Report::Unsatisfiable),
                    }
                }
            }
        }
    }

    /// Stores the clause of an analysis and values the asserted literal.
    ///
    /// Requires a backjump to the level of the analysis.
    fn learn(&mut self, analysis: Analysis) {
        let asserted = analysis.clause[0];
        match analysis.clause.len() {
            1 => {
                log::trace!(target: targets::ANALYSIS, "Learnt unit {asserted}");
                self.assign(asserted, None);
            }
            _ => {
                let tier = self.tier_for(analysis.lbd);
                let key = self
                    .clause_db
                    .store(analysis.clause, Some(tier), analysis.lbd);
                self.assign(asserted, Some(key));
            }
        }
    }

    /// Places any assumptions already true, and returns the next assumption (or decision) to make.
    fn next_step(&mut self) -> Result<Step, ErrorKind> {
        while (self.trail.decision_level() as usize) < self.assumptions.len() {
            let assumption = self.assumptions[self.trail.decision_level() as usize];
            match self.atom_db.value_of_literal(assumption) {
                Some(true) => self.trail.push_level(),

                Some(false) => {
                    self.final_conflict = self.analyse_final(assumption.negate())?;
                    return Ok(Step::Unsatisfiable);
                }

                None => return Ok(Step::Decide(assumption)),
            }
        }

        match self.make_decision() {
            Some(literal) => Ok(Step::Decide(literal)),
            None => Ok(Step::Satisfiable),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, atomic::AtomicBool};

    use crate::{
        config::Config,
        context::Context,
        engine::Engine,
        reports::Report,
        structures::literal::{CLiteral, encode},
    };

    fn clause(ints: &[i32]) -> Vec<CLiteral> {
        ints.iter().filter_map(|int| encode(*int)).collect()
    }

    fn pigeonhole(context: &mut Context, pigeons: i32, holes: i32) {
        let atom = |pigeon: i32, hole: i32| pigeon * holes + hole + 1;
        for pigeon in 0..pigeons {
            let somewhere: Vec<i32> = (0..holes).map(|hole| atom(pigeon, hole)).collect();
            assert!(context.add_clause(clause(&somewhere)).is_ok());
        }
        for hole in 0..holes {
            for a in 0..pigeons {
                for b in (a + 1)..pigeons {
                    assert!(context.add_clause(clause(&[-atom(a, hole), -atom(b, hole)])).is_ok());
                }
            }
        }
    }

    #[test]
    fn pigeonhole_unsatisfiable() {
        let mut context = Context::from_config(&Config::default(), Arc::new(AtomicBool::new(false)));
        pigeonhole(&mut context, 5, 4);
        assert_eq!(context.solve_given(&[]), Ok(Report::Unsatisfiable));
        assert!(context.counters.total_conflicts > 0);
        assert!(context.final_conflict().is_empty());
    }

    #[test]
    fn pigeonhole_satisfiable() {
        let mut context = Context::from_config(&Config::default(), Arc::new(AtomicBool::new(false)));
        pigeonhole(&mut context, 4, 4);
        assert_eq!(context.solve_given(&[]), Ok(Report::Satisfiable));
        assert_eq!(context.trail.decision_level(), 0);
    }

    #[test]
    fn assumptions_are_forgotten() {
        let mut context = Context::from_config(&Config::default(), Arc::new(AtomicBool::new(false)));
        assert!(context.add_clause(clause(&[1, 2])).is_ok());

        assert_eq!(context.solve_given(&clause(&[-1, -2])), Ok(Report::Unsatisfiable));
        let mut conflict = context.final_conflict().to_vec();
        conflict.sort();
        assert_eq!(conflict, clause(&[1, 2]));

        assert_eq!(context.solve_given(&clause(&[-1])), Ok(Report::Satisfiable));
        assert_eq!(context.model_value(1), Some(true));
        assert!(context.final_conflict().is_empty());
    }

    #[test]
    fn interrupt_is_consumed() {
        let flag = Arc::new(AtomicBool::new(true));
        let mut context = Context::from_config(&Config::default(), flag.clone());
        assert!(context.add_clause(clause(&[1, 2])).is_ok());

        assert_eq!(context.solve_given(&[]), Ok(Report::Unknown));
        assert!(!flag.load(std::sync::atomic::Ordering::Relaxed));
        assert_eq!(context.solve_given(&[]), Ok(Report::Satisfiable));
    }
}
