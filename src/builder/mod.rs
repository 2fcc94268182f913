/*!
Tools for building a formula.

# Basic methods

The [context](crate::context) has two basic methods for building a formula:
- [ensure_atom_count](crate::context::GenericContext::ensure_atom_count), to make atoms available.
- [add_clause](crate::context::GenericContext::add_clause), to add a clause.

Clauses are added between solves, and so always with no decision made.
On addition a clause is simplified with respect to the values fixed by the formula:
- A clause with some literal fixed true is satisfied, and so dropped.
- Literals fixed false are removed.

The simplified clause is then either unsatisfiable (empty), a unit to be propagated, or stored with two watched literals.

The [session](crate::session) builds through the [Engine](crate::engine::Engine) trait, and [dimacs] reads a DIMACS formula into a session.
*/

pub mod dimacs;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::clause::{CClause, Clause},
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Grows the context to include every atom below `count`.
    pub fn ensure_atom_count(&mut self, count: usize) {
        self.atom_db.ensure(count);
        self.clause_db.ensure(count);
    }

    /// Adds a clause to the formula of the context.
    ///
    /// Duplicate literals are removed, and tautologies are ignored.
    pub fn add_clause(&mut self, clause: CClause) -> Result<(), ErrorKind> {
        if self.trail.decision_level() != 0 {
            return Err(err::EngineError::DecisionMade.into());
        }
        if !self.consistent {
            return Ok(());
        }

        let mut clause = clause;
        clause.sort_unstable();
        clause.dedup();

        // After deduplication, repeated atoms have distinct polarities.
        if clause.windows(2).any(|pair| pair[0].atom() == pair[1].atom()) {
            log::trace!(target: targets::PROPAGATION, "Tautology ignored: {}", clause.as_dimacs(false));
            return Ok(());
        }

        if let Some(atom) = clause.iter().map(|literal| literal.atom()).max() {
            self.ensure_atom_count(atom as usize + 1);
        }

        if clause
            .iter()
            .any(|literal| self.atom_db.value_of_literal(*literal) == Some(true))
        {
            return Ok(());
        }
        clause.retain(|literal| self.atom_db.value_of_literal(*literal).is_none());

        match clause.len() {
            0 => {
                log::info!(target: targets::PROPAGATION, "Formula unsatisfiable on addition");
                self.consistent = false;
            }

            1 => {
                self.assign(clause[0], None);
                if self.bcp().is_err() {
                    log::info!(target: targets::PROPAGATION, "Conflict from unit {}", clause[0]);
                    self.consistent = false;
                }
            }

            _ => {
                self.clause_db.store(clause, None, 0);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, atomic::AtomicBool};

    use crate::{
        config::Config,
        context::Context,
        engine::Engine,
        structures::literal::{CLiteral, encode},
    };

    fn clause(ints: &[i32]) -> Vec<CLiteral> {
        ints.iter().filter_map(|int| encode(*int)).collect()
    }

    fn fresh_context() -> Context {
        Context::from_config(&Config::default(), Arc::new(AtomicBool::new(false)))
    }

    #[test]
    fn units_are_propagated() {
        let mut context = fresh_context();
        assert!(context.add_clause(clause(&[1, 2])).is_ok());
        assert!(context.add_clause(clause(&[-1])).is_ok());

        assert_eq!(context.atom_db.value_of(0), Some(false));
        assert_eq!(context.atom_db.value_of(1), Some(true));
        assert!(context.is_consistent());
    }

    #[test]
    fn tautologies_and_satisfied_clauses_are_dropped() {
        let mut context = fresh_context();
        assert!(context.add_clause(clause(&[1, -1, 2])).is_ok());
        assert!(context.clause_db.clauses.is_empty());

        assert!(context.add_clause(clause(&[3])).is_ok());
        assert!(context.add_clause(clause(&[3, 4, 5])).is_ok());
        assert!(context.clause_db.clauses.is_empty());
    }

    #[test]
    fn falsified_literals_are_removed() {
        let mut context = fresh_context();
        assert!(context.add_clause(clause(&[-1])).is_ok());
        assert!(context.add_clause(clause(&[1, 2, 2, 3])).is_ok());

        assert_eq!(context.clause_db.clauses.len(), 1);
        assert_eq!(context.clause_db.clauses[0].literals, clause(&[2, 3]));
    }

    #[test]
    fn contradictory_units() {
        let mut context = fresh_context();
        assert!(context.add_clause(clause(&[1])).is_ok());
        assert!(context.add_clause(clause(&[-1])).is_ok());
        assert!(!context.is_consistent());
    }

    #[test]
    fn empty_clause() {
        let mut context = fresh_context();
        assert!(context.add_clause(Vec::default()).is_ok());
        assert!(!context.is_consistent());
    }
}
