/*!
A context method for boolean constraint propagation.

See [GenericContext::bcp] for the relevant context method.

# Overview

Each literal on the trail is propagated in turn.
To propagate a literal *l*, each clause watching *¬l* is examined, as *¬l* has been valued false:
- If the other watched literal of the clause is true, the clause is satisfied and nothing is done.
- Else, if some unwatched literal of the clause is not false, the watch is moved to that literal.
- Else, if the other watched literal has no value, the clause asserts the literal and the literal is valued, with the clause as a reason.
- Else, every literal of the clause is false, and the clause is a conflict.

# Watch lists

The watch list of ¬l is taken from the database during the inspection, and returned after.
This avoids holding a borrow of the list while watches of other literals are updated, and is safe as no clause moves a watch to ¬l while ¬l is false.

By convention, the literal asserted by a clause is moved to the first position of the clause before being valued.
So, the reason for a value is always the first literal of the reason clause.
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    types::err::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Propagates every literal on the trail which has not been propagated.
    ///
    /// On a conflict the remaining literals are noted as propagated, as the conflict will lead to a backjump.
    pub fn bcp(&mut self) -> Result<(), err::BCPError> {
        while let Some(literal) = self.trail.next_to_propagate() {
            self.counters.total_propagations += 1;
            let false_literal = literal.negate();
            let list_index = false_literal.index();

            let mut watchers = std::mem::take(&mut self.clause_db.watches[list_index]);
            let mut conflict = None;
            let mut kept = 0;
            let mut position = 0;

            while position < watchers.len() {
                let key = watchers[position];
                position += 1;

                let clause = &mut self.clause_db.clauses[key];
                if clause.deleted {
                    continue;
                }

                if clause.literals[0] == false_literal {
                    clause.literals.swap(0, 1);
                }
                let first = clause.literals[0];

                if self.atom_db.value_of_literal(first) == Some(true) {
                    watchers[kept] = key;
                    kept += 1;
                    continue;
                }

                let mut moved = false;
                for candidate_position in 2..clause.literals.len() {
                    let candidate = clause.literals[candidate_position];
                    if self.atom_db.value_of_literal(candidate) != Some(false) {
                        clause.literals.swap(1, candidate_position);
                        self.clause_db.watches[candidate.index()].push(key);
                        moved = true;
                        break;
                    }
                }
                if moved {
                    continue;
                }

                watchers[kept] = key;
                kept += 1;

                match self.atom_db.value_of_literal(first) {
                    Some(false) => {
                        conflict = Some(key);
                        break;
                    }
                    _ => {
                        log::trace!(target: targets::PROPAGATION, "{first} from {key}");
                        self.assign(first, Some(key));
                    }
                }
            }

            while position < watchers.len() {
                watchers[kept] = watchers[position];
                kept += 1;
                position += 1;
            }
            watchers.truncate(kept);
            watchers.append(&mut self.clause_db.watches[list_index]);
            self.clause_db.watches[list_index] = watchers;

            if let Some(key) = conflict {
                self.trail.skip_propagation();
                return Err(err::BCPError::Conflict(key));
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
        types::err,
    };

    fn clause(ints: &[i32]) -> Vec<CLiteral> {
        ints.iter().filter_map(|int| encode(*int)).collect()
    }

    fn literal(int: i32) -> CLiteral {
        clause(&[int])[0]
    }

    #[test]
    fn chain() {
        let mut context = Context::from_config(&Config::default(), Arc::new(AtomicBool::new(false)));
        context.ensure_atoms(4);
        for formula_clause in [&[-1, 2][..], &[-2, 3], &[-3, -1, 4]] {
            assert!(context.add_clause(clause(formula_clause)).is_ok());
        }

        context.trail.push_level();
        context.assign(literal(1), None);
        assert!(context.bcp().is_ok());

        assert_eq!(context.atom_db.value_of(1), Some(true));
        assert_eq!(context.atom_db.value_of(2), Some(true));
        assert_eq!(context.atom_db.value_of(3), Some(true));
        assert_eq!(context.atom_db.level_of(3), 1);
        assert_eq!(context.trail.literals.len(), 4);
    }

    #[test]
    fn conflict() {
        let mut context = Context::from_config(&Config::default(), Arc::new(AtomicBool::new(false)));
        context.ensure_atoms(3);
        for formula_clause in [&[-1, 2][..], &[-1, 3], &[-2, -3]] {
            assert!(context.add_clause(clause(formula_clause)).is_ok());
        }

        context.trail.push_level();
        context.assign(literal(1), None);
        match context.bcp() {
            Err(err::BCPError::Conflict(key)) => {
                let conflict = &context.clause_db.clauses[key].literals;
                assert!(conflict
                    .iter()
                    .all(|literal| context.atom_db.value_of_literal(*literal) == Some(false)));
            }
            Ok(()) => panic!("expected a conflict"),
        }
    }
}
