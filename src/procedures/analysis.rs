/*!
Analysis of an unsatisfiable clause.

Takes a key to a clause which is unsatisfiable on the current valuation and returns an asserting clause.

In other words, conflict analysis applies resolution to the conflict clause and the reasons for the values of literals in the clause, in reverse trail order, until the clause contains exactly one literal valued at the current decision level (the first unique implication point).
The negation of that literal is then asserted by the clause after a backjump.

For the method, see: [conflict_analysis](GenericContext::conflict_analysis).

# Minimisation

The derived clause is minimised in two steps:
- A literal is removed if every other literal of the reason for its value is in the clause, or valued at level zero.
- If configured, a literal ¬x is removed if some binary clause *a ∨ x* is found, where *a* is the asserted literal and *x* is true.
  See [Config::do_minim_red_more_more](crate::config::Config::do_minim_red_more_more) and related options.

# The final conflict

When an assumption is found false, [analyse_final](GenericContext::analyse_final) collects the assumptions responsible by walking the trail back from the falsified assumption.
*/

use crate::{
    config::LBD,
    context::GenericContext,
    db::{ClauseKey, LevelIndex},
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::CLiteral,
    },
    types::err::{self, ErrorKind},
};

/// The result of conflict analysis.
#[derive(Debug)]
pub struct Analysis {
    /// The derived clause, with the asserted literal first and (if any) a literal of the backjump level second.
    pub clause: CClause,

    /// The level at which the clause asserts the first literal.
    pub backjump_level: LevelIndex,

    /// The glue of the clause.
    pub lbd: LBD,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Derives an asserting clause from the conflict clause indexed by `key`.
    ///
    /// The conflict must be found at some decision level above zero.
    /// For documentation, see [procedures::analysis](crate::procedures::analysis).
    pub fn conflict_analysis(&mut self, key: ClauseKey) -> Result<Analysis, ErrorKind> {
        let current_level = self.trail.decision_level();

        // The first literal is set once the asserted literal is found.
        let mut clause: CClause = vec![CLiteral::new(0, true)];
        let mut path_count: usize = 0;
        let mut trail_index = self.trail.literals.len();
        let mut reason = key;
        let mut skip_first = false;

        loop {
            self.clause_db.note_use(reason);
            let reason_clause = self.clause_db.get(reason)?;
            let start = if skip_first { 1 } else { 0 };

            for literal in &reason_clause.literals[start..] {
                let atom = literal.atom();
                if self.atom_db.seen[atom as usize] || self.atom_db.level_of(atom) == 0 {
                    continue;
                }
                self.atom_db.bump_activity(atom);
                self.atom_db.seen[atom as usize] = true;
                if self.atom_db.level_of(atom) >= current_level {
                    path_count += 1;
                } else {
                    clause.push(*literal);
                }
            }

            let resolved = loop {
                trail_index = trail_index
                    .checked_sub(1)
                    .ok_or(err::EngineError::NoAssertion)?;
                let candidate = self.trail.literals[trail_index];
                if self.atom_db.seen[candidate.atom() as usize] {
                    break candidate;
                }
            };
            self.atom_db.seen[resolved.atom() as usize] = false;

            path_count = path_count
                .checked_sub(1)
                .ok_or(err::EngineError::NoAssertion)?;
            if path_count == 0 {
                clause[0] = resolved.negate();
                break;
            }

            reason = self
                .atom_db
                .reason_of(resolved.atom())
                .ok_or(err::EngineError::NoAssertion)?;
            skip_first = true;
        }

        let marked: Vec<CLiteral> = clause[1..].to_vec();
        self.minimise_by_reasons(&mut clause)?;
        for literal in &marked {
            self.atom_db.seen[literal.atom() as usize] = false;
        }

        let mut lbd = self.lbd(&clause);
        if self.binary_minimisation_applies(clause.len(), lbd) {
            let before = clause.len();
            self.minimise_by_binaries(&mut clause);
            if clause.len() != before {
                log::trace!(target: targets::ANALYSIS, "Binary minimisation removed {}", before - clause.len());
                lbd = self.lbd(&clause);
            }
        }

        let mut backjump_level = 0;
        if clause.len() > 1 {
            let mut max_position = 1;
            for position in 2..clause.len() {
                if self.atom_db.level_of(clause[position].atom())
                    > self.atom_db.level_of(clause[max_position].atom())
                {
                    max_position = position;
                }
            }
            clause.swap(1, max_position);
            backjump_level = self.atom_db.level_of(clause[1].atom());
        }

        log::trace!(target: targets::ANALYSIS, "Learnt {} at level {backjump_level}", clause.as_dimacs(false));

        Ok(Analysis {
            clause,
            backjump_level,
            lbd,
        })
    }

    /// Removes literals implied by the other literals of `clause`, through the reason for their value.
    ///
    /// Requires the seen flag of each literal of the clause (other than the first) to be set.
    fn minimise_by_reasons(&self, clause: &mut CClause) -> Result<(), ErrorKind> {
        let mut kept = 1;
        for position in 1..clause.len() {
            let literal = clause[position];
            let redundant = match self.atom_db.reason_of(literal.atom()) {
                None => false,
                Some(key) => self.clause_db.get(key)?.literals[1..].iter().all(|other| {
                    self.atom_db.seen[other.atom() as usize]
                        || self.atom_db.level_of(other.atom()) == 0
                }),
            };
            if !redundant {
                clause[kept] = literal;
                kept += 1;
            }
        }
        clause.truncate(kept);
        Ok(())
    }

    fn binary_minimisation_applies(&self, length: usize, lbd: LBD) -> bool {
        match self.config.do_minim_red_more_more {
            0 => false,
            1 => {
                length <= self.config.max_num_lits_more_more_red_min as usize
                    && lbd <= self.config.max_glue_more_minim
            }
            _ => true,
        }
    }

    /// Removes each literal ¬x from `clause` such that *a ∨ x* is a binary clause, where *a* is the first literal of `clause` and *x* is true.
    fn minimise_by_binaries(&mut self, clause: &mut CClause) {
        let asserted = clause[0];
        for literal in &clause[1..] {
            self.atom_db.seen[literal.atom() as usize] = true;
        }

        let limit = self.config.more_red_minim_limit_binary as usize;
        for key in self.clause_db.watches[asserted.index()].iter().take(limit) {
            if let Some(other) = self.clause_db.binary_partner(*key, asserted) {
                if self.atom_db.seen[other.atom() as usize]
                    && self.atom_db.value_of_literal(other) == Some(true)
                {
                    self.atom_db.seen[other.atom() as usize] = false;
                }
            }
        }

        let mut kept = 1;
        for position in 1..clause.len() {
            let literal = clause[position];
            if self.atom_db.seen[literal.atom() as usize] {
                self.atom_db.seen[literal.atom() as usize] = false;
                clause[kept] = literal;
                kept += 1;
            }
        }
        clause.truncate(kept);
    }

    /// The count of distinct decision levels among the literals of `clause`.
    pub fn lbd(&self, clause: &[CLiteral]) -> LBD {
        let mut levels: Vec<LevelIndex> = clause
            .iter()
            .map(|literal| self.atom_db.level_of(literal.atom()))
            .collect();
        levels.sort_unstable();
        levels.dedup();
        levels.len() as LBD
    }

    /// The final conflict, given `literal` is the (true) negation of some falsified assumption.
    ///
    /// Each literal of the final conflict is the negation of some assumption, and `literal` is always included.
    /// If the assumptions contain some atom with both polarities, both negations may be included.
    pub fn analyse_final(&mut self, literal: CLiteral) -> Result<CClause, ErrorKind> {
        let mut conflict = vec![literal];
        if self.trail.decision_level() == 0 {
            return Ok(conflict);
        }

        let first_decision = self.trail.level_starts.first().copied().unwrap_or(0);
        self.atom_db.seen[literal.atom() as usize] = true;

        for index in (first_decision..self.trail.literals.len()).rev() {
            let valued = self.trail.literals[index];
            let atom = valued.atom() as usize;
            if !self.atom_db.seen[atom] {
                continue;
            }
            match self.atom_db.reason_of(valued.atom()) {
                None => conflict.push(valued.negate()),
                Some(key) => {
                    for other in &self.clause_db.get(key)?.literals[1..] {
                        if self.atom_db.level_of(other.atom()) > 0 {
                            self.atom_db.seen[other.atom() as usize] = true;
                        }
                    }
                }
            }
            self.atom_db.seen[atom] = false;
        }
        self.atom_db.seen[literal.atom() as usize] = false;

        log::trace!(target: targets::ANALYSIS, "Final conflict {}", conflict.as_dimacs(false));
        Ok(conflict)
    }
}
