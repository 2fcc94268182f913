/*!
Reduction of the learnt clauses of the clause database.

Learnt clauses are placed in a tier on the glue of the clause when learnt:
- Tier zero, if the glue is at most [glue_put_lev0_if_below_or_eq](crate::config::Config::glue_put_lev0_if_below_or_eq).
- Tier one, if the glue is at most [glue_put_lev1_if_below_or_eq](crate::config::Config::glue_put_lev1_if_below_or_eq).
- Tier two, otherwise.

Tier zero clauses are never removed.

Every [every_lev1_reduce](crate::config::Config::every_lev1_reduce) conflicts each tier one clause which has not been used in conflict analysis since the previous tier one reduction is removed.

Every [every_lev2_reduce](crate::config::Config::every_lev2_reduce) conflicts the tier two clauses are sorted by activity, and at most half of the clauses, bounded by a cap, are kept.
The cap begins at [max_temp_lev2_learnt_clauses](crate::config::Config::max_temp_lev2_learnt_clauses) and grows by [inc_max_temp_lev2_red_cls](crate::config::Config::inc_max_temp_lev2_red_cls) after each tier two reduction.

A clause which is the reason for the value of some atom is *locked*, and never removed.
*/

use crate::{
    config::LBD,
    context::GenericContext,
    db::{ClauseKey, clause::Tier},
    misc::log::targets::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// The tier of a learnt clause with the given glue.
    pub fn tier_for(&self, lbd: LBD) -> Tier {
        if lbd <= self.config.glue_put_lev0_if_below_or_eq {
            Tier::Zero
        } else if lbd <= self.config.glue_put_lev1_if_below_or_eq {
            Tier::One
        } else {
            Tier::Two
        }
    }

    /// True if the clause indexed by `key` is the reason for the value of some atom.
    pub fn is_locked(&self, key: ClauseKey) -> bool {
        match self.clause_db.get(key) {
            Ok(clause) => match clause.literals.first() {
                Some(literal) => self.atom_db.reason_of(literal.atom()) == Some(key),
                None => false,
            },
            Err(_) => false,
        }
    }

    /// Applies any reduction which is due.
    pub fn reduce_if_due(&mut self) {
        if self.schedule.tier_one_conflicts >= self.config.every_lev1_reduce {
            self.schedule.tier_one_conflicts = 0;
            self.reduce_tier_one();
        }
        if self.schedule.tier_two_conflicts >= self.config.every_lev2_reduce {
            self.schedule.tier_two_conflicts = 0;
            self.reduce_tier_two();
        }
    }

    /// Removes each unlocked tier one clause unused since the previous tier one reduction.
    pub fn reduce_tier_one(&mut self) {
        let mut removed = 0;
        for key in self.clause_db.keys_in_tier(Tier::One) {
            if self.clause_db.clauses[key].used {
                self.clause_db.clauses[key].used = false;
            } else if !self.is_locked(key) {
                self.clause_db.delete(key);
                removed += 1;
            }
        }
        log::info!(target: targets::REDUCTION, "Tier one reduction removed {removed}");
    }

    /// Keeps the most active half of the tier two clauses, up to the cap, and grows the cap.
    pub fn reduce_tier_two(&mut self) {
        let mut keys: Vec<ClauseKey> = self
            .clause_db
            .keys_in_tier(Tier::Two)
            .into_iter()
            .filter(|key| !self.is_locked(*key))
            .collect();

        keys.sort_unstable_by(|a, b| {
            let a = self.clause_db.clauses[*a].activity;
            let b = self.clause_db.clauses[*b].activity;
            b.total_cmp(&a)
        });

        let keep = std::cmp::min(keys.len() / 2, self.schedule.tier_two_cap as usize);
        for key in &keys[keep..] {
            self.clause_db.delete(*key);
        }

        self.schedule.tier_two_cap *= self.config.inc_max_temp_lev2_red_cls;
        log::info!(target: targets::REDUCTION, "Tier two reduction removed {}", keys.len() - keep);
    }
}
