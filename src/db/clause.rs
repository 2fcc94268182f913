/*!
A database of clause related things.

Clauses are stored in a single vector and identified by their position, a [ClauseKey].
The key of a deleted clause is kept aside and given to the next clause stored, so the vector is no larger than the greatest count of clauses held at once.

# Watches

Each stored clause has two *watched* literals, always the first and second literals of the clause.
The watch list of a literal holds the key of each clause watching the literal, and is inspected when the literal is valued false.
A clause is removed from the watch lists of its watched literals when deleted, so a recycled key is never watched by a literal outside the clause.

# Tiers

Learnt clauses are kept in one of three tiers, on the glue of the clause when learnt:
- Tier zero clauses are kept for the life of the engine.
- Tier one clauses are kept while used between reductions.
- Tier two clauses are kept while among the most active of the tier.
*/

use crate::{
    config::{Activity, LBD},
    db::ClauseKey,
    structures::{clause::CClause, literal::CLiteral},
    types::err::EngineError,
};

/// Factor applied to the clause activity bump after each conflict.
const ACTIVITY_DECAY: Activity = 0.999;

/// Activity beyond which all clause activities are rescaled.
const ACTIVITY_LIMIT: Activity = 1e20;

/// The tier of a learnt clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Zero,
    One,
    Two,
}

/// A clause, as stored in the database.
#[derive(Debug)]
pub struct StoredClause {
    /// The literals of the clause, with the watched literals first.
    pub literals: CClause,

    /// The tier of the clause, if learnt.
    pub tier: Option<Tier>,

    /// Glue of the clause when learnt.
    pub lbd: LBD,

    pub activity: Activity,

    /// Whether the clause was used in conflict analysis since the last tier one reduction.
    pub used: bool,

    pub deleted: bool,
}

/// The clause database.
#[derive(Default)]
pub struct ClauseDB {
    /// Every clause stored, indexed by key.
    pub(crate) clauses: Vec<StoredClause>,

    /// Watch lists, indexed by literal index.
    pub(crate) watches: Vec<Vec<ClauseKey>>,

    /// Keys of deleted clauses, free for reuse.
    empty_keys: Vec<ClauseKey>,

    bump: Activity,

    /// A count of live clauses of each tier.
    tier_counts: [usize; 3],
}

impl ClauseDB {
    pub fn new() -> Self {
        ClauseDB {
            bump: 1.0,
            ..Default::default()
        }
    }

    /// Grows the watch lists to support `atom_count` atoms.
    pub fn ensure(&mut self, atom_count: usize) {
        if self.watches.len() < 2 * atom_count {
            self.watches.resize_with(2 * atom_count, Vec::default);
        }
    }

    /// The clause indexed by `key`.
    pub fn get(&self, key: ClauseKey) -> Result<&StoredClause, EngineError> {
        match self.clauses.get(key) {
            Some(clause) if !clause.deleted => Ok(clause),
            _ => Err(EngineError::MissingClause(key)),
        }
    }

    /// Stores `clause`, watching the first two literals.
    ///
    /// The clause must contain at least two literals.
    pub fn store(&mut self, clause: CClause, tier: Option<Tier>, lbd: LBD) -> ClauseKey {
        let key = self.empty_keys.pop().unwrap_or(self.clauses.len());
        self.watches[clause[0].index()].push(key);
        self.watches[clause[1].index()].push(key);
        if let Some(tier) = tier {
            self.tier_counts[tier as usize] += 1;
        }

        let stored = StoredClause {
            literals: clause,
            tier,
            lbd,
            activity: 0.0,
            used: false,
            deleted: false,
        };
        match self.clauses.get_mut(key) {
            Some(slot) => *slot = stored,
            None => self.clauses.push(stored),
        }
        key
    }

    /// Removes the clause indexed by `key`.
    ///
    /// The body of the clause is dropped, the key is removed from the watch lists of the clause, and the key is kept for reuse.
    pub fn delete(&mut self, key: ClauseKey) {
        let Some(clause) = self.clauses.get_mut(key) else {
            return;
        };
        if clause.deleted {
            return;
        }
        if let Some(tier) = clause.tier {
            self.tier_counts[tier as usize] -= 1;
        }
        clause.deleted = true;

        let literals = std::mem::take(&mut clause.literals);
        for watched in literals.iter().take(2) {
            if let Some(watchers) = self.watches.get_mut(watched.index()) {
                watchers.retain(|watcher| *watcher != key);
            }
        }
        self.empty_keys.push(key);
    }

    /// A count of live clauses in `tier`.
    pub fn tier_count(&self, tier: Tier) -> usize {
        self.tier_counts[tier as usize]
    }

    /// Keys of live clauses in `tier`.
    pub fn keys_in_tier(&self, tier: Tier) -> Vec<ClauseKey> {
        self.clauses
            .iter()
            .enumerate()
            .filter(|(_, clause)| !clause.deleted && clause.tier == Some(tier))
            .map(|(key, _)| key)
            .collect()
    }

    /// Notes the use of the clause in conflict analysis, bumping the activity of learnt clauses.
    pub fn note_use(&mut self, key: ClauseKey) {
        let Some(clause) = self.clauses.get_mut(key) else {
            return;
        };
        if clause.tier.is_none() {
            return;
        }
        clause.used = true;
        clause.activity += self.bump;
        if clause.activity > ACTIVITY_LIMIT {
            self.rescore_activity();
        }
    }

    /// Increases the clause activity bump, so past bumps decay relative to future bumps.
    pub fn decay_activity(&mut self) {
        self.bump *= 1.0 / ACTIVITY_DECAY;
        if self.bump > ACTIVITY_LIMIT {
            self.rescore_activity();
        }
    }

    fn rescore_activity(&mut self) {
        let factor = 1.0 / ACTIVITY_LIMIT;
        for clause in self.clauses.iter_mut() {
            clause.activity *= factor;
        }
        self.bump *= factor;
    }

    /// The other literal of a live binary clause containing `literal`, if the clause indexed by `key` is such a clause.
    pub fn binary_partner(&self, key: ClauseKey, literal: CLiteral) -> Option<CLiteral> {
        let clause = self.clauses.get(key)?;
        if clause.deleted || clause.literals.len() != 2 {
            return None;
        }
        match clause.literals[0] == literal {
            true => Some(clause.literals[1]),
            false => Some(clause.literals[0]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literals(ints: &[i32]) -> CClause {
        ints.iter()
            .filter_map(|int| crate::structures::literal::encode(*int))
            .collect()
    }

    #[test]
    fn store_and_delete() {
        let mut db = ClauseDB::new();
        db.ensure(3);

        let key = db.store(literals(&[1, -2, 3]), Some(Tier::One), 2);
        assert_eq!(db.tier_count(Tier::One), 1);
        assert!(db.watches[literals(&[1])[0].index()].contains(&key));
        assert!(db.watches[literals(&[-2])[0].index()].contains(&key));
        assert!(!db.watches[literals(&[3])[0].index()].contains(&key));

        db.delete(key);
        db.delete(key);
        assert_eq!(db.tier_count(Tier::One), 0);
        assert_eq!(db.get(key).err(), Some(EngineError::MissingClause(key)));
    }

    #[test]
    fn keys_are_recycled() {
        let mut db = ClauseDB::new();
        db.ensure(4);

        let first = db.store(literals(&[1, 2, 3]), Some(Tier::Two), 4);
        let second = db.store(literals(&[-1, -2]), Some(Tier::Two), 2);
        db.delete(first);
        assert!(!db.watches[literals(&[1])[0].index()].contains(&first));
        assert!(!db.watches[literals(&[2])[0].index()].contains(&first));

        let third = db.store(literals(&[4, -3]), Some(Tier::One), 2);
        assert_eq!(third, first);
        assert_eq!(db.clauses.len(), 2);
        assert_eq!(db.keys_in_tier(Tier::One), vec![third]);
        assert_eq!(db.keys_in_tier(Tier::Two), vec![second]);
        assert!(db.watches[literals(&[4])[0].index()].contains(&third));
        assert!(db.watches[literals(&[-3])[0].index()].contains(&third));
        assert!(db.get(third).is_ok_and(|clause| clause.activity == 0.0 && !clause.used));

        for round in 0..100 {
            let key = db.store(literals(&[1, -4]), Some(Tier::Two), 3 + round % 2);
            db.delete(key);
        }
        assert_eq!(db.clauses.len(), 3);
        assert_eq!(db.tier_count(Tier::Two), 1);
        assert!(db.watches[literals(&[1])[0].index()].is_empty());
    }

    #[test]
    fn binary_partners() {
        let mut db = ClauseDB::new();
        db.ensure(2);
        let binary = db.store(literals(&[1, 2]), None, 0);
        let long = {
            db.ensure(3);
            db.store(literals(&[1, 2, 3]), None, 0)
        };

        let one = literals(&[1])[0];
        assert_eq!(db.binary_partner(binary, one), Some(literals(&[2])[0]));
        assert_eq!(db.binary_partner(long, one), None);
    }

    #[test]
    fn only_learnt_clauses_are_bumped() {
        let mut db = ClauseDB::new();
        db.ensure(2);
        let original = db.store(literals(&[1, 2]), None, 0);
        let learnt = db.store(literals(&[-1, -2]), Some(Tier::Two), 2);

        db.note_use(original);
        db.note_use(learnt);

        assert!(!db.clauses[original].used);
        assert!(db.clauses[learnt].used);
        assert!(db.clauses[learnt].activity > 0.0);
    }
}
