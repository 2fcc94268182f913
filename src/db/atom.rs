/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Things include:
- A current (often partial) valuation.
- A record of the decision level at which each atom was valued, and the clause (if any) which forced the value.
- The saved and best phase of each atom.
- An [IndexHeap] over atoms, where any atom without a value is 'active' on the heap.

# Activity and recency

Two scores are kept for each atom:
- An *activity*, bumped when the atom is used in conflict analysis and decayed by growing the bump (VSIDS).
- A *stamp*, the count of bumps made when the atom was last bumped (VMTF).

The heap mirrors exactly one of the scores, as determined by the [HeapScore] in use.
Switching the score revalues every atom on the heap.
*/

use crate::{
    config::Activity,
    db::{ClauseKey, LevelIndex},
    generic::index_heap::IndexHeap,
    structures::{atom::Atom, literal::CLiteral},
};

/// Factor applied to the activity bump after each conflict.
const ACTIVITY_DECAY: Activity = 0.95;

/// Activity beyond which all activities are rescaled.
const ACTIVITY_LIMIT: Activity = 1e100;

/// The score mirrored on the heap of atoms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeapScore {
    /// VSIDS activity.
    Activity,

    /// VMTF recency.
    Recency,
}

/// The atom database.
pub struct AtomDB {
    /// The current valuation, indexed by atom.
    valuation: Vec<Option<bool>>,

    /// The decision level at which each atom was valued, meaningful only when the atom has a value.
    levels: Vec<LevelIndex>,

    /// The clause which forced the value of an atom, if any.
    reasons: Vec<Option<ClauseKey>>,

    /// The most recent value of each atom.
    saved_phase: Vec<bool>,

    /// The value of each atom on the longest trail seen since the last reset.
    best_phase: Vec<bool>,

    /// The length of the trail the best phase was taken from.
    best_length: usize,

    activity: Vec<Activity>,
    stamps: Vec<Activity>,
    bump: Activity,
    stamp: Activity,

    /// Atoms, ordered by whichever score is in use.
    heap: IndexHeap<Activity>,

    /// The score mirrored on the heap.
    score: HeapScore,

    /// Scratch flags for conflict analysis, always clear between analyses.
    pub seen: Vec<bool>,
}

impl AtomDB {
    pub fn new(score: HeapScore) -> Self {
        AtomDB {
            valuation: Vec::default(),
            levels: Vec::default(),
            reasons: Vec::default(),
            saved_phase: Vec::default(),
            best_phase: Vec::default(),
            best_length: 0,
            activity: Vec::default(),
            stamps: Vec::default(),
            bump: 1.0,
            stamp: 0.0,
            heap: IndexHeap::default(),
            score,
            seen: Vec::default(),
        }
    }

    /// A count of atoms in the database.
    pub fn count(&self) -> usize {
        self.valuation.len()
    }

    /// Grows the database to include every atom below `count`.
    pub fn ensure(&mut self, count: usize) {
        let previous = self.count();
        if count <= previous {
            return;
        }
        self.valuation.resize(count, None);
        self.levels.resize(count, 0);
        self.reasons.resize(count, None);
        self.saved_phase.resize(count, false);
        self.best_phase.resize(count, false);
        self.activity.resize(count, 0.0);
        self.stamps.resize(count, 0.0);
        self.seen.resize(count, false);
        for atom in previous..count {
            self.heap.add(atom, 0.0);
            self.heap.activate(atom);
        }
    }

    /// The value of `atom`, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation[atom as usize]
    }

    /// The value of `literal`, if any.
    pub fn value_of_literal(&self, literal: CLiteral) -> Option<bool> {
        self.valuation[literal.atom() as usize].map(|value| value == literal.polarity())
    }

    /// The level at which `atom` was valued.
    pub fn level_of(&self, atom: Atom) -> LevelIndex {
        self.levels[atom as usize]
    }

    /// The clause which forced the value of `atom`, if any.
    pub fn reason_of(&self, atom: Atom) -> Option<ClauseKey> {
        self.reasons[atom as usize]
    }

    /// The current valuation, indexed by atom.
    pub fn valuation(&self) -> &[Option<bool>] {
        &self.valuation
    }

    /// Values the atom of `literal` to match the polarity of `literal`.
    pub fn set_value(&mut self, literal: CLiteral, level: LevelIndex, reason: Option<ClauseKey>) {
        let atom = literal.atom() as usize;
        self.valuation[atom] = Some(literal.polarity());
        self.levels[atom] = level;
        self.reasons[atom] = reason;
    }

    /// Clears the value of `atom`, saving the phase and returning the atom to the heap.
    pub fn drop_value(&mut self, atom: Atom) {
        let index = atom as usize;
        if let Some(value) = self.valuation[index].take() {
            self.saved_phase[index] = value;
        }
        self.reasons[index] = None;
        self.heap.activate(index);
    }

    pub fn saved_phase_of(&self, atom: Atom) -> bool {
        self.saved_phase[atom as usize]
    }

    pub fn best_phase_of(&self, atom: Atom) -> bool {
        self.best_phase[atom as usize]
    }

    /// Takes the best phase from `trail`, if longer than any trail seen since the last reset.
    pub fn note_trail(&mut self, trail: &[CLiteral]) {
        if trail.len() > self.best_length {
            self.best_length = trail.len();
            for literal in trail {
                self.best_phase[literal.atom() as usize] = literal.polarity();
            }
        }
    }

    /// Forgets the length of the trail the best phase was taken from, though not the phase itself.
    pub fn reset_best_length(&mut self) {
        self.best_length = 0;
    }
}

/// Methods for inspecting and mutating the scores of atoms.
impl AtomDB {
    /// The score mirrored on the heap.
    pub fn score(&self) -> HeapScore {
        self.score
    }

    /// Switches the score mirrored on the heap, revaluing each atom.
    pub fn use_score(&mut self, score: HeapScore) {
        if self.score == score {
            return;
        }
        self.score = score;
        let source = match score {
            HeapScore::Activity => &self.activity,
            HeapScore::Recency => &self.stamps,
        };
        for (atom, value) in source.iter().enumerate() {
            self.heap.revalue(atom, *value);
        }
        self.heap.heapify();
    }

    pub fn activity_of(&self, atom: Atom) -> Activity {
        self.activity[atom as usize]
    }

    /// Bumps both scores of `atom`, and updates the position of `atom` on the heap.
    pub fn bump_activity(&mut self, atom: Atom) {
        let index = atom as usize;

        self.activity[index] += self.bump;
        if self.activity[index] > ACTIVITY_LIMIT {
            self.rescore_activity();
        }

        self.stamp += 1.0;
        self.stamps[index] = self.stamp;

        let value = match self.score {
            HeapScore::Activity => self.activity[index],
            HeapScore::Recency => self.stamps[index],
        };
        self.heap.revalue(index, value);
        self.heap.heapify_if_active(index);
    }

    /// Increases the activity bump, so past bumps decay relative to future bumps.
    pub fn decay_activity(&mut self) {
        self.bump *= 1.0 / ACTIVITY_DECAY;
        if self.bump > ACTIVITY_LIMIT {
            self.rescore_activity();
        }
    }

    /// Rescales all activities and the activity bump, preserving order.
    fn rescore_activity(&mut self) {
        let factor = 1.0 / ACTIVITY_LIMIT;
        for activity in self.activity.iter_mut() {
            *activity *= factor;
        }
        self.bump *= factor;
        if self.score == HeapScore::Activity {
            self.heap.apply_to_all(|value| value * factor);
        }
    }

    /// Pops the highest scoring atom without a value from the heap.
    pub fn heap_pop_unvalued(&mut self) -> Option<Atom> {
        while let Some(index) = self.heap.pop_max() {
            if self.valuation[index].is_none() {
                return Some(index as Atom);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_and_phases() {
        let mut db = AtomDB::new(HeapScore::Activity);
        db.ensure(3);
        assert_eq!(db.count(), 3);

        let literal = CLiteral::new(1, false);
        db.set_value(literal, 2, Some(7));
        assert_eq!(db.value_of(1), Some(false));
        assert_eq!(db.value_of_literal(literal), Some(true));
        assert_eq!(db.value_of_literal(literal.negate()), Some(false));
        assert_eq!(db.level_of(1), 2);
        assert_eq!(db.reason_of(1), Some(7));

        db.drop_value(1);
        assert_eq!(db.value_of(1), None);
        assert_eq!(db.reason_of(1), None);
        assert!(!db.saved_phase_of(1));
    }

    #[test]
    fn activity_order() {
        let mut db = AtomDB::new(HeapScore::Activity);
        db.ensure(4);
        db.bump_activity(2);
        db.decay_activity();
        db.bump_activity(3);
        db.bump_activity(2);
        assert!(db.activity_of(2) > db.activity_of(3));

        assert_eq!(db.heap_pop_unvalued(), Some(2));
        assert_eq!(db.heap_pop_unvalued(), Some(3));
    }

    #[test]
    fn recency_order() {
        let mut db = AtomDB::new(HeapScore::Activity);
        db.ensure(4);
        for _ in 0..4 {
            db.bump_activity(1);
        }
        db.bump_activity(0);

        db.use_score(HeapScore::Recency);
        assert_eq!(db.heap_pop_unvalued(), Some(0));
        assert_eq!(db.heap_pop_unvalued(), Some(1));
    }

    #[test]
    fn valued_atoms_are_skipped() {
        let mut db = AtomDB::new(HeapScore::Activity);
        db.ensure(2);
        db.bump_activity(0);
        db.set_value(CLiteral::new(0, true), 0, None);
        assert_eq!(db.heap_pop_unvalued(), Some(1));
        assert_eq!(db.heap_pop_unvalued(), None);
    }
}
