//! Recovery from a conflict.
//!
//! # Overview
//!
//! A backjump is a 'jump' from some (higher) decision level to some previous (lower) decision level.
//!
//! Typically, a backjump is made from level *l* to level *l - i* because a conflict was found at level *l* and analysis produced a clause which asserts some literal at level *l - i*.
//! In this case, all decisions and all consequences of those decisions from level *l* down to level *l - i* are undone.
//!
//! A backjump to level zero is also made on a restart, and at the end of each solve.
//!
//! Before the trail is shortened, the value of each literal on the trail is offered as a best phase.
//! See [PolarityMode](crate::config::PolarityMode).
//!
//! # Literature
//!
//! See [Chronological Backtracking](https://doi.org/10.1007/978-3-319-94144-8_7) for a discussion of chronological and non-chronological backjumping.

use crate::{context::GenericContext, db::LevelIndex};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Backjumps to the given target level.
    ///
    /// Passing a target level at or above the current level is safe --- nothing will happen.
    pub fn backjump(&mut self, target: LevelIndex) {
        let Some(&start) = self.trail.level_starts.get(target as usize) else {
            return;
        };

        self.atom_db.note_trail(&self.trail.literals);

        for literal in self.trail.literals.drain(start..) {
            self.atom_db.drop_value(literal.atom());
        }
        self.trail.level_starts.truncate(target as usize);
        self.trail.skip_propagation();
    }
}
