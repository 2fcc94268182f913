//! The trail of literals valued during a solve.
//!
//! Literals are pushed to the trail in the order they are valued.
//! Each decision (or assumption) opens a fresh decision level, and the start of each level on the trail is noted, so a backjump to some level amounts to truncating the trail at the start of the following level.
//!
//! Literals on the trail are propagated in order, and the trail also serves as the queue of literals to propagate.

use crate::{db::LevelIndex, structures::literal::CLiteral};

/// The trail struct.
#[derive(Default)]
pub struct Trail {
    /// The literals valued, in order.
    pub literals: Vec<CLiteral>,

    /// The index of the first literal of each (non-zero) decision level.
    pub level_starts: Vec<usize>,

    /// The index of the next literal to propagate.
    pub q_head: usize,
}

impl Trail {
    /// The current decision level.
    pub fn decision_level(&self) -> LevelIndex {
        self.level_starts.len() as LevelIndex
    }

    /// Opens a fresh decision level.
    pub fn push_level(&mut self) {
        self.level_starts.push(self.literals.len());
    }

    /// The next literal to propagate, if any, noting the literal as propagated.
    pub fn next_to_propagate(&mut self) -> Option<CLiteral> {
        let literal = self.literals.get(self.q_head).copied()?;
        self.q_head += 1;
        Some(literal)
    }

    /// Notes every literal on the trail as propagated.
    pub fn skip_propagation(&mut self) {
        self.q_head = self.literals.len();
    }
}
