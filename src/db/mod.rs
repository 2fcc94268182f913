//! Databases for holding information relevant to a solve.
//!
//! - [The clause database](crate::db::clause)
//!   + A collection of clauses, each indexed by a [ClauseKey], and the watch lists of each literal.
//!     From an external perspective there are two important kinds of clause:
//!     * Original clauses, added to the engine from some external source (e.g. a session).
//!     * Learnt clauses, added to the engine by conflict analysis.
//!       Every learnt clause is a consequence of the original clauses, and so learnt clauses may be removed without changing the satisfiability of the formula.
//! - [The atom database](crate::db::atom)
//!   + Properties of atoms, such as the current valuation, the decision level at which each atom was valued, and the activity of each atom.
//! - [The trail](crate::db::trail)
//!   + The sequence of literals valued, partitioned into decision levels.

pub mod atom;
pub mod clause;
pub mod trail;

/// The key of a clause in the [clause database](crate::db::clause).
pub type ClauseKey = usize;

/// The index of a decision level.
///
/// Level zero contains consequences of the formula alone.
pub type LevelIndex = u32;
