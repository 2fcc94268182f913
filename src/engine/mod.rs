/*!
The boundary between a [session](crate::session) and the engine which performs search.

A session requires only a few things of an engine, captured by the [Engine] trait:
- The count of atoms may grow.
- Clauses may be added, between solves.
- A solve may be made under a sequence of assumptions.
- After a satisfiable solve the value of each atom may be read.
- After an unsatisfiable solve the *final conflict* may be read.

# The final conflict

After an unsatisfiable solve, the final conflict is a collection of literals whose negations are a subset of the assumptions of the solve, such that the formula together with the negations is unsatisfiable.
If the formula alone is unsatisfiable the final conflict may be empty.

# Interrupts

An engine is given a flag on construction.
The engine is expected to check the flag regularly during a solve and, if set, to clear the flag and return [Report::Unknown].

The bundled implementation is [Context](crate::context::Context).
*/

use std::sync::{Arc, atomic::AtomicBool};

use crate::{
    config::Config,
    reports::Report,
    structures::{atom::Atom, clause::CClause, literal::CLiteral},
    types::err::ErrorKind,
};

/// Methods required of an engine by a [session](crate::session::Session).
pub trait Engine: Sized {
    /// An engine configured by `config`, which polls `interrupt` during a solve.
    fn from_config(config: &Config, interrupt: Arc<AtomicBool>) -> Self;

    /// A name and version for the engine.
    fn signature() -> String;

    /// Grows the engine to include at least `count` atoms.
    fn ensure_atoms(&mut self, count: Atom);

    /// Adds `clause` to the formula of the engine.
    ///
    /// Each atom of the clause must be below the count of atoms ensured.
    fn add_clause(&mut self, clause: CClause) -> Result<(), ErrorKind>;

    /// Determines the satisfiability of the formula with each assumption true.
    fn solve_given(&mut self, assumptions: &[CLiteral]) -> Result<Report, ErrorKind>;

    /// The value of `atom` on the model found by the most recent satisfiable solve, if any.
    fn model_value(&self, atom: Atom) -> Option<bool>;

    /// The final conflict of the most recent unsatisfiable solve.
    fn final_conflict(&self) -> &[CLiteral];
}
