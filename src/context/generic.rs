use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::{
    config::Config,
    db::{
        ClauseKey,
        atom::{AtomDB, HeapScore},
        clause::ClauseDB,
        trail::Trail,
    },
    procedures::schedulers::Schedule,
    structures::{clause::CClause, literal::CLiteral},
};

use super::Counters;

/// A generic context, parameratised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// # Example
///
/// ```rust
/// # use std::sync::{Arc, atomic::AtomicBool};
/// # use otter_ipasir::context::GenericContext;
/// # use otter_ipasir::generic::random::MinimalPCG32;
/// # use otter_ipasir::config::Config;
/// # use rand::SeedableRng;
/// let context = GenericContext::from_config_with_rng(
///     Config::default(),
///     MinimalPCG32::from_seed(7_u64.to_le_bytes()),
///     Arc::new(AtomicBool::new(false)),
/// );
/// assert!(context.is_consistent());
/// ```
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The trail.
    /// See [db::trail](crate::db::trail) for details.
    pub trail: Trail,

    /// The source of rng.
    pub rng: R,

    /// Scheduling of restarts and reductions.
    pub schedule: Schedule,

    /// The assumptions of the current solve.
    pub(crate) assumptions: CClause,

    /// The valuation found by the most recent satisfiable solve.
    pub(crate) model: Vec<Option<bool>>,

    /// The final conflict of the most recent unsatisfiable solve.
    pub(crate) final_conflict: CClause,

    /// False once the formula is known to be unsatisfiable, regardless of assumptions.
    pub(crate) consistent: bool,

    /// Interrupts a solve, if set.
    interrupt: Arc<AtomicBool>,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Creates a context from a configuration and source of randomness.
    pub fn from_config_with_rng(config: Config, rng: R, interrupt: Arc<AtomicBool>) -> Self {
        let score = match config.branch_strategy {
            crate::config::BranchStrategy::Vmtf => HeapScore::Recency,
            _ => HeapScore::Activity,
        };
        Self {
            atom_db: AtomDB::new(score),
            clause_db: ClauseDB::new(),
            trail: Trail::default(),
            schedule: Schedule::new(&config),

            config,

            counters: Counters::default(),
            rng,

            assumptions: Vec::default(),
            model: Vec::default(),
            final_conflict: Vec::default(),
            consistent: true,
            interrupt,
        }
    }

    /// False if the formula of the context is known to be unsatisfiable.
    pub fn is_consistent(&self) -> bool {
        self.consistent
    }

    /// Values `literal` at the current decision level and places the literal on the trail.
    pub fn assign(&mut self, literal: CLiteral, reason: Option<ClauseKey>) {
        self.atom_db
            .set_value(literal, self.trail.decision_level(), reason);
        self.trail.literals.push(literal);
    }

    /// Clears the interrupt flag and returns true, if set.
    pub fn take_interrupt(&self) -> bool {
        self.interrupt.load(Ordering::Relaxed) && self.interrupt.swap(false, Ordering::Relaxed)
    }
}
