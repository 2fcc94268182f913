/*!
Schedulers, used to interrupt a solve for some task.

# Restarts

A restart forgets every decision made (and every assumption, which are then remade), while keeping learnt clauses.
When a restart is due is determined by [RestartType]:
- Glue: when the average glue of recent learnt clauses exceeds the average glue of all learnt clauses, by some margin.
- Geometric: after some count of conflicts since the last restart, where the count grows by [restart_inc](crate::config::Config::restart_inc) after each restart.
- Luby: after some count of conflicts since the last restart, given by the luby sequence scaled by [restart_first](crate::config::Config::restart_first).

# Reductions

Reductions of the learnt clauses of tier one and tier two are scheduled by a count of conflicts since the last reduction of the tier.
See [reduction](crate::procedures::reduction).
*/

use crate::{
    config::{BranchStrategy, Config, LBD, RestartType},
    context::GenericContext,
    db::atom::HeapScore,
    generic::{bounded_queue::BoundedQueue, luby::Luby},
    misc::log::targets::{self},
};

/// The count of recent learnt clauses whose glue is compared against the glue of all learnt clauses.
const GLUE_QUEUE_BOUND: usize = 50;

/// A glue restart is due if the recent average glue scaled by this factor exceeds the overall average glue.
const GLUE_MARGIN: f64 = 0.8;

/// State for scheduling restarts and reductions.
pub struct Schedule {
    /// The current element in the luby sequence.
    pub luby: Luby,

    /// The count of conflicts after which a geometric restart is due.
    pub geometric_limit: f64,

    /// Glue of recent learnt clauses.
    pub glue_queue: BoundedQueue,

    /// Conflicts since the last tier one reduction.
    pub tier_one_conflicts: u32,

    /// Conflicts since the last tier two reduction.
    pub tier_two_conflicts: u32,

    /// The most tier two clauses kept after a tier two reduction.
    pub tier_two_cap: f64,
}

impl Schedule {
    pub fn new(config: &Config) -> Self {
        Schedule {
            luby: Luby::default(),
            geometric_limit: config.restart_first as f64,
            glue_queue: BoundedQueue::new(GLUE_QUEUE_BOUND),
            tier_one_conflicts: 0,
            tier_two_conflicts: 0,
            tier_two_cap: config.max_temp_lev2_learnt_clauses as f64,
        }
    }
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Notes a conflict from which a clause with the given glue was learnt.
    pub fn note_conflict(&mut self, lbd: LBD) {
        self.counters.total_conflicts += 1;
        self.counters.fresh_conflicts += 1;
        self.schedule.glue_queue.push(lbd);
        self.schedule.tier_one_conflicts += 1;
        self.schedule.tier_two_conflicts += 1;
    }

    /// Returns whether it is time for a glue restart.
    fn glue_restart_due(&self) -> bool {
        let queue = &self.schedule.glue_queue;
        queue.is_full() && queue.average() * GLUE_MARGIN > queue.total_average()
    }

    /// Returns whether it is time for a geometric restart.
    fn geometric_restart_due(&self) -> bool {
        self.counters.fresh_conflicts as f64 >= self.schedule.geometric_limit
    }

    /// Returns whether it is time for a luby restart.
    fn luby_restart_due(&self) -> bool {
        self.counters.fresh_conflicts
            >= self
                .config
                .restart_first
                .saturating_mul(self.schedule.luby.current())
    }

    /// Returns whether a restart is due, as configured.
    pub fn restart_due(&self) -> bool {
        if self.counters.fresh_conflicts == 0 {
            return false;
        }
        match self.config.restart_type {
            RestartType::Glue => self.glue_restart_due(),
            RestartType::Geometric => self.geometric_restart_due(),
            RestartType::GlueGeometric => self.glue_restart_due() || self.geometric_restart_due(),
            RestartType::Luby => self.luby_restart_due(),
            RestartType::Never => false,
        }
    }

    /// Forgets all decisions and assumptions, and advances the schedule of restarts.
    pub fn restart(&mut self) {
        self.backjump(0);
        self.counters.restarts += 1;
        self.counters.fresh_conflicts = 0;

        self.schedule.geometric_limit *= self.config.restart_inc;
        self.schedule.luby.next();
        self.schedule.glue_queue.clear();
        self.atom_db.reset_best_length();

        if self.config.branch_strategy == BranchStrategy::VmtfVsids {
            let score = match self.atom_db.score() {
                HeapScore::Activity => HeapScore::Recency,
                HeapScore::Recency => HeapScore::Activity,
            };
            self.atom_db.use_score(score);
        }

        log::info!(target: targets::RESTART, "Restart {}", self.counters.restarts);
    }
}
