/*!
Configuration of an engine.

All configuration for an [engine](crate::context) is contained within [Config].

A [session](crate::session) holds a *pending* configuration while in the configuration state.
The pending configuration may be revised through the [registry] of options, and is frozen once the engine is constructed (when input begins).

Some parameters are used directly by the engine, while others are recorded for engines with a counterpart.
For example, the bundled engine does not perform variable elimination, and so the ratio of eliminated variables is recorded but unused.

# Fractional parameters

Fractional parameters are held as an [f64], though are set through the registry as integers scaled by 100.
E.g., setting `restart_inc` to `125` sets [Config::restart_inc] to 1.25.
*/

mod branching;
pub use branching::BranchStrategy;

mod polarity;
pub use polarity::PolarityMode;

mod restarts;
pub use restarts::RestartType;

pub mod registry;
pub use registry::{ConfigOption, OptionId};

/// Literal block distance, a.k.a 'glue'.
///
/// See [On the Glucose SAT Solver](https://dx.doi.org/10.1142/S0218213018400018) for an overview of LBD.
pub type LBD = u32;

/// Representation used for clause and atom activity.
pub type Activity = f64;

/// The primary configuration structure.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// The heuristic used to choose an atom when making a decision.
    pub branch_strategy: BranchStrategy,

    /// The ratio of atoms to eliminate per round of elimination.
    pub var_elim_ratio_per_iter: f64,

    /// When to restart.
    pub restart_type: RestartType,

    /// The polarity given to an atom chosen when making a decision.
    pub polarity_mode: PolarityMode,

    /// The growth of [max_temp_lev2_learnt_clauses](Config::max_temp_lev2_learnt_clauses) after each tier two reduction.
    pub inc_max_temp_lev2_red_cls: f64,

    /// Learnt clauses with glue at most this bound are kept until the engine is dropped.
    pub glue_put_lev0_if_below_or_eq: LBD,

    /// Learnt clauses with glue at most this bound (and above the tier zero bound) are in tier one.
    pub glue_put_lev1_if_below_or_eq: LBD,

    /// Tier one clauses unused since the previous tier one reduction are removed every this many conflicts.
    pub every_lev1_reduce: u32,

    /// The least active tier two clauses are removed every this many conflicts.
    pub every_lev2_reduce: u32,

    /// Whether to apply bounded variable addition.
    pub do_bva: bool,

    /// The most tier two clauses kept after a tier two reduction.
    pub max_temp_lev2_learnt_clauses: u32,

    /// Whether to search without interruption by scheduled simplification.
    pub never_stop_search: bool,

    /// Whether to minimise learnt clauses through binary implications.
    /// 0 for never, 1 for small clauses with small glue, 2 for always.
    pub do_minim_red_more_more: u32,

    /// The largest learnt clause minimised through binary implications, if bounded.
    pub max_num_lits_more_more_red_min: u32,

    /// The largest glue of a learnt clause minimised through binary implications, if bounded.
    pub max_glue_more_minim: LBD,

    /// A multiplier on the time given to simplification.
    pub orig_global_timeout_multiplier: u32,

    /// The growth of the conflict budget of each search.
    pub num_conflicts_of_search_inc: f64,

    /// The most binary clauses examined when minimising a learnt clause through binary implications.
    pub more_red_minim_limit_binary: u32,

    /// The factor by which the interval between geometric restarts grows.
    pub restart_inc: f64,

    /// The (initial) count of conflicts between restarts.
    pub restart_first: u32,
}

impl Default for Config {
    /// The default configuration is (roughly) configured to provide quick, deterministic, results on small formulas.
    fn default() -> Self {
        Config {
            branch_strategy: BranchStrategy::Vsids,
            var_elim_ratio_per_iter: 0.8,
            restart_type: RestartType::GlueGeometric,
            polarity_mode: PolarityMode::Automatic,
            inc_max_temp_lev2_red_cls: 1.0,
            glue_put_lev0_if_below_or_eq: 3,
            glue_put_lev1_if_below_or_eq: 6,
            every_lev1_reduce: 10000,
            every_lev2_reduce: 15000,
            do_bva: false,
            max_temp_lev2_learnt_clauses: 30000,
            never_stop_search: false,
            do_minim_red_more_more: 1,
            max_num_lits_more_more_red_min: 1,
            max_glue_more_minim: 4,
            orig_global_timeout_multiplier: 4,
            num_conflicts_of_search_inc: 1.0,
            more_red_minim_limit_binary: 200,
            restart_inc: 1.1,
            restart_first: 100,
        }
    }
}
