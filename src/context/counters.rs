/// Counts for various things which count, roughly.
#[derive(Default)]
pub struct Counters {
    /// A count of every conflict seen.
    pub total_conflicts: usize,

    /// A count of conflicts seen since the last restart.
    ///
    /// As u32 rather than a usize for easier interaction with scheduling variables.
    pub fresh_conflicts: u32,

    /// A count of all decisions made, excluding assumptions.
    pub total_decisions: usize,

    /// A count of all literals propagated.
    pub total_propagations: usize,

    /// The number of restarts.
    pub restarts: usize,

    /// The number of solves.
    pub solves: usize,
}
