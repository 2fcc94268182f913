/*!
Heuristics for choosing an atom when making a decision.

See [Understanding VSIDS branching heuristics in conflict-driven clause-learning sat solvers](https://arxiv.org/abs/1506.08905) for an overview of VSIDS.
*/

/// Supported branching heuristics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum BranchStrategy {
    /// Variable state independent decaying sum.
    /// Atoms involved in a conflict are bumped, and the bump grows after each conflict.
    Vsids = 0,

    /// Variable move to front.
    /// Atoms involved in a conflict are moved to the front of the queue of atoms.
    Vmtf,

    /// An atom without a value is chosen at random.
    Random,

    /// Alternate between [Vmtf](BranchStrategy::Vmtf) and [Vsids](BranchStrategy::Vsids) on each restart.
    VmtfVsids,
}

impl BranchStrategy {
    /// The minimum BranchStrategy value.
    pub const MIN: i64 = BranchStrategy::Vsids as i64;

    /// The maximum BranchStrategy value.
    pub const MAX: i64 = BranchStrategy::VmtfVsids as i64;
}

impl TryFrom<i64> for BranchStrategy {
    type Error = ();

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Vsids),
            1 => Ok(Self::Vmtf),
            2 => Ok(Self::Random),
            3 => Ok(Self::VmtfVsids),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for BranchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vsids => write!(f, "vsids"),
            Self::Vmtf => write!(f, "vmtf"),
            Self::Random => write!(f, "rand"),
            Self::VmtfVsids => write!(f, "vmtf+vsids"),
        }
    }
}
