/*!
Reports on a solve.
*/

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula, together with the assumptions of the solve, is satisfiable.
    Satisfiable,

    /// The formula, together with the assumptions of the solve, is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula is unknown, for some reason.
    /// For example, the solve was interrupted.
    Unknown,
}

impl Report {
    /// The IPASIR status code of the report: 10 if satisfiable, 20 if unsatisfiable, and 0 otherwise.
    pub fn code(&self) -> i32 {
        match self {
            Self::Satisfiable => 10,
            Self::Unsatisfiable => 20,
            Self::Unknown => 0,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
