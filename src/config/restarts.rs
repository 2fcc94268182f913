/// When to restart, i.e. forget all decisions made while keeping any clauses learnt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestartType {
    /// Restart when the average glue of recently learnt clauses is high relative to the average glue of all learnt clauses.
    Glue = 0,

    /// Restart after a count of conflicts which grows geometrically.
    Geometric,

    /// Restart when either the glue or the geometric criteria is met.
    GlueGeometric,

    /// Restart after a count of conflicts which follows the luby sequence.
    Luby,

    /// Never restart.
    Never,
}

impl RestartType {
    /// The minimum RestartType value.
    pub const MIN: i64 = RestartType::Glue as i64;

    /// The maximum RestartType value.
    pub const MAX: i64 = RestartType::Never as i64;
}

impl TryFrom<i64> for RestartType {
    type Error = ();

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Glue),
            1 => Ok(Self::Geometric),
            2 => Ok(Self::GlueGeometric),
            3 => Ok(Self::Luby),
            4 => Ok(Self::Never),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for RestartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Glue => write!(f, "glue"),
            Self::Geometric => write!(f, "geom"),
            Self::GlueGeometric => write!(f, "glue+geom"),
            Self::Luby => write!(f, "luby"),
            Self::Never => write!(f, "never"),
        }
    }
}
