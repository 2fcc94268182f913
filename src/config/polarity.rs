/// The polarity given to an atom chosen when making a decision.
///
/// Note, the bundled engine does not distinguish between stable and focused modes of search, and so [Automatic](PolarityMode::Automatic) and [Stable](PolarityMode::Stable) are each instances of phase saving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolarityMode {
    /// Always true.
    Positive = 0,

    /// Always false.
    Negative,

    /// Chosen at random.
    Random,

    /// The most recent value of the atom.
    Automatic,

    /// The most recent value of the atom.
    Stable,

    /// The negation of the value of the atom on the longest trail seen.
    BestInverted,

    /// The value of the atom on the longest trail seen.
    Best,

    /// The most recent value of the atom.
    Saved,
}

impl PolarityMode {
    /// The minimum PolarityMode value.
    pub const MIN: i64 = PolarityMode::Positive as i64;

    /// The maximum PolarityMode value.
    pub const MAX: i64 = PolarityMode::Saved as i64;
}

impl TryFrom<i64> for PolarityMode {
    type Error = ();

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Positive),
            1 => Ok(Self::Negative),
            2 => Ok(Self::Random),
            3 => Ok(Self::Automatic),
            4 => Ok(Self::Stable),
            5 => Ok(Self::BestInverted),
            6 => Ok(Self::Best),
            7 => Ok(Self::Saved),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for PolarityMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "pos"),
            Self::Negative => write!(f, "neg"),
            Self::Random => write!(f, "rnd"),
            Self::Automatic => write!(f, "auto"),
            Self::Stable => write!(f, "stable"),
            Self::BestInverted => write!(f, "best-inv"),
            Self::Best => write!(f, "best"),
            Self::Saved => write!(f, "saved"),
        }
    }
}
