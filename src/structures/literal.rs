//! Literals are atoms paired with a (boolean) polarity.
//!
//! Literals meet the library in two forms:
//! - As an [IntLiteral], a non-zero i32 whose magnitude is one more than an atom and whose sign is the polarity.
//!   This is the form used by the IPASIR APIs, and by DIMACS.
//! - As a [CLiteral], the 'canonical' form used by the engine, made of an atom and a boolean.
//!
//! The (pure) codec between the two is given by [encode] and [decode].
//!
//! ```rust
//! # use otter_ipasir::structures::literal::{encode, decode, CLiteral};
//! let literal = encode(-79).unwrap();
//!
//! assert_eq!(literal.atom(), 78);
//! assert!(!literal.polarity());
//! assert_eq!(literal.index(), 157);
//!
//! assert_eq!(decode(literal), -79);
//! assert_eq!(decode(literal.negate()), 79);
//! assert!(encode(0).is_none());
//! ```
//!
//! Each literal also has an *index*, `2·atom + negated`, used to index structures which hold information on literals, such as watch lists or the failed assumption flags of a session.

use crate::structures::atom::Atom;

/// The representation of a literal used by the IPASIR APIs.
pub type IntLiteral = i32;

/// The canonical representation of a literal as an atom paired with a boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CLiteral {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

impl CLiteral {
    /// A fresh literal, specified by pairing an atom with a boolean.
    pub const fn new(atom: Atom, polarity: bool) -> Self {
        CLiteral { atom, polarity }
    }

    /// The negation of the literal.
    pub const fn negate(&self) -> Self {
        CLiteral {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    /// The atom of the literal.
    pub const fn atom(&self) -> Atom {
        self.atom
    }

    /// The polarity of the literal.
    pub const fn polarity(&self) -> bool {
        self.polarity
    }

    /// The index of the literal: twice the atom, plus one if the literal is negative.
    pub const fn index(&self) -> usize {
        ((self.atom as usize) << 1) | (!self.polarity as usize)
    }

    /// The literal with the given index.
    pub const fn from_index(index: usize) -> Self {
        CLiteral {
            atom: (index >> 1) as Atom,
            polarity: index & 1 == 0,
        }
    }
}

/// The canonical literal of an integer literal, or none if the literal is zero or has no atom.
///
/// As atoms are bounded by [ATOM_COUNT_MAX](crate::structures::atom::ATOM_COUNT_MAX), [i32::MIN] has no corresponding literal.
pub fn encode(literal: IntLiteral) -> Option<CLiteral> {
    match literal {
        0 | IntLiteral::MIN => None,
        _ => Some(CLiteral::new(
            literal.unsigned_abs() - 1,
            literal.is_positive(),
        )),
    }
}

/// The integer literal of a canonical literal.
pub fn decode(literal: CLiteral) -> IntLiteral {
    // Atoms are bounded so that a successor fits in an i32.
    let magnitude = (literal.atom() + 1) as IntLiteral;
    match literal.polarity() {
        true => magnitude,
        false => -magnitude,
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", decode(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codec_extremes() {
        let max = encode(i32::MAX).unwrap();
        assert_eq!(max.atom(), (i32::MAX - 1) as Atom);
        assert_eq!(decode(max), i32::MAX);

        let min = encode(-i32::MAX).unwrap();
        assert_eq!(decode(min), -i32::MAX);

        assert!(encode(i32::MIN).is_none());
    }

    #[test]
    fn index_pairs() {
        let p = encode(3).unwrap();
        let not_p = encode(-3).unwrap();

        assert_eq!(p.index(), 4);
        assert_eq!(not_p.index(), 5);
        assert_eq!(CLiteral::from_index(p.index()), p);
        assert_eq!(CLiteral::from_index(not_p.index()), not_p);
        assert_eq!(p.negate(), not_p);
    }
}
