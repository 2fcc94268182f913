//! Clauses, as a sequence of literals.
//!
//! Within the engine a clause is a vector of [CLiteral]s.
//! The [Clause] trait collects a handful of methods useful for inspecting a clause, and is implemented for any slice of canonical literals.

use crate::structures::literal::{decode, CLiteral};

/// The canonical representation of a clause.
pub type CClause = Vec<CLiteral>;

/// Methods for inspecting a clause.
pub trait Clause {
    /// The clause as a string in DIMACS form, optionally terminated by `0`.
    fn as_dimacs(&self, zero: bool) -> String;

    /// The count of literals in the clause.
    fn size(&self) -> usize;
}

impl Clause for [CLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in self {
            the_string.push_str(&format!("{} ", decode(*literal)));
        }
        if zero {
            the_string.push('0');
        } else {
            the_string.pop();
        }
        the_string
    }

    fn size(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::encode;

    #[test]
    fn dimacs_string() {
        let clause: CClause = [1, -2, 3].iter().filter_map(|l| encode(*l)).collect();
        assert_eq!(clause.as_dimacs(true), "1 -2 3 0");
        assert_eq!(clause.as_dimacs(false), "1 -2 3");
        assert_eq!(clause.size(), 3);
    }
}
