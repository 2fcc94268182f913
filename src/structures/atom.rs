/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

That is, the atoms of an engine are [0..*m*) for some *m*, and may be used directly as the indicies of a structure.

An external (integer) literal ±*n* refers to atom *n - 1*.
So, as an external literal is a non-zero i32, the largest atom is one less than [i32::MAX].

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum count of atoms.
pub const ATOM_COUNT_MAX: Atom = i32::MAX.unsigned_abs();
