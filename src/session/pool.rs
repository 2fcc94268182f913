/*!
The variable pool of a session, together with the store of failed assumption flags.

The pool size is the count of atoms the engine has been asked to support, and only grows.
The store holds one flag for each literal of the pool, indexed by [literal index](crate::structures::literal::CLiteral::index), and so is always at least twice the pool size.

The pool holds at most [POOL_SIZE_MAX] atoms, and a session refuses any literal whose atom lies beyond this bound.

After an unsatisfiable solve each literal of the final conflict of the engine is marked.
As the final conflict holds negated assumptions, an assumption `lit` failed exactly when `-lit` is marked.
*/

use crate::structures::{atom::Atom, literal::CLiteral};

/// The maximum count of atoms in a pool.
pub const POOL_SIZE_MAX: Atom = 1 << 26;

/// The variable pool and failed assumption store.
#[derive(Debug, Default)]
pub struct VariablePool {
    /// The count of atoms in the pool.
    size: Atom,

    /// Failed flags, indexed by literal index.
    failed: Vec<bool>,
}

impl VariablePool {
    /// The count of atoms in the pool.
    pub fn size(&self) -> Atom {
        self.size
    }

    /// True if `atom` is in the pool.
    pub fn contains(&self, atom: Atom) -> bool {
        atom < self.size
    }

    /// True if `atom` may be added to the pool.
    pub fn admits(atom: Atom) -> bool {
        atom < POOL_SIZE_MAX
    }

    /// Grows the pool to contain `atom`, returning the fresh size if the pool grew.
    pub fn grow_to_include(&mut self, atom: Atom) -> Option<Atom> {
        if self.contains(atom) {
            return None;
        }
        self.size = atom + 1;
        let required = 2 * self.size as usize;
        if self.failed.len() < required {
            self.failed.resize(required, false);
        }
        Some(self.size)
    }

    /// Marks `literal`, if in the pool.
    pub fn mark(&mut self, literal: CLiteral) {
        if let Some(flag) = self.failed.get_mut(literal.index()) {
            *flag = true;
        }
    }

    /// True if `literal` is marked.
    pub fn is_marked(&self, literal: CLiteral) -> bool {
        self.failed.get(literal.index()).copied().unwrap_or(false)
    }

    /// Clears every mark.
    pub fn reset(&mut self) {
        self.failed.fill(false);
    }

    /// The count of flags in the store.
    pub fn store_len(&self) -> usize {
        self.failed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_is_monotone() {
        let mut pool = VariablePool::default();
        assert_eq!(pool.grow_to_include(4), Some(5));
        assert_eq!(pool.store_len(), 10);

        assert_eq!(pool.grow_to_include(2), None);
        assert_eq!(pool.size(), 5);
        assert_eq!(pool.store_len(), 10);

        assert!(pool.contains(4));
        assert!(!pool.contains(5));
    }

    #[test]
    fn bounded() {
        assert!(VariablePool::admits(POOL_SIZE_MAX - 1));
        assert!(!VariablePool::admits(POOL_SIZE_MAX));
    }

    #[test]
    fn marks() {
        let mut pool = VariablePool::default();
        pool.grow_to_include(1);

        let literal = CLiteral::new(1, false);
        pool.mark(literal);
        assert!(pool.is_marked(literal));
        assert!(!pool.is_marked(literal.negate()));

        pool.grow_to_include(7);
        assert!(pool.is_marked(literal));
        assert!(!pool.is_marked(CLiteral::new(7, true)));

        pool.reset();
        assert!(!pool.is_marked(literal));
    }

    #[test]
    fn outside_the_pool() {
        let mut pool = VariablePool::default();
        let literal = CLiteral::new(3, true);
        pool.mark(literal);
        assert!(!pool.is_marked(literal));
    }
}
