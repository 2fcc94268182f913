//! Generic structures, not specific to satisfiability.

pub mod bounded_queue;
pub mod index_heap;
pub mod luby;
pub mod random;
