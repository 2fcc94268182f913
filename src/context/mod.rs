/*!
The context --- the bundled [engine](crate::engine), to which clauses are added and within which solves take place.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the source of randomness, while [Context] fixes the source to [MinimalPCG32](crate::generic::random::MinimalPCG32) and implements the [Engine](crate::engine::Engine) trait.

The context is a conflict-driven clause-learning solver:
- [BCP](crate::procedures::bcp) over two watched literals.
- First-UIP [conflict analysis](crate::procedures::analysis), with clause minimisation.
- Assumptions made as the first decisions of a solve, and analysis of the final conflict when an assumption is falsified.
- [Restarts](crate::procedures::schedulers) and tiered [reduction](crate::procedures::reduction) of learnt clauses, as configured.

# Example
```rust
# use std::sync::{Arc, atomic::AtomicBool};
# use otter_ipasir::config::Config;
# use otter_ipasir::context::Context;
# use otter_ipasir::engine::Engine;
# use otter_ipasir::reports::Report;
# use otter_ipasir::structures::literal::CLiteral;
let mut the_context = Context::from_config(&Config::default(), Arc::new(AtomicBool::new(false)));
the_context.ensure_atoms(2);

let p = CLiteral::new(0, true);
let q = CLiteral::new(1, true);

assert!(the_context.add_clause(vec![p, q]).is_ok());
assert!(the_context.add_clause(vec![p.negate()]).is_ok());

assert_eq!(the_context.solve_given(&[]), Ok(Report::Satisfiable));
assert_eq!(the_context.model_value(0), Some(false));
assert_eq!(the_context.model_value(1), Some(true));

assert_eq!(the_context.solve_given(&[q.negate()]), Ok(Report::Unsatisfiable));
assert_eq!(the_context.final_conflict(), &[q]);
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;
