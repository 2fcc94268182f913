/*!
Methods for choosing the value of an atom.

# Overview

A decision is to value some atom *a* with value *v*, represented as the literal with atom *a* and polarity *v*.
Decisions are made only once every assumption of a solve is in place, and after propagation is exhausted.

# Choice of atom

As configured by [BranchStrategy]:
- VSIDS and VMTF take the highest scoring atom without a value from the heap of the [atom database](crate::db::atom).
- Random takes an atom without a value uniformly at random.
- The alternating strategy takes from the heap, and the score of the heap is switched on each restart.

# Choice of value

As configured by [PolarityMode].
The automatic, stable, and saved modes use phase saving: the previous value of the atom.
*/

use crate::{
    config::{BranchStrategy, PolarityMode},
    context::GenericContext,
    structures::{atom::Atom, literal::CLiteral},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A decision, or none if every atom has a value.
    pub fn make_decision(&mut self) -> Option<CLiteral> {
        let atom = match self.config.branch_strategy {
            BranchStrategy::Random => self.random_atom_without_value(),
            BranchStrategy::Vsids | BranchStrategy::Vmtf | BranchStrategy::VmtfVsids => {
                self.atom_db.heap_pop_unvalued()
            }
        }?;

        let polarity = match self.config.polarity_mode {
            PolarityMode::Positive => true,
            PolarityMode::Negative => false,
            PolarityMode::Random => self.rng.random_bool(0.5),
            PolarityMode::Automatic | PolarityMode::Stable | PolarityMode::Saved => {
                self.atom_db.saved_phase_of(atom)
            }
            PolarityMode::Best => self.atom_db.best_phase_of(atom),
            PolarityMode::BestInverted => !self.atom_db.best_phase_of(atom),
        };

        self.counters.total_decisions += 1;
        let decision = CLiteral::new(atom, polarity);
        log::trace!("Decision {decision}");
        Some(decision)
    }

    /// Some atom without a value, chosen by scanning from a random atom.
    fn random_atom_without_value(&mut self) -> Option<Atom> {
        let count = self.atom_db.count();
        if count == 0 {
            return None;
        }
        let offset = self.rng.random_range(0..count);
        (0..count)
            .map(|step| ((offset + step) % count) as Atom)
            .find(|atom| self.atom_db.value_of(*atom).is_none())
    }
}
