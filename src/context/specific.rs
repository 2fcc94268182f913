use std::sync::{Arc, atomic::AtomicBool};

use rand::SeedableRng;

use crate::{
    config::Config,
    engine::Engine,
    generic::random::MinimalPCG32,
    reports::Report,
    structures::{atom::Atom, clause::CClause, literal::CLiteral},
    types::err::ErrorKind,
};

use super::GenericContext;

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Engine for Context {
    fn from_config(config: &Config, interrupt: Arc<AtomicBool>) -> Self {
        GenericContext::from_config_with_rng(
            config.clone(),
            MinimalPCG32::from_seed(0_u64.to_le_bytes()),
            interrupt,
        )
    }

    fn signature() -> String {
        format!("{}-{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    fn ensure_atoms(&mut self, count: Atom) {
        self.ensure_atom_count(count as usize);
    }

    fn add_clause(&mut self, clause: CClause) -> Result<(), ErrorKind> {
        GenericContext::add_clause(self, clause)
    }

    fn solve_given(&mut self, assumptions: &[CLiteral]) -> Result<Report, ErrorKind> {
        GenericContext::solve_given(self, assumptions)
    }

    fn model_value(&self, atom: Atom) -> Option<bool> {
        self.model.get(atom as usize).copied().flatten()
    }

    fn final_conflict(&self) -> &[CLiteral] {
        &self.final_conflict
    }
}
