/*!
A session --- the state machine through which a formula is built, solved, and inspected, as described by IPASIR2.

# States

```none
              add / assume / solve
   Config ------------------------> Input <------------------+
                                    |  ⌃                     |
                              solve |  | unknown             | add / assume
                                    ⌄  |                     |
                                  Solving ---> Satisfiable --+
                                       |                     |
                                       +-----> Unsatisfiable-+
```

- Options may be set only in the configuration state.
- The engine is constructed on the first move from the configuration state, and the configuration is then frozen.
- [Solving](SessionState::Solving) is transient, as [solve](Session::solve) blocks.
- Queries ([value](Session::value) and [failed](Session::failed)) are permitted in every state, and return 0 outside the state which defines them.

# Literals

Literals are given as non-zero [i32]s, and zero terminates a clause built literal by literal through [add](Session::add).
The session grows the [variable pool](pool) to include the atom of each literal before the literal is recorded.
Literals whose magnitude exceeds [POOL_SIZE_MAX](pool::POOL_SIZE_MAX) are refused as invalid arguments.

# Example

```rust
# use otter_ipasir::session::{Session, SessionState};
# use otter_ipasir::reports::Report;
let mut session: Session = Session::new();
assert!(session.set_option("restartType", 3).is_ok());

assert!(session.add_clause(&[1, 2]).is_ok());
assert!(session.assume(-1).is_ok());
assert!(session.assume(-2).is_ok());
assert_eq!(session.solve(), Ok(Report::Unsatisfiable));
assert_eq!(session.failed(-1), -1);
assert_eq!(session.failed(-2), -2);
assert_eq!(session.failed(3), 0);

assert!(session.set_option("restartType", 0).is_err());

assert!(session.assume(-1).is_ok());
assert_eq!(session.solve(), Ok(Report::Satisfiable));
assert_eq!(session.state(), SessionState::Satisfiable);
assert_eq!(session.value(1), -1);
assert_eq!(session.value(2), 2);
```
*/

pub mod pool;

use std::sync::{Arc, atomic::AtomicBool};

use pool::VariablePool;

use crate::{
    config::{Config, ConfigOption, OptionId, registry},
    context::Context,
    engine::Engine,
    misc::log::targets::{self},
    reports::Report,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{self, CLiteral, IntLiteral},
    },
    types::err::{ErrorKind, OptionError, StateError},
};

/// The state of a session.
/// These states correspond to the states of the IPASIR2 protocol, and are ordered as in the protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SessionState {
    /// The session allows for configuration.
    Config = 0,

    /// The session allows input.
    Input,

    /// The most recent solve found the formula satisfiable under the assumptions.
    Satisfiable,

    /// The most recent solve found the formula unsatisfiable under the assumptions.
    Unsatisfiable,

    /// A solve is in progress.
    Solving,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config => write!(f, "Config"),
            Self::Input => write!(f, "Input"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Solving => write!(f, "Solving"),
        }
    }
}

/// A session, generic over the engine used to solve.
pub struct Session<E: Engine = Context> {
    /// The configuration given to the engine, frozen once the engine is constructed.
    config: Config,

    /// The engine, constructed on leaving the configuration state.
    engine: Option<E>,

    /// A partially built clause.
    clause_buffer: CClause,

    /// Assumptions for the next solve.
    assumptions: CClause,

    /// The variable pool and failed assumption store.
    pool: VariablePool,

    /// Shared with the engine, which ends a solve if set.
    interrupt: Arc<AtomicBool>,

    state: SessionState,
}

impl<E: Engine> Default for Session<E> {
    fn default() -> Self {
        Session {
            config: Config::default(),
            engine: None,
            clause_buffer: CClause::default(),
            assumptions: CClause::default(),
            pool: VariablePool::default(),
            interrupt: Arc::new(AtomicBool::new(false)),
            state: SessionState::Config,
        }
    }
}

/// The engine held in `engine`, constructed from `config` if absent.
fn engine_of<'e, E: Engine>(
    engine: &'e mut Option<E>,
    config: &Config,
    interrupt: &Arc<AtomicBool>,
) -> &'e mut E {
    engine.get_or_insert_with(|| {
        log::info!(target: targets::SESSION, "Engine constructed");
        E::from_config(config, Arc::clone(interrupt))
    })
}

/// The canonical literal of `lit`, if `lit` is non-zero and the atom of `lit` may be added to a pool.
fn pooled_literal(lit: IntLiteral) -> Result<CLiteral, ErrorKind> {
    match literal::encode(lit) {
        Some(literal) if VariablePool::admits(literal.atom()) => Ok(literal),
        _ => Err(ErrorKind::InvalidArgument),
    }
}

/// Methods for configuration and inspection.
impl<E: Engine> Session<E> {
    /// A fresh session, in the configuration state.
    pub fn new() -> Self {
        Self::default()
    }

    /// A name and version for the session, taken from the engine.
    pub fn signature() -> String {
        E::signature()
    }

    /// The registry of options, identical on every call.
    pub fn options() -> &'static [ConfigOption] {
        registry::options()
    }

    /// The current state of the session.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The configuration of the session, pending until the engine is constructed.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// A handle to the interrupt flag shared with the engine.
    ///
    /// Setting the flag during a solve ends the solve with an unknown result, and the engine clears the flag.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupt)
    }

    /// Sets the option named `name` to `value`.
    ///
    /// The name is checked before the value, and the value before the state of the session.
    pub fn set_option(&mut self, name: &str, value: i64) -> Result<(), ErrorKind> {
        let option = registry::lookup(name).ok_or(OptionError::Unknown)?;
        self.set_registry_option(option, value)
    }

    /// Sets the option identified by `id` to `value`.
    pub fn set_option_by_id(&mut self, id: OptionId, value: i64) -> Result<(), ErrorKind> {
        self.set_registry_option(id.entry(), value)
    }

    fn set_registry_option(&mut self, option: &ConfigOption, value: i64) -> Result<(), ErrorKind> {
        if !option.permits(value) {
            log::info!(target: targets::OPTIONS, "{value} is outside the range of {}", option.name);
            return Err(OptionError::InvalidValue.into());
        }
        if self.state > option.max_state {
            log::info!(target: targets::OPTIONS, "{} may not be set in state {}", option.name, self.state);
            return Err(OptionError::InvalidState.into());
        }
        option.set(&mut self.config, value)?;
        log::info!(target: targets::OPTIONS, "{} set to {value}", option.name);
        Ok(())
    }

    /// The value of the option named `name`.
    pub fn get_option(&self, name: &str) -> Result<i64, ErrorKind> {
        let option = registry::lookup(name).ok_or(OptionError::Unknown)?;
        Ok(option.get(&self.config))
    }
}

/// Methods for building a formula.
impl<E: Engine> Session<E> {
    /// Moves the session to the input state, constructing the engine on leaving the configuration state.
    ///
    /// Marks of failed assumptions are cleared on leaving the unsatisfiable state.
    pub fn begin_input(&mut self) {
        match self.state {
            SessionState::Config => {
                engine_of(&mut self.engine, &self.config, &self.interrupt);
            }
            SessionState::Unsatisfiable => self.pool.reset(),
            _ => {}
        }
        self.state = SessionState::Input;
    }

    /// Grows the pool (and engine) to include `atom`.
    fn grow_pool(&mut self, atom: Atom) {
        if let Some(size) = self.pool.grow_to_include(atom) {
            engine_of(&mut self.engine, &self.config, &self.interrupt).ensure_atoms(size);
        }
    }

    /// Adds a literal to the clause being built, or adds the clause being built to the formula if `lit` is zero.
    pub fn add(&mut self, lit: IntLiteral) -> Result<(), ErrorKind> {
        if lit == 0 {
            self.begin_input();
            let clause = std::mem::take(&mut self.clause_buffer);
            log::trace!(target: targets::SESSION, "Clause {}", clause.as_dimacs(true));
            return engine_of(&mut self.engine, &self.config, &self.interrupt).add_clause(clause);
        }

        let literal = pooled_literal(lit)?;
        self.begin_input();
        self.grow_pool(literal.atom());
        self.clause_buffer.push(literal);
        Ok(())
    }

    /// Adds a complete clause to the formula.
    ///
    /// Fails if a clause is partially built through [add](Session::add), or if some literal is zero.
    pub fn add_clause(&mut self, clause: &[IntLiteral]) -> Result<(), ErrorKind> {
        if !self.clause_buffer.is_empty() {
            return Err(StateError::PartialClause.into());
        }
        let clause = clause
            .iter()
            .map(|lit| pooled_literal(*lit))
            .collect::<Result<CClause, ErrorKind>>()?;

        self.begin_input();
        for literal in &clause {
            self.grow_pool(literal.atom());
        }
        log::trace!(target: targets::SESSION, "Clause {}", clause.as_dimacs(true));
        engine_of(&mut self.engine, &self.config, &self.interrupt).add_clause(clause)
    }

    /// Adds an assumption for the next solve.
    pub fn assume(&mut self, lit: IntLiteral) -> Result<(), ErrorKind> {
        let literal = pooled_literal(lit)?;
        self.begin_input();
        self.grow_pool(literal.atom());
        self.assumptions.push(literal);
        Ok(())
    }
}

/// Methods for solving, and inspecting the result of a solve.
impl<E: Engine> Session<E> {
    /// Solves the formula, given the assumptions made since the previous solve.
    ///
    /// Assumptions, and any marks of failed assumptions, are cleared before the result is interpreted:
    /// - A satisfiable result moves the session to the satisfiable state.
    /// - An unsatisfiable result marks the final conflict of the engine and moves the session to the unsatisfiable state.
    /// - An unknown result, or an error, moves the session to the input state.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        if !self.clause_buffer.is_empty() {
            return Err(StateError::PartialClause.into());
        }
        self.begin_input();
        self.state = SessionState::Solving;

        let assumptions = std::mem::take(&mut self.assumptions);
        let engine = engine_of(&mut self.engine, &self.config, &self.interrupt);
        let outcome = engine.solve_given(&assumptions);
        self.pool.reset();

        match outcome {
            Ok(Report::Satisfiable) => self.state = SessionState::Satisfiable,

            Ok(Report::Unsatisfiable) => {
                for literal in engine.final_conflict() {
                    self.pool.mark(*literal);
                }
                self.state = SessionState::Unsatisfiable;
            }

            Ok(Report::Unknown) => self.state = SessionState::Input,

            Err(e) => {
                log::error!(target: targets::SESSION, "Solve failed: {e}");
                self.state = SessionState::Input;
                return Err(e);
            }
        }

        log::info!(target: targets::SESSION, "Solve with {} assumptions: {}", assumptions.len(), self.state);
        outcome
    }

    /// Adds each assumption, and solves.
    pub fn solve_given(&mut self, assumptions: &[IntLiteral]) -> Result<Report, ErrorKind> {
        if !self.clause_buffer.is_empty() {
            return Err(StateError::PartialClause.into());
        }
        if assumptions.iter().any(|lit| pooled_literal(*lit).is_err()) {
            return Err(ErrorKind::InvalidArgument);
        }
        for lit in assumptions {
            self.assume(*lit)?;
        }
        self.solve()
    }

    /// In the satisfiable state, `lit` if the atom of `lit` is true on the model and `-lit` if false.
    ///
    /// Zero in any other state, if the atom is outside the pool, or if the model gives the atom no value.
    pub fn value(&self, lit: IntLiteral) -> IntLiteral {
        if self.state != SessionState::Satisfiable {
            return 0;
        }
        let Some(literal) = literal::encode(lit) else {
            return 0;
        };
        if !self.pool.contains(literal.atom()) {
            return 0;
        }
        match self.engine.as_ref().and_then(|engine| engine.model_value(literal.atom())) {
            Some(true) => lit,
            Some(false) => -lit,
            None => 0,
        }
    }

    /// In the unsatisfiable state, `lit` if the assumption `lit` failed, and zero otherwise.
    ///
    /// An assumption failed if the negation is part of the final conflict of the engine.
    pub fn failed(&self, lit: IntLiteral) -> IntLiteral {
        if self.state != SessionState::Unsatisfiable {
            return 0;
        }
        let Some(literal) = literal::encode(lit) else {
            return 0;
        };
        match self.pool.contains(literal.atom()) && self.pool.is_marked(literal.negate()) {
            true => lit,
            false => 0,
        }
    }

    /// The size of the variable pool.
    pub fn pool_size(&self) -> Atom {
        self.pool.size()
    }
}

/// Entry points without an implementation.
impl<E: Engine> Session<E> {
    pub fn set_terminate(&mut self) -> Result<(), ErrorKind> {
        log::info!(target: targets::SESSION, "Terminate callbacks are unsupported, see interrupt_handle");
        Err(ErrorKind::Unsupported)
    }

    pub fn set_export(&mut self) -> Result<(), ErrorKind> {
        Err(ErrorKind::Unsupported)
    }

    pub fn set_import(&mut self) -> Result<(), ErrorKind> {
        Err(ErrorKind::Unsupported)
    }

    pub fn set_notify(&mut self) -> Result<(), ErrorKind> {
        Err(ErrorKind::Unsupported)
    }

    pub fn assignment(&self) -> Result<Vec<IntLiteral>, ErrorKind> {
        Err(ErrorKind::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_before_input() {
        let mut session: Session = Session::new();
        assert_eq!(session.set_option("restart_first", 200), Ok(()));
        assert_eq!(session.get_option("restart_first"), Ok(200));
        assert_eq!(session.config().restart_first, 200);

        assert_eq!(session.set_option_by_id(OptionId::RestartInc, 125), Ok(()));
        assert_eq!(session.config().restart_inc, 1.25);

        assert_eq!(
            session.set_option("no_such_option", 0),
            Err(ErrorKind::Option(OptionError::Unknown))
        );
        assert_eq!(
            session.set_option("restart_first", 99),
            Err(ErrorKind::Option(OptionError::InvalidValue))
        );
    }

    #[test]
    fn options_after_input() {
        let mut session: Session = Session::new();
        assert!(session.add(1).is_ok());
        assert_eq!(session.state(), SessionState::Input);
        assert_eq!(
            session.set_option("restart_first", 200),
            Err(ErrorKind::Option(OptionError::InvalidState))
        );
        assert_eq!(
            session.set_option("restart_first", 99),
            Err(ErrorKind::Option(OptionError::InvalidValue))
        );
        assert_eq!(session.get_option("restart_first"), Ok(100));
    }

    #[test]
    fn partial_clauses() {
        let mut session: Session = Session::new();
        assert!(session.add(1).is_ok());
        assert_eq!(
            session.add_clause(&[2]),
            Err(ErrorKind::State(StateError::PartialClause))
        );
        assert_eq!(session.solve(), Err(ErrorKind::State(StateError::PartialClause)));
        assert!(session.add(0).is_ok());
        assert_eq!(session.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn invalid_literals() {
        let mut session: Session = Session::new();
        assert_eq!(session.add(i32::MIN), Err(ErrorKind::InvalidArgument));
        assert_eq!(session.state(), SessionState::Config);
        assert_eq!(session.assume(0), Err(ErrorKind::InvalidArgument));
        assert_eq!(session.add_clause(&[1, 0, 2]), Err(ErrorKind::InvalidArgument));
        assert_eq!(session.pool_size(), 0);
    }

    #[test]
    fn pool_grows_with_literals() {
        let mut session: Session = Session::new();
        assert!(session.assume(-7).is_ok());
        assert_eq!(session.pool_size(), 7);
        assert!(session.add_clause(&[3]).is_ok());
        assert_eq!(session.pool_size(), 7);
    }

    #[test]
    fn empty_solve() {
        let mut session: Session = Session::new();
        assert_eq!(session.solve(), Ok(Report::Satisfiable));
        assert_eq!(session.value(1), 0);
    }

    #[test]
    fn stubs() {
        let mut session: Session = Session::new();
        assert_eq!(session.set_terminate(), Err(ErrorKind::Unsupported));
        assert_eq!(session.set_export(), Err(ErrorKind::Unsupported));
        assert_eq!(session.set_import(), Err(ErrorKind::Unsupported));
        assert_eq!(session.set_notify(), Err(ErrorKind::Unsupported));
        assert_eq!(session.assignment(), Err(ErrorKind::Unsupported));
    }
}
