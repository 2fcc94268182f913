//! Incremental satisfiability sessions with IPASIR and IPASIR2 bindings.
//!
//! otter_ipasir wraps a compact conflict-driven clause-learning engine in a [session], a state machine which follows the IPASIR2 model of incremental solving:
//! - A session is configured through a fixed [registry](config::registry) of named integer options.
//! - Clauses are added literal by literal, and assumptions are made for the next solve only.
//! - After a solve the value of a literal on the model, or the failure of an assumption, may be read.
//!
//! The session is exposed to C through the [IPASIR and IPASIR2 bindings](ipasir), and to Rust directly.
//!
//! # Orientation
//!
//! Useful starting points may be:
//! - The [session], to see the states and transitions of the API.
//! - The [engine] trait, to see what a session requires of the engine.
//! - The [solve procedure](crate::procedures::solve), to inspect the dynamics of a solve.
//! - The [configuration](crate::config) to see what features are supported.
//!
//! Internally, and at a high-level, a solve is viewed in terms of manipulation of a handful of databases:
//! - The formula is stored in a [clause database](db::clause).
//! - The valuation is stored in an [atom database](db::atom).
//! - The order in which atoms were valued is stored on a [trail](db::trail).
//!
//! # Examples
//!
//! + Incrementally solve a formula, with and without assumptions.
//!
//! ```rust
//! # use otter_ipasir::session::{Session, SessionState};
//! # use otter_ipasir::reports::Report;
//! let mut session: Session = Session::new();
//!
//! assert!(session.set_option("restartType", 3).is_ok());
//!
//! for clause in [[1, 2], [-1, 2], [1, -2]] {
//!     assert!(session.add_clause(&clause).is_ok());
//! }
//!
//! assert_eq!(session.solve(), Ok(Report::Satisfiable));
//! assert_eq!(session.value(1), 1);
//! assert_eq!(session.value(-2), -2);
//!
//! assert!(session.assume(-2).is_ok());
//! assert_eq!(session.solve(), Ok(Report::Unsatisfiable));
//! assert_eq!(session.failed(-2), -2);
//!
//! assert_eq!(session.solve(), Ok(Report::Satisfiable));
//! assert_eq!(session.state(), SessionState::Satisfiable);
//! ```
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use otter_ipasir::session::Session;
//! # use otter_ipasir::reports::Report;
//! let mut session: Session = Session::new();
//!
//! let dimacs = b"
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ";
//!
//! assert!(session.read_dimacs(dimacs.as_slice()).is_ok());
//! assert_eq!(session.solve(), Ok(Report::Unsatisfiable));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made throughout, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are listed in [misc::log].

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod engine;
pub mod reports;
pub mod session;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod misc;

pub mod ipasir;
