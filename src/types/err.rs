//! Error types used in the library.
//!
//! - Most errors are returned to a caller of a [session](crate::session) and correspond to an IPASIR2 error code.
//! - Some errors are internal to the [engine](crate::context) and used to control the flow of a solve --- e.g. a conflict during BCP.
//!
//! Names of the error enums --- for the most part --- overlap with the structure or procedure they are raised by.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::db::ClauseKey;

/// The general error type of the library.
///
/// Each more specific error has a [From] implementation into the general type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An operation was requested in a state which does not permit the operation.
    State(StateError),

    /// An issue with setting or reading an option.
    Option(OptionError),

    /// The engine failed in some unexpected way.
    Engine(EngineError),

    /// A feature which has an entry point, but no implementation.
    Unsupported,

    /// Some argument could not be used, e.g. a literal with no corresponding atom.
    InvalidArgument,

    /// An error when parsing a formula.
    Parse(ParseError),
}

/// Operations requested in a state which does not permit the operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StateError {
    /// A clause was partially built when a complete clause (or a solve) was requested.
    PartialClause,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

/// Issues with options of the [registry](crate::config::registry).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OptionError {
    /// No option with the given name exists.
    Unknown,

    /// The value is outside the (inclusive) range of the option.
    InvalidValue,

    /// The option may not be set in the current state of the session.
    InvalidState,
}

impl From<OptionError> for ErrorKind {
    fn from(e: OptionError) -> Self {
        ErrorKind::Option(e)
    }
}

/// Unexpected outcomes from the engine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EngineError {
    /// A clause was added while some decision was in place.
    DecisionMade,

    /// A conflict was found, but analysis failed to derive an asserting clause.
    NoAssertion,

    /// A clause key did not lead to a stored clause.
    MissingClause(ClauseKey),
}

impl From<EngineError> for ErrorKind {
    fn from(e: EngineError) -> Self {
        ErrorKind::Engine(e)
    }
}

/// Errors during parsing of a DIMACS formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The problem specification line was malformed.
    ProblemSpecification,

    /// Some line could not be read, with the line number.
    Line(usize),

    /// Some item on the given line was not a literal.
    Literal(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found.
    /// This is expected from time to time, and a learning opportunity.
    Conflict(ClauseKey),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::State(e) => write!(f, "Invalid state: {e:?}"),
            Self::Option(e) => write!(f, "Option error: {e:?}"),
            Self::Engine(e) => write!(f, "Engine error: {e:?}"),
            Self::Unsupported => write!(f, "Unsupported"),
            Self::InvalidArgument => write!(f, "Invalid argument"),
            Self::Parse(e) => write!(f, "Parse error: {e:?}"),
        }
    }
}
