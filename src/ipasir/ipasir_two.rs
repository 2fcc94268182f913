//! Bindings for the IPASIR2 API.
//!
//! In particular:
//! - Options are those of the [registry](crate::config::registry), set by name with an [i64] value.
//!   Fractional options are scaled by 100.
//! - Every error of a session is mapped to an [ipasir2_errorcode].
//! - Clause export and import, fixed literal notification, and terminate callbacks are not supported.
//!   To interrupt a solve, see [Session::interrupt_handle](crate::session::Session::interrupt_handle).

use std::{
    ffi::{CStr, CString, c_char, c_int, c_void},
    sync::OnceLock,
};

use crate::{
    config::registry,
    ipasir::{fresh_solver, release_solver, session_of, signature_ptr},
    misc::log::targets::{self},
    session::SessionState,
    types::err::{ErrorKind, OptionError},
};

/// Codes used to indicate the success or failure of a function call.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C)]
pub enum ipasir2_errorcode {
    IPASIR2_E_OK = 0,
    IPASIR2_E_UNKNOWN = 1,
    IPASIR2_E_UNSUPPORTED,
    IPASIR2_E_INVALID_STATE,
    IPASIR2_E_OPTION_UNKNOWN,
    IPASIR2_E_UNSUPPORTED_OPTION,
    IPASIR2_E_INVALID_OPTION_VALUE,
    IPASIR2_E_INVALID_ARGUMENT,
}

impl From<ErrorKind> for ipasir2_errorcode {
    fn from(e: ErrorKind) -> Self {
        match e {
            ErrorKind::State(_) => Self::IPASIR2_E_INVALID_STATE,
            ErrorKind::Option(OptionError::Unknown) => Self::IPASIR2_E_OPTION_UNKNOWN,
            ErrorKind::Option(OptionError::InvalidValue) => Self::IPASIR2_E_INVALID_OPTION_VALUE,
            ErrorKind::Option(OptionError::InvalidState) => Self::IPASIR2_E_INVALID_STATE,
            ErrorKind::Engine(_) => Self::IPASIR2_E_UNKNOWN,
            ErrorKind::Unsupported => Self::IPASIR2_E_UNSUPPORTED,
            ErrorKind::InvalidArgument | ErrorKind::Parse(_) => Self::IPASIR2_E_INVALID_ARGUMENT,
        }
    }
}

impl<T> From<Result<T, ErrorKind>> for ipasir2_errorcode {
    fn from(result: Result<T, ErrorKind>) -> Self {
        match result {
            Ok(_) => Self::IPASIR2_E_OK,
            Err(e) => {
                log::info!(target: targets::IPASIR, "{e}");
                e.into()
            }
        }
    }
}

/// States of a session, as [SessionState].
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C)]
pub enum ipasir2_state {
    IPASIR2_S_CONFIG = 0,
    IPASIR2_S_INPUT = 1,
    IPASIR2_S_SAT,
    IPASIR2_S_UNSAT,
    IPASIR2_S_SOLVING,
}

impl From<SessionState> for ipasir2_state {
    fn from(state: SessionState) -> Self {
        match state {
            SessionState::Config => Self::IPASIR2_S_CONFIG,
            SessionState::Input => Self::IPASIR2_S_INPUT,
            SessionState::Satisfiable => Self::IPASIR2_S_SAT,
            SessionState::Unsatisfiable => Self::IPASIR2_S_UNSAT,
            SessionState::Solving => Self::IPASIR2_S_SOLVING,
        }
    }
}

/// IPASIR Configuration Options
#[allow(non_camel_case_types)]
#[repr(C)]
pub struct ipasir2_option {
    /// Unique option identifier, or null on the terminating entry.
    pub name: *const c_char,

    /// Minimum allowed value for the option.
    pub min: i64,

    /// Maximum allowed value for the option.
    pub max: i64,

    /// Maximal state in which the option may be set.
    pub max_state: ipasir2_state,

    /// Specifies if the option is eligible for use by automatic tuners.
    pub tunable: c_int,

    /// Specifies if the option may be set per variable.
    pub indexed: c_int,

    /// An opaque pointer for internal use, unused.
    pub handle: *const c_void,
}

/// The options of the registry, as a sentinel-terminated array of [ipasir2_option]s.
struct OptionTable {
    /// Owners of the name of each option.
    _names: Vec<CString>,

    options: Vec<ipasir2_option>,
}

// The table is written once and only read after, and each pointer is to data owned by the table.
unsafe impl Send for OptionTable {}
unsafe impl Sync for OptionTable {}

static OPTION_TABLE: OnceLock<OptionTable> = OnceLock::new();

fn option_table() -> &'static OptionTable {
    OPTION_TABLE.get_or_init(|| {
        let names: Vec<CString> = registry::options()
            .iter()
            .map(|option| CString::new(option.name).unwrap_or_default())
            .collect();

        let mut options: Vec<ipasir2_option> = registry::options()
            .iter()
            .zip(&names)
            .map(|(option, name)| ipasir2_option {
                name: name.as_ptr(),
                min: option.min,
                max: option.max,
                max_state: option.max_state.into(),
                tunable: option.tunable as c_int,
                indexed: 0,
                handle: std::ptr::null(),
            })
            .collect();

        options.push(ipasir2_option {
            name: std::ptr::null(),
            min: 0,
            max: 0,
            max_state: ipasir2_state::IPASIR2_S_CONFIG,
            tunable: 0,
            indexed: 0,
            handle: std::ptr::null(),
        });

        OptionTable {
            _names: names,
            options,
        }
    })
}

/// Binds the name and version of this library to the given pointer.
/// # Safety
/// Writes the signature to a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_signature(signature: *mut *const c_char) -> ipasir2_errorcode {
    if signature.is_null() {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    }
    std::ptr::write(signature, signature_ptr());

    ipasir2_errorcode::IPASIR2_E_OK
}

/// Initialises a solver and binds the given pointer to its address.
/// # Safety
/// Releases the initialised solver to a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_init(solver: *mut *mut c_void) -> ipasir2_errorcode {
    if solver.is_null() {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    }
    std::ptr::write(solver, fresh_solver());
    log::info!(target: targets::IPASIR, "Solver initialised");

    ipasir2_errorcode::IPASIR2_E_OK
}

/// Releases the bound solver.
/// # Safety
/// Recovers a session from a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_release(solver: *mut c_void) -> ipasir2_errorcode {
    release_solver(solver);

    ipasir2_errorcode::IPASIR2_E_OK
}

/// Binds the supported configuration options to the given pointer.
///
/// The options are terminated by an option whose name is null, and are the same on every call.
/// # Safety
/// Writes the options to a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_options(
    solver: *mut c_void,
    options: *mut *const ipasir2_option,
) -> ipasir2_errorcode {
    if solver.is_null() || options.is_null() {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    }
    std::ptr::write(options, option_table().options.as_ptr());

    ipasir2_errorcode::IPASIR2_E_OK
}

/// Sets the value of the option with the given name.
/// # Safety
/// Recovers a session and reads a name from raw pointers.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_set_option(
    solver: *mut c_void,
    name: *const c_char,
    value: i64,
) -> ipasir2_errorcode {
    let Some(session) = session_of(solver) else {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    };
    if name.is_null() {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    }
    match CStr::from_ptr(name).to_str() {
        Ok(name) => session.set_option(name, value).into(),
        Err(_) => ipasir2_errorcode::IPASIR2_E_OPTION_UNKNOWN,
    }
}

/// Adds a clause to the solver.
/// # Safety
/// Recovers a session and takes a clause from raw pointers.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_add(
    solver: *mut c_void,
    clause: *const i32,
    len: i32,
) -> ipasir2_errorcode {
    let Some(session) = session_of(solver) else {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    };
    let clause: &[i32] = match (clause.is_null(), usize::try_from(len)) {
        (_, Ok(0)) => &[],
        (false, Ok(len)) => std::slice::from_raw_parts(clause, len),
        _ => return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT,
    };
    session.add_clause(clause).into()
}

/// Adds a literal to the clause being built, or adds the clause being built if the literal is zero.
/// # Safety
/// Recovers a session from a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_add_literal(solver: *mut c_void, lit_or_zero: i32) -> ipasir2_errorcode {
    let Some(session) = session_of(solver) else {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    };
    session.add(lit_or_zero).into()
}

/// Adds an assumption for the next solve.
/// # Safety
/// Recovers a session from a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_assume(solver: *mut c_void, lit: i32) -> ipasir2_errorcode {
    let Some(session) = session_of(solver) else {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    };
    session.assume(lit).into()
}

/// Assumes the given literals and then solves, writing the status (10, 20, or 0) to `result`.
/// # Safety
/// Recovers a session and reads assumptions from raw pointers, and writes the status to a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_solve(
    solver: *mut c_void,
    result: *mut c_int,
    literals: *const i32,
    len: i32,
) -> ipasir2_errorcode {
    let Some(session) = session_of(solver) else {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    };
    if result.is_null() {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    }
    let assumptions: &[i32] = match (literals.is_null(), usize::try_from(len)) {
        (_, Ok(0)) => &[],
        (false, Ok(len)) => std::slice::from_raw_parts(literals, len),
        _ => return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT,
    };

    match session.solve_given(assumptions) {
        Ok(report) => {
            std::ptr::write(result, report.code());
            ipasir2_errorcode::IPASIR2_E_OK
        }
        Err(e) => {
            std::ptr::write(result, 0);
            log::info!(target: targets::IPASIR, "Solve failed: {e}");
            e.into()
        }
    }
}

/// Writes the value of the given literal on the model of a satisfiable solve to `value`.
/// # Safety
/// Recovers a session from a raw pointer, and writes the value to a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_value(
    solver: *mut c_void,
    lit: i32,
    value: *mut i32,
) -> ipasir2_errorcode {
    let Some(session) = session_of(solver) else {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    };
    if value.is_null() {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    }
    std::ptr::write(value, session.value(lit));

    ipasir2_errorcode::IPASIR2_E_OK
}

/// Writes the given literal to `failed` if the literal was a failed assumption of an unsatisfiable solve, and zero otherwise.
/// # Safety
/// Recovers a session from a raw pointer, and writes the result to a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_failed(
    solver: *mut c_void,
    lit: i32,
    failed: *mut i32,
) -> ipasir2_errorcode {
    let Some(session) = session_of(solver) else {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    };
    if failed.is_null() {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    }
    std::ptr::write(failed, session.failed(lit));

    ipasir2_errorcode::IPASIR2_E_OK
}

/// Unsupported.
/// # Safety
/// Recovers a session from a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_set_terminate(
    solver: *mut c_void,
    _data: *mut c_void,
    _callback: Option<extern "C" fn(data: *mut c_void) -> c_int>,
) -> ipasir2_errorcode {
    let Some(session) = session_of(solver) else {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    };
    session.set_terminate().into()
}

/// Unsupported.
/// # Safety
/// Recovers a session from a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_set_export(
    solver: *mut c_void,
    _data: *mut c_void,
    _max_length: i32,
    _callback: Option<extern "C" fn(data: *mut c_void, clause: *const i32, len: i32, proof: *mut c_void)>,
) -> ipasir2_errorcode {
    let Some(session) = session_of(solver) else {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    };
    session.set_export().into()
}

/// Unsupported.
/// # Safety
/// Recovers a session from a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_set_import(
    solver: *mut c_void,
    _data: *mut c_void,
    _callback: Option<extern "C" fn(data: *mut c_void)>,
) -> ipasir2_errorcode {
    let Some(session) = session_of(solver) else {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    };
    session.set_import().into()
}

/// Unsupported.
/// # Safety
/// Recovers a session from a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_set_notify(
    solver: *mut c_void,
    _data: *mut c_void,
    _callback: Option<extern "C" fn(data: *mut c_void, assigned: *const i32, unassigned: *const i32)>,
) -> ipasir2_errorcode {
    let Some(session) = session_of(solver) else {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    };
    session.set_notify().into()
}

/// Unsupported.
/// # Safety
/// Recovers a session from a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_assignment_size(solver: *mut c_void, _size: *mut i32) -> ipasir2_errorcode {
    let Some(session) = session_of(solver) else {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    };
    session.assignment().into()
}

/// Unsupported.
/// # Safety
/// Recovers a session from a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir2_assignment(
    solver: *mut c_void,
    _index: i32,
    _lit: *mut i32,
) -> ipasir2_errorcode {
    let Some(session) = session_of(solver) else {
        return ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
    };
    session.assignment().into()
}
