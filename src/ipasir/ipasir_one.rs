//! Bindings for the IPASIR API.
//!
//! IPASIR has no means to report an error, and so an error from a session is logged and otherwise ignored.
//! In particular, a literal outside the range of the session is dropped, and a solve which fails reports 0.

use std::ffi::{c_char, c_int, c_void};

use crate::{
    ipasir::{fresh_solver, release_solver, session_of, signature_ptr},
    misc::log::targets::{self},
    types::err::ErrorKind,
};

/// Logs any error from a call to the session.
fn note_error(result: Result<(), ErrorKind>) {
    if let Err(e) = result {
        log::info!(target: targets::IPASIR, "Ignored: {e}");
    }
}

/// Returns the name and version of this library.
/// # Safety
/// Returns a pointer to a signature valid for the life of the process.
#[no_mangle]
pub unsafe extern "C" fn ipasir_signature() -> *const c_char {
    signature_ptr()
}

/// Initialises a solver, returning a pointer to the solver.
/// # Safety
/// Releases the initialised solver to a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir_init() -> *mut c_void {
    fresh_solver()
}

/// Releases the bound solver.
/// # Safety
/// Recovers a session from a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir_release(solver: *mut c_void) {
    release_solver(solver);
}

/// Adds a literal to the clause being built, or adds the clause being built if the literal is zero.
/// # Safety
/// Recovers a session from a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir_add(solver: *mut c_void, lit_or_zero: i32) {
    if let Some(session) = session_of(solver) {
        note_error(session.add(lit_or_zero));
    }
}

/// Adds an assumption for the next solve.
/// # Safety
/// Recovers a session from a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir_assume(solver: *mut c_void, lit: i32) {
    if let Some(session) = session_of(solver) {
        note_error(session.assume(lit));
    }
}

/// Solves, returning 10 if satisfiable, 20 if unsatisfiable, and 0 otherwise.
/// # Safety
/// Recovers a session from a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir_solve(solver: *mut c_void) -> c_int {
    let Some(session) = session_of(solver) else {
        return 0;
    };
    match session.solve() {
        Ok(report) => report.code(),
        Err(e) => {
            log::info!(target: targets::IPASIR, "Solve failed: {e}");
            0
        }
    }
}

/// Returns the value of the atom of the given literal, if a satisfying valuation has been found.
///
/// Explicitly, given a literal `lit`, returns:
/// * `lit`, if the atom of `lit` is bound to true on the satisfying valuation.
/// * `-lit`, if the atom of `lit` is bound to false on the satisfying valuation.
/// * 0, otherwise.
///
/// So, the sign follows the atom rather than the literal, and `ipasir_val(-x)` is `x` when `x` is false.
/// For a positive literal this agrees with the usual IPASIR reading.
///
/// # Safety
/// Recovers a session from a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir_val(solver: *mut c_void, lit: i32) -> i32 {
    match session_of(solver) {
        Some(session) => session.value(lit),
        None => 0,
    }
}

/// Returns 1 if the given assumption failed in the most recent (unsatisfiable) solve, and 0 otherwise.
/// # Safety
/// Recovers a session from a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir_failed(solver: *mut c_void, lit: i32) -> c_int {
    match session_of(solver) {
        Some(session) if session.failed(lit) != 0 => 1,
        _ => 0,
    }
}

/// Unsupported, and ignored.
/// # Safety
/// Recovers a session from a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir_set_terminate(
    solver: *mut c_void,
    _data: *mut c_void,
    _callback: Option<extern "C" fn(data: *mut c_void) -> c_int>,
) {
    if let Some(session) = session_of(solver) {
        note_error(session.set_terminate());
    }
}

/// Unsupported, and ignored.
/// # Safety
/// Recovers a session from a raw pointer.
#[no_mangle]
pub unsafe extern "C" fn ipasir_set_learn(
    solver: *mut c_void,
    _data: *mut c_void,
    _max_length: c_int,
    _learn: Option<extern "C" fn(data: *mut c_void, clause: *mut i32)>,
) {
    if let Some(session) = session_of(solver) {
        note_error(session.set_export());
    }
}
