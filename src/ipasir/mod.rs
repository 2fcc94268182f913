//! C Bindings for the reentrant incremental sat solver APIs --- IPASIR and IPASIR2.
//!
//! Bindings for the IPASIR API are given in [ipasir_one], and bindings for the IPASIR2 API in [ipasir_two].
//! Both wrap a boxed [Session] with the bundled [Context] as engine, and so share the same behaviour.
//!
//! Information about the APIs may be found at:
//! - <https://github.com/biotomas/ipasir>, for IPASIR.
//! - <https://github.com/ipasir2/ipasir2>, for IPASIR2.
//!
//! Note, 'solver' and 'session' are synonymous in this module.\
//! Though, strictly, 'solver' is only used as, or when referring to, the parameter of an API function, and 'session' is only used to refer to an instance of the session structure.
//!
//! # Compiling a library
//!
//! The crate is built as a `staticlib` and `cdylib` alongside the `rlib`, so each function here is exported without mangling.
//! For details on linking, see: <https://doc.rust-lang.org/reference/linkage.html>
//!
//! # Safety
//!
//! Each function taking a solver requires the solver to have been returned by the corresponding init function, and not yet released.
//! A null solver is reported as an invalid argument (IPASIR2), or ignored (IPASIR).

use std::{
    ffi::{CString, c_char, c_void},
    sync::OnceLock,
};

use crate::{context::Context, engine::Engine, session::Session};

pub mod ipasir_one;
pub mod ipasir_two;

/// The session type wrapped by the bindings.
pub type IpasirSession = Session<Context>;

/// The signature of the solver, written (once) when needed.
static IPASIR_SIGNATURE: OnceLock<CString> = OnceLock::new();

/// A pointer to the signature of the solver, valid for the life of the process.
pub fn signature_ptr() -> *const c_char {
    IPASIR_SIGNATURE
        .get_or_init(|| CString::new(Context::signature()).unwrap_or_default())
        .as_ptr()
}

/// A fresh boxed session, released to a raw pointer.
fn fresh_solver() -> *mut c_void {
    Box::into_raw(Box::new(IpasirSession::new())) as *mut c_void
}

/// The session behind `solver`, if non-null.
///
/// # Safety
/// `solver` must be null, or a pointer returned by [fresh_solver] which has not been released.
unsafe fn session_of<'s>(solver: *mut c_void) -> Option<&'s mut IpasirSession> {
    (solver as *mut IpasirSession).as_mut()
}

/// Drops the session behind `solver`, if non-null.
///
/// # Safety
/// As [session_of].
unsafe fn release_solver(solver: *mut c_void) {
    if !solver.is_null() {
        drop(Box::from_raw(solver as *mut IpasirSession));
    }
}
