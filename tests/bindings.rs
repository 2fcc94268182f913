use std::ffi::{CStr, c_char, c_int, c_void};

use otter_ipasir::ipasir::{
    ipasir_one,
    ipasir_two::{self, ipasir2_errorcode, ipasir2_option, ipasir2_state},
};

const OK: ipasir2_errorcode = ipasir2_errorcode::IPASIR2_E_OK;

mod ipasir_two_api {
    use super::*;

    fn init() -> *mut c_void {
        let mut solver: *mut c_void = std::ptr::null_mut();
        assert_eq!(unsafe { ipasir_two::ipasir2_init(&mut solver) }, OK);
        assert!(!solver.is_null());
        solver
    }

    fn solve(solver: *mut c_void, assumptions: &[i32]) -> c_int {
        let mut result: c_int = -1;
        let code = unsafe {
            ipasir_two::ipasir2_solve(
                solver,
                &mut result,
                assumptions.as_ptr(),
                assumptions.len() as i32,
            )
        };
        assert_eq!(code, OK);
        result
    }

    fn value(solver: *mut c_void, lit: i32) -> i32 {
        let mut value = 0;
        assert_eq!(unsafe { ipasir_two::ipasir2_value(solver, lit, &mut value) }, OK);
        value
    }

    fn failed(solver: *mut c_void, lit: i32) -> i32 {
        let mut failed = 0;
        assert_eq!(unsafe { ipasir_two::ipasir2_failed(solver, lit, &mut failed) }, OK);
        failed
    }

    #[test]
    fn signature() {
        let mut signature: *const c_char = std::ptr::null();
        assert_eq!(unsafe { ipasir_two::ipasir2_signature(&mut signature) }, OK);
        let signature = unsafe { CStr::from_ptr(signature) }.to_str();
        assert!(signature.is_ok_and(|s| s.starts_with("otter_ipasir")));
    }

    #[test]
    fn round_trip() {
        let solver = init();

        let clause = [1, 2];
        assert_eq!(unsafe { ipasir_two::ipasir2_add(solver, clause.as_ptr(), 2) }, OK);
        for lit in [-1, 0, -2, 3, 0] {
            assert_eq!(unsafe { ipasir_two::ipasir2_add_literal(solver, lit) }, OK);
        }

        assert_eq!(solve(solver, &[]), 10);
        assert_eq!(value(solver, 1), -1);
        assert_eq!(value(solver, -2), -2);
        assert_eq!(value(solver, 3), 3);

        assert_eq!(unsafe { ipasir_two::ipasir2_assume(solver, -2) }, OK);
        assert_eq!(solve(solver, &[]), 20);
        assert_eq!(failed(solver, -2), -2);
        assert_eq!(value(solver, 2), 0);

        assert_eq!(solve(solver, &[4]), 10);
        assert_eq!(value(solver, 4), 4);
        assert_eq!(failed(solver, -2), 0);

        assert_eq!(unsafe { ipasir_two::ipasir2_release(solver) }, OK);
    }

    #[test]
    fn options() {
        let solver = init();

        let mut first: *const ipasir2_option = std::ptr::null();
        let mut second: *const ipasir2_option = std::ptr::null();
        assert_eq!(unsafe { ipasir_two::ipasir2_options(solver, &mut first) }, OK);
        assert_eq!(unsafe { ipasir_two::ipasir2_options(solver, &mut second) }, OK);
        assert_eq!(first, second);

        let mut count = 0;
        loop {
            let option = unsafe { &*first.add(count) };
            if option.name.is_null() {
                break;
            }
            assert!(option.min <= option.max);
            assert_eq!(option.max_state, ipasir2_state::IPASIR2_S_CONFIG);
            count += 1;
        }
        assert_eq!(count, 20);

        let name = c"restart_first";
        assert_eq!(unsafe { ipasir_two::ipasir2_set_option(solver, name.as_ptr(), 200) }, OK);
        assert_eq!(
            unsafe { ipasir_two::ipasir2_set_option(solver, name.as_ptr(), 1) },
            ipasir2_errorcode::IPASIR2_E_INVALID_OPTION_VALUE
        );
        assert_eq!(
            unsafe { ipasir_two::ipasir2_set_option(solver, c"no_such".as_ptr(), 1) },
            ipasir2_errorcode::IPASIR2_E_OPTION_UNKNOWN
        );

        assert_eq!(unsafe { ipasir_two::ipasir2_add_literal(solver, 1) }, OK);
        assert_eq!(
            unsafe { ipasir_two::ipasir2_set_option(solver, name.as_ptr(), 300) },
            ipasir2_errorcode::IPASIR2_E_INVALID_STATE
        );

        assert_eq!(unsafe { ipasir_two::ipasir2_release(solver) }, OK);
    }

    #[test]
    fn invalid_arguments() {
        let null = std::ptr::null_mut();
        let invalid = ipasir2_errorcode::IPASIR2_E_INVALID_ARGUMENT;
        assert_eq!(unsafe { ipasir_two::ipasir2_add_literal(null, 1) }, invalid);

        let solver = init();
        assert_eq!(unsafe { ipasir_two::ipasir2_add_literal(solver, i32::MIN) }, invalid);
        assert_eq!(unsafe { ipasir_two::ipasir2_assume(solver, 0) }, invalid);
        assert_eq!(unsafe { ipasir_two::ipasir2_assume(solver, i32::MAX) }, invalid);
        assert_eq!(unsafe { ipasir_two::ipasir2_add(solver, std::ptr::null(), 3) }, invalid);
        assert_eq!(
            unsafe { ipasir_two::ipasir2_value(solver, 1, std::ptr::null_mut()) },
            invalid
        );

        assert_eq!(unsafe { ipasir_two::ipasir2_add_literal(solver, 1) }, OK);
        let mut result: c_int = -1;
        assert_eq!(
            unsafe { ipasir_two::ipasir2_solve(solver, &mut result, std::ptr::null(), 0) },
            ipasir2_errorcode::IPASIR2_E_INVALID_STATE
        );
        assert_eq!(result, 0);

        assert_eq!(unsafe { ipasir_two::ipasir2_release(solver) }, OK);
    }

    #[test]
    fn unsupported() {
        let solver = init();
        let unsupported = ipasir2_errorcode::IPASIR2_E_UNSUPPORTED;

        let mut size = 0;
        assert_eq!(unsafe { ipasir_two::ipasir2_assignment_size(solver, &mut size) }, unsupported);
        assert_eq!(
            unsafe { ipasir_two::ipasir2_set_terminate(solver, std::ptr::null_mut(), None) },
            unsupported
        );

        assert_eq!(unsafe { ipasir_two::ipasir2_release(solver) }, OK);
    }
}

mod ipasir_one_api {
    use super::*;

    #[test]
    fn round_trip() {
        let signature = unsafe { CStr::from_ptr(ipasir_one::ipasir_signature()) };
        assert!(!signature.to_bytes().is_empty());

        unsafe {
            let solver = ipasir_one::ipasir_init();

            for lit in [1, 2, 0, -1, 2, 0] {
                ipasir_one::ipasir_add(solver, lit);
            }
            assert_eq!(ipasir_one::ipasir_solve(solver), 10);
            assert_eq!(ipasir_one::ipasir_val(solver, 2), 2);
            assert_eq!(ipasir_one::ipasir_val(solver, -2), -2);
            assert_eq!(ipasir_one::ipasir_val(solver, -1) + ipasir_one::ipasir_val(solver, 1), 0);

            ipasir_one::ipasir_assume(solver, -2);
            assert_eq!(ipasir_one::ipasir_solve(solver), 20);
            assert_eq!(ipasir_one::ipasir_failed(solver, -2), 1);
            assert_eq!(ipasir_one::ipasir_failed(solver, 1), 0);

            assert_eq!(ipasir_one::ipasir_solve(solver), 10);

            ipasir_one::ipasir_release(solver);
        }
    }

    #[test]
    fn null_solver() {
        unsafe {
            let null = std::ptr::null_mut();
            ipasir_one::ipasir_add(null, 1);
            assert_eq!(ipasir_one::ipasir_solve(null), 0);
            assert_eq!(ipasir_one::ipasir_val(null, 1), 0);
            ipasir_one::ipasir_release(null);
        }
    }
}
