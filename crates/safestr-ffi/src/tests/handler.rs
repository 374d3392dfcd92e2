// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ffi::{CStr, c_void};
use core::ptr;
use std::sync::Mutex;

use libc::c_char;
use safestr_core::{
    ConstraintHandler, ConstraintViolation, ESNULLP, ESZEROL, ErrorKind, abort_handler,
    ignore_handler, mem_constraint_handler, set_str_constraint_handler, str_constraint_handler,
};
use safestr_test_utils::with_recorder;
use serial_test::serial;

use crate::handler::Message;
use crate::{
    errno_t, ignore_handler_s, memset_s, set_mem_constraint_handler_s, set_str_constraint_handler_s,
    strcpy_s,
};

static SEEN: Mutex<Vec<(String, errno_t)>> = Mutex::new(Vec::new());

unsafe extern "C" fn record(msg: *const c_char, ptr: *mut c_void, error: errno_t) {
    assert!(ptr.is_null());
    let text = unsafe { CStr::from_ptr(msg) }.to_string_lossy().into_owned();
    SEEN.lock().expect("poisoned").push((text, error));
}

fn take_seen() -> Vec<(String, errno_t)> {
    core::mem::take(&mut *SEEN.lock().expect("poisoned"))
}

fn same(a: ConstraintHandler, b: ConstraintHandler) -> bool {
    a as usize == b as usize
}

#[test]
#[serial]
fn test_c_handler_receives_message_and_errno() {
    take_seen();
    let previous = set_str_constraint_handler_s(Some(record));
    assert!(previous.is_none());

    let rc = unsafe { strcpy_s(ptr::null_mut(), 8, ptr::null()) };

    let restored = set_str_constraint_handler_s(previous);
    assert!(restored.is_some());

    assert_eq!(rc, ESNULLP);
    assert_eq!(take_seen(), vec![("strcpy_s: dest is null".to_string(), ESNULLP)]);
}

#[test]
#[serial]
fn test_c_handlers_are_per_domain() {
    take_seen();
    let previous = set_mem_constraint_handler_s(Some(record));
    let mut buf = [0u8; 4];

    let rc = unsafe { memset_s(buf.as_mut_ptr().cast(), 0, 0, 0) };

    set_mem_constraint_handler_s(previous);

    assert_eq!(rc, ESZEROL);
    assert_eq!(take_seen(), vec![("memset_s: dmax is 0".to_string(), ESZEROL)]);
    assert!(same(str_constraint_handler(), abort_handler));
}

#[test]
#[serial]
fn test_installing_null_restores_abort_handler() {
    set_mem_constraint_handler_s(Some(ignore_handler_s));
    assert!(!same(mem_constraint_handler(), abort_handler));

    let previous = set_mem_constraint_handler_s(None);

    assert!(previous.is_some());
    assert!(same(mem_constraint_handler(), abort_handler));
}

#[test]
#[serial]
fn test_ignore_handler_s_lets_the_error_through() {
    set_str_constraint_handler_s(Some(ignore_handler_s));
    let rc = unsafe { strcpy_s(ptr::null_mut(), 8, ptr::null()) };
    set_str_constraint_handler_s(None);

    assert_eq!(rc, ESNULLP);
}

#[test]
#[serial]
fn test_c_install_after_rust_install_restores_the_rust_handler() {
    take_seen();
    let original_c = set_str_constraint_handler_s(Some(record));
    let original_rust = set_str_constraint_handler(ignore_handler);

    let previous = set_str_constraint_handler_s(Some(ignore_handler_s));
    set_str_constraint_handler_s(previous);

    let active_is_ignore = same(str_constraint_handler(), ignore_handler);
    let rc = unsafe { strcpy_s(ptr::null_mut(), 8, ptr::null()) };

    set_str_constraint_handler(original_rust);
    set_str_constraint_handler_s(original_c);

    assert!(previous.is_some());
    assert!(active_is_ignore);
    assert_eq!(rc, ESNULLP);
    assert!(take_seen().is_empty());
}

#[test]
#[serial]
fn test_returned_rust_handler_is_callable_from_c() {
    let (previous, recorded) = with_recorder(|| {
        let previous = set_str_constraint_handler_s(Some(ignore_handler_s));
        if let Some(handler) = previous {
            unsafe { handler(c"strcpy_s: dest is null".as_ptr(), ptr::null_mut(), ESNULLP) };
        }
        set_str_constraint_handler_s(previous);
        previous
    });

    assert!(previous.is_some());
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].kind(), ErrorKind::NullPointer);
    assert!(same(str_constraint_handler(), abort_handler));
}

#[test]
#[serial]
fn test_c_install_over_default_returns_null() {
    let previous = set_mem_constraint_handler_s(Some(ignore_handler_s));
    let restored = set_mem_constraint_handler_s(previous);

    assert!(previous.is_none());
    assert!(restored.is_some());
    assert!(same(mem_constraint_handler(), abort_handler));
}

#[test]
fn test_message_is_terminated_and_truncated() {
    const LONG: &str = "a detail long enough that the formatted message cannot fit in the fixed buffer used for C handlers, so the tail of it is simply dropped before the terminator";
    let violation = ConstraintViolation::new("strnset_s", LONG, ErrorKind::ExceedsMax);

    let message = Message::format(&violation);
    let text = unsafe { CStr::from_ptr(message.as_ptr()) }.to_bytes();

    assert_eq!(text.len(), 127);
    assert!(text.starts_with(b"strnset_s: a detail long"));
}

#[test]
fn test_short_message_is_exact() {
    let violation = ConstraintViolation::new("memcpy_s", "overlap undefined", ErrorKind::Overlap);

    let message = Message::format(&violation);
    let text = unsafe { CStr::from_ptr(message.as_ptr()) };

    assert_eq!(text.to_bytes(), b"memcpy_s: overlap undefined");
}

mod abort {
    use core::ptr;

    use safestr_test_utils::run_test_as_subprocess;
    use serial_test::serial;

    use crate::{abort_handler_s, memcpy_s, set_mem_constraint_handler_s};

    #[test]
    #[ignore]
    fn subprocess_test_abort_handler_s_aborts() {
        set_mem_constraint_handler_s(Some(abort_handler_s));
        let _ = unsafe { memcpy_s(ptr::null_mut(), 4, ptr::null(), 4) };
    }

    #[test]
    #[serial(abort)]
    fn test_abort_handler_s_aborts() {
        let status = run_test_as_subprocess("tests::handler::abort::subprocess_test_abort_handler_s_aborts");
        assert!(!status.success());
    }
}
