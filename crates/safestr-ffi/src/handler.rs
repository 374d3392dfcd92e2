// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! C constraint handlers.
//!
//! A C handler is kept in its own slot. The Rust registry for the same
//! domain gets a trampoline that formats the violation into a
//! NUL-terminated message and calls whatever the slot holds.
//!
//! When a C install displaces a handler that was installed from Rust, the
//! Rust handler is stashed and the installer returns a per-domain restore
//! function in its place. Installing that function again puts the stashed
//! Rust handler back; calling it forwards the error to the stashed handler.

use core::ffi::{CStr, c_void};
use core::fmt::{self, Write};
use core::ptr;
use core::sync::atomic::{AtomicPtr, Ordering};

use libc::c_char;
use safestr_core::{
    ConstraintHandler, ConstraintViolation, Domain, ErrorKind, HandlerRegistry, abort_handler,
};

use crate::errno_t;

/// C handler signature: message, reserved pointer (always null), error code.
pub type constraint_handler_t = Option<unsafe extern "C" fn(msg: *const c_char, ptr: *mut c_void, error: errno_t)>;

type RawHandler = unsafe extern "C" fn(*const c_char, *mut c_void, errno_t);

const MESSAGE_LEN: usize = 128;

static STR_SLOT: AtomicPtr<()> = AtomicPtr::new(ptr::null_mut());
static MEM_SLOT: AtomicPtr<()> = AtomicPtr::new(ptr::null_mut());

static STR_STASH: HandlerRegistry = HandlerRegistry::new();
static MEM_STASH: HandlerRegistry = HandlerRegistry::new();

fn slot(domain: Domain) -> &'static AtomicPtr<()> {
    match domain {
        Domain::Str => &STR_SLOT,
        Domain::Mem => &MEM_SLOT,
    }
}

fn stash(domain: Domain) -> &'static HandlerRegistry {
    match domain {
        Domain::Str => &STR_STASH,
        Domain::Mem => &MEM_STASH,
    }
}

fn same_handler(a: ConstraintHandler, b: ConstraintHandler) -> bool {
    a as usize == b as usize
}

fn same_raw(a: RawHandler, b: RawHandler) -> bool {
    a as usize == b as usize
}

fn decode(raw: *mut ()) -> constraint_handler_t {
    if raw.is_null() {
        return None;
    }

    // Only `install` writes non-null values, and only `RawHandler`s.
    Some(unsafe { core::mem::transmute::<*mut (), RawHandler>(raw) })
}

/// "operation: detail", truncated to fit with its terminator.
pub(crate) struct Message {
    buf: [u8; MESSAGE_LEN],
    len: usize,
}

impl Message {
    pub(crate) fn format(violation: &ConstraintViolation) -> Self {
        let mut message = Self {
            buf: [0; MESSAGE_LEN],
            len: 0,
        };
        // `write_str` never fails.
        let _ = write!(message, "{violation}");
        message
    }

    pub(crate) fn as_ptr(&self) -> *const c_char {
        self.buf.as_ptr().cast()
    }
}

impl Write for Message {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = MESSAGE_LEN - 1 - self.len;
        let take = s.len().min(room);
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        Ok(())
    }
}

fn forward(domain: Domain, violation: &ConstraintViolation) {
    match decode(slot(domain).load(Ordering::Acquire)) {
        Some(handler) => {
            let message = Message::format(violation);
            unsafe { handler(message.as_ptr(), ptr::null_mut(), violation.kind().errno()) };
        }
        None => abort_handler(violation),
    }
}

fn forward_str(violation: &ConstraintViolation) {
    forward(Domain::Str, violation);
}

fn forward_mem(violation: &ConstraintViolation) {
    forward(Domain::Mem, violation);
}

/// Calls the stashed Rust handler of `domain` with a violation rebuilt from
/// the error code. Unknown codes abort.
fn forward_to_stash(domain: Domain, error: errno_t) {
    match ErrorKind::from_errno(error) {
        Some(kind) => {
            let violation = ConstraintViolation::new("constraint_handler_s", "forwarded from C", kind);
            (stash(domain).current())(&violation);
        }
        None => abort_handler(&ConstraintViolation::new(
            "constraint_handler_s",
            "unknown error code",
            ErrorKind::ExceedsMax,
        )),
    }
}

unsafe extern "C" fn restore_str(_msg: *const c_char, _ptr: *mut c_void, error: errno_t) {
    forward_to_stash(Domain::Str, error);
}

unsafe extern "C" fn restore_mem(_msg: *const c_char, _ptr: *mut c_void, error: errno_t) {
    forward_to_stash(Domain::Mem, error);
}

/// Per-domain pieces the installer switches between.
struct Bridge {
    domain: Domain,
    trampoline: ConstraintHandler,
    restore: RawHandler,
}

const STR_BRIDGE: Bridge = Bridge {
    domain: Domain::Str,
    trampoline: forward_str,
    restore: restore_str,
};

const MEM_BRIDGE: Bridge = Bridge {
    domain: Domain::Mem,
    trampoline: forward_mem,
    restore: restore_mem,
};

fn install(bridge: &Bridge, handler: constraint_handler_t) -> constraint_handler_t {
    let domain = bridge.domain;

    let (raw, rust) = match handler {
        None => (ptr::null_mut(), abort_handler as ConstraintHandler),
        Some(h) if same_raw(h, bridge.restore) => (ptr::null_mut(), stash(domain).current()),
        Some(h) => (h as *mut (), bridge.trampoline),
    };

    let previous_c = slot(domain).swap(raw, Ordering::AcqRel);
    let previous = domain.registry().install(rust);

    if same_handler(previous, bridge.trampoline) {
        decode(previous_c)
    } else if same_handler(previous, abort_handler) {
        None
    } else {
        // A handler installed from Rust: keep it so the caller can restore it.
        stash(domain).install(previous);
        Some(bridge.restore)
    }
}

/// Installs the handler for string operations and returns the one it
/// replaces. `NULL` restores the aborting default.
#[unsafe(no_mangle)]
pub extern "C" fn set_str_constraint_handler_s(handler: constraint_handler_t) -> constraint_handler_t {
    install(&STR_BRIDGE, handler)
}

/// Installs the handler for memory operations and returns the one it
/// replaces. `NULL` restores the aborting default.
#[unsafe(no_mangle)]
pub extern "C" fn set_mem_constraint_handler_s(handler: constraint_handler_t) -> constraint_handler_t {
    install(&MEM_BRIDGE, handler)
}

/// Prints the message and aborts the process.
///
/// # Safety
///
/// `msg` is null or a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn abort_handler_s(msg: *const c_char, _ptr: *mut c_void, error: errno_t) {
    let text = if msg.is_null() {
        "(null)".into()
    } else {
        unsafe { CStr::from_ptr(msg) }.to_string_lossy()
    };
    eprintln!("abort_handler_s: {text} (errno {error})");

    unsafe { libc::abort() }
}

/// Does nothing; the failing call returns its error code.
#[unsafe(no_mangle)]
pub extern "C" fn ignore_handler_s(_msg: *const c_char, _ptr: *mut c_void, _error: errno_t) {}
