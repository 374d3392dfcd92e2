// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Process-wide constraint handler registries.
//!
//! Strings and raw memory each have one registry holding the currently
//! installed handler. Installation is a single atomic swap and reads are a
//! single atomic load, so reporting never takes a lock. Installing from
//! several threads at once is still a race on *which* handler wins: do it
//! during initialization.

use core::ptr;
use core::sync::atomic::{AtomicPtr, Ordering};

use crate::violation::{ConstraintViolation, Domain};

/// Policy invoked on every constraint violation.
///
/// If the handler returns, the operation returns the violation's error kind
/// to its caller. A handler that must stop the process simply does not
/// return.
pub type ConstraintHandler = fn(&ConstraintViolation);

/// A single replaceable handler cell.
///
/// An empty cell means "never installed" and resolves to [`abort_handler`].
pub struct HandlerRegistry {
    slot: AtomicPtr<()>,
}

impl HandlerRegistry {
    pub const fn new() -> Self {
        Self {
            slot: AtomicPtr::new(ptr::null_mut()),
        }
    }

    /// Installs `handler`, returning the one it replaces.
    pub fn install(&self, handler: ConstraintHandler) -> ConstraintHandler {
        let previous = self.slot.swap(handler as *mut (), Ordering::AcqRel);
        Self::resolve(previous)
    }

    /// Returns the currently installed handler.
    pub fn current(&self) -> ConstraintHandler {
        Self::resolve(self.slot.load(Ordering::Acquire))
    }

    fn resolve(raw: *mut ()) -> ConstraintHandler {
        if raw.is_null() {
            return abort_handler;
        }

        // Only `install` writes non-null values, and it only stores
        // `ConstraintHandler` function pointers.
        unsafe { core::mem::transmute::<*mut (), ConstraintHandler>(raw) }
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static STR_HANDLER: HandlerRegistry = HandlerRegistry::new();
static MEM_HANDLER: HandlerRegistry = HandlerRegistry::new();

impl Domain {
    /// The registry this domain reports to.
    pub fn registry(self) -> &'static HandlerRegistry {
        match self {
            Domain::Str => &STR_HANDLER,
            Domain::Mem => &MEM_HANDLER,
        }
    }
}

/// Installs the handler for string operations, returning the previous one.
///
/// ```rust
/// use safestr_core::{ignore_handler, set_str_constraint_handler};
///
/// let previous = set_str_constraint_handler(ignore_handler);
/// // ... violations are now only reported through return codes ...
/// set_str_constraint_handler(previous);
/// ```
pub fn set_str_constraint_handler(handler: ConstraintHandler) -> ConstraintHandler {
    STR_HANDLER.install(handler)
}

/// Installs the handler for memory operations, returning the previous one.
pub fn set_mem_constraint_handler(handler: ConstraintHandler) -> ConstraintHandler {
    MEM_HANDLER.install(handler)
}

pub fn str_constraint_handler() -> ConstraintHandler {
    STR_HANDLER.current()
}

pub fn mem_constraint_handler() -> ConstraintHandler {
    MEM_HANDLER.current()
}

/// Dispatches `violation` to the handler installed for `domain`.
///
/// With the `tracing` feature a `warn` event is emitted first, so the
/// violation is recorded even when the handler aborts.
pub fn report(domain: Domain, violation: &ConstraintViolation) {
    #[cfg(feature = "tracing")]
    tracing::warn!(
        operation = violation.operation(),
        kind = ?violation.kind(),
        errno = violation.kind().errno(),
        "constraint violation: {}",
        violation
    );

    (domain.registry().current())(violation);
}

/// Default handler: prints the violation to stderr and aborts the process.
pub fn abort_handler(violation: &ConstraintViolation) {
    eprintln!(
        "abort_handler: {} (errno {})",
        violation,
        violation.kind().errno()
    );
    std::process::abort();
}

/// Handler that does nothing; callers rely on the returned error kind alone.
pub fn ignore_handler(_violation: &ConstraintViolation) {}
