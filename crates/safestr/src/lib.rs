// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Bounds-checked string and memory operations for Rust and C.</em></p>
//!
//! ---
//!
//! Safestr implements the bounds-checked `*_s` family: every operation
//! takes a destination plus its declared capacity, validates its runtime
//! constraints before writing a single byte, and on violation invokes a
//! replaceable constraint handler and returns an error code.
//!
//! # Features
//!
//! - **Checked before written**: null, zero, ceiling, count and overlap
//!   checks run in a fixed order; a failing call leaves the destination
//!   untouched
//! - **Replaceable handlers**: one for strings, one for memory, aborting
//!   by default
//! - **Null slack**: optionally scrub every byte after the terminator so
//!   stale data does not survive in string buffers
//! - **C ABI**: the same operations for C callers, with overlap detection
//!   on raw address ranges
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! safestr = { version = "0.1.0-rc.1", features = ["full"] }
//! ```
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `null-slack` | Scrubbing after the terminator starts enabled |
//! | `tracing` | Violations are also emitted as `tracing` warnings |
//! | `ffi` | Exposes the C ABI under [`ffi`] |
//! | `full` | `ffi` + `tracing` |
//!
//! # Quick Start
//!
//! ```rust
//! use safestr::{ErrorKind, ignore_handler, set_str_constraint_handler};
//! use safestr::str::{strcpy_s, strnset_s};
//!
//! // The default handler aborts. Return errors instead:
//! let previous = set_str_constraint_handler(ignore_handler);
//!
//! let mut buf = [0u8; 16];
//! strcpy_s(Some(&mut buf[..]), 16, Some(&b"password\0"[..]))?;
//! strnset_s(Some(&mut buf[..]), 16, b'*' as i32, 4)?;
//! assert_eq!(&buf[..9], b"****word\0");
//!
//! // `n` larger than the declared capacity
//! assert_eq!(
//!     strnset_s(Some(&mut buf[..]), 16, 0, 17),
//!     Err(ErrorKind::InsufficientSpace),
//! );
//!
//! set_str_constraint_handler(previous);
//! # Ok::<(), ErrorKind>(())
//! ```
//!
//! # Constraint handlers
//!
//! A handler receives the [`ConstraintViolation`]: the operation name, a
//! short detail and the [`ErrorKind`]. If it returns, the operation returns
//! that kind. Handlers are process-wide and should be installed during
//! initialization.
//!
//! ```rust
//! use safestr::{ConstraintViolation, set_mem_constraint_handler};
//! use safestr::mem::memset_s;
//!
//! fn log_and_continue(v: &ConstraintViolation) {
//!     eprintln!("{v} (errno {})", v.kind().errno());
//! }
//!
//! let previous = set_mem_constraint_handler(log_and_continue);
//! let mut buf = [0u8; 4];
//! assert!(memset_s(Some(&mut buf[..]), 4, 300, 4).is_err());
//! set_mem_constraint_handler(previous);
//! ```
//!
//! # Null slack
//!
//! With null slack enabled, string operations that leave a terminator
//! zero every byte between it and `dmax`. Toggle it at runtime with
//! [`set_null_slack`] or start with it enabled through the `null-slack`
//! feature.
//!
//! # License
//!
//! GPL-3.0-only

pub use safestr_core as core;
pub use safestr_mem as mem;
pub use safestr_str as str;

#[cfg(feature = "ffi")]
pub use safestr_ffi as ffi;

pub use safestr_core::{
    ConstraintHandler, ConstraintViolation, Domain, EOK, Errno, ErrorKind, RSIZE_MAX_MEM,
    RSIZE_MAX_STR, abort_handler, errno_of, ignore_handler, null_slack_enabled,
    set_mem_constraint_handler, set_null_slack, set_str_constraint_handler,
};
