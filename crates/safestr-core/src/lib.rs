// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # safestr-core
//!
//! The shared contract behind every bounds-checked string and memory
//! operation in `safestr`:
//!
//! - **Validators** ([`Preconditions`]): null, zero-capacity, ceiling and
//!   count checks, run in a fixed order and short-circuiting on the first
//!   failure.
//! - **Violation reporting** ([`report`]): every failed precondition is
//!   dispatched to a process-wide, replaceable [`ConstraintHandler`]. The
//!   default handler aborts.
//! - **Overlap detection** ([`classify`]): a pure function over two
//!   half-open address ranges.
//! - **Bounded mutation** ([`mutate`]): the byte loops that only run once
//!   validation has passed.
//! - **Null slack** ([`scrub_null_slack`]): optional zeroing of everything
//!   past the terminator, controlled by [`set_null_slack`] and the
//!   `null-slack` cargo feature.
//!
//! ## Example
//!
//! ```rust
//! use safestr_core::{ErrorKind, Preconditions, RSIZE_MAX_STR, ignore_handler, set_str_constraint_handler};
//!
//! let previous = set_str_constraint_handler(ignore_handler);
//!
//! let pre = Preconditions::for_str("example_s");
//! let mut buf = *b"test\0\0\0\0";
//!
//! assert!(pre.bounded_dest(Some(&mut buf[..]), 8, RSIZE_MAX_STR).is_ok());
//! assert_eq!(
//!     pre.bounded_dest(Some(&mut buf[..]), 0, RSIZE_MAX_STR).unwrap_err(),
//!     ErrorKind::ZeroLength
//! );
//!
//! set_str_constraint_handler(previous);
//! ```

#[cfg(test)]
mod tests;

mod error;
mod handler;
mod limits;
mod overlap;
mod slack;
mod validate;
mod value;
mod violation;

pub mod mutate;

pub use error::{
    EOK, ESLEMAX, ESNOSPC, ESNULLP, ESOVRLP, ESUNTERM, ESZEROL, Errno, ErrorKind, errno_of,
};
pub use handler::{
    ConstraintHandler, HandlerRegistry, abort_handler, ignore_handler, mem_constraint_handler,
    report, set_mem_constraint_handler, set_str_constraint_handler, str_constraint_handler,
};
pub use limits::{BYTE_VALUE_MAX, RSIZE_MAX_MEM, RSIZE_MAX_STR};
pub use overlap::{Overlap, Span, classify};
pub use slack::{finish_string, null_slack_enabled, scrub_null_slack, set_null_slack};
pub use validate::Preconditions;
pub use value::ByteValue;
pub use violation::{ConstraintViolation, Domain};
