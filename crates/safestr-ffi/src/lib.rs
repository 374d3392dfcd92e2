// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! C ABI for the bounds-checked operations.
//!
//! Here buffers arrive as raw pointers, so source and destination really can
//! alias. Every entry point runs the scalar checks (null, zero capacity,
//! ceiling) and the overlap check on raw address ranges *before* it forms a
//! Rust slice, then hands off to the safe implementation. The declared
//! capacity is trusted: a caller that lies about `dmax` has undefined
//! behaviour, exactly as with the C library.
//!
//! Return values are `errno_t`: `0` on success, otherwise the code of the
//! first failed check.

#![allow(non_camel_case_types)]

#[cfg(test)]
mod tests;

mod handler;
mod mem;
mod raw;
mod str;

use libc::{c_int, size_t};

/// Declared capacities and counts.
pub type rsize_t = size_t;

/// Result codes.
pub type errno_t = c_int;

pub use handler::{
    abort_handler_s, constraint_handler_t, ignore_handler_s, set_mem_constraint_handler_s,
    set_str_constraint_handler_s,
};
pub use mem::{memcpy_s, memmove_s, memset_s, memzero_s};
pub use str::{
    strcat_s, strcpy_s, strncpy_s, strnlen_s, strnset_s, strset_s, strtolowercase_s,
    strtouppercase_s, strzero_s,
};
