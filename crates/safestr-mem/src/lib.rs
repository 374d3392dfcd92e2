// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bounds-checked operations on raw memory.
//!
//! Same contract as the string operations, without terminators: counts are
//! exact, there is no null slack, and violations go to the memory
//! constraint handler.
//!
//! Two distinct Rust slices can never alias, so the overlap check only has
//! teeth in the single-buffer variants ([`memcpy_within_s`],
//! [`memmove_within_s`]) and in the C ABI.

mod copy;
mod set;
mod within;

pub use copy::{memcpy_s, memmove_s};
pub use set::{memset_s, memzero_s};
pub use within::{memcpy_within_s, memmove_within_s};
