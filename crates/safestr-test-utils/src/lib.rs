// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for safestr crates.
//!
//! ## License
//!
//! GPL-3.0-only

mod fixtures;
mod recorder;
mod subprocess;

pub use fixtures::{STALE, cbuf, live_str};
pub use recorder::{NullSlack, with_recorder};
pub use subprocess::run_test_as_subprocess;
