// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Null-slack scrubbing.
//!
//! When enabled, a successful string operation zeroes every byte after the
//! new terminator up to the declared capacity, so stale content cannot be
//! read back through a later, longer interpretation of the buffer. When
//! disabled those bytes keep whatever they held before the call.

use core::sync::atomic::{AtomicBool, Ordering};

use safestr_util::zeroize_after_nul;

static NULL_SLACK: AtomicBool = AtomicBool::new(cfg!(feature = "null-slack"));

/// Enables or disables null-slack scrubbing, returning the previous state.
///
/// The initial state is set by the `null-slack` cargo feature.
pub fn set_null_slack(enabled: bool) -> bool {
    NULL_SLACK.swap(enabled, Ordering::AcqRel)
}

pub fn null_slack_enabled() -> bool {
    NULL_SLACK.load(Ordering::Acquire)
}

/// Zeroes everything after the first terminator in `dest`, regardless of
/// the switch. Returns the number of bytes cleared.
#[inline]
pub fn scrub_null_slack(dest: &mut [u8]) -> usize {
    zeroize_after_nul(dest)
}

/// Final step of every successful string mutation. `dest` must already be
/// narrowed to the declared capacity.
#[inline]
pub fn finish_string(dest: &mut [u8]) {
    if null_slack_enabled() {
        scrub_null_slack(dest);
    }
}
