// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Mutex;

use safestr_core::{
    ConstraintViolation, set_mem_constraint_handler, set_null_slack, set_str_constraint_handler,
};

static RECORDED: Mutex<Vec<ConstraintViolation>> = Mutex::new(Vec::new());

fn record(violation: &ConstraintViolation) {
    RECORDED
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .push(*violation);
}

/// Runs `f` with a recording handler installed on both registries, then
/// restores the previous handlers.
///
/// Handlers are process-wide: tests using this must be `#[serial]`.
pub fn with_recorder<R>(f: impl FnOnce() -> R) -> (R, Vec<ConstraintViolation>) {
    RECORDED.lock().unwrap_or_else(|e| e.into_inner()).clear();

    let prev_str = set_str_constraint_handler(record);
    let prev_mem = set_mem_constraint_handler(record);

    let result = f();

    set_str_constraint_handler(prev_str);
    set_mem_constraint_handler(prev_mem);

    let recorded = core::mem::take(&mut *RECORDED.lock().unwrap_or_else(|e| e.into_inner()));
    (result, recorded)
}

/// Sets the null-slack switch for its lifetime and restores it on drop.
///
/// ```rust
/// use safestr_core::null_slack_enabled;
/// use safestr_test_utils::NullSlack;
///
/// {
///     let _slack = NullSlack::set(true);
///     assert!(null_slack_enabled());
/// }
/// ```
pub struct NullSlack {
    previous: bool,
}

impl NullSlack {
    pub fn set(enabled: bool) -> Self {
        Self {
            previous: set_null_slack(enabled),
        }
    }
}

impl Drop for NullSlack {
    fn drop(&mut self) {
        set_null_slack(self.previous);
    }
}
