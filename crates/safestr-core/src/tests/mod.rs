// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod overlap;

use std::sync::Mutex;

use crate::{ConstraintViolation, set_mem_constraint_handler, set_str_constraint_handler};

// Local copy of `safestr_test_utils::with_recorder`: that crate depends on
// this one, so using it here would link a second set of handler statics.
static RECORDED: Mutex<Vec<ConstraintViolation>> = Mutex::new(Vec::new());

fn record(violation: &ConstraintViolation) {
    RECORDED
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .push(*violation);
}

/// Runs `f` with a recording handler installed on both registries.
/// Callers must be `#[serial]`.
pub(crate) fn with_recorder<R>(f: impl FnOnce() -> R) -> (R, Vec<ConstraintViolation>) {
    RECORDED.lock().unwrap_or_else(|e| e.into_inner()).clear();

    let prev_str = set_str_constraint_handler(record);
    let prev_mem = set_mem_constraint_handler(record);

    let result = f();

    set_str_constraint_handler(prev_str);
    set_mem_constraint_handler(prev_mem);

    let recorded = core::mem::take(&mut *RECORDED.lock().unwrap_or_else(|e| e.into_inner()));
    (result, recorded)
}
