// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use crate::error::ErrorKind;

/// Which handler registry an operation reports to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// String operations (`str*_s`).
    Str,
    /// Raw memory operations (`mem*_s`).
    Mem,
}

/// A failed precondition, built at the point of failure and handed to the
/// installed [`ConstraintHandler`](crate::ConstraintHandler).
///
/// Displays as `"<operation>: <detail>"`, e.g. `"strnset_s: dest is null"`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{operation}: {detail}")]
pub struct ConstraintViolation {
    operation: &'static str,
    detail: &'static str,
    kind: ErrorKind,
}

impl ConstraintViolation {
    pub const fn new(operation: &'static str, detail: &'static str, kind: ErrorKind) -> Self {
        Self {
            operation,
            detail,
            kind,
        }
    }

    /// Name of the operation that refused to run.
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    /// Which precondition failed, in words.
    pub const fn detail(&self) -> &'static str {
        self.detail
    }

    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }
}
