// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error taxonomy shared by all bounds-checked operations.
use thiserror::Error;

/// C-compatible error number (`errno_t`).
pub type Errno = i32;

/// Success.
pub const EOK: Errno = 0;
/// Null pointer.
pub const ESNULLP: Errno = 400;
/// Length is zero.
pub const ESZEROL: Errno = 401;
/// Length exceeds max.
pub const ESLEMAX: Errno = 403;
/// Overlap undefined.
pub const ESOVRLP: Errno = 404;
/// Not enough space for the result.
pub const ESNOSPC: Errno = 406;
/// Unterminated string.
pub const ESUNTERM: Errno = 407;

/// Why an operation refused to run.
///
/// Every validator maps to exactly one kind. A failed operation has written
/// nothing to its destination.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required buffer argument is null.
    #[error("null pointer")]
    NullPointer,

    /// A declared capacity is zero.
    #[error("zero length")]
    ZeroLength,

    /// A declared capacity or a bounded value is out of its permitted range.
    #[error("exceeds maximum")]
    ExceedsMax,

    /// An explicit count does not fit the destination's declared capacity.
    #[error("insufficient space")]
    InsufficientSpace,

    /// Source and destination ranges alias in an operation that forbids it.
    #[error("overlapping buffers")]
    Overlap,

    /// The destination has no terminator within its declared capacity.
    #[error("unterminated string")]
    Unterminated,
}

impl ErrorKind {
    /// Returns the C error number for this kind.
    pub const fn errno(self) -> Errno {
        match self {
            Self::NullPointer => ESNULLP,
            Self::ZeroLength => ESZEROL,
            Self::ExceedsMax => ESLEMAX,
            Self::InsufficientSpace => ESNOSPC,
            Self::Overlap => ESOVRLP,
            Self::Unterminated => ESUNTERM,
        }
    }

    /// Maps a C error number back to its kind. `EOK` and unknown numbers
    /// yield `None`.
    pub const fn from_errno(errno: Errno) -> Option<Self> {
        match errno {
            ESNULLP => Some(Self::NullPointer),
            ESZEROL => Some(Self::ZeroLength),
            ESLEMAX => Some(Self::ExceedsMax),
            ESNOSPC => Some(Self::InsufficientSpace),
            ESOVRLP => Some(Self::Overlap),
            ESUNTERM => Some(Self::Unterminated),
            _ => None,
        }
    }
}

/// Collapses an operation result into its C error number.
#[inline]
pub fn errno_of(result: Result<(), ErrorKind>) -> Errno {
    match result {
        Ok(()) => EOK,
        Err(kind) => kind.errno(),
    }
}
