// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Checks that only look at pointer values and capacities. They must pass
//! before any slice over caller memory is formed.

use core::ptr::NonNull;

use libc::c_char;
use safestr_core::{ErrorKind, Preconditions};

pub(crate) fn non_null(
    pre: Preconditions,
    ptr: *const c_char,
    detail: &'static str,
) -> Result<NonNull<u8>, ErrorKind> {
    pre.require_non_null(NonNull::new(ptr.cast_mut().cast::<u8>()), detail)
}

pub(crate) fn capacity(pre: Preconditions, dmax: usize, ceiling: usize) -> Result<(), ErrorKind> {
    pre.require_non_zero(dmax, "dmax is 0")?;
    pre.require_at_most(dmax, ceiling, "dmax exceeds max")
}

/// Null, zero and ceiling checks for a lone destination buffer, then the
/// `dmax`-byte slice over it.
///
/// # Safety
///
/// If the checks pass, `dest` must be valid for reads and writes of `dmax`
/// bytes and not aliased for the returned lifetime.
pub(crate) unsafe fn dest_slice<'a>(
    pre: Preconditions,
    dest: *mut c_char,
    dmax: usize,
    ceiling: usize,
) -> Result<&'a mut [u8], ErrorKind> {
    let dest = non_null(pre, dest, "dest is null")?;
    capacity(pre, dmax, ceiling)?;

    Ok(unsafe { core::slice::from_raw_parts_mut(dest.as_ptr(), dmax) })
}

/// Length of the string at `s`, reading at most `max` bytes.
///
/// # Safety
///
/// `s` must be readable up to its terminator or `max` bytes, whichever
/// comes first.
pub(crate) unsafe fn strnlen(s: NonNull<u8>, max: usize) -> usize {
    let mut len = 0;
    while len < max && unsafe { *s.as_ptr().add(len) } != 0 {
        len += 1;
    }
    len
}
