// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::slice;

use libc::{c_char, c_int};
use safestr_core::{ErrorKind, Preconditions, RSIZE_MAX_STR, Span, errno_of};

use crate::raw::{capacity, dest_slice, non_null, strnlen};
use crate::{errno_t, rsize_t};

/// See [`safestr_str::strnset_s`].
///
/// # Safety
///
/// `dest` is null or valid for reads and writes of `dmax` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strnset_s(dest: *mut c_char, dmax: rsize_t, value: c_int, n: rsize_t) -> errno_t {
    let pre = Preconditions::for_str("strnset_s");
    let result = unsafe { dest_slice(pre, dest, dmax, RSIZE_MAX_STR) }
        .and_then(|dest| safestr_str::strnset_s(Some(dest), dmax, value, n));

    errno_of(result)
}

/// See [`safestr_str::strset_s`].
///
/// # Safety
///
/// `dest` is null or valid for reads and writes of `dmax` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strset_s(dest: *mut c_char, dmax: rsize_t, value: c_int) -> errno_t {
    let pre = Preconditions::for_str("strset_s");
    let result = unsafe { dest_slice(pre, dest, dmax, RSIZE_MAX_STR) }
        .and_then(|dest| safestr_str::strset_s(Some(dest), dmax, value));

    errno_of(result)
}

/// See [`safestr_str::strzero_s`].
///
/// # Safety
///
/// `dest` is null or valid for writes of `dmax` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strzero_s(dest: *mut c_char, dmax: rsize_t) -> errno_t {
    let pre = Preconditions::for_str("strzero_s");
    let result = unsafe { dest_slice(pre, dest, dmax, RSIZE_MAX_STR) }
        .and_then(|dest| safestr_str::strzero_s(Some(dest), dmax));

    errno_of(result)
}

/// See [`safestr_str::strtouppercase_s`].
///
/// # Safety
///
/// `dest` is null or valid for reads and writes of `dmax` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strtouppercase_s(dest: *mut c_char, dmax: rsize_t) -> errno_t {
    let pre = Preconditions::for_str("strtouppercase_s");
    let result = unsafe { dest_slice(pre, dest, dmax, RSIZE_MAX_STR) }
        .and_then(|dest| safestr_str::strtouppercase_s(Some(dest), dmax));

    errno_of(result)
}

/// See [`safestr_str::strtolowercase_s`].
///
/// # Safety
///
/// `dest` is null or valid for reads and writes of `dmax` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strtolowercase_s(dest: *mut c_char, dmax: rsize_t) -> errno_t {
    let pre = Preconditions::for_str("strtolowercase_s");
    let result = unsafe { dest_slice(pre, dest, dmax, RSIZE_MAX_STR) }
        .and_then(|dest| safestr_str::strtolowercase_s(Some(dest), dmax));

    errno_of(result)
}

/// See [`safestr_str::strnlen_s`]. Never invokes a handler.
///
/// # Safety
///
/// `s` is null or readable up to its terminator or `smax` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strnlen_s(s: *const c_char, smax: rsize_t) -> rsize_t {
    match core::ptr::NonNull::new(s.cast_mut().cast::<u8>()) {
        Some(s) => unsafe { strnlen(s, smax) },
        None => 0,
    }
}

/// Copies the first `len` bytes of `src` plus its terminator over the
/// `dmax` bytes at `dest`, after the overlap check on raw ranges.
///
/// # Safety
///
/// `dest` valid for `dmax` bytes, `src` valid for `len + 1` bytes.
unsafe fn copy_raw(
    pre: Preconditions,
    dest: core::ptr::NonNull<u8>,
    dmax: usize,
    src: core::ptr::NonNull<u8>,
    len: usize,
    op: impl FnOnce(&mut [u8], &[u8]) -> Result<(), ErrorKind>,
) -> Result<(), ErrorKind> {
    pre.require_disjoint(
        Span::of_raw(dest.as_ptr(), dmax),
        Span::of_raw(src.as_ptr(), len + 1),
        "overlapping objects",
    )?;

    let dest = unsafe { slice::from_raw_parts_mut(dest.as_ptr(), dmax) };
    let src = unsafe { slice::from_raw_parts(src.as_ptr(), len + 1) };
    op(dest, src)
}

/// See [`safestr_str::strcpy_s`]. Overlapping `dest` and `src` are
/// rejected with `ESOVRLP`.
///
/// # Safety
///
/// `dest` is null or valid for reads and writes of `dmax` bytes; `src` is
/// null or readable up to its terminator or `dmax` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strcpy_s(dest: *mut c_char, dmax: rsize_t, src: *const c_char) -> errno_t {
    let pre = Preconditions::for_str("strcpy_s");

    let result = (|| -> Result<(), ErrorKind> {
        let dest = non_null(pre, dest, "dest is null")?;
        let src = non_null(pre, src, "src is null")?;
        capacity(pre, dmax, RSIZE_MAX_STR)?;

        let len = unsafe { strnlen(src, dmax) };
        pre.require_fits(len, dmax - 1, "not enough space for src")?;

        unsafe {
            copy_raw(pre, dest, dmax, src, len, |d, s| {
                safestr_str::strcpy_s(Some(d), dmax, Some(s))
            })
        }
    })();

    errno_of(result)
}

/// See [`safestr_str::strncpy_s`].
///
/// # Safety
///
/// As [`strcpy_s`], with `src` readable up to its terminator or `slen`
/// bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strncpy_s(dest: *mut c_char, dmax: rsize_t, src: *const c_char, slen: rsize_t) -> errno_t {
    let pre = Preconditions::for_str("strncpy_s");

    let result = (|| -> Result<(), ErrorKind> {
        let dest = non_null(pre, dest, "dest is null")?;
        let src = non_null(pre, src, "src is null")?;
        capacity(pre, dmax, RSIZE_MAX_STR)?;
        pre.require_at_most(slen, RSIZE_MAX_STR, "slen exceeds max")?;

        let len = unsafe { strnlen(src, slen.min(dmax)) };
        pre.require_fits(len, dmax - 1, "not enough space for src")?;

        // The source slice ends at `len`: the terminator is supplied by the
        // copy, the source may not have one within `slen`.
        pre.require_disjoint(
            Span::of_raw(dest.as_ptr(), dmax),
            Span::of_raw(src.as_ptr(), len),
            "overlapping objects",
        )?;

        let d = unsafe { slice::from_raw_parts_mut(dest.as_ptr(), dmax) };
        let s = unsafe { slice::from_raw_parts(src.as_ptr(), len) };
        safestr_str::strncpy_s(Some(d), dmax, Some(s), len)
    })();

    errno_of(result)
}

/// See [`safestr_str::strcat_s`].
///
/// # Safety
///
/// `dest` is null or valid for reads and writes of `dmax` bytes; `src` is
/// null or readable up to its terminator or `dmax` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strcat_s(dest: *mut c_char, dmax: rsize_t, src: *const c_char) -> errno_t {
    let pre = Preconditions::for_str("strcat_s");

    let result = (|| -> Result<(), ErrorKind> {
        let dest = non_null(pre, dest, "dest is null")?;
        let src = non_null(pre, src, "src is null")?;
        capacity(pre, dmax, RSIZE_MAX_STR)?;

        let dlen = unsafe { strnlen(dest, dmax) };
        if dlen == dmax {
            return Err(pre.reject("dest is unterminated", ErrorKind::Unterminated));
        }

        let room = dmax - dlen;
        let len = unsafe { strnlen(src, room) };
        pre.require_fits(len, room - 1, "not enough space for src")?;

        unsafe {
            copy_raw(pre, dest, dmax, src, len, |d, s| {
                safestr_str::strcat_s(Some(d), dmax, Some(s))
            })
        }
    })();

    errno_of(result)
}
