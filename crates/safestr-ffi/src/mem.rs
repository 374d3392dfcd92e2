// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ffi::c_void;
use core::ptr::{self, NonNull};

use libc::c_int;
use safestr_core::{ErrorKind, Overlap, Preconditions, RSIZE_MAX_MEM, Span, classify, errno_of};

use crate::raw::{capacity, dest_slice, non_null};
use crate::{errno_t, rsize_t};

/// See [`safestr_mem::memset_s`].
///
/// # Safety
///
/// `dest` is null or valid for writes of `dmax` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn memset_s(dest: *mut c_void, dmax: rsize_t, value: c_int, n: rsize_t) -> errno_t {
    let pre = Preconditions::for_mem("memset_s");
    let result = unsafe { dest_slice(pre, dest.cast(), dmax, RSIZE_MAX_MEM) }
        .and_then(|dest| safestr_mem::memset_s(Some(dest), dmax, value, n));

    errno_of(result)
}

/// See [`safestr_mem::memzero_s`].
///
/// # Safety
///
/// `dest` is null or valid for writes of `len` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn memzero_s(dest: *mut c_void, len: rsize_t) -> errno_t {
    let pre = Preconditions::for_mem("memzero_s");
    let result = unsafe { dest_slice(pre, dest.cast(), len, RSIZE_MAX_MEM) }
        .and_then(|dest| safestr_mem::memzero_s(Some(dest), len));

    errno_of(result)
}

/// Checks shared by the raw copies: both pointers, the capacity, and the
/// count against the capacity. The source extent cannot be checked here.
fn checked(
    pre: Preconditions,
    dest: *mut c_void,
    dmax: usize,
    src: *const c_void,
    n: usize,
) -> Result<(NonNull<u8>, NonNull<u8>), ErrorKind> {
    let dest = non_null(pre, dest.cast_const().cast(), "dest is null")?;
    let src = non_null(pre, src.cast(), "src is null")?;
    capacity(pre, dmax, RSIZE_MAX_MEM)?;
    pre.require_fits(n, dmax, "n exceeds dmax")?;

    Ok((dest, src))
}

/// Copies `n` bytes from `src` to `dest`.
///
/// Returns `ESOVRLP` when the two `n`-byte ranges overlap; nothing is
/// copied in that case.
///
/// # Safety
///
/// `dest` is null or valid for writes of `dmax` bytes; `src` is null or
/// valid for reads of `n` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn memcpy_s(dest: *mut c_void, dmax: rsize_t, src: *const c_void, n: rsize_t) -> errno_t {
    let pre = Preconditions::for_mem("memcpy_s");

    let result = checked(pre, dest, dmax, src, n).and_then(|(dest, src)| {
        pre.require_disjoint(
            Span::of_raw(dest.as_ptr(), n),
            Span::of_raw(src.as_ptr(), n),
            "overlap undefined",
        )?;

        unsafe { ptr::copy_nonoverlapping(src.as_ptr(), dest.as_ptr(), n) };
        Ok(())
    });

    errno_of(result)
}

/// Copies `n` bytes from `src` to `dest`, as if through a temporary buffer.
///
/// # Safety
///
/// As [`memcpy_s`]; the ranges may overlap.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn memmove_s(dest: *mut c_void, dmax: rsize_t, src: *const c_void, n: rsize_t) -> errno_t {
    let pre = Preconditions::for_mem("memmove_s");

    let result = checked(pre, dest, dmax, src, n).map(|(dest, src)| {
        let (d, s) = (dest.as_ptr(), src.as_ptr());

        match classify(Span::of_raw(d, n), Span::of_raw(s, n)) {
            Overlap::Same => {}
            Overlap::Disjoint => unsafe { ptr::copy_nonoverlapping(s, d, n) },
            Overlap::DestBeforeSrc | Overlap::DestAfterSrc => unsafe { ptr::copy(s, d, n) },
        }
    });

    errno_of(result)
}
