// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use safestr_core::mutate::copy_terminated;
use safestr_core::{ErrorKind, Preconditions, RSIZE_MAX_STR, Span, finish_string};
use safestr_util::strnlen;

/// Copies `src[..len]` plus a terminator into `dest` once both buffers have
/// passed their null and capacity checks.
fn copy_checked(pre: Preconditions, dest: &mut [u8], src: &[u8], len: usize) -> Result<(), ErrorKind> {
    pre.require_fits(len, dest.len() - 1, "not enough space for src")?;

    let src = &src[..len];
    pre.require_disjoint(Span::of(dest), Span::of(src), "overlapping objects")?;

    copy_terminated(dest, src);
    finish_string(dest);

    Ok(())
}

/// Copies the string `src` into `dest`.
///
/// The copy always ends with a terminator inside `dmax`. A source whose
/// length is `dmax` or more is rejected before anything is written.
///
/// # Errors
///
/// - [`ErrorKind::NullPointer`] when `dest` or `src` is `None`
/// - [`ErrorKind::ZeroLength`] when `dmax == 0`
/// - [`ErrorKind::ExceedsMax`] when `dmax > RSIZE_MAX_STR` or `dmax`
///   exceeds the slice
/// - [`ErrorKind::InsufficientSpace`] when `strlen(src) >= dmax`
///
/// ```rust
/// use safestr_str::strcpy_s;
///
/// let mut buf = [0xFFu8; 8];
/// strcpy_s(Some(&mut buf[..]), 8, Some(&b"keep\0"[..])).unwrap();
/// assert_eq!(&buf[..5], b"keep\0");
/// ```
pub fn strcpy_s(dest: Option<&mut [u8]>, dmax: usize, src: Option<&[u8]>) -> Result<(), ErrorKind> {
    const PRE: Preconditions = Preconditions::for_str("strcpy_s");

    let dest = PRE.require_non_null(dest, "dest is null")?;
    let src = PRE.require_non_null(src, "src is null")?;
    let dest = PRE.bounded(dest, dmax, RSIZE_MAX_STR)?;

    let len = strnlen(src, dmax);
    copy_checked(PRE, dest, src, len)
}

/// Copies at most `slen` characters of `src` into `dest`, then terminates.
///
/// `slen == 0` produces an empty string.
///
/// # Errors
///
/// As [`strcpy_s`], plus [`ErrorKind::ExceedsMax`] when
/// `slen > RSIZE_MAX_STR`. The copied length, not `slen`, must fit.
pub fn strncpy_s(
    dest: Option<&mut [u8]>,
    dmax: usize,
    src: Option<&[u8]>,
    slen: usize,
) -> Result<(), ErrorKind> {
    const PRE: Preconditions = Preconditions::for_str("strncpy_s");

    let dest = PRE.require_non_null(dest, "dest is null")?;
    let src = PRE.require_non_null(src, "src is null")?;
    let dest = PRE.bounded(dest, dmax, RSIZE_MAX_STR)?;
    PRE.require_at_most(slen, RSIZE_MAX_STR, "slen exceeds max")?;

    let len = strnlen(src, slen);
    copy_checked(PRE, dest, src, len)
}
