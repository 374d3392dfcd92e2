// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use safestr_core::mutate::copy_terminated;
use safestr_core::{ErrorKind, Preconditions, RSIZE_MAX_STR, Span, finish_string};
use safestr_util::strnlen;

/// Appends the string `src` to the string in `dest`.
///
/// # Errors
///
/// - [`ErrorKind::NullPointer`] when `dest` or `src` is `None`
/// - [`ErrorKind::ZeroLength`] when `dmax == 0`
/// - [`ErrorKind::ExceedsMax`] when `dmax > RSIZE_MAX_STR` or `dmax`
///   exceeds the slice
/// - [`ErrorKind::Unterminated`] when `dest` has no terminator within `dmax`
/// - [`ErrorKind::InsufficientSpace`] when the result plus terminator does
///   not fit in `dmax`
///
/// ```rust
/// use safestr_str::strcat_s;
///
/// let mut buf = *b"now\0\0\0\0\0\0\0";
/// strcat_s(Some(&mut buf[..]), 10, Some(&b"is\0"[..])).unwrap();
/// assert_eq!(&buf[..6], b"nowis\0");
/// ```
pub fn strcat_s(dest: Option<&mut [u8]>, dmax: usize, src: Option<&[u8]>) -> Result<(), ErrorKind> {
    const PRE: Preconditions = Preconditions::for_str("strcat_s");

    let dest = PRE.require_non_null(dest, "dest is null")?;
    let src = PRE.require_non_null(src, "src is null")?;
    let dest = PRE.bounded(dest, dmax, RSIZE_MAX_STR)?;

    let dlen = strnlen(dest, dmax);
    if dlen == dmax {
        return Err(PRE.reject("dest is unterminated", ErrorKind::Unterminated));
    }

    let room = dmax - dlen;
    let slen = strnlen(src, room);
    PRE.require_fits(slen, room - 1, "not enough space for src")?;

    let src = &src[..slen];
    PRE.require_disjoint(Span::of(dest), Span::of(src), "overlapping objects")?;

    copy_terminated(&mut dest[dlen..], src);
    finish_string(dest);

    Ok(())
}
