// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Copies between two ranges of the same buffer, where overlap is real.

use safestr_core::mutate::move_within;
use safestr_core::{ErrorKind, Preconditions, RSIZE_MAX_MEM, Span};

fn checked<'a>(
    pre: Preconditions,
    buf: Option<&'a mut [u8]>,
    dmax: usize,
    dest: usize,
    src: usize,
    n: usize,
) -> Result<&'a mut [u8], ErrorKind> {
    let buf = pre.bounded_dest(buf, dmax, RSIZE_MAX_MEM)?;
    pre.require_fits(dest.saturating_add(n), dmax, "dest range exceeds dmax")?;
    pre.require_fits(src.saturating_add(n), dmax, "src range exceeds dmax")?;

    Ok(buf)
}

/// Copies `n` bytes inside `buf` from offset `src` to offset `dest`.
///
/// # Errors
///
/// As [`memcpy_s`](crate::memcpy_s); both ranges must lie within `dmax`
/// ([`ErrorKind::InsufficientSpace`]) and must not overlap
/// ([`ErrorKind::Overlap`]).
///
/// ```rust
/// use safestr_mem::memcpy_within_s;
///
/// let mut buf = *b"abcd\0\0\0\0";
/// memcpy_within_s(Some(&mut buf[..]), 8, 4, 0, 4).unwrap();
/// assert_eq!(&buf, b"abcdabcd");
/// ```
pub fn memcpy_within_s(
    buf: Option<&mut [u8]>,
    dmax: usize,
    dest: usize,
    src: usize,
    n: usize,
) -> Result<(), ErrorKind> {
    const PRE: Preconditions = Preconditions::for_mem("memcpy_within_s");

    let buf = checked(PRE, buf, dmax, dest, src, n)?;
    PRE.require_disjoint(Span::new(dest, n), Span::new(src, n), "overlap undefined")?;

    buf.copy_within(src..src + n, dest);

    Ok(())
}

/// Moves `n` bytes inside `buf` from offset `src` to offset `dest`. The
/// ranges may overlap; the result is the same as copying through a
/// temporary buffer.
///
/// ```rust
/// use safestr_mem::memmove_within_s;
///
/// let mut buf = *b"abcdefgh";
/// memmove_within_s(Some(&mut buf[..]), 8, 2, 0, 4).unwrap();
/// assert_eq!(&buf, b"ababcdgh");
/// ```
pub fn memmove_within_s(
    buf: Option<&mut [u8]>,
    dmax: usize,
    dest: usize,
    src: usize,
    n: usize,
) -> Result<(), ErrorKind> {
    const PRE: Preconditions = Preconditions::for_mem("memmove_within_s");

    let buf = checked(PRE, buf, dmax, dest, src, n)?;
    move_within(buf, dest, src, n);

    Ok(())
}
