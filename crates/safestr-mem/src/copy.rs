// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use safestr_core::{ErrorKind, Preconditions, RSIZE_MAX_MEM, Span};

/// Shared checks for the two-buffer copies. Returns the destination and
/// source narrowed to the `n` bytes that will be copied.
fn checked<'a, 'b>(
    pre: Preconditions,
    dest: Option<&'a mut [u8]>,
    dmax: usize,
    src: Option<&'b [u8]>,
    n: usize,
) -> Result<(&'a mut [u8], &'b [u8]), ErrorKind> {
    let dest = pre.require_non_null(dest, "dest is null")?;
    let src = pre.require_non_null(src, "src is null")?;
    let dest = pre.bounded(dest, dmax, RSIZE_MAX_MEM)?;
    pre.require_at_most(n, src.len(), "src overflow")?;
    pre.require_fits(n, dmax, "n exceeds dmax")?;

    Ok((&mut dest[..n], &src[..n]))
}

/// Copies `n` bytes from `src` to `dest`. The ranges must not overlap.
///
/// # Errors
///
/// - [`ErrorKind::NullPointer`] when `dest` or `src` is `None`
/// - [`ErrorKind::ZeroLength`] when `dmax == 0`
/// - [`ErrorKind::ExceedsMax`] when `dmax > RSIZE_MAX_MEM`, or `dmax` / `n`
///   exceed their slices
/// - [`ErrorKind::InsufficientSpace`] when `n > dmax`
/// - [`ErrorKind::Overlap`] when the ranges overlap
///
/// ```rust
/// use safestr_mem::memcpy_s;
///
/// let mut buf = [0u8; 8];
/// memcpy_s(Some(&mut buf[..]), 8, Some(&[1u8, 2, 3][..]), 3).unwrap();
/// assert_eq!(&buf[..4], &[1, 2, 3, 0]);
/// ```
pub fn memcpy_s(dest: Option<&mut [u8]>, dmax: usize, src: Option<&[u8]>, n: usize) -> Result<(), ErrorKind> {
    const PRE: Preconditions = Preconditions::for_mem("memcpy_s");

    let (dest, src) = checked(PRE, dest, dmax, src, n)?;
    PRE.require_disjoint(Span::of(dest), Span::of(src), "overlap undefined")?;

    dest.copy_from_slice(src);

    Ok(())
}

/// Copies `n` bytes from `src` to `dest`, as if through a temporary buffer.
///
/// Same errors as [`memcpy_s`] except [`ErrorKind::Overlap`].
pub fn memmove_s(dest: Option<&mut [u8]>, dmax: usize, src: Option<&[u8]>, n: usize) -> Result<(), ErrorKind> {
    const PRE: Preconditions = Preconditions::for_mem("memmove_s");

    let (dest, src) = checked(PRE, dest, dmax, src, n)?;
    dest.copy_from_slice(src);

    Ok(())
}
