// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use safestr_core::{ErrorKind, Preconditions, RSIZE_MAX_MEM};
use safestr_util::{fast_zeroize_slice, fill_bytes_with_pattern};

/// Sets the first `n` bytes of `dest` to `value`.
///
/// # Errors
///
/// - [`ErrorKind::NullPointer`] when `dest` is `None`
/// - [`ErrorKind::ZeroLength`] when `dmax == 0`
/// - [`ErrorKind::ExceedsMax`] when `dmax > RSIZE_MAX_MEM`, `dmax` exceeds
///   the slice, or `value` is not in `0..=255`
/// - [`ErrorKind::InsufficientSpace`] when `n > dmax`; nothing is written
///
/// ```rust
/// use safestr_mem::memset_s;
///
/// let mut buf = [0u8; 8];
/// memset_s(Some(&mut buf[..]), 8, 0xAB, 4).unwrap();
/// assert_eq!(buf, [0xAB, 0xAB, 0xAB, 0xAB, 0, 0, 0, 0]);
/// ```
pub fn memset_s(dest: Option<&mut [u8]>, dmax: usize, value: i32, n: usize) -> Result<(), ErrorKind> {
    const PRE: Preconditions = Preconditions::for_mem("memset_s");

    let dest = PRE.bounded_dest(dest, dmax, RSIZE_MAX_MEM)?;
    let value = PRE.require_byte_value(value, "value exceeds max")?;
    PRE.require_fits(n, dmax, "n exceeds dmax")?;

    fill_bytes_with_pattern(&mut dest[..n], value.get());

    Ok(())
}

/// Zeroes the first `len` bytes of `dest`.
pub fn memzero_s(dest: Option<&mut [u8]>, len: usize) -> Result<(), ErrorKind> {
    const PRE: Preconditions = Preconditions::for_mem("memzero_s");

    let dest = PRE.bounded_dest(dest, len, RSIZE_MAX_MEM)?;
    fast_zeroize_slice(dest);

    Ok(())
}
