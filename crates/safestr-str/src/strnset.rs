// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use safestr_core::mutate::fill_live_content;
use safestr_core::{ErrorKind, Preconditions, RSIZE_MAX_STR, finish_string};

/// Sets at most `n` characters of `dest` to `value`, never touching the
/// terminator.
///
/// The fill stops at the existing terminator: `n` is an upper bound on the
/// number of writes, not a promise to extend the string. With null slack
/// enabled everything after the terminator, up to `dmax`, is zeroed. This
/// also happens when `n` runs out before the terminator is reached; the
/// classic C implementation only clears the tail when the fill reached the
/// terminator.
///
/// # Errors
///
/// - [`ErrorKind::NullPointer`] when `dest` is `None`
/// - [`ErrorKind::ZeroLength`] when `dmax == 0`
/// - [`ErrorKind::ExceedsMax`] when `dmax > RSIZE_MAX_STR`, `dmax` exceeds
///   the slice, or `value` is not in `0..=255`
/// - [`ErrorKind::InsufficientSpace`] when `n > dmax`
///
/// # Example
///
/// ```rust
/// use safestr_str::strnset_s;
///
/// let mut buf = *b"1234\0\0\0\0";
/// strnset_s(Some(&mut buf[..]), 8, b'X' as i32, 8).unwrap();
/// assert_eq!(&buf[..5], b"XXXX\0");
/// ```
pub fn strnset_s(dest: Option<&mut [u8]>, dmax: usize, value: i32, n: usize) -> Result<(), ErrorKind> {
    const PRE: Preconditions = Preconditions::for_str("strnset_s");

    let dest = PRE.bounded_dest(dest, dmax, RSIZE_MAX_STR)?;
    let value = PRE.require_byte_value(value, "value exceeds max")?;
    PRE.require_fits(n, dmax, "n exceeds dmax")?;

    fill_live_content(dest, n, value);
    finish_string(dest);

    Ok(())
}

/// Sets every character of `dest` to `value`, up to the terminator.
///
/// Same as [`strnset_s`] with `n = dmax`.
pub fn strset_s(dest: Option<&mut [u8]>, dmax: usize, value: i32) -> Result<(), ErrorKind> {
    const PRE: Preconditions = Preconditions::for_str("strset_s");

    let dest = PRE.bounded_dest(dest, dmax, RSIZE_MAX_STR)?;
    let value = PRE.require_byte_value(value, "value exceeds max")?;

    fill_live_content(dest, dmax, value);
    finish_string(dest);

    Ok(())
}
