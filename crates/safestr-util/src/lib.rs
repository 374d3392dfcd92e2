// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-level primitives shared by the bounds-checked operations.
//!
//! Nothing in here validates arguments or reports violations: callers are
//! expected to have run their preconditions already. Every scan is bounded
//! by an explicit maximum and by the slice extent, whichever is smaller.

#![cfg_attr(not(test), no_std)]

/// Returns the length of the NUL-terminated prefix of `bytes`, scanning at
/// most `max` bytes.
///
/// If no NUL byte is found within `min(max, bytes.len())`, that bound is
/// returned. The scan never reads past it.
///
/// # Example
///
/// ```
/// use safestr_util::strnlen;
///
/// assert_eq!(strnlen(b"test\0\0\0\0", 8), 4);
/// assert_eq!(strnlen(b"test\0\0\0\0", 2), 2);
/// assert_eq!(strnlen(b"abc", 16), 3);
/// assert_eq!(strnlen(b"\0abc", 16), 0);
/// ```
#[inline]
pub fn strnlen(bytes: &[u8], max: usize) -> usize {
    let bound = max.min(bytes.len());
    bytes[..bound]
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(bound)
}

/// Fills a byte slice with a repeating pattern byte.
///
/// # Example
///
/// ```
/// use safestr_util::fill_bytes_with_pattern;
///
/// let mut buffer = [0u8; 8];
/// fill_bytes_with_pattern(&mut buffer, 0xAB);
/// assert!(buffer.iter().all(|&b| b == 0xAB));
/// ```
#[inline]
pub fn fill_bytes_with_pattern(slice: &mut [u8], pattern: u8) {
    for byte in slice.iter_mut() {
        *byte = pattern;
    }
}

/// Verifies that a slice is zeroized.
///
/// # Example
///
/// ```
/// use safestr_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 10]));
/// assert!(!is_slice_zeroized(&[0u8, 1, 0, 0]));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Fast bulk zeroization that can be vectorized.
///
/// Uses `write_bytes` (memset) + volatile read to prevent the optimizer
/// from removing the zeroization of bytes that are never read again.
///
/// # Example
///
/// ```
/// use safestr_util::fast_zeroize_slice;
///
/// let mut data = *b"secret\0\0";
/// fast_zeroize_slice(&mut data);
/// assert!(data.iter().all(|&b| b == 0));
/// ```
#[inline(always)]
pub fn fast_zeroize_slice(slice: &mut [u8]) {
    if slice.is_empty() {
        return;
    }

    unsafe {
        core::ptr::write_bytes(slice.as_mut_ptr(), 0, slice.len());
        // Volatile read prevents the optimizer from removing the write_bytes
        core::ptr::read_volatile(slice.as_ptr());
    }
}

/// Zeroizes everything after the NUL-terminated prefix of `slice`.
///
/// The terminator itself is left in place (it is already zero). Returns the
/// number of bytes that follow the terminator, i.e. the size of the slack
/// that was cleared. A slice without a terminator has no slack.
///
/// # Example
///
/// ```
/// use safestr_util::zeroize_after_nul;
///
/// let mut buf = *b"ab\0stale";
/// assert_eq!(zeroize_after_nul(&mut buf), 5);
/// assert_eq!(&buf, b"ab\0\0\0\0\0\0");
///
/// let mut full = *b"abcd";
/// assert_eq!(zeroize_after_nul(&mut full), 0);
/// assert_eq!(&full, b"abcd");
/// ```
#[inline]
pub fn zeroize_after_nul(slice: &mut [u8]) -> usize {
    let len = strnlen(slice, slice.len());
    if len == slice.len() {
        return 0;
    }

    let slack = &mut slice[len + 1..];
    fast_zeroize_slice(slack);
    slack.len()
}
