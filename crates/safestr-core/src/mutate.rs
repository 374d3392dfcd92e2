// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bounded mutators.
//!
//! These loops assume their preconditions already passed: slices are
//! narrowed to the declared capacity and counts fit. They never read or
//! write outside the slices they are given.

use crate::overlap::{Overlap, Span, classify};
use crate::value::ByteValue;

/// Rewrites at most `n` bytes of the live content of `dest` through `f`,
/// stopping at the first terminator. The terminator and everything after it
/// are left alone.
///
/// Returns the number of bytes written.
///
/// ```rust
/// use safestr_core::mutate::map_live_content;
///
/// let mut buf = *b"qqeRo\0xy";
/// assert_eq!(map_live_content(&mut buf, 8, |b| b.to_ascii_uppercase()), 5);
/// assert_eq!(&buf, b"QQERO\0xy");
/// ```
pub fn map_live_content(dest: &mut [u8], n: usize, mut f: impl FnMut(u8) -> u8) -> usize {
    let mut written = 0;

    for byte in dest.iter_mut().take(n) {
        if *byte == 0 {
            break;
        }
        *byte = f(*byte);
        written += 1;
    }

    written
}

/// Sets at most `n` bytes of the live content of `dest` to `value`. Stops
/// at the terminator: `n` caps the writes, it does not extend the string.
#[inline]
pub fn fill_live_content(dest: &mut [u8], n: usize, value: ByteValue) -> usize {
    let value = value.get();
    map_live_content(dest, n, |_| value)
}

/// Copies `src` to the front of `dest` and terminates it.
///
/// Requires `src.len() < dest.len()`; `src` must not contain the
/// terminator.
#[inline]
pub fn copy_terminated(dest: &mut [u8], src: &[u8]) {
    debug_assert!(src.len() < dest.len());

    dest[..src.len()].copy_from_slice(src);
    dest[src.len()] = 0;
}

/// Moves `n` bytes inside `buf` from `src` to `dest`, picking the copy
/// direction from how the two ranges overlap.
///
/// Requires both ranges to lie inside `buf`.
pub fn move_within(buf: &mut [u8], dest: usize, src: usize, n: usize) {
    debug_assert!(dest + n <= buf.len() && src + n <= buf.len());

    match classify(Span::new(dest, n), Span::new(src, n)) {
        Overlap::Same => {}
        Overlap::Disjoint | Overlap::DestBeforeSrc => {
            for i in 0..n {
                buf[dest + i] = buf[src + i];
            }
        }
        Overlap::DestAfterSrc => {
            for i in (0..n).rev() {
                buf[dest + i] = buf[src + i];
            }
        }
    }
}
