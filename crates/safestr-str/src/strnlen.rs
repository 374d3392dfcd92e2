// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use safestr_util::strnlen;

/// Length of the string in `s`, scanning at most `smax` characters.
///
/// Has no runtime constraints and never invokes a handler: `None` or a zero
/// `smax` yield `0`, and an unterminated string yields `smax` (or the slice
/// length, if shorter).
///
/// ```rust
/// use safestr_str::strnlen_s;
///
/// assert_eq!(strnlen_s(Some(&b"test\0"[..]), 8), 4);
/// assert_eq!(strnlen_s(Some(&b"test\0"[..]), 2), 2);
/// assert_eq!(strnlen_s(None, 8), 0);
/// ```
pub fn strnlen_s(s: Option<&[u8]>, smax: usize) -> usize {
    match s {
        Some(s) => strnlen(s, smax),
        None => 0,
    }
}
