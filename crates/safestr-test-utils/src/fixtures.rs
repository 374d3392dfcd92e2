// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Filler for bytes past the terminator, so tests can tell untouched slack
/// from scrubbed slack.
pub const STALE: u8 = 0xA5;

/// Builds a `size`-byte buffer holding `content`, its terminator, and
/// [`STALE`] bytes after it.
///
/// # Panics
///
/// Panics if `content` plus its terminator does not fit in `size`.
pub fn cbuf(content: &[u8], size: usize) -> Vec<u8> {
    assert!(content.len() < size, "cbuf: content does not fit");

    let mut buf = vec![STALE; size];
    buf[..content.len()].copy_from_slice(content);
    buf[content.len()] = 0;
    buf
}

/// The NUL-terminated prefix of `buf`, or all of it if unterminated.
pub fn live_str(buf: &[u8]) -> &[u8] {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    &buf[..end]
}
