// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! In-place ASCII case conversion.
//!
//! These are the fill primitive with a per-character value: each live
//! character is replaced by its mapped form, stopping at the terminator.

use safestr_core::mutate::map_live_content;
use safestr_core::{ErrorKind, Preconditions, RSIZE_MAX_STR, finish_string};

fn map_case(pre: Preconditions, dest: Option<&mut [u8]>, dmax: usize, f: fn(&u8) -> u8) -> Result<(), ErrorKind> {
    let dest = pre.bounded_dest(dest, dmax, RSIZE_MAX_STR)?;

    map_live_content(dest, dmax, |b| f(&b));
    finish_string(dest);

    Ok(())
}

/// Converts the string in `dest` to uppercase.
///
/// ```rust
/// use safestr_str::strtouppercase_s;
///
/// let mut buf = *b"nowisthetime\0\0\0\0";
/// strtouppercase_s(Some(&mut buf[..]), 12).unwrap();
/// assert_eq!(&buf[..12], b"NOWISTHETIME");
/// ```
pub fn strtouppercase_s(dest: Option<&mut [u8]>, dmax: usize) -> Result<(), ErrorKind> {
    map_case(
        Preconditions::for_str("strtouppercase_s"),
        dest,
        dmax,
        u8::to_ascii_uppercase,
    )
}

/// Converts the string in `dest` to lowercase.
pub fn strtolowercase_s(dest: Option<&mut [u8]>, dmax: usize) -> Result<(), ErrorKind> {
    map_case(
        Preconditions::for_str("strtolowercase_s"),
        dest,
        dmax,
        u8::to_ascii_lowercase,
    )
}
