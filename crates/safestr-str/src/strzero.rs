// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use safestr_core::{ErrorKind, Preconditions, RSIZE_MAX_STR};
use safestr_util::fast_zeroize_slice;

/// Zeroes all `dmax` characters of `dest`, terminator and slack included.
pub fn strzero_s(dest: Option<&mut [u8]>, dmax: usize) -> Result<(), ErrorKind> {
    const PRE: Preconditions = Preconditions::for_str("strzero_s");

    let dest = PRE.bounded_dest(dest, dmax, RSIZE_MAX_STR)?;
    fast_zeroize_slice(dest);

    Ok(())
}
