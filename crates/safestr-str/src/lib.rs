// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bounds-checked operations on NUL-terminated strings.
//!
//! Every operation takes the destination as `Option<&mut [u8]>` (`None`
//! standing in for a null pointer) together with a declared capacity
//! `dmax`. Preconditions are checked before any byte is written; on failure
//! the installed string constraint handler is invoked and the error kind is
//! returned, with the destination untouched.
//!
//! ```rust
//! use safestr_str::strnset_s;
//!
//! let mut buf = *b"secret\0\0";
//! strnset_s(Some(&mut buf[..]), 8, b'*' as i32, 4).unwrap();
//! assert_eq!(&buf[..7], b"****et\0");
//! ```

mod case;
mod strcat;
mod strcpy;
mod strnlen;
mod strnset;
mod strzero;

pub use case::{strtolowercase_s, strtouppercase_s};
pub use strcat::strcat_s;
pub use strcpy::{strcpy_s, strncpy_s};
pub use strnlen::strnlen_s;
pub use strnset::{strnset_s, strset_s};
pub use strzero::strzero_s;
