// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! System ceilings.
//!
//! A capacity above its ceiling is almost always a negative value that went
//! through a signed/unsigned conversion, so it is rejected outright.

/// Maximum declared capacity of a string buffer (4 KiB).
pub const RSIZE_MAX_STR: usize = 4 << 10;

/// Maximum declared capacity of a raw memory buffer (256 MiB).
pub const RSIZE_MAX_MEM: usize = 256 << 20;

/// Largest value accepted where a single byte is expected.
pub const BYTE_VALUE_MAX: i32 = 255;
