// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::limits::BYTE_VALUE_MAX;

/// An `int`-typed argument that has been checked to fit in one byte.
///
/// C callers pass fill values as `int`; only `0..=255` is meaningful.
///
/// ```rust
/// use safestr_core::ByteValue;
///
/// assert_eq!(ByteValue::new(b'x' as i32).map(ByteValue::get), Some(b'x'));
/// assert!(ByteValue::new(256).is_none());
/// assert!(ByteValue::new(-1).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteValue(u8);

impl ByteValue {
    /// Returns `None` when `value` is outside `0..=255`.
    #[inline]
    pub const fn new(value: i32) -> Option<Self> {
        if value < 0 || value > BYTE_VALUE_MAX {
            return None;
        }

        Some(Self(value as u8))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<u8> for ByteValue {
    fn from(byte: u8) -> Self {
        Self(byte)
    }
}
