// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Overlap detection over half-open address ranges.

/// The half-open address range `[start, start + len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    len: usize,
}

impl Span {
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// The range covered by `bytes`.
    pub fn of(bytes: &[u8]) -> Self {
        Self::new(bytes.as_ptr() as usize, bytes.len())
    }

    /// The range of `len` bytes starting at `ptr`. The pointer is never
    /// dereferenced.
    pub fn of_raw(ptr: *const u8, len: usize) -> Self {
        Self::new(ptr as usize, len)
    }

    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One past the last address, saturating at `usize::MAX`.
    pub const fn end(&self) -> usize {
        self.start.saturating_add(self.len)
    }
}

/// How a destination range relates to a source range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlap {
    /// No shared byte; any copy order is fine.
    Disjoint,
    /// Shared bytes, destination starts first: copy front to back.
    DestBeforeSrc,
    /// Shared bytes, destination starts later: copy back to front.
    DestAfterSrc,
    /// Both ranges start at the same address.
    Same,
}

impl Overlap {
    pub const fn is_disjoint(self) -> bool {
        matches!(self, Overlap::Disjoint)
    }
}

/// Classifies `dest` against `src`. Empty ranges never overlap anything.
///
/// ```rust
/// use safestr_core::{Overlap, Span, classify};
///
/// assert_eq!(classify(Span::new(0, 4), Span::new(4, 4)), Overlap::Disjoint);
/// assert_eq!(classify(Span::new(2, 4), Span::new(0, 4)), Overlap::DestAfterSrc);
/// assert_eq!(classify(Span::new(0, 4), Span::new(2, 4)), Overlap::DestBeforeSrc);
/// ```
pub fn classify(dest: Span, src: Span) -> Overlap {
    if dest.is_empty() || src.is_empty() {
        return Overlap::Disjoint;
    }

    if dest.end() <= src.start() || src.end() <= dest.start() {
        return Overlap::Disjoint;
    }

    match dest.start().cmp(&src.start()) {
        core::cmp::Ordering::Less => Overlap::DestBeforeSrc,
        core::cmp::Ordering::Greater => Overlap::DestAfterSrc,
        core::cmp::Ordering::Equal => Overlap::Same,
    }
}
