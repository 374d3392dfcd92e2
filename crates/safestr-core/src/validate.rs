// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Precondition validators.
//!
//! Operations run their checks in a fixed order and stop at the first
//! failure:
//!
//! 1. null checks on every buffer argument ([`ErrorKind::NullPointer`])
//! 2. zero capacity ([`ErrorKind::ZeroLength`])
//! 3. capacity ceiling, real buffer extent, bounded values ([`ErrorKind::ExceedsMax`])
//! 4. count against capacity ([`ErrorKind::InsufficientSpace`])
//! 5. overlap, for operations that forbid it ([`ErrorKind::Overlap`])
//!
//! Each failing check reports exactly one violation and hands back its kind,
//! so `?` propagates it straight to the operation's caller.

use crate::error::ErrorKind;
use crate::handler::report;
use crate::overlap::{Span, classify};
use crate::value::ByteValue;
use crate::violation::{ConstraintViolation, Domain};

/// Validators bound to one operation name and one handler domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preconditions {
    operation: &'static str,
    domain: Domain,
}

impl Preconditions {
    pub const fn new(operation: &'static str, domain: Domain) -> Self {
        Self { operation, domain }
    }

    pub const fn for_str(operation: &'static str) -> Self {
        Self::new(operation, Domain::Str)
    }

    pub const fn for_mem(operation: &'static str) -> Self {
        Self::new(operation, Domain::Mem)
    }

    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    pub const fn domain(&self) -> Domain {
        self.domain
    }

    /// Reports a violation and returns its kind.
    #[cold]
    pub fn reject(&self, detail: &'static str, kind: ErrorKind) -> ErrorKind {
        report(
            self.domain,
            &ConstraintViolation::new(self.operation, detail, kind),
        );
        kind
    }

    #[inline]
    pub fn require_non_null<T>(&self, arg: Option<T>, detail: &'static str) -> Result<T, ErrorKind> {
        arg.ok_or_else(|| self.reject(detail, ErrorKind::NullPointer))
    }

    #[inline]
    pub fn require_non_zero(&self, capacity: usize, detail: &'static str) -> Result<(), ErrorKind> {
        if capacity == 0 {
            return Err(self.reject(detail, ErrorKind::ZeroLength));
        }

        Ok(())
    }

    #[inline]
    pub fn require_at_most(
        &self,
        value: usize,
        max: usize,
        detail: &'static str,
    ) -> Result<(), ErrorKind> {
        if value > max {
            return Err(self.reject(detail, ErrorKind::ExceedsMax));
        }

        Ok(())
    }

    /// Checks an `int` argument that must fit in a byte.
    #[inline]
    pub fn require_byte_value(&self, value: i32, detail: &'static str) -> Result<ByteValue, ErrorKind> {
        ByteValue::new(value).ok_or_else(|| self.reject(detail, ErrorKind::ExceedsMax))
    }

    #[inline]
    pub fn require_fits(
        &self,
        count: usize,
        capacity: usize,
        detail: &'static str,
    ) -> Result<(), ErrorKind> {
        if count > capacity {
            return Err(self.reject(detail, ErrorKind::InsufficientSpace));
        }

        Ok(())
    }

    #[inline]
    pub fn require_disjoint(&self, dest: Span, src: Span, detail: &'static str) -> Result<(), ErrorKind> {
        if !classify(dest, src).is_disjoint() {
            return Err(self.reject(detail, ErrorKind::Overlap));
        }

        Ok(())
    }

    /// Zero-capacity and ceiling checks for a declared capacity, plus the
    /// check that the slice really extends that far.
    ///
    /// Returns `buf` narrowed to exactly `dmax` bytes.
    pub fn bounded<'a>(
        &self,
        buf: &'a mut [u8],
        dmax: usize,
        ceiling: usize,
    ) -> Result<&'a mut [u8], ErrorKind> {
        self.require_non_zero(dmax, "dmax is 0")?;
        self.require_at_most(dmax, ceiling, "dmax exceeds max")?;
        self.require_at_most(dmax, buf.len(), "dest overflow")?;

        Ok(&mut buf[..dmax])
    }

    /// [`bounded`](Self::bounded) preceded by the null check, for operations
    /// whose only buffer argument is the destination.
    pub fn bounded_dest<'a>(
        &self,
        dest: Option<&'a mut [u8]>,
        dmax: usize,
        ceiling: usize,
    ) -> Result<&'a mut [u8], ErrorKind> {
        let dest = self.require_non_null(dest, "dest is null")?;
        self.bounded(dest, dmax, ceiling)
    }
}
