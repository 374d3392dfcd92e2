// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::{Overlap, Span, classify};

#[test]
fn test_adjacent_ranges_are_disjoint() {
    assert_eq!(classify(Span::new(0, 8), Span::new(8, 8)), Overlap::Disjoint);
    assert_eq!(classify(Span::new(8, 8), Span::new(0, 8)), Overlap::Disjoint);
}

#[test]
fn test_empty_ranges_never_overlap() {
    assert_eq!(classify(Span::new(4, 0), Span::new(0, 8)), Overlap::Disjoint);
    assert_eq!(classify(Span::new(0, 8), Span::new(4, 0)), Overlap::Disjoint);
}

#[test]
fn test_direction() {
    assert_eq!(classify(Span::new(0, 8), Span::new(7, 8)), Overlap::DestBeforeSrc);
    assert_eq!(classify(Span::new(7, 8), Span::new(0, 8)), Overlap::DestAfterSrc);
    assert_eq!(classify(Span::new(3, 2), Span::new(3, 9)), Overlap::Same);
}

#[test]
fn test_containment() {
    assert_eq!(classify(Span::new(2, 2), Span::new(0, 8)), Overlap::DestAfterSrc);
    assert_eq!(classify(Span::new(0, 8), Span::new(2, 2)), Overlap::DestBeforeSrc);
}

#[test]
fn test_end_saturates() {
    let span = Span::new(usize::MAX - 1, 8);
    assert_eq!(span.end(), usize::MAX);
    assert_eq!(classify(span, Span::new(0, 8)), Overlap::Disjoint);
}

#[test]
fn test_span_of_slices_in_one_buffer() {
    let buf = [0u8; 16];
    assert!(classify(Span::of(&buf[..8]), Span::of(&buf[8..])).is_disjoint());
    assert!(!classify(Span::of(&buf[..9]), Span::of(&buf[8..])).is_disjoint());
}

proptest! {
    #[test]
    fn overlap_is_symmetric(
        a in 0..64usize, alen in 0..32usize,
        b in 0..64usize, blen in 0..32usize
    ) {
        let x = Span::new(a, alen);
        let y = Span::new(b, blen);
        prop_assert_eq!(classify(x, y).is_disjoint(), classify(y, x).is_disjoint());
    }

    #[test]
    fn overlap_matches_shared_address(
        a in 0..64usize, alen in 0..32usize,
        b in 0..64usize, blen in 0..32usize
    ) {
        let shared = (a..a + alen).any(|addr| (b..b + blen).contains(&addr));
        prop_assert_eq!(!classify(Span::new(a, alen), Span::new(b, blen)).is_disjoint(), shared);
    }
}
