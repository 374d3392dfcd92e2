// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use safestr::mem::{memcpy_s, memset_s};
use safestr::str::{strcat_s, strcpy_s, strnset_s, strtouppercase_s};
use safestr::{ErrorKind, errno_of, set_null_slack};
use safestr_test_utils::{STALE, cbuf, live_str, with_recorder};
use serial_test::serial;

#[test]
#[serial]
fn test_string_pipeline() {
    let mut buf = cbuf(b"", 32);

    let (result, recorded) = with_recorder(|| {
        strcpy_s(Some(&mut buf[..]), 32, Some(&b"card "[..]))?;
        strcat_s(Some(&mut buf[..]), 32, Some(&b"4111222233334444\0"[..]))?;
        strtouppercase_s(Some(&mut buf[..]), 32)?;
        strnset_s(Some(&mut buf[..]), 32, i32::from(b'#'), 4)
    });

    assert_eq!(result, Ok(()));
    assert!(recorded.is_empty());
    assert_eq!(live_str(&buf), b"#### 4111222233334444");
}

#[test]
#[serial]
fn test_failures_map_to_domains_and_errnos() {
    let mut buf = [0u8; 8];

    let (codes, recorded) = with_recorder(|| {
        [
            errno_of(strnset_s(None, 8, 0, 1)),
            errno_of(memset_s(Some(&mut buf[..]), 8, -1, 1)),
            errno_of(memcpy_s(Some(&mut buf[..]), 4, Some(&[0u8; 8][..]), 8)),
        ]
    });

    assert_eq!(
        codes,
        [
            ErrorKind::NullPointer.errno(),
            ErrorKind::ExceedsMax.errno(),
            ErrorKind::InsufficientSpace.errno(),
        ]
    );
    let operations: Vec<_> = recorded.iter().map(|v| v.operation()).collect();
    assert_eq!(operations, ["strnset_s", "memset_s", "memcpy_s"]);
}

#[test]
#[serial]
fn test_null_slack_toggle_through_facade() {
    let mut buf = cbuf(b"abcdef", 16);
    assert_eq!(buf[10], STALE);

    let previous = set_null_slack(true);
    let result = with_recorder(|| strcpy_s(Some(&mut buf[..]), 16, Some(&b"xy\0"[..]))).0;
    set_null_slack(previous);

    assert_eq!(result, Ok(()));
    assert_eq!(live_str(&buf), b"xy");
    assert!(buf[2..].iter().all(|&b| b == 0));
}
