// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use serial_test::serial;

use safestr_core::ErrorKind;
use safestr_str::{strtolowercase_s, strtouppercase_s};
use safestr_test_utils::{NullSlack, cbuf, live_str, with_recorder};

const LEN: usize = 128;

#[test]
#[serial]
fn test_strtouppercase_s_checks() {
    let (result, _) = with_recorder(|| strtouppercase_s(None, 5));
    assert_eq!(result, Err(ErrorKind::NullPointer));

    let mut buf = cbuf(b"test", LEN);
    let (result, _) = with_recorder(|| strtouppercase_s(Some(&mut buf[..]), 0));
    assert_eq!(result, Err(ErrorKind::ZeroLength));

    let (result, recorded) = with_recorder(|| strtouppercase_s(Some(&mut buf[..]), 99999));
    assert_eq!(result, Err(ErrorKind::ExceedsMax));
    assert_eq!(recorded[0].to_string(), "strtouppercase_s: dmax exceeds max");

    assert_eq!(buf, cbuf(b"test", LEN));
}

#[test]
#[serial]
fn test_strtouppercase_s_empty_string() {
    let mut buf = cbuf(b"", 1);
    assert_eq!(strtouppercase_s(Some(&mut buf[..]), 1), Ok(()));

    let mut buf = cbuf(b"", LEN);
    assert_eq!(strtouppercase_s(Some(&mut buf[..]), 5), Ok(()));
    assert_eq!(live_str(&buf), b"");
}

#[test]
#[serial]
fn test_strtouppercase_s_converts() {
    let _slack = NullSlack::set(false);

    for (input, expected) in [
        (&b"n"[..], &b"N"[..]),
        (b"N", b"N"),
        (b"nowisthetime", b"NOWISTHETIME"),
        (b"qqeRo", b"QQERO"),
    ] {
        let mut buf = cbuf(input, LEN);
        assert_eq!(strtouppercase_s(Some(&mut buf[..]), input.len()), Ok(()));
        assert_eq!(live_str(&buf), expected);
    }
}

#[test]
#[serial]
fn test_strtouppercase_s_stops_at_terminator() {
    let _slack = NullSlack::set(false);
    let mut buf = cbuf(b"1234", LEN);

    assert_eq!(strtouppercase_s(Some(&mut buf[..]), 22), Ok(()));
    assert_eq!(live_str(&buf), b"1234");
}

#[test]
#[serial]
fn test_strtolowercase_s_converts() {
    let _slack = NullSlack::set(true);
    let mut buf = cbuf(b"NowIsTheTime", 16);

    assert_eq!(strtolowercase_s(Some(&mut buf[..]), 16), Ok(()));
    assert_eq!(live_str(&buf), b"nowisthetime");
    assert!(buf[12..].iter().all(|&b| b == 0));
}
