// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use safestr_core::set_null_slack;
use safestr_str::{strcat_s, strcpy_s};

fn benchmark_strcpy_s(c: &mut Criterion) {
    let mut group = c.benchmark_group("strcpy_s");

    for slack in [false, true] {
        set_null_slack(slack);

        for len in [15usize, 255, 4095].iter() {
            group.throughput(Throughput::Bytes(*len as u64));
            group.bench_with_input(format!("{} bytes, null slack {}", len, slack), len, |b, &len| {
                let mut src = vec![b's'; len + 1];
                src[len] = 0;
                let mut dest = vec![0u8; len + 1];

                b.iter(|| {
                    strcpy_s(black_box(Some(&mut dest[..])), black_box(len + 1), black_box(Some(&src[..])))
                        .expect("strcpy_s failed");
                });
            });
        }
    }

    set_null_slack(false);
    group.finish();
}

fn benchmark_strcat_s(c: &mut Criterion) {
    let mut group = c.benchmark_group("strcat_s");

    for len in [16usize, 256, 2048].iter() {
        group.throughput(Throughput::Bytes(*len as u64));
        group.bench_with_input(format!("{} bytes", len), len, |b, &len| {
            let mut src = vec![b's'; len];
            src[len - 1] = 0;
            let mut dest = vec![0u8; 2 * len];

            b.iter(|| {
                dest[0] = 0;
                strcat_s(black_box(Some(&mut dest[..])), black_box(2 * len), black_box(Some(&src[..])))
                    .expect("strcat_s failed");
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_strcpy_s, benchmark_strcat_s);
criterion_main!(benches);
