// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::{Arc, Barrier};
use std::thread;

use jiff::civil::{DateTime, date};
use kalendar_core::{SharedDateTokenFormatter, TokenStyle, format_recurrence_date};

const THREADS: usize = 8;
const ROUNDS: usize = 500;

/// A distinct date per thread, so foreign digits are easy to spot.
fn date_of(thread: usize) -> DateTime {
    let n = i8::try_from(thread).unwrap();
    date(2000 + i16::from(n), n + 1, n + 10).at(n, n + 2, n + 4, 0)
}

#[test]
fn shared_formatter_does_not_mix_callers() {
    for style in [TokenStyle::DateOnly, TokenStyle::DateTime] {
        let formatter = Arc::new(SharedDateTokenFormatter::new(style));
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let formatter = Arc::clone(&formatter);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    let dt = date_of(i);
                    barrier.wait();
                    (0..ROUNDS)
                        .map(|_| formatter.format(dt).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let expected =
                format_recurrence_date(Some(date_of(i)), style == TokenStyle::DateOnly).unwrap();
            let tokens = handle.join().unwrap();
            assert_eq!(tokens.len(), ROUNDS);
            assert!(
                tokens.iter().all(|t| *t == expected),
                "thread {i} saw a token other than {expected}"
            );
        }
    }
}

#[test]
fn per_call_formatting_is_thread_safe() {
    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            thread::spawn(move || {
                let dt = date_of(i);
                (0..ROUNDS)
                    .map(|_| format_recurrence_date(Some(dt), false).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let dt = date_of(i);
        let expected = format!(
            "{:04}{:02}{:02}T{:02}{:02}{:02}",
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second()
        );
        assert!(handle.join().unwrap().iter().all(|t| *t == expected));
    }
}
