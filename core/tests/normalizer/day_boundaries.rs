// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Time, datetime};
use kalendar_core::{Error, Kalendar, end_of_day, remove_time};

use crate::common::{test_config, zoned};

#[test]
fn end_of_day_is_last_whole_second() {
    let inputs = [
        zoned("UTC", datetime(2024, 3, 5, 0, 0, 0, 0)),
        zoned("Europe/Zurich", datetime(2024, 2, 29, 12, 34, 56, 789_000_000)),
        zoned("Pacific/Auckland", datetime(2023, 12, 31, 23, 59, 59, 999_999_999)),
        zoned("America/New_York", datetime(2024, 11, 3, 1, 30, 0, 0)),
    ];
    for dt in inputs {
        let end = end_of_day(&dt).unwrap();
        assert_eq!(end.date(), dt.date(), "input: {dt}");
        assert_eq!(end.time(), Time::constant(23, 59, 59, 0), "input: {dt}");
        assert_eq!(end.millisecond(), 0, "input: {dt}");
    }
}

#[test]
fn remove_time_keeps_only_the_day() {
    let inputs = [
        zoned("UTC", datetime(2024, 3, 5, 23, 59, 59, 999_000_000)),
        zoned("Europe/Zurich", datetime(2024, 10, 27, 2, 30, 0, 0)),
        zoned("Asia/Kolkata", datetime(2000, 1, 1, 5, 30, 0, 0)),
    ];
    for dt in inputs {
        let day = remove_time(&dt).unwrap();
        assert_eq!(day.date(), dt.date(), "input: {dt}");
        assert_eq!(day.time(), Time::midnight(), "input: {dt}");
        assert_eq!(day.time_zone().iana_name(), dt.time_zone().iana_name());
    }
}

#[test]
fn makes_dates_with_one_based_months() {
    let kalendar = Kalendar::new(&test_config("de-CH", "Europe/Zurich")).unwrap();

    let january = kalendar.make_date(2024, 1, 15).unwrap();
    assert_eq!(january.datetime(), datetime(2024, 1, 15, 0, 0, 0, 0));

    let december = kalendar.make_date(2024, 12, 31).unwrap();
    assert_eq!(december.datetime(), datetime(2024, 12, 31, 0, 0, 0, 0));

    assert!(matches!(
        kalendar.make_date(2024, 2, 30),
        Err(Error::InvalidDate(_))
    ));
}

#[test]
fn start_of_day_calendar_is_midnight_today() {
    let kalendar = Kalendar::new(&test_config("en-US", "America/Chicago")).unwrap();
    let calendar = kalendar
        .start_of_day_calendar(kalendar.locale())
        .unwrap();

    assert_eq!(calendar.start().date(), kalendar.now().date());
    assert_eq!(calendar.start().time(), Time::midnight());
    assert_eq!(calendar.start().time_zone().iana_name(), Some("America/Chicago"));
    assert_eq!(calendar.locale(), kalendar.locale());
}
