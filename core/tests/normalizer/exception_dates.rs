// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{date, datetime};
use jiff::tz::TimeZone;
use kalendar_core::{format_exception_dates, format_recurrence_date, parse_exception_dates};

use crate::common::sample_dates;

#[test]
fn empty_lists_format_to_none() {
    assert_eq!(format_exception_dates(None), None);
    assert_eq!(format_exception_dates(Some(&[][..])), None);
}

#[test]
fn empty_text_parses_to_empty_list() {
    let tz = TimeZone::UTC;
    assert!(parse_exception_dates(None, &tz).is_empty());
    assert!(parse_exception_dates(Some(""), &tz).is_empty());
    assert!(parse_exception_dates(Some("20240305,,20240306"), &tz).is_empty());
    assert!(parse_exception_dates(Some("tomorrow"), &tz).is_empty());
}

#[test]
fn formatted_dates_parse_back_in_order() {
    let dates = sample_dates();
    let text = format_exception_dates(Some(&dates[..])).unwrap();
    let parsed = parse_exception_dates(Some(text.as_str()), &TimeZone::UTC);

    let days: Vec<_> = parsed.iter().map(|dt| dt.date()).collect();
    assert_eq!(days, dates);
}

#[test]
fn parsed_dates_format_back_to_same_text() {
    let text = "20240312,20240305,20240229";
    let parsed = parse_exception_dates(Some(text), &TimeZone::UTC);
    let days: Vec<_> = parsed.iter().map(|dt| dt.date()).collect();
    assert_eq!(format_exception_dates(Some(&days[..])).unwrap(), text);
}

#[test]
fn time_of_day_is_kept_but_not_formatted() {
    let tz = TimeZone::get("Asia/Tokyo").unwrap();
    let parsed = parse_exception_dates(Some("20240305T090000,20240312T090000"), &tz);
    assert_eq!(
        parsed,
        [
            datetime(2024, 3, 5, 9, 0, 0, 0),
            datetime(2024, 3, 12, 9, 0, 0, 0)
        ]
    );

    let days: Vec<_> = parsed.iter().map(|dt| dt.date()).collect();
    assert_eq!(
        format_exception_dates(Some(&days[..])).unwrap(),
        "20240305,20240312"
    );
}

#[test]
fn formats_single_dates() {
    let day = date(2024, 3, 5);
    assert_eq!(
        format_recurrence_date(Some(day.at(0, 0, 0, 0)), true).unwrap(),
        "20240305"
    );
    assert_eq!(
        format_recurrence_date(Some(day.at(14, 30, 0, 0)), false).unwrap(),
        "20240305T143000"
    );
    assert_eq!(format_recurrence_date(None, false), None);
}
