// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::date;
use kalendar_core::{Error, RecurrenceCategory, classify, try_classify};
use strum::IntoEnumIterator;

#[test]
fn absent_or_empty_rule_has_no_category() {
    assert_eq!(classify(None), None);
    assert_eq!(classify(Some("")), None);
}

#[test]
fn any_weekday_list_is_workdaily() {
    let rules = [
        "FREQ=WEEKLY;BYDAY=MO",
        "FREQ=WEEKLY;BYDAY=SA,SU",
        "FREQ=DAILY;BYDAY=MO,TU,WE,TH,FR",
        "FREQ=MONTHLY;BYDAY=1MO,-1FR",
        "FREQ=YEARLY;BYMONTH=3;BYDAY=+2SU",
        "FREQ=WEEKLY;INTERVAL=2;BYDAY=TU,TH",
        "BYDAY=SU;FREQ=MONTHLY;COUNT=3",
    ];
    for rule in rules {
        assert_eq!(
            classify(Some(rule)),
            Some(RecurrenceCategory::Workdaily),
            "rule: {rule}"
        );
    }
}

#[test]
fn interval_two_is_biweekly() {
    assert_eq!(
        classify(Some("FREQ=WEEKLY;INTERVAL=2")),
        Some(RecurrenceCategory::Biweekly)
    );
    assert_eq!(
        classify(Some("INTERVAL=2;FREQ=DAILY")),
        Some(RecurrenceCategory::Biweekly)
    );
}

#[test]
fn plain_frequencies_map_to_their_category() {
    #[rustfmt::skip]
    let cases = [
        ("FREQ=DAILY",   RecurrenceCategory::Daily),
        ("FREQ=WEEKLY",  RecurrenceCategory::Weekly),
        ("FREQ=MONTHLY", RecurrenceCategory::Monthly),
        ("FREQ=YEARLY",  RecurrenceCategory::Yearly),
        ("FREQ=WEEKLY;INTERVAL=1",              RecurrenceCategory::Weekly),
        ("FREQ=MONTHLY;BYMONTHDAY=15;COUNT=12", RecurrenceCategory::Monthly),
        ("FREQ=DAILY;UNTIL=20241231T235959Z",   RecurrenceCategory::Daily),
    ];
    for (rule, expected) in cases {
        assert_eq!(classify(Some(rule)), Some(expected), "rule: {rule}");
    }
}

#[test]
fn classifies_rules_with_trailing_separator() {
    assert_eq!(
        classify(Some("FREQ=WEEKLY;INTERVAL=2;")),
        Some(RecurrenceCategory::Biweekly)
    );
    assert_eq!(
        classify(Some("FREQ=DAILY;BYDAY=MO,TU,WE,TH,FR;")),
        Some(RecurrenceCategory::Workdaily)
    );
    assert_eq!(classify(Some("FREQ=MONTHLY;")), Some(RecurrenceCategory::Monthly));
}

#[test]
fn malformed_rules_do_not_panic() {
    let rules = [
        "not-a-valid-rule",
        "FREQ=FORTNIGHTLY",
        "FREQ=WEEKLY;FREQ=DAILY",
        "FREQ=DAILY;COUNT=3;UNTIL=20240101",
        "FREQ=WEEKLY;INTERVAL=0",
        "freq=weekly",
        "FREQ=WEEKLY;;",
        "FREQ=SECONDLY",
    ];
    for rule in rules {
        assert_eq!(classify(Some(rule)), None, "rule: {rule}");
        assert!(
            matches!(try_classify(rule), Err(Error::MalformedRule { .. })),
            "rule: {rule}"
        );
    }
}

#[test]
fn canonical_rules_classify_to_their_category() {
    for category in RecurrenceCategory::iter() {
        for until in [None, Some(date(2030, 6, 30))] {
            let rule = category.to_rule(until).to_string();
            assert_eq!(try_classify(&rule).unwrap(), category, "rule: {rule}");
        }
    }
}
