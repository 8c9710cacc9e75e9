// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Weekday, date};
use kalendar_core::{Locale, MIN_DAYS_IN_FIRST_WEEK, WeekOfYear, WeekRules};

fn rules(tag: &str) -> WeekRules {
    tag.parse::<Locale>().unwrap().week_rules()
}

#[test]
fn first_week_always_needs_four_days() {
    for tag in ["en-US", "en-GB", "de-CH", "ar-EG", "ja-JP", "fr", "pt-BR"] {
        assert_eq!(rules(tag).min_days_in_first_week(), MIN_DAYS_IN_FIRST_WEEK);
        assert_eq!(MIN_DAYS_IN_FIRST_WEEK, 4);
    }
}

#[test]
fn first_week_holds_at_least_four_january_days() {
    for tag in ["en-US", "de-DE", "ar-AE"] {
        let rules = rules(tag);
        for year in 2000..2040 {
            let jan1 = date(year, 1, 1);
            let start = rules.start_of_week(jan1).unwrap();
            let january_days = 7 - jan1.since(start).unwrap().get_days();
            let week = rules.week_of_year(jan1).unwrap();
            if january_days >= 4 {
                assert_eq!(week, WeekOfYear { year, week: 1 }, "{tag} {year}");
            } else {
                assert_eq!(week.year, year - 1, "{tag} {year}");
                assert!(week.week >= 52, "{tag} {year}");
            }
        }
    }
}

#[test]
fn week_numbers_advance_on_first_weekday() {
    for (tag, first) in [("en-US", Weekday::Sunday), ("de-DE", Weekday::Monday)] {
        let rules = rules(tag);
        let mut day = date(2024, 1, 1);
        let mut prev = rules.week_of_year(day).unwrap();
        while day < date(2025, 1, 31) {
            day = day.tomorrow().unwrap();
            let week = rules.week_of_year(day).unwrap();
            if day.weekday() == first {
                assert_ne!(week, prev, "{tag} {day}");
            } else {
                assert_eq!(week, prev, "{tag} {day}");
            }
            prev = week;
        }
    }
}
