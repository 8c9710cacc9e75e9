// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Locales and the week numbering they imply.

use std::fmt;
use std::str::FromStr;

use jiff::Zoned;
use jiff::civil::{Date, Weekday};

use crate::Error;
use crate::datetime::start_of_day;

/// Regions whose week starts on Sunday.
const SUNDAY_FIRST: &[&str] = &[
    "AG", "AS", "AU", "BD", "BR", "BS", "BT", "BW", "BZ", "CA", "CN", "CO", "DM", "DO", "ET", "GT",
    "GU", "HK", "HN", "ID", "IL", "IN", "JM", "JP", "KE", "KH", "KR", "LA", "MH", "MM", "MO", "MT",
    "MX", "MZ", "NI", "NP", "PA", "PE", "PH", "PK", "PR", "PT", "PY", "SA", "SG", "SV", "TH", "TT",
    "TW", "UM", "US", "VE", "VI", "WS", "YE", "ZA", "ZW",
];

/// Regions whose week starts on Saturday.
const SATURDAY_FIRST: &[&str] = &[
    "AE", "AF", "BH", "DJ", "DZ", "EG", "IQ", "IR", "JO", "KW", "LY", "OM", "QA", "SD", "SY",
];

/// Regions whose week starts on Friday.
const FRIDAY_FIRST: &[&str] = &["MV"];

/// Days of January the first week of a year must contain.
pub const MIN_DAYS_IN_FIRST_WEEK: i8 = 4;

/// A language tag such as `de-CH`, also accepting POSIX forms like
/// `en_US.UTF-8`.
///
/// Only the language and the region are kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// The locale used when nothing else is configured.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            language: "en".to_owned(),
            region: None,
        }
    }

    /// Read the locale from `LC_ALL`, `LC_TIME` or `LANG`, in that order.
    ///
    /// Unset, empty and unparsable variables are skipped.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        ["LC_ALL", "LC_TIME", "LANG"].into_iter().find_map(|var| {
            let value = std::env::var(var).ok().filter(|v| !v.is_empty())?;
            match value.parse() {
                Ok(locale) => Some(locale),
                Err(e) => {
                    tracing::warn!(var, "ignoring locale from environment: {e}");
                    None
                }
            }
        })
    }

    /// Lower-case language subtag, e.g. `de`.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Upper-case region subtag, e.g. `CH`.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The week rules of this locale.
    #[must_use]
    pub fn week_rules(&self) -> WeekRules {
        WeekRules::for_locale(self)
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidLocale(s.to_owned());

        // POSIX locales carry an optional codeset and modifier: en_US.UTF-8@euro
        let tag = s.split(['.', '@']).next().unwrap_or_default();
        if tag == "C" || tag == "POSIX" {
            return Ok(Self::fallback());
        }

        let mut subtags = tag.split(['-', '_']);
        let language = subtags
            .next()
            .filter(|l| (2..=3).contains(&l.len()) && l.chars().all(|c| c.is_ascii_alphabetic()))
            .ok_or_else(invalid)?
            .to_ascii_lowercase();

        let mut region = None;
        for subtag in subtags {
            let is_region = (subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()))
                || (subtag.len() == 3 && subtag.chars().all(|c| c.is_ascii_digit()));
            let is_script = subtag.len() == 4 && subtag.chars().all(|c| c.is_ascii_alphabetic());

            if is_region && region.is_none() {
                region = Some(subtag.to_ascii_uppercase());
            } else if is_script && region.is_none() {
                continue;
            } else if subtag.is_empty() {
                return Err(invalid());
            } else {
                // variants and extensions don't affect week rules
                break;
            }
        }

        Ok(Self { language, region })
    }
}

impl TryFrom<String> for Locale {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{region}", self.language),
            None => write!(f, "{}", self.language),
        }
    }
}

/// How weeks are laid over the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRules {
    first_weekday: Weekday,
    min_days_in_first_week: i8,
}

impl WeekRules {
    /// Weeks as defined by ISO 8601: Monday first, the first week holds
    /// January 4th.
    pub const ISO: Self = Self {
        first_weekday: Weekday::Monday,
        min_days_in_first_week: MIN_DAYS_IN_FIRST_WEEK,
    };

    /// Week rules of a locale.
    ///
    /// The first day of the week follows the region. The first week of a
    /// year always needs [`MIN_DAYS_IN_FIRST_WEEK`] days of January, whatever
    /// the locale would use otherwise.
    #[must_use]
    pub fn for_locale(locale: &Locale) -> Self {
        let first_weekday = match locale.region() {
            Some(r) if SUNDAY_FIRST.contains(&r) => Weekday::Sunday,
            Some(r) if SATURDAY_FIRST.contains(&r) => Weekday::Saturday,
            Some(r) if FRIDAY_FIRST.contains(&r) => Weekday::Friday,
            _ => Weekday::Monday,
        };

        Self {
            first_weekday,
            min_days_in_first_week: MIN_DAYS_IN_FIRST_WEEK,
        }
    }

    /// The day weeks start on.
    #[must_use]
    pub const fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    /// Days of January the first week of a year must contain.
    #[must_use]
    pub const fn min_days_in_first_week(&self) -> i8 {
        self.min_days_in_first_week
    }

    /// The first day of the week containing `date`.
    ///
    /// ## Errors
    ///
    /// If that day is before the supported range.
    pub fn start_of_week(&self, date: Date) -> Result<Date, Error> {
        let offset = date.weekday().since(self.first_weekday);
        Ok(date.checked_sub(jiff::Span::new().days(offset))?)
    }

    /// The week-based year and week number of `date`.
    ///
    /// Days at the start of January may belong to the last week of the
    /// previous year, days at the end of December to week 1 of the next.
    ///
    /// ## Errors
    ///
    /// If a neighbouring year is out of the supported range.
    pub fn week_of_year(&self, date: Date) -> Result<WeekOfYear, Error> {
        let year = date.year();
        let day = date.day_of_year();
        let first = self.first_week_start(year)?;

        if day < first {
            let prev = year - 1;
            let prev_len = Date::new(prev, 1, 1)?.days_in_year();
            let week = (day + prev_len - self.first_week_start(prev)?) / 7 + 1;
            return Ok(WeekOfYear { year: prev, week });
        }

        // The first week of next year, counted in days of this year
        if year < 9999 {
            let next_first = date.days_in_year() + self.first_week_start(year + 1)?;
            if day >= next_first {
                return Ok(WeekOfYear {
                    year: year + 1,
                    week: 1,
                });
            }
        }

        let week = (day - first) / 7 + 1;
        Ok(WeekOfYear { year, week })
    }

    /// Day of year the first week of `year` starts on, zero or negative if it
    /// starts in December.
    fn first_week_start(&self, year: i16) -> Result<i16, Error> {
        let anchor = Date::new(year, 1, self.min_days_in_first_week)?;
        let offset = anchor.weekday().since(self.first_weekday);
        Ok(i16::from(self.min_days_in_first_week - offset))
    }
}

impl Default for WeekRules {
    fn default() -> Self {
        Self::ISO
    }
}

/// A week-based year and week number, e.g. `2025-W01`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub struct WeekOfYear {
    /// The year the week belongs to, which may differ from the calendar year.
    pub year: i16,

    /// Week number, 1-53.
    pub week: i16,
}

impl fmt::Display for WeekOfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}", self.year, self.week)
    }
}

/// The start of a day, together with the week rules of a locale.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalCalendar {
    start: Zoned,
    locale: Locale,
    rules: WeekRules,
}

impl LocalCalendar {
    /// Midnight of the day of `now`, in its time zone.
    ///
    /// ## Errors
    ///
    /// If midnight is out of the supported range.
    pub fn start_of_day(now: &Zoned, locale: &Locale) -> Result<Self, Error> {
        Ok(Self {
            start: start_of_day(now)?,
            locale: locale.clone(),
            rules: locale.week_rules(),
        })
    }

    /// Midnight of the day.
    #[must_use]
    pub fn start(&self) -> &Zoned {
        &self.start
    }

    /// The locale of the calendar.
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The week rules of the calendar.
    #[must_use]
    pub const fn week_rules(&self) -> WeekRules {
        self.rules
    }

    /// The week of the day.
    ///
    /// ## Errors
    ///
    /// See [`WeekRules::week_of_year`].
    pub fn week_of_year(&self) -> Result<WeekOfYear, Error> {
        self.rules.week_of_year(self.start.date())
    }
}
