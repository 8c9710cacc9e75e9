// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use jiff::Zoned;
use jiff::civil::{Date, DateTime, date};
use jiff::tz::TimeZone;
use kalendar_core::{Config, Locale};

/// Builder for test configurations.
#[derive(Debug, Default)]
pub struct TestConfigBuilder {
    locale: Option<Locale>,
    timezone: Option<String>,
}

#[allow(dead_code)]
impl TestConfigBuilder {
    /// Creates a builder without locale and time zone.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the locale tag.
    pub fn locale(mut self, tag: &str) -> Self {
        self.locale = Some(tag.parse().expect("test locale must parse"));
        self
    }

    /// Sets the IANA time zone name.
    pub fn timezone(mut self, name: &str) -> Self {
        self.timezone = Some(name.to_owned());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Config {
        Config {
            locale: self.locale,
            timezone: self.timezone,
        }
    }
}

/// A configuration with both locale and time zone set.
#[allow(dead_code)]
pub fn test_config(locale: &str, timezone: &str) -> Config {
    TestConfigBuilder::new()
        .locale(locale)
        .timezone(timezone)
        .build()
}

/// A wall clock time in the named time zone.
#[allow(dead_code)]
pub fn zoned(tz: &str, dt: DateTime) -> Zoned {
    let tz = TimeZone::get(tz).expect("test time zone must exist");
    dt.to_zoned(tz).expect("test time must be in range")
}

/// Distinct calendar days across month, year and leap day boundaries, not
/// in chronological order.
#[allow(dead_code)]
pub fn sample_dates() -> Vec<Date> {
    vec![
        date(2024, 3, 12),
        date(2024, 3, 5),
        date(2024, 2, 29),
        date(2023, 12, 31),
        date(2025, 1, 1),
        date(1999, 7, 4),
        date(2, 1, 1),
    ]
}
