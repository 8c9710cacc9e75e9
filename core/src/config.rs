// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::tz::TimeZone;

use crate::{Error, Locale};

/// The name of the kalendar application.
pub const APP_NAME: &str = "kalendar";

/// Configuration of the recurrence core, the `[core]` table of the config
/// file.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Locale deciding the week rules and short display formats, e.g. `de-CH`.
    #[serde(default)]
    pub locale: Option<Locale>,

    /// IANA name of the time zone dates are placed in, e.g. `Europe/Zurich`.
    #[serde(default)]
    pub timezone: Option<String>,
}

impl Config {
    /// The configured time zone, or the system time zone.
    ///
    /// ## Errors
    ///
    /// If the configured zone is unknown.
    pub fn time_zone(&self) -> Result<TimeZone, Error> {
        match &self.timezone {
            Some(name) => TimeZone::get(name)
                .map_err(|e| Error::Config(format!("unknown time zone '{name}': {e}"))),
            None => Ok(TimeZone::system()),
        }
    }

    /// The configured locale, else the locale of the environment, else `en`.
    #[must_use]
    pub fn locale(&self) -> Locale {
        if let Some(locale) = &self.locale {
            return locale.clone();
        }

        Locale::from_env().unwrap_or_else(|| {
            tracing::warn!("no locale configured or found in environment, using fallback");
            Locale::fallback()
        })
    }
}
