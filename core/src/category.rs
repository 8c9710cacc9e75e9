// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, Time};
use kalendar_ical::{
    RecurrenceFrequency, ValueDateOrDateTime, ValueDateTime, ValueRecurrenceRule, WeekDay,
    WeekDayNum,
};

/// The recurrence patterns an event can be edited with.
///
/// The string forms are persisted next to events and must stay stable.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum RecurrenceCategory {
    /// Every day.
    Daily,

    /// Every week.
    Weekly,

    /// Every month.
    Monthly,

    /// Every year.
    Yearly,

    /// Every weekday, Monday to Friday.
    Workdaily,

    /// Every second week.
    Biweekly,
}

impl RecurrenceCategory {
    /// The stable string constant of the category, e.g. `WORKDAILY`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Build the canonical recurrence rule of the category.
    ///
    /// With `until`, the rule ends after the last second of that day.
    #[must_use]
    pub fn to_rule(self, until: Option<Date>) -> ValueRecurrenceRule {
        const WORKDAYS: [WeekDay; 5] = [
            WeekDay::Monday,
            WeekDay::Tuesday,
            WeekDay::Wednesday,
            WeekDay::Thursday,
            WeekDay::Friday,
        ];

        let mut rule = match self {
            Self::Daily => ValueRecurrenceRule::new(RecurrenceFrequency::Daily),
            Self::Weekly => ValueRecurrenceRule::new(RecurrenceFrequency::Weekly),
            Self::Monthly => ValueRecurrenceRule::new(RecurrenceFrequency::Monthly),
            Self::Yearly => ValueRecurrenceRule::new(RecurrenceFrequency::Yearly),
            Self::Workdaily => {
                let mut rule = ValueRecurrenceRule::new(RecurrenceFrequency::Daily);
                rule.by_day = WORKDAYS.into_iter().map(WeekDayNum::from).collect();
                rule
            }
            Self::Biweekly => {
                let mut rule = ValueRecurrenceRule::new(RecurrenceFrequency::Weekly);
                rule.interval = Some(2);
                rule
            }
        };

        rule.until = until.map(|date| {
            let last_second = date.to_datetime(Time::constant(23, 59, 59, 0));
            ValueDateOrDateTime::DateTime(ValueDateTime::from(last_second))
        });
        rule
    }
}

impl TryFrom<RecurrenceFrequency> for RecurrenceCategory {
    type Error = RecurrenceFrequency;

    /// Sub-daily frequencies have no category and are handed back.
    fn try_from(freq: RecurrenceFrequency) -> Result<Self, Self::Error> {
        match freq {
            RecurrenceFrequency::Daily => Ok(Self::Daily),
            RecurrenceFrequency::Weekly => Ok(Self::Weekly),
            RecurrenceFrequency::Monthly => Ok(Self::Monthly),
            RecurrenceFrequency::Yearly => Ok(Self::Yearly),
            RecurrenceFrequency::Secondly
            | RecurrenceFrequency::Minutely
            | RecurrenceFrequency::Hourly => Err(freq),
        }
    }
}
