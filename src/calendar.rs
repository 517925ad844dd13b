// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar dates and their Julian Day numbers.
//!
//! Dates before 1582 October 15 are read in the proleptic Julian calendar
//! and later ones in the Gregorian calendar. The ten days
//! 1582 October 5 – 14 never existed and are rejected.
//!
//! ```
//! use almanac::CalendarDate;
//!
//! // Sputnik 1 launch, Meeus example 7.a
//! let jd = CalendarDate::new(1957, 10, 4.81).unwrap().to_julian_day();
//! assert!((jd.value() - 2_436_116.31).abs() < 1e-6);
//! ```

use chrono::{Datelike, Month, NaiveDate, NaiveDateTime, Timelike};
use log::debug;

use crate::error::{AlmanacError, AlmanacResult};
use crate::instant::Time;
use crate::scales::JD;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Standard month lengths, February without the leap day.
const MONTH_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// First Julian Day number counted in the Gregorian calendar (1582-10-15).
const GREGORIAN_START: f64 = 2_299_161.0;

/// Which calendar a date is expressed in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Calendar {
    Julian,
    Gregorian,
}

/// A calendar date with a fractional day.
///
/// `day` runs from `1.0` up to (not including) one past the month length;
/// its fractional part is the time of day.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarDate {
    pub year: i32,
    pub month: u8,
    pub day: f64,
}

// ═══════════════════════════════════════════════════════════════════════════
// CalendarDate
// ═══════════════════════════════════════════════════════════════════════════

impl CalendarDate {
    /// Validated constructor.
    pub fn new(year: i32, month: u8, day: f64) -> AlmanacResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(AlmanacError::invalid_date(
                year,
                month,
                day,
                "month must lie in 1..=12",
            ));
        }
        let length = f64::from(month_length(year, month));
        if !(1.0..length + 1.0).contains(&day) {
            return Err(AlmanacError::invalid_date(
                year,
                month,
                day,
                "day is outside the month",
            ));
        }
        if year == 1582 && month == 10 && (5.0..15.0).contains(&day) {
            debug!("rejecting {year}-{month:02}-{day}: inside the Gregorian reform gap");
            return Err(AlmanacError::invalid_date(
                year,
                month,
                day,
                "date falls in the Gregorian reform gap",
            ));
        }
        Ok(Self { year, month, day })
    }

    /// Calendar in force on this date.
    pub fn calendar(&self) -> Calendar {
        if (self.year, self.month, self.day) < (1582, 10, 15.0) {
            Calendar::Julian
        } else {
            Calendar::Gregorian
        }
    }

    /// Julian Day number of this date (Meeus ch. 7).
    pub fn to_julian_day(&self) -> Time<JD> {
        let (y, m) = if self.month <= 2 {
            (self.year - 1, i32::from(self.month) + 12)
        } else {
            (self.year, i32::from(self.month))
        };
        let b = match self.calendar() {
            Calendar::Julian => 0.0,
            Calendar::Gregorian => {
                let a = f64::from(y / 100);
                2.0 - a + (a / 4.0).floor()
            }
        };
        Time::<JD>::new(
            (365.25 * f64::from(y + 4716)).floor() + (30.6001 * f64::from(m + 1)).floor()
                + self.day
                + b
                - 1524.5,
        )
    }

    /// Calendar date of a Julian Day; negative Julian Days are not supported.
    pub fn from_julian_day(jd: Time<JD>) -> AlmanacResult<Self> {
        if jd.value() < 0.0 || !jd.value().is_finite() {
            return Err(AlmanacError::UnsupportedDomain(jd.value()));
        }
        let j = jd.value() + 0.5;
        let z = j.floor();
        let f = j - z;
        let a = if z >= GREGORIAN_START {
            let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
            z + 1.0 + alpha - (alpha / 4.0).floor()
        } else {
            z
        };
        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();

        let day = b - d - (30.6001 * e).floor() + f;
        let month = (if e < 14.0 { e - 1.0 } else { e - 13.0 }) as u8;
        let year = (if month > 2 { c - 4716.0 } else { c - 4715.0 }) as i32;
        Ok(Self { year, month, day })
    }

    /// Name of the month.
    pub fn month_name(&self) -> &'static str {
        self.month
            .checked_sub(1)
            .and_then(month_from_index)
            .map_or("", |m| m.name())
    }

    /// Convert a Gregorian date to a `chrono` timestamp.
    ///
    /// Returns `None` for Julian-calendar dates, which `chrono` would read as
    /// proleptic Gregorian.
    pub fn to_naive_datetime(&self) -> Option<NaiveDateTime> {
        if self.calendar() == Calendar::Julian {
            return None;
        }
        let whole = self.day.floor();
        let seconds = ((self.day - whole) * 86_400.0).round() as i64;
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month), whole as u32)?
            .and_hms_opt(0, 0, 0)
            .map(|midnight| midnight + chrono::Duration::seconds(seconds))
    }

    /// Build from a `chrono` timestamp on or after the Gregorian reform.
    pub fn from_naive_datetime(datetime: NaiveDateTime) -> AlmanacResult<Self> {
        let seconds = f64::from(datetime.num_seconds_from_midnight())
            + f64::from(datetime.nanosecond()) / 1e9;
        let day = f64::from(datetime.day()) + seconds / 86_400.0;
        // chrono months are 1..=12, so the narrowing is lossless
        let date = Self::new(datetime.year(), datetime.month() as u8, day)?;
        if date.calendar() == Calendar::Julian {
            return Err(AlmanacError::invalid_date(
                date.year,
                date.month,
                date.day,
                "proleptic Gregorian timestamp precedes the reform",
            ));
        }
        Ok(date)
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {:.5}", self.year, self.month_name(), self.day)
    }
}

impl TryFrom<Time<JD>> for CalendarDate {
    type Error = AlmanacError;

    fn try_from(jd: Time<JD>) -> AlmanacResult<Self> {
        Self::from_julian_day(jd)
    }
}

impl From<CalendarDate> for Time<JD> {
    fn from(date: CalendarDate) -> Self {
        date.to_julian_day()
    }
}

impl Time<JD> {
    /// Calendar date of this instant; see [`CalendarDate::from_julian_day`].
    pub fn to_calendar_date(&self) -> AlmanacResult<CalendarDate> {
        CalendarDate::from_julian_day(*self)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Free functions
// ═══════════════════════════════════════════════════════════════════════════

/// Julian Day of `month`/`day`/`year`, validating the date first.
pub fn to_julian_day(month: u8, day: f64, year: i32) -> AlmanacResult<Time<JD>> {
    CalendarDate::new(year, month, day).map(|date| date.to_julian_day())
}

/// Length of February: Gregorian rule for years `>= 0`, Julian rule before.
pub fn february_days(year: i32) -> u8 {
    let leap = if year >= 0 {
        year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
    } else {
        year % 4 == 0
    };
    if leap {
        29
    } else {
        28
    }
}

/// Standard day count of a month by zero-based index, February as 28.
pub fn days_in_month(month_index: u8) -> Option<u8> {
    MONTH_DAYS.get(usize::from(month_index)).copied()
}

/// `chrono` month by zero-based index.
pub fn month_from_index(month_index: u8) -> Option<Month> {
    Month::try_from(month_index.checked_add(1)?).ok()
}

/// Length of `month` (1..=12) in `year` under the calendar in force then.
fn month_length(year: i32, month: u8) -> u8 {
    match month {
        2 if year < 1583 => {
            if year.rem_euclid(4) == 0 {
                29
            } else {
                28
            }
        }
        2 => february_days(year),
        _ => MONTH_DAYS[usize::from(month - 1)],
    }
}

/// Weekday index (0 = Sunday) of January 1 of a Gregorian `year >= 1`.
pub fn first_weekday_of_year(year: i32) -> u8 {
    let y = i64::from(year);
    let p = y - 1;
    (y + p.div_euclid(4) - p.div_euclid(100) + p.div_euclid(400)).rem_euclid(7) as u8
}

/// Weekday index (0 = Sunday) by Zeller's congruence.
///
/// Only meaningful for Gregorian dates.
pub fn zeller_day_of_week(day: u32, month: u32, year: i32) -> u8 {
    let (m, y) = if month > 2 {
        (i64::from(month) - 2, i64::from(year))
    } else {
        (i64::from(month) + 10, i64::from(year) - 1)
    };
    let century = y.div_euclid(100);
    let yy = y.rem_euclid(100);
    let index = (13 * m - 1) / 5 + i64::from(day) + yy + yy / 4 + century / 4 - 2 * century + 77;
    index.rem_euclid(7) as u8
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
