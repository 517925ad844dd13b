// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day (`Time<JD>`) and Julian Ephemeris Day (`Time<JDE>`) extensions.

use chrono::Weekday;
use qtty::*;

use super::instant::Time;
use super::scales::{JD, JDE};

/// Days of the week indexed from Sunday.
const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// `chrono` weekday for an index counted from Sunday = 0.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    WEEKDAYS.get(usize::from(index)).copied()
}

/// Julian-century epoch arithmetic shared by both Julian Day flavours.
macro_rules! impl_epoch_arithmetic {
    ($($scale:ty),+ $(,)?) => {$(
        impl Time<$scale> {
            /// J2000.0 epoch, JD 2 451 545.0.
            pub const J2000: Self = Self::new(2_451_545.0);

            /// One Julian century expressed in days.
            pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

            /// Julian centuries since J2000.0, the argument `T` of the
            /// polynomial and periodic series.
            #[inline]
            pub fn julian_centuries(&self) -> Centuries {
                Centuries::new(
                    ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                        .simplify()
                        .value(),
                )
            }
        }

        impl From<Centuries> for Time<$scale> {
            fn from(centuries: Centuries) -> Self {
                Self::J2000 + Days::new(centuries.value() * Self::JULIAN_CENTURY.value())
            }
        }

        impl From<Time<$scale>> for Centuries {
            fn from(t: Time<$scale>) -> Self {
                t.julian_centuries()
            }
        }
    )+};
}

impl_epoch_arithmetic!(JD, JDE);

impl Time<JD> {
    /// 0h UT of the civil day containing this instant.
    ///
    /// Julian Days begin at noon, so this is `floor(JD − 0.5) + 0.5`.
    #[inline]
    pub fn midnight(&self) -> Self {
        Self::new((self.value() - 0.5).floor() + 0.5)
    }

    /// Day of the week, `0` = Sunday through `6` = Saturday.
    pub fn day_of_week(&self) -> u8 {
        let day = (self.midnight().value() + 1.5) as i64;
        day.rem_euclid(7) as u8
    }

    /// Day of the week as a `chrono` value.
    pub fn weekday(&self) -> Weekday {
        WEEKDAYS[usize::from(self.day_of_week())]
    }

    /// Reinterpret the day count on the Dynamical Time axis without
    /// applying ΔT (0h UT read as 0h TD).
    #[inline]
    pub fn as_dynamical(&self) -> Time<JDE> {
        Time::<JDE>::from_days(self.quantity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn julian_centuries_from_j2000() {
        let jd = Time::<JD>::J2000 + Days::new(36_525.0 * 3.0);
        assert!((jd.julian_centuries() - Centuries::new(3.0)).abs() < Centuries::new(1e-12));

        // Meeus example 22.a: JDE 2446895.5 → T = −0.127296372348
        let jde = Time::<JDE>::new(2_446_895.5);
        assert!((jde.julian_centuries().value() + 0.127_296_372_348).abs() < 1e-12);
    }

    #[test]
    fn centuries_roundtrip() {
        let jd = Time::<JD>::from(Centuries::new(-1.5));
        assert!((jd.value() - (2_451_545.0 - 54_787.5)).abs() < 1e-9);
        let back: Centuries = jd.into();
        assert!((back - Centuries::new(-1.5)).abs() < Centuries::new(1e-12));

        let jde = Time::<JDE>::from(Centuries::new(0.25));
        assert!((jde.value() - 2_460_676.25).abs() < 1e-9);
    }

    #[test]
    fn midnight_floors_to_civil_day() {
        assert_eq!(Time::<JD>::new(2_451_545.0).midnight().value(), 2_451_544.5);
        assert_eq!(Time::<JD>::new(2_451_544.5).midnight().value(), 2_451_544.5);
        assert_eq!(
            Time::<JD>::new(2_451_545.49).midnight().value(),
            2_451_544.5
        );
        assert_eq!(Time::<JD>::new(2_451_545.5).midnight().value(), 2_451_545.5);
    }

    #[test]
    fn day_of_week_reference_and_period() {
        // 2000-01-01 12:00 UT was a Saturday
        let jd = Time::<JD>::new(2_451_545.0);
        assert_eq!(jd.day_of_week(), 6);
        assert_eq!(jd.weekday(), Weekday::Sat);

        // 2001-02-26 was a Monday
        assert_eq!(Time::<JD>::new(2_451_959.5).day_of_week(), 1);

        for k in -20..20 {
            let shifted = jd + Days::new(7.0 * f64::from(k));
            assert_eq!(shifted.day_of_week(), 6, "k = {k}");
        }
        // Julian Day 0 (−4712 Jan 1.5) was a Monday
        assert_eq!(Time::<JD>::new(0.0).day_of_week(), 1);
    }

    #[test]
    fn weekday_lookup_by_index() {
        assert_eq!(weekday_from_index(0), Some(Weekday::Sun));
        assert_eq!(weekday_from_index(6), Some(Weekday::Sat));
        assert_eq!(weekday_from_index(7), None);
    }

    #[test]
    fn as_dynamical_keeps_the_number() {
        let jd = Time::<JD>::new(2_448_908.5);
        assert_eq!(jd.as_dynamical().value(), 2_448_908.5);
    }
}
