// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Degree-argument trigonometry, range normalization and sexagesimal helpers.
//!
//! The astronomical formulas in this crate are written in degrees, so the
//! kernels use the small wrappers below instead of converting at every call
//! site.
//!
//! | Function | Range |
//! |----------|-------|
//! | [`normalize_360`] | `[0, 360)` |
//! | [`normalize_180`] | `(-180, 180]` |
//! | [`normalize_unit`] | `[0, 1]` |

use chrono::NaiveTime;
use qtty::Degrees;

use crate::error::{AlmanacError, AlmanacResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// Degree trigonometry
// ═══════════════════════════════════════════════════════════════════════════

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg(x: f64) -> f64 {
    x.to_radians().sin()
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(x: f64) -> f64 {
    x.to_radians().cos()
}

/// Tangent of an angle given in degrees.
#[inline]
pub fn tan_deg(x: f64) -> f64 {
    x.to_radians().tan()
}

/// Arcsine in degrees.
#[inline]
pub fn asin_deg(x: f64) -> f64 {
    x.asin().to_degrees()
}

/// Arccosine in degrees.
#[inline]
pub fn acos_deg(x: f64) -> f64 {
    x.acos().to_degrees()
}

/// Four-quadrant arctangent of `y / x` in degrees.
#[inline]
pub fn atan2_deg(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

// ═══════════════════════════════════════════════════════════════════════════
// Normalization
// ═══════════════════════════════════════════════════════════════════════════

/// Reduce an angle to `[0, 360)` with a floored modulo.
///
/// Negative inputs wrap to the top of the range: `-10 → 350`.
#[inline]
pub fn normalize_360(theta: f64) -> f64 {
    let r = theta.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Reduce an angle to `(-180, 180]`.
#[inline]
pub fn normalize_180(theta: f64) -> f64 {
    let r = normalize_360(theta);
    if r > 180.0 {
        r - 360.0
    } else {
        r
    }
}

/// Bring a day fraction into `[0, 1]` by whole-day steps.
///
/// Values already inside the closed interval are returned unchanged, so
/// `1.0` stays `1.0` and positive integers map to `1.0`, while negative
/// integers map to `0.0`. Computed in constant time.
#[inline]
pub fn normalize_unit(x: f64) -> f64 {
    if (0.0..=1.0).contains(&x) {
        x
    } else if x > 1.0 {
        let f = x.fract();
        if f == 0.0 {
            1.0
        } else {
            f
        }
    } else {
        x - x.floor()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Clock time
// ═══════════════════════════════════════════════════════════════════════════

/// Hours, minutes and seconds split out of a day fraction or an hour angle.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockTime {
    pub hours: i32,
    pub minutes: i32,
    pub seconds: f64,
}

impl ClockTime {
    /// Clock reading of the fractional part of `x` days.
    ///
    /// ```
    /// use almanac::ClockTime;
    /// let t = ClockTime::from_day_fraction(2_451_545.75);
    /// assert_eq!((t.hours, t.minutes), (18, 0));
    /// ```
    pub fn from_day_fraction(x: f64) -> Self {
        let hours_f = (x - x.floor()) * 24.0;
        let hours = hours_f.trunc() as i32;
        let minutes_f = (hours_f - f64::from(hours)) * 60.0;
        let minutes = minutes_f.trunc() as i32;
        Self {
            hours,
            minutes,
            seconds: (minutes_f - f64::from(minutes)) * 60.0,
        }
    }

    /// Time reading of an hour angle or right ascension given in degrees
    /// (15° per hour).
    pub fn from_degrees(x: f64) -> Self {
        let h = x / 15.0;
        let minutes_f = (h - h.floor()) * 60.0;
        Self {
            hours: h.trunc() as i32,
            minutes: minutes_f.trunc() as i32,
            seconds: (minutes_f - minutes_f.floor()) * 60.0,
        }
    }

    /// Total length of the reading in hours.
    pub fn as_hours(&self) -> f64 {
        f64::from(self.hours) + (f64::from(self.minutes) + self.seconds / 60.0) / 60.0
    }

    /// Wall-clock time, or `None` when the reading is outside a single day.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        let whole = self.seconds.floor();
        let nanos = ((self.seconds - whole) * 1e9).round().min(999_999_999.0) as u32;
        NaiveTime::from_hms_nano_opt(
            u32::try_from(self.hours).ok()?,
            u32::try_from(self.minutes).ok()?,
            whole as u32,
            nanos,
        )
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}h{:02}m{:06.3}s",
            self.hours,
            self.minutes,
            self.seconds
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Sexagesimal angle
// ═══════════════════════════════════════════════════════════════════════════

/// An angle split into degrees, arcminutes and arcseconds.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dms {
    degrees: i32,
    arcminutes: i32,
    arcseconds: f64,
}

impl Dms {
    /// Build from components; arcminutes must lie in `0..=59` and
    /// arcseconds in `[0, 60)`.
    pub fn new(degrees: i32, arcminutes: i32, arcseconds: f64) -> AlmanacResult<Self> {
        if !(0..=59).contains(&arcminutes) {
            return Err(AlmanacError::InvalidAngle(
                "arcminutes must be an integer between 0 and 59",
            ));
        }
        if !(0.0..60.0).contains(&arcseconds) {
            return Err(AlmanacError::InvalidAngle(
                "arcseconds must lie in [0, 60)",
            ));
        }
        Ok(Self {
            degrees,
            arcminutes,
            arcseconds,
        })
    }

    /// Split fractional degrees by truncation; every component carries the
    /// sign of the input.
    pub fn from_degrees(value: f64) -> Self {
        let degrees = value.trunc();
        let minutes_f = (value - degrees) * 60.0;
        let arcminutes = minutes_f.trunc();
        Self {
            degrees: degrees as i32,
            arcminutes: arcminutes as i32,
            arcseconds: (minutes_f - arcminutes) * 60.0,
        }
    }

    pub fn degrees(&self) -> i32 {
        self.degrees
    }

    pub fn arcminutes(&self) -> i32 {
        self.arcminutes
    }

    pub fn arcseconds(&self) -> f64 {
        self.arcseconds
    }

    /// Whole hours of the angle read as a right ascension.
    pub fn hour(&self) -> i32 {
        self.degrees / 15
    }

    /// Back to fractional degrees.
    pub fn to_degrees(&self) -> f64 {
        f64::from(self.degrees) + (f64::from(self.arcminutes) + self.arcseconds / 60.0) / 60.0
    }
}

impl From<Dms> for Degrees {
    fn from(dms: Dms) -> Self {
        Degrees::new(dms.to_degrees())
    }
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}°{:02}′{:05.2}″",
            self.degrees,
            self.arcminutes,
            self.arcseconds
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_trig_matches_known_values() {
        assert!((sin_deg(30.0) - 0.5).abs() < 1e-15);
        assert!((cos_deg(60.0) - 0.5).abs() < 1e-15);
        assert!((tan_deg(45.0) - 1.0).abs() < 1e-15);
        assert!((asin_deg(0.5) - 30.0).abs() < 1e-12);
        assert!((acos_deg(0.5) - 60.0).abs() < 1e-12);
        assert!((atan2_deg(-1.0, -1.0) + 135.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_360_uses_floored_modulo() {
        assert_eq!(normalize_360(-10.0), 350.0);
        assert_eq!(normalize_360(360.0), 0.0);
        assert_eq!(normalize_360(725.0), 5.0);
        assert_eq!(normalize_360(-1e-18), 0.0);
        for k in -5..=5 {
            let v = normalize_360(123.456 + 360.0 * f64::from(k));
            assert!((v - 123.456).abs() < 1e-9, "k = {k}: {v}");
            assert!((0.0..360.0).contains(&v));
        }
    }

    #[test]
    fn normalize_180_half_open_range() {
        assert_eq!(normalize_180(180.0), 180.0);
        assert_eq!(normalize_180(-180.0), 180.0);
        assert_eq!(normalize_180(190.0), -170.0);
        assert_eq!(normalize_180(-190.0), 170.0);
        assert_eq!(normalize_180(0.0), 0.0);
    }

    #[test]
    fn normalize_unit_steps_by_whole_days() {
        assert_eq!(normalize_unit(0.25), 0.25);
        assert_eq!(normalize_unit(1.0), 1.0);
        assert_eq!(normalize_unit(0.0), 0.0);
        assert_eq!(normalize_unit(2.0), 1.0);
        assert_eq!(normalize_unit(-1.0), 0.0);
        assert!((normalize_unit(1.25) - 0.25).abs() < 1e-15);
        assert!((normalize_unit(-0.25) - 0.75).abs() < 1e-15);
        assert!((normalize_unit(-3.75) - 0.25).abs() < 1e-15);
    }

    #[test]
    fn clock_time_from_day_fraction() {
        let t = ClockTime::from_day_fraction(0.5625);
        assert_eq!(t.hours, 13);
        assert_eq!(t.minutes, 30);
        assert!(t.seconds.abs() < 1e-6, "{}", t.seconds);

        let wrapped = ClockTime::from_day_fraction(-0.25);
        assert_eq!(wrapped.hours, 18);

        let naive = t.to_naive_time().expect("valid clock time");
        assert_eq!(naive.format("%H:%M").to_string(), "13:30");
    }

    #[test]
    fn clock_time_from_hour_angle() {
        // 347.3193375° = 23h09m16.641s (Meeus example 13.b)
        let t = ClockTime::from_degrees(347.319_337_5);
        assert_eq!(t.hours, 23);
        assert_eq!(t.minutes, 9);
        assert!((t.seconds - 16.641).abs() < 1e-3, "{}", t.seconds);
        assert!((t.as_hours() * 15.0 - 347.319_337_5).abs() < 1e-9);
    }

    #[test]
    fn dms_validation() {
        assert!(Dms::new(10, 60, 0.0).is_err());
        assert!(Dms::new(10, -1, 0.0).is_err());
        assert!(Dms::new(10, 0, 60.0).is_err());
        assert_eq!(
            Dms::new(10, 0, -0.5),
            Err(AlmanacError::InvalidAngle("arcseconds must lie in [0, 60)"))
        );
        let ok = Dms::new(38, 55, 17.0).expect("valid angle");
        assert!((ok.to_degrees() - 38.921_388_9).abs() < 1e-7);
    }

    #[test]
    fn dms_from_fractional_degrees() {
        let dms = Dms::from_degrees(77.065_555_6);
        assert_eq!(dms.degrees(), 77);
        assert_eq!(dms.arcminutes(), 3);
        assert!((dms.arcseconds() - 56.0).abs() < 1e-3);
        assert_eq!(Dms::from_degrees(347.3).hour(), 23);

        let negative = Dms::from_degrees(-6.5);
        assert_eq!(negative.degrees(), -6);
        assert_eq!(negative.arcminutes(), -30);
        assert!((negative.to_degrees() + 6.5).abs() < 1e-12);

        let typed: Degrees = negative.into();
        assert!((typed.value() + 6.5).abs() < 1e-12);
    }
}
