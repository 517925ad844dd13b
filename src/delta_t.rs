// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # ΔT = TD − UT
//!
//! Piecewise model of the difference between Dynamical Time and Universal
//! Time after *Meeus, Astronomical Algorithms*, ch. 9.
//!
//! | Span | Model |
//! |------|-------|
//! | before 948 | Stephenson & Houlden quadratic about 948 |
//! | 948 – 1600 | Stephenson & Houlden quadratic about 1850 |
//! | 1600 – 1992 | biennial table from 1620, three-point interpolation |
//! | 1992 – 2010 | interpolation of the 1990/2000/2010 estimates |
//! | after 2010 | quadratic extrapolation (eq. 9.1) |
//!
//! The correction links the [`JD`](crate::JD) and [`JDE`](crate::JDE)
//! scales, and is the offset `n = m + ΔT/86400` the rise/transit/set solver
//! can apply when interpolating its position samples.
//!
//! ```rust
//! use almanac::JulianDay;
//!
//! let dt = JulianDay::J2000.delta_t();
//! assert!((dt.value() - 63.8).abs() < 0.5);
//! ```

use super::instant::Time;
use super::scales::JD;
use qtty::{Days, Seconds, Simplify};

type JulianDay = Time<JD>;

const JULIAN_CENTURY: Days = Days::new(36_525.0);

/// Number of biennial entries, 1620 through 1992.
const TERMS: usize = 187;

/// Biennial ΔT table from 1620 to 1992, in seconds.
#[rustfmt::skip]
const BIENNIAL: [Seconds; TERMS] = qtty::qtty_vec!(
    Seconds;
    124.0,115.0,106.0, 98.0, 91.0, 85.0, 79.0, 74.0, 70.0, 65.0,
     62.0, 58.0, 55.0, 53.0, 50.0, 48.0, 46.0, 44.0, 42.0, 40.0,
     37.0, 35.0, 33.0, 31.0, 28.0, 26.0, 24.0, 22.0, 20.0, 18.0,
     16.0, 14.0, 13.0, 12.0, 11.0, 10.0,  9.0,  9.0,  9.0,  9.0,
      9.0,  9.0,  9.0,  9.0, 10.0, 10.0, 10.0, 10.0, 10.0, 11.0,
     11.0, 11.0, 11.0, 11.0, 11.0, 11.0, 12.0, 12.0, 12.0, 12.0,
     12.0, 12.0, 13.0, 13.0, 13.0, 13.0, 14.0, 14.0, 14.0, 15.0,
     15.0, 15.0, 15.0, 16.0, 16.0, 16.0, 16.0, 16.0, 17.0, 17.0,
     17.0, 17.0, 17.0, 17.0, 17.0, 17.0, 16.0, 16.0, 15.0, 14.0,
     13.7, 13.1, 12.7, 12.5, 12.5, 12.5, 12.5, 12.5, 12.5, 12.3,
     12.0, 11.4, 10.6,  9.6,  8.6,  7.5,  6.6,  6.0,  5.7,  5.6,
      5.7,  5.9,  6.2,  6.5,  6.8,  7.1,  7.3,  7.5,  7.7,  7.8,
      7.9,  7.5,  6.4,  5.4,  2.9,  1.6, -1.0, -2.7, -3.6, -4.7,
     -5.4, -5.2, -5.5, -5.6, -5.8, -5.9, -6.2, -6.4, -6.1, -4.7,
     -2.7,  0.0,  2.6,  5.4,  7.7, 10.5, 13.4, 16.0, 18.2, 20.2,
     21.2, 22.4, 23.5, 23.9, 24.3, 24.0, 23.9, 23.9, 23.7, 24.0,
     24.3, 25.3, 26.2, 27.3, 28.2, 29.1, 30.0, 30.7, 31.4, 32.2,
     33.1, 34.0, 35.0, 36.5, 38.3, 40.2, 42.2, 44.5, 46.5, 48.5,
     50.5, 52.2, 53.8, 54.9, 55.8, 56.9, 58.3,
);

// ── segment boundaries (JD, UT) ───────────────────────────────────────────

const JD_948: JulianDay = JulianDay::new(2_067_314.5);
const JD_1600: JulianDay = JulianDay::new(2_305_447.5);
const JD_1620: JulianDay = JulianDay::new(2_312_752.5);
const JD_1850: JulianDay = JulianDay::new(2_396_758.5);
const JD_1992: JulianDay = JulianDay::new(2_448_622.5);
const JD_2000: JulianDay = JulianDay::new(2_451_544.5);
const JD_2010: JulianDay = JulianDay::new(2_455_197.5);

#[inline]
fn days_ratio(num: Days, den: Days) -> f64 {
    (num / den).simplify().value()
}

/// Three-point interpolation `y₂ + n/2 · (a + b + n·c)`.
#[inline]
fn interpolate(y: [Seconds; 3], n: f64) -> Seconds {
    let a = y[1] - y[0];
    let b = y[2] - y[1];
    let c = b - a;
    y[1] + n / 2.0 * (a + b + n * c)
}

fn ancient(jd: JulianDay) -> Seconds {
    let c = days_ratio(jd - JD_948, JULIAN_CENTURY);
    Seconds::new(1_830.0 - 405.0 * c + 46.5 * c * c)
}

fn medieval(jd: JulianDay) -> Seconds {
    let c = days_ratio(jd - JD_1850, JULIAN_CENTURY);
    Seconds::new(22.5 * c * c)
}

fn tabulated(jd: JulianDay) -> Seconds {
    const STEP: Days = Days::new(730.5);
    // 1600 to 1620 holds the first entry
    let x = days_ratio(jd - JD_1620, STEP).max(0.0);
    // window centred on the nearest node, measured from its middle entry
    let i = (x.round().max(1.0) as usize - 1).min(TERMS - 3);
    let n = x - (i + 1) as f64;
    interpolate([BIENNIAL[i], BIENNIAL[i + 1], BIENNIAL[i + 2]], n)
}

fn recent(jd: JulianDay) -> Seconds {
    const ESTIMATES: [Seconds; 3] = [Seconds::new(56.86), Seconds::new(63.83), Seconds::new(70.0)];
    interpolate(ESTIMATES, days_ratio(jd - JD_2000, Days::new(3_652.5)))
}

fn extrapolated(jd: JulianDay) -> Seconds {
    const JD_1810: JulianDay = JulianDay::new(2_382_148.0);
    let t = days_ratio(jd - JD_1810, Days::new(1.0));
    Seconds::new(-15.0 + t * t / 41_048_480.0)
}

/// ΔT in seconds for a Julian Day on the UT axis.
pub(crate) fn delta_t_seconds(jd: JulianDay) -> Seconds {
    if jd < JD_948 {
        ancient(jd)
    } else if jd < JD_1600 {
        medieval(jd)
    } else if jd < JD_1992 {
        tabulated(jd)
    } else if jd <= JD_2010 {
        recent(jd)
    } else {
        extrapolated(jd)
    }
}

impl Time<JD> {
    /// ΔT = TD − UT at this instant.
    #[inline]
    pub fn delta_t(&self) -> Seconds {
        delta_t_seconds(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ancient_sample() {
        let dt = delta_t_seconds(JulianDay::new(2_000_000.0));
        assert!((dt - Seconds::new(2_734.342_214_024_879_5)).abs() < Seconds::new(1e-6));
    }

    #[test]
    fn medieval_sample() {
        let dt = delta_t_seconds(JulianDay::new(2_100_000.0));
        assert!((dt - Seconds::new(1_485.280_240_204_242_3)).abs() < Seconds::new(1e-6));
    }

    #[test]
    fn table_start() {
        let dt = delta_t_seconds(JulianDay::new(2_312_752.5));
        assert!((dt - Seconds::new(124.0)).abs() < Seconds::new(1e-6));

        let before = delta_t_seconds(JulianDay::new(2_309_100.0));
        assert!((before - Seconds::new(124.0)).abs() < Seconds::new(1e-6));
    }

    #[test]
    fn table_nodes_are_read_in_place() {
        // 1900 node, index 140
        let dt = delta_t_seconds(JulianDay::new(2_415_022.5));
        assert!((dt - Seconds::new(-2.7)).abs() < Seconds::new(1e-9));

        // a quarter step later, between -2.7 and -3.6
        let dt = delta_t_seconds(JulianDay::new(2_415_205.125));
        assert!((dt - Seconds::new(-3.0)).abs() < Seconds::new(1e-9));
    }

    #[test]
    fn table_clamps_to_last_window() {
        let dt = tabulated(JulianDay::new(2_449_356.0));
        assert!((dt - Seconds::new(60.0)).abs() < Seconds::new(1e-6));
    }

    #[test]
    fn ancient_and_medieval_meet_at_948() {
        let before = delta_t_seconds(JD_948 - Days::new(1.0));
        let after = delta_t_seconds(JD_948 + Days::new(1.0));
        assert!(
            (after - before).abs() < Seconds::new(1.0),
            "{before} / {after}"
        );
    }

    #[test]
    fn j2000_value() {
        let dt = JulianDay::J2000.delta_t();
        assert!((dt - Seconds::new(63.83)).abs() < Seconds::new(0.5));
    }

    #[test]
    fn recent_sample() {
        let dt = delta_t_seconds(JulianDay::new(2_453_371.5));
        assert!((dt - Seconds::new(67.016_266_923_586_13)).abs() < Seconds::new(1e-6));
    }

    #[test]
    fn extrapolated_sample() {
        let dt = delta_t_seconds(JulianDay::new(2_457_000.0));
        assert!((dt - Seconds::new(121.492_798_369_147_89)).abs() < Seconds::new(1e-6));
    }
}
