// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sidereal time at Greenwich (Meeus ch. 12).
//!
//! All functions take a Julian Day on the UT axis and return degrees in
//! `[0, 360)`. Divide by 15 for hours.

use qtty::Degrees;

use crate::angle::{cos_deg, normalize_360};
use crate::nutation::NutationObliquity;
use crate::{JulianDay, Observer};

/// Mean sidereal time at Greenwich (Meeus eq. 12.4).
pub fn mean_sidereal_time(jd: JulianDay) -> Degrees {
    let t = jd.julian_centuries().value();
    let days = jd.value() - JulianDay::J2000.value();
    Degrees::new(normalize_360(
        280.460_618_37 + 360.985_647_366_29 * days + 0.000_387_933 * t * t
            - t * t * t / 38_710_000.0,
    ))
}

/// Apparent sidereal time at Greenwich: mean sidereal time corrected by the
/// equation of the equinoxes `Δψ·cos ε`.
pub fn apparent_sidereal_time(jd: JulianDay) -> Degrees {
    let n = NutationObliquity::at(jd.julian_centuries());
    // Δψ″ / 15 → seconds of time, / 240 → degrees
    let equation_of_equinoxes = n.nutation_longitude / 15.0 * cos_deg(n.true_obliquity) / 240.0;
    Degrees::new(normalize_360(
        mean_sidereal_time(jd).value() + equation_of_equinoxes,
    ))
}

/// Apparent local sidereal time for an observer (longitude positive west).
pub fn local_sidereal_time(jd: JulianDay, observer: &Observer) -> Degrees {
    Degrees::new(normalize_360(
        apparent_sidereal_time(jd).value() - observer.longitude.value(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::normalize_180;

    #[test]
    fn mean_sidereal_time_example_12a() {
        // 1987 April 10 0h UT → 13h10m46.3668s = 197.693195°
        let theta = mean_sidereal_time(JulianDay::new(2_446_895.5));
        assert!((theta.value() - 197.693_195).abs() < 1e-4, "{}", theta);
    }

    #[test]
    fn apparent_sidereal_time_example_12a() {
        // 13h10m46.1351s = 197.692230°
        let theta = apparent_sidereal_time(JulianDay::new(2_446_895.5));
        assert!((theta.value() - 197.692_230).abs() < 1e-4, "{}", theta);
    }

    #[test]
    fn mean_sidereal_time_example_12b() {
        // 1987 April 10 19h21m00s UT → 128.737873°
        let theta = mean_sidereal_time(JulianDay::new(2_446_896.306_25));
        assert!((theta.value() - 128.737_873).abs() < 1e-4, "{}", theta);
    }

    #[test]
    fn sidereal_day_is_shorter_than_solar_day() {
        let a = mean_sidereal_time(JulianDay::new(2_460_000.5)).value();
        let b = mean_sidereal_time(JulianDay::new(2_460_001.5)).value();
        // ≈ 0.9856° gained per solar day
        assert!((normalize_180(b - a) - 0.985_647).abs() < 1e-4);
    }

    #[test]
    fn local_sidereal_time_subtracts_west_longitude() {
        let jd = JulianDay::new(2_446_896.306_25);
        let washington = Observer::new(77.065_555_6, 38.921_388_9);
        let lst = local_sidereal_time(jd, &washington).value();
        let expected = normalize_360(apparent_sidereal_time(jd).value() - 77.065_555_6);
        assert!((lst - expected).abs() < 1e-12);
        assert!((0.0..360.0).contains(&lst));
    }
}
