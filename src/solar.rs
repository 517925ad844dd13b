// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Apparent position of the Sun, low-accuracy theory of Meeus ch. 25
//! (about 0.01°).

use qtty::Degrees;

use crate::angle::{asin_deg, atan2_deg, cos_deg, normalize_360, sin_deg};
use crate::coords::EquatorialCoordinate;
use crate::nutation::mean_obliquity;
use crate::JulianEphemerisDay;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Full result of the solar theory.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolarPosition {
    /// Apparent right ascension and declination.
    pub equatorial: EquatorialCoordinate,
    /// Apparent ecliptic longitude λ.
    pub apparent_longitude: Degrees,
    /// Sun–Earth distance in astronomical units.
    pub radius_vector: f64,
}

/// Apparent geocentric position of the Sun at `jde`.
pub fn solar_position(jde: JulianEphemerisDay) -> SolarPosition {
    let t = jde.julian_centuries().value();
    let t2 = t * t;

    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let m = 357.529_10 + 35_999.050_30 * t - 0.000_155_9 * t2 - 0.000_000_48 * t2 * t;
    let e = 0.016_708_617 - 0.000_042_037 * t - 0.000_000_123_6 * t2;

    // equation of center
    let c = (1.914_600 - 0.004_817 * t - 0.000_014 * t2) * sin_deg(m)
        + (0.019_993 - 0.000_101 * t) * sin_deg(2.0 * m)
        + 0.000_290 * sin_deg(3.0 * m);

    let true_longitude = l0 + c;
    let true_anomaly = m + c;
    let radius_vector = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * cos_deg(true_anomaly));

    let omega = 125.04 - 1_934.136 * t;
    let lambda = normalize_360(true_longitude - 0.005_69 - 0.004_78 * sin_deg(omega));
    let epsilon = mean_obliquity(jde.julian_centuries()) + 0.002_56 * cos_deg(omega);

    let alpha = normalize_360(atan2_deg(
        cos_deg(epsilon) * sin_deg(lambda),
        cos_deg(lambda),
    ));
    let delta = asin_deg(sin_deg(epsilon) * sin_deg(lambda));

    SolarPosition {
        equatorial: EquatorialCoordinate::new(alpha, delta),
        apparent_longitude: Degrees::new(lambda),
        radius_vector,
    }
}

/// Apparent right ascension and declination of the Sun at `jde`.
pub fn solar_coordinates(jde: JulianEphemerisDay) -> EquatorialCoordinate {
    solar_position(jde).equatorial
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 1992 October 13 0h TD, Meeus example 25.a.
    const JDE_25A: JulianEphemerisDay = JulianEphemerisDay::new(2_448_908.5);

    #[test]
    fn solar_coordinates_example_25a() {
        let sun = solar_coordinates(JDE_25A);
        let alpha = sun.right_ascension.value();
        assert!((alpha - 198.380_82).abs() < 1e-4, "α = {alpha}");
        assert!(
            (sun.declination.value() + 7.785_07).abs() < 1e-4,
            "δ = {}",
            sun.declination
        );
    }

    #[test]
    fn longitude_and_distance_example_25a() {
        let sun = solar_position(JDE_25A);
        assert!((sun.apparent_longitude.value() - 199.908_95).abs() < 1e-3);
        assert!(
            (sun.radius_vector - 0.997_66).abs() < 1e-4,
            "R = {}",
            sun.radius_vector
        );
    }

    #[test]
    fn declination_follows_the_seasons() {
        // roughly the 2024 solstices and equinox
        let june = solar_coordinates(JulianEphemerisDay::new(2_460_482.5));
        let december = solar_coordinates(JulianEphemerisDay::new(2_460_665.5));
        let march = solar_coordinates(JulianEphemerisDay::new(2_460_390.0));
        assert!((june.declination.value() - 23.44).abs() < 0.05);
        assert!((december.declination.value() + 23.44).abs() < 0.05);
        assert!(march.declination.value().abs() < 0.5);
    }

    #[test]
    fn radius_vector_range() {
        for k in 0..365 {
            let jde = JulianEphemerisDay::new(2_460_310.5 + f64::from(k));
            let r = solar_position(jde).radius_vector;
            assert!((0.983..=1.017).contains(&r), "day {k}: {r}");
        }
    }
}
