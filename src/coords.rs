// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Equatorial and horizontal coordinates, observers, and the transform
//! between them (Meeus ch. 13).
//!
//! Conventions follow Meeus: observer longitude is measured **positive
//! west** of Greenwich, and azimuth is measured from the **south**,
//! increasing westward.

use qtty::Degrees;

use crate::angle::{asin_deg, atan2_deg, cos_deg, normalize_360, sin_deg, tan_deg};
use crate::sidereal::apparent_sidereal_time;
use crate::JulianDay;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Apparent right ascension and declination.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialCoordinate {
    pub right_ascension: Degrees,
    pub declination: Degrees,
}

impl EquatorialCoordinate {
    pub fn new(right_ascension: f64, declination: f64) -> Self {
        Self {
            right_ascension: Degrees::new(right_ascension),
            declination: Degrees::new(declination),
        }
    }

    /// Horizontal position seen by `observer` at `jd`.
    pub fn to_horizontal(&self, jd: JulianDay, observer: &Observer) -> HorizontalCoordinate {
        horizontal_coordinates(jd, self, observer)
    }
}

/// Azimuth (from south, westward) and altitude.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalCoordinate {
    pub azimuth: Degrees,
    pub altitude: Degrees,
}

/// A place on Earth.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observer {
    /// Geographic longitude, positive west.
    pub longitude: Degrees,
    /// Geographic latitude, positive north.
    pub latitude: Degrees,
}

impl Observer {
    /// `longitude_west` is positive west of Greenwich.
    pub fn new(longitude_west: f64, latitude: f64) -> Self {
        Self {
            longitude: Degrees::new(longitude_west),
            latitude: Degrees::new(latitude),
        }
    }

    /// Build from the common east-positive longitude convention.
    pub fn from_east_longitude(longitude_east: f64, latitude: f64) -> Self {
        Self::new(-longitude_east, latitude)
    }
}

/// Local hour angle `H = θ₀ − L − α` in `[0, 360)`.
pub fn local_hour_angle(
    jd: JulianDay,
    position: &EquatorialCoordinate,
    observer: &Observer,
) -> f64 {
    normalize_360(
        apparent_sidereal_time(jd).value()
            - observer.longitude.value()
            - position.right_ascension.value(),
    )
}

/// Azimuth and altitude of `position` for `observer` at `jd`.
///
/// Azimuth lies in `(-180, 180]`, altitude in `[-90, 90]`.
pub fn horizontal_coordinates(
    jd: JulianDay,
    position: &EquatorialCoordinate,
    observer: &Observer,
) -> HorizontalCoordinate {
    let h = local_hour_angle(jd, position, observer);
    let phi = observer.latitude.value();
    let delta = position.declination.value();

    let azimuth = atan2_deg(
        sin_deg(h),
        cos_deg(h) * sin_deg(phi) - tan_deg(delta) * cos_deg(phi),
    );
    let altitude = asin_deg(
        sin_deg(phi) * sin_deg(delta) + cos_deg(phi) * cos_deg(delta) * cos_deg(h),
    );

    HorizontalCoordinate {
        azimuth: Degrees::new(azimuth),
        altitude: Degrees::new(altitude),
    }
}
