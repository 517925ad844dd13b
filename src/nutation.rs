// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Nutation in longitude and obliquity, and the obliquity of the ecliptic.
//!
//! The nutation series is the 63-term IAU 1980 theory as tabulated in
//! *Meeus, Astronomical Algorithms*, table 22.A. Each term is a coefficient,
//! linear in `T`, times the sine (Δψ) or cosine (Δε) of an integer
//! combination of the five fundamental arguments. Coefficients are stored
//! in units of 0.0001″.
//!
//! ```
//! use almanac::{nutation, JulianEphemerisDay};
//!
//! // Meeus example 22.a
//! let t = JulianEphemerisDay::new(2_446_895.5).julian_centuries();
//! let n = nutation(t);
//! assert!((n.longitude + 3.788).abs() < 1e-3);
//! assert!((n.obliquity - 9.443).abs() < 1e-3);
//! ```

use qtty::Centuries;

use crate::angle::{cos_deg, sin_deg};
use crate::series::combine;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// Fundamental arguments
// ═══════════════════════════════════════════════════════════════════════════

/// The five Delaunay-style arguments of the nutation theory, in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FundamentalArguments {
    /// Mean elongation of the Moon from the Sun, `D`.
    pub elongation: f64,
    /// Mean anomaly of the Sun, `M`.
    pub sun_anomaly: f64,
    /// Mean anomaly of the Moon, `M′`.
    pub moon_anomaly: f64,
    /// Moon's argument of latitude, `F`.
    pub latitude_argument: f64,
    /// Longitude of the Moon's ascending node, `Ω`.
    pub node: f64,
}

impl FundamentalArguments {
    /// Evaluate the argument polynomials at `t` Julian centuries from J2000.
    pub fn at(t: Centuries) -> Self {
        let t = t.value();
        let t2 = t * t;
        let t3 = t2 * t;
        Self {
            elongation: 297.850_36 + 445_267.111_480 * t - 0.001_914_2 * t2 + t3 / 189_474.0,
            sun_anomaly: 357.527_72 + 35_999.050_340 * t - 0.000_160_3 * t2 - t3 / 300_000.0,
            moon_anomaly: 134.962_98 + 477_198.867_398 * t + 0.008_697_2 * t2 + t3 / 56_250.0,
            latitude_argument: 93.271_91 + 483_202.017_538 * t - 0.003_682_5 * t2
                + t3 / 327_270.0,
            node: 125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t2 + t3 / 450_000.0,
        }
    }

    fn as_array(&self) -> [f64; 5] {
        [
            self.elongation,
            self.sun_anomaly,
            self.moon_anomaly,
            self.latitude_argument,
            self.node,
        ]
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Series table
// ═══════════════════════════════════════════════════════════════════════════

/// One row of table 22.A.
#[derive(Debug, Copy, Clone)]
struct NutationTerm {
    /// Multipliers of `[D, M, M′, F, Ω]`.
    multipliers: [i8; 5],
    /// Δψ coefficient and its rate per century (sine term).
    longitude: (f64, f64),
    /// Δε coefficient and its rate per century (cosine term).
    obliquity: (f64, f64),
}

const fn term(
    multipliers: [i8; 5],
    sin_coefficient: f64,
    sin_rate: f64,
    cos_coefficient: f64,
    cos_rate: f64,
) -> NutationTerm {
    NutationTerm {
        multipliers,
        longitude: (sin_coefficient, sin_rate),
        obliquity: (cos_coefficient, cos_rate),
    }
}

/// Scale of the tabulated coefficients, 0.0001 arcsecond.
const COEFFICIENT_SCALE: f64 = 1e-4;

#[rustfmt::skip]
static NUTATION_TERMS: [NutationTerm; 63] = [
    term([ 0,  0,  0,  0,  1], -171996.0, -174.2,  92025.0,   8.9),
    term([-2,  0,  0,  2,  2],  -13187.0,   -1.6,   5736.0,  -3.1),
    term([ 0,  0,  0,  2,  2],   -2274.0,   -0.2,    977.0,  -0.5),
    term([ 0,  0,  0,  0,  2],    2062.0,    0.2,   -895.0,   0.5),
    term([ 0,  1,  0,  0,  0],    1426.0,   -3.4,     54.0,  -0.1),
    term([ 0,  0,  1,  0,  0],     712.0,    0.1,     -7.0,   0.0),
    term([-2,  1,  0,  2,  2],    -517.0,    1.2,    224.0,  -0.6),
    term([ 0,  0,  0,  2,  1],    -386.0,   -0.4,    200.0,   0.0),
    term([ 0,  0,  1,  2,  2],    -301.0,    0.0,    129.0,  -0.1),
    term([-2, -1,  0,  2,  2],     217.0,   -0.5,    -95.0,   0.3),
    term([-2,  0,  1,  0,  0],    -158.0,    0.0,      0.0,   0.0),
    term([-2,  0,  0,  2,  1],     129.0,    0.1,    -70.0,   0.0),
    term([ 0,  0, -1,  2,  2],     123.0,    0.0,    -53.0,   0.0),
    term([ 2,  0,  0,  0,  0],      63.0,    0.0,      0.0,   0.0),
    term([ 0,  0,  1,  0,  1],      63.0,    0.1,    -33.0,   0.0),
    term([ 2,  0, -1,  2,  2],     -59.0,    0.0,     26.0,   0.0),
    term([ 0,  0, -1,  0,  1],     -58.0,   -0.1,     32.0,   0.0),
    term([ 0,  0,  1,  2,  1],     -51.0,    0.0,     27.0,   0.0),
    term([-2,  0,  2,  0,  0],      48.0,    0.0,      0.0,   0.0),
    term([ 0,  0, -2,  2,  1],      46.0,    0.0,    -24.0,   0.0),
    term([ 2,  0,  0,  2,  2],     -38.0,    0.0,     16.0,   0.0),
    term([ 0,  0,  2,  2,  2],     -31.0,    0.0,     13.0,   0.0),
    term([ 0,  0,  2,  0,  0],      29.0,    0.0,      0.0,   0.0),
    term([-2,  0,  1,  2,  2],      29.0,    0.0,    -12.0,   0.0),
    term([ 0,  0,  0,  2,  0],      26.0,    0.0,      0.0,   0.0),
    term([-2,  0,  0,  2,  0],     -22.0,    0.0,      0.0,   0.0),
    term([ 0,  0, -1,  2,  1],      21.0,    0.0,    -10.0,   0.0),
    term([ 0,  2,  0,  0,  0],      17.0,   -0.1,      0.0,   0.0),
    term([ 2,  0, -1,  0,  1],      16.0,    0.0,     -8.0,   0.0),
    term([-2,  2,  0,  2,  2],     -16.0,    0.1,      7.0,   0.0),
    term([ 0,  1,  0,  0,  1],     -15.0,    0.0,      9.0,   0.0),
    term([-2,  0,  1,  0,  1],     -13.0,    0.0,      7.0,   0.0),
    term([ 0, -1,  0,  0,  1],     -12.0,    0.0,      6.0,   0.0),
    term([ 0,  0,  2, -2,  0],      11.0,    0.0,      0.0,   0.0),
    term([ 2,  0, -1,  2,  1],     -10.0,    0.0,      5.0,   0.0),
    term([ 2,  0,  1,  2,  2],      -8.0,    0.0,      3.0,   0.0),
    term([ 0,  1,  0,  2,  2],       7.0,    0.0,     -3.0,   0.0),
    term([-2,  1,  1,  0,  0],      -7.0,    0.0,      0.0,   0.0),
    term([ 0, -1,  0,  2,  2],      -7.0,    0.0,      3.0,   0.0),
    term([ 2,  0,  0,  2,  1],      -7.0,    0.0,      3.0,   0.0),
    term([ 2,  0,  1,  0,  0],       6.0,    0.0,      0.0,   0.0),
    term([-2,  0,  2,  2,  2],       6.0,    0.0,     -3.0,   0.0),
    term([-2,  0,  1,  2,  1],       6.0,    0.0,     -3.0,   0.0),
    term([ 2,  0, -2,  0,  1],      -6.0,    0.0,      3.0,   0.0),
    term([ 2,  0,  0,  0,  1],      -6.0,    0.0,      3.0,   0.0),
    term([ 0, -1,  1,  0,  0],       5.0,    0.0,      0.0,   0.0),
    term([-2, -1,  0,  2,  1],      -5.0,    0.0,      3.0,   0.0),
    term([-2,  0,  0,  0,  1],      -5.0,    0.0,      3.0,   0.0),
    term([ 0,  0,  2,  2,  1],      -5.0,    0.0,      3.0,   0.0),
    term([-2,  0,  2,  0,  1],       4.0,    0.0,      0.0,   0.0),
    term([-2,  1,  0,  2,  1],       4.0,    0.0,      0.0,   0.0),
    term([ 0,  0,  1, -2,  0],       4.0,    0.0,      0.0,   0.0),
    term([-1,  0,  1,  0,  0],      -4.0,    0.0,      0.0,   0.0),
    term([-2,  1,  0,  0,  0],      -4.0,    0.0,      0.0,   0.0),
    term([ 1,  0,  0,  0,  0],      -4.0,    0.0,      0.0,   0.0),
    term([ 0,  0,  1,  2,  0],       3.0,    0.0,      0.0,   0.0),
    term([ 0,  0, -2,  2,  2],      -3.0,    0.0,      0.0,   0.0),
    term([-1, -1,  1,  0,  0],      -3.0,    0.0,      0.0,   0.0),
    term([ 0,  1,  1,  0,  0],      -3.0,    0.0,      0.0,   0.0),
    term([ 0, -1,  1,  2,  2],      -3.0,    0.0,      0.0,   0.0),
    term([ 2, -1, -1,  2,  2],      -3.0,    0.0,      0.0,   0.0),
    term([ 0,  0,  3,  2,  2],      -3.0,    0.0,      0.0,   0.0),
    term([ 2, -1,  0,  2,  2],      -3.0,    0.0,      0.0,   0.0),
];

// ═══════════════════════════════════════════════════════════════════════════
// Nutation & obliquity
// ═══════════════════════════════════════════════════════════════════════════

/// Nutation components, in arcseconds.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Nutation {
    /// Δψ, nutation in longitude.
    pub longitude: f64,
    /// Δε, nutation in obliquity.
    pub obliquity: f64,
}

/// Nutation in longitude and obliquity at `t` Julian centuries (TD) from J2000.
pub fn nutation(t: Centuries) -> Nutation {
    let args = FundamentalArguments::at(t).as_array();
    let tv = t.value();
    let (dpsi, deps) = NUTATION_TERMS
        .iter()
        .fold((0.0, 0.0), |(dpsi, deps), row| {
            let arg = combine(&row.multipliers, &args);
            let (s0, s1) = row.longitude;
            let (c0, c1) = row.obliquity;
            (
                dpsi + (s0 + s1 * tv) * sin_deg(arg),
                deps + (c0 + c1 * tv) * cos_deg(arg),
            )
        });
    Nutation {
        longitude: dpsi * COEFFICIENT_SCALE,
        obliquity: deps * COEFFICIENT_SCALE,
    }
}

/// Mean obliquity of the ecliptic in degrees (Meeus eq. 22.2).
pub fn mean_obliquity(t: Centuries) -> f64 {
    let t = t.value();
    // 23°26′21.448″
    const EPSILON_0: f64 = 84_381.448;
    (EPSILON_0 - 46.815_0 * t - 0.000_59 * t * t + 0.001_813 * t * t * t) / 3600.0
}

/// True and mean obliquity of the ecliptic, in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Obliquity {
    pub true_obliquity: f64,
    pub mean_obliquity: f64,
}

/// Obliquity of the ecliptic; the true value adds `Δε`.
pub fn obliquity(t: Centuries) -> Obliquity {
    NutationObliquity::at(t).into()
}

/// Nutation and obliquity evaluated together at one epoch.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NutationObliquity {
    /// Δψ in arcseconds.
    pub nutation_longitude: f64,
    /// Δε in arcseconds.
    pub nutation_obliquity: f64,
    /// ε₀ in degrees.
    pub mean_obliquity: f64,
    /// ε = ε₀ + Δε in degrees.
    pub true_obliquity: f64,
}

impl NutationObliquity {
    pub fn at(t: Centuries) -> Self {
        let n = nutation(t);
        let eps0 = mean_obliquity(t);
        Self {
            nutation_longitude: n.longitude,
            nutation_obliquity: n.obliquity,
            mean_obliquity: eps0,
            true_obliquity: eps0 + n.obliquity / 3600.0,
        }
    }
}

impl From<NutationObliquity> for Obliquity {
    fn from(n: NutationObliquity) -> Self {
        Self {
            true_obliquity: n.true_obliquity,
            mean_obliquity: n.mean_obliquity,
        }
    }
}
