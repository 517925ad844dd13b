// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Equinoxes and solstices (Meeus ch. 27).
//!
//! A mean instant is taken from one of eight polynomials (four seasons,
//! years before and from 1000) and refined with a 24-term periodic
//! correction. Accuracy is about a minute over 1951–2050.
//!
//! ```
//! use almanac::{equinox_solstice, SeasonKind};
//!
//! // Meeus example 27.a: June solstice 1962
//! let jde = equinox_solstice(1962, SeasonKind::JuneSolstice);
//! assert!((jde.value() - 2_437_837.392_45).abs() < 1e-4);
//! ```

use crate::angle::cos_deg;
use crate::error::AlmanacError;
use crate::series::{cosine_sum, LinearTerm};
use crate::JulianEphemerisDay;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The four seasonal instants, in calendar order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SeasonKind {
    MarchEquinox,
    JuneSolstice,
    SeptemberEquinox,
    DecemberSolstice,
}

impl SeasonKind {
    pub const ALL: [SeasonKind; 4] = [
        SeasonKind::MarchEquinox,
        SeasonKind::JuneSolstice,
        SeasonKind::SeptemberEquinox,
        SeasonKind::DecemberSolstice,
    ];

    /// Northern-hemisphere name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            SeasonKind::MarchEquinox => "Vernal Equinox",
            SeasonKind::JuneSolstice => "Summer Solstice",
            SeasonKind::SeptemberEquinox => "Autumnal Equinox",
            SeasonKind::DecemberSolstice => "Winter Solstice",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for SeasonKind {
    type Error = AlmanacError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(AlmanacError::InvalidSeasonKind(value))
    }
}

impl std::fmt::Display for SeasonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A solved seasonal instant.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeasonEvent {
    pub instant: JulianEphemerisDay,
    pub kind: SeasonKind,
}

impl SeasonEvent {
    pub fn new(year: i32, kind: SeasonKind) -> Self {
        Self {
            instant: equinox_solstice(year, kind),
            kind,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tables
// ═══════════════════════════════════════════════════════════════════════════

/// Table 27.A, years −1000 to +1000, argument `Y = year / 1000`.
#[rustfmt::skip]
const MEAN_BEFORE_1000: [[f64; 5]; 4] = [
    [1_721_139.291_89, 365_242.137_40, 0.061_34, 0.001_11, -0.000_71],
    [1_721_233.254_01, 365_241.725_62, -0.053_23, 0.009_07, 0.000_25],
    [1_721_325.704_55, 365_242.495_58, -0.116_77, -0.002_97, 0.000_74],
    [1_721_414.399_87, 365_242.882_57, -0.007_69, -0.009_33, -0.000_06],
];

/// Table 27.B, years +1000 to +3000, argument `Y = (year − 2000) / 1000`.
#[rustfmt::skip]
const MEAN_FROM_1000: [[f64; 5]; 4] = [
    [2_451_623.809_84, 365_242.374_04, 0.051_69, -0.004_11, -0.000_57],
    [2_451_716.567_67, 365_241.626_03, 0.003_25, 0.008_88, -0.000_30],
    [2_451_810.217_15, 365_242.017_67, -0.115_75, 0.003_37, 0.000_78],
    [2_451_900.059_52, 365_242.740_49, -0.062_23, -0.008_23, 0.000_32],
];

/// Table 27.C, amplitudes in 0.00001 day.
#[rustfmt::skip]
static PERIODIC_TERMS: [LinearTerm; 24] = [
    LinearTerm::new(485.0, 324.96,   1_934.136),
    LinearTerm::new(203.0, 337.23,  32_964.467),
    LinearTerm::new(199.0, 342.08,      20.186),
    LinearTerm::new(182.0,  27.85, 445_267.112),
    LinearTerm::new(156.0,  73.14,  45_036.886),
    LinearTerm::new(136.0, 171.52,  22_518.443),
    LinearTerm::new( 77.0, 222.54,  65_928.934),
    LinearTerm::new( 74.0, 296.72,   3_034.906),
    LinearTerm::new( 70.0, 243.58,   9_037.513),
    LinearTerm::new( 58.0, 119.81,  33_718.147),
    LinearTerm::new( 52.0, 297.17,     150.678),
    LinearTerm::new( 50.0,  21.02,   2_281.226),
    LinearTerm::new( 45.0, 247.54,  29_929.562),
    LinearTerm::new( 44.0, 325.15,  31_555.956),
    LinearTerm::new( 29.0,  60.93,   4_443.417),
    LinearTerm::new( 18.0, 155.12,  67_555.328),
    LinearTerm::new( 17.0, 288.79,   4_562.452),
    LinearTerm::new( 16.0, 198.04,  62_894.029),
    LinearTerm::new( 14.0, 199.76,  31_436.921),
    LinearTerm::new( 12.0,  95.39,  14_577.848),
    LinearTerm::new( 12.0, 287.11,  31_931.756),
    LinearTerm::new( 12.0, 320.81,  34_777.259),
    LinearTerm::new(  9.0, 227.73,   1_222.114),
    LinearTerm::new(  8.0,  15.45,  16_859.074),
];

// ═══════════════════════════════════════════════════════════════════════════
// Solver
// ═══════════════════════════════════════════════════════════════════════════

/// Mean instant of the event, before the periodic correction.
pub fn mean_equinox_solstice(year: i32, kind: SeasonKind) -> JulianEphemerisDay {
    let i = kind.index();
    let (c, y) = if year >= 1000 {
        (&MEAN_FROM_1000[i], f64::from(year - 2000) / 1000.0)
    } else {
        (&MEAN_BEFORE_1000[i], f64::from(year) / 1000.0)
    };
    JulianEphemerisDay::new(c[0] + y * (c[1] + y * (c[2] + y * (c[3] + y * c[4]))))
}

/// Instant of the March/September equinox or June/December solstice of
/// `year`, as a Julian Ephemeris Day.
pub fn equinox_solstice(year: i32, kind: SeasonKind) -> JulianEphemerisDay {
    let jde0 = mean_equinox_solstice(year, kind);
    let t = jde0.julian_centuries().value();
    let w = 35_999.373 * t - 2.47;
    let delta_lambda = 1.0 + 0.033_4 * cos_deg(w) + 0.000_7 * cos_deg(2.0 * w);
    let s = cosine_sum(&PERIODIC_TERMS, t);
    JulianEphemerisDay::new(jde0.value() + 0.000_01 * s / delta_lambda)
}
