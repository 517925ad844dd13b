// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Instants of the principal lunar phases (Meeus ch. 49).
//!
//! A phase is identified by the lunation index `k`, counted from the new
//! moon of 2000 January 6 (`k = 0`); quarter phases sit at `k + 0.25`,
//! `k + 0.5` and `k + 0.75`. The mean instant is corrected by a
//! phase-specific table keyed on the Sun's and Moon's mean anomalies, the
//! Moon's argument of latitude and the node, plus fourteen planetary
//! arguments.
//!
//! ```
//! use almanac::{lunar_phase, PhaseKind};
//!
//! // Meeus example 49.a: new moon of 1977 February
//! let jde = lunar_phase(1977.13, PhaseKind::NewMoon);
//! assert!((jde.value() - 2_443_192.651_18).abs() < 1e-4);
//! ```

use crate::angle::{cos_deg, sin_deg};
use crate::error::AlmanacError;
use crate::series::{combine, sine_sum, LinearTerm};
use crate::JulianEphemerisDay;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530_588_853;

/// Lunations per Julian year.
const LUNATIONS_PER_YEAR: f64 = 12.368_5;

/// The four principal phases, in the order they occur within a lunation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PhaseKind {
    NewMoon,
    FirstQuarter,
    FullMoon,
    LastQuarter,
}

impl PhaseKind {
    pub const ALL: [PhaseKind; 4] = [
        PhaseKind::NewMoon,
        PhaseKind::FirstQuarter,
        PhaseKind::FullMoon,
        PhaseKind::LastQuarter,
    ];

    /// Fraction of a lunation after the new moon.
    pub fn offset(&self) -> f64 {
        match self {
            PhaseKind::NewMoon => 0.0,
            PhaseKind::FirstQuarter => 0.25,
            PhaseKind::FullMoon => 0.5,
            PhaseKind::LastQuarter => 0.75,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PhaseKind::NewMoon => "New Moon",
            PhaseKind::FirstQuarter => "First Quarter",
            PhaseKind::FullMoon => "Full Moon",
            PhaseKind::LastQuarter => "Last Quarter",
        }
    }
}

impl TryFrom<u8> for PhaseKind {
    type Error = AlmanacError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(AlmanacError::InvalidPhaseKind(value))
    }
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A solved lunar phase.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhaseEvent {
    pub instant: JulianEphemerisDay,
    pub kind: PhaseKind,
    /// Lunation index `k` of the new moon opening the cycle.
    pub cycle: i64,
}

impl PhaseEvent {
    pub fn in_cycle(cycle: i64, kind: PhaseKind) -> Self {
        Self {
            instant: lunar_phase_in_cycle(cycle, kind),
            kind,
            cycle,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tables
// ═══════════════════════════════════════════════════════════════════════════

/// `coefficient · Eⁿ · sin(Σ kᵢ·aᵢ)` over the arguments `[M, M′, F, Ω]`.
#[derive(Debug, Copy, Clone)]
struct LunarTerm {
    coefficient: f64,
    eccentricity_power: i32,
    multipliers: [i8; 4],
}

const fn term(coefficient: f64, eccentricity_power: i32, multipliers: [i8; 4]) -> LunarTerm {
    LunarTerm {
        coefficient,
        eccentricity_power,
        multipliers,
    }
}

#[rustfmt::skip]
static NEW_MOON_TERMS: [LunarTerm; 25] = [
    term(-0.407_20, 0, [ 0,  1,  0, 0]),
    term( 0.172_41, 1, [ 1,  0,  0, 0]),
    term( 0.016_08, 0, [ 0,  2,  0, 0]),
    term( 0.010_39, 0, [ 0,  0,  2, 0]),
    term( 0.007_39, 1, [-1,  1,  0, 0]),
    term(-0.005_14, 1, [ 1,  1,  0, 0]),
    term( 0.002_08, 2, [ 2,  0,  0, 0]),
    term(-0.001_11, 0, [ 0,  1, -2, 0]),
    term(-0.000_57, 0, [ 0,  1,  2, 0]),
    term( 0.000_56, 1, [ 1,  2,  0, 0]),
    term(-0.000_42, 0, [ 0,  3,  0, 0]),
    term( 0.000_42, 1, [ 1,  0,  2, 0]),
    term( 0.000_38, 1, [ 1,  0, -2, 0]),
    term(-0.000_24, 1, [-1,  2,  0, 0]),
    term(-0.000_17, 0, [ 0,  0,  0, 1]),
    term(-0.000_07, 0, [ 2,  1,  0, 0]),
    term( 0.000_04, 0, [ 0,  2, -2, 0]),
    term( 0.000_04, 0, [ 3,  0,  0, 0]),
    term( 0.000_03, 0, [ 1,  1, -2, 0]),
    term( 0.000_03, 0, [ 0,  2,  2, 0]),
    term(-0.000_03, 0, [ 1,  1,  2, 0]),
    term( 0.000_03, 0, [-1,  1,  2, 0]),
    term(-0.000_02, 0, [-1,  1, -2, 0]),
    term(-0.000_02, 0, [ 1,  3,  0, 0]),
    term( 0.000_02, 0, [ 0,  4,  0, 0]),
];

#[rustfmt::skip]
static FULL_MOON_TERMS: [LunarTerm; 25] = [
    term(-0.406_14, 0, [ 0,  1,  0, 0]),
    term( 0.173_02, 1, [ 1,  0,  0, 0]),
    term( 0.016_14, 0, [ 0,  2,  0, 0]),
    term( 0.010_43, 0, [ 0,  0,  2, 0]),
    term( 0.007_34, 1, [-1,  1,  0, 0]),
    term(-0.005_15, 1, [ 1,  1,  0, 0]),
    term( 0.002_09, 2, [ 2,  0,  0, 0]),
    term(-0.001_11, 0, [ 0,  1, -2, 0]),
    term(-0.000_57, 0, [ 0,  1,  2, 0]),
    term( 0.000_56, 1, [ 1,  2,  0, 0]),
    term(-0.000_42, 0, [ 0,  3,  0, 0]),
    term( 0.000_42, 1, [ 1,  0,  2, 0]),
    term( 0.000_38, 1, [ 1,  0, -2, 0]),
    term(-0.000_24, 1, [-1,  2,  0, 0]),
    term(-0.000_17, 0, [ 0,  0,  0, 1]),
    term(-0.000_07, 0, [ 2,  1,  0, 0]),
    term( 0.000_04, 0, [ 0,  2, -2, 0]),
    term( 0.000_04, 0, [ 3,  0,  0, 0]),
    term( 0.000_03, 0, [ 1,  1, -2, 0]),
    term( 0.000_03, 0, [ 0,  2,  2, 0]),
    term(-0.000_03, 0, [ 1,  1,  2, 0]),
    term( 0.000_03, 0, [-1,  1,  2, 0]),
    term(-0.000_02, 0, [-1,  1, -2, 0]),
    term(-0.000_02, 0, [ 1,  3,  0, 0]),
    term( 0.000_02, 0, [ 0,  4,  0, 0]),
];

#[rustfmt::skip]
static QUARTER_TERMS: [LunarTerm; 25] = [
    term(-0.628_01, 0, [ 0,  1,  0, 0]),
    term( 0.171_72, 1, [ 1,  0,  0, 0]),
    term(-0.011_83, 1, [ 1,  1,  0, 0]),
    term( 0.008_62, 0, [ 0,  2,  0, 0]),
    term( 0.008_04, 0, [ 0,  0,  2, 0]),
    term( 0.004_54, 1, [-1,  1,  0, 0]),
    term( 0.002_04, 2, [ 2,  0,  0, 0]),
    term(-0.001_80, 0, [ 0,  1, -2, 0]),
    term(-0.000_70, 0, [ 0,  1,  2, 0]),
    term(-0.000_40, 0, [ 0,  3,  0, 0]),
    term(-0.000_34, 1, [-1,  2,  0, 0]),
    term( 0.000_32, 1, [ 1,  0,  2, 0]),
    term( 0.000_32, 1, [ 1,  0, -2, 0]),
    term(-0.000_28, 2, [ 2,  1,  0, 0]),
    term( 0.000_27, 1, [ 1,  2,  0, 0]),
    term(-0.000_17, 0, [ 0,  0,  0, 1]),
    term(-0.000_05, 0, [-1,  1, -2, 0]),
    term( 0.000_04, 0, [ 0,  2,  2, 0]),
    term(-0.000_04, 0, [ 1,  1,  2, 0]),
    term( 0.000_04, 0, [-2,  1,  0, 0]),
    term( 0.000_03, 0, [ 1,  1, -2, 0]),
    term( 0.000_03, 0, [ 3,  0,  0, 0]),
    term( 0.000_02, 0, [ 0,  2, -2, 0]),
    term( 0.000_02, 0, [-1,  1,  2, 0]),
    term(-0.000_02, 0, [ 1,  3,  0, 0]),
];

/// Cosine terms of the quarter-phase correction `W`.
#[rustfmt::skip]
static QUARTER_W_TERMS: [LunarTerm; 5] = [
    term(-0.000_38, 1, [ 1, 0, 0, 0]),
    term( 0.000_26, 0, [ 0, 1, 0, 0]),
    term(-0.000_02, 0, [-1, 1, 0, 0]),
    term( 0.000_02, 0, [ 1, 1, 0, 0]),
    term( 0.000_02, 0, [ 0, 0, 2, 0]),
];

/// Planetary arguments A1–A14, amplitudes in 10⁻⁶ day, argument `k`.
/// A1 carries an extra `−0.009173·T²` applied in [`planetary_correction`].
#[rustfmt::skip]
static PLANETARY_TERMS: [LinearTerm; 14] = [
    LinearTerm::new(325.0, 299.77,  0.107_408),
    LinearTerm::new(165.0, 251.88,  0.016_321),
    LinearTerm::new(164.0, 251.83, 26.651_886),
    LinearTerm::new(126.0, 349.42, 36.412_478),
    LinearTerm::new(110.0,  84.66, 18.206_239),
    LinearTerm::new( 62.0, 141.74, 53.303_771),
    LinearTerm::new( 60.0, 207.14,  2.453_732),
    LinearTerm::new( 56.0, 154.84,  7.306_860),
    LinearTerm::new( 47.0,  34.52, 27.261_239),
    LinearTerm::new( 42.0, 207.19,  0.121_824),
    LinearTerm::new( 40.0, 291.34,  1.844_379),
    LinearTerm::new( 37.0, 161.72, 24.198_154),
    LinearTerm::new( 35.0, 239.56, 25.513_099),
    LinearTerm::new( 23.0, 331.55,  3.592_518),
];

// ═══════════════════════════════════════════════════════════════════════════
// Solver
// ═══════════════════════════════════════════════════════════════════════════

/// Orbital arguments at lunation `k`.
struct LunationArguments {
    /// Earth orbit eccentricity factor `E`.
    eccentricity: f64,
    /// `[M, M′, F, Ω]` in degrees.
    angles: [f64; 4],
}

impl LunationArguments {
    fn at(k: f64, t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self {
            eccentricity: 1.0 - 0.002_516 * t - 0.000_007_4 * t2,
            angles: [
                2.553_4 + 29.105_356_69 * k - 0.000_021_8 * t2 - 0.000_000_11 * t3,
                201.564_3 + 385.816_935_28 * k + 0.010_743_8 * t2 + 0.000_012_39 * t3
                    - 0.000_000_058 * t4,
                160.710_8 + 390.670_502_74 * k - 0.001_634_1 * t2 - 0.000_002_27 * t3
                    + 0.000_000_011 * t4,
                124.774_6 - 1.563_755_80 * k + 0.002_069_1 * t2 + 0.000_002_15 * t3,
            ],
        }
    }

    fn sine_series(&self, terms: &[LunarTerm]) -> f64 {
        terms
            .iter()
            .map(|term| self.weight(term) * sin_deg(combine(&term.multipliers, &self.angles)))
            .sum()
    }

    fn cosine_series(&self, terms: &[LunarTerm]) -> f64 {
        terms
            .iter()
            .map(|term| self.weight(term) * cos_deg(combine(&term.multipliers, &self.angles)))
            .sum()
    }

    fn weight(&self, term: &LunarTerm) -> f64 {
        term.coefficient * self.eccentricity.powi(term.eccentricity_power)
    }
}

fn planetary_correction(k: f64, t: f64) -> f64 {
    // A1 is the only argument with a secular term
    let a1 = &PLANETARY_TERMS[0];
    let first = a1.amplitude * sin_deg(a1.argument(k) - 0.009_173 * t * t);
    (first + sine_sum(&PLANETARY_TERMS[1..], k)) * 1e-6
}

/// Lunation index of the new moon at or before `fractional_year`,
/// `floor((year − 2000) · 12.3685)`.
pub fn lunation_cycle(fractional_year: f64) -> i64 {
    ((fractional_year - 2000.0) * LUNATIONS_PER_YEAR).floor() as i64
}

/// Instant of `kind` in the lunation that starts near `fractional_year`.
///
/// The year selects the lunation through [`lunation_cycle`]; the returned
/// phase follows that lunation's new moon, so a quarter or full moon may fall
/// up to a month after `fractional_year`.
pub fn lunar_phase(fractional_year: f64, kind: PhaseKind) -> JulianEphemerisDay {
    lunar_phase_in_cycle(lunation_cycle(fractional_year), kind)
}

/// Instant of `kind` in lunation `cycle` (`0` is the new moon of
/// 2000 January 6).
pub fn lunar_phase_in_cycle(cycle: i64, kind: PhaseKind) -> JulianEphemerisDay {
    let k = cycle as f64 + kind.offset();
    let t = k / 1_236.85;
    let t2 = t * t;

    let mean = 2_451_550.097_65 + SYNODIC_MONTH * k + 0.000_133_7 * t2 - 0.000_000_150 * t2 * t
        + 0.000_000_000_73 * t2 * t2;

    let args = LunationArguments::at(k, t);
    let periodic = match kind {
        PhaseKind::NewMoon => args.sine_series(&NEW_MOON_TERMS),
        PhaseKind::FullMoon => args.sine_series(&FULL_MOON_TERMS),
        PhaseKind::FirstQuarter | PhaseKind::LastQuarter => {
            let w = 0.003_06 + args.cosine_series(&QUARTER_W_TERMS);
            let w = if kind == PhaseKind::LastQuarter { -w } else { w };
            args.sine_series(&QUARTER_TERMS) + w
        }
    };

    JulianEphemerisDay::new(mean + periodic + planetary_correction(k, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_moon_example_49a() {
        assert_eq!(lunation_cycle(1977.13), -283);
        let jde = lunar_phase(1977.13, PhaseKind::NewMoon);
        assert!((jde.value() - 2_443_192.651_18).abs() < 1e-4, "{}", jde);
    }

    #[test]
    fn phases_opening_2024() {
        // 2023 Dec 12 new moon through 2024 Jan 4 last quarter
        let expected = [2_460_291.481_35, 2_460_298.278_07, 2_460_305.523_85, 2_460_313.646_92];
        for (kind, want) in PhaseKind::ALL.into_iter().zip(expected) {
            let got = lunar_phase(2024.0, kind).value();
            assert!((got - want).abs() < 1e-3, "{kind}: {got}");
        }
    }

    #[test]
    fn cycle_index_zero_is_january_2000() {
        let jde = lunar_phase_in_cycle(0, PhaseKind::NewMoon);
        // 2000 January 6, 18h TD
        assert!((jde.value() - 2_451_550.26).abs() < 0.01, "{}", jde);
    }

    #[test]
    fn phases_are_ordered_within_a_lunation() {
        for cycle in [-3000, -283, 0, 296, 1200] {
            let instants: Vec<f64> = PhaseKind::ALL
                .iter()
                .map(|&kind| lunar_phase_in_cycle(cycle, kind).value())
                .collect();
            for pair in instants.windows(2) {
                let gap = pair[1] - pair[0];
                assert!((6.0..9.0).contains(&gap), "cycle {cycle}: {instants:?}");
            }
            let next = lunar_phase_in_cycle(cycle + 1, PhaseKind::NewMoon).value();
            assert!((next - instants[0] - SYNODIC_MONTH).abs() < 0.6);
        }
    }

    #[test]
    fn kind_selector_conversion() {
        for (i, kind) in PhaseKind::ALL.into_iter().enumerate() {
            assert_eq!(PhaseKind::try_from(i as u8), Ok(kind));
        }
        assert_eq!(
            PhaseKind::try_from(4),
            Err(AlmanacError::InvalidPhaseKind(4))
        );
    }

    #[test]
    fn phase_event_carries_cycle() {
        let ev = PhaseEvent::in_cycle(-283, PhaseKind::NewMoon);
        assert_eq!(ev.cycle, -283);
        assert_eq!(ev.instant, lunar_phase(1977.13, PhaseKind::NewMoon));
        assert_eq!(PhaseKind::FullMoon.to_string(), "Full Moon");
        assert_eq!(PhaseKind::LastQuarter.offset(), 0.75);
    }
}
