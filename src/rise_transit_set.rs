// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Rising, transit and setting (Meeus ch. 15).
//!
//! The solver takes the body's apparent position at 0h Dynamical Time on
//! the day before, the day of, and the day after the date of interest, and
//! returns the three events as fractions of the UT day. Each event starts
//! from a closed-form estimate and receives one correction step by default
//! (accuracy about a minute); [`RiseTransitSetOptions::corrections`] runs
//! more.
//!
//! ```
//! use almanac::{sun_rise_transit_set, JulianDay, Observer};
//!
//! // London, 2024 October 1
//! let london = Observer::new(0.1278, 51.5074);
//! let day = sun_rise_transit_set(&london, JulianDay::new(2_460_584.5)).unwrap();
//! assert!(day.rise < day.transit && day.transit < day.set);
//! ```

use log::{debug, trace};
use qtty::*;

use crate::angle::{acos_deg, asin_deg, cos_deg, normalize_180, normalize_unit, sin_deg, ClockTime};
use crate::coords::{EquatorialCoordinate, Observer};
use crate::error::{AlmanacError, AlmanacResult};
use crate::sidereal::apparent_sidereal_time;
use crate::solar::solar_coordinates;
use crate::JulianDay;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sidereal degrees gained per UT day fraction.
const SIDEREAL_RATE: f64 = 360.985_647;

/// Why a body has no rise or set on the requested day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NoEventReason {
    /// Circumpolar: the body stays above the threshold altitude.
    AlwaysAbove,
    /// The body never reaches the threshold altitude.
    AlwaysBelow,
    /// Rejected by [`FeasibilityGuard::Legacy`].
    LegacyGuard,
}

impl std::fmt::Display for NoEventReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            NoEventReason::AlwaysAbove => "body stays above the threshold altitude",
            NoEventReason::AlwaysBelow => "body stays below the threshold altitude",
            NoEventReason::LegacyGuard => "rejected by the legacy feasibility check",
        })
    }
}

/// Geometric altitude of the body's centre at the instant of rise or set.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StandardAltitude {
    /// Upper limb on the horizon with mean refraction, −0°50′.
    Sun,
    /// Point source with mean refraction, −0°34′.
    StarOrPlanet,
    /// Mean value for the Moon, +0.125°.
    Moon,
    Custom(Degrees),
}

impl StandardAltitude {
    pub fn degrees(&self) -> Degrees {
        match self {
            StandardAltitude::Sun => Degrees::new(-0.833_3),
            StandardAltitude::StarOrPlanet => Degrees::new(-0.566_7),
            StandardAltitude::Moon => Degrees::new(0.125),
            StandardAltitude::Custom(h0) => *h0,
        }
    }
}

impl From<Degrees> for StandardAltitude {
    fn from(h0: Degrees) -> Self {
        StandardAltitude::Custom(h0)
    }
}

/// Which test decides that the body never crosses the threshold.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FeasibilityGuard {
    /// `|cos H₀| > 1`, with `cos H₀ = (sin h₀ − sin φ sin δ) / (cos φ cos δ)`.
    #[default]
    Standard,
    /// `|−sin φ · sin δ / cos φ · cos δ| > 1` first, evaluated left to
    /// right as `|tan φ · sin δ · cos δ|`, then [`FeasibilityGuard::Standard`].
    ///
    /// The first check ignores `h₀` and only trips above about 63.4° of
    /// latitude. It is kept for callers that must reproduce results of older
    /// almanacs built on it.
    Legacy,
}

/// Solver configuration.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RiseTransitSetOptions {
    pub guard: FeasibilityGuard,
    /// Number of correction passes applied to the first estimates.
    pub corrections: u32,
    /// ΔT used to place the UT event instants on the TD sample axis.
    pub delta_t: Seconds,
}

impl Default for RiseTransitSetOptions {
    fn default() -> Self {
        Self {
            guard: FeasibilityGuard::Standard,
            corrections: 1,
            delta_t: Seconds::new(0.0),
        }
    }
}

/// The three events of one day, as fractions of the UT day in `[0, 1)`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RiseTransitSet {
    /// 0h UT of the day the fractions refer to.
    pub day: JulianDay,
    pub transit: f64,
    pub rise: f64,
    pub set: f64,
}

impl RiseTransitSet {
    pub fn transit_instant(&self) -> JulianDay {
        self.day + Days::new(self.transit)
    }

    pub fn rise_instant(&self) -> JulianDay {
        self.day + Days::new(self.rise)
    }

    pub fn set_instant(&self) -> JulianDay {
        self.day + Days::new(self.set)
    }

    /// UT clock readings `(rise, transit, set)`.
    pub fn clock_times(&self) -> (ClockTime, ClockTime, ClockTime) {
        (
            ClockTime::from_day_fraction(self.rise),
            ClockTime::from_day_fraction(self.transit),
            ClockTime::from_day_fraction(self.set),
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Solver
// ═══════════════════════════════════════════════════════════════════════════

/// Three daily samples of one coordinate, interpolated with Meeus eq. 3.3.
#[derive(Debug, Copy, Clone)]
struct DailySamples([f64; 3]);

impl DailySamples {
    /// Value at `n` days from the middle sample.
    fn at(&self, n: f64) -> f64 {
        let [y1, y2, y3] = self.0;
        let a = y2 - y1;
        let b = y3 - y2;
        y2 + n / 2.0 * (a + b + n * (b - a))
    }
}

/// Position of the body at a trial event instant.
struct LocalState {
    hour_angle: f64,
    altitude: f64,
    declination: f64,
}

fn local_state(
    m: f64,
    theta0: f64,
    observer: &Observer,
    ra: &DailySamples,
    dec: &DailySamples,
    delta_t: Seconds,
) -> LocalState {
    let theta = theta0 + SIDEREAL_RATE * m;
    let n = m + delta_t.to::<Day>().value();
    let alpha = ra.at(n);
    let delta = dec.at(n);
    let hour_angle = normalize_180(theta - observer.longitude.value() - alpha);
    let phi = observer.latitude.value();
    let altitude = asin_deg(
        sin_deg(phi) * sin_deg(delta) + cos_deg(phi) * cos_deg(delta) * cos_deg(hour_angle),
    );
    LocalState {
        hour_angle,
        altitude,
        declination: delta,
    }
}

/// Rise, transit and set of a body with the default options.
///
/// `day` is taken to its 0h UT. `positions` holds the apparent right
/// ascension and declination at 0h TD of `day − 1`, `day` and `day + 1`.
pub fn rise_transit_set(
    observer: &Observer,
    h0: StandardAltitude,
    day: JulianDay,
    positions: &[EquatorialCoordinate; 3],
) -> AlmanacResult<RiseTransitSet> {
    let options = RiseTransitSetOptions::default();
    rise_transit_set_with(observer, h0, day, positions, &options)
}

/// Rise, transit and set of a body with explicit solver options.
pub fn rise_transit_set_with(
    observer: &Observer,
    h0: StandardAltitude,
    day: JulianDay,
    positions: &[EquatorialCoordinate; 3],
    options: &RiseTransitSetOptions,
) -> AlmanacResult<RiseTransitSet> {
    let day = day.midnight();
    let h0 = h0.degrees().value();
    let phi = observer.latitude.value();
    let longitude = observer.longitude.value();

    // unwrap right ascension around the middle sample across 0h
    let alpha2 = positions[1].right_ascension.value();
    let ra = DailySamples(
        positions.map(|p| alpha2 + normalize_180(p.right_ascension.value() - alpha2)),
    );
    let dec = DailySamples(positions.map(|p| p.declination.value()));
    let delta2 = dec.0[1];

    if options.guard == FeasibilityGuard::Legacy {
        // left to right: tan φ · sin δ · cos δ
        let legacy = (-sin_deg(phi) * sin_deg(delta2) / cos_deg(phi) * cos_deg(delta2)).abs();
        if legacy > 1.0 {
            debug!("no rise/set at latitude {phi}°, δ = {delta2}°: legacy guard {legacy:.6}");
            return Err(AlmanacError::NoEvent(NoEventReason::LegacyGuard));
        }
    }

    let cos_h0 = (sin_deg(h0) - sin_deg(phi) * sin_deg(delta2)) / (cos_deg(phi) * cos_deg(delta2));
    if !(-1.0..=1.0).contains(&cos_h0) {
        let reason = if cos_h0 < -1.0 {
            NoEventReason::AlwaysAbove
        } else {
            NoEventReason::AlwaysBelow
        };
        debug!("no rise/set at latitude {phi}°, δ = {delta2}°: cos H0 = {cos_h0:.6} ({reason})");
        return Err(AlmanacError::NoEvent(reason));
    }
    let big_h0 = acos_deg(cos_h0);

    let theta0 = apparent_sidereal_time(day).value();
    let transit0 = normalize_unit((ra.0[1] + longitude - theta0) / 360.0);
    let mut m = [
        transit0,
        normalize_unit(transit0 - big_h0 / 360.0),
        normalize_unit(transit0 + big_h0 / 360.0),
    ];
    trace!("θ0 = {theta0}, H0 = {big_h0}, first estimates (transit, rise, set) = {m:?}");

    for pass in 0..options.corrections {
        let transit = local_state(m[0], theta0, observer, &ra, &dec, options.delta_t);
        m[0] -= transit.hour_angle / 360.0;

        for event in &mut m[1..] {
            let state = local_state(*event, theta0, observer, &ra, &dec, options.delta_t);
            let step = (state.altitude - h0)
                / (360.0 * cos_deg(state.declination) * cos_deg(phi) * sin_deg(state.hour_angle));
            if step.is_finite() {
                *event += step;
            }
        }
        trace!("pass {pass}: (transit, rise, set) = {m:?}");
    }

    let [transit, rise, set] = m.map(day_fraction);
    Ok(RiseTransitSet {
        day,
        transit,
        rise,
        set,
    })
}

/// Reduces to `[0, 1)`; `rem_euclid` rounds tiny negatives up to `1.0`.
fn day_fraction(x: f64) -> f64 {
    let r = x.rem_euclid(1.0);
    if r >= 1.0 {
        0.0
    } else {
        r
    }
}

/// Sunrise, solar transit and sunset for `observer` on the UT day of `day`.
///
/// The Sun is sampled at 0h TD of the three surrounding days and ΔT comes
/// from the crate's model.
pub fn sun_rise_transit_set(observer: &Observer, day: JulianDay) -> AlmanacResult<RiseTransitSet> {
    let day = day.midnight();
    let positions = [-1.0, 0.0, 1.0].map(|offset| {
        solar_coordinates((day + Days::new(offset)).as_dynamical())
    });
    let options = RiseTransitSetOptions {
        delta_t: day.delta_t(),
        ..RiseTransitSetOptions::default()
    };
    rise_transit_set_with(observer, StandardAltitude::Sun, day, &positions, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Venus at Boston, 1988 March 20, Meeus example 15.a.
    fn example_15a() -> (Observer, JulianDay, [EquatorialCoordinate; 3]) {
        (
            Observer::new(71.083_3, 42.333_3),
            JulianDay::new(2_447_240.5),
            [
                EquatorialCoordinate::new(40.680_21, 18.047_61),
                EquatorialCoordinate::new(41.731_29, 18.440_92),
                EquatorialCoordinate::new(42.782_04, 18.827_42),
            ],
        )
    }

    fn with_delta_t(seconds: f64) -> RiseTransitSetOptions {
        RiseTransitSetOptions {
            delta_t: Seconds::new(seconds),
            ..RiseTransitSetOptions::default()
        }
    }

    fn venus_at_boston(options: &RiseTransitSetOptions) -> RiseTransitSet {
        let (boston, day, venus) = example_15a();
        let h0 = StandardAltitude::StarOrPlanet;
        rise_transit_set_with(&boston, h0, day, &venus, options).unwrap()
    }

    #[test]
    fn venus_at_boston_example_15a() {
        let r = venus_at_boston(&with_delta_t(56.0));
        assert!(
            (r.transit - 0.819_796).abs() < 1e-5,
            "transit {}",
            r.transit
        );
        assert!((r.rise - 0.517_656).abs() < 1e-5, "rise {}", r.rise);
        assert!((r.set - 0.121_295).abs() < 1e-5, "set {}", r.set);

        // rise 12h25m, transit 19h40m, set 2h54m UT
        let (rise, transit, set) = r.clock_times();
        assert_eq!((rise.hours, rise.minutes), (12, 25));
        assert_eq!((transit.hours, transit.minutes), (19, 40));
        assert_eq!((set.hours, set.minutes), (2, 54));
    }

    #[test]
    fn further_corrections_barely_move_the_result() {
        let once = venus_at_boston(&with_delta_t(56.0));
        let thrice = venus_at_boston(&RiseTransitSetOptions {
            corrections: 3,
            ..with_delta_t(56.0)
        });
        let pairs = [
            (once.rise, thrice.rise),
            (once.transit, thrice.transit),
            (once.set, thrice.set),
        ];
        for (a, b) in pairs {
            assert!((a - b).abs() < 1e-5, "{a} vs {b}");
        }
    }

    #[test]
    fn zero_corrections_return_the_first_estimates() {
        let r = venus_at_boston(&RiseTransitSetOptions {
            corrections: 0,
            ..RiseTransitSetOptions::default()
        });
        // Meeus: m0 = 0.81965, m1 = 0.51817, m2 = 0.12113
        assert!((r.transit - 0.819_65).abs() < 1e-4, "{}", r.transit);
        assert!((r.rise - 0.518_17).abs() < 1e-4, "{}", r.rise);
        assert!((r.set - 0.121_13).abs() < 1e-4, "{}", r.set);
    }

    #[test]
    fn sun_over_london() {
        let london = Observer::new(0.127_8, 51.507_4);
        let r = sun_rise_transit_set(&london, JulianDay::new(2_460_584.5)).unwrap();
        assert!((r.transit - 0.493_07).abs() < 2e-4, "transit {}", r.transit);
        assert!((r.rise - 0.251_27).abs() < 2e-4, "rise {}", r.rise);
        assert!((r.set - 0.734_21).abs() < 2e-4, "set {}", r.set);
        assert!(0.0 <= r.rise && r.rise < r.transit && r.transit < r.set && r.set < 1.0);
        assert_eq!(r.day, JulianDay::new(2_460_584.5));
        assert!((r.rise_instant().value() - 2_460_584.751_27).abs() < 2e-4);
    }

    #[test]
    fn right_ascension_wrapping_through_zero() {
        // March equinox 2024: the Sun's α goes 359° → 0.8° across the samples
        let equator = Observer::new(0.0, 0.0);
        let r = sun_rise_transit_set(&equator, JulianDay::new(2_460_389.5)).unwrap();
        assert!((r.transit - 0.505_08).abs() < 2e-4, "transit {}", r.transit);
        assert!((r.rise - 0.252_82).abs() < 2e-4, "rise {}", r.rise);
        assert!((r.set - 0.757_34).abs() < 2e-4, "set {}", r.set);
    }

    #[test]
    fn polar_day_and_night() {
        let june_solstice = JulianDay::new(2_460_482.5);
        let north = sun_rise_transit_set(&Observer::new(0.0, 80.0), june_solstice);
        assert_eq!(
            north,
            Err(AlmanacError::NoEvent(NoEventReason::AlwaysAbove))
        );
        let south = sun_rise_transit_set(&Observer::new(0.0, -80.0), june_solstice);
        assert_eq!(
            south,
            Err(AlmanacError::NoEvent(NoEventReason::AlwaysBelow))
        );
    }

    #[test]
    fn legacy_guard_rejects_what_the_standard_guard_accepts() {
        // tan 70° · sin 30° · cos 30° ≈ 1.190, while cos H0 ≈ −0.432 for h0 = 20°
        let star = [EquatorialCoordinate::new(100.0, 30.0); 3];
        let observer = Observer::new(0.0, 70.0);
        let day = JulianDay::new(2_451_544.5);
        let h0 = StandardAltitude::Custom(Degrees::new(20.0));

        assert!(rise_transit_set(&observer, h0, day, &star).is_ok());

        let legacy = RiseTransitSetOptions {
            guard: FeasibilityGuard::Legacy,
            ..RiseTransitSetOptions::default()
        };
        let r = rise_transit_set_with(&observer, h0, day, &star, &legacy);
        assert_eq!(r, Err(AlmanacError::NoEvent(NoEventReason::LegacyGuard)));
    }

    #[test]
    fn legacy_guard_evaluates_left_to_right() {
        // tan 60° · tan 30.5° ≈ 1.020, but tan 60° · sin 30.5° · cos 30.5° ≈ 0.757
        let star = [EquatorialCoordinate::new(100.0, -30.5); 3];
        let observer = Observer::new(0.0, 60.0);
        let legacy = RiseTransitSetOptions {
            guard: FeasibilityGuard::Legacy,
            ..RiseTransitSetOptions::default()
        };
        let day = JulianDay::new(2_451_544.5);
        let h0 = StandardAltitude::StarOrPlanet;
        let with_legacy = rise_transit_set_with(&observer, h0, day, &star, &legacy);
        let standard = rise_transit_set(&observer, h0, day, &star);
        assert!(with_legacy.is_ok());
        assert_eq!(with_legacy, standard);
    }

    #[test]
    fn day_fractions_stay_below_one() {
        assert_eq!(day_fraction(-1e-17), 0.0);
        assert_eq!(day_fraction(1.0), 0.0);
        assert!((day_fraction(-0.25) - 0.75).abs() < 1e-15);
        assert!((day_fraction(1.5) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn legacy_mode_still_applies_the_standard_guard() {
        // tan 60° · sin 29.7° · cos 29.7° ≈ 0.745 passes the legacy check; cos H0 ≈ −1.02
        let star = [EquatorialCoordinate::new(100.0, 29.7); 3];
        let observer = Observer::new(0.0, 60.0);
        let legacy = RiseTransitSetOptions {
            guard: FeasibilityGuard::Legacy,
            ..RiseTransitSetOptions::default()
        };
        let day = JulianDay::new(2_451_544.5);
        let r = rise_transit_set_with(&observer, StandardAltitude::Sun, day, &star, &legacy);
        assert_eq!(r, Err(AlmanacError::NoEvent(NoEventReason::AlwaysAbove)));
    }

    #[test]
    fn standard_altitudes() {
        assert_eq!(StandardAltitude::Sun.degrees(), Degrees::new(-0.833_3));
        assert_eq!(
            StandardAltitude::StarOrPlanet.degrees(),
            Degrees::new(-0.566_7)
        );
        assert_eq!(StandardAltitude::Moon.degrees(), Degrees::new(0.125));
        assert_eq!(
            StandardAltitude::from(Degrees::new(-6.0)).degrees(),
            Degrees::new(-6.0)
        );
    }

    #[test]
    fn default_options() {
        let o = RiseTransitSetOptions::default();
        assert_eq!(o.guard, FeasibilityGuard::Standard);
        assert_eq!(o.corrections, 1);
        assert_eq!(o.delta_t, Seconds::new(0.0));
    }
}
