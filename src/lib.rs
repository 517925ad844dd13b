// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Almanac
//!
//! Closed-form and periodic-series astronomy after Jean Meeus,
//! *Astronomical Algorithms*: calendar and Julian Day conversion, nutation
//! and obliquity, sidereal time, the apparent Sun, equinoxes and solstices,
//! the principal lunar phases, horizontal coordinates and rise/transit/set.
//!
//! # Core types
//!
//! - [`Time<S>`]: instant parameterised by a [`TimeScale`] marker.
//! - [`JulianDay`]: `Time<JD>`, Julian Day on the Universal Time axis.
//! - [`JulianEphemerisDay`]: `Time<JDE>`, Julian Day on the Dynamical Time axis.
//! - [`ModifiedJulianDay`]: `Time<MJD>`.
//! - [`CalendarDate`]: year, month and fractional day on the Julian or
//!   Gregorian calendar.
//! - [`EquatorialCoordinate`], [`HorizontalCoordinate`], [`Observer`].
//!
//! # Time scales
//!
//! | Marker | Scale | Relation to JD (UT) |
//! |--------|-------|---------------------|
//! | [`JD`] | Julian Day | identity |
//! | [`JDE`] | Julian Ephemeris Day | `JD + ΔT` |
//! | [`MJD`] | Modified Julian Day | `JD − 2 400 000.5` |
//!
//! ΔT comes from a piecewise historical model: [`Time::<JD>::delta_t`](Time::delta_t).
//!
//! # Conventions
//!
//! Angles are degrees. Observer longitude is positive **west**, azimuth is
//! measured from the **south**. Series that Meeus states in Dynamical Time
//! take a [`JulianEphemerisDay`]; sidereal time and the horizontal transform
//! take a [`JulianDay`].
//!
//! ```
//! use almanac::{equinox_solstice, JulianDay, SeasonKind, JD};
//!
//! let solstice = equinox_solstice(2024, SeasonKind::JuneSolstice);
//! let ut: JulianDay = solstice.to::<JD>();
//! let date = ut.to_calendar_date().unwrap();
//! assert_eq!((date.year, date.month, date.day.floor()), (2024, 6, 20.0));
//! ```

mod angle;
mod calendar;
mod coords;
mod delta_t;
mod easter;
mod error;
pub(crate) mod instant;
mod julian_day;
mod lunar;
mod nutation;
mod rise_transit_set;
pub(crate) mod scales;
mod seasons;
mod series;
mod sidereal;
mod solar;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use angle::{
    acos_deg, asin_deg, atan2_deg, cos_deg, normalize_180, normalize_360, normalize_unit, sin_deg,
    tan_deg, ClockTime, Dms,
};
pub use calendar::{
    days_in_month, february_days, first_weekday_of_year, month_from_index, to_julian_day,
    zeller_day_of_week, Calendar, CalendarDate,
};
pub use coords::{
    horizontal_coordinates, local_hour_angle, EquatorialCoordinate, HorizontalCoordinate, Observer,
};
pub use easter::astronomical_easter;
pub use error::{AlmanacError, AlmanacResult};
pub use instant::{Time, TimeScale};
pub use julian_day::weekday_from_index;
pub use lunar::{
    lunar_phase, lunar_phase_in_cycle, lunation_cycle, PhaseEvent, PhaseKind, SYNODIC_MONTH,
};
pub use nutation::{
    mean_obliquity, nutation, obliquity, FundamentalArguments, Nutation, NutationObliquity,
    Obliquity,
};
pub use rise_transit_set::{
    rise_transit_set, rise_transit_set_with, sun_rise_transit_set, FeasibilityGuard, NoEventReason,
    RiseTransitSet, RiseTransitSetOptions, StandardAltitude,
};
pub use scales::{JD, JDE, MJD};
pub use seasons::{equinox_solstice, mean_equinox_solstice, SeasonEvent, SeasonKind};
pub use sidereal::{apparent_sidereal_time, local_sidereal_time, mean_sidereal_time};
pub use solar::{solar_coordinates, solar_position, SolarPosition};

// ── Type aliases ──────────────────────────────────────────────────────────

/// Julian Day on the Universal Time axis.
pub type JulianDay = Time<JD>;

/// Julian Ephemeris Day, the Julian Day on the Dynamical Time axis.
///
/// Convert from a [`JulianDay`] with `.to::<JDE>()` (applies ΔT) or
/// [`as_dynamical`](Time::as_dynamical) (same number, no ΔT).
pub type JulianEphemerisDay = Time<JDE>;

/// Modified Julian Day, `JD − 2 400 000.5`.
pub type ModifiedJulianDay = Time<MJD>;
