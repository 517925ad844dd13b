// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Astronomical Easter: the first Sunday after the first full moon on or
//! after the March equinox, both taken as true instants rather than the
//! ecclesiastical tables. It differs from the Church date in years such as
//! 1981 and 2019.
//!
//! The comparison is between instants, not calendar days. A full moon
//! earlier on the equinox day does not qualify: in 1981 it comes under
//! two hours before the equinox, so Easter is April 26. Comparing the
//! 0h UT of both days instead would accept it and give March 22.

use log::trace;
use qtty::Days;

use crate::error::{AlmanacError, AlmanacResult};
use crate::lunar::{lunar_phase, PhaseKind};
use crate::scales::JD;
use crate::seasons::{equinox_solstice, SeasonKind};
use crate::JulianDay;

/// Fractional-year step of the full-moon search, about half a lunation.
const SEARCH_STEP: f64 = 0.04;
const MAX_SEARCH_STEPS: usize = 64;

/// 0h UT of the astronomical Easter Sunday of `year`.
///
/// ```
/// use almanac::astronomical_easter;
///
/// let easter = astronomical_easter(2024).unwrap().to_calendar_date().unwrap();
/// assert_eq!((easter.month, easter.day), (3, 31.0));
/// ```
pub fn astronomical_easter(year: i32) -> AlmanacResult<JulianDay> {
    let equinox = equinox_solstice(year, SeasonKind::MarchEquinox);

    let mut fractional_year = f64::from(year);
    let mut steps = 0;
    let mut full_moon = lunar_phase(fractional_year, PhaseKind::FullMoon);
    while full_moon < equinox {
        steps += 1;
        if steps > MAX_SEARCH_STEPS {
            return Err(AlmanacError::SearchExhausted(MAX_SEARCH_STEPS));
        }
        fractional_year += SEARCH_STEP;
        full_moon = lunar_phase(fractional_year, PhaseKind::FullMoon);
    }
    trace!("{year}: equinox {equinox}, paschal full moon {full_moon} after {steps} steps");

    let mut sunday = full_moon.to::<JD>().midnight() + Days::new(1.0);
    while sunday.day_of_week() != 0 {
        sunday += Days::new(1.0);
    }
    Ok(sunday)
}
