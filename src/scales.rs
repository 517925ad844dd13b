// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies a day count and encodes how it relates to
//! the canonical **Julian Day in Universal Time**.
//!
//! | Marker | Description | Relation to JD (UT) |
//! |--------|-------------|---------------------|
//! | [`JD`] | Julian Day, Universal Time | identity |
//! | [`JDE`] | Julian Ephemeris Day, Dynamical Time | `JD + ΔT` |
//! | [`MJD`] | Modified Julian Day | `JD − 2 400 000.5` |

use super::delta_t::delta_t_seconds;
use super::instant::Time;
use super::instant::TimeScale;
use qtty::{Day, Days};

/// Julian Day on the Universal Time axis — the identity scale.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "JD";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd
    }
}

/// Julian Ephemeris Day — the uniform Dynamical Time axis used by the
/// solar, seasonal and lunar series.
///
/// `JDE = JD + ΔT`. The inverse is solved with a three-step fixed-point
/// iteration; `dΔT/dJD` is tiny, so the solution is immediate.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JDE;

impl TimeScale for JDE {
    const LABEL: &'static str = "JDE";

    #[inline]
    fn to_jd(jde: Days) -> Days {
        let mut jd = jde;
        for _ in 0..3 {
            let dt = delta_t_seconds(Time::<JD>::from_days(jd)).to::<Day>();
            jd = jde - dt;
        }
        jd
    }

    #[inline]
    fn from_jd(jd: Days) -> Days {
        jd + delta_t_seconds(Time::<JD>::from_days(jd)).to::<Day>()
    }
}

/// Modified Julian Day — JD minus 2 400 000.5.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct MJD;

/// The constant offset between JD and MJD: `JD = MJD + MJD_EPOCH`.
const MJD_EPOCH: Days = Days::new(2_400_000.5);

impl TimeScale for MJD {
    const LABEL: &'static str = "MJD";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + MJD_EPOCH
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - MJD_EPOCH
    }
}

// ---------------------------------------------------------------------------
// Cross-scale From/Into (generated by macro)
// ---------------------------------------------------------------------------

/// Generate pairwise `From<Time<A>> for Time<B>` implementations.
macro_rules! impl_time_conversions {
    ($single:ty) => {};

    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<Time<$first>> for Time<$rest> {
                #[inline]
                fn from(t: Time<$first>) -> Self {
                    t.to::<$rest>()
                }
            }

            impl From<Time<$rest>> for Time<$first> {
                #[inline]
                fn from(t: Time<$rest>) -> Self {
                    t.to::<$first>()
                }
            }
        )+

        impl_time_conversions!($($rest),+);
    };
}

impl_time_conversions!(JD, JDE, MJD);

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::{Second, Seconds};

    #[test]
    fn jd_mjd_roundtrip() {
        let jd = Time::<JD>::new(2_451_545.0);
        let mjd: Time<MJD> = jd.to::<MJD>();
        assert!((mjd.quantity() - Days::new(51_544.5)).abs() < Days::new(1e-10));
        let back: Time<JD> = mjd.into();
        assert!((back.quantity() - Days::new(2_451_545.0)).abs() < Days::new(1e-10));
    }

    #[test]
    fn jd_to_jde_adds_delta_t() {
        let jd = Time::<JD>::new(2_451_545.0);
        let jde: Time<JDE> = jd.into();
        let offset_secs = (jde.quantity() - jd.quantity()).to::<Second>();
        assert!(
            (offset_secs - Seconds::new(63.83)).abs() < Seconds::new(1.0),
            "JD→JDE offset = {} s, expected ~63.83 s",
            offset_secs
        );
    }

    #[test]
    fn jde_jd_roundtrip() {
        for value in [1_000_000.0, 2_200_000.0, 2_436_116.31, 2_460_000.5] {
            let jde = Time::<JDE>::new(value);
            let back: Time<JDE> = jde.to::<JD>().to::<JDE>();
            assert!(
                (back.quantity() - jde.quantity()).abs() < Days::new(1e-9),
                "roundtrip error at {value}: {} days",
                (back.quantity() - jde.quantity()).abs()
            );
        }
    }

    #[test]
    fn mjd_to_jde_chains_offsets() {
        let mjd = Time::<MJD>::new(51_544.5);
        let jde: Time<JDE> = mjd.into();
        let expected = Time::<JD>::new(2_451_545.0).to::<JDE>();
        assert!((jde.quantity() - expected.quantity()).abs() < Days::new(1e-9));
    }
}
