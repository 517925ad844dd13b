// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every fallible almanac operation.
//!
//! All failures are ordinary, recoverable outcomes: a malformed calendar
//! date, a Julian Day outside the calendar domain, an out-of-range selector,
//! or a body that never crosses its altitude threshold on the requested day.

use thiserror::Error;

use crate::rise_transit_set::NoEventReason;

/// Errors produced by the almanac computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlmanacError {
    /// The calendar date is malformed or falls in the 1582 Gregorian gap.
    #[error("invalid calendar date {year}-{month:02}-{day}: {reason}")]
    InvalidDate {
        year: i32,
        month: u8,
        day: f64,
        reason: &'static str,
    },

    /// Calendar conversion was requested for a negative Julian Day.
    #[error("calendar conversion is undefined for negative Julian Day {0}")]
    UnsupportedDomain(f64),

    /// Season selector outside `0..=3`.
    #[error("invalid season selector {0}; expected 0..=3")]
    InvalidSeasonKind(u8),

    /// Lunar phase selector outside `0..=3`.
    #[error("invalid lunar phase selector {0}; expected 0..=3")]
    InvalidPhaseKind(u8),

    /// The body does not cross the altitude threshold on the given day.
    #[error("no rise or set on this day: {0}")]
    NoEvent(NoEventReason),

    /// A sexagesimal angle component is out of range.
    #[error("invalid angle: {0}")]
    InvalidAngle(&'static str),

    /// A bounded search ran out of steps.
    #[error("search did not converge after {0} steps")]
    SearchExhausted(usize),
}

/// Convenience alias for results carrying an [`AlmanacError`].
pub type AlmanacResult<T> = Result<T, AlmanacError>;

impl AlmanacError {
    pub(crate) fn invalid_date(year: i32, month: u8, day: f64, reason: &'static str) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            reason,
        }
    }

    /// `true` when the error is a rise/transit/set no-event outcome.
    pub fn is_no_event(&self) -> bool {
        matches!(self, Self::NoEvent(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_offending_input() {
        let reason = "date falls in the Gregorian reform gap";
        let err = AlmanacError::invalid_date(1582, 10, 10.0, reason);
        let msg = err.to_string();
        assert!(msg.contains("1582-10-10"), "{msg}");
        assert!(msg.contains("Gregorian"), "{msg}");

        assert_eq!(
            AlmanacError::InvalidSeasonKind(7).to_string(),
            "invalid season selector 7; expected 0..=3"
        );
        assert!(AlmanacError::UnsupportedDomain(-1.5)
            .to_string()
            .contains("-1.5"));
    }

    #[test]
    fn no_event_predicate() {
        assert!(AlmanacError::NoEvent(NoEventReason::AlwaysAbove).is_no_event());
        assert!(!AlmanacError::InvalidPhaseKind(4).is_no_event());
    }
}
