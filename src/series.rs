// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Shared evaluators for the periodic correction tables.
//!
//! Two shapes of term cover every table in the crate:
//!
//! * terms whose argument is an integer combination of fundamental
//!   arguments (nutation, lunar phase corrections), evaluated through
//!   [`combine`];
//! * [`LinearTerm`]s `A · f(B + C·x)` with a fixed phase and rate
//!   (equinox correction, lunar planetary arguments).

use crate::angle::{cos_deg, sin_deg};

/// Integer linear combination `Σ kᵢ·aᵢ` of fundamental arguments, in degrees.
#[inline]
pub(crate) fn combine<const N: usize>(multipliers: &[i8; N], arguments: &[f64; N]) -> f64 {
    multipliers
        .iter()
        .zip(arguments)
        .map(|(&k, &a)| f64::from(k) * a)
        .sum()
}

/// A term `amplitude · f(phase + rate·x)` with angles in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct LinearTerm {
    pub amplitude: f64,
    pub phase: f64,
    pub rate: f64,
}

impl LinearTerm {
    pub const fn new(amplitude: f64, phase: f64, rate: f64) -> Self {
        Self {
            amplitude,
            phase,
            rate,
        }
    }

    /// The term's argument at `x`, in degrees.
    #[inline]
    pub fn argument(&self, x: f64) -> f64 {
        self.phase + self.rate * x
    }
}

/// `Σ A·cos(B + C·x)`.
pub(crate) fn cosine_sum(terms: &[LinearTerm], x: f64) -> f64 {
    terms
        .iter()
        .map(|t| t.amplitude * cos_deg(t.argument(x)))
        .sum()
}

/// `Σ A·sin(B + C·x)`.
pub(crate) fn sine_sum(terms: &[LinearTerm], x: f64) -> f64 {
    terms
        .iter()
        .map(|t| t.amplitude * sin_deg(t.argument(x)))
        .sum()
}
