// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Battery charge fraction type.
//!
//! A charge is conceptually a fraction in `[0.0, 1.0]`, but arithmetic on
//! it is deliberately unchecked: [`Charge::apply_delta`] adds the delta
//! verbatim, so repeated updates can drive the value outside the nominal
//! range. Callers wanting validation can use [`Charge::checked`] or
//! [`Charge::clamped`] instead.

use std::fmt;

use crate::error::ValueError;

/// Battery charge as a fraction of full capacity.
///
/// # Examples
///
/// ```
/// use powercast::Charge;
///
/// // A fresh battery is full
/// let mut charge = Charge::default();
/// assert_eq!(charge.percent(), 100);
///
/// // Deltas are applied without bounds enforcement
/// charge.apply_delta(-0.01);
/// assert_eq!(charge.percent(), 99);
///
/// // Validated construction is available for callers who want it
/// assert!(Charge::checked(1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Charge(f32);

impl Charge {
    /// An empty battery (0%).
    pub const EMPTY: Self = Self(0.0);

    /// A full battery (100%).
    pub const FULL: Self = Self(1.0);

    /// Creates a charge from a fraction without validation.
    ///
    /// Out-of-range fractions are stored as-is; [`Charge::percent`] will
    /// report values below 0% or above 100% accordingly.
    #[must_use]
    pub const fn new(fraction: f32) -> Self {
        Self(fraction)
    }

    /// Creates a charge, validating that the fraction lies in `[0.0, 1.0]`.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the fraction is outside the
    /// nominal range.
    pub fn checked(fraction: f32) -> Result<Self, ValueError> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(ValueError::OutOfRange {
                min: 0.0,
                max: 1.0,
                actual: fraction,
            });
        }
        Ok(Self(fraction))
    }

    /// Creates a charge, clamping the fraction to `[0.0, 1.0]`.
    #[must_use]
    pub fn clamped(fraction: f32) -> Self {
        Self(fraction.clamp(0.0, 1.0))
    }

    /// Returns the raw fraction.
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.0
    }

    /// Returns the charge as a whole percentage, rounded half away
    /// from zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn percent(&self) -> i32 {
        // Rounded percentages stay well within i32
        (self.0 * 100.0).round() as i32
    }

    /// Adds a delta to the charge without bounds enforcement.
    ///
    /// The caller is responsible for sane deltas; the resulting fraction
    /// may leave the nominal `[0.0, 1.0]` range.
    pub fn apply_delta(&mut self, delta: f32) {
        self.0 += delta;
    }

    /// Returns `true` if the fraction lies in the nominal `[0.0, 1.0]`
    /// range.
    #[must_use]
    pub fn in_range(&self) -> bool {
        (0.0..=1.0).contains(&self.0)
    }
}

impl Default for Charge {
    fn default() -> Self {
        Self::FULL
    }
}

impl fmt::Display for Charge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}
