// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Battery state tracking.
//!
//! A battery device may be "off" and unplugged but still function:
//! charging is independent of the power switch, and either flag may be
//! set in any combination.

use crate::types::{Charge, PowerState};

/// Tracked battery state of a device.
///
/// Holds the charging flag and the charge fraction. A fresh battery is
/// full and not charging.
///
/// # Status text
///
/// The battery computes the complete status report itself, consulting the
/// power state read-only rather than merging two independently generated
/// strings. This is what lets a battery-bearing variant designate the
/// battery as its single authoritative status source.
///
/// # Examples
///
/// ```
/// use powercast::{BatteryState, PowerState};
///
/// let mut battery = BatteryState::new();
/// assert_eq!(
///     battery.status_text(PowerState::Off),
///     "device off, battery life at 100%"
/// );
///
/// battery.plug();
/// battery.update_charge(-0.01);
/// assert_eq!(
///     battery.status_text(PowerState::On),
///     "battery life at 99%, and charging"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct BatteryState {
    charging: bool,
    charge: Charge,
}

impl BatteryState {
    /// Creates a new battery state: full charge, not charging.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a battery state with the given initial charge.
    #[must_use]
    pub fn with_charge(charge: Charge) -> Self {
        Self {
            charging: false,
            charge,
        }
    }

    /// Marks the battery as plugged in (charging).
    pub fn plug(&mut self) {
        self.charging = true;
    }

    /// Marks the battery as unplugged (not charging).
    pub fn unplug(&mut self) {
        self.charging = false;
    }

    /// Sets the charging flag directly.
    pub fn set_charging(&mut self, charging: bool) {
        self.charging = charging;
    }

    /// Returns `true` if the battery is charging.
    #[must_use]
    pub const fn is_charging(&self) -> bool {
        self.charging
    }

    /// Returns the current charge.
    #[must_use]
    pub const fn charge(&self) -> Charge {
        self.charge
    }

    /// Applies a charge delta without bounds enforcement.
    ///
    /// The caller is responsible for sane deltas. A resulting charge
    /// outside the nominal `[0.0, 1.0]` range is logged but not rejected.
    pub fn update_charge(&mut self, delta: f32) {
        self.charge.apply_delta(delta);
        if !self.charge.in_range() {
            tracing::warn!(
                charge = self.charge.value(),
                delta,
                "charge left nominal range after update"
            );
        }
    }

    /// Returns the battery status report, consulting the power state
    /// read-only.
    ///
    /// The report always contains `"battery life at {p}%"` with the charge
    /// rounded to a whole percent. It is prefixed with `"device off, "`
    /// when the device is powered off and suffixed with `", and charging"`
    /// when the battery is charging.
    #[must_use]
    pub fn status_text(&self, power: PowerState) -> String {
        let mut status = format!("battery life at {}%", self.charge.percent());
        if !power.is_on() {
            status = format!("device off, {status}");
        }
        if self.charging {
            status.push_str(", and charging");
        }
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_battery_is_full_and_not_charging() {
        let battery = BatteryState::new();
        assert!(!battery.is_charging());
        assert_eq!(battery.charge(), Charge::FULL);
    }

    #[test]
    fn plug_and_unplug_toggle_charging() {
        let mut battery = BatteryState::new();
        battery.plug();
        assert!(battery.is_charging());
        battery.unplug();
        assert!(!battery.is_charging());
    }

    #[test]
    fn status_text_off_prefix() {
        let battery = BatteryState::new();
        assert_eq!(
            battery.status_text(PowerState::Off),
            "device off, battery life at 100%"
        );
        assert_eq!(battery.status_text(PowerState::On), "battery life at 100%");
    }

    #[test]
    fn status_text_charging_suffix() {
        let mut battery = BatteryState::new();
        battery.plug();
        assert_eq!(
            battery.status_text(PowerState::On),
            "battery life at 100%, and charging"
        );
        assert_eq!(
            battery.status_text(PowerState::Off),
            "device off, battery life at 100%, and charging"
        );
    }

    #[test]
    fn status_text_reflects_charge_updates() {
        let mut battery = BatteryState::new();
        battery.update_charge(-0.01);
        assert_eq!(battery.status_text(PowerState::On), "battery life at 99%");
    }

    #[test]
    fn update_charge_is_unchecked() {
        let mut battery = BatteryState::new();
        battery.update_charge(0.25);
        assert_eq!(battery.status_text(PowerState::On), "battery life at 125%");

        battery.update_charge(-2.0);
        assert_eq!(battery.status_text(PowerState::On), "battery life at -75%");
    }

    #[test]
    fn with_charge_sets_initial_charge() {
        let battery = BatteryState::with_charge(Charge::new(0.5));
        assert_eq!(battery.status_text(PowerState::On), "battery life at 50%");
    }
}
