// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power state type.
//!
//! Every device variant owns exactly one power state. Transitions are
//! explicit and idempotent: powering on an already-on device is a no-op.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Represents the power state of a device.
///
/// # Examples
///
/// ```
/// use powercast::PowerState;
///
/// let mut power = PowerState::default();
/// assert_eq!(power, PowerState::Off);
/// assert_eq!(power.status_text(), "device off");
///
/// power.power_on();
/// assert_eq!(power.status_text(), "device on");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum PowerState {
    /// Power is off.
    #[default]
    Off,
    /// Power is on.
    On,
}

impl PowerState {
    /// Sets the state to [`PowerState::On`].
    ///
    /// Idempotent: calling this on an already-on state leaves it unchanged.
    pub fn power_on(&mut self) {
        *self = Self::On;
    }

    /// Sets the state to [`PowerState::Off`].
    ///
    /// Idempotent: calling this on an already-off state leaves it unchanged.
    pub fn power_off(&mut self) {
        *self = Self::Off;
    }

    /// Returns `true` if the power is on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }

    /// Returns the short string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
        }
    }

    /// Returns the base status report for this power state.
    ///
    /// This is the authoritative status text for variants whose status
    /// source is the power state.
    #[must_use]
    pub const fn status_text(&self) -> &'static str {
        match self {
            Self::Off => "device off",
            Self::On => "device on",
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PowerState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" | "0" | "false" => Ok(Self::Off),
            "on" | "1" | "true" => Ok(Self::On),
            _ => Err(ValueError::InvalidPowerState(s.to_string())),
        }
    }
}

impl From<bool> for PowerState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_off() {
        assert_eq!(PowerState::default(), PowerState::Off);
        assert!(!PowerState::default().is_on());
    }

    #[test]
    fn transitions_are_explicit() {
        let mut power = PowerState::default();
        power.power_on();
        assert_eq!(power, PowerState::On);
        power.power_off();
        assert_eq!(power, PowerState::Off);
    }

    #[test]
    fn transitions_are_idempotent() {
        let mut power = PowerState::default();
        power.power_on();
        power.power_on();
        assert_eq!(power, PowerState::On);

        power.power_off();
        power.power_off();
        assert_eq!(power, PowerState::Off);
    }

    #[test]
    fn status_text() {
        assert_eq!(PowerState::Off.status_text(), "device off");
        assert_eq!(PowerState::On.status_text(), "device on");
    }

    #[test]
    fn power_state_from_str() {
        assert_eq!("on".parse::<PowerState>().unwrap(), PowerState::On);
        assert_eq!("OFF".parse::<PowerState>().unwrap(), PowerState::Off);
        assert_eq!("1".parse::<PowerState>().unwrap(), PowerState::On);
        assert_eq!("0".parse::<PowerState>().unwrap(), PowerState::Off);
        assert_eq!("true".parse::<PowerState>().unwrap(), PowerState::On);
        assert_eq!("false".parse::<PowerState>().unwrap(), PowerState::Off);
    }

    #[test]
    fn power_state_from_str_invalid() {
        let result = "standby".parse::<PowerState>();
        assert!(matches!(
            result.unwrap_err(),
            ValueError::InvalidPowerState(_)
        ));
    }

    #[test]
    fn power_state_from_bool() {
        assert_eq!(PowerState::from(true), PowerState::On);
        assert_eq!(PowerState::from(false), PowerState::Off);
    }

    #[test]
    fn power_state_display() {
        assert_eq!(PowerState::On.to_string(), "on");
        assert_eq!(PowerState::Off.to_string(), "off");
    }
}
