// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! State changes are discrete mutations that can be applied to a device
//! through [`Device::apply`](crate::Device::apply). Applying a change
//! reports whether the device state actually changed, which makes the
//! idempotence of power transitions observable.
//!
//! # Examples
//!
//! ```
//! use powercast::{Device, StateChange};
//!
//! let mut device = Device::audio_only("EchoSub");
//!
//! // Apply returns true if state actually changed
//! let changed = device.apply(&StateChange::power_on()).unwrap();
//! assert!(changed);
//!
//! // Applying the same change again returns false
//! let changed = device.apply(&StateChange::power_on()).unwrap();
//! assert!(!changed);
//! ```

use crate::types::PowerState;

/// Represents a change in device state.
///
/// Battery-related changes ([`StateChange::Charging`],
/// [`StateChange::ChargeDelta`]) are rejected by devices without battery
/// capability.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum StateChange {
    /// Power state changed.
    Power(PowerState),

    /// Battery charging flag changed (plugged in or unplugged).
    Charging(bool),

    /// Battery charge delta applied (unchecked).
    ChargeDelta(f32),

    /// Multiple changes at once.
    Batch(Vec<StateChange>),
}

impl StateChange {
    /// Creates a power-on change.
    #[must_use]
    pub const fn power_on() -> Self {
        Self::Power(PowerState::On)
    }

    /// Creates a power-off change.
    #[must_use]
    pub const fn power_off() -> Self {
        Self::Power(PowerState::Off)
    }

    /// Creates a plug-in change (charging on).
    #[must_use]
    pub const fn plug() -> Self {
        Self::Charging(true)
    }

    /// Creates an unplug change (charging off).
    #[must_use]
    pub const fn unplug() -> Self {
        Self::Charging(false)
    }

    /// Creates a charge delta change.
    #[must_use]
    pub const fn charge_delta(delta: f32) -> Self {
        Self::ChargeDelta(delta)
    }

    /// Creates a batch of changes.
    #[must_use]
    pub const fn batch(changes: Vec<StateChange>) -> Self {
        Self::Batch(changes)
    }

    /// Returns `true` if this is a power state change.
    #[must_use]
    pub const fn is_power(&self) -> bool {
        matches!(self, Self::Power(_))
    }

    /// Returns `true` if this is a battery-related change.
    #[must_use]
    pub const fn is_battery(&self) -> bool {
        matches!(self, Self::Charging(_) | Self::ChargeDelta(_))
    }

    /// Returns `true` if this is a batch of changes.
    #[must_use]
    pub const fn is_batch(&self) -> bool {
        matches!(self, Self::Batch(_))
    }

    /// Returns the number of individual changes.
    ///
    /// For batch changes, returns the total count of nested changes.
    #[must_use]
    pub fn change_count(&self) -> usize {
        match self {
            Self::Batch(changes) => changes.iter().map(Self::change_count).sum(),
            _ => 1,
        }
    }
}
