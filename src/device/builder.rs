// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Builder for custom device variants.
//!
//! The preset constructors on [`Device`] cover the three observed variant
//! shapes. The builder exists for everything else: arbitrary capability
//! combinations, a non-default status source, or a non-full initial
//! charge. Validation happens once, at build time.

use crate::capabilities::Capabilities;
use crate::error::{DeviceError, Result};
use crate::state::BatteryState;
use crate::types::Charge;

use super::{Device, StatusSource};

/// Builder for a [`Device`] with a custom capability composition.
///
/// # Examples
///
/// ```
/// use powercast::{Device, StatusSource};
///
/// // A video-only battery device that reports battery status
/// let frame = Device::builder("PhotoFrame")
///     .with_video()
///     .with_battery()
///     .build()
///     .unwrap();
///
/// assert_eq!(frame.status_source(), StatusSource::Battery);
/// ```
///
/// A device must declare at least one output channel:
///
/// ```
/// use powercast::Device;
///
/// assert!(Device::builder("Mute").build().is_err());
/// ```
#[derive(Debug)]
pub struct DeviceBuilder {
    name: String,
    capabilities: Capabilities,
    status_source: Option<StatusSource>,
    initial_charge: Option<Charge>,
}

impl DeviceBuilder {
    /// Creates a builder for a device with the given name and no
    /// capabilities declared.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capabilities: Capabilities::default(),
            status_source: None,
            initial_charge: None,
        }
    }

    /// Replaces the capability set wholesale.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Declares the audio output channel.
    #[must_use]
    pub const fn with_audio(mut self) -> Self {
        self.capabilities.audio = true;
        self
    }

    /// Declares the video output channel.
    #[must_use]
    pub const fn with_video(mut self) -> Self {
        self.capabilities.video = true;
        self
    }

    /// Declares the battery capability.
    #[must_use]
    pub const fn with_battery(mut self) -> Self {
        self.capabilities.battery = true;
        self
    }

    /// Overrides the status source.
    ///
    /// Without an override, battery-capable devices report battery status
    /// and everything else reports power status.
    #[must_use]
    pub const fn status_source(mut self, source: StatusSource) -> Self {
        self.status_source = Some(source);
        self
    }

    /// Sets the initial battery charge (defaults to full).
    ///
    /// Ignored unless the battery capability is declared.
    #[must_use]
    pub const fn initial_charge(mut self, charge: Charge) -> Self {
        self.initial_charge = Some(charge);
        self
    }

    /// Builds the device.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::NoOutputChannels`] if no output channel is
    /// declared, or [`DeviceError::BatterySourceWithoutBattery`] if the
    /// battery status source is selected without the battery capability.
    pub fn build(self) -> Result<Device> {
        if !self.capabilities.has_output_channel() {
            return Err(DeviceError::NoOutputChannels.into());
        }

        let source = self.status_source.unwrap_or(if self.capabilities.battery {
            StatusSource::Battery
        } else {
            StatusSource::Power
        });

        if source == StatusSource::Battery && !self.capabilities.battery {
            return Err(DeviceError::BatterySourceWithoutBattery.into());
        }

        let battery = self.capabilities.battery.then(|| {
            self.initial_charge
                .map_or_else(BatteryState::new, BatteryState::with_charge)
        });

        tracing::debug!(
            device = %self.name,
            source = %source,
            audio = self.capabilities.audio,
            video = self.capabilities.video,
            battery = self.capabilities.battery,
            "built device variant"
        );

        Ok(Device::from_parts(
            self.name,
            self.capabilities,
            source,
            battery,
        ))
    }
}
