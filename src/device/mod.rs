// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device variants composed from independent capabilities.
//!
//! A [`Device`] is a record holding a power state, an optional battery
//! state, a fixed capability set, and an explicit status source
//! selection. There is no inheritance anywhere: a battery device is not a
//! subtype of a power device, it is a device that also holds battery
//! state and designates it as the authoritative status source.
//!
//! # The three observed shapes
//!
//! ```
//! use powercast::Device;
//!
//! // Mains-powered speaker, audio channel only
//! let speaker = Device::audio_only("EchoSub");
//!
//! // Mains-powered TV, audio and video channels
//! let tv = Device::audio_video("FireTV");
//!
//! // Battery-powered reader, audio and video channels
//! let reader = Device::battery_audio_video("Kindle");
//!
//! assert_eq!(speaker.status_text(), "device off");
//! assert_eq!(tv.status_text(), "device off");
//! assert_eq!(reader.status_text(), "device off, battery life at 100%");
//! ```

mod builder;
mod status_source;

pub use builder::DeviceBuilder;
pub use status_source::StatusSource;

use crate::capabilities::Capabilities;
use crate::error::{DeviceError, Result};
use crate::output::{AnnouncementSink, Channel};
use crate::state::{BatteryState, StateChange};
use crate::types::PowerState;

/// Contract for anything that can announce its status.
///
/// One announcement queries the implementor's status text and emits it
/// through every output channel it declares, then emits exactly one
/// separator. Announcing takes `&self`, so no mutation can slip in
/// between channel emissions and every line of one announcement carries
/// identical status text.
pub trait Announce {
    /// Announces the current status through every declared channel.
    fn announce(&self, sink: &mut dyn AnnouncementSink);
}

/// A consumer device composed from independent capabilities.
///
/// Every device owns exactly one [`PowerState`]. Battery-capable devices
/// additionally own a [`BatteryState`]. Which of the two backs
/// [`Device::status_text`] is the per-variant [`StatusSource`] selection,
/// fixed at construction.
///
/// # Examples
///
/// ```
/// use powercast::{Announce, Device, MemorySink};
///
/// let mut reader = Device::battery_audio_video("Kindle");
/// reader.plug().unwrap();
/// reader.update_charge(-0.01).unwrap();
///
/// let mut sink = MemorySink::new();
/// reader.announce(&mut sink);
///
/// assert_eq!(
///     sink.lines(),
///     vec![
///         "Kindle vocalizing: device off, battery life at 99%, and charging",
///         "Kindle rendering: device off, battery life at 99%, and charging",
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Device {
    name: String,
    capabilities: Capabilities,
    status_source: StatusSource,
    power: PowerState,
    battery: Option<BatteryState>,
}

impl Device {
    /// Creates an audio-only, mains-powered device.
    ///
    /// Status source: power state.
    pub fn audio_only(name: impl Into<String>) -> Self {
        Self::from_parts(
            name.into(),
            Capabilities::audio_only(),
            StatusSource::Power,
            None,
        )
    }

    /// Creates an audio+video, mains-powered device.
    ///
    /// Status source: power state.
    pub fn audio_video(name: impl Into<String>) -> Self {
        Self::from_parts(
            name.into(),
            Capabilities::audio_video(),
            StatusSource::Power,
            None,
        )
    }

    /// Creates a battery-powered audio+video device.
    ///
    /// Status source: battery state. The device still owns a power state,
    /// but its text is deliberately not reported; the battery computes
    /// the complete report, consulting power read-only.
    pub fn battery_audio_video(name: impl Into<String>) -> Self {
        Self::from_parts(
            name.into(),
            Capabilities::battery_audio_video(),
            StatusSource::Battery,
            Some(BatteryState::new()),
        )
    }

    /// Returns a builder for a custom capability composition.
    pub fn builder(name: impl Into<String>) -> DeviceBuilder {
        DeviceBuilder::new(name)
    }

    pub(crate) fn from_parts(
        name: String,
        capabilities: Capabilities,
        status_source: StatusSource,
        battery: Option<BatteryState>,
    ) -> Self {
        Self {
            name,
            capabilities,
            status_source,
            power: PowerState::default(),
            battery,
        }
    }

    // ========== Accessors ==========

    /// Returns the device name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared capability set.
    #[must_use]
    pub const fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Returns the designated status source.
    #[must_use]
    pub const fn status_source(&self) -> StatusSource {
        self.status_source
    }

    /// Returns the current power state.
    #[must_use]
    pub const fn power(&self) -> PowerState {
        self.power
    }

    /// Returns the battery state, if the device has one.
    #[must_use]
    pub const fn battery(&self) -> Option<&BatteryState> {
        self.battery.as_ref()
    }

    /// Returns `true` if the device is powered on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.power.is_on()
    }

    // ========== Power ==========

    /// Turns the device on. Idempotent.
    ///
    /// Charging is unaffected: the power switch and the plug are
    /// independent.
    pub fn power_on(&mut self) {
        tracing::debug!(device = %self.name, "powering on");
        self.power.power_on();
    }

    /// Turns the device off. Idempotent.
    pub fn power_off(&mut self) {
        tracing::debug!(device = %self.name, "powering off");
        self.power.power_off();
    }

    // ========== Battery ==========

    /// Plugs the device in, setting the battery to charging.
    ///
    /// Power is unaffected: a battery device can charge while off.
    ///
    /// # Errors
    ///
    /// Returns an unsupported-capability error if the device has no
    /// battery.
    pub fn plug(&mut self) -> Result<()> {
        tracing::debug!(device = %self.name, "plugged in");
        self.battery_mut()?.plug();
        Ok(())
    }

    /// Unplugs the device, stopping charging.
    ///
    /// # Errors
    ///
    /// Returns an unsupported-capability error if the device has no
    /// battery.
    pub fn unplug(&mut self) -> Result<()> {
        tracing::debug!(device = %self.name, "unplugged");
        self.battery_mut()?.unplug();
        Ok(())
    }

    /// Applies a charge delta to the battery without bounds enforcement.
    ///
    /// # Errors
    ///
    /// Returns an unsupported-capability error if the device has no
    /// battery.
    pub fn update_charge(&mut self, delta: f32) -> Result<()> {
        tracing::debug!(device = %self.name, delta, "updating charge");
        self.battery_mut()?.update_charge(delta);
        Ok(())
    }

    fn battery_mut(&mut self) -> Result<&mut BatteryState> {
        match self.battery.as_mut() {
            Some(battery) => Ok(battery),
            None => {
                tracing::debug!(device = %self.name, "rejected battery operation");
                Err(DeviceError::unsupported("battery").into())
            }
        }
    }

    // ========== State changes ==========

    /// Applies a state change and returns whether the state actually
    /// changed.
    ///
    /// Batches apply their changes in order; the batch reports `true` if
    /// any nested change modified state. A failing change inside a batch
    /// aborts the rest of the batch.
    ///
    /// # Errors
    ///
    /// Returns an unsupported-capability error for battery changes on a
    /// device without battery state.
    pub fn apply(&mut self, change: &StateChange) -> Result<bool> {
        match change {
            StateChange::Power(state) => {
                if self.power == *state {
                    Ok(false)
                } else {
                    self.power = *state;
                    Ok(true)
                }
            }
            StateChange::Charging(charging) => {
                let battery = self.battery_mut()?;
                if battery.is_charging() == *charging {
                    Ok(false)
                } else {
                    battery.set_charging(*charging);
                    Ok(true)
                }
            }
            StateChange::ChargeDelta(delta) => {
                let battery = self.battery_mut()?;
                let before = battery.charge();
                battery.update_charge(*delta);
                Ok(battery.charge() != before)
            }
            StateChange::Batch(changes) => {
                let mut any_changed = false;
                for c in changes {
                    if self.apply(c)? {
                        any_changed = true;
                    }
                }
                Ok(any_changed)
            }
        }
    }

    // ========== Status ==========

    /// Returns the device's authoritative status text.
    ///
    /// Dispatches on the designated [`StatusSource`]: power-sourced
    /// variants report the power text, battery-sourced variants report
    /// the battery text (which consults power read-only). A pure read.
    #[must_use]
    pub fn status_text(&self) -> String {
        match (self.status_source, self.battery.as_ref()) {
            (StatusSource::Battery, Some(battery)) => battery.status_text(self.power),
            // Battery source without battery state is rejected at
            // construction, so the power text covers everything else.
            _ => self.power.status_text().to_string(),
        }
    }

    /// Emits the status line on the audio channel.
    ///
    /// The line reads `"{name} vocalizing: {status_text}"`.
    ///
    /// # Errors
    ///
    /// Returns an unsupported-capability error if the device declares no
    /// audio channel.
    pub fn vocalize(&self, sink: &mut dyn AnnouncementSink) -> Result<()> {
        self.emit_checked(Channel::Audio, sink)
    }

    /// Emits the status line on the video channel.
    ///
    /// The line reads `"{name} rendering: {status_text}"`.
    ///
    /// # Errors
    ///
    /// Returns an unsupported-capability error if the device declares no
    /// video channel.
    pub fn render(&self, sink: &mut dyn AnnouncementSink) -> Result<()> {
        self.emit_checked(Channel::Video, sink)
    }

    fn emit_checked(&self, channel: Channel, sink: &mut dyn AnnouncementSink) -> Result<()> {
        if !self.capabilities.supports(channel) {
            tracing::debug!(device = %self.name, channel = %channel, "rejected channel emission");
            return Err(DeviceError::unsupported(channel.as_str()).into());
        }
        self.emit_line(channel, sink);
        Ok(())
    }

    fn emit_line(&self, channel: Channel, sink: &mut dyn AnnouncementSink) {
        let line = format!("{} {}: {}", self.name, channel.verb(), self.status_text());
        sink.emit(channel, &line);
    }
}

impl Announce for Device {
    fn announce(&self, sink: &mut dyn AnnouncementSink) {
        // channels() yields only declared channels, audio before video
        for channel in self.capabilities.channels() {
            self.emit_line(channel, sink);
        }
        sink.separator();
    }
}
