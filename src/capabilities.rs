// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device capability declarations.
//!
//! A capability is a named behavioral facet a device may or may not
//! possess: battery, audio output, video output. Every device implicitly
//! has the power capability. The capability set is fixed per variant at
//! construction time, not runtime-configurable.

use crate::output::Channel;

/// Capabilities of a device variant.
///
/// Describes which facets a device combines. Presets exist for the three
/// observed variant shapes; arbitrary combinations can be assembled with
/// [`CapabilitiesBuilder`].
///
/// # Examples
///
/// ```
/// use powercast::{Capabilities, Channel};
///
/// let caps = Capabilities::battery_audio_video();
/// assert!(caps.battery);
/// assert_eq!(caps.channels(), vec![Channel::Audio, Channel::Video]);
///
/// let speaker = Capabilities::audio_only();
/// assert!(!speaker.battery);
/// assert_eq!(speaker.channels(), vec![Channel::Audio]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
// Each boolean is an independent device facet; combinations are free-form.
#[allow(clippy::struct_excessive_bools)]
pub struct Capabilities {
    /// Announces status through the audio channel.
    pub audio: bool,

    /// Announces status through the video channel.
    pub video: bool,

    /// Carries a battery (charge level and charging flag).
    pub battery: bool,
}

impl Capabilities {
    /// Creates capabilities for an audio-only, mains-powered device.
    #[must_use]
    pub const fn audio_only() -> Self {
        Self {
            audio: true,
            video: false,
            battery: false,
        }
    }

    /// Creates capabilities for an audio+video, mains-powered device.
    #[must_use]
    pub const fn audio_video() -> Self {
        Self {
            audio: true,
            video: true,
            battery: false,
        }
    }

    /// Creates capabilities for a battery-powered audio+video device.
    #[must_use]
    pub const fn battery_audio_video() -> Self {
        Self {
            audio: true,
            video: true,
            battery: true,
        }
    }

    /// Returns the declared output channels in announcement order.
    ///
    /// The order is fixed: audio first, then video.
    #[must_use]
    pub fn channels(&self) -> Vec<Channel> {
        let mut channels = Vec::with_capacity(2);
        if self.audio {
            channels.push(Channel::Audio);
        }
        if self.video {
            channels.push(Channel::Video);
        }
        channels
    }

    /// Returns `true` if the given channel is declared.
    #[must_use]
    pub const fn supports(&self, channel: Channel) -> bool {
        match channel {
            Channel::Audio => self.audio,
            Channel::Video => self.video,
        }
    }

    /// Returns `true` if at least one output channel is declared.
    #[must_use]
    pub const fn has_output_channel(&self) -> bool {
        self.audio || self.video
    }

    /// Returns `true` if the device carries a battery.
    #[must_use]
    pub const fn has_battery(&self) -> bool {
        self.battery
    }
}

/// Builder for creating custom capability sets.
#[derive(Debug, Default)]
pub struct CapabilitiesBuilder {
    inner: Capabilities,
}

impl CapabilitiesBuilder {
    /// Creates a new builder with no capabilities declared.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the audio output channel.
    #[must_use]
    pub const fn with_audio(mut self) -> Self {
        self.inner.audio = true;
        self
    }

    /// Declares the video output channel.
    #[must_use]
    pub const fn with_video(mut self) -> Self {
        self.inner.video = true;
        self
    }

    /// Declares the battery capability.
    #[must_use]
    pub const fn with_battery(mut self) -> Self {
        self.inner.battery = true;
        self
    }

    /// Builds the capabilities.
    #[must_use]
    pub const fn build(self) -> Capabilities {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capabilities_are_empty() {
        let caps = Capabilities::default();
        assert!(!caps.audio);
        assert!(!caps.video);
        assert!(!caps.battery);
        assert!(!caps.has_output_channel());
        assert!(caps.channels().is_empty());
    }

    #[test]
    fn preset_shapes() {
        let speaker = Capabilities::audio_only();
        assert!(speaker.audio && !speaker.video && !speaker.battery);

        let tv = Capabilities::audio_video();
        assert!(tv.audio && tv.video && !tv.battery);

        let reader = Capabilities::battery_audio_video();
        assert!(reader.audio && reader.video && reader.battery);
    }

    #[test]
    fn channels_are_audio_then_video() {
        assert_eq!(
            Capabilities::audio_video().channels(),
            vec![Channel::Audio, Channel::Video]
        );
        assert_eq!(Capabilities::audio_only().channels(), vec![Channel::Audio]);

        let video_only = CapabilitiesBuilder::new().with_video().build();
        assert_eq!(video_only.channels(), vec![Channel::Video]);
    }

    #[test]
    fn supports_channel() {
        let caps = Capabilities::audio_only();
        assert!(caps.supports(Channel::Audio));
        assert!(!caps.supports(Channel::Video));
    }

    #[test]
    fn builder_pattern() {
        let caps = CapabilitiesBuilder::new()
            .with_video()
            .with_battery()
            .build();

        assert!(!caps.audio);
        assert!(caps.video);
        assert!(caps.battery);
        assert!(caps.has_output_channel());
        assert!(caps.has_battery());
    }
}
