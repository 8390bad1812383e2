// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status source selection.

use std::fmt;

/// The state object whose status text a device reports.
///
/// A battery-capable device holds both a power state and a battery state,
/// and both could describe power. The status source is the explicit,
/// per-variant choice of which one is authoritative, so the ambiguity is
/// resolved by a named selection instead of an inheritance accident.
///
/// # Examples
///
/// ```
/// use powercast::{Device, StatusSource};
///
/// let speaker = Device::audio_only("EchoSub");
/// assert_eq!(speaker.status_source(), StatusSource::Power);
///
/// let reader = Device::battery_audio_video("Kindle");
/// assert_eq!(reader.status_source(), StatusSource::Battery);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum StatusSource {
    /// Report the power state text ("device on" / "device off").
    Power,
    /// Report the battery state text, consulting power read-only.
    Battery,
}

impl StatusSource {
    /// Returns the source name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::Battery => "battery",
        }
    }
}

impl fmt::Display for StatusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
