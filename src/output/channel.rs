// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Output channel type.

use std::fmt;

/// An output modality through which a device announces its status.
///
/// # Examples
///
/// ```
/// use powercast::Channel;
///
/// assert_eq!(Channel::Audio.verb(), "vocalizing");
/// assert_eq!(Channel::Video.verb(), "rendering");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Channel {
    /// Spoken output (a speaker).
    Audio,
    /// Displayed output (a screen).
    Video,
}

impl Channel {
    /// Returns the channel name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }

    /// Returns the verb used in announcement lines for this channel.
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Audio => "vocalizing",
            Self::Video => "rendering",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_names() {
        assert_eq!(Channel::Audio.as_str(), "audio");
        assert_eq!(Channel::Video.as_str(), "video");
        assert_eq!(Channel::Audio.to_string(), "audio");
    }

    #[test]
    fn channel_verbs() {
        assert_eq!(Channel::Audio.verb(), "vocalizing");
        assert_eq!(Channel::Video.verb(), "rendering");
    }
}
