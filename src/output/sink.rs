// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Announcement sinks.
//!
//! A sink receives the lines a device emits when announcing its status:
//! one line per declared channel, then one separator per announcement.
//! [`ConsoleSink`] binds the line protocol to stdout; [`MemorySink`]
//! captures everything for inspection.

use super::Channel;

/// Where announcement lines go.
///
/// Implementations decide what a "line" and a "separator" mean for their
/// medium. The device guarantees the calling order: every declared
/// channel in audio-then-video order, then exactly one separator.
pub trait AnnouncementSink {
    /// Emits one announcement line on the given channel.
    fn emit(&mut self, channel: Channel, line: &str);

    /// Emits the separator that ends one announcement.
    fn separator(&mut self);
}

/// Sink that writes announcement lines to stdout.
///
/// Both channels share the console; the separator is an empty line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Creates a new console sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl AnnouncementSink for ConsoleSink {
    fn emit(&mut self, _channel: Channel, line: &str) {
        println!("{line}");
    }

    fn separator(&mut self) {
        println!();
    }
}

/// One event recorded by a [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    /// A line emitted on a channel.
    Line {
        /// The channel the line was emitted on.
        channel: Channel,
        /// The line content.
        line: String,
    },
    /// An announcement separator.
    Separator,
}

/// Sink that records announcement events in memory.
///
/// Useful in tests and anywhere the emitted lines need to be read back
/// rather than printed.
///
/// # Examples
///
/// ```
/// use powercast::{Announce, Device, MemorySink};
///
/// let device = Device::audio_only("EchoSub");
/// let mut sink = MemorySink::new();
/// device.announce(&mut sink);
///
/// assert_eq!(sink.lines(), vec!["EchoSub vocalizing: device off"]);
/// assert_eq!(sink.separator_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Vec<SinkEvent>,
}

impl MemorySink {
    /// Creates a new empty memory sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded events in emission order.
    #[must_use]
    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Returns the recorded lines in emission order, skipping separators.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Line { line, .. } => Some(line.as_str()),
                SinkEvent::Separator => None,
            })
            .collect()
    }

    /// Returns the lines emitted on a specific channel.
    #[must_use]
    pub fn lines_on(&self, channel: Channel) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Line { channel: c, line } if *c == channel => Some(line.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Returns the number of separators recorded.
    #[must_use]
    pub fn separator_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SinkEvent::Separator))
            .count()
    }

    /// Clears all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl AnnouncementSink for MemorySink {
    fn emit(&mut self, channel: Channel, line: &str) {
        self.events.push(SinkEvent::Line {
            channel,
            line: line.to_string(),
        });
    }

    fn separator(&mut self) {
        self.events.push(SinkEvent::Separator);
    }
}
