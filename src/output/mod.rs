// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Output channels and announcement sinks.
//!
//! Devices announce their status through [`Channel`]s (audio and video);
//! the emitted lines land in an [`AnnouncementSink`]. The sink trait is
//! the seam that keeps the core model free of console concerns: the
//! scripted console driver uses [`ConsoleSink`], tests use
//! [`MemorySink`].

mod channel;
mod sink;

pub use channel::Channel;
pub use sink::{AnnouncementSink, ConsoleSink, MemorySink, SinkEvent};
