// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Powercast - A Rust library modeling consumer devices as capability
//! compositions.
//!
//! A device is a composition of independent capabilities: a power state,
//! optionally a battery state, and one or both output channels (audio,
//! video). Each variant designates exactly one status source, so a device
//! that is simultaneously power-capable and battery-capable reports one
//! unambiguous status text instead of inheriting two conflicting ones.
//!
//! # Supported Features
//!
//! - **Power control**: Turn devices on/off with idempotent transitions
//! - **Battery tracking**: Plug/unplug, charge deltas, formatted charge
//!   percentage
//! - **Status announcements**: Fan the status text out to every declared
//!   output channel through a pluggable sink
//! - **Custom variants**: Builder for arbitrary capability combinations
//!
//! # Quick Start
//!
//! ## Preset variants
//!
//! ```
//! use powercast::{Announce, Device, MemorySink};
//!
//! let mut speaker = Device::audio_only("EchoSub");
//! speaker.power_on();
//!
//! let mut sink = MemorySink::new();
//! speaker.announce(&mut sink);
//! assert_eq!(sink.lines(), vec!["EchoSub vocalizing: device on"]);
//! ```
//!
//! ## Battery-powered devices
//!
//! A battery device resolves its status through the battery, which
//! consults the power state read-only:
//!
//! ```
//! use powercast::Device;
//!
//! let mut reader = Device::battery_audio_video("Kindle");
//! reader.plug()?;
//! reader.update_charge(-0.01)?;
//!
//! assert_eq!(
//!     reader.status_text(),
//!     "device off, battery life at 99%, and charging"
//! );
//! # Ok::<(), powercast::Error>(())
//! ```
//!
//! ## Custom compositions
//!
//! ```
//! use powercast::{Announce, ConsoleSink, Device};
//!
//! # fn main() -> powercast::Result<()> {
//! let frame = Device::builder("PhotoFrame")
//!     .with_video()
//!     .with_battery()
//!     .build()?;
//!
//! // Prints "PhotoFrame rendering: device off, battery life at 100%"
//! // followed by a blank separator line.
//! frame.announce(&mut ConsoleSink::new());
//! # Ok(())
//! # }
//! ```

mod capabilities;
mod device;
pub mod error;
pub mod output;
pub mod state;
pub mod types;

pub use capabilities::{Capabilities, CapabilitiesBuilder};
pub use device::{Announce, Device, DeviceBuilder, StatusSource};
pub use error::{DeviceError, Error, Result, ValueError};
pub use output::{AnnouncementSink, Channel, ConsoleSink, MemorySink, SinkEvent};
pub use state::{BatteryState, StateChange};
pub use types::{Charge, PowerState};
