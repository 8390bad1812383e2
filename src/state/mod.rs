// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state management types.
//!
//! This module provides the mutable state a device variant composes:
//! [`BatteryState`] for battery-capable variants, and [`StateChange`] for
//! applying discrete mutations with change detection.

mod battery;
mod change;

pub use battery::BatteryState;
pub use change::StateChange;
