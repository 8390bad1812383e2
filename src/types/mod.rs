// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for device state.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off power state with explicit, idempotent
//!   transitions
//! - [`Charge`] - Battery charge fraction with unchecked arithmetic and
//!   optional validated constructors

mod charge;
mod power;

pub use charge::Charge;
pub use power::PowerState;
