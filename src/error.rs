// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `powercast` library.
//!
//! This module provides the error hierarchy for handling failures across
//! the library: value validation, device composition, and capability
//! dispatch.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when composing
/// and operating device variants.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during device composition or operation.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A charge fraction is outside the allowed range.
    #[error("charge {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: f32,
        /// Maximum allowed value.
        max: f32,
        /// The actual value that was provided.
        actual: f32,
    },

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),
}

/// Errors related to device composition and capability dispatch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The device does not declare the requested capability.
    #[error("device does not support {capability}")]
    UnsupportedCapability {
        /// The capability that is not supported.
        capability: String,
    },

    /// A device variant must declare at least one output channel.
    #[error("device declares no output channels")]
    NoOutputChannels,

    /// The battery status source was selected on a device without
    /// battery state.
    #[error("battery status source requires battery capability")]
    BatterySourceWithoutBattery,
}

impl DeviceError {
    /// Creates an unsupported-capability error for the named capability.
    #[must_use]
    pub fn unsupported(capability: &str) -> Self {
        Self::UnsupportedCapability {
            capability: capability.to_string(),
        }
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 0.0,
            max: 1.0,
            actual: 1.5,
        };
        assert_eq!(err.to_string(), "charge 1.5 is out of range [0, 1]");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidPowerState("maybe".to_string());
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(ValueError::InvalidPowerState(_))));
    }

    #[test]
    fn error_from_device_error() {
        let device_err = DeviceError::NoOutputChannels;
        let err: Error = device_err.into();
        assert!(matches!(err, Error::Device(DeviceError::NoOutputChannels)));
    }

    #[test]
    fn device_error_display() {
        let err = DeviceError::unsupported("battery");
        assert_eq!(err.to_string(), "device does not support battery");

        let err = DeviceError::NoOutputChannels;
        assert_eq!(err.to_string(), "device declares no output channels");
    }
}
