// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `Hearth` library.
//!
//! Two kinds of failure exist. A [`ValueError`] means a configuration value
//! was outside its domain and was rejected; the device keeps its previous
//! value. The positional variants of [`Error`] mean the caller addressed a
//! device that is not in the home; the home is left untouched.

use thiserror::Error;

use crate::device::DeviceId;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value was rejected.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// A position does not refer to a device currently in the home.
    #[error("index {index} is out of range for a home with {len} devices")]
    IndexOutOfRange {
        /// The requested 0-based position.
        index: usize,
        /// Number of devices in the home at the time of the call.
        len: usize,
    },

    /// The device is not a member of the home.
    #[error("device {0} is not in this home")]
    DeviceNotFound(DeviceId),

    /// The setting belongs to another device type.
    #[error("{device} does not support the {setting} setting")]
    UnsupportedSetting {
        /// Catalog name of the device that was addressed.
        device: &'static str,
        /// Name of the rejected setting.
        setting: &'static str,
    },

    /// A home configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: i64,
        /// Maximum allowed value.
        max: i64,
        /// The actual value that was provided.
        actual: i64,
    },

    /// The wash mode is not one of the supported programs.
    #[error("invalid wash mode: {0}")]
    InvalidWashMode(String),

    /// The name does not match any entry of the device catalog.
    #[error("unknown device type: {0}")]
    UnknownDeviceType(String),
}

/// Errors raised while loading a [`HomeConfig`](crate::config::HomeConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed or produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// One device entry holds a value its device type rejects.
    #[error("device entry {position} is invalid: {source}")]
    InvalidEntry {
        /// 0-based position of the entry in the configuration.
        position: usize,
        /// Why the entry was rejected.
        source: Box<Error>,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 0,
            max: 150,
            actual: 200,
        };
        assert_eq!(err.to_string(), "value 200 is out of range [0, 150]");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidWashMode("Turbo".to_string());
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(ValueError::InvalidWashMode(_))));
    }

    #[test]
    fn index_out_of_range_display() {
        let err = Error::IndexOutOfRange { index: 3, len: 2 };
        assert_eq!(
            err.to_string(),
            "index 3 is out of range for a home with 2 devices"
        );
    }

    #[test]
    fn unsupported_setting_display() {
        let err = Error::UnsupportedSetting {
            device: "Smart Plug",
            setting: "wash mode",
        };
        assert_eq!(
            err.to_string(),
            "Smart Plug does not support the wash mode setting"
        );
    }

    #[test]
    fn invalid_entry_keeps_source() {
        let err = ConfigError::InvalidEntry {
            position: 1,
            source: Box::new(ValueError::InvalidWashMode("Hot".to_string()).into()),
        };
        assert_eq!(
            err.to_string(),
            "device entry 1 is invalid: value error: invalid wash mode: Hot"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
