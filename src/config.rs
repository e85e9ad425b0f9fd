// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Declarative description of a home's initial devices.
//!
//! A [`HomeConfig`] lists the devices a home starts with, in order, with
//! optional initial values. It can be built in code or read from a JSON
//! document, and is turned into a [`Home`](crate::Home) by
//! [`Home::from_config`](crate::Home::from_config), which validates every
//! value.
//!
//! # Examples
//!
//! ```
//! use hearth_lib::config::{DeviceConfig, HomeConfig};
//! use hearth_lib::{Home, PowerState};
//!
//! let config = HomeConfig::new()
//!     .with_device(DeviceConfig::plug().with_consumption_rate(40))
//!     .with_device(
//!         DeviceConfig::washing_machine()
//!             .with_wash_mode("Eco")
//!             .with_power(PowerState::On),
//!     );
//!
//! let home = Home::from_config(&config)?;
//! assert_eq!(home.len(), 2);
//! assert_eq!(home.count_active(), 1);
//! # Ok::<(), hearth_lib::Error>(())
//! ```
//!
//! The same configuration as JSON:
//!
//! ```
//! use hearth_lib::config::HomeConfig;
//!
//! let config = HomeConfig::from_json(r#"{
//!     "devices": [
//!         { "type": "Smart Plug", "consumption_rate": 40 },
//!         { "type": "Smart Washing Machine", "wash_mode": "Eco", "power": "On" }
//!     ]
//! }"#)?;
//! assert_eq!(config.devices.len(), 2);
//! # Ok::<(), hearth_lib::error::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::DeviceType;
use crate::device::{Device, Setting};
use crate::error::{ConfigError, Result};
use crate::types::PowerState;

/// Devices a home starts with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    /// Device entries in display order.
    pub devices: Vec<DeviceConfig>,
}

impl HomeConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The demonstration home: three plugs followed by two washing machines,
    /// all switched off with default settings.
    #[must_use]
    pub fn demo() -> Self {
        Self::new()
            .with_device(DeviceConfig::plug())
            .with_device(DeviceConfig::plug())
            .with_device(DeviceConfig::plug())
            .with_device(DeviceConfig::washing_machine())
            .with_device(DeviceConfig::washing_machine())
    }

    /// Appends a device entry.
    #[must_use]
    pub fn with_device(mut self, device: DeviceConfig) -> Self {
        self.devices.push(device);
        self
    }

    /// Parses a configuration from JSON.
    ///
    /// Only the document structure is checked here; device values are
    /// validated when the home is built.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is malformed or names a
    /// device type outside the catalog.
    pub fn from_json(json: &str) -> std::result::Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if serialization fails.
    pub fn to_json(&self) -> std::result::Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One device entry of a [`HomeConfig`].
///
/// Unset values keep the device defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Catalog entry to create.
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    /// Initial power state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<PowerState>,
    /// Initial consumption rate (plugs only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumption_rate: Option<i64>,
    /// Initial wash program label (washing machines only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wash_mode: Option<String>,
}

impl DeviceConfig {
    /// Creates an entry for the given device type with default values.
    #[must_use]
    pub fn new(device_type: DeviceType) -> Self {
        Self {
            device_type,
            power: None,
            consumption_rate: None,
            wash_mode: None,
        }
    }

    /// Creates a smart plug entry.
    #[must_use]
    pub fn plug() -> Self {
        Self::new(DeviceType::SmartPlug)
    }

    /// Creates a smart washing machine entry.
    #[must_use]
    pub fn washing_machine() -> Self {
        Self::new(DeviceType::SmartWashingMachine)
    }

    /// Sets the initial power state.
    #[must_use]
    pub fn with_power(mut self, power: PowerState) -> Self {
        self.power = Some(power);
        self
    }

    /// Sets the initial consumption rate.
    #[must_use]
    pub fn with_consumption_rate(mut self, rate: i64) -> Self {
        self.consumption_rate = Some(rate);
        self
    }

    /// Sets the initial wash program.
    #[must_use]
    pub fn with_wash_mode(mut self, mode: impl Into<String>) -> Self {
        self.wash_mode = Some(mode.into());
        self
    }

    /// Creates the device described by this entry.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Device::configure`] for the first value the
    /// device rejects, including values meant for another device type.
    pub fn build(&self) -> Result<Device> {
        let mut device = self.device_type.create();

        if let Some(rate) = self.consumption_rate {
            device.configure(Setting::ConsumptionRate(rate))?;
        }
        if let Some(mode) = &self.wash_mode {
            device.configure(Setting::wash_mode(mode.as_str()))?;
        }
        if self.power.is_some_and(|power| power.is_on()) {
            device.toggle();
        }

        Ok(device)
    }
}
