// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device catalog.
//!
//! The catalog is the closed list of device types a home can hold. Front ends
//! offer [`DeviceType::ALL`] as the "add device" choice list, look the
//! selection up by name and call [`DeviceType::create`]. Supporting another
//! device type means adding a catalog entry, a [`DeviceKind`] variant and a
//! [`Setting`] variant.
//!
//! [`DeviceKind`]: crate::device::DeviceKind
//! [`Setting`]: crate::device::Setting

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::device::Device;
use crate::error::ValueError;

/// Supported device types.
///
/// # Examples
///
/// ```
/// use hearth_lib::DeviceType;
///
/// let device_type: DeviceType = "Smart Washing Machine".parse().unwrap();
/// let device = device_type.create();
/// assert_eq!(device.name(), "Smart Washing Machine");
///
/// assert!("Smart Fridge".parse::<DeviceType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceType {
    /// Smart plug with a configurable consumption rate.
    #[serde(rename = "Smart Plug")]
    SmartPlug,
    /// Smart washing machine with a selectable wash program.
    #[serde(rename = "Smart Washing Machine")]
    SmartWashingMachine,
}

impl DeviceType {
    /// All catalog entries, in the order they are offered to the user.
    pub const ALL: [Self; 2] = [Self::SmartPlug, Self::SmartWashingMachine];

    /// Returns the catalog name, which is also the device name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SmartPlug => "Smart Plug",
            Self::SmartWashingMachine => "Smart Washing Machine",
        }
    }

    /// Creates a new device of this type with its default configuration.
    #[must_use]
    pub fn create(self) -> Device {
        match self {
            Self::SmartPlug => Device::plug(),
            Self::SmartWashingMachine => Device::washing_machine(),
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeviceType {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|device_type| device_type.name() == s)
            .ok_or_else(|| ValueError::UnknownDeviceType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names() {
        let names: Vec<_> = DeviceType::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(names, ["Smart Plug", "Smart Washing Machine"]);
    }

    #[test]
    fn catalog_lookup_by_name() {
        for device_type in DeviceType::ALL {
            assert_eq!(device_type.name().parse::<DeviceType>().unwrap(), device_type);
        }
    }

    #[test]
    fn catalog_lookup_unknown() {
        let err = "smart plug".parse::<DeviceType>().unwrap_err();
        assert_eq!(err, ValueError::UnknownDeviceType("smart plug".to_string()));
    }

    #[test]
    fn create_builds_matching_variant() {
        for device_type in DeviceType::ALL {
            let device = device_type.create();
            assert_eq!(device.device_type(), device_type);
            assert!(!device.is_on());
        }
    }

    #[test]
    fn serde_uses_catalog_names() {
        let json = serde_json::to_string(&DeviceType::SmartWashingMachine).unwrap();
        assert_eq!(json, "\"Smart Washing Machine\"");
    }
}
