// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Variant-specific configuration changes.

/// A configuration change for one device type.
///
/// A setting is routed to the device variant that owns it by
/// [`Device::configure`](super::Device::configure). Raw values are carried
/// as entered so the device can reject them and keep its previous value.
///
/// # Examples
///
/// ```
/// use hearth_lib::{Device, Setting};
///
/// let mut plug = Device::plug();
/// plug.configure(Setting::ConsumptionRate(80)).unwrap();
///
/// // Wash mode is not a plug setting
/// assert!(plug.configure(Setting::wash_mode("Eco")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting {
    /// Consumption rate of a smart plug.
    ConsumptionRate(i64),
    /// Wash program label of a washing machine.
    WashMode(String),
}

impl Setting {
    /// Creates a wash mode setting.
    #[must_use]
    pub fn wash_mode(mode: impl Into<String>) -> Self {
        Self::WashMode(mode.into())
    }

    /// Returns the setting name used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ConsumptionRate(_) => "consumption rate",
            Self::WashMode(_) => "wash mode",
        }
    }
}
