// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smart devices.
//!
//! A [`Device`] holds what every device shares (identity and power state)
//! and a [`DeviceKind`] with the variant-specific configuration. The set of
//! variants is closed and mirrors the [`DeviceType`] catalog.
//!
//! # Examples
//!
//! ```
//! use hearth_lib::{Device, PowerState};
//!
//! let mut plug = Device::plug();
//! assert_eq!(plug.status(), PowerState::Off);
//! assert_eq!(plug.name(), "Smart Plug");
//!
//! plug.toggle();
//! assert!(plug.is_on());
//! assert_eq!(plug.to_string(), "Smart plug: ON | Consumption rate: 0");
//! ```

mod id;
mod plug;
mod setting;
mod washing_machine;

use std::fmt;

pub use id::DeviceId;
pub use plug::Plug;
pub use setting::Setting;
pub use washing_machine::WashingMachine;

use crate::catalog::DeviceType;
use crate::error::{Error, Result};
use crate::snapshot::{DeviceDetail, DeviceSnapshot};
use crate::types::PowerState;

/// Variant-specific part of a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceKind {
    /// A smart plug.
    Plug(Plug),
    /// A smart washing machine.
    WashingMachine(WashingMachine),
}

impl DeviceKind {
    /// Returns the catalog entry of this variant.
    #[must_use]
    pub const fn device_type(&self) -> DeviceType {
        match self {
            Self::Plug(_) => DeviceType::SmartPlug,
            Self::WashingMachine(_) => DeviceType::SmartWashingMachine,
        }
    }
}

impl From<Plug> for DeviceKind {
    fn from(plug: Plug) -> Self {
        Self::Plug(plug)
    }
}

impl From<WashingMachine> for DeviceKind {
    fn from(machine: WashingMachine) -> Self {
        Self::WashingMachine(machine)
    }
}

/// A controllable smart device.
///
/// The power state starts [`Off`](PowerState::Off) and only changes through
/// [`toggle`](Self::toggle).
///
/// A device is not `Clone`: its identity is unique, so a copy could never be
/// told apart from the original by [`Home::index_of`](crate::Home::index_of).
///
/// ```compile_fail
/// use hearth_lib::Device;
///
/// let device = Device::plug();
/// let copy: Device = Clone::clone(&device);
/// ```
#[derive(Debug)]
pub struct Device {
    id: DeviceId,
    power: PowerState,
    kind: DeviceKind,
}

impl Device {
    /// Creates a device that is switched off.
    #[must_use]
    pub fn new(kind: impl Into<DeviceKind>) -> Self {
        Self {
            id: DeviceId::new(),
            power: PowerState::Off,
            kind: kind.into(),
        }
    }

    /// Creates a smart plug with its default configuration.
    #[must_use]
    pub fn plug() -> Self {
        Self::new(Plug::default())
    }

    /// Creates a smart washing machine with its default configuration.
    #[must_use]
    pub fn washing_machine() -> Self {
        Self::new(WashingMachine::default())
    }

    /// Returns the device identity.
    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.id
    }

    /// Returns the catalog name of the device.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.device_type().name()
    }

    /// Returns the catalog entry of the device.
    #[must_use]
    pub fn device_type(&self) -> DeviceType {
        self.kind.device_type()
    }

    /// Returns the power state.
    #[must_use]
    pub fn status(&self) -> PowerState {
        self.power
    }

    /// Returns `true` if the device is switched on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.power.is_on()
    }

    /// Flips the power state and returns the new one.
    pub fn toggle(&mut self) -> PowerState {
        self.power = self.power.toggled();
        tracing::trace!(device_id = %self.id, state = %self.power, "Device toggled");
        self.power
    }

    /// Returns the plug configuration, if this device is a plug.
    #[must_use]
    pub fn as_plug(&self) -> Option<&Plug> {
        match &self.kind {
            DeviceKind::Plug(plug) => Some(plug),
            DeviceKind::WashingMachine(_) => None,
        }
    }

    /// Returns the plug configuration for changing it.
    pub fn as_plug_mut(&mut self) -> Option<&mut Plug> {
        match &mut self.kind {
            DeviceKind::Plug(plug) => Some(plug),
            DeviceKind::WashingMachine(_) => None,
        }
    }

    /// Returns the washing machine configuration, if this device is one.
    #[must_use]
    pub fn as_washing_machine(&self) -> Option<&WashingMachine> {
        match &self.kind {
            DeviceKind::WashingMachine(machine) => Some(machine),
            DeviceKind::Plug(_) => None,
        }
    }

    /// Returns the washing machine configuration for changing it.
    pub fn as_washing_machine_mut(&mut self) -> Option<&mut WashingMachine> {
        match &mut self.kind {
            DeviceKind::WashingMachine(machine) => Some(machine),
            DeviceKind::Plug(_) => None,
        }
    }

    /// Applies a configuration change.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedSetting`] if the setting belongs to
    /// another device type, or [`Error::Value`] if the variant rejects the
    /// value. In both cases the device is unchanged.
    pub fn configure(&mut self, setting: Setting) -> Result<()> {
        let result = match (&mut self.kind, setting) {
            (DeviceKind::Plug(plug), Setting::ConsumptionRate(rate)) => plug
                .set_consumption_rate(rate)
                .map_err(Error::from),
            (DeviceKind::WashingMachine(machine), Setting::WashMode(mode)) => machine
                .set_wash_mode(&mode)
                .map_err(Error::from),
            (kind, setting) => Err(Error::UnsupportedSetting {
                device: kind.device_type().name(),
                setting: setting.name(),
            }),
        };

        if let Err(ref error) = result {
            tracing::debug!(device_id = %self.id, %error, "Setting rejected");
        }

        result
    }

    /// Returns a detached view of the device at the given 1-based position.
    #[must_use]
    pub fn snapshot(&self, position: usize) -> DeviceSnapshot {
        let detail = match &self.kind {
            DeviceKind::Plug(plug) => DeviceDetail::Plug {
                consumption_rate: plug.consumption_rate(),
            },
            DeviceKind::WashingMachine(machine) => DeviceDetail::WashingMachine {
                wash_mode: machine.wash_mode(),
            },
        };

        DeviceSnapshot {
            position,
            id: self.id,
            name: self.name(),
            status: self.power,
            detail,
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.power.as_label();
        match &self.kind {
            DeviceKind::Plug(plug) => write!(
                f,
                "Smart plug: {status} | Consumption rate: {}",
                plug.consumption_rate()
            ),
            DeviceKind::WashingMachine(machine) => write!(
                f,
                "Washing machine: {status} | Wash mode: {}",
                machine.wash_mode()
            ),
        }
    }
}
