// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `Hearth` Lib - A Rust library modelling a smart home.
//!
//! A [`Home`] owns an ordered list of smart [`Device`]s. Every device can be
//! switched on and off; each device type adds its own validated
//! configuration.
//!
//! # Supported Devices
//!
//! - **Smart Plug**: consumption rate between 0 and 150
//! - **Smart Washing Machine**: wash program, one of `Daily wash`,
//!   `Quick wash` or `Eco`
//!
//! # Quick Start
//!
//! ```
//! use hearth_lib::{DeviceType, Home, Setting};
//!
//! let mut home = Home::new();
//!
//! // Front ends pick a device type by its catalog name
//! let device_type: DeviceType = "Smart Plug".parse()?;
//! let plug_id = home.add(device_type.create());
//! home.add(DeviceType::SmartWashingMachine.create());
//!
//! // Positional operations
//! home.toggle_at(0)?;
//! home.configure_at(1, Setting::wash_mode("Eco"))?;
//! assert_eq!(home.count_active(), 1);
//!
//! // Bulk operations
//! home.turn_on_all();
//! assert_eq!(home.count_active(), home.len());
//! home.turn_off_all();
//! assert_eq!(home.count_active(), 0);
//!
//! // Positions shift on deletion
//! home.delete_at(0)?;
//! assert!(home.index_of(plug_id).is_err());
//! # Ok::<(), hearth_lib::Error>(())
//! ```
//!
//! # Rendering
//!
//! The library never pushes updates. After a mutating call a front end
//! re-reads the devices, the active count or a [`Home::snapshot`], and
//! redraws.
//!
//! ```
//! use hearth_lib::Home;
//! use hearth_lib::config::HomeConfig;
//!
//! let mut home = Home::from_config(&HomeConfig::demo())?;
//! home.toggle_at(3)?;
//!
//! let snapshot = home.snapshot();
//! assert_eq!(snapshot.active, 1);
//! assert_eq!(snapshot.devices[3].label(), "4.Smart Washing Machine");
//! assert_eq!(home.total_activated_label(), "Total activated: 1");
//! # Ok::<(), hearth_lib::Error>(())
//! ```

pub mod catalog;
pub mod config;
pub mod device;
pub mod error;
mod home;
pub mod snapshot;
pub mod types;

pub use catalog::DeviceType;
pub use config::{DeviceConfig, HomeConfig};
pub use device::{Device, DeviceId, DeviceKind, Plug, Setting, WashingMachine};
pub use error::{ConfigError, Error, Result, ValueError};
pub use home::Home;
pub use snapshot::{DeviceDetail, DeviceSnapshot, HomeSnapshot};
pub use types::{ConsumptionRate, PowerState, WashMode};
