// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for device state and configuration.
//!
//! Each constrained type validates its value at construction time, so a
//! device can never hold a value outside its domain.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off state of a device
//! - [`ConsumptionRate`] - Power draw of a smart plug (0-150)
//! - [`WashMode`] - Program of a washing machine (Daily wash, Quick wash, Eco)

mod consumption;
mod power;
mod wash_mode;

pub use consumption::ConsumptionRate;
pub use power::PowerState;
pub use wash_mode::WashMode;
