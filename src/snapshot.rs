// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-only views of a home for renderers.
//!
//! The core never pushes updates. After every mutating call a renderer
//! re-reads the home, and [`Home::snapshot`](crate::Home::snapshot) gives it
//! everything it needs in one detached value.

use serde::Serialize;

use crate::device::DeviceId;
use crate::types::{PowerState, WashMode};

/// Variant-specific fields of a [`DeviceSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeviceDetail {
    /// Fields of a smart plug.
    Plug {
        /// Configured consumption rate.
        consumption_rate: u8,
    },
    /// Fields of a smart washing machine.
    WashingMachine {
        /// Selected wash program.
        wash_mode: WashMode,
    },
}

/// State of one device at the time the snapshot was taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceSnapshot {
    /// 1-based display position.
    pub position: usize,
    /// Device identity.
    pub id: DeviceId,
    /// Catalog name.
    pub name: &'static str,
    /// Power state.
    pub status: PowerState,
    /// Variant-specific fields.
    pub detail: DeviceDetail,
}

impl DeviceSnapshot {
    /// Returns the numbered label used in device choice lists, e.g. `1.Smart Plug`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}.{}", self.position, self.name)
    }
}

/// State of a whole home.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HomeSnapshot {
    /// Devices in display order.
    pub devices: Vec<DeviceSnapshot>,
    /// Number of devices switched on.
    pub active: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn label_is_numbered() {
        let snapshot = DeviceSnapshot {
            position: 3,
            id: DeviceId::new(),
            name: "Smart Plug",
            status: PowerState::Off,
            detail: DeviceDetail::Plug {
                consumption_rate: 0,
            },
        };
        assert_eq!(snapshot.label(), "3.Smart Plug");
    }

    #[test]
    fn detail_is_tagged() {
        let detail = DeviceDetail::WashingMachine {
            wash_mode: WashMode::QuickWash,
        };
        assert_eq!(
            serde_json::to_value(&detail).unwrap(),
            json!({ "kind": "washing_machine", "wash_mode": "Quick wash" })
        );
    }

    #[test]
    fn empty_home_snapshot() {
        let snapshot = HomeSnapshot::default();
        assert_eq!(
            serde_json::to_value(&snapshot).unwrap(),
            json!({ "devices": [], "active": 0 })
        );
    }
}
