// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The home: an ordered collection of devices.
//!
//! # Overview
//!
//! [`Home`] owns its devices and keeps them in insertion order. That order is
//! the display order, and positions are always the current offset in it:
//! deleting a device shifts every later device down by one, so a position
//! read before a deletion must be looked up again afterwards (for example
//! with [`Home::index_of`]).
//!
//! Positions are 0-based. Renderers that number devices from 1 should use
//! [`Home::labels`] or [`Home::snapshot`].
//!
//! # Examples
//!
//! ```
//! use hearth_lib::{Device, Home, Setting};
//!
//! let mut home = Home::new();
//! home.add(Device::plug());
//! home.add(Device::washing_machine());
//! assert_eq!(home.count_active(), 0);
//!
//! home.toggle_at(0)?;
//! assert_eq!(home.count_active(), 1);
//!
//! // Out-of-range rates are rejected and the plug keeps its rate
//! assert!(home.configure_at(0, Setting::ConsumptionRate(200)).is_err());
//! assert_eq!(home.device_at(0)?.as_plug().unwrap().consumption_rate(), 0);
//! # Ok::<(), hearth_lib::Error>(())
//! ```

use std::fmt;

use crate::config::HomeConfig;
use crate::device::{Device, DeviceId, Setting};
use crate::error::{ConfigError, Error, Result};
use crate::snapshot::HomeSnapshot;
use crate::types::PowerState;

/// Ordered collection of smart devices.
///
/// A home is a plain value: the application creates one, keeps it for as
/// long as it runs and lends it to whichever layer needs it. It owns its
/// devices and cannot be cloned, which keeps every identity in one place.
///
/// ```compile_fail
/// use hearth_lib::Home;
///
/// let home = Home::new();
/// let copy: Home = Clone::clone(&home);
/// ```
#[derive(Debug, Default)]
pub struct Home {
    /// Devices in insertion order.
    devices: Vec<Device>,
}

impl Home {
    /// Creates an empty home.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a home from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first device entry whose values
    /// are rejected. No partially built home is returned.
    pub fn from_config(config: &HomeConfig) -> Result<Self> {
        let mut home = Self::new();
        for (position, entry) in config.devices.iter().enumerate() {
            let device = entry
                .build()
                .map_err(|source| ConfigError::InvalidEntry {
                    position,
                    source: Box::new(source),
                })?;
            home.add(device);
        }
        Ok(home)
    }

    // =========================================================================
    // Membership
    // =========================================================================

    /// Appends a device and returns its identity.
    pub fn add(&mut self, device: Device) -> DeviceId {
        let device_id = device.id();
        tracing::debug!(
            %device_id,
            device_type = device.name(),
            position = self.devices.len(),
            "Device added"
        );
        self.devices.push(device);
        device_id
    }

    /// Removes the device at `index` and returns it.
    ///
    /// Every device after `index` moves down one position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not a current
    /// position. The home is unchanged.
    pub fn delete_at(&mut self, index: usize) -> Result<Device> {
        self.check_index(index)?;
        let device = self.devices.remove(index);
        tracing::debug!(device_id = %device.id(), index, "Device deleted");
        Ok(device)
    }

    /// Returns the number of devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Returns `true` if the home has no devices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Returns all devices in display order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Iterates over the devices in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Device> {
        self.devices.iter()
    }

    // =========================================================================
    // Positional access
    // =========================================================================

    /// Returns the device at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not a current position.
    pub fn device_at(&self, index: usize) -> Result<&Device> {
        self.devices.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.devices.len(),
        })
    }

    /// Returns the device at `index` for changing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not a current position.
    pub fn device_at_mut(&mut self, index: usize) -> Result<&mut Device> {
        let len = self.devices.len();
        self.devices
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns the current position of a device.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] if no device in the home has this
    /// identity.
    pub fn index_of(&self, device_id: DeviceId) -> Result<usize> {
        self.devices
            .iter()
            .position(|device| device.id() == device_id)
            .ok_or(Error::DeviceNotFound(device_id))
    }

    /// Returns `true` if a device with this identity is in the home.
    #[must_use]
    pub fn contains(&self, device_id: DeviceId) -> bool {
        self.index_of(device_id).is_ok()
    }

    /// Toggles the device at `index` and returns its new state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not a current position.
    pub fn toggle_at(&mut self, index: usize) -> Result<PowerState> {
        Ok(self.device_at_mut(index)?.toggle())
    }

    /// Applies a configuration change to the device at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not a current
    /// position, or the error of [`Device::configure`].
    pub fn configure_at(&mut self, index: usize, setting: Setting) -> Result<()> {
        self.device_at_mut(index)?.configure(setting)
    }

    // =========================================================================
    // Bulk operations
    // =========================================================================

    /// Switches every device on and returns how many were toggled.
    ///
    /// Devices that are already on are left alone.
    pub fn turn_on_all(&mut self) -> usize {
        self.switch_all(PowerState::On)
    }

    /// Switches every device off and returns how many were toggled.
    ///
    /// Devices that are already off are left alone.
    pub fn turn_off_all(&mut self) -> usize {
        self.switch_all(PowerState::Off)
    }

    /// Returns the number of devices that are switched on.
    #[must_use]
    pub fn count_active(&self) -> usize {
        self.devices.iter().filter(|device| device.is_on()).count()
    }

    fn switch_all(&mut self, target: PowerState) -> usize {
        let mut toggled = 0;
        for device in &mut self.devices {
            if device.status() != target {
                device.toggle();
                toggled += 1;
            }
        }
        tracing::debug!(state = %target, toggled, "All devices switched");
        toggled
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.devices.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.devices.len(),
            })
        }
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Returns the numbered device labels used in choice lists
    /// (`1.Smart Plug`, `2.Smart Washing Machine`, ...).
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.devices
            .iter()
            .enumerate()
            .map(|(index, device)| format!("{}.{}", index + 1, device.name()))
            .collect()
    }

    /// Returns the active-device summary line, e.g. `Total activated: 2`.
    #[must_use]
    pub fn total_activated_label(&self) -> String {
        format!("Total activated: {}", self.count_active())
    }

    /// Returns a detached view of every device and the active count.
    #[must_use]
    pub fn snapshot(&self) -> HomeSnapshot {
        HomeSnapshot {
            devices: self
                .devices
                .iter()
                .enumerate()
                .map(|(index, device)| device.snapshot(index + 1))
                .collect(),
            active: self.count_active(),
        }
    }
}

impl<'a> IntoIterator for &'a Home {
    type Item = &'a Device;
    type IntoIter = std::slice::Iter<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.iter()
    }
}

impl fmt::Display for Home {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Your smart home contains:")?;
        for device in &self.devices {
            writeln!(f, "{device}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::catalog::DeviceType;
    use crate::error::ValueError;

    fn three_devices() -> (Home, [DeviceId; 3]) {
        let mut home = Home::new();
        let d0 = home.add(Device::plug());
        let d1 = home.add(Device::washing_machine());
        let d2 = home.add(Device::plug());
        (home, [d0, d1, d2])
    }

    #[test]
    fn new_home_is_empty() {
        let home = Home::new();
        assert!(home.is_empty());
        assert_eq!(home.len(), 0);
        assert_eq!(home.count_active(), 0);
    }

    #[test]
    fn add_appends_in_order() {
        let (home, ids) = three_devices();
        let order: Vec<_> = home.iter().map(Device::id).collect();
        assert_eq!(order, ids);
    }

    #[test]
    fn delete_shifts_later_devices() {
        let (mut home, [d0, d1, d2]) = three_devices();

        let removed = home.delete_at(1).unwrap();
        assert_eq!(removed.id(), d1);

        let order: Vec<_> = home.iter().map(Device::id).collect();
        assert_eq!(order, [d0, d2]);
        assert_eq!(home.index_of(d2).unwrap(), 1);
        assert!(!home.contains(d1));
    }

    #[test]
    fn added_devices_have_distinct_identities() {
        let mut home = Home::new();
        let ids: Vec<_> = (0..20)
            .map(|i| {
                let device_type = DeviceType::ALL[i % DeviceType::ALL.len()];
                home.add(device_type.create())
            })
            .collect();

        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
        for (position, id) in ids.iter().enumerate() {
            assert_eq!(home.index_of(*id).unwrap(), position);
        }
    }

    #[test]
    fn index_of_missing_device() {
        let (home, _) = three_devices();
        let stranger = Device::plug();
        assert!(matches!(
            home.index_of(stranger.id()),
            Err(Error::DeviceNotFound(id)) if id == stranger.id()
        ));
    }

    #[test]
    fn out_of_range_for_every_size() {
        let mut home = Home::new();
        for size in 0..4 {
            assert!(matches!(
                home.device_at(size),
                Err(Error::IndexOutOfRange { index, len }) if index == size && len == size
            ));
            assert!(matches!(
                home.delete_at(size),
                Err(Error::IndexOutOfRange { .. })
            ));
            assert!(home.toggle_at(size + 10).is_err());
            assert_eq!(home.len(), size);
            home.add(Device::plug());
        }
    }

    #[test]
    fn failed_delete_leaves_order_intact() {
        let (mut home, ids) = three_devices();
        assert!(home.delete_at(3).is_err());
        let order: Vec<_> = home.iter().map(Device::id).collect();
        assert_eq!(order, ids);
    }

    #[test]
    fn toggle_at_changes_one_device() {
        let (mut home, _) = three_devices();
        assert_eq!(home.toggle_at(2).unwrap(), PowerState::On);
        assert!(home.device_at(2).unwrap().is_on());
        assert!(!home.device_at(0).unwrap().is_on());
        assert_eq!(home.count_active(), 1);
    }

    #[test]
    fn turn_on_all_skips_devices_already_on() {
        let (mut home, _) = three_devices();
        home.toggle_at(0).unwrap();

        assert_eq!(home.turn_on_all(), 2);
        assert_eq!(home.count_active(), home.len());
        assert_eq!(home.turn_on_all(), 0);

        assert_eq!(home.turn_off_all(), 3);
        assert_eq!(home.count_active(), 0);
        assert_eq!(home.turn_off_all(), 0);
    }

    #[test]
    fn bulk_operations_on_empty_home() {
        let mut home = Home::new();
        assert_eq!(home.turn_on_all(), 0);
        assert_eq!(home.turn_off_all(), 0);
        assert_eq!(home.count_active(), 0);
    }

    #[test]
    fn configure_at_rejects_invalid_rate() {
        let (mut home, _) = three_devices();
        let err = home
            .configure_at(0, Setting::ConsumptionRate(200))
            .unwrap_err();
        assert!(matches!(err, Error::Value(ValueError::OutOfRange { .. })));
        assert_eq!(
            home.device_at(0).unwrap().as_plug().unwrap().consumption_rate(),
            0
        );
    }

    #[test]
    fn configure_at_out_of_range() {
        let mut home = Home::new();
        assert!(matches!(
            home.configure_at(0, Setting::wash_mode("Eco")),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn labels_are_renumbered_after_delete() {
        let (mut home, _) = three_devices();
        assert_eq!(
            home.labels(),
            ["1.Smart Plug", "2.Smart Washing Machine", "3.Smart Plug"]
        );
        home.delete_at(0).unwrap();
        assert_eq!(home.labels(), ["1.Smart Washing Machine", "2.Smart Plug"]);
    }

    #[test]
    fn total_activated_label() {
        let (mut home, _) = three_devices();
        home.toggle_at(1).unwrap();
        assert_eq!(home.total_activated_label(), "Total activated: 1");
    }

    #[test]
    fn display_lists_devices() {
        let (mut home, _) = three_devices();
        home.toggle_at(0).unwrap();
        assert_eq!(
            home.to_string(),
            "Your smart home contains:\n\
             Smart plug: ON | Consumption rate: 0\n\
             Washing machine: OFF | Wash mode: Daily wash\n\
             Smart plug: OFF | Consumption rate: 0\n"
        );
    }

    #[test]
    fn snapshot_tracks_positions_and_count() {
        let (mut home, [_, d1, d2]) = three_devices();
        home.toggle_at(2).unwrap();
        home.delete_at(0).unwrap();

        let snapshot = home.snapshot();
        assert_eq!(snapshot.active, 1);
        assert_eq!(snapshot.devices.len(), 2);
        assert_eq!(snapshot.devices[0].id, d1);
        assert_eq!(snapshot.devices[0].position, 1);
        assert_eq!(snapshot.devices[1].id, d2);
        assert_eq!(snapshot.devices[1].position, 2);
        assert_eq!(snapshot.devices[1].status, PowerState::On);
    }
}
