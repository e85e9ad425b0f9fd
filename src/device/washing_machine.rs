// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smart washing machine configuration.

use crate::error::ValueError;
use crate::types::WashMode;

/// Washing-machine-specific part of a [`Device`](super::Device).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WashingMachine {
    wash_mode: WashMode,
}

impl WashingMachine {
    /// Returns the selected wash program.
    #[must_use]
    pub fn wash_mode(&self) -> WashMode {
        self.wash_mode
    }

    /// Returns the programs a user can choose from, in display order.
    #[must_use]
    pub const fn wash_options() -> [WashMode; 3] {
        WashMode::ALL
    }

    /// Selects a wash program by its label.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidWashMode` if `mode` is not one of the
    /// labels of [`WashMode::ALL`]. The previous program is kept.
    pub fn set_wash_mode(&mut self, mode: &str) -> Result<(), ValueError> {
        self.wash_mode = mode.parse()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn washing_machine_defaults_to_daily_wash() {
        assert_eq!(WashingMachine::default().wash_mode(), WashMode::DailyWash);
    }

    #[test]
    fn washing_machine_accepts_every_option() {
        let mut machine = WashingMachine::default();
        for mode in WashingMachine::wash_options() {
            machine.set_wash_mode(mode.as_str()).unwrap();
            assert_eq!(machine.wash_mode(), mode);
        }
    }

    #[test]
    fn washing_machine_rejects_unknown_mode() {
        let mut machine = WashingMachine::default();
        machine.set_wash_mode("Eco").unwrap();

        let err = machine.set_wash_mode("Hot wash").unwrap_err();
        assert_eq!(err, ValueError::InvalidWashMode("Hot wash".to_string()));
        assert_eq!(machine.wash_mode(), WashMode::Eco);
    }
}
