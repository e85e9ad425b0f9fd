// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power state of a device.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents the power state of a device.
///
/// Every device starts [`Off`](Self::Off). The only way a device changes
/// state is by toggling, see [`Device::toggle`](crate::Device::toggle).
///
/// # Examples
///
/// ```
/// use hearth_lib::types::PowerState;
///
/// assert_eq!(PowerState::default(), PowerState::Off);
/// assert_eq!(PowerState::On.as_str(), "On");
/// assert_eq!(PowerState::Off.toggled(), PowerState::On);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PowerState {
    /// Power is off.
    #[default]
    Off,
    /// Power is on.
    On,
}

impl PowerState {
    /// Returns the status string reported to renderers (`"On"` / `"Off"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::On => "On",
        }
    }

    /// Returns the upper-case label used in one-line device summaries.
    #[must_use]
    pub const fn as_label(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::On => "ON",
        }
    }

    /// Returns `true` for [`On`](Self::On).
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }

    /// Returns the opposite state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_state_as_str() {
        assert_eq!(PowerState::Off.as_str(), "Off");
        assert_eq!(PowerState::On.as_str(), "On");
    }

    #[test]
    fn power_state_as_label() {
        assert_eq!(PowerState::Off.as_label(), "OFF");
        assert_eq!(PowerState::On.as_label(), "ON");
    }

    #[test]
    fn power_state_toggled_is_involution() {
        for state in [PowerState::Off, PowerState::On] {
            assert_ne!(state.toggled(), state);
            assert_eq!(state.toggled().toggled(), state);
        }
    }

    #[test]
    fn power_state_serde() {
        let json = serde_json::to_string(&PowerState::On).unwrap();
        assert_eq!(json, "\"On\"");
        let parsed: PowerState = serde_json::from_str("\"Off\"").unwrap();
        assert_eq!(parsed, PowerState::Off);
    }
}
