// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wash programs for smart washing machines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Wash program of a washing machine.
///
/// The set of programs is fixed and ordered:
///
/// | Variant | Label |
/// |---------|-------|
/// | [`DailyWash`](Self::DailyWash) | `Daily wash` (default) |
/// | [`QuickWash`](Self::QuickWash) | `Quick wash` |
/// | [`Eco`](Self::Eco) | `Eco` |
///
/// # Examples
///
/// ```
/// use hearth_lib::types::WashMode;
///
/// let mode: WashMode = "Eco".parse().unwrap();
/// assert_eq!(mode, WashMode::Eco);
/// assert_eq!(WashMode::default().as_str(), "Daily wash");
///
/// assert!("Turbo".parse::<WashMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WashMode {
    /// Standard program.
    #[default]
    #[serde(rename = "Daily wash")]
    DailyWash,
    /// Short program.
    #[serde(rename = "Quick wash")]
    QuickWash,
    /// Energy saving program.
    #[serde(rename = "Eco")]
    Eco,
}

impl WashMode {
    /// All programs, in the order they are offered to the user.
    pub const ALL: [Self; 3] = [Self::DailyWash, Self::QuickWash, Self::Eco];

    /// Returns the human-readable label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DailyWash => "Daily wash",
            Self::QuickWash => "Quick wash",
            Self::Eco => "Eco",
        }
    }

    /// Returns the labels of [`ALL`](Self::ALL), for building a choice list.
    #[must_use]
    pub fn labels() -> [&'static str; 3] {
        Self::ALL.map(|mode| mode.as_str())
    }
}

impl fmt::Display for WashMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WashMode {
    type Err = ValueError;

    /// Labels must match exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ValueError::InvalidWashMode(s.to_string()))
    }
}
