// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smart plug configuration.

use crate::error::ValueError;
use crate::types::ConsumptionRate;

/// Plug-specific part of a [`Device`](super::Device).
///
/// # Examples
///
/// ```
/// use hearth_lib::device::Plug;
///
/// let mut plug = Plug::default();
/// assert_eq!(plug.consumption_rate(), 0);
///
/// plug.set_consumption_rate(120).unwrap();
/// assert_eq!(plug.consumption_rate(), 120);
///
/// // Rejected values leave the rate unchanged
/// assert!(plug.set_consumption_rate(200).is_err());
/// assert_eq!(plug.consumption_rate(), 120);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plug {
    consumption_rate: ConsumptionRate,
}

impl Plug {
    /// Returns the configured consumption rate.
    #[must_use]
    pub fn consumption_rate(&self) -> u8 {
        self.consumption_rate.value()
    }

    /// Sets the consumption rate.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `rate` is outside 0-150. The
    /// previous rate is kept.
    pub fn set_consumption_rate(&mut self, rate: i64) -> Result<(), ValueError> {
        self.consumption_rate = ConsumptionRate::new(rate)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plug_defaults_to_zero() {
        assert_eq!(Plug::default().consumption_rate(), 0);
    }

    #[test]
    fn plug_accepts_every_rate_in_range() {
        let mut plug = Plug::default();
        for rate in 0..=150 {
            plug.set_consumption_rate(rate).unwrap();
            assert_eq!(i64::from(plug.consumption_rate()), rate);
        }
    }

    #[test]
    fn plug_rejects_out_of_range_and_keeps_value() {
        let mut plug = Plug::default();
        plug.set_consumption_rate(60).unwrap();

        for rate in [-1, 151, 200, i64::MAX] {
            let err = plug.set_consumption_rate(rate).unwrap_err();
            assert!(matches!(err, ValueError::OutOfRange { actual, .. } if actual == rate));
            assert_eq!(plug.consumption_rate(), 60);
        }
    }
}
