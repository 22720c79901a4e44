// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bounded target temperature.

use std::fmt;

use crate::error::ValueError;

/// Minimum accepted setpoint in whole degrees.
const SETPOINT_MIN: i16 = 10;

/// Maximum accepted setpoint in whole degrees.
const SETPOINT_MAX: i16 = 99;

/// A target temperature in whole degrees.
///
/// The thermostat exchanges setpoints as bare integer strings (e.g. `"72"`)
/// in whichever scale the panel is configured for, so the accepted range
/// spans both: the low end admits the panel's Celsius limits (metric
/// installations hold at roughly 10-32), the high end its Fahrenheit limits.
///
/// # Examples
///
/// ```
/// use infinir_lib::types::Setpoint;
///
/// let sp = Setpoint::new(72).unwrap();
/// assert_eq!(sp.value(), 72);
/// assert_eq!(sp.to_string(), "72");
///
/// // Celsius holds are valid too.
/// assert!(Setpoint::new(22).is_ok());
///
/// assert!(Setpoint::new(120).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Setpoint(i16);

impl Setpoint {
    /// Creates a setpoint, validating the allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::SetpointOutOfRange`] if `degrees` is outside
    /// `[10, 99]`.
    pub fn new(degrees: i16) -> Result<Self, ValueError> {
        if (SETPOINT_MIN..=SETPOINT_MAX).contains(&degrees) {
            Ok(Self(degrees))
        } else {
            Err(ValueError::SetpointOutOfRange {
                min: SETPOINT_MIN,
                max: SETPOINT_MAX,
                actual: degrees,
            })
        }
    }

    /// Returns the value in whole degrees.
    #[must_use]
    pub const fn value(&self) -> i16 {
        self.0
    }
}

impl fmt::Display for Setpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i16> for Setpoint {
    type Error = ValueError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
