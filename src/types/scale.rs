// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature display scale.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// The temperature scale configured on the thermostat.
///
/// The device reports this in the `cfgem` field of its status push, using
/// the vendor literals `english` (Fahrenheit) and `metric` (Celsius).
///
/// # Examples
///
/// ```
/// use infinir_lib::types::TemperatureScale;
///
/// let scale: TemperatureScale = "english".parse().unwrap();
/// assert_eq!(scale, TemperatureScale::English);
/// assert_eq!(scale.to_string(), "english");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureScale {
    /// Fahrenheit.
    English,
    /// Celsius.
    Metric,
}

impl TemperatureScale {
    /// Returns the vendor wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Metric => "metric",
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TemperatureScale {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "english" => Ok(Self::English),
            "metric" => Ok(Self::Metric),
            _ => Err(ValueError::InvalidTemperatureScale(s.to_string())),
        }
    }
}
