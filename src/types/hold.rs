// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone hold setting.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Whether a zone hold is engaged.
///
/// The device represents this as the literal strings `on` and `off` in both
/// status pushes and configuration documents.
///
/// # Examples
///
/// ```
/// use infinir_lib::types::HoldSetting;
///
/// let hold: HoldSetting = "on".parse().unwrap();
/// assert_eq!(hold, HoldSetting::On);
/// assert_eq!(hold.as_str(), "on");
/// assert!("maybe".parse::<HoldSetting>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoldSetting {
    /// No hold; the zone follows its program.
    #[default]
    Off,
    /// Hold engaged; the zone is pinned to one activity.
    On,
}

impl HoldSetting {
    /// Returns the wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
        }
    }

    /// Returns `true` when the hold is engaged.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for HoldSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HoldSetting {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Self::Off),
            "on" => Ok(Self::On),
            _ => Err(ValueError::InvalidHoldSetting(s.to_string())),
        }
    }
}

impl From<bool> for HoldSetting {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}
