// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parsed zone views.
//!
//! These are the read models a control-plane consumes. Temperatures and
//! humidity stay as the device's own strings; the protocol treats them as
//! opaque display values and so does the emulator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::HoldSetting;

/// Runtime status of one zone, rebuilt from every status push.
///
/// Only zones the device marks `enabled` appear in the status view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneStatus {
    /// Display name of the zone.
    pub name: String,
    /// The activity currently in effect (e.g. `home`, `sleep`, `manual`).
    pub activity: String,
    /// Measured temperature, in the device's configured scale.
    pub temperature: String,
    /// Measured relative humidity, percent.
    pub humidity: String,
    /// Active heat setpoint.
    pub heat_to: String,
    /// Active cool setpoint.
    pub cool_to: String,
    /// Fan mode in effect.
    pub fan: String,
    /// Whether a hold is engaged.
    pub hold: HoldSetting,
    /// When the hold releases, if one is scheduled (`HH:MM`).
    pub until: Option<String>,
    /// What the zone equipment is currently doing (e.g. `idle`,
    /// `active_heat`).
    pub conditioning: String,
}

/// Configured behavior of one zone, rebuilt from every config upload.
///
/// Disabled zones are still included here, since they remain present in the
/// raw configuration template and may reappear.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ZoneConfig {
    /// Climate presets keyed by activity id.
    pub activities: BTreeMap<String, ActivityConfig>,
    /// Weekly program: day id to ordered periods.
    pub schedule: BTreeMap<String, BTreeMap<u8, SchedulePeriod>>,
}

/// Setpoints and fan mode of one activity preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityConfig {
    /// Heat setpoint.
    pub heat_to: String,
    /// Cool setpoint.
    pub cool_to: String,
    /// Fan mode.
    pub fan: String,
}

/// One period of a day's program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePeriod {
    /// The activity this period switches to.
    pub activity: String,
    /// Start time of the period (`HH:MM`).
    pub time: String,
    /// Whether the period is active.
    pub enabled: bool,
}
