// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The device state store.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;
use xmltree::Element;

use super::{PendingAction, ZoneConfig, ZoneStatus};
use crate::types::TemperatureScale;

/// The store behind one lock, as handed to handlers.
///
/// Each handler locks once and keeps the guard for its entire
/// read-modify-write; handlers never call each other, so the lock cannot be
/// taken re-entrantly.
pub type SharedState = Arc<Mutex<SystemState>>;

/// The single authoritative record of the bound thermostat.
///
/// Exactly one device is supported. A second device completing a config
/// upload overwrites the first's identity and documents; this single-tenancy
/// is a stated limitation of the emulator, not a race to lock away.
///
/// The configuration template is exclusively owned here: it is replaced
/// wholesale on upload and never mutated in place. Outbound config
/// responses always operate on a deep copy.
#[derive(Debug, Default)]
pub struct SystemState {
    /// Serial number of the bound device, set on first config upload.
    serial: Option<String>,
    /// The device's last full `<config>` subtree, stored verbatim.
    config_template: Option<Element>,
    /// Parsed runtime status per enabled zone.
    status_zones: BTreeMap<String, ZoneStatus>,
    /// Parsed configuration per zone, disabled zones included.
    config_zones: BTreeMap<String, ZoneConfig>,
    /// Last observed operating mode (`cfgtype`).
    mode: Option<String>,
    /// Last observed temperature scale (`cfgem`).
    scale: Option<TemperatureScale>,
    /// The one-shot pending action slot.
    pending: Option<PendingAction>,
}

impl SystemState {
    /// Creates an empty store with no bound device.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a device: records its identity and replaces the configuration
    /// template and parsed zone configuration wholesale.
    pub fn bind_device(
        &mut self,
        serial: &str,
        template: Element,
        zones: BTreeMap<String, ZoneConfig>,
    ) {
        if let Some(previous) = self.serial.as_deref()
            && previous != serial
        {
            tracing::info!(
                previous = %previous,
                serial = %serial,
                "rebinding store to a different device"
            );
        }
        self.serial = Some(serial.to_string());
        self.config_template = Some(template);
        self.config_zones = zones;
    }

    /// Replaces the runtime views from a status push.
    pub fn replace_status(
        &mut self,
        mode: String,
        scale: TemperatureScale,
        zones: BTreeMap<String, ZoneStatus>,
    ) {
        self.mode = Some(mode);
        self.scale = Some(scale);
        self.status_zones = zones;
    }

    /// Queues a pending action, replacing any previously queued one.
    ///
    /// An action with `hold` unset carries nothing for the device and would
    /// merge as a no-op, so it clears the slot instead of occupying it. The
    /// device is never asked to re-poll for an empty delivery.
    pub fn queue_action(&mut self, action: PendingAction) {
        if action.hold {
            self.pending = Some(action);
        } else {
            tracing::debug!("action without hold cancels the queued delivery");
            self.pending = None;
        }
    }

    /// Takes the pending action, clearing the slot.
    ///
    /// All four action fields leave together; the slot is never partially
    /// cleared.
    pub fn take_action(&mut self) -> Option<PendingAction> {
        self.pending.take()
    }

    /// Returns `true` when the next status response should ask the device
    /// to re-poll: either an action is queued, or no configuration has been
    /// uploaded yet.
    #[must_use]
    pub fn has_changes_for_device(&self) -> bool {
        self.pending.is_some() || self.config_template.is_none()
    }

    /// Returns the bound device's serial number, if any.
    #[must_use]
    pub fn serial(&self) -> Option<&str> {
        self.serial.as_deref()
    }

    /// Returns the stored configuration template, if any.
    #[must_use]
    pub fn config_template(&self) -> Option<&Element> {
        self.config_template.as_ref()
    }

    /// Returns the currently queued action without consuming it.
    #[must_use]
    pub fn pending_action(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    /// Returns the last observed operating mode.
    #[must_use]
    pub fn mode(&self) -> Option<&str> {
        self.mode.as_deref()
    }

    /// Returns the last observed temperature scale.
    #[must_use]
    pub fn scale(&self) -> Option<TemperatureScale> {
        self.scale
    }

    /// Returns the parsed status view.
    #[must_use]
    pub fn status_zones(&self) -> &BTreeMap<String, ZoneStatus> {
        &self.status_zones
    }

    /// Returns the parsed configuration view.
    #[must_use]
    pub fn config_zones(&self) -> &BTreeMap<String, ZoneConfig> {
        &self.config_zones
    }
}
