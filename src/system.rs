// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The device-facing system facade.
//!
//! [`CloudSystem`] owns the device state store and exposes one handler per
//! sub-resource of `/systems/{serialNumber}/...`, plus the control-plane
//! surface that queues pending actions and reads the parsed views. The
//! transport layer routes each request to the matching handler and maps the
//! returned [`SystemResponse`] onto the wire.
//!
//! Every handler locks the store once for its whole request; handlers never
//! call each other and perform no I/O.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::document;
use crate::error::Result;
use crate::passive;
use crate::protocol::{CONFIG_DOWNLOAD_VALIDATOR, CONFIG_UPLOAD_VALIDATOR, DEVICE_VERSION};
use crate::report::{self, ConfigReport, Notification, StatusReport};
use crate::response::{
    SystemResponse, build_status_document, merge_pending_action, restamp_template,
};
use crate::state::{PendingAction, SharedState, SystemState, ZoneConfig, ZoneStatus};
use crate::types::{Setpoint, TemperatureScale};

/// Emulated cloud endpoint for one bound thermostat.
///
/// Cloning is cheap and shares the same store, so one instance can serve a
/// transport layer and a control-plane concurrently.
///
/// # Examples
///
/// ```
/// use infinir_lib::CloudSystem;
///
/// let system = CloudSystem::new();
///
/// // Nothing uploaded yet: a config download has no body.
/// let response = system.handle_config_download("SN1").unwrap();
/// assert_eq!(response.body(), Some(""));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CloudSystem {
    state: SharedState,
}

impl CloudSystem {
    /// Creates a system with an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SystemState::new())),
        }
    }

    // ========== Device-facing handlers ==========

    /// Handles a full configuration push to the base system resource.
    ///
    /// On a version match this binds the device and replaces the stored
    /// template and parsed zone configuration wholesale. Any other version
    /// is acknowledged without touching state.
    ///
    /// # Errors
    ///
    /// Fails on a malformed payload or a missing required field.
    pub fn handle_config_upload(&self, serial: &str, body: &str) -> Result<SystemResponse> {
        tracing::debug!(serial = %serial, "config upload");
        let root = document::parse(body)?;

        let version = report::protocol_version(&root)?;
        if version != DEVICE_VERSION {
            tracing::warn!(version = %version, "unexpected device protocol version");
            return Ok(SystemResponse::empty_ack_with_validator(
                CONFIG_UPLOAD_VALIDATOR,
            ));
        }

        let config = ConfigReport::from_element(&root)?;
        let zone_count = config.zones.len();

        let mut state = self.state.lock();
        state.bind_device(serial, config.template, config.zones);
        drop(state);

        tracing::info!(serial = %serial, zones = zone_count, "stored device configuration");
        Ok(SystemResponse::empty_ack_with_validator(
            CONFIG_UPLOAD_VALIDATOR,
        ))
    }

    /// Handles a periodic status push.
    ///
    /// Rebuilds the runtime views and tells the device whether to re-poll:
    /// the change flags are raised when an action is queued or no
    /// configuration has been uploaded yet. A version mismatch degrades to
    /// a no-changes reply without touching state.
    ///
    /// # Errors
    ///
    /// Fails on a malformed payload or a missing required field.
    pub fn handle_status(&self, serial: &str, body: &str) -> Result<SystemResponse> {
        tracing::debug!(serial = %serial, "status push");
        let root = document::parse(body)?;

        let version = report::protocol_version(&root)?;
        if version != DEVICE_VERSION {
            tracing::warn!(version = %version, "unexpected device protocol version");
            let doc = build_status_document(serial, false);
            return Ok(SystemResponse::document(document::serialize(&doc)?));
        }

        let status = StatusReport::from_element(&root)?;

        let mut state = self.state.lock();
        state.replace_status(status.mode, status.scale, status.zones);
        let has_changes = state.has_changes_for_device();
        drop(state);

        if has_changes {
            tracing::info!(serial = %serial, "asking device to fetch configuration");
        } else {
            tracing::info!(serial = %serial, "no changes for device");
        }

        let doc = build_status_document(serial, has_changes);
        Ok(SystemResponse::document(document::serialize(&doc)?))
    }

    /// Handles a configuration fetch.
    ///
    /// Without a stored template the body is empty: the device must
    /// complete an upload first. Otherwise the template is deep-copied,
    /// restamped, and at most one pending action is merged into the
    /// controlled zone. The pending slot is cleared whether or not an
    /// action was queued; delivery is single-shot.
    ///
    /// # Errors
    ///
    /// Fails only if the outbound document cannot be serialized.
    pub fn handle_config_download(&self, serial: &str) -> Result<SystemResponse> {
        tracing::debug!(serial = %serial, "config download");

        let mut state = self.state.lock();
        let Some(template) = state.config_template() else {
            tracing::info!(serial = %serial, "no configuration uploaded yet");
            return Ok(SystemResponse::document_with_validator(
                String::new(),
                CONFIG_DOWNLOAD_VALIDATOR,
            ));
        };

        let mut config = restamp_template(template, serial);
        if let Some(action) = state.take_action() {
            tracing::info!(serial = %serial, action = ?action, "delivering pending action");
            merge_pending_action(&mut config, &action);
        }
        drop(state);

        Ok(SystemResponse::document_with_validator(
            document::serialize(&config)?,
            CONFIG_DOWNLOAD_VALIDATOR,
        ))
    }

    /// Handles a change notification.
    ///
    /// Diagnostic only: a version mismatch or a non-200 code is logged as a
    /// warning, success as confirmation. No state changes either way; this
    /// is the extension point for a control-plane to learn that a pushed
    /// configuration was applied.
    ///
    /// # Errors
    ///
    /// Fails on a malformed payload or a missing required field.
    pub fn handle_notification(&self, serial: &str, body: &str) -> Result<SystemResponse> {
        tracing::debug!(serial = %serial, "notification");
        let root = document::parse(body)?;

        let version = report::protocol_version(&root)?;
        if version != DEVICE_VERSION {
            tracing::warn!(version = %version, "unexpected device protocol version");
            return Ok(SystemResponse::empty_ack());
        }

        let note = Notification::from_element(&root)?;
        if note.is_success() {
            tracing::info!(serial = %serial, code = %note.code, message = %note.message, "device applied change");
        } else {
            tracing::warn!(serial = %serial, code = %note.code, message = %note.message, "device reported failure");
        }
        Ok(SystemResponse::empty_ack())
    }

    /// Handles any passive sub-resource, discarding the body.
    ///
    /// Returns `None` for sub-resource names outside the passive table;
    /// the transport should treat those as unrouted.
    #[must_use]
    pub fn handle_passive(&self, resource: &str, serial: &str, body: &str) -> Option<SystemResponse> {
        let entry = passive::lookup(resource)?;
        let response = entry.respond();
        if response.kind() == crate::response::ResponseKind::NotFound {
            tracing::info!(serial = %serial, resource = %resource, body = %body, "unsupported sub-resource");
        } else {
            tracing::debug!(serial = %serial, resource = %resource, body = %body, "passive sub-resource");
        }
        Some(response)
    }

    // ========== Control-plane surface ==========

    /// Queues a hold at the given activity, replacing any queued action.
    pub fn queue_hold(&self, activity: &str, setpoint: Option<Setpoint>, until: Option<&str>) {
        self.state
            .lock()
            .queue_action(PendingAction::hold(activity, setpoint, until));
    }

    /// Queues a hold release, replacing any queued action.
    pub fn queue_hold_release(&self) {
        self.state.lock().queue_action(PendingAction::release());
    }

    /// Queues an arbitrary pending action.
    ///
    /// An action with `hold` unset cancels any queued delivery rather than
    /// being queued itself; the constructors on [`PendingAction`] only build
    /// actions with `hold` set.
    pub fn queue_action(&self, action: PendingAction) {
        self.state.lock().queue_action(action);
    }

    /// Returns the currently queued action, if any.
    #[must_use]
    pub fn pending_action(&self) -> Option<PendingAction> {
        self.state.lock().pending_action().cloned()
    }

    /// Returns the bound device's serial number, if any.
    #[must_use]
    pub fn device_serial(&self) -> Option<String> {
        self.state.lock().serial().map(ToString::to_string)
    }

    /// Returns the last observed operating mode.
    #[must_use]
    pub fn mode(&self) -> Option<String> {
        self.state.lock().mode().map(ToString::to_string)
    }

    /// Returns the last observed temperature scale.
    #[must_use]
    pub fn temperature_scale(&self) -> Option<TemperatureScale> {
        self.state.lock().scale()
    }

    /// Returns a snapshot of the parsed status view.
    #[must_use]
    pub fn zone_status(&self) -> BTreeMap<String, ZoneStatus> {
        self.state.lock().status_zones().clone()
    }

    /// Returns a snapshot of the parsed configuration view.
    #[must_use]
    pub fn zone_config(&self) -> BTreeMap<String, ZoneConfig> {
        self.state.lock().config_zones().clone()
    }
}
