// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parsers for the documents a thermostat uploads.
//!
//! The device pushes three kinds of payload the emulator actually reads:
//!
//! - the full configuration document (base `/systems/{sn}` resource),
//!   parsed by [`ConfigReport`]
//! - the periodic runtime status (`/status`), parsed by [`StatusReport`]
//! - change acknowledgements (`/notifications`), parsed by [`Notification`]
//!
//! Parsers are pure: they read an already-parsed element tree and build the
//! store's view types, without touching shared state or logging. Handlers
//! check the protocol version (via [`protocol_version`]) before field-level
//! parsing, since a foreign version makes no shape guarantees.

mod config_report;
mod notification;
mod status_report;

pub use config_report::ConfigReport;
pub use notification::Notification;
pub use status_report::StatusReport;

use xmltree::Element;

use crate::document;
use crate::error::ParseError;

/// Reads the protocol version attribute from an uploaded document root.
///
/// # Errors
///
/// Returns [`ParseError::MissingAttribute`] if the root carries no
/// `version` attribute.
pub fn protocol_version(root: &Element) -> Result<&str, ParseError> {
    document::attr(root, "version")
}
