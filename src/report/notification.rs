// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser for change notifications.

use xmltree::Element;

use crate::document;
use crate::error::ParseError;

/// A device notification confirming an applied change.
///
/// The device posts one of these after acting on a configuration it
/// downloaded, and also when its configuration changes locally at the touch
/// screen. Code `200` means the change was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Result code, `200` on success.
    pub code: String,
    /// Human-readable outcome message.
    pub message: String,
}

impl Notification {
    /// Parses a notification from its document root.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the `<notification>` element or its
    /// code/message children are absent.
    pub fn from_element(root: &Element) -> Result<Self, ParseError> {
        let body = root
            .get_child("notification")
            .ok_or_else(|| ParseError::MissingField(format!("{}/notification", root.name)))?;
        Ok(Self {
            code: document::required_text(body, "code")?,
            message: document::required_text(body, "message")?,
        })
    }

    /// Returns `true` when the device reports the change was applied.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code == "200"
    }
}
