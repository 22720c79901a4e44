// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! One-shot queued control action.

use serde::{Deserialize, Serialize};

use crate::types::Setpoint;

/// An externally queued command delivered on the next config download.
///
/// The control-plane is the only writer of this value; the config-download
/// handler is its only consumer. Delivery is single-shot: the Store holds
/// at most one action and clears it in full the next time the device fetches
/// its configuration, whether or not anything was queued.
///
/// # Examples
///
/// ```
/// use infinir_lib::state::PendingAction;
/// use infinir_lib::types::Setpoint;
///
/// // Pin zone 1 to the manual activity at 72 degrees until 23:00.
/// let action = PendingAction::hold("manual", Some(Setpoint::new(72).unwrap()), Some("23:00"));
/// assert!(action.hold);
/// assert_eq!(action.activity.as_deref(), Some("manual"));
///
/// // Release any hold on the next download.
/// let release = PendingAction::release();
/// assert!(release.activity.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAction {
    /// Whether the action carries a hold instruction at all. Both
    /// constructors set this; an action without it delivers nothing and is
    /// treated as a cancellation when queued.
    pub hold: bool,
    /// The activity to hold the zone at; `None` releases the hold.
    pub activity: Option<String>,
    /// Target temperature, applied to the `manual` activity's heat setpoint
    /// when the held activity is `manual`.
    pub setpoint: Option<Setpoint>,
    /// When the hold should release (`HH:MM`), empty meaning indefinitely.
    pub until: Option<String>,
}

impl PendingAction {
    /// Creates an action that engages a hold at the given activity.
    #[must_use]
    pub fn hold(activity: &str, setpoint: Option<Setpoint>, until: Option<&str>) -> Self {
        Self {
            hold: true,
            activity: Some(activity.to_string()),
            setpoint,
            until: until.map(ToString::to_string),
        }
    }

    /// Creates an action that releases any hold on the controlled zone.
    #[must_use]
    pub fn release() -> Self {
        Self {
            hold: true,
            activity: None,
            setpoint: None,
            until: None,
        }
    }
}
