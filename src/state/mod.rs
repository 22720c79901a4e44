// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state management types.
//!
//! This module provides the single authoritative record of the bound
//! thermostat: its identity, its last uploaded configuration document, the
//! parsed zone views, and the one-shot pending action slot.
//!
//! [`SystemState`] is a plain value with no interior locking; handlers
//! receive it behind one [`parking_lot::Mutex`] (see
//! [`SharedState`](crate::state::SharedState)) and hold the lock for a full
//! request/response cycle.

mod pending_action;
mod system_state;
mod zone;

pub use pending_action::PendingAction;
pub use system_state::{SharedState, SystemState};
pub use zone::{ActivityConfig, SchedulePeriod, ZoneConfig, ZoneStatus};
