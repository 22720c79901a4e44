// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `InfiniR` Lib - a Rust library emulating the Carrier Infinity cloud
//! service.
//!
//! Infinity Touch thermostats periodically call their vendor cloud to upload
//! status and configuration and to fetch pending changes. Pointed at this
//! emulator instead, a thermostat keeps working while every exchange stays
//! on the local network, and a control-plane of your own can queue holds for
//! the device to pick up on its next poll.
//!
//! The crate is the protocol core only: it parses the device's XML
//! handshakes, maintains the single authoritative device state, and builds
//! the response the device expects at each sub-resource. HTTP transport,
//! routing, and header construction belong to the embedding application.
//!
//! # Supported exchanges
//!
//! - **Config upload**: the device pushes its full configuration; the
//!   emulator stores it verbatim as the template for every later download
//! - **Status push**: periodic runtime readings; the reply tells the device
//!   whether to re-poll for configuration
//! - **Config download**: the stored template with at most one queued
//!   action merged in, delivered single-shot
//! - **Notifications**: device acknowledgements of applied changes
//! - **Passive sub-resources**: profile, dealer, unit configs, utility
//!   events, and the explicitly unsupported diagnostics
//!
//! # Quick Start
//!
//! ```
//! use infinir_lib::{CloudSystem, Setpoint};
//!
//! # fn main() -> infinir_lib::Result<()> {
//! let system = CloudSystem::new();
//!
//! // The transport layer forwards each device request:
//! let upload = r#"<system version="1.7"><config><zones>
//!     <zone id="1"><enabled>on</enabled></zone>
//! </zones></config></system>"#;
//! system.handle_config_upload("4417W002121", upload)?;
//!
//! // A control-plane queues a hold; the device receives it on its next
//! // config fetch and the action is cleared.
//! system.queue_hold("manual", Some(Setpoint::new(72)?), Some("23:00"));
//! let response = system.handle_config_download("4417W002121")?;
//! assert!(response.body().unwrap().contains("manual"));
//! assert!(system.pending_action().is_none());
//! # Ok(())
//! # }
//! ```
//!
//! # Limitations
//!
//! One bound device per store (a second device overwrites the first), and
//! pending actions only ever target zone `"1"`; both mirror the vendor
//! protocol as observed and are documented rather than generalized.

pub mod document;
pub mod error;
pub mod passive;
pub mod protocol;
pub mod report;
pub mod response;
pub mod state;
mod system;
pub mod types;

pub use error::{Error, ParseError, Result, ValueError};
pub use passive::{PassiveReply, PassiveResource};
pub use report::{ConfigReport, Notification, StatusReport};
pub use response::{ResponseKind, SystemResponse};
pub use state::{PendingAction, SharedState, SystemState, ZoneConfig, ZoneStatus};
pub use system::CloudSystem;
pub use types::{HoldSetting, Setpoint, TemperatureScale};
