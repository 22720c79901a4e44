// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types of the Infinity protocol.
//!
//! This module provides type-safe representations of the small enumerated
//! and bounded values the thermostat exchanges as bare strings on the wire:
//!
//! - [`HoldSetting`] - whether a zone hold is engaged (`on`/`off`)
//! - [`TemperatureScale`] - the configured display scale (`english`/`metric`)
//! - [`Setpoint`] - a bounded target temperature in whole degrees

mod hold;
mod scale;
mod setpoint;

pub use hold::HoldSetting;
pub use scale::TemperatureScale;
pub use setpoint::Setpoint;
