// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire-level constants of the Infinity cloud protocol.
//!
//! Devices upload documents tagged with [`DEVICE_VERSION`]; every document
//! the server produces is tagged with [`SERVER_VERSION`]. The ping-rate
//! values in [`PING_RATES`] are protocol literals the thermostat expects
//! verbatim, not computed values; changing them alters how often the device
//! polls each sub-resource.

/// Protocol version the device stamps on its uploads.
///
/// Documents carrying any other version degrade to an inert acknowledgement.
pub const DEVICE_VERSION: &str = "1.7";

/// Protocol version stamped on every outbound document.
pub const SERVER_VERSION: &str = "1.42";

/// Atom namespace prefix used by outbound link elements.
pub const ATOM_PREFIX: &str = "atom";

/// Atom namespace URI declared on outbound document roots.
pub const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";

/// Base URL of the vendor API, reproduced in outbound link elements.
pub const API_BASE_URL: &str = "http://www.api.ing.carrier.com";

/// Content type of every non-empty response body.
pub const CONTENT_TYPE_XML: &str = "application/xml; charset=utf-8";

/// Fixed poll intervals sent in every status response, as
/// `(element name, seconds)` pairs in wire order.
pub const PING_RATES: &[(&str, &str)] = &[
    ("pingRate", "10"),
    ("iduStatusPingRate", "93600"),
    ("iduFaultsPingRate", "86400"),
    ("oduStatusPingRate", "90000"),
    ("oduFaultsPingRate", "82800"),
    ("historyPingRate", "75600"),
    ("equipEventsPingRate", "79200"),
    ("rootCausePingRate", "72000"),
];

/// Change flags that are always reported `false` because the emulator does
/// not model the corresponding sub-resources.
pub const UNMODELED_CHANGE_FLAGS: &[&str] = &[
    "dealerHasChanges",
    "dealerLogoHasChanges",
    "oduConfigHasChanges",
    "iduConfigHasChanges",
    "utilityEventsHasChanges",
    "sensorConfigHasChanges",
    "sensorProfileHasChanges",
    "sensorDiagnosticHasChanges",
];

/// Validator token returned with a config-upload acknowledgement.
pub const CONFIG_UPLOAD_VALIDATOR: &str = "0180958508d7b88afdc6a55c";

/// Validator token returned with a config-download response.
pub const CONFIG_DOWNLOAD_VALIDATOR: &str = "00de388808d7b88cd8f146a1";

/// The only zone eligible for pending-action injection.
///
/// The vendor protocol has never been observed applying server-side holds to
/// any other zone; this is preserved as a documented limitation rather than
/// generalized.
pub const CONTROLLED_ZONE_ID: &str = "1";

/// Activity name whose heat setpoint is overwritten by a manual hold.
pub const MANUAL_ACTIVITY: &str = "manual";
