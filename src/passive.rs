// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Passive sub-resources.
//!
//! Most of the `/systems/{sn}/...` sub-resources carry device-to-server
//! uploads the emulator does not model: it accepts and discards the body
//! and answers with a fixed reply. Rather than one near-identical handler
//! per sub-resource, the replies live in a declarative table keyed by
//! sub-resource name; [`lookup`] resolves a name to its descriptor.
//!
//! `utility_events` is the one passive resource that must answer with a
//! well-formed (empty) document: the device parses that response.
//! `root_cause` and `odu_faults` are explicitly unsupported and answer
//! not-found, with the uploaded content logged for diagnostics.

use crate::response::SystemResponse;

/// Fixed validator token for the dealer sub-resource.
const DEALER_VALIDATOR: &str = "00f5713108d7b88afec10590";

/// Fixed validator token for the internal-unit config sub-resource.
const IDU_CONFIG_VALIDATOR: &str = "0357dfbd08d7b88aff27ec1e";

/// Fixed validator token for the external-unit config sub-resource.
const ODU_CONFIG_VALIDATOR: &str = "039f3ffe08d7b88aff98b843";

/// The well-formed empty utility-events document.
const UTILITY_EVENTS_DOCUMENT: &str =
    r#"<utility_events version="1.42" xmlns:atom="http://www.w3.org/2005/Atom"/>"#;

/// The fixed reply of a passive sub-resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassiveReply {
    /// Empty acknowledgement, discard the body.
    EmptyAck,
    /// Empty acknowledgement carrying a fixed validator token.
    ValidatedAck(&'static str),
    /// A fixed document body.
    FixedDocument(&'static str),
    /// Explicitly unsupported; the body is logged and the reply is
    /// not-found.
    NotFound,
}

/// One entry of the passive sub-resource table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassiveResource {
    /// Sub-resource name as it appears in the URL path.
    pub name: &'static str,
    /// The reply this resource always produces.
    pub reply: PassiveReply,
}

impl PassiveResource {
    /// Builds the response for this resource.
    #[must_use]
    pub fn respond(&self) -> SystemResponse {
        match self.reply {
            PassiveReply::EmptyAck => SystemResponse::empty_ack(),
            PassiveReply::ValidatedAck(token) => SystemResponse::empty_ack_with_validator(token),
            PassiveReply::FixedDocument(body) => SystemResponse::document(body.to_string()),
            PassiveReply::NotFound => SystemResponse::not_found(),
        }
    }
}

/// The passive sub-resources, in the vendor's URL-table order.
pub const PASSIVE_RESOURCES: &[PassiveResource] = &[
    PassiveResource {
        name: "profile",
        reply: PassiveReply::EmptyAck,
    },
    PassiveResource {
        name: "dealer",
        reply: PassiveReply::ValidatedAck(DEALER_VALIDATOR),
    },
    PassiveResource {
        name: "idu_config",
        reply: PassiveReply::ValidatedAck(IDU_CONFIG_VALIDATOR),
    },
    PassiveResource {
        name: "odu_config",
        reply: PassiveReply::ValidatedAck(ODU_CONFIG_VALIDATOR),
    },
    PassiveResource {
        name: "utility_events",
        reply: PassiveReply::FixedDocument(UTILITY_EVENTS_DOCUMENT),
    },
    PassiveResource {
        name: "root_cause",
        reply: PassiveReply::NotFound,
    },
    PassiveResource {
        name: "odu_faults",
        reply: PassiveReply::NotFound,
    },
];

/// Resolves a sub-resource name to its table entry.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static PassiveResource> {
    PASSIVE_RESOURCES.iter().find(|entry| entry.name == name)
}
