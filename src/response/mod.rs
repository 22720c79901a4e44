// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outbound response construction.
//!
//! Handlers do not speak HTTP; they produce a [`SystemResponse`] value and
//! the transport layer maps it to a wire response. A response is one of:
//!
//! - an empty acknowledgement, optionally carrying a fixed validator token
//!   the transport emits as an entity validator header
//! - an XML document body (`application/xml; charset=utf-8`)
//! - a not-found result for explicitly unsupported sub-resources

mod config;
mod status;

pub use config::{apply_pending_action, merge_pending_action, restamp_template};
pub use status::build_status_document;

use crate::protocol::CONTENT_TYPE_XML;

/// Outcome kind the transport maps to an HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// Successful exchange.
    Ok,
    /// Sub-resource is explicitly unsupported.
    NotFound,
}

/// A transport-agnostic response from a system handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemResponse {
    kind: ResponseKind,
    body: Option<String>,
    validator: Option<&'static str>,
}

impl SystemResponse {
    /// An empty acknowledgement.
    #[must_use]
    pub const fn empty_ack() -> Self {
        Self {
            kind: ResponseKind::Ok,
            body: None,
            validator: None,
        }
    }

    /// An empty acknowledgement carrying a fixed validator token.
    #[must_use]
    pub const fn empty_ack_with_validator(token: &'static str) -> Self {
        Self {
            kind: ResponseKind::Ok,
            body: None,
            validator: Some(token),
        }
    }

    /// A response with an XML document body.
    #[must_use]
    pub const fn document(body: String) -> Self {
        Self {
            kind: ResponseKind::Ok,
            body: Some(body),
            validator: None,
        }
    }

    /// A document response carrying a fixed validator token.
    #[must_use]
    pub const fn document_with_validator(body: String, token: &'static str) -> Self {
        Self {
            kind: ResponseKind::Ok,
            body: Some(body),
            validator: Some(token),
        }
    }

    /// A not-found result.
    #[must_use]
    pub const fn not_found() -> Self {
        Self {
            kind: ResponseKind::NotFound,
            body: None,
            validator: None,
        }
    }

    /// Returns the outcome kind.
    #[must_use]
    pub const fn kind(&self) -> ResponseKind {
        self.kind
    }

    /// Returns the response body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns the fixed validator token, if any.
    #[must_use]
    pub const fn validator(&self) -> Option<&'static str> {
        self.validator
    }

    /// Returns the content type the transport should declare, `None` for
    /// bodyless responses.
    #[must_use]
    pub fn content_type(&self) -> Option<&'static str> {
        self.body.as_ref().map(|_| CONTENT_TYPE_XML)
    }
}
