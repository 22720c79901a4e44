// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `InfiniR` library.
//!
//! This module provides the error hierarchy for handling failures across the
//! library: malformed device documents, missing fields, value validation, and
//! document serialization.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur while handling a
/// thermostat exchange. A protocol-version mismatch is deliberately *not* an
/// error: handlers degrade to an inert reply instead of failing the exchange.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while parsing a device document.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while serializing an outbound document.
    #[error("document write error: {0}")]
    Write(#[from] xmltree::Error),
}

/// Errors related to parsing inbound device XML.
///
/// Every field access on a device document is explicit about presence:
/// a missing element or attribute produces [`ParseError::MissingField`] or
/// [`ParseError::MissingAttribute`] carrying the path that failed, rather
/// than an implicit crash.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The payload is not a well-formed XML document.
    #[error("malformed payload: {0}")]
    Malformed(#[from] xmltree::ParseError),

    /// A required child element (or its text) is missing.
    #[error("missing field in document: {0}")]
    MissingField(String),

    /// A required attribute is missing.
    #[error("missing attribute: {element}@{attribute}")]
    MissingAttribute {
        /// The element that was inspected.
        element: String,
        /// The attribute that was absent.
        attribute: String,
    },

    /// A field was present but its value could not be interpreted.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types with
/// invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A setpoint temperature is outside the allowed range.
    #[error("setpoint {actual} is out of range [{min}, {max}]")]
    SetpointOutOfRange {
        /// Minimum allowed value.
        min: i16,
        /// Maximum allowed value.
        max: i16,
        /// The actual value that was provided.
        actual: i16,
    },

    /// An invalid hold setting string was provided.
    #[error("invalid hold setting: {0}")]
    InvalidHoldSetting(String),

    /// An invalid temperature scale string was provided.
    #[error("invalid temperature scale: {0}")]
    InvalidTemperatureScale(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
