// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Helpers over the [`xmltree`] document model.
//!
//! The device protocol is element trees all the way down, so the handlers
//! work directly on [`xmltree::Element`] values. These helpers make every
//! field access explicit about presence: a missing child or attribute comes
//! back as a [`ParseError`] naming the path, never an implicit panic.
//!
//! # Examples
//!
//! ```
//! use infinir_lib::document;
//!
//! let root = document::parse("<zone id=\"1\"><name>Home</name></zone>").unwrap();
//! assert_eq!(document::attr(&root, "id").unwrap(), "1");
//! assert_eq!(document::required_text(&root, "name").unwrap(), "Home");
//! assert!(document::required_text(&root, "rt").is_err());
//! ```

use chrono::Utc;
use xmltree::{Element, EmitterConfig, Namespace, XMLNode};

use crate::error::{Error, ParseError};
use crate::protocol::{API_BASE_URL, ATOM_NAMESPACE, ATOM_PREFIX, SERVER_VERSION};

/// Parses a device payload into an element tree.
///
/// # Errors
///
/// Returns [`ParseError::Malformed`] if the payload is not well-formed XML.
pub fn parse(body: &str) -> Result<Element, ParseError> {
    Element::parse(body.as_bytes()).map_err(ParseError::from)
}

/// Serializes an element tree without an XML declaration.
///
/// # Errors
///
/// Returns [`Error::Write`] if the emitter rejects the tree.
pub fn serialize(root: &Element) -> Result<String, Error> {
    let mut buf = Vec::new();
    let config = EmitterConfig::new().write_document_declaration(false);
    root.write_with_config(&mut buf, config)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Returns a required attribute of an element.
///
/// # Errors
///
/// Returns [`ParseError::MissingAttribute`] if the attribute is absent.
pub fn attr<'a>(element: &'a Element, name: &str) -> Result<&'a str, ParseError> {
    element
        .attributes
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingAttribute {
            element: element.name.clone(),
            attribute: name.to_string(),
        })
}

/// Returns the text of a required child element.
///
/// An absent child, or a child with no text content, both count as missing.
///
/// # Errors
///
/// Returns [`ParseError::MissingField`] naming `parent/child`.
pub fn required_text(parent: &Element, child: &str) -> Result<String, ParseError> {
    optional_text(parent, child)
        .ok_or_else(|| ParseError::MissingField(format!("{}/{}", parent.name, child)))
}

/// Returns the text of a child element, or `None` if the child is absent
/// or empty.
#[must_use]
pub fn optional_text(parent: &Element, child: &str) -> Option<String> {
    parent
        .get_child(child)
        .and_then(|el| el.get_text().map(|t| t.into_owned()))
}

/// Iterates over the child *elements* of an element, skipping text nodes.
pub fn child_elements(parent: &Element) -> impl Iterator<Item = &Element> {
    parent.children.iter().filter_map(XMLNode::as_element)
}

/// Iterates over the child elements with a given name.
pub fn children_named<'a>(
    parent: &'a Element,
    name: &'a str,
) -> impl Iterator<Item = &'a Element> + 'a {
    child_elements(parent).filter(move |el| el.name == name)
}

/// Sets the text of a named child, creating the child if it does not exist.
///
/// An empty value clears the child's text entirely.
pub fn set_child_text(parent: &mut Element, name: &str, value: &str) {
    if parent.get_child(name).is_none() {
        parent.children.push(XMLNode::Element(Element::new(name)));
    }
    // get_child above guarantees the child exists now
    if let Some(child) = parent.get_mut_child(name) {
        child
            .children
            .retain(|node| !matches!(node, XMLNode::Text(_)));
        if !value.is_empty() {
            child.children.push(XMLNode::Text(value.to_string()));
        }
    }
}

/// Returns the current UTC time in the wire format the device expects.
#[must_use]
pub fn utc_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Builds a `<timestamp>` element holding the current UTC time.
#[must_use]
pub fn timestamp_element() -> Element {
    let mut ts = Element::new("timestamp");
    ts.children.push(XMLNode::Text(utc_timestamp()));
    ts
}

/// Builds an `<atom:link>` element with the given relation and href.
#[must_use]
pub fn atom_link(rel: &str, href: &str) -> Element {
    let mut link = Element::new("link");
    link.prefix = Some(ATOM_PREFIX.to_string());
    link.namespace = Some(ATOM_NAMESPACE.to_string());
    link.attributes.insert("rel".to_string(), rel.to_string());
    link.attributes.insert("href".to_string(), href.to_string());
    link
}

/// Builds the self link for a system sub-resource.
#[must_use]
pub fn self_link(serial: &str, subresource: &str) -> Element {
    atom_link(
        "self",
        &format!("{API_BASE_URL}/systems/{serial}/{subresource}"),
    )
}

/// Builds the system relation link for a serial number.
#[must_use]
pub fn system_link(serial: &str) -> Element {
    atom_link(
        &format!("{API_BASE_URL}/rels/system"),
        &format!("{API_BASE_URL}/systems/{serial}"),
    )
}

/// Stamps an outbound root element with the server protocol version and the
/// atom namespace declaration.
pub fn stamp_outbound_root(root: &mut Element) {
    root.attributes
        .insert("version".to_string(), SERVER_VERSION.to_string());
    let mut ns = root.namespaces.take().unwrap_or_else(Namespace::empty);
    ns.put(ATOM_PREFIX, ATOM_NAMESPACE);
    root.namespaces = Some(ns);
}
