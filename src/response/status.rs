// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status response construction.

use xmltree::{Element, XMLNode};

use crate::document;
use crate::protocol::{PING_RATES, UNMODELED_CHANGE_FLAGS};

/// Builds the document returned for a status push.
///
/// `has_changes` drives both `serverHasChanges` and `configHasChanges`; the
/// device reacts by fetching its configuration on its next poll cycle. Every
/// other declared change flag is the literal `false` because the emulator
/// does not model those sub-resources. The ping-rate fields are protocol
/// constants reproduced exactly for device interoperability.
#[must_use]
pub fn build_status_document(serial: &str, has_changes: bool) -> Element {
    let mut root = Element::new("status");
    document::stamp_outbound_root(&mut root);

    push(&mut root, document::self_link(serial, "status"));
    push(&mut root, document::system_link(serial));
    push(&mut root, document::timestamp_element());

    for (name, rate) in PING_RATES {
        push(&mut root, text_element(name, rate));
    }

    let flag = if has_changes { "true" } else { "false" };
    push(&mut root, text_element("serverHasChanges", flag));
    push(&mut root, text_element("configHasChanges", flag));

    for name in UNMODELED_CHANGE_FLAGS {
        push(&mut root, text_element(name, "false"));
    }

    root
}

fn text_element(name: &str, text: &str) -> Element {
    let mut el = Element::new(name);
    el.children.push(XMLNode::Text(text.to_string()));
    el
}

fn push(root: &mut Element, el: Element) {
    root.children.push(XMLNode::Element(el));
}
