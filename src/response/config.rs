// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Config download construction: template restamping and pending-action
//! merging.
//!
//! The download handler never serializes mid-merge: [`restamp_template`]
//! and [`merge_pending_action`] are pure functions over element trees, so
//! the merge semantics are testable without any serialization.

use xmltree::{Element, XMLNode};

use crate::document;
use crate::protocol::{CONTROLLED_ZONE_ID, MANUAL_ACTIVITY};
use crate::state::PendingAction;

/// Deep-copies the stored template and stamps it for the wire: server
/// version, atom namespace, and (at the front, in order) the self link, the
/// system link, and a fresh UTC timestamp.
#[must_use]
pub fn restamp_template(template: &Element, serial: &str) -> Element {
    let mut config = template.clone();
    document::stamp_outbound_root(&mut config);

    config
        .children
        .insert(0, XMLNode::Element(document::timestamp_element()));
    config
        .children
        .insert(0, XMLNode::Element(document::system_link(serial)));
    config.children.insert(
        0,
        XMLNode::Element(document::self_link(serial, "config")),
    );

    config
}

/// Applies a pending action to the controlled zone of a restamped config.
///
/// Only the zone with id `"1"` is eligible, and only while the template
/// marks it enabled; the vendor protocol has never been observed holding
/// any other zone, so this limitation is preserved rather than generalized.
/// Zones without an `enabled` element are treated as disabled.
pub fn merge_pending_action(config: &mut Element, action: &PendingAction) {
    let Some(zone_list) = config.get_mut_child("zones") else {
        return;
    };
    for node in &mut zone_list.children {
        let Some(zone) = node.as_mut_element() else {
            continue;
        };
        if zone.name != "zone" {
            continue;
        }
        if document::optional_text(zone, "enabled").as_deref() != Some("on") {
            continue;
        }
        if zone.attributes.get("id").map(String::as_str) != Some(CONTROLLED_ZONE_ID) {
            continue;
        }
        apply_pending_action(zone, action);
    }
}

/// Rewrites one zone element according to a pending action.
///
/// An action carrying an activity engages the hold; an action without one
/// releases it and clears the hold activity and timer. When the held
/// activity is `manual`, the manual activity's heat setpoint is overwritten
/// with the action's target temperature.
pub fn apply_pending_action(zone: &mut Element, action: &PendingAction) {
    if !action.hold {
        return;
    }

    if let Some(activity) = action.activity.as_deref() {
        document::set_child_text(zone, "hold", "on");
        document::set_child_text(zone, "holdActivity", activity);
        document::set_child_text(zone, "otmr", action.until.as_deref().unwrap_or(""));
    } else {
        document::set_child_text(zone, "hold", "off");
        document::set_child_text(zone, "holdActivity", "");
        document::set_child_text(zone, "otmr", "");
    }

    if action.activity.as_deref() == Some(MANUAL_ACTIVITY)
        && let Some(setpoint) = action.setpoint
        && let Some(activities) = zone.get_mut_child("activities")
    {
        for node in &mut activities.children {
            let Some(activity) = node.as_mut_element() else {
                continue;
            };
            if activity.name != "activity" {
                continue;
            }
            if activity.attributes.get("id").map(String::as_str) != Some(MANUAL_ACTIVITY) {
                continue;
            }
            document::set_child_text(activity, "htsp", &setpoint.to_string());
        }
    }
}
