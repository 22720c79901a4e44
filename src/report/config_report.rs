// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser for full configuration uploads.

use std::collections::BTreeMap;

use xmltree::Element;

use crate::document;
use crate::error::ParseError;
use crate::state::{ActivityConfig, SchedulePeriod, ZoneConfig};

/// Parsed content of a full configuration push to the base system resource.
///
/// Carries both the raw `<config>` subtree (stored verbatim as the template
/// for future downloads) and the zone view rebuilt from it. Unlike the
/// status view, disabled zones are kept: they stay present in the raw
/// template and may reappear.
#[derive(Debug, Clone)]
pub struct ConfigReport {
    /// The device's `<config>` subtree, unmodified.
    pub template: Element,
    /// Parsed configuration per zone, keyed by zone id.
    pub zones: BTreeMap<String, ZoneConfig>,
}

impl ConfigReport {
    /// Parses a configuration upload from its document root.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the `<config>` subtree or any required
    /// field within it is absent or malformed.
    pub fn from_element(root: &Element) -> Result<Self, ParseError> {
        let template = root
            .get_child("config")
            .cloned()
            .ok_or_else(|| ParseError::MissingField(format!("{}/config", root.name)))?;

        let mut zones = BTreeMap::new();
        if let Some(zone_list) = template.get_child("zones") {
            for zone in document::children_named(zone_list, "zone") {
                let id = document::attr(zone, "id")?.to_string();
                zones.insert(id, parse_zone(zone)?);
            }
        }

        Ok(Self { template, zones })
    }
}

fn parse_zone(zone: &Element) -> Result<ZoneConfig, ParseError> {
    let mut config = ZoneConfig::default();

    if let Some(activities) = zone.get_child("activities") {
        for activity in document::children_named(activities, "activity") {
            let id = document::attr(activity, "id")?.to_string();
            config.activities.insert(
                id,
                ActivityConfig {
                    heat_to: document::required_text(activity, "htsp")?,
                    cool_to: document::required_text(activity, "clsp")?,
                    fan: document::required_text(activity, "fan")?,
                },
            );
        }
    }

    if let Some(program) = zone.get_child("program") {
        for day in document::children_named(program, "day") {
            let day_id = document::attr(day, "id")?.to_string();
            let mut periods = BTreeMap::new();
            for period in document::children_named(day, "period") {
                let index: u8 = document::attr(period, "id")?.parse().map_err(|_| {
                    ParseError::InvalidValue {
                        field: "period@id".to_string(),
                        message: "not an integer".to_string(),
                    }
                })?;
                periods.insert(
                    index,
                    SchedulePeriod {
                        activity: document::required_text(period, "activity")?,
                        time: document::required_text(period, "time")?,
                        enabled: document::required_text(period, "enabled")? == "on",
                    },
                );
            }
            config.schedule.insert(day_id, periods);
        }
    }

    Ok(config)
}
