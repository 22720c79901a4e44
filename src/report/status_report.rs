// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser for periodic status pushes.

use std::collections::BTreeMap;

use xmltree::Element;

use crate::document;
use crate::error::ParseError;
use crate::state::ZoneStatus;
use crate::types::{HoldSetting, TemperatureScale};

/// Parsed content of a `/status` push.
///
/// The zone map contains only zones whose `enabled` flag is `on`; the device
/// includes stubs for all of its potential zones, and the disabled ones
/// carry no meaningful readings.
///
/// Field policy: every runtime field is required except `otmr` (absent when
/// no hold timer is set) and `hold` (absent defaults to `off`).
#[derive(Debug, Clone)]
pub struct StatusReport {
    /// Operating mode from `cfgtype` (e.g. `heat`, `cool`, `auto`, `off`).
    pub mode: String,
    /// Temperature scale from `cfgem`.
    pub scale: TemperatureScale,
    /// Runtime status per enabled zone, keyed by zone id.
    pub zones: BTreeMap<String, ZoneStatus>,
}

impl StatusReport {
    /// Parses a status push from its document root.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if a required field is absent or carries a
    /// value the protocol does not allow.
    pub fn from_element(root: &Element) -> Result<Self, ParseError> {
        let mode = document::required_text(root, "cfgtype")?;
        let scale: TemperatureScale = document::required_text(root, "cfgem")?
            .parse()
            .map_err(|err| ParseError::InvalidValue {
                field: format!("{}/cfgem", root.name),
                message: format!("{err}"),
            })?;

        let mut zones = BTreeMap::new();
        if let Some(zone_list) = root.get_child("zones") {
            for zone in document::children_named(zone_list, "zone") {
                if document::required_text(zone, "enabled")? != "on" {
                    continue;
                }
                let id = document::attr(zone, "id")?.to_string();
                zones.insert(id, parse_zone(zone)?);
            }
        }

        Ok(Self { mode, scale, zones })
    }
}

fn parse_zone(zone: &Element) -> Result<ZoneStatus, ParseError> {
    let hold = match document::optional_text(zone, "hold") {
        Some(text) => text.parse::<HoldSetting>().map_err(|err| {
            ParseError::InvalidValue {
                field: format!("{}/hold", zone.name),
                message: format!("{err}"),
            }
        })?,
        None => HoldSetting::Off,
    };

    Ok(ZoneStatus {
        name: document::required_text(zone, "name")?,
        activity: document::required_text(zone, "currentActivity")?,
        temperature: document::required_text(zone, "rt")?,
        humidity: document::required_text(zone, "rh")?,
        heat_to: document::required_text(zone, "htsp")?,
        cool_to: document::required_text(zone, "clsp")?,
        fan: document::required_text(zone, "fan")?,
        hold,
        until: document::optional_text(zone, "otmr"),
        conditioning: document::required_text(zone, "zoneconditioning")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_body(zones: &str) -> String {
        format!(
            r#"<status version="1.7"><cfgtype>heat</cfgtype><cfgem>english</cfgem><zones>{zones}</zones></status>"#
        )
    }

    fn zone_body(id: &str, enabled: &str) -> String {
        format!(
            r#"<zone id="{id}"><name>Zone {id}</name><enabled>{enabled}</enabled>
               <currentActivity>home</currentActivity><rt>71</rt><rh>45</rh>
               <htsp>68</htsp><clsp>74</clsp><fan>off</fan><hold>off</hold>
               <otmr></otmr><zoneconditioning>idle</zoneconditioning></zone>"#
        )
    }

    #[test]
    fn parses_enabled_zone() {
        let body = status_body(&zone_body("1", "on"));
        let root = document::parse(&body).unwrap();
        let report = StatusReport::from_element(&root).unwrap();

        assert_eq!(report.mode, "heat");
        assert_eq!(report.scale, TemperatureScale::English);

        let zone = &report.zones["1"];
        assert_eq!(zone.name, "Zone 1");
        assert_eq!(zone.activity, "home");
        assert_eq!(zone.temperature, "71");
        assert_eq!(zone.hold, HoldSetting::Off);
        assert!(zone.until.is_none());
    }

    #[test]
    fn skips_disabled_zone() {
        let zones = format!("{}{}", zone_body("1", "on"), zone_body("2", "off"));
        let body = status_body(&zones);
        let root = document::parse(&body).unwrap();
        let report = StatusReport::from_element(&root).unwrap();

        assert!(report.zones.contains_key("1"));
        assert!(!report.zones.contains_key("2"));
    }

    #[test]
    fn missing_runtime_field_fails() {
        let body = status_body(
            r#"<zone id="1"><name>Z</name><enabled>on</enabled>
               <currentActivity>home</currentActivity></zone>"#,
        );
        let root = document::parse(&body).unwrap();
        let err = StatusReport::from_element(&root).unwrap_err();
        assert!(matches!(err, ParseError::MissingField(_)));
    }

    #[test]
    fn absent_hold_defaults_off() {
        let body = status_body(
            r#"<zone id="1"><name>Z</name><enabled>on</enabled>
               <currentActivity>home</currentActivity><rt>70</rt><rh>40</rh>
               <htsp>68</htsp><clsp>74</clsp><fan>off</fan>
               <zoneconditioning>idle</zoneconditioning></zone>"#,
        );
        let root = document::parse(&body).unwrap();
        let report = StatusReport::from_element(&root).unwrap();
        assert_eq!(report.zones["1"].hold, HoldSetting::Off);
    }

    #[test]
    fn invalid_scale_fails() {
        let body = r#"<status version="1.7"><cfgtype>heat</cfgtype><cfgem>kelvin</cfgem><zones/></status>"#;
        let root = document::parse(body).unwrap();
        let err = StatusReport::from_element(&root).unwrap_err();
        assert!(matches!(err, ParseError::InvalidValue { .. }));
    }

    #[test]
    fn hold_timer_is_carried_through() {
        let body = status_body(
            r#"<zone id="1"><name>Z</name><enabled>on</enabled>
               <currentActivity>manual</currentActivity><rt>70</rt><rh>40</rh>
               <htsp>72</htsp><clsp>74</clsp><fan>off</fan><hold>on</hold>
               <otmr>23:00</otmr><zoneconditioning>active_heat</zoneconditioning></zone>"#,
        );
        let root = document::parse(&body).unwrap();
        let report = StatusReport::from_element(&root).unwrap();

        let zone = &report.zones["1"];
        assert_eq!(zone.hold, HoldSetting::On);
        assert_eq!(zone.until.as_deref(), Some("23:00"));
    }
}
