// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end tests of the device handshake cycle: upload, status, config
//! download, notifications, and the passive sub-resources.

use infinir_lib::document;
use infinir_lib::{CloudSystem, HoldSetting, PendingAction, ResponseKind, Setpoint};
use xmltree::Element;

const SERIAL: &str = "4417W002121";

const CONFIG_UPLOAD: &str = r#"<system version="1.7">
  <config>
    <mode>heat</mode><cfgem>english</cfgem>
    <zones>
      <zone id="1">
        <name>Downstairs</name>
        <enabled>on</enabled>
        <hold>off</hold><holdActivity></holdActivity><otmr></otmr>
        <activities>
          <activity id="home"><htsp>68</htsp><clsp>74</clsp><fan>off</fan></activity>
          <activity id="away"><htsp>62</htsp><clsp>80</clsp><fan>off</fan></activity>
          <activity id="manual"><htsp>70</htsp><clsp>75</clsp><fan>off</fan></activity>
        </activities>
        <program>
          <day id="Monday">
            <period id="1"><activity>home</activity><time>06:00</time><enabled>on</enabled></period>
            <period id="2"><activity>away</activity><time>08:30</time><enabled>on</enabled></period>
          </day>
          <day id="Tuesday">
            <period id="1"><activity>home</activity><time>07:00</time><enabled>off</enabled></period>
          </day>
        </program>
      </zone>
      <zone id="2">
        <name>Upstairs</name>
        <enabled>off</enabled>
        <hold>off</hold><holdActivity></holdActivity><otmr></otmr>
        <activities>
          <activity id="home"><htsp>66</htsp><clsp>76</clsp><fan>low</fan></activity>
        </activities>
      </zone>
    </zones>
  </config>
</system>"#;

const STATUS_PUSH: &str = r#"<status version="1.7">
  <cfgtype>heat</cfgtype><cfgem>english</cfgem>
  <zones>
    <zone id="1">
      <name>Downstairs</name><enabled>on</enabled>
      <currentActivity>home</currentActivity>
      <rt>71</rt><rh>45</rh><htsp>68</htsp><clsp>74</clsp>
      <fan>off</fan><hold>off</hold><otmr></otmr>
      <zoneconditioning>active_heat</zoneconditioning>
    </zone>
    <zone id="2">
      <name>Upstairs</name><enabled>off</enabled>
      <currentActivity>home</currentActivity>
      <rt>70</rt><rh>44</rh><htsp>66</htsp><clsp>76</clsp>
      <fan>low</fan><hold>off</hold><otmr></otmr>
      <zoneconditioning>idle</zoneconditioning>
    </zone>
  </zones>
</status>"#;

/// Structural element comparison: names, attributes, text, and child
/// elements must match. Namespace bookkeeping differs between a freshly
/// built tree and a serialize/reparse round trip, so it is ignored.
fn assert_same_tree(actual: &Element, expected: &Element, path: &str) {
    let path = format!("{path}/{}", expected.name);
    assert_eq!(actual.name, expected.name, "element name at {path}");
    assert_eq!(actual.attributes, expected.attributes, "attributes at {path}");
    assert_eq!(
        actual.get_text().map(std::borrow::Cow::into_owned),
        expected.get_text().map(std::borrow::Cow::into_owned),
        "text at {path}"
    );

    let actual_children: Vec<&Element> = document::child_elements(actual).collect();
    let expected_children: Vec<&Element> = document::child_elements(expected).collect();
    assert_eq!(
        actual_children.len(),
        expected_children.len(),
        "child count at {path}"
    );
    for (a, e) in actual_children.iter().zip(&expected_children) {
        assert_same_tree(a, e, &path);
    }
}

fn zones_of(root: &Element) -> &Element {
    root.get_child("zones").expect("zones subtree")
}

fn downloaded_config(system: &CloudSystem) -> Element {
    let response = system.handle_config_download(SERIAL).unwrap();
    document::parse(response.body().unwrap()).unwrap()
}

fn zone_one(config: &Element) -> &Element {
    document::children_named(zones_of(config), "zone")
        .find(|z| z.attributes["id"] == "1")
        .expect("zone 1")
}

mod config_upload {
    use super::*;

    #[test]
    fn zone_config_view_matches_upload_exactly() {
        let system = CloudSystem::new();
        system.handle_config_upload(SERIAL, CONFIG_UPLOAD).unwrap();

        let zones = system.zone_config();
        assert_eq!(zones.len(), 2);

        let zone1 = &zones["1"];
        assert_eq!(zone1.activities.len(), 3);
        assert_eq!(zone1.activities["home"].heat_to, "68");
        assert_eq!(zone1.activities["away"].cool_to, "80");
        assert_eq!(zone1.activities["manual"].fan, "off");

        assert_eq!(zone1.schedule.len(), 2);
        let monday = &zone1.schedule["Monday"];
        assert_eq!(monday.len(), 2);
        assert_eq!(monday[&2].activity, "away");
        assert_eq!(monday[&2].time, "08:30");
        assert!(!zone1.schedule["Tuesday"][&1].enabled);

        // Disabled zones are kept in the config view.
        assert_eq!(zones["2"].activities["home"].fan, "low");
    }

    #[test]
    fn upload_response_is_validated_ack() {
        let system = CloudSystem::new();
        let response = system.handle_config_upload(SERIAL, CONFIG_UPLOAD).unwrap();

        assert_eq!(response.kind(), ResponseKind::Ok);
        assert!(response.body().is_none());
        assert!(response.validator().is_some());
    }
}

mod config_download {
    use super::*;

    #[test]
    fn download_before_upload_returns_empty_body() {
        let system = CloudSystem::new();
        let response = system.handle_config_download(SERIAL).unwrap();
        assert_eq!(response.body(), Some(""));
    }

    #[test]
    fn download_reflects_upload_modulo_stamping() {
        let system = CloudSystem::new();
        system.handle_config_upload(SERIAL, CONFIG_UPLOAD).unwrap();

        let config = downloaded_config(&system);
        assert_eq!(config.name, "config");
        assert_eq!(config.attributes["version"], "1.42");

        // Front matter: self link, system link, timestamp.
        let children: Vec<&Element> = document::child_elements(&config).collect();
        assert_eq!(children[0].name, "link");
        assert_eq!(children[0].attributes["rel"], "self");
        assert_eq!(children[1].name, "link");
        assert_eq!(children[2].name, "timestamp");

        // The zone substructure equals the uploaded one.
        let uploaded = document::parse(CONFIG_UPLOAD).unwrap();
        let uploaded_config = uploaded.get_child("config").unwrap();
        assert_same_tree(zones_of(&config), zones_of(uploaded_config), "");
    }

    #[test]
    fn repeated_download_is_idempotent() {
        let system = CloudSystem::new();
        system.handle_config_upload(SERIAL, CONFIG_UPLOAD).unwrap();

        let first = downloaded_config(&system);
        let second = downloaded_config(&system);
        assert_same_tree(zone_one(&second), zone_one(&first), "");
    }
}

mod status {
    use super::*;

    #[test]
    fn status_rebuilds_views_and_reports_flags() {
        let system = CloudSystem::new();
        system.handle_config_upload(SERIAL, CONFIG_UPLOAD).unwrap();

        let response = system.handle_status(SERIAL, STATUS_PUSH).unwrap();
        let doc = document::parse(response.body().unwrap()).unwrap();
        assert_eq!(
            document::required_text(&doc, "serverHasChanges").unwrap(),
            "false"
        );
        assert_eq!(
            document::required_text(&doc, "configHasChanges").unwrap(),
            "false"
        );

        assert_eq!(system.mode().as_deref(), Some("heat"));
        let zones = system.zone_status();
        assert_eq!(zones["1"].name, "Downstairs");
        assert_eq!(zones["1"].conditioning, "active_heat");
        assert_eq!(zones["1"].hold, HoldSetting::Off);
    }

    #[test]
    fn disabled_zone_is_excluded_from_status_view() {
        let system = CloudSystem::new();
        system.handle_status(SERIAL, STATUS_PUSH).unwrap();

        let zones = system.zone_status();
        assert!(zones.contains_key("1"));
        assert!(!zones.contains_key("2"));
    }

    #[test]
    fn status_before_any_upload_asks_for_config() {
        let system = CloudSystem::new();
        let response = system.handle_status(SERIAL, STATUS_PUSH).unwrap();
        let doc = document::parse(response.body().unwrap()).unwrap();
        assert_eq!(
            document::required_text(&doc, "serverHasChanges").unwrap(),
            "true"
        );
        assert_eq!(
            document::required_text(&doc, "configHasChanges").unwrap(),
            "true"
        );
    }

    #[test]
    fn queued_action_raises_change_flags() {
        let system = CloudSystem::new();
        system.handle_config_upload(SERIAL, CONFIG_UPLOAD).unwrap();
        system.queue_hold("home", None, Some("08:00"));

        let response = system.handle_status(SERIAL, STATUS_PUSH).unwrap();
        let doc = document::parse(response.body().unwrap()).unwrap();
        assert_eq!(
            document::required_text(&doc, "serverHasChanges").unwrap(),
            "true"
        );
    }

    #[test]
    fn wrong_version_leaves_state_untouched() {
        let system = CloudSystem::new();
        system.handle_config_upload(SERIAL, CONFIG_UPLOAD).unwrap();
        system.handle_status(SERIAL, STATUS_PUSH).unwrap();

        let foreign = STATUS_PUSH
            .replace("version=\"1.7\"", "version=\"1.9\"")
            .replace("<cfgtype>heat</cfgtype>", "<cfgtype>cool</cfgtype>");
        let response = system.handle_status(SERIAL, &foreign).unwrap();

        let doc = document::parse(response.body().unwrap()).unwrap();
        assert_eq!(
            document::required_text(&doc, "serverHasChanges").unwrap(),
            "false"
        );
        // Mode still reflects the accepted push, not the foreign one.
        assert_eq!(system.mode().as_deref(), Some("heat"));
    }

    #[test]
    fn malformed_status_fails_request() {
        let system = CloudSystem::new();
        assert!(system.handle_status(SERIAL, "<status").is_err());
    }
}

mod pending_actions {
    use super::*;

    #[test]
    fn manual_hold_is_delivered_once() {
        let system = CloudSystem::new();
        system.handle_config_upload(SERIAL, CONFIG_UPLOAD).unwrap();
        system.queue_hold("manual", Some(Setpoint::new(72).unwrap()), Some("23:00"));

        let config = downloaded_config(&system);
        let zone = zone_one(&config);
        assert_eq!(document::required_text(zone, "hold").unwrap(), "on");
        assert_eq!(
            document::required_text(zone, "holdActivity").unwrap(),
            "manual"
        );
        assert_eq!(document::required_text(zone, "otmr").unwrap(), "23:00");

        let manual = document::children_named(zone.get_child("activities").unwrap(), "activity")
            .find(|a| a.attributes["id"] == "manual")
            .unwrap();
        assert_eq!(document::required_text(manual, "htsp").unwrap(), "72");

        // Consumed: the slot is clear and the next download shows the
        // template's own hold state again.
        assert!(system.pending_action().is_none());
        let again = downloaded_config(&system);
        let zone = zone_one(&again);
        assert_eq!(document::required_text(zone, "hold").unwrap(), "off");
        assert!(document::optional_text(zone, "holdActivity").is_none());
    }

    #[test]
    fn release_clears_hold_fields_in_download() {
        let system = CloudSystem::new();
        system.handle_config_upload(SERIAL, CONFIG_UPLOAD).unwrap();
        system.queue_hold_release();

        let config = downloaded_config(&system);
        let zone = zone_one(&config);
        assert_eq!(document::required_text(zone, "hold").unwrap(), "off");
        assert!(document::optional_text(zone, "otmr").is_none());
        assert!(system.pending_action().is_none());
    }

    #[test]
    fn action_queued_before_upload_survives_empty_download() {
        let system = CloudSystem::new();
        system.queue_hold("home", None, None);

        // No template yet: empty body, and the action is *not* consumed.
        let response = system.handle_config_download(SERIAL).unwrap();
        assert_eq!(response.body(), Some(""));
        assert!(system.pending_action().is_some());
    }

    #[test]
    fn non_hold_action_raises_no_flags() {
        let system = CloudSystem::new();
        system.handle_config_upload(SERIAL, CONFIG_UPLOAD).unwrap();
        system.queue_hold("home", None, None);

        // A caller-built action without a hold cancels the queued delivery;
        // the device is not asked to re-poll for an empty merge.
        system.queue_action(PendingAction {
            hold: false,
            activity: None,
            setpoint: None,
            until: None,
        });
        assert!(system.pending_action().is_none());

        let response = system.handle_status(SERIAL, STATUS_PUSH).unwrap();
        let doc = document::parse(response.body().unwrap()).unwrap();
        assert_eq!(
            document::required_text(&doc, "serverHasChanges").unwrap(),
            "false"
        );

        let config = downloaded_config(&system);
        let zone = zone_one(&config);
        assert_eq!(document::required_text(zone, "hold").unwrap(), "off");
    }

    #[test]
    fn newer_action_replaces_queued_one() {
        let system = CloudSystem::new();
        system.handle_config_upload(SERIAL, CONFIG_UPLOAD).unwrap();
        system.queue_hold("away", None, None);
        system.queue_hold("home", None, Some("08:00"));

        let config = downloaded_config(&system);
        let zone = zone_one(&config);
        assert_eq!(
            document::required_text(zone, "holdActivity").unwrap(),
            "home"
        );
    }
}

mod notifications {
    use super::*;

    const NOTIFICATION: &str = r#"<system version="1.7"><notification>
        <code>200</code><message>Config applied</message>
    </notification></system>"#;

    #[test]
    fn success_notification_acks() {
        let system = CloudSystem::new();
        let response = system.handle_notification(SERIAL, NOTIFICATION).unwrap();
        assert_eq!(response.kind(), ResponseKind::Ok);
        assert!(response.body().is_none());
    }

    #[test]
    fn failure_notification_still_acks() {
        let system = CloudSystem::new();
        let body = NOTIFICATION.replace("200", "500");
        let response = system.handle_notification(SERIAL, &body).unwrap();
        assert_eq!(response.kind(), ResponseKind::Ok);
    }

    #[test]
    fn wrong_version_notification_is_inert() {
        let system = CloudSystem::new();
        let body = NOTIFICATION.replace("version=\"1.7\"", "version=\"1.9\"");
        let response = system.handle_notification(SERIAL, &body).unwrap();
        assert_eq!(response.kind(), ResponseKind::Ok);
        assert!(response.body().is_none());
        assert!(response.validator().is_none());
    }
}

mod passive_resources {
    use super::*;

    #[test]
    fn utility_events_returns_fixed_document() {
        let system = CloudSystem::new();
        let response = system
            .handle_passive("utility_events", SERIAL, "")
            .unwrap();
        let doc = document::parse(response.body().unwrap()).unwrap();
        assert_eq!(doc.name, "utility_events");
    }

    #[test]
    fn diagnostics_are_not_found() {
        let system = CloudSystem::new();
        for name in ["root_cause", "odu_faults"] {
            let response = system.handle_passive(name, SERIAL, "<report/>").unwrap();
            assert_eq!(response.kind(), ResponseKind::NotFound, "{name}");
        }
    }

    #[test]
    fn unit_configs_ack_with_validator() {
        let system = CloudSystem::new();
        for name in ["dealer", "idu_config", "odu_config"] {
            let response = system.handle_passive(name, SERIAL, "<x/>").unwrap();
            assert!(response.validator().is_some(), "{name}");
        }
    }
}
