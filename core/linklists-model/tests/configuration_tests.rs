mod common;

use common::*;
use linklists_model::{
    ConfigurationError, ConfigurationOverride, LinkListConfiguration, PluginKind, SlotOverride,
};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── Base translation ─────────────────────────────────────────────

#[test]
fn base_translation_round_trips_exactly() {
    let mut list = new_list();
    let configuration = standard_configuration();

    list.set_configuration(&en(), configuration.clone(), &TestPlugins).unwrap();
    assert_eq!(list.configuration(&en()).unwrap(), configuration);

    // Writing back what was read is a no-op.
    let read = list.configuration(&en()).unwrap();
    list.set_configuration(&en(), read, &TestPlugins).unwrap();
    assert_eq!(list.configuration(&en()).unwrap(), configuration);
}

#[test]
fn base_translation_needs_no_plugin_lookup() {
    let mut list = new_list();
    let mut configuration = standard_configuration();
    configuration.source = slot("not_registered", json!({}));
    list.set_configuration(&en(), configuration.clone(), &TestPlugins).unwrap();
    assert_eq!(list.base_configuration(), &configuration);
}

// ── Translations ─────────────────────────────────────────────────

#[test]
fn translation_stores_only_translatable_values() {
    let mut list = new_list();
    let configuration = standard_configuration();
    list.set_configuration(&en(), configuration.clone(), &TestPlugins).unwrap();
    list.add_translation(fr()).unwrap();
    assert!(list.has_translation(&fr()));

    list.set_configuration(&fr(), translate(&configuration), &TestPlugins).unwrap();

    let mut expected = configuration.clone();
    expected.no_results_behaviour = slot("text_message", json!({"text": "the no results text FR"}));
    expected.more_link = slot(
        "custom_link",
        json!({
            "target": {"type": "custom", "url": "http://example.com/more-link FR"},
            "title_override": "test FR",
        }),
    );
    assert_eq!(list.configuration(&fr()).unwrap(), expected);

    let expected_partial = ConfigurationOverride {
        no_results_behaviour: Some(SlotOverride {
            plugin_configuration: map(json!({"text": "the no results text FR"})),
        }),
        more_link: Some(SlotOverride {
            plugin_configuration: map(json!({
                "target": {"type": "custom", "url": "http://example.com/more-link FR"},
                "title_override": "test FR",
            })),
        }),
        ..Default::default()
    };
    assert_eq!(list.stored_override(&fr()), Some(&expected_partial));

    // The base language is untouched.
    assert_eq!(list.configuration(&en()).unwrap(), configuration);
}

#[test]
fn translatable_source_configuration_is_translated() {
    let mut list = new_list();
    let mut configuration = standard_configuration();
    list.set_configuration(&en(), configuration.clone(), &TestPlugins).unwrap();
    list.add_translation(fr()).unwrap();
    list.set_configuration(&fr(), translate(&configuration), &TestPlugins).unwrap();

    configuration.source = slot("test_translatable", json!({"my_string": "Original string"}));
    list.set_configuration(&en(), configuration.clone(), &TestPlugins).unwrap();
    assert_eq!(list.configuration(&en()).unwrap(), configuration);

    list.set_configuration(&fr(), translate(&configuration), &TestPlugins).unwrap();
    let effective = list.configuration(&fr()).unwrap();
    assert_eq!(
        effective.source,
        slot("test_translatable", json!({"my_string": "Original string FR"}))
    );

    let stored = list.stored_override(&fr()).unwrap();
    assert_eq!(
        stored.source,
        Some(SlotOverride {
            plugin_configuration: map(json!({"my_string": "Original string FR"})),
        })
    );
    assert!(stored.display.is_none());
}

#[test]
fn translation_can_not_switch_plugins() {
    let mut list = new_list();
    let mut configuration = standard_configuration();
    configuration.source = slot("test_translatable", json!({"my_string": "Original string"}));
    list.set_configuration(&en(), configuration.clone(), &TestPlugins).unwrap();

    list.add_translation(fr()).unwrap();
    list.set_configuration(&fr(), translate(&configuration), &TestPlugins).unwrap();
    assert!(list.stored_override(&fr()).unwrap().source.is_some());

    // Forcing another source plugin on the translation discards the slot
    // completely, including what was stored for it before.
    let mut forced = translate(&configuration);
    forced.source = slot("test_example_source", json!({}));
    list.set_configuration(&fr(), forced, &TestPlugins).unwrap();

    assert_eq!(list.configuration(&fr()).unwrap().source, configuration.source);
    assert!(list.stored_override(&fr()).unwrap().source.is_none());
}

#[test]
fn removed_and_re_added_translation_falls_back_to_base() {
    let mut list = new_list();
    let configuration = standard_configuration();
    list.set_configuration(&en(), configuration.clone(), &TestPlugins).unwrap();
    list.add_translation(fr()).unwrap();
    list.set_configuration(&fr(), translate(&configuration), &TestPlugins).unwrap();

    list.remove_translation(&fr()).unwrap();
    assert!(!list.has_translation(&fr()));
    assert!(matches!(
        list.configuration(&fr()),
        Err(ConfigurationError::TranslationMissing(_))
    ));

    list.add_translation(fr()).unwrap();
    assert!(list.stored_override(&fr()).unwrap().is_empty());
    assert_eq!(list.configuration(&fr()).unwrap(), configuration);
}

#[test]
fn base_plugin_change_drops_stale_overrides() {
    let mut list = new_list();
    let mut configuration = standard_configuration();
    configuration.source = slot("test_translatable", json!({"my_string": "Original string"}));
    list.set_configuration(&en(), configuration.clone(), &TestPlugins).unwrap();
    list.add_translation(fr()).unwrap();
    list.set_configuration(&fr(), translate(&configuration), &TestPlugins).unwrap();

    // Switching the base source must not leave the old plugin's override
    // to be merged over the new plugin's configuration.
    configuration.source = slot("test_empty_collection", json!({"my_string": "kept"}));
    list.set_configuration(&en(), configuration.clone(), &TestPlugins).unwrap();

    assert_eq!(list.configuration(&fr()).unwrap().source, configuration.source);
    // Other slots keep their translations.
    assert!(list.stored_override(&fr()).unwrap().more_link.is_some());
}

#[test]
fn switching_away_from_sized_source_drops_translated_size() {
    let mut list = new_list();
    let mut configuration = standard_configuration();
    configuration.source = slot("test_sized", json!({"label": "Latest"}));
    configuration.size = 5;
    list.set_configuration(&en(), configuration.clone(), &TestPlugins).unwrap();
    list.add_translation(fr()).unwrap();
    let mut translated = configuration.clone();
    translated.size = 2;
    list.set_configuration(&fr(), translated, &TestPlugins).unwrap();
    assert_eq!(list.configuration(&fr()).unwrap().size, 2);

    configuration.source = slot("test_empty_collection", json!({}));
    list.set_configuration(&en(), configuration.clone(), &TestPlugins).unwrap();

    assert_eq!(list.configuration(&fr()).unwrap().size, 5);
    assert_eq!(list.stored_override(&fr()).unwrap().size, None);
}

#[test]
fn translated_size_survives_unrelated_plugin_change() {
    let mut list = new_list();
    let mut configuration = standard_configuration();
    configuration.source = slot("test_sized", json!({"label": "Latest"}));
    configuration.size = 5;
    list.set_configuration(&en(), configuration.clone(), &TestPlugins).unwrap();
    list.add_translation(fr()).unwrap();
    let mut translated = configuration.clone();
    translated.size = 2;
    list.set_configuration(&fr(), translated, &TestPlugins).unwrap();

    configuration.display = slot("title", json!({}));
    list.set_configuration(&en(), configuration, &TestPlugins).unwrap();

    assert_eq!(list.configuration(&fr()).unwrap().size, 2);
}

#[test]
fn size_is_only_translatable_when_declared() {
    let mut list = new_list();
    let mut configuration = standard_configuration();
    configuration.size = 5;
    list.set_configuration(&en(), configuration.clone(), &TestPlugins).unwrap();
    list.add_translation(fr()).unwrap();

    let mut translated = configuration.clone();
    translated.size = 2;
    list.set_configuration(&fr(), translated.clone(), &TestPlugins).unwrap();
    assert_eq!(list.configuration(&fr()).unwrap().size, 5);

    configuration.source = slot("test_sized", json!({"label": "Latest"}));
    list.set_configuration(&en(), configuration.clone(), &TestPlugins).unwrap();
    translated.source = slot("test_sized", json!({"label": "Derniers"}));
    list.set_configuration(&fr(), translated, &TestPlugins).unwrap();

    let effective = list.configuration(&fr()).unwrap();
    assert_eq!(effective.size, 2);
    assert_eq!(effective.source, slot("test_sized", json!({"label": "Derniers"})));
    assert_eq!(list.configuration(&en()).unwrap().size, 5);
}

#[test]
fn unknown_plugin_on_translation_is_an_error() {
    let mut list = new_list();
    let mut configuration = standard_configuration();
    configuration.display = slot("unregistered_display", json!({}));
    list.set_configuration(&en(), configuration.clone(), &TestPlugins).unwrap();
    list.add_translation(fr()).unwrap();

    let err = list
        .set_configuration(&fr(), configuration, &TestPlugins)
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigurationError::PluginNotFound { kind: PluginKind::Display, ref id } if id == "unregistered_display"
    ));
}

#[test]
fn setting_a_missing_translation_fails() {
    let mut list = new_list();
    let err = list
        .set_configuration(&fr(), standard_configuration(), &TestPlugins)
        .unwrap_err();
    assert!(matches!(err, ConfigurationError::TranslationMissing(_)));
}

// ── Shape ────────────────────────────────────────────────────────

#[test]
fn parses_the_public_map_shape() {
    let value = json!({
        "source": {"plugin": "test_empty_collection", "plugin_configuration": {"url": "http://google.com"}},
        "display": {"plugin": "title"},
        "size": 3,
    });
    let configuration = LinkListConfiguration::from_value(value).unwrap();
    assert_eq!(configuration.plugin_id(PluginKind::Source), Some("test_empty_collection"));
    assert_eq!(configuration.plugin_id(PluginKind::Display), Some("title"));
    assert!(configuration.display.unwrap().plugin_configuration.is_empty());
    assert_eq!(configuration.size, 3);
}

#[test]
fn empty_slots_parse_as_unselected() {
    let configuration = LinkListConfiguration::from_value(json!({"source": {}, "display": {}})).unwrap();
    assert_eq!(configuration.plugin_id(PluginKind::Source), None);
    assert_eq!(configuration.plugin_id(PluginKind::Display), None);
}

#[test]
fn malformed_input_is_a_shape_error() {
    let cases = [
        json!("not a map"),
        json!({"source": "manual_links"}),
        json!({"source": {"plugin": "x", "plugin_configuration": []}}),
        json!({"size": -1}),
        json!({"sources": {}}),
    ];
    for value in cases {
        assert!(
            matches!(LinkListConfiguration::from_value(value.clone()), Err(ConfigurationError::Shape(_))),
            "expected shape error for {value}"
        );
    }
}

#[test]
fn shape_errors_are_never_stored() {
    let mut list = new_list();
    list.set_configuration(&en(), standard_configuration(), &TestPlugins).unwrap();
    let result = list.set_configuration_value(&en(), json!({"display": 42}), &TestPlugins);
    assert!(matches!(result, Err(ConfigurationError::Shape(_))));
    assert_eq!(list.configuration(&en()).unwrap(), standard_configuration());
}

#[test]
fn to_value_round_trips_through_from_value() {
    let configuration = standard_configuration();
    let value = configuration.to_value().unwrap();
    assert_eq!(value["more_link"]["plugin_configuration"]["target"]["type"], "custom");
    assert_eq!(LinkListConfiguration::from_value(value).unwrap(), configuration);
}
