//! Work done on a link list right before it is written.

use crate::error::{EngineError, EngineResult};
use linklists_model::{LinkList, LinkListType, PluginKind, PluginSlot, Violation};
use linklists_plugin::PluginRegistry;
use linklists_types::Langcode;
use serde_json::{Map, Value};
use tracing::debug;

/// Prepares `list` for persistence.
///
/// 1. Applies the bundle's default source when the source slot is absent.
/// 2. Runs the source and display `pre_save` hooks on the base
///    configuration and on every translation overriding those slots, and
///    stores what they produce.
/// 3. Validates; all violations are returned together.
pub fn prepare_for_save(
    list: &mut LinkList,
    bundle: &LinkListType,
    registry: &PluginRegistry,
) -> EngineResult<()> {
    apply_default_source(list, bundle, registry)?;
    run_source_pre_save(list, registry)?;
    run_display_pre_save(list, registry)?;

    let mut violations = list.validate();
    if let Some(source) = list.base_configuration().plugin_id(PluginKind::Source)
        && !bundle.allows_source(source)
    {
        violations.push(Violation::new(
            "configuration",
            format!("The link source {source} is not available for {} lists", bundle.id),
        ));
    }
    if violations.is_empty() {
        Ok(())
    } else {
        debug!(
            link_list_id = %list.id(),
            violations = violations.len(),
            "Link list failed validation"
        );
        Err(EngineError::Validation(violations))
    }
}

pub(crate) fn apply_default_source(
    list: &mut LinkList,
    bundle: &LinkListType,
    registry: &PluginRegistry,
) -> EngineResult<()> {
    let Some(default_source) = bundle.default_link_source.as_deref() else {
        return Ok(());
    };
    // Only an absent slot is filled; an explicit empty one stays and fails
    // validation.
    if list.base_configuration().source.is_some() {
        return Ok(());
    }

    let mut configuration = list.base_configuration().clone();
    configuration.source = Some(PluginSlot::new(default_source, Map::new()));
    let base = list.default_langcode().clone();
    list.set_configuration(&base, configuration, registry)?;
    debug!(
        link_list_id = %list.id(),
        plugin_id = default_source,
        "Applied default link source"
    );
    Ok(())
}

fn run_source_pre_save(list: &mut LinkList, registry: &PluginRegistry) -> EngineResult<()> {
    let Some(slot) = list.base_configuration().source.clone() else {
        return Ok(());
    };
    if let Some(updated) = source_pre_save(list, &slot, registry)? {
        write_back(list, PluginKind::Source, slot, updated, registry)?;
    }
    for langcode in overridden_translations(list, PluginKind::Source) {
        let configuration = list.configuration(&langcode)?;
        let Some(slot) = configuration.source else {
            continue;
        };
        if let Some(updated) = source_pre_save(list, &slot, registry)? {
            list.set_slot_override(&langcode, PluginKind::Source, &updated, registry)?;
        }
    }
    Ok(())
}

fn run_display_pre_save(list: &mut LinkList, registry: &PluginRegistry) -> EngineResult<()> {
    let Some(slot) = list.base_configuration().display.clone() else {
        return Ok(());
    };
    if let Some(updated) = display_pre_save(list, &slot, registry)? {
        write_back(list, PluginKind::Display, slot, updated, registry)?;
    }
    for langcode in overridden_translations(list, PluginKind::Display) {
        let configuration = list.configuration(&langcode)?;
        let Some(slot) = configuration.display else {
            continue;
        };
        if let Some(updated) = display_pre_save(list, &slot, registry)? {
            list.set_slot_override(&langcode, PluginKind::Display, &updated, registry)?;
        }
    }
    Ok(())
}

/// Runs the source hook over one effective slot; `None` when it changed nothing.
fn source_pre_save(
    list: &LinkList,
    slot: &PluginSlot,
    registry: &PluginRegistry,
) -> EngineResult<Option<Map<String, Value>>> {
    let Some(plugin_id) = slot.plugin_id() else {
        return Ok(None);
    };
    let mut plugin = registry
        .sources()
        .create_instance(plugin_id, slot.plugin_configuration.clone())?;
    plugin.pre_save(list)?;
    Ok(changed(slot, plugin.configuration()))
}

fn display_pre_save(
    list: &LinkList,
    slot: &PluginSlot,
    registry: &PluginRegistry,
) -> EngineResult<Option<Map<String, Value>>> {
    let Some(plugin_id) = slot.plugin_id() else {
        return Ok(None);
    };
    let mut plugin = registry
        .displays()
        .create_instance(plugin_id, slot.plugin_configuration.clone())?;
    plugin.pre_save(list)?;
    Ok(changed(slot, plugin.configuration()))
}

fn changed(slot: &PluginSlot, updated: &Map<String, Value>) -> Option<Map<String, Value>> {
    (slot.plugin_configuration != *updated).then(|| updated.clone())
}

/// Translations holding an override for `kind`.
fn overridden_translations(list: &LinkList, kind: PluginKind) -> Vec<Langcode> {
    list.translation_languages()
        .filter(|langcode| {
            list.stored_override(langcode)
                .is_some_and(|o| o.slot(kind).is_some())
        })
        .cloned()
        .collect()
}

/// Stores a plugin's normalized configuration in the base slot. The plugin
/// id is unchanged, so no translation override is dropped.
fn write_back(
    list: &mut LinkList,
    kind: PluginKind,
    slot: PluginSlot,
    plugin_configuration: Map<String, Value>,
    registry: &PluginRegistry,
) -> EngineResult<()> {
    let mut configuration = list.base_configuration().clone();
    configuration.set_slot(
        kind,
        Some(PluginSlot {
            plugin_configuration,
            ..slot
        }),
    );
    let base = list.default_langcode().clone();
    list.set_configuration(&base, configuration, registry)?;
    Ok(())
}
