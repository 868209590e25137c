//! Per-translation configuration storage and reconstruction.
//!
//! The base translation stores the full configuration and is the only
//! writer of plugin selection. Other translations store a sparse override
//! holding the values their active plugins declare translatable; reading a
//! translation deep-merges that override over the base configuration.

use crate::configuration::{
    ConfigurationOverride, LinkListConfiguration, PluginKind, SlotOverride, deep_merge,
    extract_paths,
};
use crate::entity::LinkList;
use crate::error::{ConfigurationError, ConfigurationResult};
use crate::translatable::TranslatableLookup;
use linklists_types::Langcode;
use serde_json::{Map, Value};
use tracing::{debug, warn};

impl LinkList {
    /// Effective configuration of a translation.
    ///
    /// The base translation returns its stored value unchanged. Any other
    /// translation starts from the base configuration (plugin ids and
    /// non-translatable values) and has its stored override merged on top.
    pub fn configuration(&self, langcode: &Langcode) -> ConfigurationResult<LinkListConfiguration> {
        if self.is_default_translation(langcode) {
            return Ok(self.base.configuration.clone());
        }
        let overrides = &self.translation(langcode)?.configuration;
        Ok(apply_override(&self.base.configuration, overrides))
    }

    /// Stores a configuration on a translation.
    ///
    /// On the base translation the input is stored verbatim. Changing a
    /// slot's plugin there drops that slot's override on every translation,
    /// and drops translated sizes unless a selected plugin still allows them.
    ///
    /// On any other translation only the translatable values of slots whose
    /// plugin matches the base selection are kept; the previous override is
    /// replaced as a whole. A slot naming a different plugin is discarded.
    pub fn set_configuration(
        &mut self,
        langcode: &Langcode,
        input: LinkListConfiguration,
        lookup: &dyn TranslatableLookup,
    ) -> ConfigurationResult<()> {
        if self.is_default_translation(langcode) {
            self.set_base_configuration(input, lookup);
            return Ok(());
        }

        let sparse = sparse_override(&self.base.configuration, &input, lookup)?;
        debug!(
            link_list_id = %self.id(),
            langcode = %langcode,
            empty = sparse.is_empty(),
            "Stored translation configuration override"
        );
        self.translation_mut(langcode)?.configuration = sparse;
        Ok(())
    }

    /// Parses the public map shape and stores it; see [`Self::set_configuration`].
    pub fn set_configuration_value(
        &mut self,
        langcode: &Langcode,
        input: Value,
        lookup: &dyn TranslatableLookup,
    ) -> ConfigurationResult<()> {
        let input = LinkListConfiguration::from_value(input)?;
        self.set_configuration(langcode, input, lookup)
    }

    /// Replaces one slot's override on a non-base translation with the
    /// translatable values of `plugin_configuration`, leaving the other
    /// slots and the translated size alone. The slot keeps the base plugin.
    pub fn set_slot_override(
        &mut self,
        langcode: &Langcode,
        kind: PluginKind,
        plugin_configuration: &Map<String, Value>,
        lookup: &dyn TranslatableLookup,
    ) -> ConfigurationResult<()> {
        let Some(plugin_id) = self.base.configuration.plugin_id(kind) else {
            return Ok(());
        };
        let translatability = lookup.translatability(kind, plugin_id).ok_or_else(|| {
            ConfigurationError::PluginNotFound {
                kind,
                id: plugin_id.to_string(),
            }
        })?;
        let values = extract_paths(plugin_configuration, translatability.paths);
        let slot = (!values.is_empty()).then_some(SlotOverride {
            plugin_configuration: values,
        });
        self.translation_mut(langcode)?.configuration.set_slot(kind, slot);
        Ok(())
    }

    /// The full configuration stored on the base translation.
    #[must_use]
    pub fn base_configuration(&self) -> &LinkListConfiguration {
        &self.base.configuration
    }

    /// The raw sparse override stored on a non-base translation.
    #[must_use]
    pub fn stored_override(&self, langcode: &Langcode) -> Option<&ConfigurationOverride> {
        self.translations.get(langcode).map(|t| &t.configuration)
    }

    fn set_base_configuration(
        &mut self,
        input: LinkListConfiguration,
        lookup: &dyn TranslatableLookup,
    ) {
        let mut plugin_changed = false;
        for kind in PluginKind::ALL {
            let before = self.base.configuration.plugin_id(kind);
            let after = input.plugin_id(kind);
            if before == after {
                continue;
            }
            plugin_changed = true;
            for (langcode, translation) in &mut self.translations {
                if translation.configuration.slot(kind).is_some() {
                    debug!(
                        slot = %kind,
                        langcode = %langcode,
                        "Base plugin changed, dropping translation override"
                    );
                    translation.configuration.set_slot(kind, None);
                }
            }
        }

        if plugin_changed && !size_translatable(&input, lookup) {
            for (langcode, translation) in &mut self.translations {
                if translation.configuration.size.take().is_some() {
                    debug!(
                        langcode = %langcode,
                        "Size no longer translatable, dropping translated size"
                    );
                }
            }
        }
        self.base.configuration = input;
    }
}

/// Whether any plugin selected in `configuration` lets `size` vary per
/// language. Unregistered plugins allow nothing.
fn size_translatable(configuration: &LinkListConfiguration, lookup: &dyn TranslatableLookup) -> bool {
    PluginKind::ALL.iter().any(|kind| {
        configuration
            .plugin_id(*kind)
            .and_then(|id| lookup.translatability(*kind, id))
            .is_some_and(|t| t.size)
    })
}

/// Merges a sparse override over the base configuration. Plugin ids always
/// come from the base; overrides for slots the base does not have are ignored.
#[must_use]
pub fn apply_override(
    base: &LinkListConfiguration,
    overrides: &ConfigurationOverride,
) -> LinkListConfiguration {
    let mut effective = base.clone();
    for kind in PluginKind::ALL {
        if let (Some(slot), Some(slot_override)) = (effective.slot_mut(kind), overrides.slot(kind)) {
            deep_merge(&mut slot.plugin_configuration, &slot_override.plugin_configuration);
        }
    }
    if let Some(size) = overrides.size {
        effective.size = size;
    }
    effective
}

fn sparse_override(
    base: &LinkListConfiguration,
    input: &LinkListConfiguration,
    lookup: &dyn TranslatableLookup,
) -> ConfigurationResult<ConfigurationOverride> {
    let mut sparse = ConfigurationOverride::default();
    let mut size_translatable = false;

    for kind in PluginKind::ALL {
        let Some(slot) = input.slot(kind) else {
            continue;
        };
        let Some(plugin_id) = slot.plugin_id() else {
            continue;
        };
        if base.plugin_id(kind) != Some(plugin_id) {
            warn!(
                slot = %kind,
                plugin_id = %plugin_id,
                base_plugin_id = ?base.plugin_id(kind),
                "Translation may not switch plugins, discarding slot override"
            );
            continue;
        }

        let translatability = lookup.translatability(kind, plugin_id).ok_or_else(|| {
            ConfigurationError::PluginNotFound {
                kind,
                id: plugin_id.to_string(),
            }
        })?;
        size_translatable |= translatability.size;

        let values = extract_paths(&slot.plugin_configuration, translatability.paths);
        if !values.is_empty() {
            sparse.set_slot(
                kind,
                Some(SlotOverride {
                    plugin_configuration: values,
                }),
            );
        }
    }

    if size_translatable {
        sparse.size = Some(input.size);
    }
    Ok(sparse)
}
