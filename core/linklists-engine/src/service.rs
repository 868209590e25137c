//! Entry point tying settings, plugins and storage together.

use crate::error::{EngineError, EngineResult};
use crate::import::ImportDocument;
use crate::pipeline::LinkListRenderer;
use crate::presave::{apply_default_source, prepare_for_save};
use crate::settings::Settings;
use linklists_model::{LinkList, Locality};
use linklists_plugin::{LinkSource, PluginDefinition, PluginRegistry, RenderedOutput};
use linklists_storage::{ALLOW_LOCAL_TAG, LinkListStore};
use linklists_types::{Langcode, LinkListId};
use serde_json::Value;
use tracing::info;

pub struct LinkListService {
    store: LinkListStore,
    registry: PluginRegistry,
    settings: Settings,
}

impl LinkListService {
    #[must_use]
    pub fn new(store: LinkListStore, registry: PluginRegistry, settings: Settings) -> Self {
        Self {
            store,
            registry,
            settings,
        }
    }

    /// Opens the database named in `settings` with the built-in plugins.
    pub fn open(settings: Settings) -> EngineResult<Self> {
        let store = LinkListStore::open(&settings.database_path)?;
        let registry = PluginRegistry::with_builtin_plugins()?;
        Ok(Self::new(store, registry, settings))
    }

    #[must_use]
    pub fn store(&self) -> &LinkListStore {
        &self.store
    }

    #[must_use]
    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut PluginRegistry {
        &mut self.registry
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// A new, unsaved list of `bundle` in the default language.
    pub fn create(&self, bundle: &str, administrative_title: &str) -> EngineResult<LinkList> {
        let bundle = self.settings.bundle(bundle)?;
        Ok(LinkList::new(
            bundle.id.clone(),
            self.settings.default_langcode.clone(),
            administrative_title,
        ))
    }

    /// Sets the configuration of one translation from its public map shape.
    pub fn set_configuration(
        &self,
        list: &mut LinkList,
        langcode: &Langcode,
        configuration: Value,
    ) -> EngineResult<()> {
        list.set_configuration_value(langcode, configuration, &self.registry)?;
        Ok(())
    }

    /// Runs the save hooks and validation, then persists a new revision.
    pub fn save(&self, list: &mut LinkList) -> EngineResult<()> {
        let bundle = self.settings.bundle(list.bundle())?;
        prepare_for_save(list, bundle, &self.registry)?;
        self.store.save(list)?;
        Ok(())
    }

    pub fn delete(&self, id: LinkListId) -> EngineResult<()> {
        if self.store.delete(id)? {
            Ok(())
        } else {
            Err(EngineError::NotFound(id))
        }
    }

    /// Loads a list by id, local or not.
    pub fn load(&self, id: LinkListId) -> EngineResult<LinkList> {
        self.store.load(id)?.ok_or(EngineError::NotFound(id))
    }

    /// Lists stored lists; local ones only when `allow_local` is set.
    pub fn list(&self, allow_local: bool) -> EngineResult<Vec<LinkList>> {
        let query = self.store.query();
        let query = if allow_local {
            query.add_tag(ALLOW_LOCAL_TAG)
        } else {
            query
        };
        Ok(query.load()?)
    }

    /// Renders a list in `langcode`, or in its base language.
    pub fn render(
        &self,
        id: LinkListId,
        langcode: Option<&Langcode>,
    ) -> EngineResult<RenderedOutput> {
        let list = self.load(id)?;
        let langcode = langcode.unwrap_or(list.default_langcode());
        LinkListRenderer::new(&self.registry).render(&list, langcode)
    }

    /// Source plugins an editor may pick for lists of `bundle`.
    pub fn available_sources(
        &self,
        bundle: &str,
    ) -> EngineResult<Vec<&PluginDefinition<dyn LinkSource>>> {
        let bundle = self.settings.bundle(bundle)?;
        Ok(self
            .registry
            .sources()
            .definitions_for_bundle(&bundle.id)
            .filter(|definition| bundle.allows_source(&definition.id))
            .collect())
    }

    /// Creates and saves a list described by `document`.
    pub fn import(&self, document: ImportDocument) -> EngineResult<LinkList> {
        let bundle = self.settings.bundle(&document.bundle)?;
        let base = document
            .langcode
            .clone()
            .unwrap_or_else(|| self.settings.default_langcode.clone());

        let mut list =
            LinkList::new(bundle.id.clone(), base.clone(), document.administrative_title);
        list.set_title(&base, document.title)?;
        list.set_published(document.published);
        list.set_local(Locality::from(document.local));
        if let Some(configuration) = document.configuration {
            self.set_configuration(&mut list, &base, configuration)?;
        }
        // Before any translation is written, so their source overrides are
        // taken against the final source plugin.
        apply_default_source(&mut list, bundle, &self.registry)?;

        for (langcode, translation) in document.translations {
            if langcode == base {
                return Err(EngineError::Import(format!(
                    "translation {langcode} is the base language"
                )));
            }
            list.add_translation(langcode.clone())?;
            if let Some(title) = translation.administrative_title {
                list.set_administrative_title(&langcode, title)?;
            }
            if translation.title.is_some() {
                list.set_title(&langcode, translation.title)?;
            }
            if let Some(configuration) = translation.configuration {
                self.set_configuration(&mut list, &langcode, configuration)?;
            }
        }

        self.save(&mut list)?;
        info!(
            link_list_id = %list.id(),
            bundle = list.bundle(),
            translations = list.translation_languages().count() - 1,
            "Imported link list"
        );
        Ok(list)
    }
}
