use crate::configuration::{ConfigurationOverride, LinkListConfiguration};
use crate::error::{ConfigurationError, ConfigurationResult};
use crate::locality::Locality;
use crate::validation::{NO_ADMINISTRATIVE_TITLE_MESSAGE, Violation, validate_configuration};
use linklists_types::{Langcode, LinkListId, RevisionId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-language values of a link list.
///
/// The base translation carries a full [`LinkListConfiguration`]; every
/// other translation carries only a sparse [`ConfigurationOverride`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct TranslationValues<C> {
    pub(crate) administrative_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) configuration: C,
}

/// A link list entity.
///
/// Identifiers, bundle, status and locality are shared by all translations.
/// Configuration is only reachable through [`LinkList::configuration`] and
/// [`LinkList::set_configuration`], which enforce the sparse per-translation
/// storage rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkList {
    id: LinkListId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    revision_id: Option<RevisionId>,
    bundle: String,
    published: bool,
    #[serde(default)]
    local: Locality,
    default_langcode: Langcode,
    pub(crate) base: TranslationValues<LinkListConfiguration>,
    #[serde(default)]
    pub(crate) translations: BTreeMap<Langcode, TranslationValues<ConfigurationOverride>>,
    /// Unix seconds.
    created: i64,
    /// Unix seconds.
    changed: i64,
}

impl LinkList {
    /// Creates a new, unsaved, published list with an empty configuration.
    #[must_use]
    pub fn new(
        bundle: impl Into<String>,
        default_langcode: Langcode,
        administrative_title: impl Into<String>,
    ) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            id: LinkListId::new(),
            revision_id: None,
            bundle: bundle.into(),
            published: true,
            local: Locality::Unset,
            default_langcode,
            base: TranslationValues {
                administrative_title: administrative_title.into(),
                title: None,
                configuration: LinkListConfiguration::default(),
            },
            translations: BTreeMap::new(),
            created: now,
            changed: now,
        }
    }

    #[must_use]
    pub fn id(&self) -> LinkListId {
        self.id
    }

    /// `None` until the list has been saved once.
    #[must_use]
    pub fn revision_id(&self) -> Option<RevisionId> {
        self.revision_id
    }

    #[must_use]
    pub fn is_new(&self) -> bool {
        self.revision_id.is_none()
    }

    /// Records a freshly written revision. Called by storage after commit.
    pub fn assign_revision(&mut self, revision_id: RevisionId, changed: i64) {
        self.revision_id = Some(revision_id);
        self.changed = changed;
    }

    #[must_use]
    pub fn bundle(&self) -> &str {
        &self.bundle
    }

    #[must_use]
    pub fn is_published(&self) -> bool {
        self.published
    }

    pub fn set_published(&mut self, published: bool) {
        self.published = published;
    }

    #[must_use]
    pub fn local(&self) -> Locality {
        self.local
    }

    pub fn set_local(&mut self, local: Locality) {
        self.local = local;
    }

    #[must_use]
    pub fn default_langcode(&self) -> &Langcode {
        &self.default_langcode
    }

    #[must_use]
    pub fn is_default_translation(&self, langcode: &Langcode) -> bool {
        *langcode == self.default_langcode
    }

    #[must_use]
    pub fn created(&self) -> i64 {
        self.created
    }

    pub fn set_created(&mut self, timestamp: i64) {
        self.created = timestamp;
    }

    #[must_use]
    pub fn changed(&self) -> i64 {
        self.changed
    }

    // ── Translations ─────────────────────────────────────────────

    #[must_use]
    pub fn has_translation(&self, langcode: &Langcode) -> bool {
        self.is_default_translation(langcode) || self.translations.contains_key(langcode)
    }

    /// Languages the list exists in, base language first.
    pub fn translation_languages(&self) -> impl Iterator<Item = &Langcode> {
        std::iter::once(&self.default_langcode).chain(self.translations.keys())
    }

    /// Adds a translation that copies the base titles and overrides nothing.
    pub fn add_translation(&mut self, langcode: Langcode) -> ConfigurationResult<()> {
        if self.has_translation(&langcode) {
            return Err(ConfigurationError::TranslationExists(langcode));
        }
        let values = TranslationValues {
            administrative_title: self.base.administrative_title.clone(),
            title: self.base.title.clone(),
            configuration: ConfigurationOverride::default(),
        };
        self.translations.insert(langcode, values);
        Ok(())
    }

    /// Drops a translation together with its stored configuration override.
    pub fn remove_translation(&mut self, langcode: &Langcode) -> ConfigurationResult<()> {
        if self.is_default_translation(langcode) {
            return Err(ConfigurationError::BaseTranslation(langcode.clone()));
        }
        self.translations
            .remove(langcode)
            .map(|_| ())
            .ok_or_else(|| ConfigurationError::TranslationMissing(langcode.clone()))
    }

    pub(crate) fn translation(
        &self,
        langcode: &Langcode,
    ) -> ConfigurationResult<&TranslationValues<ConfigurationOverride>> {
        self.translations
            .get(langcode)
            .ok_or_else(|| ConfigurationError::TranslationMissing(langcode.clone()))
    }

    pub(crate) fn translation_mut(
        &mut self,
        langcode: &Langcode,
    ) -> ConfigurationResult<&mut TranslationValues<ConfigurationOverride>> {
        self.translations
            .get_mut(langcode)
            .ok_or_else(|| ConfigurationError::TranslationMissing(langcode.clone()))
    }

    // ── Titles ───────────────────────────────────────────────────

    pub fn administrative_title(&self, langcode: &Langcode) -> ConfigurationResult<&str> {
        if self.is_default_translation(langcode) {
            return Ok(&self.base.administrative_title);
        }
        Ok(&self.translation(langcode)?.administrative_title)
    }

    pub fn set_administrative_title(
        &mut self,
        langcode: &Langcode,
        title: impl Into<String>,
    ) -> ConfigurationResult<()> {
        if self.is_default_translation(langcode) {
            self.base.administrative_title = title.into();
        } else {
            self.translation_mut(langcode)?.administrative_title = title.into();
        }
        Ok(())
    }

    /// Public title of a translation, if any.
    pub fn title(&self, langcode: &Langcode) -> ConfigurationResult<Option<&str>> {
        if self.is_default_translation(langcode) {
            return Ok(self.base.title.as_deref());
        }
        Ok(self.translation(langcode)?.title.as_deref())
    }

    pub fn set_title(
        &mut self,
        langcode: &Langcode,
        title: Option<String>,
    ) -> ConfigurationResult<()> {
        if self.is_default_translation(langcode) {
            self.base.title = title;
        } else {
            self.translation_mut(langcode)?.title = title;
        }
        Ok(())
    }

    /// Administrative title of the base translation.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.base.administrative_title
    }

    // ── Validation ───────────────────────────────────────────────

    /// Collects every violation of the base translation.
    #[must_use]
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        if self.base.administrative_title.trim().is_empty() {
            violations.push(Violation::new(
                "administrative_title",
                NO_ADMINISTRATIVE_TITLE_MESSAGE,
            ));
        }
        violations.extend(validate_configuration(&self.base.configuration));
        violations
    }
}
