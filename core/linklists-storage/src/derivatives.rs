//! Block definitions derived from stored link lists.
//!
//! One definition exists per visible list. Definitions are built lazily
//! from the filtered listing and refreshed per list after
//! [`DerivativeRegistry::invalidate`].

use crate::error::{StorageError, StorageResult};
use crate::query::Field;
use crate::store::LinkListStore;
use linklists_types::LinkListId;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

pub const BLOCK_CATEGORY: &str = "Link Lists";

/// A presentational unit offered for one link list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDefinition {
    pub link_list_id: LinkListId,
    pub admin_label: String,
    pub category: &'static str,
}

#[derive(Debug, Default)]
struct State {
    /// `None` until the first build.
    definitions: Option<BTreeMap<LinkListId, BlockDefinition>>,
    stale: BTreeSet<LinkListId>,
}

/// Process-wide cache of [`BlockDefinition`]s keyed by list id.
#[derive(Debug, Default)]
pub struct DerivativeRegistry {
    state: Mutex<State>,
}

impl DerivativeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the definition of `id` stale. Cheap; the refresh happens on
    /// the next read.
    pub fn invalidate(&self, id: LinkListId) {
        match self.state.lock() {
            Ok(mut state) => {
                if state.definitions.is_some() {
                    state.stale.insert(id);
                }
            }
            // A poisoned registry is rebuilt from scratch on next read.
            Err(poisoned) => {
                *poisoned.into_inner() = State::default();
                self.state.clear_poison();
            }
        }
        debug!(link_list_id = %id, "Invalidated link list derivative");
    }

    /// Drops every cached definition.
    pub fn clear(&self) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = State::default();
        self.state.clear_poison();
    }

    /// All definitions, ordered by list id.
    pub fn definitions(&self, store: &LinkListStore) -> StorageResult<Vec<BlockDefinition>> {
        let mut state = self.state.lock().map_err(|_| StorageError::LockPoisoned)?;

        match state.definitions.take() {
            None => {
                let mut definitions = BTreeMap::new();
                for list in store.load_multiple(None)? {
                    definitions.insert(list.id(), definition_for(list.id(), list.label()));
                }
                debug!(count = definitions.len(), "Built link list derivatives");
                state.definitions = Some(definitions);
                state.stale.clear();
            }
            Some(mut definitions) => {
                let stale = std::mem::take(&mut state.stale);
                for id in stale {
                    definitions.remove(&id);
                    // Still visible? Ask the listing, not the direct load.
                    let visible = store.query().condition(Field::Id, id).load()?;
                    if let Some(list) = visible.first() {
                        definitions.insert(id, definition_for(id, list.label()));
                    }
                }
                state.definitions = Some(definitions);
            }
        }

        Ok(state
            .definitions
            .as_ref()
            .map(|d| d.values().cloned().collect())
            .unwrap_or_default())
    }

    /// The definition for one list, if it is visible.
    pub fn definition(
        &self,
        store: &LinkListStore,
        id: LinkListId,
    ) -> StorageResult<Option<BlockDefinition>> {
        Ok(self
            .definitions(store)?
            .into_iter()
            .find(|d| d.link_list_id == id))
    }
}

fn definition_for(id: LinkListId, label: &str) -> BlockDefinition {
    BlockDefinition {
        link_list_id: id,
        admin_label: label.to_string(),
        category: BLOCK_CATEGORY,
    }
}
