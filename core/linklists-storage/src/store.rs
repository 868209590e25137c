//! SQLite-backed link list storage.
//!
//! The `link_list` table holds the current revision of each list together
//! with the columns listing queries filter on. Every save also appends an
//! immutable snapshot to `link_list_revision`.

use crate::derivatives::DerivativeRegistry;
use crate::error::{StorageError, StorageResult};
use crate::query::{Field, LinkListQuery, PropertyValue};
use linklists_model::LinkList;
use linklists_types::{LinkListId, RevisionId};
use rusqlite::types::Value as SqlValue;
use rusqlite::{Connection, OptionalExtension, params, params_from_iter};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

/// Persistent store for link lists backed by SQLite.
pub struct LinkListStore {
    conn: Arc<Mutex<Connection>>,
    derivatives: Arc<DerivativeRegistry>,
}

impl LinkListStore {
    /// Opens (or creates) a store at the given path.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        info!(path = %path.display(), "Opened link list store");
        Self::from_connection(conn)
    }

    /// Opens an in-memory store (for testing).
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StorageResult<Self> {
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
            derivatives: Arc::new(DerivativeRegistry::new()),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> StorageResult<()> {
        let conn = self.lock()?;
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS link_list (
                id TEXT PRIMARY KEY,
                revision_id TEXT NOT NULL,
                bundle TEXT NOT NULL,
                status INTEGER NOT NULL,
                local INTEGER,
                default_langcode TEXT NOT NULL,
                administrative_title TEXT NOT NULL,
                title TEXT,
                created INTEGER NOT NULL,
                changed INTEGER NOT NULL,
                data TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_link_list_bundle ON link_list(bundle);

            CREATE TABLE IF NOT EXISTS link_list_revision (
                revision_id TEXT PRIMARY KEY,
                id TEXT NOT NULL,
                data TEXT NOT NULL,
                created INTEGER NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_link_list_revision_id ON link_list_revision(id);
            ",
        )?;
        Ok(())
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StorageError::LockPoisoned)
    }

    /// Registry of the block definitions derived from stored lists.
    #[must_use]
    pub fn derivatives(&self) -> &Arc<DerivativeRegistry> {
        &self.derivatives
    }

    // ── Writes ───────────────────────────────────────────────────

    /// Writes `list` as a new revision and makes it current.
    ///
    /// On success `list` carries the new revision id and `changed` time.
    /// Derived definitions of the list are invalidated afterwards.
    pub fn save(&self, list: &mut LinkList) -> StorageResult<()> {
        let mut saved = list.clone();
        let is_new = saved.is_new();
        let revision_id = RevisionId::new();
        let now = chrono::Utc::now().timestamp();
        saved.assign_revision(revision_id, now.max(saved.created()));

        let data = serde_json::to_string(&saved)?;
        let base = saved.default_langcode().clone();
        {
            let mut conn = self.lock()?;
            let tx = conn.transaction()?;
            tx.execute(
                "INSERT INTO link_list_revision (revision_id, id, data, created) VALUES (?1, ?2, ?3, ?4)",
                params![revision_id.to_string(), saved.id().to_string(), data, now],
            )?;
            tx.execute(
                "INSERT INTO link_list (id, revision_id, bundle, status, local, default_langcode,
                    administrative_title, title, created, changed, data)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
                 ON CONFLICT(id) DO UPDATE SET
                    revision_id = excluded.revision_id,
                    bundle = excluded.bundle,
                    status = excluded.status,
                    local = excluded.local,
                    default_langcode = excluded.default_langcode,
                    administrative_title = excluded.administrative_title,
                    title = excluded.title,
                    changed = excluded.changed,
                    data = excluded.data",
                params![
                    saved.id().to_string(),
                    revision_id.to_string(),
                    saved.bundle(),
                    saved.is_published(),
                    saved.local().as_flag(),
                    base.as_str(),
                    saved.label(),
                    saved.title(&base).ok().flatten(),
                    saved.created(),
                    saved.changed(),
                    data,
                ],
            )?;
            tx.commit()?;
        }

        info!(
            link_list_id = %saved.id(),
            revision_id = %revision_id,
            new = is_new,
            "Saved link list"
        );
        self.derivatives.invalidate(saved.id());
        *list = saved;
        Ok(())
    }

    /// Deletes a list and all its revisions. Returns whether it existed.
    pub fn delete(&self, id: LinkListId) -> StorageResult<bool> {
        let removed = {
            let mut conn = self.lock()?;
            let tx = conn.transaction()?;
            let removed = tx.execute("DELETE FROM link_list WHERE id = ?1", params![id.to_string()])?;
            tx.execute(
                "DELETE FROM link_list_revision WHERE id = ?1",
                params![id.to_string()],
            )?;
            tx.commit()?;
            removed > 0
        };

        if removed {
            info!(link_list_id = %id, "Deleted link list");
        } else {
            debug!(link_list_id = %id, "Delete of unknown link list");
        }
        self.derivatives.invalidate(id);
        Ok(removed)
    }

    // ── Direct loads (never filtered) ────────────────────────────

    /// Loads the current revision of a list, local or not.
    pub fn load(&self, id: LinkListId) -> StorageResult<Option<LinkList>> {
        let conn = self.lock()?;
        let data: Option<String> = conn
            .query_row(
                "SELECT data FROM link_list WHERE id = ?1",
                params![id.to_string()],
                |row| row.get(0),
            )
            .optional()?;
        data.map(|d| decode(&d)).transpose()
    }

    /// Like [`load`](Self::load) but a missing list is an error.
    pub fn load_existing(&self, id: LinkListId) -> StorageResult<LinkList> {
        self.load(id)?
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    /// Loads a specific revision.
    pub fn load_revision(&self, revision_id: RevisionId) -> StorageResult<Option<LinkList>> {
        let conn = self.lock()?;
        let data: Option<String> = conn
            .query_row(
                "SELECT data FROM link_list_revision WHERE revision_id = ?1",
                params![revision_id.to_string()],
                |row| row.get(0),
            )
            .optional()?;
        data.map(|d| decode(&d)).transpose()
    }

    /// Loads several lists.
    ///
    /// With explicit ids the result follows their order, skips unknown ids
    /// and includes local lists. `None` lists every visible list.
    pub fn load_multiple(&self, ids: Option<&[LinkListId]>) -> StorageResult<Vec<LinkList>> {
        let ids = match ids {
            Some(ids) => ids.to_vec(),
            None => self.query().execute()?,
        };
        let mut lists = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(list) = self.load(id)? {
                lists.push(list);
            }
        }
        Ok(lists)
    }

    /// Loads several revisions, in the given order, skipping unknown ones.
    pub fn load_multiple_revisions(
        &self,
        revision_ids: &[RevisionId],
    ) -> StorageResult<Vec<LinkList>> {
        let mut lists = Vec::with_capacity(revision_ids.len());
        for revision_id in revision_ids {
            if let Some(list) = self.load_revision(*revision_id)? {
                lists.push(list);
            }
        }
        Ok(lists)
    }

    /// Revision ids of a list, oldest first.
    pub fn revision_ids(&self, id: LinkListId) -> StorageResult<Vec<RevisionId>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT revision_id FROM link_list_revision WHERE id = ?1 ORDER BY rowid ASC",
        )?;
        let rows = stmt.query_map(params![id.to_string()], |row| row.get::<_, String>(0))?;
        let mut revisions = Vec::new();
        for row in rows {
            let raw = row?;
            let revision = RevisionId::parse(&raw)
                .map_err(|e| StorageError::InvalidData(format!("revision id {raw:?}: {e}")))?;
            revisions.push(revision);
        }
        Ok(revisions)
    }

    // ── Listings (filtered) ──────────────────────────────────────

    /// Starts a listing query.
    #[must_use]
    pub fn query(&self) -> LinkListQuery<'_> {
        LinkListQuery::new(self)
    }

    /// Loads the visible lists matching every `(field, value)` pair.
    pub fn load_by_properties<I, V>(&self, properties: I) -> StorageResult<Vec<LinkList>>
    where
        I: IntoIterator<Item = (Field, V)>,
        V: Into<PropertyValue>,
    {
        properties
            .into_iter()
            .fold(self.query(), |query, (field, value)| query.condition(field, value))
            .load()
    }

    pub(crate) fn query_ids(&self, sql: &str, params: &[SqlValue]) -> StorageResult<Vec<LinkListId>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params_from_iter(params.iter()), |row| row.get::<_, String>(0))?;
        let mut ids = Vec::new();
        for row in rows {
            let raw = row?;
            let id = LinkListId::parse(&raw)
                .map_err(|e| StorageError::InvalidData(format!("link list id {raw:?}: {e}")))?;
            ids.push(id);
        }
        Ok(ids)
    }

    pub(crate) fn query_count(&self, sql: &str, params: &[SqlValue]) -> StorageResult<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row(sql, params_from_iter(params.iter()), |row| row.get(0))?;
        usize::try_from(count).map_err(|e| StorageError::InvalidData(e.to_string()))
    }
}

fn decode(data: &str) -> StorageResult<LinkList> {
    Ok(serde_json::from_str(data)?)
}
