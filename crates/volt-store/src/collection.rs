//! # Document Collection
//!
//! A typed collection of documents with live full-snapshot subscriptions.
//!
//! ## The Collaborator Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Collection<T>                                      │
//! │                                                                         │
//! │  create(record)        → id      assigns UUID + creation timestamp     │
//! │  get(id)               → Option  point read                             │
//! │  list()                → Vec     full snapshot, creation order          │
//! │  update(id, patch)     → ()      shallow JSON field merge;              │
//! │                                  fails if id absent                     │
//! │  remove(id)            → ()      delete; no cascade                     │
//! │  subscribe()           → rx      current snapshot immediately,          │
//! │                                  then a FULL replacement snapshot       │
//! │                                  on every mutation                      │
//! │                                                                         │
//! │  ┌──────────────┐   mutation   ┌──────────────┐   watch channel         │
//! │  │  documents   │ ───────────► │ sorted full  │ ──────────────► every   │
//! │  │  (RwLock map)│              │ snapshot     │                 list    │
//! │  └──────────────┘              └──────────────┘                 view    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Update = Shallow Merge
//! `update` merges the patch's top-level fields over the stored document,
//! exactly like the cloud SDK's partial update: absent fields keep their
//! value, present fields are replaced wholesale (no deep merge). The
//! document round-trips through JSON, so a patch with a wrong-shaped value
//! fails the whole call and nothing is written.
//!
//! ## What This Layer Does NOT Do
//! No referential integrity, no uniqueness beyond the id, no transactions
//! spanning two writes. Callers that need two documents to change together
//! get at-most-two-writes-not-atomic semantics and must handle the gap.

use std::collections::HashMap;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::{watch, RwLock};
use tracing::debug;
use uuid::Uuid;

use crate::document::Document;
use crate::error::{StoreError, StoreResult};

/// A typed document collection.
///
/// All methods are async: this is the system's I/O boundary, and every
/// call can fail independently of any other.
pub struct Collection<T: Document> {
    docs: RwLock<HashMap<String, T>>,
    snapshot_tx: watch::Sender<Vec<T>>,
}

impl<T> Collection<T>
where
    T: Document + Serialize + DeserializeOwned,
{
    /// Creates an empty collection.
    pub fn new() -> Self {
        let (snapshot_tx, _) = watch::channel(Vec::new());
        Collection {
            docs: RwLock::new(HashMap::new()),
            snapshot_tx,
        }
    }

    /// Appends a record and returns its generated id.
    ///
    /// The store assigns a UUID v4 when the record carries no id, and
    /// always stamps the server-side creation timestamp (overwriting any
    /// caller-provided value).
    pub async fn create(&self, mut doc: T) -> StoreResult<String> {
        let mut docs = self.docs.write().await;

        if doc.id().is_empty() {
            doc.assign_id(Uuid::new_v4().to_string());
        }
        let id = doc.id().to_string();

        if docs.contains_key(&id) {
            return Err(StoreError::Duplicate {
                collection: T::COLLECTION.to_string(),
                id,
            });
        }

        doc.stamp_created(Utc::now());
        docs.insert(id.clone(), doc);

        debug!(collection = T::COLLECTION, id = %id, "created document");
        self.publish(&docs);
        Ok(id)
    }

    /// Point read by id.
    pub async fn get(&self, id: &str) -> StoreResult<Option<T>> {
        let docs = self.docs.read().await;
        Ok(docs.get(id).cloned())
    }

    /// Full snapshot of the collection, in creation order.
    pub async fn list(&self) -> StoreResult<Vec<T>> {
        let docs = self.docs.read().await;
        Ok(sorted_snapshot(&docs))
    }

    /// Merges the patch's top-level fields into an existing record.
    ///
    /// ## Errors
    /// * [`StoreError::NotFound`] - no record with this id
    /// * [`StoreError::InvalidPatch`] - patch is not an object, or tries
    ///   to rewrite the immutable `id` field
    /// * [`StoreError::Serialization`] - merged document no longer
    ///   deserializes (wrong-shaped field value); nothing is written
    pub async fn update(&self, id: &str, patch: Value) -> StoreResult<()> {
        let patch = match patch {
            Value::Object(map) => map,
            _ => return Err(StoreError::invalid_patch("patch must be a JSON object")),
        };
        if patch.contains_key("id") {
            return Err(StoreError::invalid_patch("the id field is immutable"));
        }

        let mut docs = self.docs.write().await;
        let current = docs
            .get(id)
            .ok_or_else(|| StoreError::not_found(T::COLLECTION, id))?;

        let mut value = serde_json::to_value(current)?;
        let fields = value
            .as_object_mut()
            .ok_or_else(|| StoreError::Serialization("document is not a JSON object".to_string()))?;
        for (key, field_value) in patch {
            fields.insert(key, field_value);
        }

        let mut merged: T = serde_json::from_value(value)?;
        merged.stamp_updated(Utc::now());
        docs.insert(id.to_string(), merged);

        debug!(collection = T::COLLECTION, id = %id, "updated document");
        self.publish(&docs);
        Ok(())
    }

    /// Deletes a record. No cascade: documents referencing it keep their
    /// (now dangling) reference.
    pub async fn remove(&self, id: &str) -> StoreResult<()> {
        let mut docs = self.docs.write().await;

        if docs.remove(id).is_none() {
            return Err(StoreError::not_found(T::COLLECTION, id));
        }

        debug!(collection = T::COLLECTION, id = %id, "removed document");
        self.publish(&docs);
        Ok(())
    }

    /// Registers a live subscription.
    ///
    /// The receiver's current value is the full snapshot at registration
    /// time; every subsequent mutation replaces it with a new full
    /// snapshot (an empty `Vec` when the collection is empty).
    pub fn subscribe(&self) -> watch::Receiver<Vec<T>> {
        self.snapshot_tx.subscribe()
    }

    /// Number of documents (for diagnostics).
    pub async fn count(&self) -> usize {
        self.docs.read().await.len()
    }

    /// Publishes the post-mutation snapshot to all subscribers.
    fn publish(&self, docs: &HashMap<String, T>) {
        self.snapshot_tx.send_replace(sorted_snapshot(docs));
    }
}

impl<T> Default for Collection<T>
where
    T: Document + Serialize + DeserializeOwned,
{
    fn default() -> Self {
        Collection::new()
    }
}

/// Clones the documents into a stable creation-order snapshot.
fn sorted_snapshot<T: Document>(docs: &HashMap<String, T>) -> Vec<T> {
    let mut snapshot: Vec<T> = docs.values().cloned().collect();
    // id is the tiebreaker for documents created in the same instant
    snapshot.sort_by(|a, b| {
        a.created_at()
            .cmp(&b.created_at())
            .then_with(|| a.id().cmp(b.id()))
    });
    snapshot
}

// =============================================================================
// Unit Tests
// =============================================================================
