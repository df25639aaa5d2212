//! # Collection Façade
//!
//! Per-entity CRUD over one JSON blob in local storage.
//!
//! ## Save = Merge by Id
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  save(record)                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  id empty? ──yes──► assign UUID v4                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  id in blob? ─no──► createdAt = updatedAt = now, append                 │
//! │       │                                                                 │
//! │      yes                                                                │
//! │       ▼                                                                 │
//! │  stored ◄── incoming top-level fields (absent fields keep stored value) │
//! │  createdAt kept, updatedAt = now                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Record::validate(merged) ──err──► DbError::Invalid, nothing written    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  write whole blob back                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Degrading Reads
//! A blob that is missing reads as an empty collection. A blob that is not
//! a JSON array reads as empty too, with a `warn` log; the next `save`
//! overwrites it. Single entries that don't decode are skipped on read but
//! preserved on write, so one bad record never takes its siblings down.

use std::marker::PhantomData;

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use anchor_core::record::{CREATED_AT_FIELD, ID_FIELD, UPDATED_AT_FIELD};
use anchor_core::{new_record_id, CollectionKey, Record};

use crate::error::{DbError, DbResult};
use crate::storage::LocalStorage;

/// CRUD handle for the collection of `T`.
#[derive(Debug, Clone)]
pub struct Collection<T: Record> {
    storage: LocalStorage,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> Collection<T> {
    pub fn new(storage: LocalStorage) -> Self {
        Collection {
            storage,
            _record: PhantomData,
        }
    }

    /// The collection this handle reads and writes.
    pub fn key(&self) -> CollectionKey {
        T::COLLECTION
    }

    fn entity(&self) -> &'static str {
        T::COLLECTION.entity_name()
    }

    /// Loads the raw entries, degrading to empty on a corrupt blob.
    async fn load_raw(&self) -> DbResult<Vec<Value>> {
        let key = T::COLLECTION.key();

        let Some(blob) = self.storage.get_item(key).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Value>(&blob) {
            Ok(Value::Array(entries)) => Ok(entries),
            Ok(other) => {
                warn!(key = %key, kind = %json_kind(&other), "Collection blob is not an array, reading as empty");
                Ok(Vec::new())
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Collection blob is not valid JSON, reading as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn store_raw(&self, entries: &[Value]) -> DbResult<()> {
        let blob = serde_json::to_string(entries)?;
        self.storage.set_item(T::COLLECTION.key(), &blob).await
    }

    fn decode(&self, entry: Value) -> Option<T> {
        match serde_json::from_value::<T>(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(entity = %self.entity(), error = %e, "Skipping undecodable record");
                None
            }
        }
    }

    /// Every record in the collection, in stored order.
    pub async fn get_all(&self) -> DbResult<Vec<T>> {
        let entries = self.load_raw().await?;
        let records: Vec<T> = entries
            .into_iter()
            .filter_map(|entry| self.decode(entry))
            .collect();

        debug!(entity = %self.entity(), count = records.len(), "Loaded collection");
        Ok(records)
    }

    /// The record with `id`, if present.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<T>> {
        let entries = self.load_raw().await?;
        Ok(entries
            .into_iter()
            .find(|entry| entry_id(entry) == Some(id))
            .and_then(|entry| self.decode(entry)))
    }

    /// Like [`get_by_id`](Self::get_by_id) but a missing record is an error.
    pub async fn require(&self, id: &str) -> DbResult<T> {
        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found(self.entity(), id))
    }

    /// Creates or merge-updates `record`; returns the stored result.
    pub async fn save(&self, record: &T) -> DbResult<T> {
        let mut entries = self.load_raw().await?;
        let incoming = match serde_json::to_value(record)? {
            Value::Object(fields) => fields,
            _ => {
                return Err(DbError::Internal(format!(
                    "{} does not serialize to a JSON object",
                    self.entity()
                )))
            }
        };

        let now = Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));
        let id = match incoming.get(ID_FIELD).and_then(Value::as_str) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => new_record_id(),
        };

        let position = entries
            .iter()
            .position(|entry| entry_id(entry) == Some(id.as_str()));

        let mut merged = match position {
            Some(index) => {
                let mut fields = match entries[index].take() {
                    Value::Object(fields) => fields,
                    _ => Map::new(),
                };
                let created_at = fields.get(CREATED_AT_FIELD).cloned();

                for (field, value) in incoming {
                    fields.insert(field, value);
                }
                fields.insert(
                    CREATED_AT_FIELD.to_string(),
                    created_at.unwrap_or_else(|| now.clone()),
                );
                fields
            }
            None => {
                let mut fields = incoming;
                fields.insert(CREATED_AT_FIELD.to_string(), now.clone());
                fields
            }
        };

        merged.insert(ID_FIELD.to_string(), Value::String(id.clone()));
        merged.insert(UPDATED_AT_FIELD.to_string(), now);
        let merged = Value::Object(merged);

        let saved: T = serde_json::from_value(merged.clone())?;
        saved
            .validate()
            .map_err(|e| DbError::invalid(self.entity(), e))?;

        match position {
            Some(index) => entries[index] = merged,
            None => entries.push(merged),
        }
        self.store_raw(&entries).await?;

        debug!(
            entity = %self.entity(),
            id = %id,
            created = position.is_none(),
            "Saved record"
        );
        Ok(saved)
    }

    /// Drops `fields` (JSON names, e.g. `"dueDate"`) from the stored record.
    ///
    /// `save` never clears anything, since a `None` field is simply not
    /// sent. This is the explicit way to unassign a task or drop a due date.
    /// `id` and `createdAt` cannot be unset. The result is validated like a
    /// save, so unsetting a required field fails with `DbError::Invalid`.
    pub async fn unset(&self, id: &str, fields: &[&str]) -> DbResult<T> {
        let mut entries = self.load_raw().await?;
        let index = entries
            .iter()
            .position(|entry| entry_id(entry) == Some(id))
            .ok_or_else(|| DbError::not_found(self.entity(), id))?;

        let mut updated = entries[index].clone();
        if let Value::Object(stored) = &mut updated {
            for field in fields {
                if *field != ID_FIELD && *field != CREATED_AT_FIELD {
                    stored.remove(*field);
                }
            }
            stored.insert(
                UPDATED_AT_FIELD.to_string(),
                Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
            );
        }

        let saved: T = serde_json::from_value(updated.clone())?;
        saved
            .validate()
            .map_err(|e| DbError::invalid(self.entity(), e))?;

        entries[index] = updated;
        self.store_raw(&entries).await?;

        debug!(entity = %self.entity(), id = %id, fields = ?fields, "Unset record fields");
        Ok(saved)
    }

    /// Removes the record with `id`.
    ///
    /// Always returns `true` once the write has gone through, including
    /// when no record had that id.
    pub async fn remove(&self, id: &str) -> DbResult<bool> {
        let mut entries = self.load_raw().await?;
        let before = entries.len();
        entries.retain(|entry| entry_id(entry) != Some(id));

        self.store_raw(&entries).await?;

        debug!(
            entity = %self.entity(),
            id = %id,
            removed = before - entries.len(),
            "Removed record"
        );
        Ok(true)
    }

    /// Number of decodable records.
    pub async fn count(&self) -> DbResult<usize> {
        Ok(self.get_all().await?.len())
    }

    /// Overwrites the whole collection with `records` exactly as given.
    ///
    /// No id assignment, stamping or validation: this is the bulk path for
    /// fixtures and imports that already carry complete records.
    pub async fn replace_all(&self, records: &[T]) -> DbResult<()> {
        let entries = records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(entity = %self.entity(), count = entries.len(), "Replacing collection");
        self.store_raw(&entries).await
    }

    /// Deletes the collection key entirely.
    pub async fn clear(&self) -> DbResult<()> {
        self.storage.remove_item(T::COLLECTION.key()).await
    }
}

fn entry_id(entry: &Value) -> Option<&str> {
    entry.get(ID_FIELD).and_then(Value::as_str)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use anchor_core::{Client, Expense, InventoryItem, Money, Note, Task, TimesheetEntry};
    use chrono::NaiveDate;

    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn client(name: &str) -> Client {
        Client {
            name: name.to_string(),
            ..Client::default()
        }
    }

    #[tokio::test]
    async fn test_missing_key_reads_empty() {
        let db = db().await;
        assert!(db.clients().get_all().await.unwrap().is_empty());
        assert_eq!(db.clients().get_by_id("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_new_assigns_id_and_timestamps() {
        let db = db().await;
        let saved = db.clients().save(&client("Dana")).await.unwrap();

        assert!(!saved.id.is_empty());
        assert!(saved.created_at.is_some());
        assert_eq!(saved.created_at, saved.updated_at);

        let loaded = db.clients().get_by_id(&saved.id).await.unwrap().unwrap();
        assert_eq!(loaded, saved);
    }

    #[tokio::test]
    async fn test_save_keeps_caller_id() {
        let db = db().await;
        let mut c = client("Lee");
        c.id = "client-lee".to_string();

        let saved = db.clients().save(&c).await.unwrap();
        assert_eq!(saved.id, "client-lee");
    }

    #[tokio::test]
    async fn test_save_merges_with_existing() {
        let db = db().await;
        let mut c = client("Dana");
        c.email = Some("dana@example.com".to_string());
        c.tags = vec!["repeat".to_string()];
        let first = db.clients().save(&c).await.unwrap();

        // Partial update: email omitted, so the stored one survives.
        let patch = Client {
            id: first.id.clone(),
            name: "Dana Whitfield".to_string(),
            phone: Some("555-0100".to_string()),
            tags: vec!["repeat".to_string()],
            ..Client::default()
        };
        let second = db.clients().save(&patch).await.unwrap();

        assert_eq!(second.name, "Dana Whitfield");
        assert_eq!(second.email.as_deref(), Some("dana@example.com"));
        assert_eq!(second.phone.as_deref(), Some("555-0100"));
        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);
        assert_eq!(db.clients().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_partial_save_keeps_stored_dates() {
        let db = db().await;
        let march_5 = NaiveDate::from_ymd_opt(2024, 3, 5);

        let expense = db
            .expenses()
            .save(&Expense {
                date: march_5,
                category: "Materials".to_string(),
                amount: Money::from_cents(4_200),
                ..Expense::default()
            })
            .await
            .unwrap();
        let expense = db
            .expenses()
            .save(&Expense {
                id: expense.id.clone(),
                vendor: "Northwoods Lumber".to_string(),
                amount: Money::from_cents(4_200),
                ..Expense::default()
            })
            .await
            .unwrap();
        assert_eq!(expense.date, march_5);
        assert_eq!(expense.vendor, "Northwoods Lumber");

        let entry = db
            .timesheets()
            .save(&TimesheetEntry {
                date: march_5,
                user_id: "user-1".to_string(),
                hours: 2.0,
                ..TimesheetEntry::default()
            })
            .await
            .unwrap();
        let entry = db
            .timesheets()
            .save(&TimesheetEntry {
                id: entry.id.clone(),
                user_id: "user-1".to_string(),
                hours: 3.5,
                ..TimesheetEntry::default()
            })
            .await
            .unwrap();
        assert_eq!(entry.date, march_5);
        assert_eq!(entry.hours, 3.5);

        let stored = db.timesheets().get_by_id(&entry.id).await.unwrap().unwrap();
        assert_eq!(stored.date, march_5);
    }

    #[tokio::test]
    async fn test_unset_clears_optional_fields() {
        let db = db().await;
        let task = db
            .tasks()
            .save(&Task {
                title: "Glue up".to_string(),
                assignee: Some("user-2".to_string()),
                due_date: NaiveDate::from_ymd_opt(2024, 6, 1),
                ..Task::default()
            })
            .await
            .unwrap();

        let cleared = db
            .tasks()
            .unset(&task.id, &["assignee", "dueDate", "id", "createdAt"])
            .await
            .unwrap();
        assert_eq!(cleared.assignee, None);
        assert_eq!(cleared.due_date, None);
        assert_eq!(cleared.id, task.id);
        assert_eq!(cleared.created_at, task.created_at);
        assert_eq!(cleared.title, "Glue up");

        let stored = db.tasks().get_by_id(&task.id).await.unwrap().unwrap();
        assert_eq!(stored, cleared);
    }

    #[tokio::test]
    async fn test_unset_required_field_is_rejected() {
        let db = db().await;
        let c = db.clients().save(&client("Dana")).await.unwrap();

        let err = db.clients().unset(&c.id, &["name"]).await.unwrap_err();
        assert!(matches!(err, DbError::Invalid { .. }));
        assert_eq!(db.clients().require(&c.id).await.unwrap().name, "Dana");

        let err = db.clients().unset("missing", &["email"]).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_save_cannot_rewrite_created_at() {
        let db = db().await;
        let first = db.clients().save(&client("Dana")).await.unwrap();

        let mut forged = first.clone();
        forged.created_at = Some(chrono::Utc::now() + chrono::Duration::days(30));
        let second = db.clients().save(&forged).await.unwrap();

        assert_eq!(second.created_at, first.created_at);
    }

    #[tokio::test]
    async fn test_invalid_record_is_not_written() {
        let db = db().await;
        let err = db.clients().save(&client("   ")).await.unwrap_err();
        assert!(matches!(err, DbError::Invalid { .. }));
        assert!(db.clients().get_all().await.unwrap().is_empty());

        let item = InventoryItem {
            name: "Walnut".to_string(),
            unit_cost: Money::from_cents(-5),
            ..InventoryItem::default()
        };
        assert!(db.inventory().save(&item).await.is_err());
    }

    #[tokio::test]
    async fn test_remove_filters_and_always_succeeds() {
        let db = db().await;
        let a = db.clients().save(&client("A")).await.unwrap();
        let b = db.clients().save(&client("B")).await.unwrap();

        assert!(db.clients().remove(&a.id).await.unwrap());
        assert!(db.clients().remove("not-there").await.unwrap());

        let ids: Vec<String> = db
            .clients()
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![b.id]);
    }

    #[tokio::test]
    async fn test_invalid_json_degrades_to_empty_and_recovers() {
        let db = db().await;
        db.storage()
            .set_item("anchor_clients", "{not json")
            .await
            .unwrap();

        assert!(db.clients().get_all().await.unwrap().is_empty());

        let saved = db.clients().save(&client("Fresh")).await.unwrap();
        assert_eq!(db.clients().get_all().await.unwrap(), vec![saved]);
    }

    #[tokio::test]
    async fn test_non_array_blob_reads_empty() {
        let db = db().await;
        db.storage()
            .set_item("anchor_notes", r#"{"id":"n1"}"#)
            .await
            .unwrap();
        assert!(db.notes().get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_undecodable_entry_skipped_but_preserved() {
        let db = db().await;
        db.storage()
            .set_item(
                "anchor_notes",
                r#"[{"id":"good","title":"ok"},{"id":"bad","pinned":"yes"}]"#,
            )
            .await
            .unwrap();

        let notes = db.notes().get_all().await.unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, "good");

        db.notes()
            .save(&Note {
                title: "new".to_string(),
                ..Note::default()
            })
            .await
            .unwrap();

        let blob = db.storage().get_item("anchor_notes").await.unwrap().unwrap();
        assert!(blob.contains(r#""id":"bad""#));
    }

    #[tokio::test]
    async fn test_replace_all_and_clear() {
        let db = db().await;
        let records = vec![
            Client {
                id: "c1".to_string(),
                name: "One".to_string(),
                ..Client::default()
            },
            Client {
                id: "c2".to_string(),
                name: "Two".to_string(),
                ..Client::default()
            },
        ];
        db.clients().replace_all(&records).await.unwrap();
        assert_eq!(db.clients().get_all().await.unwrap(), records);

        db.clients().clear().await.unwrap();
        assert!(!db.storage().contains_key("anchor_clients").await.unwrap());
    }

    #[tokio::test]
    async fn test_require_reports_entity() {
        let db = db().await;
        let err = db.orders().require("o-404").await.unwrap_err();
        assert_eq!(err.to_string(), "Order not found: o-404");
    }
}
