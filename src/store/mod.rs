//! The document-store engine.
//!
//! A [`Store`] manages a fixed set of named collections, each holding JSON
//! documents keyed by a string primary key, with zero or more secondary
//! indexes declared in a [`Schema`]. Collections map onto SQLite tables of
//! `(id, body)` rows; secondary indexes are expression indexes over
//! `json_extract` of the indexed field, so unique constraints are enforced
//! by the database itself.
//!
//! The engine knows nothing about the domain: repositories in [`crate::db`]
//! perform every "join" in application code with two lookups. All operations
//! are async and serialize against one connection behind a mutex; there is
//! one local writer, no cross-collection transaction, and no retry.

pub mod schema;

use crate::errors::{Error, Result};
use rusqlite::{Connection, ErrorCode, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, instrument};
use uuid::Uuid;

pub use schema::{CollectionSpec, IndexSpec, Schema, collections, planner_schema};

/// Generates a collision-resistant id for a new record.
#[must_use]
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// A live handle to the underlying storage.
///
/// Constructed explicitly and passed into repositories, so tests can run
/// independent stores in isolation. Opening is idempotent: schema setup uses
/// `IF NOT EXISTS` throughout, so redundant opens of the same path are safe.
pub struct Store {
    conn: Mutex<Connection>,
    schema: Schema,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("collections", &self.schema.collections.len())
            .finish_non_exhaustive()
    }
}

impl Store {
    /// Opens (and on first use initializes) the store at `path`.
    ///
    /// # Errors
    ///
    /// Returns `Error::StorageUnavailable` if the database cannot be opened
    /// or the schema cannot be set up, and `Error::Config` if the schema
    /// declares an invalid collection or index name.
    #[instrument(skip(schema))]
    pub async fn open(path: &str, schema: Schema) -> Result<Self> {
        debug!("Opening store at: {}", path);
        let conn = Connection::open(path).map_err(|e| {
            Error::StorageUnavailable(format!("Failed to open database at {path}: {e}"))
        })?;
        Self::from_connection(conn, schema)
    }

    /// Opens a fresh in-memory store. Used by tests and throwaway tooling.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Store::open`].
    pub async fn open_in_memory(schema: Schema) -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| {
            Error::StorageUnavailable(format!("Failed to open in-memory database: {e}"))
        })?;
        Self::from_connection(conn, schema)
    }

    fn from_connection(conn: Connection, schema: Schema) -> Result<Self> {
        validate_schema(&schema)?;
        create_collections(&conn, &schema)?;
        info!(
            "Store ready with {} collections",
            schema.collections.len()
        );
        Ok(Self {
            conn: Mutex::new(conn),
            schema,
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| Error::Storage("Failed to acquire store lock".to_string()))
    }

    fn collection(&self, name: &str) -> Result<&CollectionSpec> {
        self.schema
            .collection(name)
            .ok_or_else(|| Error::UnknownCollection(name.to_string()))
    }

    /// Returns every record in the collection, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownCollection` for an undeclared collection and
    /// storage/serialization errors from the underlying read.
    pub async fn get_all<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
        let spec = self.collection(collection)?;
        let conn = self.lock()?;
        let mut stmt = conn.prepare_cached(&format!("SELECT body FROM \"{}\"", spec.name))?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut records = Vec::new();
        for body in rows {
            records.push(serde_json::from_str(&body?)?);
        }
        Ok(records)
    }

    /// Looks a record up by primary key. Absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownCollection` for an undeclared collection and
    /// storage/serialization errors from the underlying read.
    pub async fn get_by_id<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<T>> {
        let spec = self.collection(collection)?;
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare_cached(&format!("SELECT body FROM \"{}\" WHERE id = ?1", spec.name))?;
        let body: Option<String> = stmt
            .query_row(params![id], |row| row.get(0))
            .optional()?;
        match body {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }

    /// Returns all records whose indexed field equals `value`.
    ///
    /// A unique index still answers with a list, conventionally of length
    /// zero or one.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownCollection`/`Error::UnknownIndex` for
    /// undeclared names and storage/serialization errors from the read.
    pub async fn get_by_index<T: DeserializeOwned>(
        &self,
        collection: &str,
        index: &str,
        value: &str,
    ) -> Result<Vec<T>> {
        let spec = self.collection(collection)?;
        let idx = spec.index(index).ok_or_else(|| Error::UnknownIndex {
            collection: collection.to_string(),
            index: index.to_string(),
        })?;
        let conn = self.lock()?;
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT body FROM \"{}\" WHERE json_extract(body, '$.{}') = ?1",
            spec.name, idx.field
        ))?;
        let rows = stmt.query_map(params![value], |row| row.get::<_, String>(0))?;
        let mut records = Vec::new();
        for body in rows {
            records.push(serde_json::from_str(&body?)?);
        }
        Ok(records)
    }

    /// Inserts a new record. The record's `id` field is its primary key.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateKey` if the primary key or a unique-indexed
    /// field already exists, `Error::Storage` if the record carries no
    /// string `id`, and `Error::UnknownCollection` for an undeclared
    /// collection.
    pub async fn insert<T: Serialize>(&self, collection: &str, record: &T) -> Result<()> {
        let spec = self.collection(collection)?;
        let (id, body) = body_and_id(record)?;
        let conn = self.lock()?;
        let mut stmt = conn.prepare_cached(&format!(
            "INSERT INTO \"{}\" (id, body) VALUES (?1, ?2)",
            spec.name
        ))?;
        stmt.execute(params![id, body])
            .map_err(|e| constraint_to_duplicate(collection, e))?;
        debug!("Inserted record {} into '{}'", id, collection);
        Ok(())
    }

    /// Inserts or replaces a record by primary key. Never fails on the
    /// record already existing.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateKey` if the new body collides with another
    /// record on a unique secondary index, plus the same conditions as
    /// [`Store::insert`] for missing ids and undeclared collections.
    pub async fn upsert<T: Serialize>(&self, collection: &str, record: &T) -> Result<()> {
        let spec = self.collection(collection)?;
        let (id, body) = body_and_id(record)?;
        let conn = self.lock()?;
        let mut stmt = conn.prepare_cached(&format!(
            "INSERT INTO \"{}\" (id, body) VALUES (?1, ?2)
             ON CONFLICT(id) DO UPDATE SET body = excluded.body",
            spec.name
        ))?;
        stmt.execute(params![id, body])
            .map_err(|e| constraint_to_duplicate(collection, e))?;
        debug!("Upserted record {} into '{}'", id, collection);
        Ok(())
    }

    /// Removes a record by primary key, reporting whether anything was
    /// actually removed.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownCollection` for an undeclared collection and
    /// storage errors from the underlying delete.
    pub async fn delete(&self, collection: &str, id: &str) -> Result<bool> {
        let spec = self.collection(collection)?;
        let conn = self.lock()?;
        let removed = conn.execute(
            &format!("DELETE FROM \"{}\" WHERE id = ?1", spec.name),
            params![id],
        )?;
        debug!(
            "Delete of record {} from '{}': removed={}",
            id, collection, removed
        );
        Ok(removed > 0)
    }
}

fn body_and_id<T: Serialize>(record: &T) -> Result<(String, String)> {
    let value = serde_json::to_value(record)?;
    let id = value
        .get("id")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| Error::Storage("Record has no string 'id' field".to_string()))?
        .to_string();
    Ok((id, value.to_string()))
}

fn constraint_to_duplicate(collection: &str, e: rusqlite::Error) -> Error {
    match &e {
        rusqlite::Error::SqliteFailure(failure, message)
            if failure.code == ErrorCode::ConstraintViolation =>
        {
            Error::DuplicateKey {
                collection: collection.to_string(),
                detail: message
                    .clone()
                    .unwrap_or_else(|| "constraint violation".to_string()),
            }
        }
        _ => Error::Rusqlite(e),
    }
}

fn validate_schema(schema: &Schema) -> Result<()> {
    for collection in schema.collections {
        validate_identifier("collection", collection.name)?;
        for index in collection.indexes {
            validate_identifier("index", index.name)?;
            validate_identifier("index field", index.field)?;
        }
    }
    Ok(())
}

// Names are interpolated into DDL and query text, so they must stay plain
// identifiers.
fn validate_identifier(kind: &str, name: &str) -> Result<()> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(Error::Config(format!("Invalid {kind} name: '{name}'")));
    }
    Ok(())
}

fn create_collections(conn: &Connection, schema: &Schema) -> Result<()> {
    let mut ddl = String::from("BEGIN;\n");
    for collection in schema.collections {
        ddl.push_str(&format!(
            "CREATE TABLE IF NOT EXISTS \"{}\" (id TEXT PRIMARY KEY, body TEXT NOT NULL);\n",
            collection.name
        ));
        for index in collection.indexes {
            let uniqueness = if index.unique { "UNIQUE " } else { "" };
            ddl.push_str(&format!(
                "CREATE {}INDEX IF NOT EXISTS \"idx_{}_{}\" ON \"{}\" (json_extract(body, '$.{}'));\n",
                uniqueness, collection.name, index.name, collection.name, index.field
            ));
        }
    }
    ddl.push_str("COMMIT;");
    conn.execute_batch(&ddl)
        .map_err(|e| Error::StorageUnavailable(format!("Failed to set up collections: {e}")))?;
    Ok(())
}
