//! MongoDB storage backend using the official MongoDB async driver.
//!
//! # Feature flag
//!
//! This module is gated behind the `mongodb_backend` feature flag, which is
//! on by default.
//!
//! # Storage model
//!
//! All submissions live in one collection (`forms` unless configured
//! otherwise), one document per accepted post.
//!
//! # Serialization strategy
//!
//! Submissions are serialized via `serde_json::Value` as an intermediate
//! format, then converted to BSON documents. UUIDs are stored as strings and
//! the `createdAt`/`updatedAt` timestamps as BSON dates (millisecond
//! precision). The `id` field is mapped to MongoDB's `_id` convention.

use crate::config::IntakeConfig;
use crate::core::SubmissionStore;
use crate::entities::Submission;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::bson::{Bson, Document, doc};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use std::time::Duration;
use uuid::Uuid;

/// Database used when neither the config nor the URL names one
pub const DEFAULT_DATABASE: &str = "form";

/// Fields persisted as BSON dates rather than strings
const TIMESTAMP_FIELDS: [&str; 2] = ["createdAt", "updatedAt"];

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// Convert a serde_json::Value (expected to be an Object) into a BSON Document,
/// renaming `id` → `_id` for MongoDB convention.
fn json_to_document(json: serde_json::Value) -> Result<Document> {
    let bson_val = mongodb::bson::to_bson(&json)
        .map_err(|e| anyhow!("Failed to convert JSON to BSON: {}", e))?;

    let mut doc = match bson_val {
        Bson::Document(d) => d,
        _ => return Err(anyhow!("Expected BSON document, got non-object")),
    };

    if let Some(id) = doc.remove("id") {
        doc.insert("_id", id);
    }

    Ok(doc)
}

/// Convert a BSON Document back into a serde_json::Value,
/// renaming `_id` → `id`.
fn document_to_json(mut doc: Document) -> serde_json::Value {
    if let Some(id) = doc.remove("_id") {
        doc.insert("id", id);
    }

    Bson::Document(doc).into_relaxed_extjson()
}

fn bson_date(timestamp: &DateTime<Utc>) -> Bson {
    Bson::DateTime(mongodb::bson::DateTime::from_millis(
        timestamp.timestamp_millis(),
    ))
}

fn submission_to_document(submission: &Submission) -> Result<Document> {
    let json = serde_json::to_value(submission)
        .map_err(|e| anyhow!("Failed to serialize submission: {}", e))?;
    let mut doc = json_to_document(json)?;

    doc.insert("createdAt", bson_date(&submission.created_at));
    doc.insert("updatedAt", bson_date(&submission.updated_at));

    Ok(doc)
}

fn document_to_submission(mut doc: Document) -> Result<Submission> {
    for field in TIMESTAMP_FIELDS {
        if let Some(&Bson::DateTime(date)) = doc.get(field) {
            let text = date
                .try_to_rfc3339_string()
                .map_err(|e| anyhow!("Invalid {} in document: {}", field, e))?;
            doc.insert(field, text);
        }
    }

    serde_json::from_value(document_to_json(doc))
        .map_err(|e| anyhow!("Failed to deserialize submission from document: {}", e))
}

// ---------------------------------------------------------------------------
// MongoSubmissionStore
// ---------------------------------------------------------------------------

/// Submission store backed by one MongoDB collection
///
/// The driver pools and re-establishes connections internally; one store is
/// created at startup and shared by every request.
///
/// # Example
///
/// ```rust,ignore
/// let config = IntakeConfig::load()?;
/// let store = MongoSubmissionStore::connect(&config).await?;
/// store.insert(submission).await?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoSubmissionStore {
    database: Database,
    collection: String,
}

impl MongoSubmissionStore {
    /// Create a store over an existing database handle.
    pub fn new(database: Database, collection: impl Into<String>) -> Self {
        Self {
            database,
            collection: collection.into(),
        }
    }

    /// Build a client from `config`, select the database, and ping it once.
    ///
    /// A failed ping is returned as an error so the caller can refuse to
    /// start against an unreachable store.
    pub async fn connect(config: &IntakeConfig) -> Result<Self> {
        let mut options = ClientOptions::parse(&config.database_url)
            .await
            .context("Invalid MongoDB connection string")?;

        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.server_selection_timeout =
            Some(Duration::from_millis(config.server_selection_timeout_ms));
        options.connect_timeout = Some(Duration::from_millis(config.connect_timeout_ms));
        options.max_idle_time = Some(Duration::from_millis(config.idle_timeout_ms));

        let database_name = config
            .database_name
            .clone()
            .or_else(|| options.default_database.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let client = Client::with_options(options).context("Failed to build MongoDB client")?;
        let store = Self::new(client.database(&database_name), config.collection.clone());

        store
            .ping()
            .await
            .with_context(|| format!("MongoDB unreachable (database '{}')", database_name))?;

        tracing::info!(
            database = %database_name,
            collection = %store.collection,
            "Connected to MongoDB"
        );

        Ok(store)
    }

    /// Get a reference to the underlying database.
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Load one stored submission by id.
    pub async fn find(&self, id: Uuid) -> Result<Option<Submission>> {
        self.collection()
            .find_one(doc! { "_id": id.to_string() })
            .await
            .map_err(|e| anyhow!("Failed to read submission: {}", e))?
            .map(document_to_submission)
            .transpose()
    }

    fn collection(&self) -> Collection<Document> {
        self.database.collection(&self.collection)
    }
}

#[async_trait]
impl SubmissionStore for MongoSubmissionStore {
    /// Insert the document; an acknowledged write returns the submission as given.
    async fn insert(&self, submission: Submission) -> Result<Submission> {
        let doc = submission_to_document(&submission)?;

        self.collection()
            .insert_one(doc)
            .await
            .map_err(|e| anyhow!("Failed to insert submission: {}", e))?;

        Ok(submission)
    }

    async fn count(&self) -> Result<u64> {
        self.collection()
            .count_documents(doc! {})
            .await
            .map_err(|e| anyhow!("Failed to count submissions: {}", e))
    }

    async fn ping(&self) -> Result<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| anyhow!("Ping failed: {}", e))?;
        Ok(())
    }
}
