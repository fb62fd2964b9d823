use super::{STATUS_COLLECTION, StatusStore, StoreError};
use crate::config::Config;
use crate::models::{StatusDocument, StatusRecord};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};
use tracing::{debug, info, instrument};

/// # MongoDB Status Store
///
/// Owns the single [`Client`] opened at start-up. The driver pools
/// connections internally, so one handle is cloned into every worker and
/// shared by all in-flight requests.
#[derive(Clone, Debug)]
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    /// Opens the client for `config.mongo_url` and selects `config.db_name`.
    ///
    /// The database is not checked for existence; MongoDB creates it on the
    /// first write.
    ///
    /// # Errors
    /// Returns [`StoreError::Backend`] when the connection string cannot be
    /// parsed or the client cannot be built.
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&config.mongo_url).await?;
        let database = client.database(&config.db_name);
        info!(database = %config.db_name, "MongoDB client connected");
        Ok(Self { client, database })
    }

    fn collection(&self) -> Collection<StatusDocument> {
        self.database.collection(STATUS_COLLECTION)
    }
}

#[async_trait]
impl StatusStore for MongoStore {
    #[instrument(skip(self, record), fields(id = %record.id))]
    async fn insert(&self, record: &StatusRecord) -> Result<(), StoreError> {
        self.collection()
            .insert_one(StatusDocument::from(record))
            .await?;
        debug!("status record inserted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: usize) -> Result<Vec<StatusRecord>, StoreError> {
        let cursor = self
            .collection()
            .find(doc! {})
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .await?;
        let documents: Vec<StatusDocument> = cursor.try_collect().await?;
        debug!(count = documents.len(), "status records fetched");

        documents
            .into_iter()
            .map(|document| {
                let id = document.id.clone();
                StatusRecord::try_from(document)
                    .map_err(|millis| StoreError::InvalidTimestamp { id, millis })
            })
            .collect()
    }

    async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        info!("MongoDB client connection closed");
    }
}
