use crate::models::StatusRecord;
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

/// In-memory [`StatusStore`] used by the service and route tests.
#[cfg(test)]
pub mod memory;

/// MongoDB-backed [`StatusStore`] holding the process-wide client.
pub mod mongo;

/// Collection that holds every status record.
pub const STATUS_COLLECTION: &str = "status_checks";

/// Maximum number of records returned by a single list. Anything beyond it is
/// silently dropped.
pub const LIST_LIMIT: usize = 1000;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store request failed: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync>),

    #[error("stored record {id} has an out-of-range timestamp ({millis} ms)")]
    InvalidTimestamp { id: String, millis: i64 },
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Backend(Box::new(err))
    }
}

/// # Status Record Persistence
///
/// Every call is a single independent store operation. Implementations must
/// be shareable across concurrently running request handlers.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Persists exactly one record.
    async fn insert(&self, record: &StatusRecord) -> Result<(), StoreError>;

    /// Returns at most `limit` records in the store's natural order.
    async fn list(&self, limit: usize) -> Result<Vec<StatusRecord>, StoreError>;

    /// Releases the underlying connection. Failures are logged, not returned.
    async fn shutdown(&self);
}
