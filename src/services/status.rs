use crate::db::{LIST_LIMIT, StatusStore};
use crate::errors::ApiError;
use crate::models::StatusRecord;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// # Status Record Service
///
/// Thin layer between the HTTP handlers and the store. Holds no state of its
/// own beyond the shared store handle, so it is cheap to clone into every
/// actix worker.
#[derive(Clone)]
pub struct StatusService {
    store: Arc<dyn StatusStore>,
}

impl StatusService {
    pub fn new(store: Arc<dyn StatusStore>) -> Self {
        Self { store }
    }

    /// Builds a record for `client_name` and persists it. No retry on failure.
    #[instrument(skip(self))]
    pub async fn create(&self, client_name: String) -> Result<StatusRecord, ApiError> {
        let record = StatusRecord::new(client_name);
        if let Err(e) = self.store.insert(&record).await {
            error!(error = %e, "failed to insert status record");
            return Err(e.into());
        }
        info!(id = %record.id, "status record created");
        Ok(record)
    }

    /// Lists up to [`LIST_LIMIT`] records in store order.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<StatusRecord>, ApiError> {
        self.store.list(LIST_LIMIT).await.map_err(|e| {
            error!(error = %e, "failed to list status records");
            ApiError::from(e)
        })
    }

    /// Releases the store connection.
    pub async fn shutdown(&self) {
        self.store.shutdown().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::InMemoryStore;
    use crate::db::{MockStatusStore, StoreError};
    use chrono::{SubsecRound, Utc};
    use mockall::predicate::eq;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_create_then_list() {
        let service = StatusService::new(Arc::new(InMemoryStore::default()));

        let created = service.create("acme".to_string()).await.unwrap();
        let listed = service.list().await.unwrap();

        assert_eq!(listed, vec![created.clone()]);
        assert_eq!(created.client_name, "acme");
        assert!(Uuid::parse_str(&created.id).is_ok());
    }

    #[tokio::test]
    async fn test_create_assigns_timestamp_within_call() {
        let service = StatusService::new(Arc::new(InMemoryStore::default()));

        let before = Utc::now().trunc_subsecs(3);
        let created = service.create("acme".to_string()).await.unwrap();
        let after = Utc::now();

        assert!(created.timestamp >= before && created.timestamp <= after);
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let service = StatusService::new(Arc::new(InMemoryStore::default()));
        for i in 0..50 {
            service.create(format!("client-{i}")).await.unwrap();
        }

        let listed = service.list().await.unwrap();
        let mut ids: Vec<_> = listed.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[tokio::test]
    async fn test_list_caps_at_limit() {
        let store = Arc::new(InMemoryStore::default());
        let service = StatusService::new(store.clone());

        for i in 0..=LIST_LIMIT {
            service.create(format!("client-{i}")).await.unwrap();
        }

        assert_eq!(store.len(), LIST_LIMIT + 1);
        assert_eq!(service.list().await.unwrap().len(), LIST_LIMIT);
    }

    #[tokio::test]
    async fn test_list_empty_collection() {
        let service = StatusService::new(Arc::new(InMemoryStore::default()));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_passes_limit_to_store() {
        let mut store = MockStatusStore::new();
        store
            .expect_list()
            .with(eq(LIST_LIMIT))
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let service = StatusService::new(Arc::new(store));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_surfaces_storage_error() {
        let mut store = MockStatusStore::new();
        store
            .expect_insert()
            .times(1)
            .returning(|_| Err(StoreError::Backend("insert rejected".into())));

        let service = StatusService::new(Arc::new(store));
        let result = service.create("acme".to_string()).await;

        assert!(matches!(result, Err(ApiError::Storage(_))));
    }

    #[tokio::test]
    async fn test_list_surfaces_storage_error() {
        let mut store = MockStatusStore::new();
        store
            .expect_list()
            .returning(|_| Err(StoreError::Backend("server selection timeout".into())));

        let service = StatusService::new(Arc::new(store));
        assert!(matches!(service.list().await, Err(ApiError::Storage(_))));
    }

    #[tokio::test]
    async fn test_shutdown_releases_store() {
        let mut store = MockStatusStore::new();
        store.expect_shutdown().times(1).return_const(());

        let service = StatusService::new(Arc::new(store));
        service.shutdown().await;
    }
}
