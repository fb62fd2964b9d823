use super::{StatusStore, StoreError};
use crate::models::StatusRecord;
use async_trait::async_trait;
use std::sync::Mutex;

/// Keeps records in insertion order behind a mutex.
#[derive(Default)]
pub struct InMemoryStore {
    records: Mutex<Vec<StatusRecord>>,
}

impl InMemoryStore {
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl StatusStore for InMemoryStore {
    async fn insert(&self, record: &StatusRecord) -> Result<(), StoreError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn list(&self, limit: usize) -> Result<Vec<StatusRecord>, StoreError> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().take(limit).cloned().collect())
    }

    async fn shutdown(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_respects_limit() {
        let store = InMemoryStore::default();
        tokio_test::block_on(async {
            for name in ["a", "b", "c"] {
                store.insert(&StatusRecord::new(name)).await.unwrap();
            }
            let listed = store.list(2).await.unwrap();
            assert_eq!(listed.len(), 2);
            assert_eq!(listed[0].client_name, "a");
            assert_eq!(listed[1].client_name, "b");
        });
        assert_eq!(store.len(), 3);
    }
}
