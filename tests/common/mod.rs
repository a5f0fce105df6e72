use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use bson::{Bson, Document};
use opo_maintenance::modules::backfill::crud::FieldStore;
use opo_maintenance::modules::backfill::model::UpdateOutcome;

#[derive(Debug, thiserror::Error)]
#[error("memory store: {0}")]
pub struct StoreError(pub &'static str);

/// Collection double that evaluates the backfill queries over top-level fields.
#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<Vec<Document>>,
    writes: AtomicUsize,
    offline: bool,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn with(documents: Vec<Document>) -> Self {
        Self {
            documents: Mutex::new(documents),
            ..Default::default()
        }
    }

    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn documents(&self) -> Vec<Document> {
        self.documents.lock().unwrap().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn count_where(&self, predicate: impl Fn(&Document) -> bool) -> u64 {
        self.documents.lock().unwrap().iter().filter(|d| predicate(d)).count() as u64
    }
}

impl FieldStore for MemoryStore {
    type Error = StoreError;

    async fn ping(&self) -> Result<(), StoreError> {
        if self.offline {
            return Err(StoreError("offline"));
        }
        Ok(())
    }

    async fn count_all(&self) -> Result<u64, StoreError> {
        Ok(self.count_where(|_| true))
    }

    async fn count_missing(&self, field: &str) -> Result<u64, StoreError> {
        Ok(self.count_where(|d| !d.contains_key(field)))
    }

    async fn count_equal(&self, field: &str, value: &Bson) -> Result<u64, StoreError> {
        Ok(self.count_where(|d| d.get(field) == Some(value)))
    }

    async fn count_not_equal(&self, field: &str, value: &Bson) -> Result<u64, StoreError> {
        Ok(self.count_where(|d| d.get(field) != Some(value)))
    }

    async fn set_where_missing(&self, field: &str, value: &Bson) -> Result<UpdateOutcome, StoreError> {
        if self.fail_writes {
            return Err(StoreError("write rejected"));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);

        let mut documents = self.documents.lock().unwrap();
        let mut outcome = UpdateOutcome::default();
        for document in documents.iter_mut().filter(|d| !d.contains_key(field)) {
            document.insert(field, value.clone());
            outcome.matched_count += 1;
            outcome.modified_count += 1;
        }

        Ok(outcome)
    }
}
