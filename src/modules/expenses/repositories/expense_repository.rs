use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::expenses::models::{ExpenseRecord, ExpenseStatus, UNASSIGNED_ID};

/// Storage collaborator contract for expense records
///
/// Implementations own identifier assignment and all persistence concerns;
/// callers treat them as opaque asynchronous providers.
#[async_trait]
pub trait ExpenseRepository: Repository<ExpenseRecord, i64> {
    /// Overwrite the status of one record
    async fn set_status(&self, id: i64, status: ExpenseStatus) -> Result<ExpenseRecord>;
}

#[derive(Debug, Default)]
struct StoreInner {
    records: Vec<ExpenseRecord>,
    next_id: i64,
}

/// In-memory expense store
///
/// Serves as the fallback store when no remote database is configured, and as
/// the test double for the repository seam. Initial data is injected at
/// construction; all access goes through the lock and records are handed out
/// as clones, so no caller ever holds a reference into the shared state.
#[derive(Debug)]
pub struct InMemoryExpenseRepository {
    inner: RwLock<StoreInner>,
}

impl InMemoryExpenseRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store seeded with initial records
    ///
    /// Records carrying `UNASSIGNED_ID` get fresh identifiers; records with
    /// explicit ids keep them, and the id sequence continues past the highest
    /// one seen.
    pub fn with_records(initial: Vec<ExpenseRecord>) -> Self {
        let mut next_id = 1;
        let mut records = Vec::with_capacity(initial.len());

        for mut record in initial {
            if record.id == UNASSIGNED_ID {
                record.id = next_id;
            }
            next_id = next_id.max(record.id + 1);
            records.push(record);
        }

        Self {
            inner: RwLock::new(StoreInner { records, next_id }),
        }
    }
}

impl Default for InMemoryExpenseRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<ExpenseRecord, i64> for InMemoryExpenseRepository {
    async fn insert_batch(&self, entities: Vec<ExpenseRecord>) -> Result<Vec<ExpenseRecord>> {
        let mut inner = self.inner.write().await;

        let mut inserted = Vec::with_capacity(entities.len());
        for record in entities {
            let id = inner.next_id;
            inner.next_id += 1;
            let record = record.with_id(id);
            inner.records.push(record.clone());
            inserted.push(record);
        }

        Ok(inserted)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ExpenseRecord>> {
        let inner = self.inner.read().await;
        Ok(inner.records.iter().find(|r| r.id == id).cloned())
    }

    async fn update(&self, id: i64, entity: ExpenseRecord) -> Result<ExpenseRecord> {
        let mut inner = self.inner.write().await;

        let slot = inner
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found(format!("Expense {}", id)))?;

        *slot = entity.with_id(id);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut inner = self.inner.write().await;

        let before = inner.records.len();
        inner.records.retain(|r| r.id != id);
        if inner.records.len() == before {
            return Err(AppError::not_found(format!("Expense {}", id)));
        }

        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<ExpenseRecord>> {
        let inner = self.inner.read().await;
        Ok(inner.records.clone())
    }
}

#[async_trait]
impl ExpenseRepository for InMemoryExpenseRepository {
    async fn set_status(&self, id: i64, status: ExpenseStatus) -> Result<ExpenseRecord> {
        let mut inner = self.inner.write().await;

        let record = inner
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found(format!("Expense {}", id)))?;

        record.set_status(status);
        Ok(record.clone())
    }
}
