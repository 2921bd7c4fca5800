use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

use crate::core::Result;
use crate::modules::expenses::models::{
    ExpenseFilter, ExpenseRecord, ExpenseStatus, ExpenseSubmission,
};
use crate::modules::expenses::repositories::ExpenseRepository;
use crate::modules::expenses::services::InstallmentExpander;
use crate::modules::reports::models::AggregateReport;
use crate::modules::reports::services::Aggregator;

/// Business logic layer for expense operations
///
/// Thin orchestration over the pure expander and aggregator: expansion
/// results are handed to the repository for persistence, and reports are
/// computed from whatever record set the repository currently holds.
pub struct ExpenseService<R: ExpenseRepository> {
    repository: R,
}

impl<R: ExpenseRepository> ExpenseService<R> {
    /// Create a new expense service over a storage collaborator
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Expand a submission and persist the resulting records
    ///
    /// Returns the persisted records with their store-assigned identifiers,
    /// in installment order.
    pub async fn create(&self, submission: &ExpenseSubmission) -> Result<Vec<ExpenseRecord>> {
        let records = InstallmentExpander::expand(submission)?;
        let persisted = self.repository.insert_batch(records).await?;

        info!(
            count = persisted.len(),
            category = %submission.category,
            "Created expense records"
        );

        Ok(persisted)
    }

    /// All currently stored expense records
    pub async fn list(&self) -> Result<Vec<ExpenseRecord>> {
        self.repository.fetch_all().await
    }

    /// Aggregate the stored records for a given reference date
    pub async fn report(
        &self,
        filter: Option<&ExpenseFilter>,
        reference_date: NaiveDate,
    ) -> Result<AggregateReport> {
        let records = self.repository.fetch_all().await?;
        let report = Aggregator::aggregate(&records, filter, reference_date);

        if report.is_empty() {
            warn!(reference_date = %reference_date, "Report over empty record set");
        }

        Ok(report)
    }

    /// Aggregate the stored records against today's date
    ///
    /// The only place the wall clock is read; everything below takes the
    /// reference date as a parameter.
    pub async fn report_now(&self, filter: Option<&ExpenseFilter>) -> Result<AggregateReport> {
        self.report(filter, Utc::now().date_naive()).await
    }

    /// Overwrite the status of one record
    ///
    /// No transition rules: installments of one plan move independently, and
    /// a cancelled record may be re-opened.
    pub async fn set_status(&self, id: i64, status: ExpenseStatus) -> Result<ExpenseRecord> {
        let updated = self.repository.set_status(id, status).await?;
        info!(id, status = %status, "Updated expense status");
        Ok(updated)
    }

    /// Delete one record; sibling installments are untouched
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repository.delete(id).await?;
        info!(id, "Deleted expense record");
        Ok(())
    }
}
