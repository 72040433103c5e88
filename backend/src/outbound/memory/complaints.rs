//! In-memory complaint ledger.

use std::sync::RwLock;

use async_trait::async_trait;

use super::{Table, poisoned};
use crate::domain::ports::{ComplaintFilter, ComplaintRepository, ComplaintRepositoryError};
use crate::domain::{Complaint, ComplaintId, NewComplaint};

/// Ledger store keeping complaints in filing order.
///
/// [`ComplaintRepository::update`] compares and replaces under one write
/// lock, which is what makes concurrent claims safe.
#[derive(Debug, Default)]
pub struct MemoryComplaintRepository {
    table: RwLock<Table<Complaint>>,
}

impl MemoryComplaintRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn storage<T>(err: std::sync::PoisonError<T>) -> ComplaintRepositoryError {
    ComplaintRepositoryError::storage(poisoned("complaint store", err))
}

#[async_trait]
impl ComplaintRepository for MemoryComplaintRepository {
    async fn insert(&self, complaint: NewComplaint) -> Result<Complaint, ComplaintRepositoryError> {
        let mut table = self.table.write().map_err(storage)?;
        Ok(table.push_with(|id| Complaint::new(ComplaintId::new(id), complaint)))
    }

    async fn find_by_id(
        &self,
        id: ComplaintId,
    ) -> Result<Option<Complaint>, ComplaintRepositoryError> {
        let table = self.table.read().map_err(storage)?;
        Ok(table.rows.iter().find(|complaint| complaint.id() == id).cloned())
    }

    async fn list(
        &self,
        filter: ComplaintFilter,
    ) -> Result<Vec<Complaint>, ComplaintRepositoryError> {
        let table = self.table.read().map_err(storage)?;
        Ok(table
            .rows
            .iter()
            .filter(|complaint| filter.matches(complaint))
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        complaint: &Complaint,
        expected_revision: u64,
    ) -> Result<(), ComplaintRepositoryError> {
        let mut table = self.table.write().map_err(storage)?;
        let stored = table
            .rows
            .iter_mut()
            .find(|stored| stored.id() == complaint.id())
            .ok_or_else(|| ComplaintRepositoryError::missing(complaint.id()))?;
        if stored.revision() != expected_revision {
            return Err(ComplaintRepositoryError::revision_mismatch(
                expected_revision,
                stored.revision(),
            ));
        }
        *stored = complaint.clone();
        Ok(())
    }
}
