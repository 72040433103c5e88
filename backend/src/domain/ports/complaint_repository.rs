//! Port for complaint ledger storage.
//!
//! The [`ComplaintRepository`] trait stores complaints with optimistic
//! concurrency: every update names the revision it was derived from and the
//! adapter rejects it if another writer got there first.

use async_trait::async_trait;

use crate::domain::{Complaint, ComplaintId, NewComplaint, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by complaint repository adapters.
    pub enum ComplaintRepositoryError {
        /// Update targeted a complaint the store does not hold.
        Missing { id: ComplaintId } => "complaint {id} is not stored",
        /// Optimistic concurrency check failed.
        RevisionMismatch { expected: u64, actual: u64 } =>
            "revision mismatch: expected {expected}, found {actual}",
        /// Backing storage failed.
        Storage { message: String } => "complaint repository storage failed: {message}",
    }
}

/// Selection applied by [`ComplaintRepository::list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplaintFilter {
    /// Complaints filed by this customer.
    Customer(UserId),
    /// Complaints currently held by this employee.
    Assignee(UserId),
    /// Complaints still waiting in the `New` state.
    Unassigned,
}

impl ComplaintFilter {
    /// Whether `complaint` is selected by this filter.
    pub fn matches(self, complaint: &Complaint) -> bool {
        match self {
            Self::Customer(customer) => complaint.customer() == customer,
            Self::Assignee(employee) => complaint.assignee() == Some(employee),
            Self::Unassigned => complaint.assignee().is_none(),
        }
    }
}

/// Port for complaint storage and retrieval.
///
/// # Revision Semantics
///
/// - Inserted complaints start at revision 1.
/// - The caller stamps the next revision on the complaint before calling
///   [`ComplaintRepository::update`]; the adapter does not auto-increment.
/// - An update whose `expected_revision` differs from the stored revision
///   fails with [`ComplaintRepositoryError::RevisionMismatch`] and leaves the
///   stored complaint untouched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    /// Assign the next id and store a new complaint.
    async fn insert(&self, complaint: NewComplaint) -> Result<Complaint, ComplaintRepositoryError>;

    /// Fetch a complaint by identifier.
    async fn find_by_id(
        &self,
        id: ComplaintId,
    ) -> Result<Option<Complaint>, ComplaintRepositoryError>;

    /// Complaints selected by `filter`, in insertion order.
    async fn list(&self, filter: ComplaintFilter)
    -> Result<Vec<Complaint>, ComplaintRepositoryError>;

    /// Replace a stored complaint if its revision still equals
    /// `expected_revision`.
    async fn update(
        &self,
        complaint: &Complaint,
        expected_revision: u64,
    ) -> Result<(), ComplaintRepositoryError>;
}
