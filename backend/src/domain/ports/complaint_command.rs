//! Driving port for complaint ledger mutations.
//!
//! Customers file complaints; employees claim them and move them through the
//! lifecycle. Every call returns the complaint as stored after the change.

use async_trait::async_trait;

use crate::domain::{Complaint, ComplaintId, Error, ProductId, StatusUpdate, UserId};

/// Request to file a complaint against an owned product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileComplaintRequest {
    pub customer: UserId,
    pub product: ProductId,
    /// Free text; trimmed and required to be non-empty.
    pub description: String,
}

/// Request to take ownership of an unassigned complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimComplaintRequest {
    pub complaint: ComplaintId,
    pub employee: UserId,
}

/// Request to move an assigned complaint forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceComplaintRequest {
    pub complaint: ComplaintId,
    pub employee: UserId,
    pub target: StatusUpdate,
}

/// Domain use-case port for complaint mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComplaintCommand: Send + Sync {
    /// File a new complaint dated today.
    async fn file(&self, request: FileComplaintRequest) -> Result<Complaint, Error>;

    /// Claim a `New` complaint for an employee.
    async fn claim(&self, request: ClaimComplaintRequest) -> Result<Complaint, Error>;

    /// Move an assigned complaint to `InProgress` or `Closed`.
    async fn advance(&self, request: AdvanceComplaintRequest) -> Result<Complaint, Error>;
}
