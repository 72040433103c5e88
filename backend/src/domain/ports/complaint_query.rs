//! Driving port for dashboard reads.
//!
//! Every list is ordered newest report first, ties broken by ascending id.

use async_trait::async_trait;

use crate::domain::{Complaint, Error, Product, UserId};

/// Everything the customer dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDashboard {
    /// Products the customer owns, in insertion order.
    pub products: Vec<Product>,
    /// Complaints the customer filed.
    pub complaints: Vec<Complaint>,
}

/// The two tabs of the employee dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeQueues {
    /// Complaints held by the employee, in any non-`New` state.
    pub assigned: Vec<Complaint>,
    /// Complaints waiting to be claimed.
    pub unassigned: Vec<Complaint>,
}

/// Domain use-case port for complaint listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComplaintQuery: Send + Sync {
    /// Complaints filed by `customer`.
    async fn complaints_for_customer(&self, customer: UserId) -> Result<Vec<Complaint>, Error>;

    /// Complaints currently assigned to `employee`.
    async fn complaints_assigned_to(&self, employee: UserId) -> Result<Vec<Complaint>, Error>;

    /// Complaints still in the `New` state.
    async fn unassigned_complaints(&self) -> Result<Vec<Complaint>, Error>;

    /// Products and complaints for a customer.
    async fn customer_dashboard(&self, customer: UserId) -> Result<CustomerDashboard, Error>;

    /// Assigned and unassigned queues for an employee.
    async fn employee_queues(&self, employee: UserId) -> Result<EmployeeQueues, Error>;
}
