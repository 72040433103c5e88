//! Complaint listing domain service.
//!
//! Builds the dashboard projections from the catalogue and ledger stores.
//! Stores return insertion order; this service applies the display order.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    ComplaintFilter, ComplaintQuery, ComplaintRepository, ComplaintRepositoryError,
    CustomerDashboard, EmployeeQueues, ProductRepository, ProductRepositoryError,
};
use crate::domain::{Complaint, Error, UserId, display_order};

fn map_complaint_error(error: ComplaintRepositoryError) -> Error {
    Error::internal(format!("complaint repository error: {error}"))
}

fn map_product_error(error: ProductRepositoryError) -> Error {
    Error::internal(format!("product repository error: {error}"))
}

/// Query service implementing [`ComplaintQuery`].
#[derive(Clone)]
pub struct ComplaintQueryService<P, C> {
    product_repo: Arc<P>,
    complaint_repo: Arc<C>,
}

impl<P, C> ComplaintQueryService<P, C> {
    /// Create a new query service over the catalogue and ledger stores.
    pub fn new(product_repo: Arc<P>, complaint_repo: Arc<C>) -> Self {
        Self {
            product_repo,
            complaint_repo,
        }
    }
}

impl<P, C> ComplaintQueryService<P, C>
where
    C: ComplaintRepository,
{
    async fn sorted(&self, filter: ComplaintFilter) -> Result<Vec<Complaint>, Error> {
        let mut complaints = self
            .complaint_repo
            .list(filter)
            .await
            .map_err(map_complaint_error)?;
        complaints.sort_by(display_order);
        Ok(complaints)
    }
}

#[async_trait]
impl<P, C> ComplaintQuery for ComplaintQueryService<P, C>
where
    P: ProductRepository,
    C: ComplaintRepository,
{
    async fn complaints_for_customer(&self, customer: UserId) -> Result<Vec<Complaint>, Error> {
        self.sorted(ComplaintFilter::Customer(customer)).await
    }

    async fn complaints_assigned_to(&self, employee: UserId) -> Result<Vec<Complaint>, Error> {
        self.sorted(ComplaintFilter::Assignee(employee)).await
    }

    async fn unassigned_complaints(&self) -> Result<Vec<Complaint>, Error> {
        self.sorted(ComplaintFilter::Unassigned).await
    }

    async fn customer_dashboard(&self, customer: UserId) -> Result<CustomerDashboard, Error> {
        let products = self
            .product_repo
            .list_for_owner(customer)
            .await
            .map_err(map_product_error)?;
        let complaints = self.complaints_for_customer(customer).await?;
        Ok(CustomerDashboard {
            products,
            complaints,
        })
    }

    async fn employee_queues(&self, employee: UserId) -> Result<EmployeeQueues, Error> {
        let assigned = self.complaints_assigned_to(employee).await?;
        let unassigned = self.unassigned_complaints().await?;
        Ok(EmployeeQueues {
            assigned,
            unassigned,
        })
    }
}
