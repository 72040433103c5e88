//! Complaint ledger domain service.
//!
//! Implements [`ComplaintCommand`]: filing, claiming and advancing
//! complaints. State changes are read-modify-write cycles against the
//! [`ComplaintRepository`] guarded by the complaint revision. When a write
//! loses a race the ledger reloads and re-applies the lifecycle rule, so the
//! loser of two concurrent claims sees the winner's assignment and fails with
//! `AlreadyClaimed`.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    AdvanceComplaintRequest, ClaimComplaintRequest, ComplaintCommand, ComplaintRepository,
    ComplaintRepositoryError, FileComplaintRequest, ProductRepository, ProductRepositoryError,
    UserRepository, UserRepositoryError,
};
use crate::domain::{
    Complaint, ComplaintDescription, ComplaintId, Error, LifecycleError, NewComplaint, Role,
    UserId,
};

/// Upper bound on read-modify-write cycles for one transition.
pub const MAX_TRANSITION_ATTEMPTS: usize = 5;

fn map_complaint_error(error: ComplaintRepositoryError) -> Error {
    match error {
        ComplaintRepositoryError::Missing { id } => {
            Error::not_found(format!("complaint {id} not found"))
        }
        ComplaintRepositoryError::RevisionMismatch { expected, actual } => Error::internal(
            format!("complaint revision kept changing: expected {expected}, found {actual}"),
        ),
        ComplaintRepositoryError::Storage { message } => {
            Error::internal(format!("complaint repository error: {message}"))
        }
    }
}

fn map_product_error(error: ProductRepositoryError) -> Error {
    match error {
        ProductRepositoryError::Storage { message } => {
            Error::internal(format!("product repository error: {message}"))
        }
    }
}

fn map_user_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Duplicate { email, role } => Error::internal(format!(
            "unexpected duplicate identity {email} ({role}) during lookup"
        )),
        UserRepositoryError::Storage { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn map_lifecycle_error(error: LifecycleError) -> Error {
    match error {
        LifecycleError::AlreadyClaimed { .. } => Error::already_claimed(error.to_string()),
        LifecycleError::NotAssignee => Error::forbidden(error.to_string()),
        LifecycleError::Closed => {
            Error::invalid_transition("complaint is closed and can no longer change")
        }
    }
}

/// Complaint ledger implementing the mutation driving port.
#[derive(Clone)]
pub struct ComplaintLedger<U, P, C> {
    user_repo: Arc<U>,
    product_repo: Arc<P>,
    complaint_repo: Arc<C>,
    clock: Arc<dyn Clock>,
}

impl<U, P, C> ComplaintLedger<U, P, C> {
    /// Create a ledger over the three stores, dating complaints with `clock`.
    pub fn new(
        user_repo: Arc<U>,
        product_repo: Arc<P>,
        complaint_repo: Arc<C>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            product_repo,
            complaint_repo,
            clock,
        }
    }
}

impl<U, P, C> ComplaintLedger<U, P, C>
where
    U: UserRepository,
    P: ProductRepository,
    C: ComplaintRepository,
{
    async fn require_role(&self, user_id: UserId, role: Role) -> Result<bool, Error> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await
            .map_err(map_user_error)?;
        Ok(user.is_some_and(|user| user.has_role(role)))
    }

    async fn load(&self, id: ComplaintId) -> Result<Complaint, Error> {
        self.complaint_repo
            .find_by_id(id)
            .await
            .map_err(map_complaint_error)?
            .ok_or_else(|| Error::not_found(format!("complaint {id} not found")))
    }

    /// Apply `transition` to the stored complaint, retrying on revision
    /// conflicts up to [`MAX_TRANSITION_ATTEMPTS`] times.
    async fn transition<F>(&self, id: ComplaintId, transition: F) -> Result<Complaint, Error>
    where
        F: Fn(&mut Complaint) -> Result<(), LifecycleError> + Send + Sync,
    {
        let mut last_conflict = None;
        for attempt in 1..=MAX_TRANSITION_ATTEMPTS {
            let mut complaint = self.load(id).await?;
            let expected = complaint.revision();
            transition(&mut complaint).map_err(map_lifecycle_error)?;
            let complaint = complaint.with_next_revision();

            match self.complaint_repo.update(&complaint, expected).await {
                Ok(()) => return Ok(complaint),
                Err(conflict @ ComplaintRepositoryError::RevisionMismatch { .. }) => {
                    debug!(complaint_id = %id, attempt, "complaint changed concurrently; retrying");
                    last_conflict = Some(conflict);
                }
                Err(other) => return Err(map_complaint_error(other)),
            }
        }

        warn!(complaint_id = %id, "complaint transition abandoned after repeated conflicts");
        Err(last_conflict.map_or_else(
            || Error::internal("complaint transition was not attempted"),
            map_complaint_error,
        ))
    }
}

#[async_trait]
impl<U, P, C> ComplaintCommand for ComplaintLedger<U, P, C>
where
    U: UserRepository,
    P: ProductRepository,
    C: ComplaintRepository,
{
    async fn file(&self, request: FileComplaintRequest) -> Result<Complaint, Error> {
        let FileComplaintRequest {
            customer,
            product,
            description,
        } = request;

        let description = ComplaintDescription::new(description)
            .map_err(|err| Error::invalid_input(err.to_string()))?;
        if !self.require_role(customer, Role::Customer).await? {
            return Err(Error::invalid_input(format!(
                "user {customer} is not a registered customer"
            )));
        }
        let product = self
            .product_repo
            .find_by_id(product)
            .await
            .map_err(map_product_error)?
            .filter(|found| found.is_owned_by(customer))
            .ok_or_else(|| Error::invalid_input("selected product not found"))?;

        let today = self.clock.utc().date_naive();
        let complaint = self
            .complaint_repo
            .insert(NewComplaint::filed(customer, &product, description, today))
            .await
            .map_err(map_complaint_error)?;

        info!(
            complaint_id = %complaint.id(),
            customer_id = %customer,
            product_id = %product.id(),
            "complaint filed"
        );
        Ok(complaint)
    }

    async fn claim(&self, request: ClaimComplaintRequest) -> Result<Complaint, Error> {
        let ClaimComplaintRequest {
            complaint,
            employee,
        } = request;

        if !self.require_role(employee, Role::Employee).await? {
            return Err(Error::forbidden("only employees can claim complaints"));
        }
        let claimed = self
            .transition(complaint, |current| current.claim(employee))
            .await?;

        info!(complaint_id = %complaint, employee_id = %employee, "complaint claimed");
        Ok(claimed)
    }

    async fn advance(&self, request: AdvanceComplaintRequest) -> Result<Complaint, Error> {
        let AdvanceComplaintRequest {
            complaint,
            employee,
            target,
        } = request;

        let advanced = self
            .transition(complaint, |current| current.advance(employee, target))
            .await?;

        info!(
            complaint_id = %complaint,
            employee_id = %employee,
            status = %advanced.status(),
            "complaint status updated"
        );
        Ok(advanced)
    }
}

#[cfg(test)]
#[path = "complaint_ledger_tests.rs"]
mod tests;
