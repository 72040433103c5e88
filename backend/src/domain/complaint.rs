//! Complaint records and their lifecycle state machine.
//!
//! A complaint moves along `New -> Assigned -> InProgress -> Closed`.
//! `Closed` is terminal. The assignee lives inside [`ComplaintState`], so a
//! `New` complaint cannot carry an assignee and every later state must.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Product, ProductId, UserId};

/// Stable complaint identifier assigned by the ledger store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplaintId(u64);

impl ComplaintId {
    /// Wrap a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors for complaint inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComplaintValidationError {
    /// Description was blank once trimmed.
    #[error("please describe the issue")]
    EmptyDescription,
    /// Status text matched no known status.
    #[error("unknown complaint status '{value}'")]
    UnknownStatus { value: String },
    /// Status is not a valid target for an employee update.
    #[error("status can only be updated to In Progress or Closed, not {status}")]
    UnsupportedTarget { status: ComplaintStatus },
}

/// Lifecycle status as shown on the dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplaintStatus {
    /// Filed, waiting for an employee.
    New,
    /// Claimed by an employee.
    Assigned,
    /// Being worked by the assignee.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Resolved; terminal.
    Closed,
}

impl ComplaintStatus {
    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Assigned => "Assigned",
            Self::InProgress => "In Progress",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ComplaintStatus {
    type Err = ComplaintValidationError;

    /// Accepts `In Progress`, `in_progress`, `InProgress`, `in-progress` and
    /// so on, case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let folded: String = value
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match folded.as_str() {
            "new" => Ok(Self::New),
            "assigned" => Ok(Self::Assigned),
            "inprogress" => Ok(Self::InProgress),
            "closed" => Ok(Self::Closed),
            _ => Err(ComplaintValidationError::UnknownStatus {
                value: value.to_owned(),
            }),
        }
    }
}

/// Target of an employee status update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusUpdate {
    /// Start (or keep) working the complaint.
    InProgress,
    /// Resolve the complaint.
    Closed,
}

impl From<StatusUpdate> for ComplaintStatus {
    fn from(value: StatusUpdate) -> Self {
        match value {
            StatusUpdate::InProgress => Self::InProgress,
            StatusUpdate::Closed => Self::Closed,
        }
    }
}

impl TryFrom<ComplaintStatus> for StatusUpdate {
    type Error = ComplaintValidationError;

    fn try_from(value: ComplaintStatus) -> Result<Self, Self::Error> {
        match value {
            ComplaintStatus::InProgress => Ok(Self::InProgress),
            ComplaintStatus::Closed => Ok(Self::Closed),
            status @ (ComplaintStatus::New | ComplaintStatus::Assigned) => {
                Err(ComplaintValidationError::UnsupportedTarget { status })
            }
        }
    }
}

impl FromStr for StatusUpdate {
    type Err = ComplaintValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value.parse::<ComplaintStatus>()?.try_into()
    }
}

/// Lifecycle position together with the assignee, when there is one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplaintState {
    New,
    Assigned { employee: UserId },
    InProgress { employee: UserId },
    Closed { employee: UserId },
}

impl ComplaintState {
    /// Status shown for this state.
    pub const fn status(self) -> ComplaintStatus {
        match self {
            Self::New => ComplaintStatus::New,
            Self::Assigned { .. } => ComplaintStatus::Assigned,
            Self::InProgress { .. } => ComplaintStatus::InProgress,
            Self::Closed { .. } => ComplaintStatus::Closed,
        }
    }

    /// Assigned employee; `None` only while `New`.
    pub const fn assignee(self) -> Option<UserId> {
        match self {
            Self::New => None,
            Self::Assigned { employee }
            | Self::InProgress { employee }
            | Self::Closed { employee } => Some(employee),
        }
    }

    /// Rebuild a state from a status and optional assignee.
    ///
    /// Returns `None` when the pair breaks the assignee invariant.
    pub const fn from_parts(status: ComplaintStatus, assignee: Option<UserId>) -> Option<Self> {
        match (status, assignee) {
            (ComplaintStatus::New, None) => Some(Self::New),
            (ComplaintStatus::Assigned, Some(employee)) => Some(Self::Assigned { employee }),
            (ComplaintStatus::InProgress, Some(employee)) => Some(Self::InProgress { employee }),
            (ComplaintStatus::Closed, Some(employee)) => Some(Self::Closed { employee }),
            _ => None,
        }
    }
}

/// Rejected lifecycle transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifecycleError {
    /// Only `New` complaints can be claimed.
    #[error("complaint is already {status}")]
    AlreadyClaimed { status: ComplaintStatus },
    /// Only the assignee may update the status.
    #[error("complaint is not assigned to this employee")]
    NotAssignee,
    /// Closed complaints never change again.
    #[error("complaint is closed")]
    Closed,
}

/// Customer-supplied issue text, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplaintDescription(String);

impl ComplaintDescription {
    /// Validate and trim a description.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ComplaintValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ComplaintValidationError::EmptyDescription);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for ComplaintDescription {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Complaint fields before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComplaint {
    pub customer: UserId,
    pub product: ProductId,
    pub product_name: String,
    pub description: ComplaintDescription,
    pub state: ComplaintState,
    pub reported_on: NaiveDate,
}

impl NewComplaint {
    /// A freshly filed complaint: `New`, unassigned, reported on `today`.
    pub fn filed(
        customer: UserId,
        product: &Product,
        description: ComplaintDescription,
        today: NaiveDate,
    ) -> Self {
        Self {
            customer,
            product: product.id(),
            product_name: product.name().to_owned(),
            description,
            state: ComplaintState::New,
            reported_on: today,
        }
    }
}

/// A complaint held by the ledger.
///
/// ## Invariants
/// - `revision` starts at 1 and grows by one per stored mutation.
/// - Mutations go through [`Complaint::claim`] and [`Complaint::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Complaint {
    id: ComplaintId,
    customer: UserId,
    product: ProductId,
    product_name: String,
    description: ComplaintDescription,
    state: ComplaintState,
    reported_on: NaiveDate,
    revision: u64,
}

impl Complaint {
    /// Build a stored complaint at revision 1.
    pub fn new(id: ComplaintId, fields: NewComplaint) -> Self {
        let NewComplaint {
            customer,
            product,
            product_name,
            description,
            state,
            reported_on,
        } = fields;
        Self {
            id,
            customer,
            product,
            product_name,
            description,
            state,
            reported_on,
            revision: 1,
        }
    }

    pub fn id(&self) -> ComplaintId {
        self.id
    }

    pub fn customer(&self) -> UserId {
        self.customer
    }

    pub fn product(&self) -> ProductId {
        self.product
    }

    /// Product name captured when the complaint was filed.
    pub fn product_name(&self) -> &str {
        self.product_name.as_str()
    }

    pub fn description(&self) -> &ComplaintDescription {
        &self.description
    }

    pub fn state(&self) -> ComplaintState {
        self.state
    }

    pub fn status(&self) -> ComplaintStatus {
        self.state.status()
    }

    pub fn assignee(&self) -> Option<UserId> {
        self.state.assignee()
    }

    pub fn reported_on(&self) -> NaiveDate {
        self.reported_on
    }

    /// Optimistic concurrency token.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Return a copy stamped with the next revision.
    pub fn with_next_revision(mut self) -> Self {
        self.revision = self.revision.saturating_add(1);
        self
    }

    /// Take ownership of a `New` complaint.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use complaint_desk::domain::{
    ///     Complaint, ComplaintDescription, ComplaintId, ComplaintState, ComplaintStatus,
    ///     NewComplaint, ProductId, UserId,
    /// };
    ///
    /// let mut complaint = Complaint::new(
    ///     ComplaintId::new(1),
    ///     NewComplaint {
    ///         customer: UserId::new(1),
    ///         product: ProductId::new(1),
    ///         product_name: "Laptop Pro X1".to_owned(),
    ///         description: ComplaintDescription::new("Screen flickering issue").unwrap(),
    ///         state: ComplaintState::New,
    ///         reported_on: NaiveDate::from_ymd_opt(2024, 7, 20).unwrap(),
    ///     },
    /// );
    /// complaint.claim(UserId::new(2)).unwrap();
    /// assert_eq!(complaint.status(), ComplaintStatus::Assigned);
    /// assert_eq!(complaint.assignee(), Some(UserId::new(2)));
    /// ```
    pub fn claim(&mut self, employee: UserId) -> Result<(), LifecycleError> {
        match self.state {
            ComplaintState::New => {
                self.state = ComplaintState::Assigned { employee };
                Ok(())
            }
            other => Err(LifecycleError::AlreadyClaimed {
                status: other.status(),
            }),
        }
    }

    /// Move an assigned complaint to `InProgress` or `Closed`.
    ///
    /// A closed complaint is rejected before the assignee is checked.
    pub fn advance(&mut self, employee: UserId, target: StatusUpdate) -> Result<(), LifecycleError> {
        let assignee = match self.state {
            ComplaintState::Closed { .. } => return Err(LifecycleError::Closed),
            ComplaintState::New => return Err(LifecycleError::NotAssignee),
            ComplaintState::Assigned { employee } | ComplaintState::InProgress { employee } => {
                employee
            }
        };
        if assignee != employee {
            return Err(LifecycleError::NotAssignee);
        }

        self.state = match target {
            StatusUpdate::InProgress => ComplaintState::InProgress { employee },
            StatusUpdate::Closed => ComplaintState::Closed { employee },
        };
        Ok(())
    }
}

/// Dashboard ordering: newest report first, ties broken by ascending id.
pub fn display_order(left: &Complaint, right: &Complaint) -> Ordering {
    right
        .reported_on
        .cmp(&left.reported_on)
        .then_with(|| left.id.cmp(&right.id))
}
