//! Seed records describing one demo dataset.
//!
//! These types mirror the registry JSON and stay independent of backend
//! domain types. Cross-record references use user keys and product
//! positions; [`crate::SeedRegistry`] validates them before a dataset is
//! handed out.

use chrono::NaiveDate;
use serde::Deserialize;

/// Account role recorded in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleSeed {
    /// Customer who owns products and files complaints.
    Customer,
    /// Employee who claims and works complaints.
    Employee,
}

impl RoleSeed {
    /// Lower-case role label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Employee => "employee",
        }
    }
}

/// Complaint status recorded in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum StatusSeed {
    /// Filed, not yet claimed.
    New,
    /// Claimed by an employee.
    Assigned,
    /// Being worked by the assignee.
    #[serde(rename = "In Progress", alias = "InProgress")]
    InProgress,
    /// Resolved; terminal.
    Closed,
}

impl StatusSeed {
    /// Whether this status requires an assignee.
    #[must_use]
    pub const fn requires_assignee(self) -> bool {
        !matches!(self, Self::New)
    }
}

/// A seeded account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserSeed {
    /// Dataset-local key used by product and complaint references.
    pub key: String,
    /// Login email.
    pub email: String,
    /// Login password.
    pub password: String,
    /// Account role.
    pub role: RoleSeed,
    /// Name shown on the dashboards.
    pub display_name: String,
}

/// A seeded product ownership record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProductSeed {
    /// Product name.
    pub name: String,
    /// Key of the owning customer.
    pub owner: String,
    /// Date of purchase.
    pub purchase_date: NaiveDate,
}

/// A seeded complaint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ComplaintSeed {
    /// Key of the filing customer.
    pub customer: String,
    /// Zero-based position of the product within the dataset.
    pub product: usize,
    /// Customer's description of the issue.
    pub description: String,
    /// Lifecycle status.
    pub status: StatusSeed,
    /// Date the complaint was reported.
    pub reported_date: NaiveDate,
    /// Key of the assigned employee, if any.
    #[serde(default)]
    pub assignee: Option<String>,
}

/// A named dataset of users, products, and complaints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Dataset {
    /// Unique dataset name.
    pub name: String,
    /// Accounts in insertion order.
    #[serde(default)]
    pub users: Vec<UserSeed>,
    /// Products in insertion order.
    #[serde(default)]
    pub products: Vec<ProductSeed>,
    /// Complaints in insertion order.
    #[serde(default)]
    pub complaints: Vec<ComplaintSeed>,
}

impl Dataset {
    /// Look up a user by key.
    #[must_use]
    pub fn user(&self, key: &str) -> Option<&UserSeed> {
        self.users.iter().find(|user| user.key == key)
    }
}
