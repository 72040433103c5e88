//! JSON payloads written by the console.
//!
//! Every response is one line: `{"ok":true,"data":...}` on success or
//! `{"ok":false,"error":{"code":...,"message":...}}` on failure. Payload
//! fields are camelCase; complaint statuses use their display labels.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::ports::{CustomerDashboard, EmployeeQueues};
use crate::domain::{Complaint, ComplaintStatus, Error, Product, Role, User};

/// Response envelope for one console line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<Error>,
}

impl Reply {
    /// Successful reply carrying `data`.
    pub fn success(data: impl Serialize) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => Self {
                ok: true,
                data: Some(value),
                error: None,
            },
            Err(err) => Self::failure(Error::internal(format!(
                "failed to serialise response: {err}"
            ))),
        }
    }

    /// Failed reply carrying the domain error.
    pub fn failure(error: Error) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error),
        }
    }

    /// Whether the command succeeded.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Success payload, if any.
    pub fn data(&self) -> Option<&serde_json::Value> {
        self.data.as_ref()
    }

    /// Failure, if any.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Render as a single JSON line without the trailing newline.
    pub fn to_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| {
            format!(
                r#"{{"ok":false,"error":{{"code":"internal_error","message":"failed to serialise response: {err}"}}}}"#
            )
        })
    }
}

impl From<Result<Reply, Error>> for Reply {
    fn from(value: Result<Reply, Error>) -> Self {
        value.unwrap_or_else(Self::failure)
    }
}

/// Plain acknowledgement with a human-readable message.
#[derive(Debug, Clone, Serialize)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Identity of a newly registered or logged-in account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub user_id: u64,
    pub role: Role,
    pub display_name: String,
}

impl From<&User> for SessionDto {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id().get(),
            role: user.role(),
            display_name: user.display_name().to_string(),
        }
    }
}

/// Public account profile; never includes the password.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: u64,
    pub email: String,
    pub role: Role,
    pub display_name: String,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().get(),
            email: user.email().to_string(),
            role: user.role(),
            display_name: user.display_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: u64,
    pub name: String,
    pub purchase_date: NaiveDate,
}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().get(),
            name: product.name().to_owned(),
            purchase_date: product.purchase_date(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintDto {
    pub id: u64,
    pub customer_id: u64,
    pub product_id: u64,
    pub product_name: String,
    pub description: String,
    pub status: ComplaintStatus,
    pub reported_date: NaiveDate,
    pub assigned_employee_id: Option<u64>,
}

impl From<&Complaint> for ComplaintDto {
    fn from(complaint: &Complaint) -> Self {
        Self {
            id: complaint.id().get(),
            customer_id: complaint.customer().get(),
            product_id: complaint.product().get(),
            product_name: complaint.product_name().to_owned(),
            description: complaint.description().as_ref().to_owned(),
            status: complaint.status(),
            reported_date: complaint.reported_on(),
            assigned_employee_id: complaint.assignee().map(|id| id.get()),
        }
    }
}

/// Convert a slice of domain records into DTOs.
pub fn list<'a, T, D>(items: &'a [T]) -> Vec<D>
where
    D: From<&'a T>,
{
    items.iter().map(D::from).collect()
}

/// Customer dashboard: products, complaints and the tab counts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDashboardDto {
    pub product_count: usize,
    pub complaint_count: usize,
    pub products: Vec<ProductDto>,
    pub complaints: Vec<ComplaintDto>,
}

impl From<&CustomerDashboard> for CustomerDashboardDto {
    fn from(dashboard: &CustomerDashboard) -> Self {
        Self {
            product_count: dashboard.products.len(),
            complaint_count: dashboard.complaints.len(),
            products: list(&dashboard.products),
            complaints: list(&dashboard.complaints),
        }
    }
}

/// Employee dashboard: both queues and their tab counts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeQueuesDto {
    pub assigned_count: usize,
    pub unassigned_count: usize,
    pub assigned: Vec<ComplaintDto>,
    pub unassigned: Vec<ComplaintDto>,
}

impl From<&EmployeeQueues> for EmployeeQueuesDto {
    fn from(queues: &EmployeeQueues) -> Self {
        Self {
            assigned_count: queues.assigned.len(),
            unassigned_count: queues.unassigned.len(),
            assigned: list(&queues.assigned),
            unassigned: list(&queues.unassigned),
        }
    }
}
