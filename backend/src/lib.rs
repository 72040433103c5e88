//! Complaint desk library modules.
//!
//! Customers file complaints against the products they own; employees claim
//! unassigned complaints and move them through `In Progress` to `Closed`.
//! The domain is framework agnostic. The console adapter drives it and the
//! in-memory adapters store its records.

pub mod domain;
pub mod example_data;
pub mod inbound;
pub mod outbound;
pub mod server;
