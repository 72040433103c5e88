//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local stores for users, products and complaints.
//!
//! Adapters are thin translators between domain types and their storage.
//! They contain no business logic.

pub mod memory;
