//! Shared console adapter state.
//!
//! The console only depends on driving ports, so tests can wire mocks or the
//! in-memory services without touching standard input.

use std::sync::Arc;

use crate::domain::ports::{
    CatalogueQuery, ComplaintCommand, ComplaintQuery, LoginService, UserProfileQuery,
    UserRegistration,
};

/// Dependency bundle for console commands.
#[derive(Clone)]
pub struct ConsoleState {
    pub login: Arc<dyn LoginService>,
    pub registration: Arc<dyn UserRegistration>,
    pub profile: Arc<dyn UserProfileQuery>,
    pub catalogue: Arc<dyn CatalogueQuery>,
    pub complaints: Arc<dyn ComplaintCommand>,
    pub complaints_query: Arc<dyn ComplaintQuery>,
}
