//! Builders for console state over the in-memory stores.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::{
    CatalogueService, ComplaintLedger, ComplaintQueryService, ExampleDataSeeder, IdentityService,
};
use crate::inbound::console::ConsoleState;
use crate::outbound::memory::{
    MemoryComplaintRepository, MemoryProductRepository, MemoryUserRepository,
};

/// The three process-local stores.
///
/// Each instance is independent, so tests can build as many isolated worlds
/// as they need.
#[derive(Clone, Default)]
pub struct MemoryStores {
    pub users: Arc<MemoryUserRepository>,
    pub products: Arc<MemoryProductRepository>,
    pub complaints: Arc<MemoryComplaintRepository>,
}

impl MemoryStores {
    /// Create empty stores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeder writing into these stores.
    pub fn seeder(
        &self,
    ) -> ExampleDataSeeder<MemoryUserRepository, MemoryProductRepository, MemoryComplaintRepository>
    {
        ExampleDataSeeder::new(
            Arc::clone(&self.users),
            Arc::clone(&self.products),
            Arc::clone(&self.complaints),
        )
    }

    /// Complaint ledger over these stores.
    pub fn ledger(
        &self,
        clock: Arc<dyn Clock>,
    ) -> ComplaintLedger<MemoryUserRepository, MemoryProductRepository, MemoryComplaintRepository>
    {
        ComplaintLedger::new(
            Arc::clone(&self.users),
            Arc::clone(&self.products),
            Arc::clone(&self.complaints),
            clock,
        )
    }
}

/// Wire every driving port the console needs onto `stores`.
pub fn build_console_state(stores: &MemoryStores, clock: Arc<dyn Clock>) -> ConsoleState {
    let identity = Arc::new(IdentityService::new(Arc::clone(&stores.users)));
    let catalogue = Arc::new(CatalogueService::new(Arc::clone(&stores.products)));
    let ledger = Arc::new(stores.ledger(clock));
    let queries = Arc::new(ComplaintQueryService::new(
        Arc::clone(&stores.products),
        Arc::clone(&stores.complaints),
    ));

    ConsoleState {
        login: identity.clone(),
        registration: identity.clone(),
        profile: identity,
        catalogue,
        complaints: ledger,
        complaints_query: queries,
    }
}
