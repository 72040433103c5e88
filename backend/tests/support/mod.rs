//! Shared helpers for the integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use complaint_desk::domain::{Complaint, ComplaintId};
use complaint_desk::domain::ports::ComplaintRepository;
use complaint_desk::server::MemoryStores;
use example_data::{DEFAULT_DATASET, SeedRegistry};
use mockable::Clock;

/// Clock pinned to the morning after the newest demo complaint.
pub struct FixtureClock;

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 21, 9, 0, 0)
            .single()
            .expect("valid timestamp")
    }
}

pub fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock)
}

/// Fresh stores holding the bundled demo dataset.
pub async fn seeded_stores() -> MemoryStores {
    let stores = MemoryStores::new();
    let registry = SeedRegistry::builtin().expect("bundled registry");
    stores
        .seeder()
        .seed_from_registry(&registry, DEFAULT_DATASET)
        .await
        .expect("demo dataset seeds");
    stores
}

pub async fn stored_complaint(stores: &MemoryStores, id: u64) -> Complaint {
    stores
        .complaints
        .find_by_id(ComplaintId::new(id))
        .await
        .expect("store readable")
        .expect("complaint exists")
}
