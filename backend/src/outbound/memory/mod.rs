//! In-memory repository adapters.
//!
//! Each store owns its records behind a [`std::sync::RwLock`] and assigns
//! monotonically increasing ids that are never reused. Locks are held only
//! for the synchronous body of a call and never across an `.await`, so the
//! adapters are safe to share between tokio tasks. A poisoned lock surfaces
//! as the port's `Storage` error instead of a panic.

mod complaints;
mod products;
mod users;

pub use complaints::MemoryComplaintRepository;
pub use products::MemoryProductRepository;
pub use users::MemoryUserRepository;

use std::sync::PoisonError;

/// Describe a poisoned lock for a port `Storage` error.
fn poisoned<T>(store: &str, _: PoisonError<T>) -> String {
    format!("{store} lock poisoned by a panicking writer")
}

/// Ids and rows for one entity type.
#[derive(Debug)]
struct Table<T> {
    rows: Vec<T>,
    last_id: u64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    /// Reserve the next id, append the row built from it, and return a copy.
    fn push_with(&mut self, build: impl FnOnce(u64) -> T) -> T
    where
        T: Clone,
    {
        self.last_id += 1;
        let row = build(self.last_id);
        self.rows.push(row.clone());
        row
    }
}
