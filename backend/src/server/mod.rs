//! Process wiring: stores, services and the console state built on them.

mod state_builders;

pub use state_builders::{MemoryStores, build_console_state};
