//! Inbound adapters that drive the domain.
//!
//! - **console**: line-oriented command interface standing in for the login,
//!   customer and employee screens.
//!
//! Adapters translate input into driving-port calls and domain results into
//! replies. They contain no business logic.

pub mod console;
