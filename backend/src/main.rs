#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), forbid(clippy::expect_used))]
//! Complaint desk entry-point: seeds the stores and serves the console.
//!
//! Replies go to standard output, one JSON object per line; logs go to
//! standard error. `RUST_LOG` controls log verbosity and the
//! `EXAMPLE_DATA_*` variables control startup seeding.

use std::ffi::OsString;
use std::io::{self, Write};
use std::sync::Arc;

use color_eyre::eyre::{Context, Result};
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use complaint_desk::example_data::{ExampleDataSettings, seed_example_data_on_startup};
use complaint_desk::inbound::console::Console;
use complaint_desk::server::{MemoryStores, build_console_state};

/// Application bootstrap.
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ExampleDataSettings::load_from_iter([OsString::from("complaint-desk")])
        .wrap_err("failed to load example data settings")?;

    let stores = MemoryStores::new();
    seed_example_data_on_startup(&settings, &stores)
        .await
        .wrap_err("example data seeding failed")?;

    writeln!(
        io::stdout().lock(),
        r#"{{"ok":true,"data":{{"message":"complaint desk ready; type `help` for commands"}}}}"#
    )?;

    let mut console = Console::new(build_console_state(&stores, Arc::new(DefaultClock)));
    console
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
        .wrap_err("console I/O failed")?;
    info!("console closed");
    Ok(())
}
