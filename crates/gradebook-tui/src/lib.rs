//! Full-screen TUI for the gradebook client.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
pub use features::{courses, notices, statistics, students, tabs};
use gradebook_core::api::ApiClient;
use gradebook_core::config::Config;
pub use runtime::TuiRuntime;
use tracing::info;

/// Runs the interactive client until the user quits.
pub async fn run(config: &Config, client: ApiClient) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The gradebook TUI requires a terminal.\n\
             Use `gradebook health` to check the backend non-interactively."
        );
    }

    info!(api_base = client.base_url(), "starting tui");
    let mut runtime = TuiRuntime::new(client, config)?;
    runtime.run()?;
    drop(runtime);

    // Terminal is restored once the runtime is dropped.
    writeln!(stderr(), "Goodbye!")?;
    Ok(())
}
