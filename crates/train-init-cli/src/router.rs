//! Command routing logic for CLI

use crate::args::Cli;
use crate::commands;
use train_init_core::error::{InitError, InitResult};

/// Route the parsed CLI to its handler
pub async fn route(cli: Cli) -> InitResult<()> {
    match commands::init::run(&cli).await {
        // Ctrl+C during a prompt ends the session quietly
        Err(InitError::Cancelled) => {
            tracing::debug!("Setup cancelled by user");
            Ok(())
        }
        result => result,
    }
}
