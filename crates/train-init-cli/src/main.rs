//! train-init command-line application
//!
//! Walks through the questions needed to run a training job on the remote platform,
//! checks the credentials live, and writes the resulting `config.yaml`.
//!
//! # Usage
//!
//! ```bash
//! train-init                          # write ./config.yaml
//! train-init --config jobs/cfg.yaml   # choose the destination
//! train-init --skip-training-params   # leave gpu/steps out of the config
//! ```

mod args;
mod commands;
mod console;
mod progress;
mod prompt;
mod router;

use args::Cli;
use clap::Parser;
use train_init_core::error::InitResult;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> InitResult<()> {
    // --help and --version exit here, before any prompt is shown
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the prompts on stdout.
    // RUST_LOG overrides the level picked by --verbose.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    router::route(cli).await
}
