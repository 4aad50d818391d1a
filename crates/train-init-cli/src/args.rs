//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;
use train_init_core::config::defaults::DEFAULT_CONFIG_FILE;

#[derive(Parser, Debug)]
#[command(name = "train-init")]
#[command(about = "Set up credentials and training parameters for a remote training job")]
#[command(
    long_about = r#"Set up credentials and training parameters for a remote training job

Asks for the training service (WML) and object storage (COS) credentials,
checks them against the platform, lets you pick the buckets to train from
and write results to, and saves everything to a YAML config file.

Blank answers take the default shown next to the question."#
)]
#[command(version)]
pub struct Cli {
    /// Where to write the configuration file
    #[arg(long = "config", value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Do not ask for GPU, training steps or the project name
    #[arg(long)]
    pub skip_training_params: bool,

    /// Credential-check gateway (the built-in simulated platform is used when unset)
    #[arg(long, value_name = "URL", env = "TRAIN_INIT_PLATFORM_URL")]
    pub platform_url: Option<String>,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,
}
