//! The setup wizard command

use crate::args::Cli;
use crate::console::CliConsole;
use crate::progress::ValidationProgress;
use crate::prompt::TerminalLineReader;
use train_init_core::config::save_config;
use train_init_core::error::InitResult;
use train_init_core::validation::{HttpPlatformClient, PlatformClient, SimulatedPlatformClient};
use train_init_core::wizard::{Completion, LineReader, QuestionSequencer, SequencerOptions};

/// Run the wizard and save the config when the user confirms
pub async fn run(cli: &Cli) -> InitResult<()> {
    let console = CliConsole::new(cli.verbose);
    console.print_header("Training job setup");

    let options = SequencerOptions {
        skip_training_params: cli.skip_training_params,
    };
    let reader = TerminalLineReader::new();

    let completion = match cli.platform_url.as_deref() {
        Some(url) => {
            let client = HttpPlatformClient::new(url)?;
            tracing::debug!("Checking credentials through {}", client.check_url());
            run_session(reader, client, options).await?
        }
        None => {
            console.info("No platform URL set, credentials are checked against the simulated platform.");
            run_session(reader, SimulatedPlatformClient::default(), options).await?
        }
    };

    console.print_config_summary(&completion.config);

    if completion.should_save() {
        save_config(&cli.config, &completion.config)?;
        console.success(&format!("Configuration saved to {}", cli.config.display()));
    } else {
        console.warn("Configuration not saved.");
    }
    Ok(())
}

async fn run_session<R, C>(reader: R, client: C, options: SequencerOptions) -> InitResult<Completion>
where
    R: LineReader,
    C: PlatformClient,
{
    QuestionSequencer::new(reader, client, options)
        .with_events(ValidationProgress::default())
        .run()
        .await
}
