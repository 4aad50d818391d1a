//! Spinner shown while credentials are checked

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use train_init_core::config::Credentials;
use train_init_core::validation::ValidationOutcome;
use train_init_core::wizard::WizardEvents;

/// Shows a spinner during the credential check and its result afterwards
#[derive(Default)]
pub struct ValidationProgress {
    bar: Option<ProgressBar>,
}

impl WizardEvents for ValidationProgress {
    fn validation_started(&mut self, credentials: &Credentials) {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.blue} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(format!(
            "Checking credentials in {}...",
            credentials.cos.region
        ));
        bar.enable_steady_tick(Duration::from_millis(100));
        self.bar = Some(bar);
    }

    fn validation_finished(&mut self, outcome: &ValidationOutcome) {
        let Some(bar) = self.bar.take() else {
            return;
        };
        match outcome {
            ValidationOutcome::Success {
                training_buckets, ..
            } => bar.finish_with_message(format!(
                "{} Credentials verified, {} bucket(s) found",
                "✓".green(),
                training_buckets.len()
            )),
            ValidationOutcome::Failure { kind } => bar.finish_with_message(format!(
                "{} {} The credentials are kept in the config; edit the file or run setup again.",
                "⚠".yellow(),
                kind.user_message()
            )),
        }
    }
}
