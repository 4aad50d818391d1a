//! Question sequencing
//!
//! [`next_step`] is a pure decision table: given the answers so far, the validation
//! outcome (if a check ran) and the session options, it names the next thing to do.
//! [`QuestionSequencer`] drives it against a [`LineReader`] and a
//! [`CredentialValidator`], threading an immutable [`Answers`] snapshot through
//! every step.

use super::answers::{AnswerKey, Answers};
use super::assembler::assemble;
use super::question::Question;
use super::reader::LineReader;
use crate::config::defaults::{DEFAULT_GPU, DEFAULT_PROJECT_NAME, DEFAULT_REGION, DEFAULT_STEPS};
use crate::config::{Config, Credentials};
use crate::error::InitResult;
use crate::validation::{CredentialValidator, PlatformClient, ValidationOutcome};
use tracing::{debug, info};

/// Per-session switches chosen by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequencerOptions {
    /// Do not ask for GPU, steps or the project name; `trainingParams` stays empty
    pub skip_training_params: bool,
}

/// What the session does next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Ask one question
    Ask(Question),
    /// Check these credentials against the platform
    Validate(Credentials),
    /// Every eligible question has been answered
    Done,
}

/// Decide the next step
pub fn next_step(
    answers: &Answers,
    outcome: Option<&ValidationOutcome>,
    options: &SequencerOptions,
) -> Step {
    for &key in AnswerKey::all() {
        if answers.contains(key) {
            continue;
        }

        // The gate sits right after the region question
        if key == AnswerKey::TrainingBucket && outcome.is_none() {
            let credentials = answers.credentials();
            if credentials.is_complete() {
                return Step::Validate(credentials);
            }
        }

        if is_eligible(key, answers, outcome, options) {
            return Step::Ask(question_for(key, answers, outcome));
        }
    }
    Step::Done
}

fn is_eligible(
    key: AnswerKey,
    answers: &Answers,
    outcome: Option<&ValidationOutcome>,
    options: &SequencerOptions,
) -> bool {
    let validated = outcome.is_some_and(ValidationOutcome::is_success);
    match key {
        AnswerKey::TrainingBucket | AnswerKey::UseOutput => validated,
        AnswerKey::OutputBucket => validated && answers.is_yes(AnswerKey::UseOutput),
        // The project name goes with the training parameters; the assembler derives it
        AnswerKey::Gpu | AnswerKey::Steps | AnswerKey::Name => !options.skip_training_params,
        _ => true,
    }
}

fn question_for(key: AnswerKey, answers: &Answers, outcome: Option<&ValidationOutcome>) -> Question {
    let training = || outcome.map(|o| o.training_buckets().to_vec()).unwrap_or_default();
    let output = || outcome.map(|o| o.output_buckets().to_vec()).unwrap_or_default();

    match key {
        AnswerKey::InstanceId => Question::text(key, "WML instance id", ""),
        AnswerKey::Username => Question::text(key, "WML username", ""),
        AnswerKey::Password => Question::secret(key, "WML password"),
        AnswerKey::Url => Question::text(key, "WML url", ""),
        AnswerKey::AccessKeyId => Question::text(key, "COS access key id", ""),
        AnswerKey::SecretAccessKey => Question::secret(key, "COS secret access key"),
        AnswerKey::Region => Question::text(key, "COS region", DEFAULT_REGION),
        AnswerKey::TrainingBucket => Question::select(key, "Training data bucket", training()),
        AnswerKey::UseOutput => {
            Question::confirm(key, "Save results to a separate output bucket?", false)
        }
        AnswerKey::OutputBucket => Question::select(key, "Output bucket", output()),
        AnswerKey::Gpu => Question::text(key, "GPU", DEFAULT_GPU),
        AnswerKey::Steps => Question::text(key, "Training steps", DEFAULT_STEPS),
        AnswerKey::Name => {
            let default = if answers.is_filled(AnswerKey::TrainingBucket) {
                answers.value(AnswerKey::TrainingBucket)
            } else {
                DEFAULT_PROJECT_NAME
            };
            Question::text(key, "Project name", default)
        }
        AnswerKey::Save => Question::confirm(key, "Save configuration?", true),
    }
}

/// Receives progress notifications from a running session
pub trait WizardEvents: Send {
    fn validation_started(&mut self, _credentials: &Credentials) {}
    fn validation_finished(&mut self, _outcome: &ValidationOutcome) {}
}

/// Ignores every notification
#[derive(Debug, Default)]
pub struct NoEvents;

impl WizardEvents for NoEvents {}

/// Everything a finished session produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub config: Config,
    pub answers: Answers,
    pub outcome: Option<ValidationOutcome>,
}

impl Completion {
    /// The user confirmed saving
    pub fn should_save(&self) -> bool {
        self.answers.is_yes(AnswerKey::Save)
    }
}

/// Runs one wizard session end to end
pub struct QuestionSequencer<R: LineReader, C: PlatformClient> {
    reader: R,
    validator: CredentialValidator<C>,
    options: SequencerOptions,
    events: Box<dyn WizardEvents>,
}

impl<R: LineReader, C: PlatformClient> QuestionSequencer<R, C> {
    pub fn new(reader: R, client: C, options: SequencerOptions) -> Self {
        Self {
            reader,
            validator: CredentialValidator::new(client),
            options,
            events: Box::new(NoEvents),
        }
    }

    /// Report validation progress to `events`
    pub fn with_events(mut self, events: impl WizardEvents + 'static) -> Self {
        self.events = Box::new(events);
        self
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Ask every eligible question and assemble the config
    ///
    /// Fails only when reading input fails. Validation failures are resolved into the
    /// flow, never returned.
    pub async fn run(&mut self) -> InitResult<Completion> {
        let mut answers = Answers::new();
        let mut outcome: Option<ValidationOutcome> = None;

        loop {
            match next_step(&answers, outcome.as_ref(), &self.options) {
                Step::Ask(question) => {
                    let raw = self.reader.read_line(&question).await?;
                    let value = question.resolve(&raw);
                    if question.key.is_secret() {
                        debug!("Answered {}", question.key);
                    } else {
                        debug!("Answered {} = {:?}", question.key, value);
                    }
                    answers = answers.with(question.key, value);
                }
                Step::Validate(credentials) => {
                    self.events.validation_started(&credentials);
                    let result = self.validator.validate(&credentials).await;
                    self.events.validation_finished(&result);
                    outcome = Some(result);
                }
                Step::Done => break,
            }
        }

        let config = assemble(&answers, outcome.as_ref(), &self.options);
        info!("Setup finished for project {}", config.name);
        Ok(Completion {
            config,
            answers,
            outcome,
        })
    }
}

#[cfg(test)]
#[path = "sequencer_tests.rs"]
mod tests;
