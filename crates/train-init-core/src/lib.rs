//! train-init core library
//!
//! Collects platform credentials and training parameters through a sequence of
//! dependent questions, validates the credentials live, and assembles the
//! configuration consumed by the training tooling.

pub mod config;
pub mod error;
pub mod validation;
pub mod wizard;

pub use config::Config;
pub use error::{InitError, InitResult};
pub use validation::{CredentialValidator, FailureKind, PlatformClient, ValidationOutcome};
pub use wizard::{Completion, QuestionSequencer, SequencerOptions};
