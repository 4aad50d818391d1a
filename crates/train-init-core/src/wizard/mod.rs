//! Interactive setup flow
//!
//! Credentials are collected first, checked live when complete, and the remaining
//! questions (buckets, training parameters, project name, save confirmation) adapt to
//! the outcome. The answers are then folded into a [`crate::config::Config`].
//!
//! # Example
//!
//! ```no_run
//! use train_init_core::validation::SimulatedPlatformClient;
//! use train_init_core::wizard::{QuestionSequencer, ScriptedLineReader, SequencerOptions};
//!
//! # async fn demo() -> train_init_core::error::InitResult<()> {
//! let reader = ScriptedLineReader::new(["", "", "", "", "", "", "", "", "", "", ""]);
//! let mut sequencer =
//!     QuestionSequencer::new(reader, SimulatedPlatformClient::default(), SequencerOptions::default());
//! let completion = sequencer.run().await?;
//! assert_eq!(completion.config.name, "untitled-project");
//! # Ok(())
//! # }
//! ```

mod answers;
mod assembler;
mod question;
mod reader;
pub mod sanitize;
mod sequencer;

pub use answers::{AnswerKey, Answers, parse_confirm};
pub use assembler::assemble;
pub use question::{Question, QuestionKind};
pub use reader::{LineReader, ScriptedLineReader};
pub use sequencer::{
    Completion, NoEvents, QuestionSequencer, SequencerOptions, Step, WizardEvents, next_step,
};
