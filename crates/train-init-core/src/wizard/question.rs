//! Question descriptors

use super::answers::{AnswerKey, parse_confirm};
use super::sanitize::{has_control_sequences, resolve_selection, strip_control_sequences};
use tracing::warn;

/// How a question is answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free text
    Text,
    /// Free text that must not be echoed
    Secret,
    /// One of a fixed list of options
    Select { options: Vec<String> },
    /// Yes or no
    Confirm,
}

/// One prompt, with the default applied when the answer is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub key: AnswerKey,
    pub prompt: String,
    pub kind: QuestionKind,
    pub default: String,
}

impl Question {
    pub fn text(key: AnswerKey, prompt: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            key,
            prompt: prompt.into(),
            kind: QuestionKind::Text,
            default: default.into(),
        }
    }

    pub fn secret(key: AnswerKey, prompt: impl Into<String>) -> Self {
        Self {
            key,
            prompt: prompt.into(),
            kind: QuestionKind::Secret,
            default: String::new(),
        }
    }

    /// Selection defaulting to the first option, or blank when there are none
    pub fn select(key: AnswerKey, prompt: impl Into<String>, options: Vec<String>) -> Self {
        let default = options.first().cloned().unwrap_or_default();
        Self {
            key,
            prompt: prompt.into(),
            kind: QuestionKind::Select { options },
            default,
        }
    }

    pub fn confirm(key: AnswerKey, prompt: impl Into<String>, default: bool) -> Self {
        Self {
            key,
            prompt: prompt.into(),
            kind: QuestionKind::Confirm,
            default: yes_no(default).to_string(),
        }
    }

    /// Options offered by a selection question
    pub fn options(&self) -> &[String] {
        match &self.kind {
            QuestionKind::Select { options } => options,
            _ => &[],
        }
    }

    /// Index of the default option of a selection question
    pub fn default_index(&self) -> usize {
        self.options()
            .iter()
            .position(|o| *o == self.default)
            .unwrap_or(0)
    }

    /// Turn a raw line into the recorded answer
    ///
    /// Control sequences are neutralized; an answer with nothing left falls back to
    /// the default.
    pub fn resolve(&self, raw: &str) -> String {
        if has_control_sequences(raw) {
            warn!("Neutralized control characters in the {} answer", self.key);
        }

        match &self.kind {
            QuestionKind::Text => {
                let cleaned = strip_control_sequences(raw);
                let cleaned = cleaned.trim();
                if cleaned.is_empty() {
                    self.default.clone()
                } else {
                    cleaned.to_string()
                }
            }
            QuestionKind::Secret => {
                let cleaned = strip_control_sequences(raw);
                if cleaned.is_empty() {
                    self.default.clone()
                } else {
                    cleaned
                }
            }
            QuestionKind::Select { options } => {
                resolve_selection(raw, options, self.default_index())
                    .map(|index| options[index].clone())
                    .unwrap_or_default()
            }
            QuestionKind::Confirm => match parse_confirm(&strip_control_sequences(raw)) {
                Some(answer) => yes_no(answer).to_string(),
                None => self.default.clone(),
            },
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
