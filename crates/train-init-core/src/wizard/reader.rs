//! Line input seam

use super::answers::AnswerKey;
use super::question::Question;
use crate::error::{InitError, InitResult};
use async_trait::async_trait;
use std::collections::VecDeque;

/// Source of one line of input per question
///
/// An empty line means "use the default"; the sequencer applies it.
#[async_trait]
pub trait LineReader: Send {
    async fn read_line(&mut self, question: &Question) -> InitResult<String>;
}

/// Replays a fixed list of lines, one per question asked
#[derive(Debug, Clone, Default)]
pub struct ScriptedLineReader {
    lines: VecDeque<String>,
    asked: Vec<AnswerKey>,
}

impl ScriptedLineReader {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Keys of the questions asked so far, in order
    pub fn asked(&self) -> &[AnswerKey] {
        &self.asked
    }

    /// Lines not consumed yet
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

#[async_trait]
impl LineReader for ScriptedLineReader {
    async fn read_line(&mut self, question: &Question) -> InitResult<String> {
        self.asked.push(question.key);
        self.lines.pop_front().ok_or_else(|| {
            InitError::invalid_input_field(
                format!("no scripted answer left for '{}'", question.prompt),
                question.key.as_str(),
            )
        })
    }
}
