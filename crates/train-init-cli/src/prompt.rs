//! Terminal line reader
//!
//! When both stdin and stdout are terminals each question is rendered with dialoguer.
//! Otherwise answers are read line by line from stdin so sessions can be scripted;
//! running out of input is an error, never an implicit default.

use async_trait::async_trait;
use colored::*;
use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password, Select};
use std::io::{self, BufRead, IsTerminal};
use train_init_core::error::{InitError, InitResult};
use train_init_core::wizard::{LineReader, Question, QuestionKind};

/// Reads answers from the terminal
pub struct TerminalLineReader {
    term: Term,
}

impl TerminalLineReader {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TerminalLineReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LineReader for TerminalLineReader {
    async fn read_line(&mut self, question: &Question) -> InitResult<String> {
        let term = self.term.clone();
        let question = question.clone();

        // Terminal reads block; keep them off the async workers
        tokio::task::spawn_blocking(move || {
            if term.is_term() && io::stdin().is_terminal() {
                prompt_interactive(&term, &question)
            } else {
                prompt_plain(&term, &question)
            }
        })
        .await?
    }
}

fn prompt_interactive(term: &Term, question: &Question) -> InitResult<String> {
    let theme = ColorfulTheme::default();

    match &question.kind {
        QuestionKind::Text => Input::<String>::with_theme(&theme)
            .with_prompt(&question.prompt)
            .default(question.default.clone())
            .show_default(!question.default.is_empty())
            .allow_empty(true)
            .interact_text_on(term)
            .map_err(prompt_error),
        QuestionKind::Secret => Password::with_theme(&theme)
            .with_prompt(&question.prompt)
            .allow_empty_password(true)
            .interact_on(term)
            .map_err(prompt_error),
        QuestionKind::Select { options } if options.is_empty() => Ok(String::new()),
        QuestionKind::Select { options } => {
            let selection = Select::with_theme(&theme)
                .with_prompt(&question.prompt)
                .items(options.as_slice())
                .default(question.default_index())
                .interact_on_opt(term)
                .map_err(prompt_error)?;
            // Esc keeps the default
            Ok(selection
                .map(|index| options[index].clone())
                .unwrap_or_default())
        }
        QuestionKind::Confirm => Confirm::with_theme(&theme)
            .with_prompt(&question.prompt)
            .default(question.default == "yes")
            .interact_on(term)
            .map(|yes| if yes { "yes" } else { "no" }.to_string())
            .map_err(prompt_error),
    }
}

fn prompt_plain(term: &Term, question: &Question) -> InitResult<String> {
    term.write_str(&plain_prompt(question))?;
    read_answer(&mut io::stdin().lock(), question)
}

/// Option list (for selections) and the prompt line
fn plain_prompt(question: &Question) -> String {
    let mut text = String::new();
    if let QuestionKind::Select { options } = &question.kind {
        for (index, option) in options.iter().enumerate() {
            text.push_str(&format!("  {}) {}\n", index + 1, option));
        }
    }

    let hint = match &question.kind {
        QuestionKind::Confirm if question.default == "yes" => " [Y/n]".to_string(),
        QuestionKind::Confirm => " [y/N]".to_string(),
        _ if question.default.is_empty() => String::new(),
        _ => format!(" ({})", question.default),
    };
    text.push_str(&format!(
        "{} {}{}: ",
        "?".blue().bold(),
        question.prompt,
        hint.dimmed()
    ));
    text
}

/// Read one answer line without its line ending
fn read_answer(input: &mut impl BufRead, question: &Question) -> InitResult<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InitError::invalid_input_field(
            format!("input ended before '{}'", question.prompt),
            question.key.as_str(),
        ));
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn prompt_error(error: dialoguer::Error) -> InitError {
    match error {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => InitError::Cancelled,
        other => InitError::io(format!("prompt error: {}", other)),
    }
}
