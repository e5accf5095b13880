//! Line-based console prompts with a bounded number of attempts.

use colored::Colorize;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Input reached end-of-file while waiting for an answer
    #[error("input closed before an answer was given")]
    InputClosed,

    /// The user gave `attempts` invalid answers in a row
    #[error("no valid {prompt} after {attempts} attempts")]
    TooManyAttempts {
        prompt: &'static str,
        attempts: usize,
    },
}

/// Reads answers from `input` and writes prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
    max_attempts: usize,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// `max_attempts` is clamped to at least one
    pub fn new(input: R, output: W, max_attempts: usize) -> Self {
        Self {
            input,
            output,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Print a line
    pub fn say(&mut self, text: impl Display) -> Result<(), PromptError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print without a trailing newline and flush
    pub fn say_inline(&mut self, text: impl Display) -> Result<(), PromptError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Show `question` and return the trimmed answer
    pub fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        self.say_inline(question.yellow())?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the answer.
    ///
    /// Every rejected answer prints `retry_message` in red. After
    /// `max_attempts` rejections the prompt gives up.
    pub fn ask_until<T>(
        &mut self,
        prompt: &'static str,
        question: &str,
        retry_message: &str,
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> Result<T, PromptError> {
        for attempt in 1..=self.max_attempts {
            let answer = self.ask(question)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            tracing::debug!("Rejected {} answer {:?} (attempt {})", prompt, answer, attempt);
            self.say(retry_message.red())?;
        }

        Err(PromptError::TooManyAttempts {
            prompt,
            attempts: self.max_attempts,
        })
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
