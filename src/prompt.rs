// src/prompt.rs
//! Secret-prompt port
//!
//! The decryption path asks for fields the caller left blank through a
//! [`SecretPrompt`], so it can be driven by a console or by a script.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::enums::Field;
use crate::error::Result;

pub trait SecretPrompt {
    /// Ask once for `field` and return the raw answer
    fn ask(&mut self, field: Field) -> Result<String>;
}

/// Interactive prompt reading stdin, hints on stderr
///
/// Key and IV answers are read without echo when `mask_secrets` is set.
#[derive(Debug, Clone, Copy)]
pub struct ConsolePrompt {
    mask_secrets: bool,
}

impl ConsolePrompt {
    pub fn new(mask_secrets: bool) -> Self {
        Self { mask_secrets }
    }
}

impl Default for ConsolePrompt {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SecretPrompt for ConsolePrompt {
    fn ask(&mut self, field: Field) -> Result<String> {
        let hint = format!("{}: ", field.hint());
        if self.mask_secrets && field.is_secret() {
            return Ok(rpassword::prompt_password(hint)?);
        }

        // stdout carries the rendered result
        Ok(read_answer(&hint, &mut io::stdin().lock(), &mut io::stderr())?)
    }
}

fn read_answer<R: BufRead, W: Write>(hint: &str, input: &mut R, hints: &mut W) -> io::Result<String> {
    hints.write_all(hint.as_bytes())?;
    hints.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

/// Replays queued answers and records which fields were asked for
///
/// Once the queue is exhausted every further question gets an empty answer.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<Field>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Fields asked so far, in order
    pub fn asked(&self) -> &[Field] {
        &self.asked
    }
}

impl SecretPrompt for ScriptedPrompt {
    fn ask(&mut self, field: Field) -> Result<String> {
        self.asked.push(field);
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}
