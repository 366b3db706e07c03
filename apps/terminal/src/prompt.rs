//! # Prompt Collaborator
//!
//! The "prompt-and-read-line" capability the session driver depends on:
//! display a prompt, return the next line of operator input.
//!
//! Expressed as a trait so the session loop can run against real stdin in
//! production and against a scripted double in tests. The core crate never
//! sees this trait — it only ever receives parsed values.

use std::io::{self, BufRead, Write};

/// Displays a prompt and reads one line of operator input.
pub trait Prompt {
    /// Shows `text` and returns the next line, without its trailing
    /// newline. Returns an empty string when no input is available (EOF).
    fn read_line(&mut self, text: &str) -> String;
}

/// The production implementation over stdin/stdout.
#[derive(Debug, Default)]
pub struct StdioPrompt;

impl StdioPrompt {
    pub fn new() -> Self {
        StdioPrompt
    }
}

impl Prompt for StdioPrompt {
    fn read_line(&mut self, text: &str) -> String {
        print!("{text}");
        // The prompt has no trailing newline, so flush before blocking on
        // input
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(_) => line.trim_end_matches(['\r', '\n']).to_string(),
            Err(_) => String::new(),
        }
    }
}

/// A scripted prompt for driving the session loop in tests.
///
/// Answers are consumed in order; once exhausted it behaves like EOF and
/// returns empty strings, mirroring [`StdioPrompt`].
#[cfg(test)]
#[derive(Debug)]
pub struct ScriptedPrompt {
    answers: std::collections::VecDeque<String>,
    pub transcript: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        ScriptedPrompt {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            transcript: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, text: &str) -> String {
        self.transcript.push(text.to_string());
        self.answers.pop_front().unwrap_or_default()
    }
}
