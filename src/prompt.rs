//! User input and interaction handling.
//! Collects prompt values for a generator and asks for overwrite confirmation.

use crate::config::PromptField;
use crate::error::{Error, Result};
use dialoguer::{Confirm, Input};
use indexmap::IndexMap;
use log::debug;
use std::cell::RefCell;
use std::io::{self, BufRead, IsTerminal, Write};

/// Prompt field name to value, as handed to every template.
pub type CollectedData = IndexMap<String, String>;

/// Source of interactive answers.
pub trait Prompter {
    /// Asks for one line of free text. An empty answer is a valid value.
    fn input(&self, message: &str) -> Result<String>;

    /// Asks a yes/no question. Returns `true` without asking when `skip` is set.
    fn confirm(&self, skip: bool, message: &str) -> Result<bool>;
}

/// Terminal prompter built on dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, message: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::IoError(io::Error::other(e)))
    }

    fn confirm(&self, skip: bool, message: &str) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(|e| Error::IoError(io::Error::other(e)))
    }
}

/// Line-oriented prompter over any reader and writer.
///
/// Used when stdin is not a terminal, and by tests with canned input.
/// End of input reads as an empty line.
pub struct ReaderPrompter<R, W> {
    reader: RefCell<R>,
    writer: RefCell<W>,
}

impl<R: BufRead, W: Write> ReaderPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader: RefCell::new(reader), writer: RefCell::new(writer) }
    }

    /// Returns the writer, e.g. to inspect what was asked.
    pub fn into_writer(self) -> W {
        self.writer.into_inner()
    }

    fn ask(&self, question: &str) -> Result<String> {
        {
            let mut writer = self.writer.borrow_mut();
            write!(writer, "{question}")?;
            writer.flush()?;
        }

        let mut line = String::new();
        self.reader.borrow_mut().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl ReaderPrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for ReaderPrompter<R, W> {
    fn input(&self, message: &str) -> Result<String> {
        self.ask(&format!("{message}: "))
    }

    fn confirm(&self, skip: bool, message: &str) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        let answer = self.ask(&format!("{message} [y/N]: "))?;
        Ok(answer.trim() == "y")
    }
}

/// Picks the terminal prompter when stdin is a terminal, plain line reading
/// otherwise.
pub fn stdio_prompter() -> Box<dyn Prompter> {
    if io::stdin().is_terminal() {
        Box::new(DialoguerPrompter::new())
    } else {
        Box::new(ReaderPrompter::stdio())
    }
}

/// Splits the declared prompts into values already supplied and fields still
/// to ask for. Empty supplied values count as missing.
pub fn merge_supplied<'a>(
    prompts: &'a [PromptField],
    supplied: &CollectedData,
) -> (CollectedData, Vec<&'a PromptField>) {
    let mut data = CollectedData::new();
    let mut missing = Vec::new();

    for field in prompts {
        match supplied.get(&field.name) {
            Some(value) if !value.is_empty() => {
                data.insert(field.name.clone(), value.clone());
            }
            _ => missing.push(field),
        }
    }

    (data, missing)
}

/// Builds the data set for a generator, asking only for fields that were not
/// supplied up front.
///
/// # Errors
/// * `Error::IoError` if reading an answer fails
pub fn collect_data(
    prompter: &dyn Prompter,
    prompts: &[PromptField],
    supplied: &CollectedData,
) -> Result<CollectedData> {
    let (mut data, missing) = merge_supplied(prompts, supplied);
    debug!("{} prompt(s) supplied, {} to ask", data.len(), missing.len());

    for field in missing {
        let value = prompter.input(&field.display_message())?;
        data.insert(field.name.clone(), value);
    }

    Ok(data)
}

/// Rejects supplied values for names the generator does not declare.
///
/// # Errors
/// * `Error::ArgumentError` naming the first unknown field
pub fn validate_supplied(prompts: &[PromptField], supplied: &CollectedData) -> Result<()> {
    match supplied.keys().find(|key| !prompts.iter().any(|field| &field.name == *key)) {
        Some(key) => Err(Error::ArgumentError(format!("unknown flag: --{key}"))),
        None => Ok(()),
    }
}
