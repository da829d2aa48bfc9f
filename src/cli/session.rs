//! The interactive command loop.
//!
//! One command per line: the first non-blank character selects it, case
//! insensitively. Insert and delete then read a key from the next line.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::cli::args::{Cli, OutputFormat};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::tree::{Key, KeyNotFoundError, RedBlackTree};

const MENU: &str = "Options:\nI - Insert\nP - Print\nD - Delete\nQ - Quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert,
    Print,
    Delete,
    Quit,
}

impl Command {
    /// Parses a menu line. Returns `None` for blank or unknown input.
    pub fn parse(line: &str) -> Option<Command> {
        match line.trim_start().chars().next()?.to_ascii_uppercase() {
            'I' => Some(Command::Insert),
            'P' => Some(Command::Print),
            'D' => Some(Command::Delete),
            'Q' => Some(Command::Quit),
            _ => None,
        }
    }
}

/// An interactive session driving one tree from `input`, reporting to `output`.
pub struct Session<R, W> {
    tree: RedBlackTree,
    input: R,
    output: W,
    format: OutputFormat,
    quiet: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session {
            tree: RedBlackTree::new(),
            input,
            output,
            format: OutputFormat::default(),
            quiet: false,
        }
    }

    /// Creates a session configured from command line arguments.
    pub fn from_cli(cli: &Cli, input: R, output: W) -> Self {
        Self::new(input, output)
            .with_format(cli.format)
            .with_quiet(cli.quiet)
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn tree(&self) -> &RedBlackTree {
        &self.tree
    }

    /// Consumes the session, returning the tree and the output sink.
    pub fn into_parts(self) -> (RedBlackTree, W) {
        (self.tree, self.output)
    }

    /// Runs until a quit command or end of input.
    pub fn run(&mut self) -> CliResult<()> {
        info!("session started");
        if !self.quiet {
            writeln!(self.output, "Red-black tree key set")?;
            writeln!(self.output, "\n{MENU}")?;
        }

        loop {
            self.prompt("\nEnter your choice: ")?;
            let Some(line) = self.read_line()? else {
                debug!("end of input");
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let command = Command::parse(&line);
            debug!(?command, "dispatch");
            match command {
                Some(Command::Insert) => self.insert()?,
                Some(Command::Print) => self.print()?,
                Some(Command::Delete) => self.delete()?,
                Some(Command::Quit) => {
                    if !self.quiet {
                        writeln!(self.output, "Exiting program. Goodbye!")?;
                    }
                    break;
                }
                None => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }

        self.output.flush()?;
        info!(len = self.tree.len(), "session finished");
        Ok(())
    }

    fn insert(&mut self) -> CliResult<()> {
        let Some(key) = self.read_key("Enter the key to insert: ")? else {
            return Ok(());
        };
        if self.tree.insert(key).is_err() {
            writeln!(self.output, "Duplicate keys are not allowed.")?;
        }
        Ok(())
    }

    fn print(&mut self) -> CliResult<()> {
        if self.tree.is_empty() && self.format == OutputFormat::Text {
            writeln!(self.output, "The tree is empty.")?;
            return Ok(());
        }
        output::render(&self.tree, self.format, &mut self.output)
    }

    fn delete(&mut self) -> CliResult<()> {
        if self.tree.is_empty() {
            writeln!(self.output, "The tree is empty. Nothing to delete.")?;
            return Ok(());
        }
        let Some(key) = self.read_key("Enter the key to delete: ")? else {
            return Ok(());
        };
        match self.tree.delete(key) {
            Ok(()) => writeln!(self.output, "Key {key} deleted successfully.")?,
            Err(KeyNotFoundError { key }) => {
                writeln!(self.output, "Key {key} not found in the tree.")?
            }
        }
        Ok(())
    }

    /// Prompts for and parses a key. `None` on end of input or a malformed key.
    fn read_key(&mut self, prompt: &str) -> CliResult<Option<Key>> {
        self.prompt(prompt)?;
        let Some(line) = self.read_line()? else {
            return Ok(None);
        };

        match line.trim().parse::<Key>() {
            Ok(key) => Ok(Some(key)),
            Err(err) => {
                warn!(input = line.trim(), %err, "rejected key");
                writeln!(self.output, "Invalid key '{}': expected an integer.", line.trim())?;
                Ok(None)
            }
        }
    }

    fn prompt(&mut self, text: &str) -> CliResult<()> {
        if !self.quiet {
            write!(self.output, "{text}")?;
            self.output.flush()?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> CliResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
