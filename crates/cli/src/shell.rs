//! Interactive session over a [`Calculator`].
//!
//! Every command mutates through the calculator and then re-reads whatever it
//! prints. Errors are reported per command and never end the session.

use std::io::{BufRead, Lines, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use modtrader_core::models::settings::DisplaySettings;
use modtrader_core::Calculator;
use tracing::debug;

use crate::render;

const HELP: &str = "\
Commands:
  add <price> <qty>     add an entry (the word 'add' is optional)
  undo                  remove the last entry
  delete <#> [<#> ...]  remove entries by their number in 'list'
  reset                 remove every entry (asks first)
  list                  show all entries
  totals                show total cost, total quantity, average price
  export <path>         write entries and totals to a CSV file
  help                  show this text
  quit                  leave";

#[derive(Debug, PartialEq)]
enum Command {
    Add { price: String, quantity: String },
    Undo,
    Delete(Vec<String>),
    Reset,
    List,
    Totals,
    Export(PathBuf),
    Help,
    Quit,
    Empty,
    Invalid(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&head, rest)) = words.split_first() else {
            return Command::Empty;
        };

        match (head.to_ascii_lowercase().as_str(), rest) {
            ("add", [price, quantity]) => Command::Add {
                price: price.to_string(),
                quantity: quantity.to_string(),
            },
            ("add", _) => Command::Invalid("usage: add <price> <qty>".into()),
            ("undo", []) => Command::Undo,
            ("delete" | "del" | "rm", []) => {
                Command::Invalid("usage: delete <#> [<#> ...]".into())
            }
            ("delete" | "del" | "rm", indices) => {
                Command::Delete(indices.iter().map(|s| s.to_string()).collect())
            }
            ("reset", []) => Command::Reset,
            ("list" | "ls", []) => Command::List,
            ("totals", []) => Command::Totals,
            ("export", []) => Command::Invalid("usage: export <path>".into()),
            ("export", _) => {
                // Paths may contain spaces; take the rest of the line verbatim.
                let path = line.trim_start()[head.len()..].trim();
                Command::Export(PathBuf::from(path))
            }
            ("help" | "?", _) => Command::Help,
            ("quit" | "exit" | "q", []) => Command::Quit,
            ("undo" | "reset" | "list" | "ls" | "totals" | "quit" | "exit" | "q", _) => {
                Command::Invalid(format!("'{head}' takes no arguments"))
            }
            (_, [quantity]) => Command::Add {
                price: head.to_string(),
                quantity: quantity.to_string(),
            },
            _ => Command::Invalid(format!("unknown command '{head}' (try 'help')")),
        }
    }
}

pub struct Shell<R, W> {
    lines: Lines<R>,
    out: W,
    prompt: bool,
    calc: Calculator,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W, prompt: bool, settings: DisplaySettings) -> Self {
        Self {
            lines: input.lines(),
            out,
            prompt,
            calc: Calculator::with_settings(settings),
        }
    }

    pub fn run(mut self) -> Result<()> {
        writeln!(self.out, "modtrader: weighted average price calculator. Type 'help' for commands.")?;

        while let Some(line) = self.read_line("> ")? {
            let command = Command::parse(&line);
            debug!(?command, "shell command");
            if command == Command::Quit {
                break;
            }
            self.execute(command)?;
        }

        if self.calc.has_unexported_changes() {
            writeln!(self.out, "Note: changes since the last export were not saved.")?;
        }
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        if self.prompt {
            write!(self.out, "{prompt}")?;
            self.out.flush()?;
        }
        self.lines
            .next()
            .transpose()
            .context("failed to read input")
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Add { price, quantity } => match self.calc.add_entry(&price, &quantity) {
                Ok(entry) => {
                    writeln!(
                        self.out,
                        "#{}  {} x {} = {}",
                        self.calc.entry_count(),
                        self.calc.format_number(entry.price()),
                        self.calc.format_number(entry.quantity()),
                        self.calc.format_number(entry.cost()),
                    )?;
                    render::display_totals(&mut self.out, &self.calc)?;
                }
                Err(e) => writeln!(self.out, "Error: {e}")?,
            },
            Command::Undo => match self.calc.undo() {
                Some(entry) => {
                    writeln!(
                        self.out,
                        "Removed {} x {}",
                        self.calc.format_number(entry.price()),
                        self.calc.format_number(entry.quantity()),
                    )?;
                    render::display_totals(&mut self.out, &self.calc)?;
                }
                None => writeln!(self.out, "Nothing to undo.")?,
            },
            Command::Delete(args) => {
                let mut indices = Vec::with_capacity(args.len());
                for arg in &args {
                    match arg.parse::<usize>() {
                        Ok(i) => indices.push(i),
                        Err(_) => writeln!(self.out, "Skipping '{arg}': not an entry number")?,
                    }
                }
                let removed = self.calc.delete(indices);
                if removed.is_empty() {
                    writeln!(self.out, "No matching entries.")?;
                } else {
                    writeln!(self.out, "Deleted {} entries.", removed.len())?;
                    render::display_totals(&mut self.out, &self.calc)?;
                }
            }
            Command::Reset => {
                if self.confirm("Reset all entries? [y/N] ")? {
                    self.calc.reset();
                    writeln!(self.out, "All entries removed.")?;
                } else {
                    writeln!(self.out, "Reset cancelled.")?;
                }
            }
            Command::List => render::entry_table(&mut self.out, &self.calc)?,
            Command::Totals => render::display_totals(&mut self.out, &self.calc)?,
            Command::Export(path) => match self.calc.export_csv_to_file(&path) {
                Ok(()) => writeln!(self.out, "Saved CSV: {}", path.display())?,
                Err(e) => writeln!(self.out, "Export failed: {e}")?,
            },
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Invalid(msg) => writeln!(self.out, "{msg}")?,
            Command::Empty | Command::Quit => {}
        }
        Ok(())
    }

    /// Ask a yes/no question; anything but `y`/`yes` (or end of input) is "no".
    fn confirm(&mut self, question: &str) -> Result<bool> {
        if !self.prompt {
            writeln!(self.out, "{}", question.trim_end())?;
        }
        let answer = self.read_line(question)?.unwrap_or_default();
        Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
    }
}
