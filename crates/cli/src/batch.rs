//! Line-oriented fallback: `<price> <quantity>` per line until a blank line
//! or end of input, then the totals.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use modtrader_core::Calculator;
use tracing::debug;

use crate::render;
use crate::BatchArgs;

pub fn run<R: BufRead, W: Write>(input: R, out: &mut W, prompt: bool, args: &BatchArgs) -> Result<()> {
    let mut calc = Calculator::new();

    if prompt {
        writeln!(out, "Enter one '<price> <quantity>' pair per line (e.g. 4870 90).")?;
        writeln!(out, "Finish with an empty line.")?;
    }

    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else { break };
        let line = line.context("failed to read input")?;
        let line = line.trim();
        if line.is_empty() {
            break;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [price, quantity] = fields.as_slice() else {
            writeln!(out, "Expected '<price> <quantity>', got: {line}")?;
            debug!(line, "wrong field count, skipped");
            continue;
        };

        if let Err(e) = calc.add_entry(price, quantity) {
            writeln!(out, "Invalid input: {e}")?;
            debug!(line, error = %e, "rejected line, skipped");
        }
    }

    if args.json {
        writeln!(out, "{}", calc.summary_json()?)?;
    } else {
        writeln!(out)?;
        render::plain_totals(out, &calc.totals())?;
    }

    if let Some(path) = &args.export {
        if calc.entry_count() == 0 {
            writeln!(out, "Nothing to export.")?;
        } else {
            calc.export_csv_to_file(path)
                .with_context(|| format!("failed to export CSV to {}", path.display()))?;
            writeln!(out, "Exported {} entries to {}", calc.entry_count(), path.display())?;
        }
    }

    Ok(())
}
