//! Text rendering shared by the batch and shell front ends.

use std::io::Write;

use modtrader_core::models::totals::Totals;
use modtrader_core::Calculator;

/// Totals with plain dot-decimal, six places, no grouping.
pub fn plain_totals<W: Write>(out: &mut W, totals: &Totals) -> std::io::Result<()> {
    writeln!(out, "Total cost:     {:.6}", totals.total_cost)?;
    writeln!(out, "Total quantity: {:.6}", totals.total_quantity)?;
    writeln!(out, "Average price:  {:.6}", totals.average_price)
}

/// Totals using the calculator's display settings.
pub fn display_totals<W: Write>(out: &mut W, calc: &Calculator) -> std::io::Result<()> {
    let totals = calc.totals();
    writeln!(out, "Total cost:     {}", calc.format_number(totals.total_cost))?;
    writeln!(out, "Total quantity: {}", calc.format_number(totals.total_quantity))?;
    writeln!(out, "Average price:  {}", calc.format_number(totals.average_price))
}

/// Numbered table of every entry.
pub fn entry_table<W: Write>(out: &mut W, calc: &Calculator) -> std::io::Result<()> {
    if calc.entry_count() == 0 {
        return writeln!(out, "No entries.");
    }
    writeln!(out, "{:>4}  {:>20}  {:>20}  {:>24}", "#", "Price", "Quantity", "Cost")?;
    for (idx, entry) in calc.ledger().iter_numbered() {
        writeln!(
            out,
            "{:>4}  {:>20}  {:>20}  {:>24}",
            idx,
            calc.format_number(entry.price()),
            calc.format_number(entry.quantity()),
            calc.format_number(entry.cost()),
        )?;
    }
    Ok(())
}
