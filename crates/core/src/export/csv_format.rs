use std::io::Write;

use crate::errors::CoreError;
use crate::models::ledger::Ledger;

/// Header row. Column labels are Turkish to stay compatible with files
/// produced by earlier versions of the calculator.
pub const HEADER: [&str; 4] = ["#", "Fiyat", "Miktar", "Maliyet"];

pub const TOTAL_COST_LABEL: &str = "Toplam Maliyet";
pub const TOTAL_QUANTITY_LABEL: &str = "Toplam Miktar";
pub const AVERAGE_PRICE_LABEL: &str = "Ortalama Fiyat";

/// Record terminator used for every row, the blank separator row included.
const TERMINATOR: &[u8] = b"\r\n";

/// Write the ledger as CSV.
///
/// Layout:
/// ```text
/// #,Fiyat,Miktar,Maliyet
/// 1,16,50,800
/// 2,13,50,650
///
/// Toplam Maliyet,1450
/// Toplam Miktar,100
/// Ortalama Fiyat,14.5
/// ```
///
/// Values are raw `f64`s in shortest round-trip form, never display-formatted.
pub fn write_csv<W: Write>(ledger: &Ledger, writer: W) -> Result<W, CoreError> {
    let mut wtr = csv_writer(writer);
    wtr.write_record(HEADER)?;
    for (idx, entry) in ledger.iter_numbered() {
        wtr.write_record([
            idx.to_string(),
            entry.price().to_string(),
            entry.quantity().to_string(),
            entry.cost().to_string(),
        ])?;
    }

    // The csv writer encodes an empty record as `""`; a truly blank line has
    // to go straight to the underlying writer.
    let mut inner = finish(wtr)?;
    inner.write_all(TERMINATOR)?;

    let totals = ledger.totals();
    let mut wtr = csv_writer(inner);
    wtr.write_record([TOTAL_COST_LABEL, totals.total_cost.to_string().as_str()])?;
    wtr.write_record([TOTAL_QUANTITY_LABEL, totals.total_quantity.to_string().as_str()])?;
    wtr.write_record([AVERAGE_PRICE_LABEL, totals.average_price.to_string().as_str()])?;
    finish(wtr)
}

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer)
}

fn finish<W: Write>(wtr: csv::Writer<W>) -> Result<W, CoreError> {
    wtr.into_inner()
        .map_err(|e| CoreError::FileIO(e.error().to_string()))
}
